// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

use std::sync::Arc;

use super::UpdatableTexture;
use crate::core::rhi::{GpuTextureId, TextureBackend, TextureDescriptor};
use crate::core::{Result, XrError};

/// Reference to a render texture owned by someone else.
///
/// Owns nothing: updates re-resolve the indirection and destroy only forgets
/// the resolved texture. Because there is nothing to revive, an update after
/// destroy resolves again.
pub struct RenderTextureRef {
    backend: Arc<dyn TextureBackend>,
    descriptor: TextureDescriptor,
    texture: Option<GpuTextureId>,
    destroyed: bool,
}

impl RenderTextureRef {
    pub fn new(backend: Arc<dyn TextureBackend>, descriptor: &TextureDescriptor) -> Result<Self> {
        if !descriptor.kind.is_render_texture_ref() {
            return Err(XrError::TypeMismatch {
                variant: "RenderTextureRef",
                actual: descriptor.kind,
            });
        }
        let texture = backend.resolve_render_texture_ref(descriptor.native_handle);
        Ok(Self {
            backend,
            descriptor: *descriptor,
            texture,
            destroyed: false,
        })
    }
}

impl UpdatableTexture for RenderTextureRef {
    fn descriptor(&self) -> &TextureDescriptor {
        &self.descriptor
    }

    fn texture(&self) -> Option<GpuTextureId> {
        self.texture
    }

    fn try_update_from_descriptor(&mut self, descriptor: &TextureDescriptor) -> Result<bool> {
        if !descriptor.kind.is_render_texture_ref() {
            tracing::warn!(
                "RenderTextureRef: ignoring {:?} descriptor for {}",
                descriptor.kind,
                descriptor.native_handle
            );
            return Ok(false);
        }
        self.descriptor = *descriptor;
        self.texture = self
            .backend
            .resolve_render_texture_ref(descriptor.native_handle);
        self.destroyed = false;
        Ok(true)
    }

    fn destroy_texture(&mut self) {
        self.texture = None;
        self.destroyed = true;
    }

    fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}

impl PartialEq for RenderTextureRef {
    fn eq(&self, other: &Self) -> bool {
        self.descriptor == other.descriptor && self.texture == other.texture
    }
}

impl std::fmt::Debug for RenderTextureRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderTextureRef")
            .field("descriptor", &self.descriptor)
            .field("texture", &self.texture)
            .finish()
    }
}
