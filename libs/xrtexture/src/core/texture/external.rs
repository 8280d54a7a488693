// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Shared state machine for textures wrapping a provider-owned native handle.

use std::sync::Arc;

use crate::core::rhi::{
    ExternalTextureRequest, GpuTextureId, TextureBackend, TextureDescriptor, TextureDimension,
    TextureKind,
};
use crate::core::{Result, XrError};

pub(crate) struct ExternalTexture {
    backend: Arc<dyn TextureBackend>,
    variant: &'static str,
    dimension: TextureDimension,
    expected_kind: TextureKind,
    descriptor: TextureDescriptor,
    texture: Option<GpuTextureId>,
    destroyed: bool,
}

impl ExternalTexture {
    pub(crate) fn new(
        backend: Arc<dyn TextureBackend>,
        variant: &'static str,
        dimension: TextureDimension,
        expected_kind: TextureKind,
        descriptor: &TextureDescriptor,
    ) -> Result<Self> {
        if descriptor.kind != expected_kind {
            return Err(XrError::TypeMismatch {
                variant,
                actual: descriptor.kind,
            });
        }

        let mut this = Self {
            backend,
            variant,
            dimension,
            expected_kind,
            descriptor: *descriptor,
            texture: None,
            destroyed: false,
        };
        if descriptor.is_usable() {
            this.texture = Some(this.create(descriptor)?);
        }
        Ok(this)
    }

    fn create(&self, descriptor: &TextureDescriptor) -> Result<GpuTextureId> {
        let request = ExternalTextureRequest::from_descriptor(self.dimension, descriptor)?;
        let texture = self.backend.create_external_texture(&request)?;
        tracing::debug!(
            "{}: created {} for {} ({}x{}x{}, {:?})",
            self.variant,
            texture,
            descriptor.native_handle,
            descriptor.width,
            descriptor.height,
            descriptor.depth,
            request.format
        );
        Ok(texture)
    }

    fn release(&mut self) {
        if let Some(texture) = self.texture.take() {
            self.backend.destroy_texture(texture);
        }
    }

    pub(crate) fn descriptor(&self) -> &TextureDescriptor {
        &self.descriptor
    }

    pub(crate) fn texture(&self) -> Option<GpuTextureId> {
        self.texture
    }

    pub(crate) fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub(crate) fn try_update(&mut self, descriptor: &TextureDescriptor) -> Result<bool> {
        if self.destroyed {
            tracing::warn!(
                "{}: update for {} after destroy; texture must be reconstructed",
                self.variant,
                descriptor.native_handle
            );
            return Ok(false);
        }
        if descriptor.kind != self.expected_kind {
            tracing::warn!(
                "{}: ignoring {:?} descriptor for {}",
                self.variant,
                descriptor.kind,
                descriptor.native_handle
            );
            return Ok(false);
        }
        if !descriptor.is_usable() {
            self.release();
            self.descriptor = *descriptor;
            return Ok(false);
        }

        match self.texture {
            Some(_) if *descriptor == self.descriptor => Ok(true),
            Some(texture) if descriptor.has_identical_metadata(&self.descriptor) => {
                self.backend
                    .update_external_texture(texture, descriptor.native_handle)?;
                self.descriptor = *descriptor;
                Ok(true)
            }
            _ => {
                self.release();
                let texture = self.create(descriptor)?;
                self.texture = Some(texture);
                self.descriptor = *descriptor;
                Ok(true)
            }
        }
    }

    pub(crate) fn destroy(&mut self) {
        self.release();
        self.destroyed = true;
    }
}

impl PartialEq for ExternalTexture {
    fn eq(&self, other: &Self) -> bool {
        self.descriptor == other.descriptor && self.texture == other.texture
    }
}

impl Drop for ExternalTexture {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for ExternalTexture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(self.variant)
            .field("descriptor", &self.descriptor)
            .field("texture", &self.texture)
            .field("destroyed", &self.destroyed)
            .finish()
    }
}
