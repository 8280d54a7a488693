// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

use std::sync::Arc;

use super::external::ExternalTexture;
use super::UpdatableTexture;
use crate::core::rhi::{
    GpuTextureId, TextureBackend, TextureDescriptor, TextureDimension, TextureKind,
};
use crate::core::Result;

/// Volume texture wrapping a provider-owned native handle.
#[derive(Debug, PartialEq)]
pub struct Texture3d {
    inner: ExternalTexture,
}

impl Texture3d {
    pub fn new(backend: Arc<dyn TextureBackend>, descriptor: &TextureDescriptor) -> Result<Self> {
        Ok(Self {
            inner: ExternalTexture::new(
                backend,
                "Texture3d",
                TextureDimension::D3,
                TextureKind::Texture3d,
                descriptor,
            )?,
        })
    }

    pub fn depth(&self) -> u32 {
        self.inner.descriptor().depth
    }
}

impl UpdatableTexture for Texture3d {
    fn descriptor(&self) -> &TextureDescriptor {
        self.inner.descriptor()
    }

    fn texture(&self) -> Option<GpuTextureId> {
        self.inner.texture()
    }

    fn try_update_from_descriptor(&mut self, descriptor: &TextureDescriptor) -> Result<bool> {
        self.inner.try_update(descriptor)
    }

    fn destroy_texture(&mut self) {
        self.inner.destroy();
    }

    fn is_destroyed(&self) -> bool {
        self.inner.is_destroyed()
    }
}
