// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

use std::sync::Arc;

use super::external::ExternalTexture;
use super::UpdatableTexture;
use crate::core::rhi::{
    GpuTextureId, TextureBackend, TextureDescriptor, TextureDimension, TextureKind,
};
use crate::core::Result;

/// Cube texture wrapping a provider-owned native handle, e.g. an environment probe.
#[derive(Debug, PartialEq)]
pub struct Cubemap {
    inner: ExternalTexture,
}

impl Cubemap {
    pub fn new(backend: Arc<dyn TextureBackend>, descriptor: &TextureDescriptor) -> Result<Self> {
        Ok(Self {
            inner: ExternalTexture::new(
                backend,
                "Cubemap",
                TextureDimension::Cube,
                TextureKind::Cube,
                descriptor,
            )?,
        })
    }
}

impl UpdatableTexture for Cubemap {
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
