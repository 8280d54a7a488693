// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Descriptor-driven texture wrapper selection.

use std::sync::Arc;

use super::{Cubemap, RenderTexture, RenderTextureRef, Texture2d, Texture3d, UpdatableTexture};
use crate::core::rhi::{GpuTextureId, TextureBackend, TextureDescriptor, TextureKind};
use crate::core::{Result, XrError};

/// One of the concrete [`UpdatableTexture`] implementations.
#[derive(Debug, PartialEq)]
pub enum AnyUpdatableTexture {
    Texture2d(Texture2d),
    Texture3d(Texture3d),
    Cubemap(Cubemap),
    RenderTexture(RenderTexture),
    RenderTextureRef(RenderTextureRef),
}

impl AnyUpdatableTexture {
    /// Build the wrapper matching `descriptor.kind`.
    pub fn from_descriptor(
        backend: Arc<dyn TextureBackend>,
        descriptor: &TextureDescriptor,
    ) -> Result<Self> {
        Ok(match descriptor.kind {
            TextureKind::Texture2d => Self::Texture2d(Texture2d::new(backend, descriptor)?),
            TextureKind::Texture3d => Self::Texture3d(Texture3d::new(backend, descriptor)?),
            TextureKind::Cube => Self::Cubemap(Cubemap::new(backend, descriptor)?),
            TextureKind::ColorRenderTexture | TextureKind::DepthRenderTexture => {
                Self::RenderTexture(RenderTexture::new(backend, descriptor)?)
            }
            TextureKind::ColorRenderTextureRef | TextureKind::DepthRenderTextureRef => {
                Self::RenderTextureRef(RenderTextureRef::new(backend, descriptor)?)
            }
            kind @ TextureKind::Unknown(_) => return Err(XrError::UnsupportedTextureType(kind)),
        })
    }

    fn as_dyn(&self) -> &dyn UpdatableTexture {
        match self {
            Self::Texture2d(t) => t,
            Self::Texture3d(t) => t,
            Self::Cubemap(t) => t,
            Self::RenderTexture(t) => t,
            Self::RenderTextureRef(t) => t,
        }
    }

    fn as_dyn_mut(&mut self) -> &mut dyn UpdatableTexture {
        match self {
            Self::Texture2d(t) => t,
            Self::Texture3d(t) => t,
            Self::Cubemap(t) => t,
            Self::RenderTexture(t) => t,
            Self::RenderTextureRef(t) => t,
        }
    }
}

impl UpdatableTexture for AnyUpdatableTexture {
    fn descriptor(&self) -> &TextureDescriptor {
        self.as_dyn().descriptor()
    }

    fn texture(&self) -> Option<GpuTextureId> {
        self.as_dyn().texture()
    }

    fn try_update_from_descriptor(&mut self, descriptor: &TextureDescriptor) -> Result<bool> {
        self.as_dyn_mut().try_update_from_descriptor(descriptor)
    }

    fn destroy_texture(&mut self) {
        self.as_dyn_mut().destroy_texture();
    }

    fn is_destroyed(&self) -> bool {
        self.as_dyn().is_destroyed()
    }
}

/// A descriptor paired with the texture wrapper built for it.
///
/// Owns its wrapper exclusively; dropping a `TextureInfo` releases the GPU
/// object.
#[derive(Debug, PartialEq)]
pub struct TextureInfo {
    texture: AnyUpdatableTexture,
}

impl TextureInfo {
    /// Fails with [`XrError::UnsupportedTextureType`] for kinds without a wrapper.
    pub fn new(backend: Arc<dyn TextureBackend>, descriptor: &TextureDescriptor) -> Result<Self> {
        Ok(Self {
            texture: AnyUpdatableTexture::from_descriptor(backend, descriptor)?,
        })
    }

    pub fn try_update_texture_info(&mut self, descriptor: &TextureDescriptor) -> Result<bool> {
        self.texture.try_update_from_descriptor(descriptor)
    }

    pub fn destroy_texture(&mut self) {
        self.texture.destroy_texture();
    }

    pub fn descriptor(&self) -> &TextureDescriptor {
        self.texture.descriptor()
    }

    pub fn texture(&self) -> Option<GpuTextureId> {
        self.texture.texture()
    }

    pub fn kind(&self) -> TextureKind {
        self.descriptor().kind
    }

    pub fn property_id(&self) -> i32 {
        self.descriptor().property_id
    }

    pub fn is_destroyed(&self) -> bool {
        self.texture.is_destroyed()
    }

    pub fn updatable_texture(&self) -> &AnyUpdatableTexture {
        &self.texture
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rhi::{HeadlessDisplayMode, HeadlessTextureBackend, NativeFormat, NativeHandle};

    #[test]
    fn test_dispatch_by_kind() {
        let backend = Arc::new(HeadlessTextureBackend::with_display(
            HeadlessDisplayMode::Synchronous,
        ));
        let cases = [
            TextureDescriptor::new_2d(8, 8, NativeFormat::R8).with_handle(1),
            TextureDescriptor::new_3d(8, 8, 2, NativeFormat::R8).with_handle(2),
            TextureDescriptor::new_cube(8, NativeFormat::R8).with_handle(3),
            TextureDescriptor::render_texture(8, 8, NativeFormat::DepthFloat32, true),
            TextureDescriptor::render_texture_ref(8, 8, NativeFormat::Rgba32, false).with_handle(4),
        ];

        let infos: Vec<_> = cases
            .iter()
            .map(|d| TextureInfo::new(backend.clone(), d).unwrap())
            .collect();

        assert!(matches!(infos[0].updatable_texture(), AnyUpdatableTexture::Texture2d(_)));
        assert!(matches!(infos[1].updatable_texture(), AnyUpdatableTexture::Texture3d(_)));
        assert!(matches!(infos[2].updatable_texture(), AnyUpdatableTexture::Cubemap(_)));
        assert!(matches!(infos[3].updatable_texture(), AnyUpdatableTexture::RenderTexture(_)));
        assert!(matches!(
            infos[4].updatable_texture(),
            AnyUpdatableTexture::RenderTextureRef(_)
        ));
        for (info, d) in infos.iter().zip(cases.iter()) {
            assert_eq!(info.kind(), d.kind);
        }
    }

    #[test]
    fn test_unknown_kind_is_unsupported() {
        let backend = Arc::new(HeadlessTextureBackend::new());
        let d = TextureDescriptor::new_2d(8, 8, NativeFormat::R8)
            .with_handle(1)
            .with_kind_override(TextureKind::Unknown(42));

        match TextureInfo::new(backend, &d) {
            Err(XrError::UnsupportedTextureType(TextureKind::Unknown(42))) => {}
            other => panic!("expected UnsupportedTextureType, got {:?}", other),
        }
    }

    #[test]
    fn test_update_and_destroy_delegate() {
        let backend = Arc::new(HeadlessTextureBackend::new());
        let d = TextureDescriptor::new_2d(8, 8, NativeFormat::R8)
            .with_handle(1)
            .with_property_id(7);
        let mut info = TextureInfo::new(backend.clone(), &d).unwrap();
        let original = info.texture();

        assert!(info.try_update_texture_info(&d.with_handle(2)).unwrap());
        assert_eq!(info.texture(), original);
        assert_eq!(info.property_id(), 7);

        info.destroy_texture();
        info.destroy_texture();
        assert!(info.is_destroyed());
        assert!(info.texture().is_none());
        assert_eq!(backend.stats().textures_live, 0);
    }

    #[test]
    fn test_equality_follows_owned_texture() {
        let backend = Arc::new(HeadlessTextureBackend::with_display(
            HeadlessDisplayMode::Synchronous,
        ));

        // Render textures: same descriptor, distinct GPU objects.
        let rt = TextureDescriptor::render_texture(8, 8, NativeFormat::DepthFloat32, true);
        let first = TextureInfo::new(backend.clone(), &rt).unwrap();
        let second = TextureInfo::new(backend.clone(), &rt).unwrap();
        assert_eq!(first, first);
        assert_ne!(first, second);

        // References resolving to the same texture compare equal.
        let target = GpuTextureId::new(500);
        backend.register_render_texture_ref(NativeHandle::new(4), target);
        let rd = TextureDescriptor::render_texture_ref(8, 8, NativeFormat::Rgba32, false)
            .with_handle(4);
        let left = TextureInfo::new(backend.clone(), &rd).unwrap();
        let mut right = TextureInfo::new(backend.clone(), &rd).unwrap();
        assert_eq!(left.texture(), Some(target));
        assert_eq!(left, right);

        right.destroy_texture();
        assert_ne!(left, right);
        assert_ne!(first, left);
    }
}
