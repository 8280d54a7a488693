// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Per-frame texture descriptors handed over by the AR provider.

use std::fmt;

/// Opaque native texture identity (a pointer-sized handle owned by the provider).
///
/// `0` is the null handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct NativeHandle(usize);

impl NativeHandle {
    pub const NULL: Self = Self(0);

    pub const fn new(raw: usize) -> Self {
        Self(raw)
    }

    pub const fn raw(&self) -> usize {
        self.0
    }

    pub const fn is_null(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for NativeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Declared texture kind of a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureKind {
    Texture2d,
    Texture3d,
    Cube,
    ColorRenderTexture,
    DepthRenderTexture,
    ColorRenderTextureRef,
    DepthRenderTextureRef,
    /// Raw kind tag this crate has no wrapper for.
    Unknown(u32),
}

impl TextureKind {
    pub fn is_render_texture(&self) -> bool {
        matches!(self, Self::ColorRenderTexture | Self::DepthRenderTexture)
    }

    pub fn is_render_texture_ref(&self) -> bool {
        matches!(
            self,
            Self::ColorRenderTextureRef | Self::DepthRenderTextureRef
        )
    }

    pub fn is_depth(&self) -> bool {
        matches!(self, Self::DepthRenderTexture | Self::DepthRenderTextureRef)
    }
}

/// Pixel format as reported by the provider.
///
/// Backends map these onto [`TextureFormat`](super::TextureFormat); not every
/// native format has an engine counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeFormat {
    R8,
    R16,
    RHalf,
    RFloat,
    RgHalf,
    RgFloat,
    Rgba32,
    Bgra32,
    RgbaHalf,
    RgbaFloat,
    Depth16,
    DepthFloat32,
    /// Bi-planar camera format, sampled through a conversion pass instead.
    Yuv420,
    Unknown(u32),
}

/// Describes one native GPU texture for one frame.
///
/// Two descriptors with equal fields except [`native_handle`](Self::native_handle)
/// are *metadata-identical*: the wrapped GPU object can be rebound instead of
/// recreated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureDescriptor {
    pub native_handle: NativeHandle,
    pub width: u32,
    pub height: u32,
    /// Depth for 3D textures, array length otherwise.
    pub depth: u32,
    pub mip_count: u32,
    pub format: NativeFormat,
    pub kind: TextureKind,
    /// Shader property id the texture binds to.
    pub property_id: i32,
    pub valid: bool,
}

impl TextureDescriptor {
    fn with_kind(kind: TextureKind, width: u32, height: u32, format: NativeFormat) -> Self {
        Self {
            native_handle: NativeHandle::NULL,
            width,
            height,
            depth: 1,
            mip_count: 1,
            format,
            kind,
            property_id: 0,
            valid: true,
        }
    }

    pub fn new_2d(width: u32, height: u32, format: NativeFormat) -> Self {
        Self::with_kind(TextureKind::Texture2d, width, height, format)
    }

    pub fn new_3d(width: u32, height: u32, depth: u32, format: NativeFormat) -> Self {
        Self {
            depth,
            ..Self::with_kind(TextureKind::Texture3d, width, height, format)
        }
    }

    pub fn new_cube(size: u32, format: NativeFormat) -> Self {
        Self::with_kind(TextureKind::Cube, size, size, format)
    }

    /// Render texture created through the display subsystem.
    pub fn render_texture(width: u32, height: u32, format: NativeFormat, depth: bool) -> Self {
        let kind = if depth {
            TextureKind::DepthRenderTexture
        } else {
            TextureKind::ColorRenderTexture
        };
        Self::with_kind(kind, width, height, format)
    }

    /// Reference to a render texture owned elsewhere.
    pub fn render_texture_ref(width: u32, height: u32, format: NativeFormat, depth: bool) -> Self {
        let kind = if depth {
            TextureKind::DepthRenderTextureRef
        } else {
            TextureKind::ColorRenderTextureRef
        };
        Self::with_kind(kind, width, height, format)
    }

    pub fn with_handle(mut self, handle: usize) -> Self {
        self.native_handle = NativeHandle::new(handle);
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_format(mut self, format: NativeFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_mip_count(mut self, mip_count: u32) -> Self {
        self.mip_count = mip_count;
        self
    }

    pub fn with_property_id(mut self, property_id: i32) -> Self {
        self.property_id = property_id;
        self
    }

    pub fn with_kind_override(mut self, kind: TextureKind) -> Self {
        self.kind = kind;
        self
    }

    /// Mark the descriptor as not pointing at a usable texture this frame.
    pub fn invalid(mut self) -> Self {
        self.valid = false;
        self
    }

    /// True when every field except the native handle matches.
    pub fn has_identical_metadata(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.depth == other.depth
            && self.mip_count == other.mip_count
            && self.format == other.format
            && self.kind == other.kind
            && self.property_id == other.property_id
            && self.valid == other.valid
    }

    /// Valid and backed by a non-null native handle.
    pub fn is_usable(&self) -> bool {
        self.valid && !self.native_handle.is_null()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_identity_ignores_handle() {
        let a = TextureDescriptor::new_2d(64, 64, NativeFormat::RFloat).with_handle(1);
        let b = a.with_handle(2);

        assert_ne!(a, b);
        assert!(a.has_identical_metadata(&b));
    }

    #[test]
    fn test_metadata_identity_detects_changes() {
        let a = TextureDescriptor::new_2d(64, 64, NativeFormat::RFloat).with_handle(1);

        assert!(!a.has_identical_metadata(&a.with_size(128, 64)));
        assert!(!a.has_identical_metadata(&a.with_format(NativeFormat::RHalf)));
        assert!(!a.has_identical_metadata(&a.with_property_id(9)));
        assert!(!a.has_identical_metadata(&a.with_mip_count(4)));
        assert!(!a.has_identical_metadata(&a.invalid()));
    }

    #[test]
    fn test_usable_requires_valid_non_null() {
        let d = TextureDescriptor::new_cube(32, NativeFormat::RgbaHalf);
        assert!(!d.is_usable());
        assert!(d.with_handle(5).is_usable());
        assert!(!d.with_handle(5).invalid().is_usable());
    }

    #[test]
    fn test_kind_helpers() {
        let depth = TextureDescriptor::render_texture(8, 8, NativeFormat::DepthFloat32, true);
        assert!(depth.kind.is_render_texture());
        assert!(depth.kind.is_depth());

        let color_ref = TextureDescriptor::render_texture_ref(8, 8, NativeFormat::Rgba32, false);
        assert!(color_ref.kind.is_render_texture_ref());
        assert!(!color_ref.kind.is_depth());
    }

    #[test]
    fn test_handle_display() {
        assert_eq!(NativeHandle::new(255).to_string(), "0xff");
        assert!(NativeHandle::NULL.is_null());
    }
}
