// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Engine texture formats and the native-format mapping.

use super::NativeFormat;
use crate::core::{Result, XrError};

/// Texture formats the backends can allocate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum TextureFormat {
    /// 8-bit single channel, unsigned normalized.
    R8Unorm = 0,
    /// 16-bit single channel, unsigned normalized.
    R16Unorm = 1,
    R16Float = 2,
    R32Float = 3,
    Rg16Float = 4,
    Rg32Float = 5,
    /// 8-bit RGBA, unsigned normalized.
    Rgba8Unorm = 6,
    /// 8-bit BGRA, unsigned normalized.
    Bgra8Unorm = 7,
    Rgba16Float = 8,
    Rgba32Float = 9,
    Depth16Unorm = 10,
    Depth32Float = 11,
}

impl TryFrom<NativeFormat> for TextureFormat {
    type Error = XrError;

    fn try_from(format: NativeFormat) -> Result<Self> {
        let mapped = match format {
            NativeFormat::R8 => Self::R8Unorm,
            NativeFormat::R16 => Self::R16Unorm,
            NativeFormat::RHalf => Self::R16Float,
            NativeFormat::RFloat => Self::R32Float,
            NativeFormat::RgHalf => Self::Rg16Float,
            NativeFormat::RgFloat => Self::Rg32Float,
            NativeFormat::Rgba32 => Self::Rgba8Unorm,
            NativeFormat::Bgra32 => Self::Bgra8Unorm,
            NativeFormat::RgbaHalf => Self::Rgba16Float,
            NativeFormat::RgbaFloat => Self::Rgba32Float,
            NativeFormat::Depth16 => Self::Depth16Unorm,
            NativeFormat::DepthFloat32 => Self::Depth32Float,
            NativeFormat::Yuv420 | NativeFormat::Unknown(_) => {
                return Err(XrError::UnsupportedFormat(format));
            }
        };
        Ok(mapped)
    }
}
