// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

use thiserror::Error;

use super::rhi::{NativeFormat, NativeHandle, TextureKind};

#[derive(Error, Debug)]
pub enum XrError {
    #[error("Texture type mismatch: {variant} cannot wrap a {actual:?} descriptor")]
    TypeMismatch {
        variant: &'static str,
        actual: TextureKind,
    },

    #[error("Unsupported texture format: {0:?}")]
    UnsupportedFormat(NativeFormat),

    #[error("Unsupported texture type: {0:?}")]
    UnsupportedTextureType(TextureKind),

    #[error("Dependency unavailable: {0}")]
    DependencyUnavailable(String),

    #[error("Invalid swapchain: {0}")]
    InvalidSwapchain(String),

    #[error("Texture {handle} is not part of the swapchain")]
    TextureNotInSwapchain { handle: NativeHandle },

    #[error("Swapchain contract violation: {0}")]
    SwapchainContract(String),

    #[error("Texture backend error: {0}")]
    Backend(String),

    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl XrError {
    /// Whether the same operation may succeed on a later frame.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::DependencyUnavailable(_))
    }
}

pub type Result<T> = std::result::Result<T, XrError>;
