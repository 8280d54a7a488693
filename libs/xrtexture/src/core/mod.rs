// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

pub mod config;
pub mod error;
pub mod logging;
pub mod occlusion;
pub mod rhi;
pub mod swapchain;
pub mod texture;

pub use config::{OcclusionConfig, SwapchainMode};
pub use error::*;
pub use logging::init_logging;
pub use occlusion::*;
pub use rhi::{
    GpuTextureId, NativeFormat, NativeHandle, TextureBackend, TextureDescriptor, TextureKind,
};
pub use swapchain::*;
pub use texture::*;
