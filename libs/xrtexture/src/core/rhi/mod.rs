// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Render Hardware Interface (RHI) - descriptors, formats and the platform texture layer.

mod backend;
mod descriptor;
mod format;
mod headless;

pub use backend::{
    DisplaySubsystem, ExternalTextureRequest, GpuTextureId, RenderTextureRequest,
    RenderTextureRequestDescriptor, RenderTextureTicket, TextureBackend, TextureDimension,
};
pub use descriptor::{NativeFormat, NativeHandle, TextureDescriptor, TextureKind};
pub use format::TextureFormat;
pub use headless::{HeadlessDisplayMode, HeadlessStats, HeadlessTexture, HeadlessTextureBackend};
