// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Platform texture layer seams.
//!
//! The host engine (or [`HeadlessTextureBackend`](super::HeadlessTextureBackend)
//! in tests) implements these traits; the texture wrappers only ever talk to
//! GPU objects through them.

use std::fmt;
use std::sync::Arc;

use super::{NativeHandle, TextureDescriptor, TextureFormat};
use crate::core::Result;

/// Identity of a GPU texture object created by a backend.
///
/// Identity, not content: two ids are equal only if they name the same object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GpuTextureId(u64);

impl GpuTextureId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for GpuTextureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gpu#{}", self.0)
    }
}

/// Shape of an externally backed texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureDimension {
    D2,
    D3,
    Cube,
}

/// Arguments for wrapping a native handle in a GPU texture object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExternalTextureRequest {
    pub dimension: TextureDimension,
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    pub mip_count: u32,
    pub format: TextureFormat,
    pub native_handle: NativeHandle,
}

impl ExternalTextureRequest {
    /// Build a request, mapping the native format.
    pub fn from_descriptor(
        dimension: TextureDimension,
        descriptor: &TextureDescriptor,
    ) -> Result<Self> {
        Ok(Self {
            dimension,
            width: descriptor.width,
            height: descriptor.height,
            depth: descriptor.depth,
            mip_count: descriptor.mip_count,
            format: TextureFormat::try_from(descriptor.format)?,
            native_handle: descriptor.native_handle,
        })
    }
}

/// Arguments for a render texture owned by the display subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderTextureRequestDescriptor {
    pub width: u32,
    pub height: u32,
    pub format: TextureFormat,
    pub depth: bool,
    pub property_id: i32,
}

impl RenderTextureRequestDescriptor {
    pub fn from_descriptor(descriptor: &TextureDescriptor) -> Result<Self> {
        Ok(Self {
            width: descriptor.width,
            height: descriptor.height,
            format: TextureFormat::try_from(descriptor.format)?,
            depth: descriptor.kind.is_depth(),
            property_id: descriptor.property_id,
        })
    }
}

/// Ticket for a render texture whose creation has not completed yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderTextureTicket(pub u64);

/// Outcome of asking the display subsystem for a render texture.
///
/// Backends that create render textures synchronously answer `Ready`; others
/// hand out a ticket to poll on later frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderTextureRequest {
    Ready(GpuTextureId),
    Pending(RenderTextureTicket),
}

/// Display subsystem that owns render texture creation.
pub trait DisplaySubsystem: Send + Sync {
    fn request_render_texture(
        &self,
        descriptor: &RenderTextureRequestDescriptor,
    ) -> Result<RenderTextureRequest>;

    /// `Some` once the ticket's texture exists. Must not re-request creation.
    fn poll_render_texture(&self, ticket: RenderTextureTicket) -> Option<GpuTextureId>;

    fn release_render_texture(&self, texture: GpuTextureId);

    /// Drop an outstanding request.
    fn cancel_render_texture(&self, _ticket: RenderTextureTicket) {}
}

/// GPU texture operations keyed by native handle.
pub trait TextureBackend: Send + Sync {
    /// Create a texture object wrapping `request.native_handle`.
    fn create_external_texture(&self, request: &ExternalTextureRequest) -> Result<GpuTextureId>;

    /// Point an existing texture object at a new native handle in place.
    fn update_external_texture(&self, texture: GpuTextureId, handle: NativeHandle) -> Result<()>;

    fn destroy_texture(&self, texture: GpuTextureId);

    /// `None` while the display subsystem is not loaded.
    fn display_subsystem(&self) -> Option<Arc<dyn DisplaySubsystem>>;

    /// Resolve a render texture reference to the texture it currently names.
    fn resolve_render_texture_ref(&self, handle: NativeHandle) -> Option<GpuTextureId>;
}
