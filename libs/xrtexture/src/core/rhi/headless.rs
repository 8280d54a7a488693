// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! In-memory texture backend.
//!
//! Keeps a table of live texture objects and counts every create, rebind and
//! destroy so callers can observe texture churn without a GPU. The display
//! subsystem can be absent, synchronous or asynchronous.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use super::{
    DisplaySubsystem, ExternalTextureRequest, GpuTextureId, NativeHandle, RenderTextureRequest,
    RenderTextureRequestDescriptor, RenderTextureTicket, TextureBackend,
};
use crate::core::{Result, XrError};

/// How the headless display subsystem behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadlessDisplayMode {
    /// No display subsystem loaded.
    Missing,
    /// Render textures are returned immediately.
    Synchronous,
    /// Render textures become available after `polls_until_ready` polls.
    Asynchronous { polls_until_ready: u32 },
}

/// A live texture object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadlessTexture {
    External(ExternalTextureRequest),
    Render(RenderTextureRequestDescriptor),
}

/// Counters over the backend's lifetime.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeadlessStats {
    pub textures_created: usize,
    pub textures_rebound: usize,
    pub textures_destroyed: usize,
    pub textures_live: usize,
    pub render_texture_requests: usize,
    pub render_texture_polls: usize,
}

#[derive(Default)]
struct HeadlessState {
    next_texture_id: AtomicU64,
    live: Mutex<HashMap<GpuTextureId, HeadlessTexture>>,
    created: AtomicUsize,
    rebound: AtomicUsize,
    destroyed: AtomicUsize,
    render_requests: AtomicUsize,
    render_polls: AtomicUsize,
}

impl HeadlessState {
    fn insert(&self, texture: HeadlessTexture) -> GpuTextureId {
        // Ids start at 1 so a zeroed id never names a live object.
        let id = GpuTextureId::new(self.next_texture_id.fetch_add(1, Ordering::Relaxed) + 1);
        self.live.lock().insert(id, texture);
        self.created.fetch_add(1, Ordering::Relaxed);
        id
    }

    fn remove(&self, texture: GpuTextureId) {
        if self.live.lock().remove(&texture).is_some() {
            self.destroyed.fetch_add(1, Ordering::Relaxed);
        } else {
            tracing::warn!("HeadlessTextureBackend: destroy of unknown texture {}", texture);
        }
    }
}

/// Display subsystem half of the headless backend.
pub struct HeadlessDisplay {
    state: Arc<HeadlessState>,
    polls_until_ready: Option<u32>,
    next_ticket: AtomicU64,
    pending: Mutex<HashMap<RenderTextureTicket, (u32, RenderTextureRequestDescriptor)>>,
}

impl DisplaySubsystem for HeadlessDisplay {
    fn request_render_texture(
        &self,
        descriptor: &RenderTextureRequestDescriptor,
    ) -> Result<RenderTextureRequest> {
        self.state.render_requests.fetch_add(1, Ordering::Relaxed);
        match self.polls_until_ready {
            None => Ok(RenderTextureRequest::Ready(
                self.state.insert(HeadlessTexture::Render(*descriptor)),
            )),
            Some(polls) => {
                let ticket = RenderTextureTicket(self.next_ticket.fetch_add(1, Ordering::Relaxed));
                self.pending.lock().insert(ticket, (polls, *descriptor));
                Ok(RenderTextureRequest::Pending(ticket))
            }
        }
    }

    fn poll_render_texture(&self, ticket: RenderTextureTicket) -> Option<GpuTextureId> {
        self.state.render_polls.fetch_add(1, Ordering::Relaxed);
        let mut pending = self.pending.lock();
        let (remaining, descriptor) = pending.get_mut(&ticket)?;
        if *remaining > 1 {
            *remaining -= 1;
            return None;
        }
        let descriptor = *descriptor;
        pending.remove(&ticket);
        Some(self.state.insert(HeadlessTexture::Render(descriptor)))
    }

    fn release_render_texture(&self, texture: GpuTextureId) {
        self.state.remove(texture);
    }

    fn cancel_render_texture(&self, ticket: RenderTextureTicket) {
        self.pending.lock().remove(&ticket);
    }
}

/// Texture backend that never touches a GPU.
pub struct HeadlessTextureBackend {
    state: Arc<HeadlessState>,
    display: Mutex<Option<Arc<HeadlessDisplay>>>,
    render_texture_refs: Mutex<HashMap<NativeHandle, GpuTextureId>>,
}

impl HeadlessTextureBackend {
    /// Backend without a display subsystem.
    pub fn new() -> Self {
        Self {
            state: Arc::new(HeadlessState::default()),
            display: Mutex::new(None),
            render_texture_refs: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_display(mode: HeadlessDisplayMode) -> Self {
        let backend = Self::new();
        backend.set_display_mode(mode);
        backend
    }

    /// Load, swap or unload the display subsystem.
    pub fn set_display_mode(&self, mode: HeadlessDisplayMode) {
        let polls_until_ready = match mode {
            HeadlessDisplayMode::Missing => {
                *self.display.lock() = None;
                return;
            }
            HeadlessDisplayMode::Synchronous => None,
            HeadlessDisplayMode::Asynchronous { polls_until_ready } => Some(polls_until_ready),
        };
        *self.display.lock() = Some(Arc::new(HeadlessDisplay {
            state: Arc::clone(&self.state),
            polls_until_ready,
            next_ticket: AtomicU64::new(0),
            pending: Mutex::new(HashMap::new()),
        }));
    }

    /// Make `handle` resolve to `texture` for render texture references.
    pub fn register_render_texture_ref(&self, handle: NativeHandle, texture: GpuTextureId) {
        self.render_texture_refs.lock().insert(handle, texture);
    }

    pub fn live_texture(&self, texture: GpuTextureId) -> Option<HeadlessTexture> {
        self.state.live.lock().get(&texture).copied()
    }

    pub fn is_live(&self, texture: GpuTextureId) -> bool {
        self.state.live.lock().contains_key(&texture)
    }

    pub fn stats(&self) -> HeadlessStats {
        HeadlessStats {
            textures_created: self.state.created.load(Ordering::Relaxed),
            textures_rebound: self.state.rebound.load(Ordering::Relaxed),
            textures_destroyed: self.state.destroyed.load(Ordering::Relaxed),
            textures_live: self.state.live.lock().len(),
            render_texture_requests: self.state.render_requests.load(Ordering::Relaxed),
            render_texture_polls: self.state.render_polls.load(Ordering::Relaxed),
        }
    }
}

impl Default for HeadlessTextureBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl TextureBackend for HeadlessTextureBackend {
    fn create_external_texture(&self, request: &ExternalTextureRequest) -> Result<GpuTextureId> {
        Ok(self.state.insert(HeadlessTexture::External(*request)))
    }

    fn update_external_texture(&self, texture: GpuTextureId, handle: NativeHandle) -> Result<()> {
        let mut live = self.state.live.lock();
        match live.get_mut(&texture) {
            Some(HeadlessTexture::External(request)) => {
                request.native_handle = handle;
                self.state.rebound.fetch_add(1, Ordering::Relaxed);
                Ok(())
            }
            Some(HeadlessTexture::Render(_)) => Err(XrError::Backend(format!(
                "{} is a render texture and has no native handle",
                texture
            ))),
            None => Err(XrError::Backend(format!("{} does not exist", texture))),
        }
    }

    fn destroy_texture(&self, texture: GpuTextureId) {
        self.state.remove(texture);
    }

    fn display_subsystem(&self) -> Option<Arc<dyn DisplaySubsystem>> {
        self.display
            .lock()
            .as_ref()
            .map(|display| Arc::clone(display) as Arc<dyn DisplaySubsystem>)
    }

    fn resolve_render_texture_ref(&self, handle: NativeHandle) -> Option<GpuTextureId> {
        self.render_texture_refs.lock().get(&handle).copied()
    }
}

impl std::fmt::Debug for HeadlessTextureBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let stats = self.stats();
        f.debug_struct("HeadlessTextureBackend")
            .field("textures_live", &stats.textures_live)
            .field("textures_created", &stats.textures_created)
            .field("has_display", &self.display.lock().is_some())
            .finish()
    }
}
