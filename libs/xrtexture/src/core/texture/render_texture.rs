// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Render textures created through the display subsystem.
//!
//! Creation is handed to [`DisplaySubsystem`], which answers either with the
//! finished texture or with a ticket. While a ticket is outstanding, updates
//! poll it and report `false`; creation is never requested twice for the same
//! descriptor.

use std::sync::Arc;

use super::UpdatableTexture;
use crate::core::rhi::{
    DisplaySubsystem, GpuTextureId, RenderTextureRequest, RenderTextureRequestDescriptor,
    RenderTextureTicket, TextureBackend, TextureDescriptor,
};
use crate::core::{Result, XrError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RenderTextureState {
    /// Nothing requested yet, or the last request could not be made.
    Unrequested,
    Pending(RenderTextureTicket),
    Created(GpuTextureId),
}

/// Color or depth render texture owned through the display subsystem.
pub struct RenderTexture {
    backend: Arc<dyn TextureBackend>,
    display: Option<Arc<dyn DisplaySubsystem>>,
    descriptor: TextureDescriptor,
    state: RenderTextureState,
    destroyed: bool,
    logged_missing_display: bool,
}

impl RenderTexture {
    /// Validates the kind and format, then asks for the texture.
    ///
    /// A missing display subsystem is not an error here; the request is
    /// retried on every update until the subsystem shows up.
    pub fn new(backend: Arc<dyn TextureBackend>, descriptor: &TextureDescriptor) -> Result<Self> {
        if !descriptor.kind.is_render_texture() {
            return Err(XrError::TypeMismatch {
                variant: "RenderTexture",
                actual: descriptor.kind,
            });
        }
        RenderTextureRequestDescriptor::from_descriptor(descriptor)?;

        let mut this = Self {
            backend,
            display: None,
            descriptor: *descriptor,
            state: RenderTextureState::Unrequested,
            destroyed: false,
            logged_missing_display: false,
        };
        if descriptor.valid {
            this.request()?;
        }
        Ok(this)
    }

    /// True while creation has been requested but not confirmed.
    pub fn is_pending(&self) -> bool {
        matches!(self.state, RenderTextureState::Pending(_))
    }

    fn request(&mut self) -> Result<bool> {
        let Some(display) = self.backend.display_subsystem() else {
            if !self.logged_missing_display {
                self.logged_missing_display = true;
                tracing::warn!(
                    "RenderTexture: {}; will retry every frame",
                    XrError::DependencyUnavailable("display subsystem not loaded".into())
                );
            }
            return Ok(false);
        };

        let request = RenderTextureRequestDescriptor::from_descriptor(&self.descriptor)?;
        let outcome = display.request_render_texture(&request)?;
        self.display = Some(display);
        match outcome {
            RenderTextureRequest::Ready(texture) => {
                tracing::debug!(
                    "RenderTexture: created {} ({}x{}, depth={})",
                    texture,
                    request.width,
                    request.height,
                    request.depth
                );
                self.state = RenderTextureState::Created(texture);
                Ok(true)
            }
            RenderTextureRequest::Pending(ticket) => {
                tracing::debug!("RenderTexture: creation pending ({:?})", ticket);
                self.state = RenderTextureState::Pending(ticket);
                Ok(false)
            }
        }
    }

    fn poll(&mut self, ticket: RenderTextureTicket) -> bool {
        let Some(display) = self.display.as_ref() else {
            return false;
        };
        match display.poll_render_texture(ticket) {
            Some(texture) => {
                tracing::debug!("RenderTexture: {} ready for {:?}", texture, ticket);
                self.state = RenderTextureState::Created(texture);
                true
            }
            None => false,
        }
    }

    fn release(&mut self) {
        let state = std::mem::replace(&mut self.state, RenderTextureState::Unrequested);
        let Some(display) = self.display.as_ref() else {
            return;
        };
        match state {
            RenderTextureState::Created(texture) => display.release_render_texture(texture),
            RenderTextureState::Pending(ticket) => display.cancel_render_texture(ticket),
            RenderTextureState::Unrequested => {}
        }
    }
}

impl UpdatableTexture for RenderTexture {
    fn descriptor(&self) -> &TextureDescriptor {
        &self.descriptor
    }

    fn texture(&self) -> Option<GpuTextureId> {
        match self.state {
            RenderTextureState::Created(texture) => Some(texture),
            _ => None,
        }
    }

    fn try_update_from_descriptor(&mut self, descriptor: &TextureDescriptor) -> Result<bool> {
        if self.destroyed {
            tracing::warn!("RenderTexture: update after destroy; texture must be reconstructed");
            return Ok(false);
        }
        if !descriptor.kind.is_render_texture() {
            tracing::warn!("RenderTexture: ignoring {:?} descriptor", descriptor.kind);
            return Ok(false);
        }
        if !descriptor.valid {
            self.release();
            self.descriptor = *descriptor;
            return Ok(false);
        }

        if descriptor.has_identical_metadata(&self.descriptor) {
            self.descriptor = *descriptor;
            return match self.state {
                RenderTextureState::Created(_) => Ok(true),
                RenderTextureState::Pending(ticket) => Ok(self.poll(ticket)),
                RenderTextureState::Unrequested => self.request(),
            };
        }

        self.release();
        self.descriptor = *descriptor;
        self.request()
    }

    fn destroy_texture(&mut self) {
        self.release();
        self.destroyed = true;
    }

    fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}

impl PartialEq for RenderTexture {
    fn eq(&self, other: &Self) -> bool {
        self.descriptor == other.descriptor && self.texture() == other.texture()
    }
}

impl Drop for RenderTexture {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for RenderTexture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderTexture")
            .field("descriptor", &self.descriptor)
            .field("state", &self.state)
            .field("destroyed", &self.destroyed)
            .finish()
    }
}
