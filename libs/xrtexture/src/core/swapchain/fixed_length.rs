// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Strategy for providers with a bounded, fixed-size swapchain.

use std::collections::HashMap;
use std::sync::Arc;

use super::{update_slots, SwapchainStrategy, SwapchainUpdate};
use crate::core::rhi::{NativeHandle, TextureBackend, TextureDescriptor};
use crate::core::texture::TextureInfo;
use crate::core::{Result, XrError};

/// Every texture the provider will ever hand out is known up front.
///
/// One [`TextureInfo`] per (frame slot, texture slot) is built at construction
/// and lives as long as the strategy. Destroying the textures is terminal:
/// later frames report failure instead of recreating them.
pub struct FixedLengthSwapchainStrategy {
    frames: Vec<Vec<TextureInfo>>,
    /// Read-only after construction.
    frame_slot_by_handle: HashMap<NativeHandle, usize>,
    textures_per_frame: usize,
    destroyed: bool,
}

impl FixedLengthSwapchainStrategy {
    /// Build from the provider's swapchain table, `[frame_slot][texture_slot]`.
    pub fn new(
        backend: Arc<dyn TextureBackend>,
        swapchain: &[Vec<TextureDescriptor>],
    ) -> Result<Self> {
        let Some(first) = swapchain.first() else {
            return Err(XrError::InvalidSwapchain(
                "swapchain has no frame slots".into(),
            ));
        };
        let textures_per_frame = first.len();

        let mut frame_slot_by_handle = HashMap::new();
        for (frame_slot, descriptors) in swapchain.iter().enumerate() {
            if descriptors.is_empty() {
                return Err(XrError::InvalidSwapchain(format!(
                    "frame slot {} has no textures",
                    frame_slot
                )));
            }
            if descriptors.len() != textures_per_frame {
                return Err(XrError::InvalidSwapchain(format!(
                    "frame slot {} has {} textures, expected {}",
                    frame_slot,
                    descriptors.len(),
                    textures_per_frame
                )));
            }
            for (texture_slot, descriptor) in descriptors.iter().enumerate() {
                if descriptor.native_handle.is_null() {
                    return Err(XrError::InvalidSwapchain(format!(
                        "texture {} of frame slot {} has a null native handle",
                        texture_slot, frame_slot
                    )));
                }
                if let Some(previous) =
                    frame_slot_by_handle.insert(descriptor.native_handle, frame_slot)
                {
                    return Err(XrError::InvalidSwapchain(format!(
                        "native handle {} appears in frame slots {} and {}",
                        descriptor.native_handle, previous, frame_slot
                    )));
                }
            }
        }

        let frames = swapchain
            .iter()
            .map(|descriptors| {
                descriptors
                    .iter()
                    .map(|descriptor| TextureInfo::new(Arc::clone(&backend), descriptor))
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            "FixedLengthSwapchainStrategy: {} frame slots x {} textures",
            frames.len(),
            textures_per_frame
        );

        Ok(Self {
            frames,
            frame_slot_by_handle,
            textures_per_frame,
            destroyed: false,
        })
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn textures_per_frame(&self) -> usize {
        self.textures_per_frame
    }

    pub fn frame_slot_for(&self, handle: NativeHandle) -> Option<usize> {
        self.frame_slot_by_handle.get(&handle).copied()
    }

    pub fn frame(&self, frame_slot: usize) -> Option<&[TextureInfo]> {
        self.frames.get(frame_slot).map(Vec::as_slice)
    }
}

impl SwapchainStrategy for FixedLengthSwapchainStrategy {
    fn try_update_texture_infos_for_frame(
        &mut self,
        descriptors: &[TextureDescriptor],
    ) -> Result<SwapchainUpdate<'_>> {
        let Some(first) = descriptors.first() else {
            return Ok(SwapchainUpdate::empty());
        };

        let frame_slot = self
            .frame_slot_for(first.native_handle)
            .ok_or(XrError::TextureNotInSwapchain {
                handle: first.native_handle,
            })?;

        if descriptors.len() != self.textures_per_frame {
            return Err(XrError::SwapchainContract(format!(
                "frame has {} textures, swapchain holds {} per frame",
                descriptors.len(),
                self.textures_per_frame
            )));
        }

        let infos = &mut self.frames[frame_slot];
        let success = !self.destroyed && update_slots(infos, descriptors)?;

        Ok(SwapchainUpdate {
            success,
            textures: infos,
        })
    }

    fn destroy_textures(&mut self) {
        for info in self.frames.iter_mut().flatten() {
            info.destroy_texture();
        }
        self.destroyed = true;
    }

    fn name(&self) -> &'static str {
        "FixedLengthSwapchainStrategy"
    }
}

impl std::fmt::Debug for FixedLengthSwapchainStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FixedLengthSwapchainStrategy")
            .field("frame_count", &self.frames.len())
            .field("textures_per_frame", &self.textures_per_frame)
            .field("destroyed", &self.destroyed)
            .finish()
    }
}
