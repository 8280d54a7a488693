// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Per-frame texture reconciliation strategies.

mod fixed_length;
mod no_swapchain;

pub use fixed_length::FixedLengthSwapchainStrategy;
pub use no_swapchain::NoSwapchainStrategy;

use crate::core::rhi::TextureDescriptor;
use crate::core::texture::TextureInfo;
use crate::core::Result;

/// Result of reconciling one frame's descriptors.
///
/// `textures` is the best-effort state even when `success` is false; callers
/// may still read the slots that did update.
#[derive(Debug, Clone, Copy)]
pub struct SwapchainUpdate<'a> {
    pub success: bool,
    pub textures: &'a [TextureInfo],
}

impl<'a> SwapchainUpdate<'a> {
    pub fn empty() -> Self {
        Self {
            success: true,
            textures: &[],
        }
    }
}

/// Matches incoming descriptors to owned [`TextureInfo`]s.
pub trait SwapchainStrategy: Send {
    /// Update every texture slot for this frame, in slot order.
    ///
    /// `Err` means the provider broke its contract or a texture could not be
    /// built at all; a frame that merely is not ready yet reports
    /// `success == false`.
    fn try_update_texture_infos_for_frame(
        &mut self,
        descriptors: &[TextureDescriptor],
    ) -> Result<SwapchainUpdate<'_>>;

    /// Release every owned texture. Safe to call repeatedly.
    fn destroy_textures(&mut self);

    /// Strategy name for logs.
    fn name(&self) -> &'static str;
}

/// Update `infos[i]` from `descriptors[i]` for every slot; AND of the results.
///
/// Every slot is attempted even after one reports `false`.
pub(crate) fn update_slots(
    infos: &mut [TextureInfo],
    descriptors: &[TextureDescriptor],
) -> Result<bool> {
    let mut success = true;
    for (info, descriptor) in infos.iter_mut().zip(descriptors) {
        success &= info.try_update_texture_info(descriptor)?;
    }
    Ok(success)
}
