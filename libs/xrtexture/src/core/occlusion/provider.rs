// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

use super::{FrameParams, OcclusionFrame, ShaderKeywords};
use crate::core::rhi::TextureDescriptor;

/// The AR occlusion provider feeding the coordinator.
///
/// If [`swapchain_descriptors`](Self::swapchain_descriptors) reports a table,
/// every native handle later returned by
/// [`texture_descriptors`](Self::texture_descriptors) must appear in it.
pub trait OcclusionProvider: Send {
    /// Full swapchain table, `[frame_slot][texture_slot]`, if the provider
    /// renders into a fixed set of textures. Queried once at start.
    fn swapchain_descriptors(&mut self) -> Option<Vec<Vec<TextureDescriptor>>>;

    /// Latest frame for this viewport, `None` if no new frame is available.
    fn try_get_frame(&mut self, params: &FrameParams) -> Option<OcclusionFrame>;

    /// Replace the contents of `descriptors` with this frame's textures.
    fn texture_descriptors(&mut self, descriptors: &mut Vec<TextureDescriptor>);

    fn shader_keywords(&self) -> ShaderKeywords;
}
