// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Strategy for providers without swapchain semantics.

use std::sync::Arc;

use super::{update_slots, SwapchainStrategy, SwapchainUpdate};
use crate::core::rhi::{TextureBackend, TextureDescriptor};
use crate::core::texture::TextureInfo;
use crate::core::Result;

/// Keeps only the latest frame's textures, one slot per descriptor.
///
/// When the descriptor count changes, leading slots are kept by position,
/// surplus slots are dropped (releasing their textures) and new slots are
/// built from the incoming descriptors.
pub struct NoSwapchainStrategy {
    backend: Arc<dyn TextureBackend>,
    texture_infos: Vec<TextureInfo>,
}

impl NoSwapchainStrategy {
    pub fn new(backend: Arc<dyn TextureBackend>) -> Self {
        Self {
            backend,
            texture_infos: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.texture_infos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texture_infos.is_empty()
    }

    pub fn texture_infos(&self) -> &[TextureInfo] {
        &self.texture_infos
    }

    fn resize(&mut self, descriptors: &[TextureDescriptor]) -> Result<()> {
        let current = self.texture_infos.len();
        if current == descriptors.len() {
            return Ok(());
        }

        tracing::debug!(
            "NoSwapchainStrategy: resizing from {} to {} textures",
            current,
            descriptors.len()
        );

        if descriptors.len() < current {
            self.texture_infos.truncate(descriptors.len());
            return Ok(());
        }

        self.texture_infos.reserve(descriptors.len() - current);
        for descriptor in &descriptors[current..] {
            self.texture_infos
                .push(TextureInfo::new(Arc::clone(&self.backend), descriptor)?);
        }
        Ok(())
    }
}

impl SwapchainStrategy for NoSwapchainStrategy {
    fn try_update_texture_infos_for_frame(
        &mut self,
        descriptors: &[TextureDescriptor],
    ) -> Result<SwapchainUpdate<'_>> {
        self.resize(descriptors)?;
        let success = update_slots(&mut self.texture_infos, descriptors)?;
        Ok(SwapchainUpdate {
            success,
            textures: &self.texture_infos,
        })
    }

    fn destroy_textures(&mut self) {
        self.texture_infos.clear();
    }

    fn name(&self) -> &'static str {
        "NoSwapchainStrategy"
    }
}

impl std::fmt::Debug for NoSwapchainStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoSwapchainStrategy")
            .field("texture_count", &self.texture_infos.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rhi::{GpuTextureId, HeadlessTextureBackend, NativeFormat};

    fn frame(count: usize, generation: usize) -> Vec<TextureDescriptor> {
        (0..count)
            .map(|slot| {
                TextureDescriptor::new_2d(64, 64, NativeFormat::RHalf)
                    .with_handle(generation * 100 + slot + 1)
                    .with_property_id(slot as i32)
            })
            .collect()
    }

    fn texture_ids(strategy: &NoSwapchainStrategy) -> Vec<Option<GpuTextureId>> {
        strategy.texture_infos().iter().map(|i| i.texture()).collect()
    }

    #[test]
    fn test_grow_keeps_existing_slots() {
        let backend = Arc::new(HeadlessTextureBackend::new());
        let mut strategy = NoSwapchainStrategy::new(backend.clone());

        assert!(strategy.try_update_texture_infos_for_frame(&frame(2, 1)).unwrap().success);
        let first_two = texture_ids(&strategy);

        let update = strategy.try_update_texture_infos_for_frame(&frame(4, 2)).unwrap();
        assert!(update.success);
        assert_eq!(update.textures.len(), 4);

        let after = texture_ids(&strategy);
        assert_eq!(&after[..2], &first_two[..]);
        let stats = backend.stats();
        assert_eq!(stats.textures_created, 4);
        assert_eq!(stats.textures_rebound, 2);
        assert_eq!(stats.textures_destroyed, 0);
    }

    #[test]
    fn test_shrink_disposes_surplus_slots() {
        let backend = Arc::new(HeadlessTextureBackend::new());
        let mut strategy = NoSwapchainStrategy::new(backend.clone());
        strategy.try_update_texture_infos_for_frame(&frame(4, 1)).unwrap();
        let before = texture_ids(&strategy);

        let update = strategy.try_update_texture_infos_for_frame(&frame(2, 1)).unwrap();
        assert!(update.success);
        assert_eq!(update.textures.len(), 2);

        for removed in before[2..].iter().flatten() {
            assert!(!backend.is_live(*removed));
        }
        assert_eq!(backend.stats().textures_destroyed, 2);
        assert_eq!(strategy.len(), 2);
    }

    #[test]
    fn test_empty_frame_clears_slots() {
        let backend = Arc::new(HeadlessTextureBackend::new());
        let mut strategy = NoSwapchainStrategy::new(backend.clone());
        strategy.try_update_texture_infos_for_frame(&frame(3, 1)).unwrap();

        let update = strategy.try_update_texture_infos_for_frame(&[]).unwrap();
        assert!(update.success);
        assert!(update.textures.is_empty());
        assert_eq!(backend.stats().textures_live, 0);
    }

    #[test]
    fn test_destroy_then_update_recreates() {
        let backend = Arc::new(HeadlessTextureBackend::new());
        let mut strategy = NoSwapchainStrategy::new(backend.clone());

        strategy.destroy_textures();
        strategy.try_update_texture_infos_for_frame(&frame(2, 1)).unwrap();
        strategy.destroy_textures();
        strategy.destroy_textures();
        assert!(strategy.is_empty());
        assert_eq!(backend.stats().textures_live, 0);

        let update = strategy.try_update_texture_infos_for_frame(&frame(2, 1)).unwrap();
        assert!(update.success);
        assert!(update.textures.iter().all(|i| i.texture().is_some()));
        assert_eq!(backend.stats().textures_created, 4);
    }

    #[test]
    fn test_failed_slot_fails_frame_but_updates_others() {
        let backend = Arc::new(HeadlessTextureBackend::new());
        let mut strategy = NoSwapchainStrategy::new(backend.clone());
        let mut descriptors = frame(3, 1);
        strategy.try_update_texture_infos_for_frame(&descriptors).unwrap();

        descriptors[0] = descriptors[0].invalid();
        descriptors[2] = descriptors[2].with_handle(999);
        let update = strategy.try_update_texture_infos_for_frame(&descriptors).unwrap();

        assert!(!update.success);
        assert_eq!(update.textures[2].descriptor(), &descriptors[2]);
    }
}
