// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Swapchain reconciliation integration tests.
//!
//! Drives both strategies through the public API against the headless
//! backend and checks texture churn frame by frame.

use std::sync::Arc;

use xrtexture::rhi::{HeadlessTextureBackend, NativeFormat, TextureDescriptor};
use xrtexture::{
    FixedLengthSwapchainStrategy, NoSwapchainStrategy, SwapchainStrategy, XrError,
};

const H1: usize = 0x1000;
const H2: usize = 0x2000;

fn texture(handle: usize, size: u32, property_id: i32) -> TextureDescriptor {
    TextureDescriptor::new_2d(size, size, NativeFormat::RFloat)
        .with_handle(handle)
        .with_property_id(property_id)
}

#[test]
fn test_fixed_length_end_to_end() {
    let backend = Arc::new(HeadlessTextureBackend::new());
    let swapchain = vec![vec![texture(H1, 64, 0), texture(H2, 64, 1)]];
    let mut strategy = FixedLengthSwapchainStrategy::new(backend.clone(), &swapchain).unwrap();
    assert_eq!(backend.stats().textures_created, 2);

    // Frame 1: identical descriptors, nothing new is created.
    let update = strategy
        .try_update_texture_infos_for_frame(&[texture(H1, 64, 0), texture(H2, 64, 1)])
        .unwrap();
    assert!(update.success);
    assert_eq!(update.textures.len(), 2);
    let first_before = update.textures[0].texture().unwrap();
    let second_before = update.textures[1].texture().unwrap();
    assert_eq!(backend.stats().textures_created, 2);

    // Frame 2: the first texture grows, so only it is recreated.
    let update = strategy
        .try_update_texture_infos_for_frame(&[texture(H1, 128, 0), texture(H2, 64, 1)])
        .unwrap();
    assert!(update.success);
    assert_ne!(update.textures[0].texture().unwrap(), first_before);
    assert_eq!(update.textures[1].texture().unwrap(), second_before);

    let stats = backend.stats();
    assert_eq!(stats.textures_created, 3);
    assert_eq!(stats.textures_destroyed, 1);
    assert_eq!(stats.textures_live, 2);
}

#[test]
fn test_fixed_length_alternates_frame_slots() {
    let backend = Arc::new(HeadlessTextureBackend::new());
    let swapchain = vec![
        vec![texture(1, 64, 0), texture(2, 64, 1)],
        vec![texture(3, 64, 0), texture(4, 64, 1)],
        vec![texture(5, 64, 0), texture(6, 64, 1)],
    ];
    let mut strategy = FixedLengthSwapchainStrategy::new(backend.clone(), &swapchain).unwrap();

    for round in 0..3 {
        for frame in &swapchain {
            let update = strategy.try_update_texture_infos_for_frame(frame).unwrap();
            assert!(update.success, "round {} failed", round);
            let handles: Vec<_> = update
                .textures
                .iter()
                .map(|info| info.descriptor().native_handle)
                .collect();
            let expected: Vec<_> = frame.iter().map(|d| d.native_handle).collect();
            assert_eq!(handles, expected);
        }
    }

    let stats = backend.stats();
    assert_eq!(stats.textures_created, 6);
    assert_eq!(stats.textures_rebound, 0);
    assert_eq!(stats.textures_destroyed, 0);
}

#[test]
fn test_fixed_length_rejects_foreign_handles() {
    let backend = Arc::new(HeadlessTextureBackend::new());
    let mut strategy =
        FixedLengthSwapchainStrategy::new(backend.clone(), &[vec![texture(H1, 64, 0)]]).unwrap();

    let result = strategy.try_update_texture_infos_for_frame(&[texture(H2, 64, 0)]);
    assert!(matches!(result, Err(XrError::TextureNotInSwapchain { .. })));
}

#[test]
fn test_no_swapchain_tracks_latest_frame() {
    let backend = Arc::new(HeadlessTextureBackend::new());
    let mut strategy = NoSwapchainStrategy::new(backend.clone());

    // Provider rotates native handles every frame without changing metadata.
    for frame in 0..10usize {
        let descriptors = [
            texture(0x100 + frame, 64, 0),
            texture(0x200 + frame, 64, 1),
        ];
        let update = strategy.try_update_texture_infos_for_frame(&descriptors).unwrap();
        assert!(update.success);
    }

    let stats = backend.stats();
    assert_eq!(stats.textures_created, 2);
    assert_eq!(stats.textures_rebound, 18);
    assert_eq!(stats.textures_live, 2);

    // Feature disabled: no textures this frame.
    let update = strategy.try_update_texture_infos_for_frame(&[]).unwrap();
    assert!(update.success);
    assert_eq!(backend.stats().textures_live, 0);
}

#[test]
fn test_dropping_strategy_releases_everything() {
    let backend = Arc::new(HeadlessTextureBackend::new());
    {
        let _fixed = FixedLengthSwapchainStrategy::new(
            backend.clone(),
            &[vec![texture(1, 64, 0)], vec![texture(2, 64, 0)]],
        )
        .unwrap();
        let mut none = NoSwapchainStrategy::new(backend.clone());
        none.try_update_texture_infos_for_frame(&[texture(3, 32, 0)])
            .unwrap();
        assert_eq!(backend.stats().textures_live, 3);
    }
    assert_eq!(backend.stats().textures_live, 0);
}
