// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! GPU texture reconciliation for AR occlusion.
//!
//! An [`OcclusionProvider`] hands over texture descriptors every frame. A
//! [`SwapchainStrategy`] matches them to owned [`TextureInfo`]s, rebinding
//! GPU objects in place when only the native handle changed and recreating
//! them otherwise. [`OcclusionFrameCoordinator`] runs that on each render
//! callback and raises an [`OcclusionFrameEvent`] when the frame is complete.

pub mod core;

pub use crate::core::{
    init_logging, rhi, CoordinatorStats, FixedLengthSwapchainStrategy, FrameParams, FrameTexture,
    NoSwapchainStrategy, OcclusionConfig, OcclusionFrame, OcclusionFrameCoordinator,
    OcclusionFrameEvent, OcclusionFrameListener, OcclusionFrameProperties, OcclusionProvider,
    Result, ScreenOrientation, ShaderKeywords, SwapchainMode, SwapchainStrategy, SwapchainUpdate,
    TextureInfo, UpdatableTexture, XrError,
};
