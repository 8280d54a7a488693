// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Occlusion frame coordination: provider seam, frame metadata and dispatch.

mod coordinator;
mod frame;
mod provider;

pub use coordinator::{CoordinatorStats, OcclusionFrameCoordinator, OcclusionFrameListener};
pub use frame::{
    FieldOfView, FrameParams, FrameTexture, NearFarPlanes, OcclusionFrame, OcclusionFrameEvent,
    OcclusionFrameProperties, Pose, ScreenOrientation, ShaderKeywords,
};
pub use provider::OcclusionProvider;
