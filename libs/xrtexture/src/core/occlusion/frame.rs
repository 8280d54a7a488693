// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Occlusion frame metadata and the event raised to subscribers.

use bitflags::bitflags;

use crate::core::rhi::{GpuTextureId, TextureDescriptor, TextureKind};
use crate::core::texture::TextureInfo;

bitflags! {
    /// Which optional [`OcclusionFrame`] properties the provider filled in.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct OcclusionFrameProperties: u32 {
        const TIMESTAMP = 1 << 0;
        const NEAR_FAR_PLANES = 1 << 1;
        const POSES = 1 << 2;
        const FIELDS_OF_VIEW = 1 << 3;
    }
}

/// Near and far clip planes the depth textures were produced with, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NearFarPlanes {
    pub near: f32,
    pub far: f32,
}

/// Rigid transform of the view a depth texture was rendered from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: [f32; 3],
    /// Unit quaternion, `[x, y, z, w]`.
    pub rotation: [f32; 4],
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: [0.0; 3],
            rotation: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

/// Asymmetric field of view, angles in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FieldOfView {
    pub angle_left: f32,
    pub angle_right: f32,
    pub angle_up: f32,
    pub angle_down: f32,
}

/// Screen orientation the host is rendering in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScreenOrientation {
    #[default]
    Portrait,
    PortraitUpsideDown,
    LandscapeLeft,
    LandscapeRight,
}

impl ScreenOrientation {
    pub fn is_landscape(&self) -> bool {
        matches!(self, Self::LandscapeLeft | Self::LandscapeRight)
    }
}

/// Camera and screen parameters the host passes in every render callback.
///
/// Providers use them to fit the occlusion frame to the current viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameParams {
    pub screen_width: u32,
    pub screen_height: u32,
    pub orientation: ScreenOrientation,
    /// Camera clip planes in meters.
    pub near_clip: f32,
    pub far_clip: f32,
}

impl Default for FrameParams {
    fn default() -> Self {
        Self {
            screen_width: 0,
            screen_height: 0,
            orientation: ScreenOrientation::Portrait,
            near_clip: 0.1,
            far_clip: 100.0,
        }
    }
}

impl FrameParams {
    pub fn new(screen_width: u32, screen_height: u32, orientation: ScreenOrientation) -> Self {
        Self {
            screen_width,
            screen_height,
            orientation,
            ..Self::default()
        }
    }

    pub fn with_clip_planes(mut self, near_clip: f32, far_clip: f32) -> Self {
        self.near_clip = near_clip;
        self.far_clip = far_clip;
        self
    }

    /// Width over height, `None` for an empty viewport.
    pub fn aspect_ratio(&self) -> Option<f32> {
        (self.screen_width > 0 && self.screen_height > 0)
            .then(|| self.screen_width as f32 / self.screen_height as f32)
    }
}

/// One frame as reported by the occlusion provider.
///
/// Optional properties are only readable when their bit is set in
/// [`properties`](Self::properties); the builders set the bit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OcclusionFrame {
    properties: OcclusionFrameProperties,
    timestamp_ns: i64,
    near_far_planes: NearFarPlanes,
    poses: Vec<Pose>,
    fields_of_view: Vec<FieldOfView>,
}

impl OcclusionFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timestamp_ns(mut self, timestamp_ns: i64) -> Self {
        self.timestamp_ns = timestamp_ns;
        self.properties |= OcclusionFrameProperties::TIMESTAMP;
        self
    }

    pub fn with_near_far_planes(mut self, near: f32, far: f32) -> Self {
        self.near_far_planes = NearFarPlanes { near, far };
        self.properties |= OcclusionFrameProperties::NEAR_FAR_PLANES;
        self
    }

    pub fn with_poses(mut self, poses: Vec<Pose>) -> Self {
        self.poses = poses;
        self.properties |= OcclusionFrameProperties::POSES;
        self
    }

    pub fn with_fields_of_view(mut self, fields_of_view: Vec<FieldOfView>) -> Self {
        self.fields_of_view = fields_of_view;
        self.properties |= OcclusionFrameProperties::FIELDS_OF_VIEW;
        self
    }

    pub fn properties(&self) -> OcclusionFrameProperties {
        self.properties
    }

    pub fn timestamp_ns(&self) -> Option<i64> {
        self.properties
            .contains(OcclusionFrameProperties::TIMESTAMP)
            .then_some(self.timestamp_ns)
    }

    pub fn near_far_planes(&self) -> Option<NearFarPlanes> {
        self.properties
            .contains(OcclusionFrameProperties::NEAR_FAR_PLANES)
            .then_some(self.near_far_planes)
    }

    pub fn poses(&self) -> Option<&[Pose]> {
        self.properties
            .contains(OcclusionFrameProperties::POSES)
            .then_some(self.poses.as_slice())
    }

    pub fn fields_of_view(&self) -> Option<&[FieldOfView]> {
        self.properties
            .contains(OcclusionFrameProperties::FIELDS_OF_VIEW)
            .then_some(self.fields_of_view.as_slice())
    }
}

/// Shader keywords the provider wants toggled for this frame's textures.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShaderKeywords {
    pub enabled: Vec<String>,
    pub disabled: Vec<String>,
}

impl ShaderKeywords {
    pub fn new(enabled: Vec<String>, disabled: Vec<String>) -> Self {
        Self { enabled, disabled }
    }
}

/// Snapshot of one reconciled texture.
///
/// The texture id is only meaningful for the frame it was raised with;
/// the next frame may rebind or recreate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameTexture {
    pub property_id: i32,
    pub kind: TextureKind,
    pub texture: Option<GpuTextureId>,
    pub descriptor: TextureDescriptor,
}

impl From<&TextureInfo> for FrameTexture {
    fn from(info: &TextureInfo) -> Self {
        Self {
            property_id: info.property_id(),
            kind: info.kind(),
            texture: info.texture(),
            descriptor: *info.descriptor(),
        }
    }
}

/// Immutable payload raised for every successfully reconciled frame.
#[derive(Debug, Clone, PartialEq)]
pub struct OcclusionFrameEvent {
    textures: Vec<FrameTexture>,
    shader_keywords: ShaderKeywords,
    frame: OcclusionFrame,
}

impl OcclusionFrameEvent {
    pub fn new(
        textures: Vec<FrameTexture>,
        shader_keywords: ShaderKeywords,
        frame: OcclusionFrame,
    ) -> Self {
        Self {
            textures,
            shader_keywords,
            frame,
        }
    }

    pub fn textures(&self) -> &[FrameTexture] {
        &self.textures
    }

    /// First texture bound to `property_id`.
    pub fn texture_for_property(&self, property_id: i32) -> Option<&FrameTexture> {
        self.textures.iter().find(|t| t.property_id == property_id)
    }

    pub fn shader_keywords(&self) -> &ShaderKeywords {
        &self.shader_keywords
    }

    pub fn frame(&self) -> &OcclusionFrame {
        &self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_properties_follow_mask() {
        let frame = OcclusionFrame::new();
        assert!(frame.properties().is_empty());
        assert_eq!(frame.timestamp_ns(), None);
        assert_eq!(frame.near_far_planes(), None);
        assert!(frame.poses().is_none());
        assert!(frame.fields_of_view().is_none());

        let frame = frame
            .with_timestamp_ns(1_000)
            .with_near_far_planes(0.1, 8.0)
            .with_poses(vec![Pose::default(); 2]);

        assert_eq!(
            frame.properties(),
            OcclusionFrameProperties::TIMESTAMP
                | OcclusionFrameProperties::NEAR_FAR_PLANES
                | OcclusionFrameProperties::POSES
        );
        assert_eq!(frame.timestamp_ns(), Some(1_000));
        assert_eq!(frame.near_far_planes().map(|p| p.far), Some(8.0));
        assert_eq!(frame.poses().map(|p| p.len()), Some(2));
        assert!(frame.fields_of_view().is_none());
    }

    #[test]
    fn test_frame_params_builders() {
        let params = FrameParams::new(1920, 1080, ScreenOrientation::LandscapeLeft)
            .with_clip_planes(0.05, 20.0);
        assert!(params.orientation.is_landscape());
        assert_eq!(params.near_clip, 0.05);
        assert_eq!(params.far_clip, 20.0);
        assert_eq!(params.aspect_ratio(), Some(1920.0 / 1080.0));

        assert_eq!(FrameParams::default().aspect_ratio(), None);
        assert!(!FrameParams::default().orientation.is_landscape());
    }

    #[test]
    fn test_empty_list_is_still_present() {
        let frame = OcclusionFrame::new().with_fields_of_view(Vec::new());
        assert_eq!(frame.fields_of_view(), Some(&[][..]));
    }
}
