// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Occlusion configuration via `xrtexture.yaml`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{Result, XrError};

/// Which swapchain strategy the coordinator may pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwapchainMode {
    /// Fixed-length when the provider declares a swapchain, else none.
    #[default]
    Auto,
    /// Always keep only the latest frame's textures.
    NoSwapchain,
}

/// Coordinator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OcclusionConfig {
    pub swapchain_mode: SwapchainMode,
    /// Warn once after this many consecutive dropped frames. `0` disables.
    pub dropped_frame_warn_threshold: u32,
}

impl Default for OcclusionConfig {
    fn default() -> Self {
        Self {
            swapchain_mode: SwapchainMode::Auto,
            dropped_frame_warn_threshold: 30,
        }
    }
}

impl OcclusionConfig {
    /// Configuration file name.
    pub const FILE_NAME: &'static str = "xrtexture.yaml";

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| XrError::Configuration(format!("Failed to parse config: {}", e)))
    }

    /// Load from a directory. Returns error if the file is missing or cannot
    /// be parsed.
    pub fn load(dir: &Path) -> Result<Self> {
        let config_path = dir.join(Self::FILE_NAME);

        let content = std::fs::read_to_string(&config_path).map_err(|e| {
            XrError::Configuration(format!("Failed to read {}: {}", config_path.display(), e))
        })?;

        let config: Self = serde_yaml::from_str(&content).map_err(|e| {
            XrError::Configuration(format!("Failed to parse {}: {}", config_path.display(), e))
        })?;

        tracing::info!("Loaded occlusion config from {}", config_path.display());
        Ok(config)
    }

    /// Load from a directory, falling back to defaults if the file is missing
    /// or unparseable.
    pub fn load_or_default(dir: &Path) -> Self {
        let config_path = dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            tracing::debug!(
                "No {} found in {}, using defaults",
                Self::FILE_NAME,
                dir.display()
            );
            return Self::default();
        }

        match Self::load(dir) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }
}
