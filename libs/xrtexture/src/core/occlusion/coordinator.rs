// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Per-render-callback occlusion texture reconciliation.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use super::{FrameParams, FrameTexture, OcclusionFrameEvent, OcclusionProvider};
use crate::core::config::{OcclusionConfig, SwapchainMode};
use crate::core::rhi::{TextureBackend, TextureDescriptor};
use crate::core::swapchain::{FixedLengthSwapchainStrategy, NoSwapchainStrategy, SwapchainStrategy};
use crate::core::Result;

/// Receives every frame the coordinator raises.
///
/// Runs on the render callback; keep it short.
pub trait OcclusionFrameListener: Send {
    fn on_frame_received(&mut self, event: &OcclusionFrameEvent);
}

/// Counters over the coordinator's lifetime.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CoordinatorStats {
    pub frames_raised: u64,
    pub frames_dropped: u64,
    pub consecutive_frames_dropped: u32,
}

/// Drives texture reconciliation from the render loop.
///
/// The swapchain strategy is chosen once in [`start`](Self::start) and owned
/// for the coordinator's lifetime.
pub struct OcclusionFrameCoordinator<P: OcclusionProvider> {
    provider: P,
    strategy: Box<dyn SwapchainStrategy>,
    config: OcclusionConfig,
    /// Reused every frame.
    descriptors: Vec<TextureDescriptor>,
    listeners: Vec<Weak<Mutex<dyn OcclusionFrameListener>>>,
    stats: CoordinatorStats,
    running: bool,
}

impl<P: OcclusionProvider> OcclusionFrameCoordinator<P> {
    /// Select the strategy and build the swapchain textures.
    ///
    /// A malformed swapchain table is returned as an error.
    pub fn start(
        mut provider: P,
        backend: Arc<dyn TextureBackend>,
        config: OcclusionConfig,
    ) -> Result<Self> {
        let swapchain = match config.swapchain_mode {
            SwapchainMode::Auto => provider.swapchain_descriptors(),
            SwapchainMode::NoSwapchain => None,
        };

        let strategy: Box<dyn SwapchainStrategy> = match swapchain {
            Some(table) => Box::new(FixedLengthSwapchainStrategy::new(backend, &table)?),
            None => Box::new(NoSwapchainStrategy::new(backend)),
        };
        tracing::info!("Occlusion textures reconciled with {}", strategy.name());

        Ok(Self {
            provider,
            strategy,
            config,
            descriptors: Vec::new(),
            listeners: Vec::new(),
            stats: CoordinatorStats::default(),
            running: true,
        })
    }

    /// Subscribe to raised frames. Only a weak reference is kept; dropping
    /// the listener unsubscribes it.
    pub fn subscribe(&mut self, listener: Arc<Mutex<dyn OcclusionFrameListener>>) {
        self.listeners.push(Arc::downgrade(&listener));
    }

    /// Reconcile this frame's textures and raise the frame event.
    ///
    /// Returns `Ok(None)` when there is no new frame or the textures are not
    /// ready yet; the next call retries. Transient backend errors count as
    /// dropped frames. Provider contract violations and textures that can
    /// never be built are returned as errors.
    pub fn on_before_render(
        &mut self,
        params: &FrameParams,
    ) -> Result<Option<Arc<OcclusionFrameEvent>>> {
        if !self.running {
            return Ok(None);
        }
        let Some(frame) = self.provider.try_get_frame(params) else {
            return Ok(None);
        };

        self.provider.texture_descriptors(&mut self.descriptors);
        let reconciled = match self
            .strategy
            .try_update_texture_infos_for_frame(&self.descriptors)
        {
            Ok(update) if update.success => {
                Some(update.textures.iter().map(FrameTexture::from).collect::<Vec<_>>())
            }
            Ok(_) => None,
            Err(e) if e.is_transient() => {
                tracing::debug!("Occlusion textures unavailable this frame: {}", e);
                None
            }
            Err(e) => return Err(e),
        };

        let Some(textures) = reconciled else {
            self.record_dropped_frame();
            return Ok(None);
        };

        let event = Arc::new(OcclusionFrameEvent::new(
            textures,
            self.provider.shader_keywords(),
            frame,
        ));

        self.stats.frames_raised += 1;
        self.stats.consecutive_frames_dropped = 0;
        self.dispatch(&event);
        Ok(Some(event))
    }

    fn record_dropped_frame(&mut self) {
        self.stats.frames_dropped = self.stats.frames_dropped.saturating_add(1);
        self.stats.consecutive_frames_dropped =
            self.stats.consecutive_frames_dropped.saturating_add(1);
        tracing::debug!(
            "Occlusion frame dropped: textures not ready ({} in a row)",
            self.stats.consecutive_frames_dropped
        );

        let threshold = self.config.dropped_frame_warn_threshold;
        if threshold > 0 && self.stats.consecutive_frames_dropped == threshold {
            tracing::warn!(
                "{} consecutive occlusion frames dropped by {}",
                threshold,
                self.strategy.name()
            );
        }
    }

    fn dispatch(&mut self, event: &OcclusionFrameEvent) {
        self.listeners.retain(|weak| weak.strong_count() > 0);
        for weak in &self.listeners {
            if let Some(listener) = weak.upgrade() {
                listener.lock().on_frame_received(event);
            }
        }
    }

    /// Release every texture. Later calls to
    /// [`on_before_render`](Self::on_before_render) raise nothing.
    pub fn stop(&mut self) {
        if self.running {
            self.strategy.destroy_textures();
            self.running = false;
            tracing::debug!("Occlusion frame coordinator stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn stats(&self) -> CoordinatorStats {
        self.stats.clone()
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn listener_count(&self) -> usize {
        self.listeners
            .iter()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }
}

impl<P: OcclusionProvider> std::fmt::Debug for OcclusionFrameCoordinator<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OcclusionFrameCoordinator")
            .field("strategy", &self.strategy.name())
            .field("running", &self.running)
            .field("stats", &self.stats)
            .finish()
    }
}
