// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Tracing subscriber setup for hosts that have none of their own.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `xrtexture=debug`.
pub const LOG_ENV_VAR: &str = "XRTEXTURE_LOG";

static LOGGING_INSTALLED: AtomicBool = AtomicBool::new(false);

/// Install a fmt subscriber filtered by [`LOG_ENV_VAR`], or by
/// `default_directive` when the variable is unset or invalid.
///
/// Returns `true` if this call installed the subscriber. Later calls, and
/// calls made after the host installed its own global subscriber, are no-ops.
pub fn init_logging(default_directive: &str) -> bool {
    if LOGGING_INSTALLED.swap(true, Ordering::SeqCst) {
        return false;
    }

    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(default_directive))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
