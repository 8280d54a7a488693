// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! The updatable texture contract shared by every texture kind.

use crate::core::rhi::{GpuTextureId, TextureDescriptor};
use crate::core::Result;

/// A GPU texture kept in sync with a per-frame [`TextureDescriptor`].
///
/// Each implementation owns at most one GPU object (render texture
/// references own none). When [`texture`](Self::texture) is `Some`, the
/// stored descriptor describes that object.
pub trait UpdatableTexture {
    /// Descriptor the current texture was built or last updated from.
    fn descriptor(&self) -> &TextureDescriptor;

    /// Current GPU object, `None` before creation completes or after destroy.
    fn texture(&self) -> Option<GpuTextureId>;

    /// Reconcile with this frame's descriptor.
    ///
    /// - identical descriptor: no-op
    /// - metadata-identical (handle changed): rebind in place
    /// - anything else: destroy and recreate
    ///
    /// `Ok(false)` means the texture is not usable this frame but may be on a
    /// later one. `Err` is reserved for failures retrying cannot fix.
    fn try_update_from_descriptor(&mut self, descriptor: &TextureDescriptor) -> Result<bool>;

    /// Release the GPU object. Idempotent.
    fn destroy_texture(&mut self);

    fn is_destroyed(&self) -> bool;
}
