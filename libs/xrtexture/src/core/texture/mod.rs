// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Updatable texture wrappers, one per texture kind.

mod cubemap;
mod external;
mod render_texture;
mod render_texture_ref;
mod texture_2d;
mod texture_3d;
mod texture_info;
mod updatable;

pub use cubemap::Cubemap;
pub use render_texture::RenderTexture;
pub use render_texture_ref::RenderTextureRef;
pub use texture_2d::Texture2d;
pub use texture_3d::Texture3d;
pub use texture_info::{AnyUpdatableTexture, TextureInfo};
pub use updatable::UpdatableTexture;
