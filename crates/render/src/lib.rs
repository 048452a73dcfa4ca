//! Renderer-agnostic interface for HUD compositing.
//!
//! # Invariants
//! - The compositor talks to the renderer only through these types; no
//!   graphics API leaks across this boundary.
//! - Texture resources are externally owned. Nothing here frees them.
//!
//! The [`Renderer`] trait is stable; swap in a GPU backend without changing
//! consumers. [`RecordingRenderer`] is the shipped reference implementation
//! used by tests and the CLI.

mod face;
mod renderer;
mod state;
mod volume;

pub use face::{Face, PlaceholderTexture, Texture2d, TextureRef};
pub use renderer::{RecordingRenderer, RenderError, Renderer};
pub use state::{BlendMode, RenderState};
pub use volume::OrthoVolume;

pub fn crate_info() -> &'static str {
    "hudspace-render v0.1.0"
}
