//! Ordered-surface HUD core: a layered stack of textured screen-space quads
//! composited over the scene from a per-frame callback.
//!
//! # Invariants
//! - Every live surface appears in the paint order exactly once; no
//!   duplicates, no dangling entries.
//! - Insertion order is back-to-front paint order; the last-drawn surface is
//!   visually on top.
//! - Reorders and removals are O(1) and only the moved surface's links
//!   change; every other surface's id stays valid.
//! - Textures are externally owned; the HUD never frees them.

mod arena;
mod hud;
mod surface;

pub use arena::{OrderedArena, SurfaceId};
pub use hud::{CompositeStats, FrameContext, Hud};
pub use surface::{HorizontalAlign, Scaling, VerticalAlign};

pub fn crate_info() -> &'static str {
    "hudspace-hud v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("hud"));
    }
}
