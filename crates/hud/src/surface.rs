use glam::{IVec2, Vec2};
use hudspace_render::TextureRef;

/// Horizontal placement of a surface within the HUD extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAlign {
    Left,
    Middle,
    Right,
}

/// Vertical placement of a surface within the HUD extent.
///
/// `Top` maps to y = 0, matching the projection's Y convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlign {
    Top,
    Center,
    Bottom,
}

/// Preset scale factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scaling {
    /// Texture drawn at its native pixel size.
    Original,
    /// Texture stretched to the full HUD extent.
    Fullscreen,
}

/// One positioned, ordered HUD element.
///
/// Owned by the [`Hud`](crate::Hud) and mutated through id-keyed operations
/// on it. The texture behind the handle is externally owned and never freed
/// here.
#[derive(Debug, Clone)]
pub(crate) struct Surface {
    pub(crate) texture: TextureRef,
    pub(crate) position: IVec2,
    pub(crate) scale: Vec2,
}

impl Surface {
    pub(crate) fn new(texture: TextureRef, x: i32, y: i32) -> Self {
        Self {
            texture,
            position: IVec2::new(x, y),
            scale: Vec2::ONE,
        }
    }

    /// Quad dimensions this surface draws at right now.
    pub(crate) fn draw_size(&self) -> Vec2 {
        Vec2::new(
            self.texture.width() as f32 * self.scale.x,
            self.texture.height() as f32 * self.scale.y,
        )
    }

    /// Recompute the position from alignment against the given HUD extent.
    ///
    /// Evaluated once at call time against the texture's current (scaled)
    /// dimensions; later texture swaps or HUD resizes do not move the
    /// surface. Signed math, so an oversized texture aligns to a negative
    /// coordinate and clips at the viewport instead of wrapping.
    pub(crate) fn align(
        &mut self,
        width: u32,
        height: u32,
        horizontal: HorizontalAlign,
        vertical: VerticalAlign,
    ) {
        let extent = self.draw_size().as_ivec2();
        let w = width as i32;
        let h = height as i32;

        self.position.x = match horizontal {
            HorizontalAlign::Left => 0,
            HorizontalAlign::Right => w - extent.x,
            HorizontalAlign::Middle => (w - extent.x) / 2,
        };
        self.position.y = match vertical {
            VerticalAlign::Top => 0,
            VerticalAlign::Bottom => h - extent.y,
            VerticalAlign::Center => (h - extent.y) / 2,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hudspace_render::PlaceholderTexture;

    fn surface(w: u32, h: u32) -> Surface {
        Surface::new(PlaceholderTexture::loaded(w, h), 0, 0)
    }

    #[test]
    fn left_top_is_origin() {
        let mut s = surface(100, 50);
        s.position = IVec2::new(17, 23);
        s.align(800, 600, HorizontalAlign::Left, VerticalAlign::Top);
        assert_eq!(s.position, IVec2::new(0, 0));
    }

    #[test]
    fn right_bottom_hugs_far_corner() {
        let mut s = surface(100, 50);
        s.align(800, 600, HorizontalAlign::Right, VerticalAlign::Bottom);
        assert_eq!(s.position, IVec2::new(700, 550));
    }

    #[test]
    fn middle_center_uses_integer_division() {
        let mut s = surface(100, 50);
        s.align(800, 600, HorizontalAlign::Middle, VerticalAlign::Center);
        assert_eq!(s.position, IVec2::new(350, 275));

        // Odd remainder floors.
        let mut s = surface(101, 51);
        s.align(800, 600, HorizontalAlign::Middle, VerticalAlign::Center);
        assert_eq!(s.position, IVec2::new(349, 274));
    }

    #[test]
    fn oversized_texture_goes_negative_not_wrapped() {
        let mut s = surface(1000, 700);
        s.align(800, 600, HorizontalAlign::Middle, VerticalAlign::Center);
        assert_eq!(s.position, IVec2::new(-100, -50));
    }

    #[test]
    fn alignment_respects_scale() {
        let mut s = surface(100, 50);
        s.scale = Vec2::new(2.0, 2.0);
        s.align(800, 600, HorizontalAlign::Right, VerticalAlign::Bottom);
        assert_eq!(s.position, IVec2::new(600, 500));
    }

    #[test]
    fn draw_size_scales_texture_dimensions() {
        let mut s = surface(100, 50);
        assert_eq!(s.draw_size(), Vec2::new(100.0, 50.0));
        s.scale = Vec2::new(0.5, 3.0);
        assert_eq!(s.draw_size(), Vec2::new(50.0, 150.0));
    }
}
