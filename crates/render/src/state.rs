/// Blend function applied while blending is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Source color replaces the destination outright.
    #[default]
    Replace,
    /// Standard "source-alpha over" compositing.
    SourceAlphaOver,
}

/// Snapshot of the fixed-function state the compositor touches.
///
/// Backends expose their current state through this struct and accept a
/// replacement; callers that need scoped changes snapshot, set, and restore.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderState {
    pub depth_test: bool,
    pub blending: bool,
    pub blend_mode: BlendMode,
    pub lighting: bool,
}

impl Default for RenderState {
    /// Typical scene-pass state: depth-tested, opaque, lit.
    fn default() -> Self {
        Self {
            depth_test: true,
            blending: false,
            blend_mode: BlendMode::Replace,
            lighting: true,
        }
    }
}

impl RenderState {
    /// State a screen-space overlay pass runs under: no depth test (paint
    /// order decides occlusion), alpha blending, no lighting.
    pub fn overlay() -> Self {
        Self {
            depth_test: false,
            blending: true,
            blend_mode: BlendMode::SourceAlphaOver,
            lighting: false,
        }
    }
}
