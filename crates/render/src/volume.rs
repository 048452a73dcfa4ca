use glam::Mat4;

/// Orthographic viewing volume mapping pixel coordinates directly to screen
/// space, so overlay geometry is unaffected by camera perspective.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthoVolume {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    pub near: f32,
    pub far: f32,
}

impl OrthoVolume {
    /// Volume spanning `[0, width] x [0, height]` with near/far `[-1, 1]`.
    pub fn screen(width: u32, height: u32) -> Self {
        Self {
            left: 0.0,
            right: width as f32,
            bottom: 0.0,
            top: height as f32,
            near: -1.0,
            far: 1.0,
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::orthographic_rh(
            self.left, self.right, self.bottom, self.top, self.near, self.far,
        )
    }
}
