use crate::{Face, OrthoVolume, RenderState, TextureRef};

/// Errors surfaced by a renderer backend.
///
/// The compositor never produces these itself; backend failures propagate
/// through it untranslated.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("texture upload failed: {0}")]
    TextureUpload(String),
    #[error("draw call rejected: {0}")]
    Draw(String),
    #[error("renderer device lost: {0}")]
    DeviceLost(String),
}

/// Renderer-agnostic interface. All backends implement this trait.
///
/// Consumers drive it in four moves: install a projection, scope the
/// fixed-function state, upload textures on demand, emit triangles.
pub trait Renderer {
    /// Install a projection for subsequent draw calls.
    fn apply_viewing_volume(&mut self, volume: &OrthoVolume);

    /// Current fixed-function state snapshot.
    fn render_state(&self) -> RenderState;

    /// Replace the fixed-function state.
    fn set_render_state(&mut self, state: RenderState);

    /// Upload a texture. Idempotent for already-uploaded resources.
    fn load_texture(&mut self, texture: &TextureRef) -> Result<(), RenderError>;

    /// Emit one triangle with position/normal/UV/texture attached.
    fn draw_face(&mut self, face: &Face) -> Result<(), RenderError>;
}

/// Records every call for inspection: the reference backend used by tests
/// and the CLI while no GPU backend is wired up. The trait is the stable
/// part; this backend swaps out without touching consumers.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    state: RenderState,
    volumes: Vec<OrthoVolume>,
    state_changes: Vec<RenderState>,
    load_requests: Vec<TextureRef>,
    faces: Vec<Face>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every viewing volume applied, in order.
    pub fn applied_volumes(&self) -> &[OrthoVolume] {
        &self.volumes
    }

    /// Every state replacement, in order (the current state is separate).
    pub fn state_changes(&self) -> &[RenderState] {
        &self.state_changes
    }

    /// Every texture upload request, in order. Repeat requests for the same
    /// resource are recorded too, so callers can check idempotent usage.
    pub fn load_requests(&self) -> &[TextureRef] {
        &self.load_requests
    }

    /// Every triangle drawn, in order.
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Forget recorded calls but keep the current state.
    pub fn clear(&mut self) {
        self.volumes.clear();
        self.state_changes.clear();
        self.load_requests.clear();
        self.faces.clear();
    }

    /// Human-readable dump of the recorded frame.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "=== Recorded frame (faces={}, loads={}, volumes={}) ===\n",
            self.faces.len(),
            self.load_requests.len(),
            self.volumes.len()
        ));
        for (i, face) in self.faces.iter().enumerate() {
            let v = face.vertices;
            out.push_str(&format!(
                "  [{}] tex={}x{} v=({:.0},{:.0}) ({:.0},{:.0}) ({:.0},{:.0})\n",
                i,
                face.texture.width(),
                face.texture.height(),
                v[0].x,
                v[0].y,
                v[1].x,
                v[1].y,
                v[2].x,
                v[2].y
            ));
        }
        out
    }
}

impl Renderer for RecordingRenderer {
    fn apply_viewing_volume(&mut self, volume: &OrthoVolume) {
        self.volumes.push(*volume);
    }

    fn render_state(&self) -> RenderState {
        self.state
    }

    fn set_render_state(&mut self, state: RenderState) {
        self.state = state;
        self.state_changes.push(state);
    }

    fn load_texture(&mut self, texture: &TextureRef) -> Result<(), RenderError> {
        tracing::debug!(
            width = texture.width(),
            height = texture.height(),
            "texture upload requested"
        );
        self.load_requests.push(texture.clone());
        Ok(())
    }

    fn draw_face(&mut self, face: &Face) -> Result<(), RenderError> {
        tracing::trace!(vertices = ?face.vertices, "face recorded");
        self.faces.push(face.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlaceholderTexture;
    use glam::{Vec2, Vec3};

    fn quad_half(texture: TextureRef) -> Face {
        Face {
            vertices: [Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0), Vec3::ONE],
            normal: Vec3::Z,
            uvs: [Vec2::ZERO, Vec2::Y, Vec2::ONE],
            texture,
        }
    }

    #[test]
    fn records_calls_in_order() {
        let mut r = RecordingRenderer::new();
        let tex: TextureRef = PlaceholderTexture::loaded(4, 4);

        r.apply_viewing_volume(&OrthoVolume::screen(800, 600));
        r.load_texture(&tex).unwrap();
        r.draw_face(&quad_half(tex.clone())).unwrap();
        r.draw_face(&quad_half(tex)).unwrap();

        assert_eq!(r.applied_volumes().len(), 1);
        assert_eq!(r.load_requests().len(), 1);
        assert_eq!(r.faces().len(), 2);
    }

    #[test]
    fn state_round_trip() {
        let mut r = RecordingRenderer::new();
        let before = r.render_state();
        r.set_render_state(RenderState::overlay());
        assert_eq!(r.render_state(), RenderState::overlay());
        r.set_render_state(before);
        assert_eq!(r.render_state(), before);
        assert_eq!(r.state_changes().len(), 2);
    }

    #[test]
    fn summary_mentions_faces() {
        let mut r = RecordingRenderer::new();
        let tex: TextureRef = PlaceholderTexture::loaded(16, 8);
        r.draw_face(&quad_half(tex)).unwrap();
        let s = r.summary();
        assert!(s.contains("faces=1"));
        assert!(s.contains("tex=16x8"));
    }

    #[test]
    fn clear_keeps_current_state() {
        let mut r = RecordingRenderer::new();
        r.set_render_state(RenderState::overlay());
        r.clear();
        assert!(r.state_changes().is_empty());
        assert_eq!(r.render_state(), RenderState::overlay());
    }
}
