use glam::{IVec2, Vec2, Vec3};
use hudspace_render::{Face, OrthoVolume, RenderError, RenderState, Renderer, TextureRef};

use crate::arena::{OrderedArena, SurfaceId};
use crate::surface::{HorizontalAlign, Scaling, Surface, VerticalAlign};

/// Per-frame event handed to [`Hud::handle`], carrying the active renderer.
///
/// Fired by the rendering pipeline once per frame, after the main scene
/// pass.
pub struct FrameContext<'a> {
    pub renderer: &'a mut dyn Renderer,
}

/// Statistics from the last composite pass, for instrumentation.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompositeStats {
    pub surfaces_drawn: usize,
    /// Surfaces whose texture reported a zero dimension this pass.
    pub surfaces_skipped: usize,
    pub loads_requested: usize,
}

/// Heads-up display: the render-order authority for an ordered stack of
/// textured screen-space quads.
///
/// Insertion order is back-to-front paint order; the earliest-created
/// surface is painted first and sits visually behind later ones. Surfaces
/// are owned by the `Hud` and addressed by [`SurfaceId`]; dropping the `Hud`
/// releases every remaining surface entry (never the textures).
///
/// Attach [`Hud::handle`] to the pipeline's post-process callback. The
/// pipeline is expected to reapply its own scene projection each frame; the
/// overlay projection installed here is only meant for this pass.
#[derive(Debug)]
pub struct Hud {
    width: u32,
    height: u32,
    surfaces: OrderedArena<Surface>,
    stats: CompositeStats,
}

impl Default for Hud {
    fn default() -> Self {
        Self::new()
    }
}

impl Hud {
    /// HUD with the default 800x600 logical extent.
    pub fn new() -> Self {
        Self::with_size(800, 600)
    }

    /// HUD with a specific logical pixel extent.
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            surfaces: OrderedArena::new(),
            stats: CompositeStats::default(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn surface_count(&self) -> usize {
        self.surfaces.len()
    }

    pub fn contains(&self, id: SurfaceId) -> bool {
        self.surfaces.contains(id)
    }

    /// Statistics from the most recent [`Hud::handle`] pass.
    pub fn stats(&self) -> CompositeStats {
        self.stats
    }

    /// Create a surface at the front-most paint position (drawn last, on
    /// top of everything created before it).
    ///
    /// The texture may still be unloaded or zero-sized; such surfaces are
    /// silently skipped at render time until they become ready.
    pub fn create_surface(&mut self, texture: TextureRef, x: i32, y: i32) -> SurfaceId {
        let id = self.surfaces.push_back(Surface::new(texture, x, y));
        tracing::debug!(?id, x, y, "surface created");
        id
    }

    /// Remove a surface from the paint order. Its only effect is the
    /// removal; the texture resource is untouched. Returns false for ids
    /// already destroyed.
    pub fn destroy(&mut self, id: SurfaceId) -> bool {
        let removed = self.surfaces.remove(id).is_some();
        if removed {
            tracing::debug!(?id, "surface destroyed");
        }
        removed
    }

    /// Make the surface the last-painted (top-most) element. No observable
    /// change when it is already at the front.
    pub fn move_to_front(&mut self, id: SurfaceId) -> bool {
        self.surfaces.move_to_tail(id)
    }

    /// Make the surface the first-painted (bottom-most) element.
    pub fn move_to_back(&mut self, id: SurfaceId) -> bool {
        self.surfaces.move_to_head(id)
    }

    /// Absolute pixel placement. No bounds check: off-screen positions are
    /// valid and clip at the renderer's viewport.
    pub fn set_position(&mut self, id: SurfaceId, x: i32, y: i32) -> bool {
        match self.surfaces.get_mut(id) {
            Some(surface) => {
                surface.position = IVec2::new(x, y);
                true
            }
            None => false,
        }
    }

    pub fn set_position_vec(&mut self, id: SurfaceId, position: IVec2) -> bool {
        self.set_position(id, position.x, position.y)
    }

    pub fn position(&self, id: SurfaceId) -> Option<IVec2> {
        self.surfaces.get(id).map(|s| s.position)
    }

    /// Place the surface by alignment against the HUD extent. Computed once,
    /// now; later texture swaps or HUD resizes do not move the surface.
    pub fn set_alignment(
        &mut self,
        id: SurfaceId,
        horizontal: HorizontalAlign,
        vertical: VerticalAlign,
    ) -> bool {
        let (width, height) = (self.width, self.height);
        match self.surfaces.get_mut(id) {
            Some(surface) => {
                surface.align(width, height, horizontal, vertical);
                true
            }
            None => false,
        }
    }

    /// Per-axis scale factors applied to the emitted quad size.
    pub fn set_scale(&mut self, id: SurfaceId, scale_x: f32, scale_y: f32) -> bool {
        match self.surfaces.get_mut(id) {
            Some(surface) => {
                surface.scale = Vec2::new(scale_x, scale_y);
                true
            }
            None => false,
        }
    }

    pub fn set_scale_vec(&mut self, id: SurfaceId, scale: Vec2) -> bool {
        self.set_scale(id, scale.x, scale.y)
    }

    /// Apply a preset scale. `Fullscreen` is computed once from the current
    /// texture dimensions; a zero-sized texture leaves the scale unchanged.
    pub fn set_scaling(&mut self, id: SurfaceId, scaling: Scaling) -> bool {
        let (width, height) = (self.width, self.height);
        match self.surfaces.get_mut(id) {
            Some(surface) => {
                match scaling {
                    Scaling::Original => surface.scale = Vec2::ONE,
                    Scaling::Fullscreen => {
                        let tw = surface.texture.width();
                        let th = surface.texture.height();
                        if tw != 0 && th != 0 {
                            surface.scale =
                                Vec2::new(width as f32 / tw as f32, height as f32 / th as f32);
                        }
                    }
                }
                true
            }
            None => false,
        }
    }

    pub fn scale(&self, id: SurfaceId) -> Option<Vec2> {
        self.surfaces.get(id).map(|s| s.scale)
    }

    /// Surface ids in paint order, back to front.
    pub fn paint_order(&self) -> impl Iterator<Item = SurfaceId> + '_ {
        self.surfaces.iter().map(|(id, _)| id)
    }

    /// Composite every surface over the scene.
    ///
    /// Installs an orthographic projection over `[0,width] x [0,height]`,
    /// scopes the render state to overlay settings (depth test off, alpha
    /// blending on, lighting off), paints surfaces in sequence order, and
    /// restores the full prior state. Surfaces with unloaded textures get a
    /// load request; surfaces reporting a zero dimension are skipped without
    /// error. Renderer failures propagate untouched.
    pub fn handle(&mut self, ctx: &mut FrameContext<'_>) -> Result<(), RenderError> {
        let _span = tracing::trace_span!("hud_composite").entered();
        let renderer = &mut *ctx.renderer;

        renderer.apply_viewing_volume(&OrthoVolume::screen(self.width, self.height));

        let scene_state = renderer.render_state();
        renderer.set_render_state(RenderState::overlay());

        let mut stats = CompositeStats::default();
        for (_, surface) in self.surfaces.iter() {
            if !surface.texture.is_loaded() {
                renderer.load_texture(&surface.texture)?;
                stats.loads_requested += 1;
            }
            if surface.texture.width() == 0 || surface.texture.height() == 0 {
                stats.surfaces_skipped += 1;
                continue;
            }
            emit_quad(renderer, surface)?;
            stats.surfaces_drawn += 1;
        }

        renderer.set_render_state(scene_state);

        tracing::trace!(
            drawn = stats.surfaces_drawn,
            skipped = stats.surfaces_skipped,
            loads = stats.loads_requested,
            "composite pass complete"
        );
        self.stats = stats;
        Ok(())
    }
}

/// Emit the two triangles of one surface quad, with the corner UV mapping
/// that leaves the image unflipped under the screen projection.
fn emit_quad(renderer: &mut dyn Renderer, surface: &Surface) -> Result<(), RenderError> {
    let origin = surface.position.as_vec2();
    let size = surface.draw_size();
    let (x, y) = (origin.x, origin.y);
    let (w, h) = (size.x, size.y);

    let normal = Vec3::Z;
    let v1 = Vec3::new(x, y, 0.0);
    let v2 = Vec3::new(x, y + h, 0.0);
    let v3 = Vec3::new(x + w, y + h, 0.0);
    let v4 = Vec3::new(x + w, y, 0.0);
    let t1 = Vec2::new(0.0, 1.0);
    let t2 = Vec2::new(0.0, 0.0);
    let t3 = Vec2::new(1.0, 0.0);
    let t4 = Vec2::new(1.0, 1.0);

    renderer.draw_face(&Face {
        vertices: [v1, v2, v3],
        normal,
        uvs: [t1, t2, t3],
        texture: surface.texture.clone(),
    })?;
    renderer.draw_face(&Face {
        vertices: [v1, v3, v4],
        normal,
        uvs: [t1, t3, t4],
        texture: surface.texture.clone(),
    })?;
    Ok(())
}
