use glam::{Vec2, Vec3};
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A 2D texture resource owned by the embedding application.
///
/// The compositor only reads metadata. A texture that is not yet uploaded
/// reports `is_loaded() == false`; until it is ready it may report zero
/// dimensions, which consumers treat as "skip, no geometry".
pub trait Texture2d: fmt::Debug {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    /// Whether the renderer-side resource exists yet.
    fn is_loaded(&self) -> bool;
}

/// Shared handle to an externally-owned texture.
///
/// The resource system behind the handle must outlive every consumer holding
/// one; the compositor never releases the underlying resource.
pub type TextureRef = Arc<dyn Texture2d>;

/// One textured triangle in screen space: positions, a shared normal, UVs,
/// and the texture to sample.
#[derive(Debug, Clone)]
pub struct Face {
    pub vertices: [Vec3; 3],
    /// Shared by all three vertices; overlay faces use +Z.
    pub normal: Vec3,
    pub uvs: [Vec2; 3],
    pub texture: TextureRef,
}

/// Stand-in texture for tests and demos.
///
/// Reports zero dimensions until marked loaded, mimicking a resource whose
/// upload has not completed yet.
#[derive(Debug)]
pub struct PlaceholderTexture {
    width: u32,
    height: u32,
    loaded: AtomicBool,
}

impl PlaceholderTexture {
    /// A ready texture with the given dimensions.
    pub fn loaded(width: u32, height: u32) -> Arc<Self> {
        Arc::new(Self {
            width,
            height,
            loaded: AtomicBool::new(true),
        })
    }

    /// A not-yet-uploaded texture. It reports zero dimensions until
    /// [`PlaceholderTexture::mark_loaded`] is called.
    pub fn unloaded(width: u32, height: u32) -> Arc<Self> {
        Arc::new(Self {
            width,
            height,
            loaded: AtomicBool::new(false),
        })
    }

    /// Simulate the resource system completing the upload.
    pub fn mark_loaded(&self) {
        self.loaded.store(true, Ordering::Relaxed);
    }
}

impl Texture2d for PlaceholderTexture {
    fn width(&self) -> u32 {
        if self.is_loaded() { self.width } else { 0 }
    }

    fn height(&self) -> u32 {
        if self.is_loaded() { self.height } else { 0 }
    }

    fn is_loaded(&self) -> bool {
        self.loaded.load(Ordering::Relaxed)
    }
}
