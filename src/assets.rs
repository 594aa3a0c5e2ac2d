//! Asset collaborator boundary
//!
//! The simulation never decodes image files; it is handed sprite-sheet
//! *metadata* (frame counts and frame dimensions) at construction time. A
//! sheet the host failed to load is simply absent from the catalog, and the
//! entity degrades to a single-frame placeholder the renderer draws as a
//! solid rectangle. Nothing in this module can fail at tick time.

use std::collections::HashMap;

use crate::sim::animation::SpriteAnimator;

/// Every sprite sheet the game knows how to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SheetKind {
    PlayerRun,
    PlayerDeath,
    GroundObstacle,
    BirdObstacle,
    Chaser,
    Fish,
    Meat,
    Suplemen,
    BackgroundDay,
    BackgroundNight,
    Platform,
}

/// Dimensions of one loaded sprite strip
#[derive(Debug, Clone, Copy)]
pub struct SheetSpec {
    pub frame_count: usize,
    pub frame_width: u32,
    pub frame_height: u32,
}

impl SheetSpec {
    pub fn new(frame_count: usize, frame_width: u32, frame_height: u32) -> Self {
        Self {
            frame_count,
            frame_width,
            frame_height,
        }
    }
}

/// Sheet metadata injected into the game session by the host
#[derive(Debug, Clone, Default)]
pub struct AssetCatalog {
    sheets: HashMap<SheetKind, SheetSpec>,
}

impl AssetCatalog {
    /// Catalog with no sheets: every entity gets a placeholder visual
    pub fn empty() -> Self {
        Self::default()
    }

    /// Catalog describing the shipped sprite sheets
    pub fn with_defaults() -> Self {
        let mut catalog = Self::empty();
        catalog.insert(SheetKind::PlayerRun, SheetSpec::new(6, 48, 48));
        catalog.insert(SheetKind::PlayerDeath, SheetSpec::new(4, 48, 48));
        catalog.insert(SheetKind::GroundObstacle, SheetSpec::new(1, 30, 50));
        catalog.insert(SheetKind::BirdObstacle, SheetSpec::new(6, 32, 32));
        catalog.insert(SheetKind::Chaser, SheetSpec::new(6, 64, 64));
        catalog.insert(SheetKind::Fish, SheetSpec::new(1, 32, 32));
        catalog.insert(SheetKind::Meat, SheetSpec::new(1, 32, 32));
        catalog.insert(SheetKind::Suplemen, SheetSpec::new(1, 32, 32));
        catalog.insert(SheetKind::BackgroundDay, SheetSpec::new(1, 800, 600));
        catalog.insert(SheetKind::BackgroundNight, SheetSpec::new(1, 800, 600));
        catalog.insert(SheetKind::Platform, SheetSpec::new(1, 400, 220));
        catalog
    }

    pub fn insert(&mut self, kind: SheetKind, spec: SheetSpec) {
        self.sheets.insert(kind, spec);
    }

    pub fn get(&self, kind: SheetKind) -> Option<&SheetSpec> {
        self.sheets.get(&kind)
    }

    /// True when the sheet is absent and its users draw as placeholders
    pub fn is_placeholder(&self, kind: SheetKind) -> bool {
        !self.sheets.contains_key(&kind)
    }

    /// Build an animator for a sheet, degrading to a one-frame placeholder
    /// when the sheet is missing. Returns `(animator, is_placeholder)`.
    pub fn animator(
        &self,
        kind: SheetKind,
        frame_delay_ticks: u32,
        looping: bool,
    ) -> (SpriteAnimator, bool) {
        match self.get(kind) {
            Some(spec) => (
                SpriteAnimator::new(
                    spec.frame_count,
                    spec.frame_width,
                    spec.frame_height,
                    frame_delay_ticks,
                    looping,
                ),
                false,
            ),
            None => {
                log::warn!("sprite sheet {kind:?} missing, drawing placeholder");
                let (w, h) = nominal_frame_size(kind);
                (SpriteAnimator::placeholder(w, h), true)
            }
        }
    }

    /// Tile width for a scrolling layer, with a fallback for missing sheets
    pub fn tile_width(&self, kind: SheetKind, fallback: f32) -> f32 {
        self.get(kind)
            .map(|spec| spec.frame_width as f32)
            .unwrap_or(fallback)
    }
}

/// Placeholder dimensions when a sheet never loaded
fn nominal_frame_size(kind: SheetKind) -> (u32, u32) {
    match kind {
        SheetKind::PlayerRun | SheetKind::PlayerDeath => (48, 48),
        SheetKind::GroundObstacle => (30, 50),
        SheetKind::BirdObstacle => (32, 32),
        SheetKind::Chaser => (64, 64),
        SheetKind::Fish | SheetKind::Meat | SheetKind::Suplemen => (32, 32),
        SheetKind::BackgroundDay | SheetKind::BackgroundNight => (800, 600),
        SheetKind::Platform => (400, 220),
    }
}
