//! Infinite-scroll offset bookkeeping
//!
//! Two independent wrap-around offsets driven by the shared game speed: the
//! background layer scrolls at a parallax fraction of the ground layer. The
//! renderer draws each tile at its offset plus a second copy one tile width
//! to the right, which reads as a seamless loop from one finite image.

use crate::consts::BG_PARALLAX;

/// Background and ground scroll offsets, each kept in `(-tile_width, 0]`
#[derive(Debug, Clone)]
pub struct ScrollCoordinator {
    bg_offset: f32,
    ground_offset: f32,
    bg_tile_width: f32,
    ground_tile_width: f32,
}

impl ScrollCoordinator {
    /// Tile widths come from asset metadata; non-positive widths are clamped
    /// so the wrap rule stays well defined.
    pub fn new(bg_tile_width: f32, ground_tile_width: f32) -> Self {
        Self {
            bg_offset: 0.0,
            ground_offset: 0.0,
            bg_tile_width: bg_tile_width.max(1.0),
            ground_tile_width: ground_tile_width.max(1.0),
        }
    }

    /// Advance both layers one tick at the given ground speed (pixels/tick)
    pub fn advance(&mut self, game_speed: f32) {
        self.bg_offset = wrap(self.bg_offset - game_speed * BG_PARALLAX, self.bg_tile_width);
        self.ground_offset = wrap(self.ground_offset - game_speed, self.ground_tile_width);
    }

    pub fn reset(&mut self) {
        self.bg_offset = 0.0;
        self.ground_offset = 0.0;
    }

    #[inline]
    pub fn bg_offset(&self) -> f32 {
        self.bg_offset
    }

    #[inline]
    pub fn ground_offset(&self) -> f32 {
        self.ground_offset
    }

    #[inline]
    pub fn bg_tile_width(&self) -> f32 {
        self.bg_tile_width
    }

    #[inline]
    pub fn ground_tile_width(&self) -> f32 {
        self.ground_tile_width
    }
}

/// Wrap a leftward-moving offset back into `(-tile_width, 0]`
fn wrap(mut offset: f32, tile_width: f32) -> f32 {
    while offset <= -tile_width {
        offset += tile_width;
    }
    offset
}
