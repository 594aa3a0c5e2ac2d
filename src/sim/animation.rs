//! Frame-index ticker over a fixed sprite strip
//!
//! Advances on a per-entity delay counter, independent of the game speed
//! multiplier. The animator never touches pixel data; it only tracks which
//! frame of the strip is current.

/// Sprite strip animator owned by a single entity
#[derive(Debug, Clone)]
pub struct SpriteAnimator {
    frame_count: usize,
    frame_width: u32,
    frame_height: u32,
    frame_delay_ticks: u32,
    looping: bool,
    current_frame: usize,
    ticks_since_advance: u32,
    playing: bool,
}

impl SpriteAnimator {
    /// Create an animator over `frame_count` frames of `frame_width` x
    /// `frame_height` pixels. A zero frame count is clamped to one so
    /// `current_frame` is always a valid index.
    pub fn new(
        frame_count: usize,
        frame_width: u32,
        frame_height: u32,
        frame_delay_ticks: u32,
        looping: bool,
    ) -> Self {
        Self {
            frame_count: frame_count.max(1),
            frame_width,
            frame_height,
            frame_delay_ticks: frame_delay_ticks.max(1),
            looping,
            current_frame: 0,
            ticks_since_advance: 0,
            playing: false,
        }
    }

    /// Single-frame stand-in used when a sprite sheet failed to load
    pub fn placeholder(width: u32, height: u32) -> Self {
        Self::new(1, width, height, 1, false)
    }

    /// Advance one tick; moves to the next frame every `frame_delay_ticks`
    pub fn update(&mut self) {
        if !self.playing {
            return;
        }
        self.ticks_since_advance += 1;
        if self.ticks_since_advance < self.frame_delay_ticks {
            return;
        }
        self.ticks_since_advance = 0;
        if self.current_frame + 1 < self.frame_count {
            self.current_frame += 1;
        } else if self.looping {
            self.current_frame = 0;
        } else {
            self.playing = false;
        }
    }

    pub fn play(&mut self) {
        self.playing = true;
    }

    pub fn stop(&mut self) {
        self.playing = false;
    }

    /// Rewind to the first frame and stop
    pub fn reset(&mut self) {
        self.current_frame = 0;
        self.ticks_since_advance = 0;
        self.playing = false;
    }

    /// A non-looping animation that has played through its last frame
    pub fn finished(&self) -> bool {
        !self.looping && !self.playing && self.current_frame == self.frame_count - 1
    }

    #[inline]
    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    #[inline]
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    #[inline]
    pub fn frame_size(&self) -> (u32, u32) {
        (self.frame_width, self.frame_height)
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_always_in_range() {
        let mut anim = SpriteAnimator::new(6, 32, 32, 2, true);
        anim.play();
        for _ in 0..100 {
            anim.update();
            assert!(anim.current_frame() < anim.frame_count());
        }
    }

    #[test]
    fn test_advances_on_delay() {
        let mut anim = SpriteAnimator::new(4, 32, 32, 3, true);
        anim.play();
        anim.update();
        anim.update();
        assert_eq!(anim.current_frame(), 0);
        anim.update();
        assert_eq!(anim.current_frame(), 1);
    }

    #[test]
    fn test_looping_wraps() {
        let mut anim = SpriteAnimator::new(3, 16, 16, 1, true);
        anim.play();
        for _ in 0..3 {
            anim.update();
        }
        assert_eq!(anim.current_frame(), 0);
        assert!(anim.is_playing());
    }

    #[test]
    fn test_non_looping_stops_on_last_frame() {
        let mut anim = SpriteAnimator::new(3, 16, 16, 1, false);
        anim.play();
        for _ in 0..10 {
            anim.update();
        }
        assert_eq!(anim.current_frame(), 2);
        assert!(!anim.is_playing());
        assert!(anim.finished());
    }

    #[test]
    fn test_paused_animator_holds_frame() {
        let mut anim = SpriteAnimator::new(4, 16, 16, 1, true);
        anim.play();
        anim.update();
        anim.stop();
        for _ in 0..5 {
            anim.update();
        }
        assert_eq!(anim.current_frame(), 1);
    }

    #[test]
    fn test_zero_frames_clamped() {
        let anim = SpriteAnimator::new(0, 16, 16, 1, true);
        assert_eq!(anim.frame_count(), 1);
        assert_eq!(anim.current_frame(), 0);
    }

    #[test]
    fn test_reset_rewinds() {
        let mut anim = SpriteAnimator::new(5, 16, 16, 1, false);
        anim.play();
        anim.update();
        anim.update();
        anim.reset();
        assert_eq!(anim.current_frame(), 0);
        assert!(!anim.is_playing());
        assert!(!anim.finished());
    }
}
