//! Audio collaborator boundary
//!
//! The simulation emits `GameEvent`s; the host maps them to named cues and
//! hands them to whatever sink it constructed. Playback is fire-and-forget:
//! a sink must never fail loudly, and nothing here can reach back into the
//! simulation.

use crate::sim::state::{GameEvent, ItemKind};

/// Named sound cues, matching the shipped clip set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Fish,
    Hurt,
    Meat,
    Suplemen,
    GameOver,
}

impl SoundCue {
    /// Clip name as the asset pack spells it
    pub fn as_str(self) -> &'static str {
        match self {
            SoundCue::Fish => "fish",
            SoundCue::Hurt => "hurt",
            SoundCue::Meat => "meat",
            SoundCue::Suplemen => "suplemen",
            SoundCue::GameOver => "gameover",
        }
    }
}

/// Map a tick event to its cue, if it has one
pub fn cue_for_event(event: &GameEvent) -> Option<SoundCue> {
    match event {
        GameEvent::ItemCollected(ItemKind::Fish) => Some(SoundCue::Fish),
        GameEvent::ItemCollected(ItemKind::Meat) => Some(SoundCue::Meat),
        GameEvent::ItemCollected(ItemKind::Suplemen) => Some(SoundCue::Suplemen),
        GameEvent::PlayerHit | GameEvent::ShieldAbsorbed => Some(SoundCue::Hurt),
        GameEvent::GameOver => Some(SoundCue::GameOver),
        GameEvent::ChaseStarted | GameEvent::ChaseEnded => None,
    }
}

/// Playback sink injected by the host; implementations swallow their own
/// errors (log and continue)
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);
}

/// Sink that discards every cue (headless runs, tests)
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _cue: SoundCue) {}
}

/// Sink that logs cues instead of playing them
#[derive(Debug, Default)]
pub struct LogAudio;

impl AudioSink for LogAudio {
    fn play(&mut self, cue: SoundCue) {
        log::debug!("audio cue: {}", cue.as_str());
    }
}

/// Route every cue-worthy event from one tick into the sink
pub fn dispatch(events: &[GameEvent], sink: &mut dyn AudioSink) {
    for event in events {
        if let Some(cue) = cue_for_event(event) {
            sink.play(cue);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSink(Vec<SoundCue>);

    impl AudioSink for RecordingSink {
        fn play(&mut self, cue: SoundCue) {
            self.0.push(cue);
        }
    }

    #[test]
    fn test_item_events_map_to_their_cues() {
        assert_eq!(
            cue_for_event(&GameEvent::ItemCollected(ItemKind::Fish)),
            Some(SoundCue::Fish)
        );
        assert_eq!(
            cue_for_event(&GameEvent::ItemCollected(ItemKind::Suplemen)),
            Some(SoundCue::Suplemen)
        );
    }

    #[test]
    fn test_chase_events_are_silent() {
        assert_eq!(cue_for_event(&GameEvent::ChaseStarted), None);
        assert_eq!(cue_for_event(&GameEvent::ChaseEnded), None);
    }

    #[test]
    fn test_dispatch_preserves_order() {
        let events = [
            GameEvent::ItemCollected(ItemKind::Meat),
            GameEvent::ChaseStarted,
            GameEvent::PlayerHit,
            GameEvent::GameOver,
        ];
        let mut sink = RecordingSink::default();
        dispatch(&events, &mut sink);
        assert_eq!(
            sink.0,
            vec![SoundCue::Meat, SoundCue::Hurt, SoundCue::GameOver]
        );
    }
}
