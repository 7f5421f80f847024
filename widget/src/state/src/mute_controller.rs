use std::rc::Rc;

use leptos::prelude::*;
use utils::media::VideoHandle;

use crate::audio_state::AudioState;
use crate::media_registry::MediaRegistry;

/// Owns writes to the global mute flag and pushes it out to tracked media.
///
/// Handlers read the flag from the signal when they run, never from a copy
/// taken when they were registered.
#[derive(Clone)]
pub struct MuteController {
    muted: RwSignal<bool>,
    registry: Rc<MediaRegistry>,
}

impl MuteController {
    pub fn new(audio: AudioState, registry: Rc<MediaRegistry>) -> Self {
        Self {
            muted: audio.muted,
            registry,
        }
    }

    pub fn is_muted(&self) -> bool {
        self.muted.get_untracked()
    }

    /// Flips the global flag and writes it to every tracked player and freeze frame
    pub fn toggle(&self) -> bool {
        let muted = !self.muted.get_untracked();
        self.muted.set(muted);

        let players = self.registry.players();
        for player in &players {
            player.api().set_muted(muted);
        }

        let frames = self.registry.freeze_frames().unwrap_or_default();
        for frame in &frames {
            frame.set_muted(muted);
        }

        log::debug!(
            "audio {}: {} players, {} freeze frames",
            if muted { "muted" } else { "unmuted" },
            players.len(),
            frames.len()
        );
        muted
    }

    /// Ambient players keep whatever mute state they came with
    pub fn apply_initial(&self, handle: &VideoHandle) {
        if !handle.api().is_ambient() {
            handle.api().set_muted(self.is_muted());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use leptos::reactive::owner::Owner;
    use utils::media::testing::{FakeMedia, FakePlayer};
    use utils::media::MediaElement;

    use super::*;

    fn tracked(registry: &MediaRegistry, ambient: bool) -> Rc<FakePlayer> {
        let player = Rc::new(FakePlayer::new(ambient));
        let media = Rc::new(FakeMedia::with_volume(0.0));
        registry.push_player(VideoHandle::new(player.clone(), media));
        player
    }

    #[test]
    fn toggle_reaches_every_player_and_freeze_frame() {
        let owner = Owner::new();
        owner.set();

        let audio = AudioState::new(false);
        let registry = Rc::new(MediaRegistry::default());
        let players = [tracked(&registry, true), tracked(&registry, false)];
        let frames = [
            Rc::new(FakeMedia::with_volume(1.0)),
            Rc::new(FakeMedia::with_volume(1.0)),
        ];
        registry.set_freeze_frames(
            frames
                .iter()
                .map(|f| f.clone() as Rc<dyn MediaElement>)
                .collect(),
        );
        let untracked = FakePlayer::new(false);

        let controller = MuteController::new(audio, registry);
        assert!(controller.is_muted());

        assert!(!controller.toggle());
        assert!(!audio.muted.get_untracked());
        for player in &players {
            assert!(!player.muted.get());
        }
        for frame in &frames {
            assert!(!frame.muted.get());
        }
        assert!(untracked.mute_writes.borrow().is_empty());

        assert!(controller.toggle());
        for player in &players {
            assert_eq!(player.mute_writes.borrow().last(), Some(&true));
        }
        for frame in &frames {
            assert!(frame.muted.get());
        }
    }

    #[test]
    fn toggle_before_freeze_frame_discovery_skips_them() {
        let owner = Owner::new();
        owner.set();

        let registry = Rc::new(MediaRegistry::default());
        let player = tracked(&registry, false);
        let controller = MuteController::new(AudioState::default(), registry.clone());

        controller.toggle();
        assert!(registry.freeze_frames().is_none());
        assert_eq!(*player.mute_writes.borrow(), vec![false]);
    }

    #[test]
    fn handlers_see_latest_flag() {
        let owner = Owner::new();
        owner.set();

        let audio = AudioState::default();
        let controller = MuteController::new(audio, Rc::new(MediaRegistry::default()));
        let clone = controller.clone();

        controller.toggle();
        assert!(!clone.is_muted());
        audio.muted.set(true);
        assert!(clone.is_muted());
    }

    #[test]
    fn initial_mute_skips_ambient_players() {
        let owner = Owner::new();
        owner.set();

        let controller = MuteController::new(AudioState::default(), Rc::default());
        let ambient = Rc::new(FakePlayer::new(true));
        let regular = Rc::new(FakePlayer::new(false));

        controller.apply_initial(&VideoHandle::new(
            ambient.clone(),
            Rc::new(FakeMedia::with_volume(0.0)),
        ));
        controller.apply_initial(&VideoHandle::new(
            regular.clone(),
            Rc::new(FakeMedia::with_volume(0.0)),
        ));

        assert!(ambient.mute_writes.borrow().is_empty());
        assert_eq!(*regular.mute_writes.borrow(), vec![true]);
    }
}
