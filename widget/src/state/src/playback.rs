use std::cell::{Cell, RefCell};
use std::rc::Rc;

use consts::delays::{EXIT_PAUSE_DELAY, FREEZE_FRAME_DISCOVERY_DELAY};
use consts::MIN_VOLUME;
use utils::config::WidgetConfig;
use utils::fade::VolumeFader;
use utils::media::{MediaElement, PlayerApi, VideoHandle};
use utils::scheduler::{Scheduler, Timer};
use utils::visibility::{classify, VisibilityAction};

use crate::audio_state::AudioState;
use crate::media_registry::MediaRegistry;
use crate::mute_controller::MuteController;

/// Drives play, pause and volume of every tracked player from viewport
/// visibility, and owns the lifetime of everything it tracks.
pub struct PlaybackCoordinator {
    config: WidgetConfig,
    scheduler: Rc<dyn Scheduler>,
    registry: Rc<MediaRegistry>,
    mute: MuteController,
    fader: VolumeFader,
    freeze_frame_discovery: RefCell<Option<Timer>>,
}

impl PlaybackCoordinator {
    pub fn new(config: WidgetConfig, audio: AudioState, scheduler: Rc<dyn Scheduler>) -> Self {
        let registry = Rc::new(MediaRegistry::default());
        Self {
            config,
            fader: VolumeFader::new(scheduler.clone()),
            mute: MuteController::new(audio, registry.clone()),
            scheduler,
            registry,
            freeze_frame_discovery: RefCell::new(None),
        }
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn registry(&self) -> &MediaRegistry {
        &self.registry
    }

    pub fn mute(&self) -> &MuteController {
        &self.mute
    }

    /// Starts tracking a player discovered on the page and primes it for a fade in.
    /// Returns the index visibility changes are reported against.
    pub fn register(&self, api: Rc<dyn PlayerApi>, media: Rc<dyn MediaElement>) -> usize {
        let handle = VideoHandle::new(api, media);

        // mute non ambient players first, then make every player ambient so
        // more than one can play at a time
        self.mute.apply_initial(&handle);
        handle.media().set_volume(MIN_VOLUME);
        handle.media().set_preload("auto");
        handle.api().set_ambient(true);

        self.registry.push_player(handle)
    }

    pub fn on_visibility_change(&self, idx: usize, ratio: f64) {
        let Some(handle) = self.registry.player(idx) else {
            log::warn!("visibility change for untracked player {idx}");
            return;
        };

        match classify(ratio, self.config.entry_ratio) {
            VisibilityAction::PauseLater => self.schedule_exit_pause(&handle),
            VisibilityAction::Enter => {
                if handle.api().is_paused() {
                    handle.api().play();
                }
                self.fader.fade_in(&handle);
            }
            VisibilityAction::Leave => {
                self.fader.fade_out(&handle);
            }
        }
    }

    // not cancelled if the player scrolls back into view before it fires
    fn schedule_exit_pause(&self, handle: &Rc<VideoHandle>) {
        let fired = Rc::new(Cell::new(false));
        let cb_fired = fired.clone();
        let weak = Rc::downgrade(handle);
        let timer = self.scheduler.after(
            EXIT_PAUSE_DELAY,
            Box::new(move || {
                cb_fired.set(true);
                if let Some(handle) = weak.upgrade() {
                    handle.api().pause();
                }
            }),
        );
        handle.track_exit_pause(fired, timer);
    }

    pub fn toggle_mute(&self) -> bool {
        self.mute.toggle()
    }

    /// Looks for freeze frame videos once, after a fixed delay. Whatever
    /// `discover` returns then (possibly nothing) is what mute toggles reach.
    pub fn schedule_freeze_frame_discovery(
        &self,
        discover: impl FnOnce() -> Vec<Rc<dyn MediaElement>> + 'static,
    ) {
        let registry = Rc::downgrade(&self.registry);
        let mute = self.mute.clone();
        let timer = self.scheduler.after(
            FREEZE_FRAME_DISCOVERY_DELAY,
            Box::new(move || {
                let Some(registry) = registry.upgrade() else {
                    return;
                };
                let frames = discover();
                let muted = mute.is_muted();
                for frame in &frames {
                    frame.set_muted(muted);
                }
                log::debug!("found {} freeze frame videos", frames.len());
                registry.set_freeze_frames(frames);
            }),
        );

        if let Some(prev) = self.freeze_frame_discovery.replace(Some(timer)) {
            prev.cancel();
        }
    }

    /// Cancels every pending fade, delayed pause and discovery, and stops tracking all media
    pub fn unmount(&self) {
        if let Some(timer) = self.freeze_frame_discovery.take() {
            timer.cancel();
        }
        let players = self.registry.clear();
        for player in &players {
            player.release();
        }
        log::debug!("released {} players", players.len());
    }
}
