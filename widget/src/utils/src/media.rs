use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::fade::FadeDirection;
use crate::scheduler::Timer;

/// Playback controls exposed by an embedded player.
pub trait PlayerApi {
    fn play(&self);
    fn pause(&self);
    fn is_paused(&self) -> bool;
    fn set_muted(&self, muted: bool);
    fn is_muted(&self) -> bool;
    /// Ambient players autoplay and may play alongside other players
    fn is_ambient(&self) -> bool;
    fn set_ambient(&self, ambient: bool);
}

/// The underlying `<video>` element of a player, or a standalone one.
pub trait MediaElement {
    fn volume(&self) -> f64;
    fn set_volume(&self, volume: f64);
    fn set_preload(&self, preload: &str);
    fn is_muted(&self) -> bool;
    fn set_muted(&self, muted: bool);
}

pub(crate) struct ActiveFade {
    pub direction: FadeDirection,
    pub timer: Timer,
}

/// One tracked player along with the timers currently acting on it.
pub struct VideoHandle {
    api: Rc<dyn PlayerApi>,
    media: Rc<dyn MediaElement>,
    pub(crate) fade: RefCell<Option<ActiveFade>>,
    exit_pauses: RefCell<Vec<(Rc<Cell<bool>>, Timer)>>,
}

impl VideoHandle {
    pub fn new(api: Rc<dyn PlayerApi>, media: Rc<dyn MediaElement>) -> Rc<Self> {
        Rc::new(Self {
            api,
            media,
            fade: RefCell::new(None),
            exit_pauses: RefCell::new(Vec::new()),
        })
    }

    pub fn api(&self) -> &dyn PlayerApi {
        self.api.as_ref()
    }

    pub fn media(&self) -> &dyn MediaElement {
        self.media.as_ref()
    }

    /// Direction of the fade currently running on this player, if any
    pub fn active_fade(&self) -> Option<FadeDirection> {
        self.fade.borrow().as_ref().map(|f| f.direction)
    }

    pub fn cancel_fade(&self) {
        if let Some(active) = self.fade.borrow_mut().take() {
            active.timer.cancel();
        }
    }

    /// Keeps a delayed pause cancellable; `fired` is set by the timer callback
    pub fn track_exit_pause(&self, fired: Rc<Cell<bool>>, timer: Timer) {
        let mut pending = self.exit_pauses.borrow_mut();
        pending.retain(|(fired, _)| !fired.get());
        pending.push((fired, timer));
    }

    pub fn pending_exit_pauses(&self) -> usize {
        self.exit_pauses
            .borrow()
            .iter()
            .filter(|(fired, _)| !fired.get())
            .count()
    }

    /// Cancels every timer still scheduled against this player
    pub fn release(&self) {
        self.cancel_fade();
        for (_, timer) in self.exit_pauses.borrow_mut().drain(..) {
            timer.cancel();
        }
    }
}

#[cfg(any(test, feature = "test-utils"))]
pub mod testing {
    use std::cell::{Cell, RefCell};

    use super::{MediaElement, PlayerApi};

    #[derive(Debug)]
    pub struct FakePlayer {
        pub paused: Cell<bool>,
        pub muted: Cell<bool>,
        pub ambient: Cell<bool>,
        pub play_calls: Cell<u32>,
        pub pause_calls: Cell<u32>,
        pub mute_writes: RefCell<Vec<bool>>,
    }

    impl FakePlayer {
        pub fn new(ambient: bool) -> Self {
            Self {
                paused: Cell::new(true),
                muted: Cell::new(false),
                ambient: Cell::new(ambient),
                play_calls: Cell::new(0),
                pause_calls: Cell::new(0),
                mute_writes: RefCell::default(),
            }
        }
    }

    impl PlayerApi for FakePlayer {
        fn play(&self) {
            self.play_calls.set(self.play_calls.get() + 1);
            self.paused.set(false);
        }

        fn pause(&self) {
            self.pause_calls.set(self.pause_calls.get() + 1);
            self.paused.set(true);
        }

        fn is_paused(&self) -> bool {
            self.paused.get()
        }

        fn set_muted(&self, muted: bool) {
            self.mute_writes.borrow_mut().push(muted);
            self.muted.set(muted);
        }

        fn is_muted(&self) -> bool {
            self.muted.get()
        }

        fn is_ambient(&self) -> bool {
            self.ambient.get()
        }

        fn set_ambient(&self, ambient: bool) {
            self.ambient.set(ambient);
        }
    }

    #[derive(Debug)]
    pub struct FakeMedia {
        pub volume: Cell<f64>,
        /// Every volume written, in order
        pub volume_writes: RefCell<Vec<f64>>,
        pub preload: RefCell<Option<String>>,
        pub muted: Cell<bool>,
    }

    impl FakeMedia {
        pub fn with_volume(volume: f64) -> Self {
            Self {
                volume: Cell::new(volume),
                volume_writes: RefCell::default(),
                preload: RefCell::default(),
                muted: Cell::new(true),
            }
        }
    }

    impl MediaElement for FakeMedia {
        fn volume(&self) -> f64 {
            self.volume.get()
        }

        fn set_volume(&self, volume: f64) {
            self.volume_writes.borrow_mut().push(volume);
            self.volume.set(volume);
        }

        fn set_preload(&self, preload: &str) {
            *self.preload.borrow_mut() = Some(preload.to_string());
        }

        fn is_muted(&self) -> bool {
            self.muted.get()
        }

        fn set_muted(&self, muted: bool) {
            self.muted.set(muted);
        }
    }
}
