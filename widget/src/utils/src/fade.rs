use std::ops::ControlFlow;
use std::rc::Rc;
use std::time::Duration;

use consts::fade::{FADE_IN_STEP, FADE_OUT_STEP, TICK_INTERVAL};
use consts::{MAX_VOLUME, MIN_VOLUME};

use crate::media::{ActiveFade, VideoHandle};
use crate::scheduler::Scheduler;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FadeDirection {
    In,
    Out,
}

// volumes are written with two decimals so repeated steps don't drift
fn round_volume(volume: f64) -> f64 {
    (volume * 100.0).round() / 100.0
}

impl FadeDirection {
    pub fn target(self) -> f64 {
        match self {
            FadeDirection::In => MAX_VOLUME,
            FadeDirection::Out => MIN_VOLUME,
        }
    }

    pub fn is_reached(self, volume: f64) -> bool {
        match self {
            FadeDirection::In => volume >= MAX_VOLUME,
            FadeDirection::Out => volume <= MIN_VOLUME,
        }
    }

    /// Volume after one tick, clamped to the target
    pub fn step(self, volume: f64) -> f64 {
        let next = match self {
            FadeDirection::In => (volume + FADE_IN_STEP).min(MAX_VOLUME),
            FadeDirection::Out => (volume - FADE_OUT_STEP).max(MIN_VOLUME),
        };
        round_volume(next)
    }
}

/// Ramps a player's volume in fixed steps on a repeating timer.
///
/// A player has at most one fade running: starting one cancels whatever
/// fade was active on it. A fade out that reaches silence pauses the
/// player.
pub struct VolumeFader {
    scheduler: Rc<dyn Scheduler>,
    tick: Duration,
}

impl VolumeFader {
    pub fn new(scheduler: Rc<dyn Scheduler>) -> Self {
        Self {
            scheduler,
            tick: TICK_INTERVAL,
        }
    }

    pub fn fade_in(&self, handle: &Rc<VideoHandle>) -> bool {
        self.start(handle, FadeDirection::In)
    }

    pub fn fade_out(&self, handle: &Rc<VideoHandle>) -> bool {
        self.start(handle, FadeDirection::Out)
    }

    /// Returns `false` when the volume already sits at the target and no timer was started
    pub fn start(&self, handle: &Rc<VideoHandle>, direction: FadeDirection) -> bool {
        handle.cancel_fade();

        let mut volume = handle.media().volume();
        if direction.is_reached(volume) {
            return false;
        }

        let weak = Rc::downgrade(handle);
        let timer = self.scheduler.every(
            self.tick,
            Box::new(move || {
                let Some(handle) = weak.upgrade() else {
                    return ControlFlow::Break(());
                };

                volume = direction.step(volume);
                handle.media().set_volume(volume);
                if !direction.is_reached(volume) {
                    return ControlFlow::Continue(());
                }

                if direction == FadeDirection::Out {
                    handle.api().pause();
                }
                handle.fade.borrow_mut().take();
                ControlFlow::Break(())
            }),
        );

        *handle.fade.borrow_mut() = Some(ActiveFade { direction, timer });
        true
    }
}
