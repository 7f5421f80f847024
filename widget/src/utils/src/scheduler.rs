use std::ops::ControlFlow;
use std::time::Duration;

#[cfg(any(test, feature = "test-utils"))]
mod manual;
#[cfg(any(test, feature = "test-utils"))]
pub use manual::ManualScheduler;

/// Repeating callback, keeps firing until it returns `ControlFlow::Break`
pub type Tick = Box<dyn FnMut() -> ControlFlow<()>>;

/// Cancellation handle for a scheduled callback.
///
/// Dropping a `Timer` cancels it, so whoever holds the timer decides how long
/// the callback may stay scheduled. Cancelling twice, or after the callback
/// finished, is a no-op.
pub struct Timer {
    cancel: Box<dyn Fn()>,
}

impl Timer {
    pub fn new(cancel: impl Fn() + 'static) -> Self {
        Self {
            cancel: Box::new(cancel),
        }
    }

    pub fn cancel(&self) {
        (self.cancel)()
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for Timer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Timer").finish_non_exhaustive()
    }
}

pub trait Scheduler {
    /// Runs `tick` every `period` until it breaks or the timer is cancelled
    fn every(&self, period: Duration, tick: Tick) -> Timer;

    /// Runs `f` once after `delay` unless cancelled first
    fn after(&self, delay: Duration, f: Box<dyn FnOnce()>) -> Timer;
}

#[cfg(feature = "csr")]
pub use web::WebScheduler;

#[cfg(feature = "csr")]
mod web {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::time::Duration;

    use gloo::timers::callback::{Interval, Timeout};

    use super::{Scheduler, Tick, Timer};

    /// Browser timers backed by `setInterval` / `setTimeout`
    #[derive(Clone, Copy, Debug, Default)]
    pub struct WebScheduler;

    fn as_millis(d: Duration) -> u32 {
        d.as_millis().min(u32::MAX as u128) as u32
    }

    // The gloo handle lives in a slot owned by the returned `Timer`. Emptying
    // the slot clears the browser timer and frees its closure; wasm-bindgen
    // defers the free when that happens from inside the callback itself.
    impl Scheduler for WebScheduler {
        fn every(&self, period: Duration, tick: Tick) -> Timer {
            let slot: Rc<RefCell<Option<Interval>>> = Rc::default();
            let finished = Rc::new(Cell::new(false));
            let mut tick = tick;

            let cb_slot = Rc::downgrade(&slot);
            let cb_finished = finished.clone();
            let interval = Interval::new(as_millis(period), move || {
                if cb_finished.get() {
                    return;
                }
                if tick().is_break() {
                    cb_finished.set(true);
                    // the tick may already have dropped its own timer
                    if let Some(slot) = cb_slot.upgrade() {
                        let interval = slot.borrow_mut().take();
                        drop(interval);
                    }
                }
            });
            *slot.borrow_mut() = Some(interval);

            Timer::new(move || {
                finished.set(true);
                let interval = slot.borrow_mut().take();
                drop(interval);
            })
        }

        fn after(&self, delay: Duration, f: Box<dyn FnOnce()>) -> Timer {
            let slot = RefCell::new(Some(Timeout::new(as_millis(delay), f)));

            Timer::new(move || {
                let timeout = slot.borrow_mut().take();
                drop(timeout);
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    fn counting_timer() -> (Timer, Rc<Cell<u32>>) {
        let cancels = Rc::new(Cell::new(0));
        let c = cancels.clone();
        (Timer::new(move || c.set(c.get() + 1)), cancels)
    }

    #[test]
    fn dropping_a_timer_cancels_it() {
        let (timer, cancels) = counting_timer();
        drop(timer);
        assert_eq!(cancels.get(), 1);
    }

    #[test]
    fn explicit_cancel_then_drop_is_harmless() {
        let (timer, cancels) = counting_timer();
        timer.cancel();
        timer.cancel();
        drop(timer);
        assert_eq!(cancels.get(), 3);
    }
}
