use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use super::{Scheduler, Tick, Timer};

enum Job {
    Every { period: u64, tick: Tick },
    Once(Box<dyn FnOnce()>),
}

struct Entry {
    due: u64,
    seq: u64,
    cancelled: Rc<Cell<bool>>,
    job: Job,
}

#[derive(Default)]
struct Inner {
    now: u64,
    seq: u64,
    entries: Vec<Entry>,
}

/// Deterministic scheduler driven by [`ManualScheduler::advance`].
///
/// Callbacks due at the same instant run in registration order. Callbacks
/// may freely schedule or cancel other timers while running.
#[derive(Default)]
pub struct ManualScheduler {
    inner: RefCell<Inner>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        Duration::from_millis(self.inner.borrow().now)
    }

    /// Number of repeating timers that are still live
    pub fn active_intervals(&self) -> usize {
        self.live(|job| matches!(job, Job::Every { .. }))
    }

    /// Number of one-shot timers that have neither fired nor been cancelled
    pub fn pending_timeouts(&self) -> usize {
        self.live(|job| matches!(job, Job::Once(_)))
    }

    fn live(&self, pred: impl Fn(&Job) -> bool) -> usize {
        self.inner
            .borrow()
            .entries
            .iter()
            .filter(|e| !e.cancelled.get() && pred(&e.job))
            .count()
    }

    /// Moves the clock forward, firing everything that falls due on the way
    pub fn advance(&self, by: Duration) {
        let target = self.inner.borrow().now + by.as_millis() as u64;
        while let Some(entry) = self.pop_due(target) {
            match entry.job {
                Job::Once(f) => f(),
                Job::Every { period, mut tick } => {
                    if tick().is_break() || entry.cancelled.get() {
                        continue;
                    }
                    self.inner.borrow_mut().entries.push(Entry {
                        due: entry.due + period,
                        seq: entry.seq,
                        cancelled: entry.cancelled,
                        job: Job::Every { period, tick },
                    });
                }
            }
        }
        self.inner.borrow_mut().now = target;
    }

    fn pop_due(&self, target: u64) -> Option<Entry> {
        let mut inner = self.inner.borrow_mut();
        inner.entries.retain(|e| !e.cancelled.get());
        let idx = inner
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due <= target)
            .min_by_key(|(_, e)| (e.due, e.seq))
            .map(|(idx, _)| idx)?;
        let entry = inner.entries.swap_remove(idx);
        inner.now = entry.due;
        Some(entry)
    }

    fn push(&self, delay: Duration, job: Job) -> Timer {
        let cancelled = Rc::new(Cell::new(false));
        let mut inner = self.inner.borrow_mut();
        inner.seq += 1;
        let entry = Entry {
            due: inner.now + delay.as_millis() as u64,
            seq: inner.seq,
            cancelled: cancelled.clone(),
            job,
        };
        inner.entries.push(entry);
        Timer::new(move || cancelled.set(true))
    }
}

impl Scheduler for ManualScheduler {
    fn every(&self, period: Duration, tick: Tick) -> Timer {
        let period = (period.as_millis() as u64).max(1);
        self.push(
            Duration::from_millis(period),
            Job::Every { period, tick },
        )
    }

    fn after(&self, delay: Duration, f: Box<dyn FnOnce()>) -> Timer {
        self.push(delay, Job::Once(f))
    }
}

#[cfg(test)]
mod tests {
    use std::ops::ControlFlow;

    use super::*;

    #[test]
    fn interval_fires_once_per_period() {
        let clock = ManualScheduler::new();
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        let _timer = clock.every(
            Duration::from_millis(200),
            Box::new(move || {
                h.set(h.get() + 1);
                ControlFlow::Continue(())
            }),
        );

        clock.advance(Duration::from_millis(199));
        assert_eq!(hits.get(), 0);
        clock.advance(Duration::from_millis(1));
        assert_eq!(hits.get(), 1);
        clock.advance(Duration::from_millis(1000));
        assert_eq!(hits.get(), 6);
        assert_eq!(clock.active_intervals(), 1);
    }

    #[test]
    fn breaking_tick_stops_interval() {
        let clock = ManualScheduler::new();
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        let _timer = clock.every(
            Duration::from_millis(100),
            Box::new(move || {
                h.set(h.get() + 1);
                if h.get() == 3 {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            }),
        );

        clock.advance(Duration::from_secs(5));
        assert_eq!(hits.get(), 3);
        assert_eq!(clock.active_intervals(), 0);
    }

    #[test]
    fn cancelled_timeout_never_fires() {
        let clock = ManualScheduler::new();
        let fired = Rc::new(Cell::new(false));
        let f = fired.clone();
        let timer = clock.after(Duration::from_secs(1), Box::new(move || f.set(true)));
        assert_eq!(clock.pending_timeouts(), 1);

        timer.cancel();
        clock.advance(Duration::from_secs(2));
        assert!(!fired.get());
        assert_eq!(clock.pending_timeouts(), 0);
    }

    #[test]
    fn callbacks_can_schedule_more_work() {
        let clock = Rc::new(ManualScheduler::new());
        let order = Rc::new(RefCell::new(Vec::new()));
        let spawned: Rc<RefCell<Vec<Timer>>> = Rc::default();

        let inner_clock = clock.clone();
        let o = order.clone();
        let keep = spawned.clone();
        let _outer = clock.after(
            Duration::from_millis(100),
            Box::new(move || {
                o.borrow_mut().push(("outer", inner_clock.now()));
                let o = o.clone();
                let c = inner_clock.clone();
                keep.borrow_mut().push(inner_clock.after(
                    Duration::from_millis(50),
                    Box::new(move || o.borrow_mut().push(("inner", c.now()))),
                ));
            }),
        );

        clock.advance(Duration::from_millis(500));
        assert_eq!(
            *order.borrow(),
            vec![
                ("outer", Duration::from_millis(100)),
                ("inner", Duration::from_millis(150)),
            ]
        );
        assert_eq!(clock.now(), Duration::from_millis(500));
    }

    #[test]
    fn dropped_timer_never_fires() {
        let clock = ManualScheduler::new();
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        drop(clock.every(
            Duration::from_millis(100),
            Box::new(move || {
                h.set(h.get() + 1);
                ControlFlow::Continue(())
            }),
        ));

        clock.advance(Duration::from_secs(1));
        assert_eq!(hits.get(), 0);
        assert_eq!(clock.active_intervals(), 0);
    }
}
