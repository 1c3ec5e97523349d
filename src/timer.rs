//! Interval timers on a virtual clock.
//!
//! The page runs on a single thread, so timers are just entries in a queue
//! keyed by due time. [`TimerQueue::advance`] moves the clock forward and
//! returns every tick that came due, in chronological order, for the caller
//! to dispatch. A [`TimerHandle`] is not `Clone`: whoever installed the timer
//! owns the only way to cancel it.

use std::collections::BTreeMap;
use std::time::Duration;

/// Shortest period a timer will run at. A zero period would never let the
/// clock move past its first due time.
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Cancellation handle for one installed interval.
#[derive(Debug, PartialEq, Eq)]
pub struct TimerHandle(u64);

/// One firing of an interval timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tick {
    /// Identifier the timer was installed under.
    pub owner: String,
    /// Clock time the tick fired at.
    pub at: Duration,
}

#[derive(Debug)]
struct Interval {
    owner: String,
    period: Duration,
    due: Duration,
}

#[derive(Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    next_id: u64,
    timers: BTreeMap<u64, Interval>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the queue was created.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Install a repeating timer; the first tick is one period from now.
    pub fn set_interval(&mut self, owner: &str, period: Duration) -> TimerHandle {
        let period = period.max(MIN_PERIOD);
        let id = self.next_id;
        self.next_id += 1;
        self.timers.insert(
            id,
            Interval {
                owner: owner.to_string(),
                period,
                due: self.now + period,
            },
        );
        TimerHandle(id)
    }

    /// Cancel a timer. Returns false if it was already gone.
    pub fn clear(&mut self, handle: TimerHandle) -> bool {
        self.timers.remove(&handle.0).is_some()
    }

    pub fn is_active(&self, handle: &TimerHandle) -> bool {
        self.timers.contains_key(&handle.0)
    }

    /// Number of installed timers.
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Number of installed timers belonging to `owner`.
    pub fn count_for(&self, owner: &str) -> usize {
        self.timers.values().filter(|t| t.owner == owner).count()
    }

    /// Move the clock forward by `by`, collecting due ticks.
    ///
    /// Ticks due at the same instant fire in installation order.
    pub fn advance(&mut self, by: Duration) -> Vec<Tick> {
        let target = self.now + by;
        let mut fired = Vec::new();
        while let Some(id) = self.next_due(target) {
            let Some(timer) = self.timers.get_mut(&id) else {
                break;
            };
            self.now = timer.due;
            fired.push(Tick {
                owner: timer.owner.clone(),
                at: timer.due,
            });
            timer.due += timer.period;
        }
        self.now = target;
        fired
    }

    fn next_due(&self, target: Duration) -> Option<u64> {
        self.timers
            .iter()
            .filter(|(_, t)| t.due <= target)
            .min_by_key(|(id, t)| (t.due, **id))
            .map(|(id, _)| *id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn fires_once_per_period() {
        let mut q = TimerQueue::new();
        q.set_interval("a", ms(100));
        assert!(q.advance(ms(99)).is_empty());
        let ticks = q.advance(ms(1));
        assert_eq!(ticks.len(), 1);
        assert_eq!(ticks[0].at, ms(100));
        assert_eq!(q.advance(ms(250)).len(), 2);
        assert_eq!(q.now(), ms(350));
    }

    #[test]
    fn cleared_timer_never_fires() {
        let mut q = TimerQueue::new();
        let h = q.set_interval("a", ms(10));
        assert!(q.clear(h));
        assert!(q.advance(ms(100)).is_empty());
        assert!(q.is_empty());
    }

    #[test]
    fn ticks_are_chronological_across_timers() {
        let mut q = TimerQueue::new();
        q.set_interval("slow", ms(30));
        q.set_interval("fast", ms(20));
        let owners: Vec<String> = q.advance(ms(60)).into_iter().map(|t| t.owner).collect();
        assert_eq!(owners, vec!["fast", "slow", "fast", "slow", "fast"]);
    }

    #[test]
    fn new_interval_counts_from_now() {
        let mut q = TimerQueue::new();
        q.advance(ms(55));
        q.set_interval("a", ms(10));
        let ticks = q.advance(ms(10));
        assert_eq!(ticks[0].at, ms(65));
    }

    #[test]
    fn zero_period_is_clamped() {
        let mut q = TimerQueue::new();
        q.set_interval("a", Duration::ZERO);
        assert_eq!(q.advance(ms(5)).len(), 5);
    }

    #[test]
    fn count_for_owner() {
        let mut q = TimerQueue::new();
        let h = q.set_interval("a", ms(1));
        q.set_interval("b", ms(1));
        assert_eq!(q.count_for("a"), 1);
        assert!(q.is_active(&h));
        q.clear(h);
        assert_eq!(q.count_for("a"), 0);
        assert_eq!(q.len(), 1);
    }
}
