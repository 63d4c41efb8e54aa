//! Timer service.
//!
//! The app owns three time-driven behaviors: the table's simulated load
//! delay (one-shot), the form's success auto-hide (one-shot, re-armed on
//! every submit), and the counter's auto-increment tick (recurring). Each
//! runs on a background clock thread that posts [`TimerTick`] messages to
//! the event-loop channel; all state changes still happen on the event
//! loop, single-threaded.
//!
//! Cancellation must be synchronous from the event loop's point of view: a
//! tick that was already queued when its timer was cancelled must not fire.
//! Two mechanisms enforce that:
//!
//! - an atomic running flag stops the clock thread,
//! - every schedule gets a fresh generation stamp; ticks carry theirs, and
//!   [`Timers::is_live`] rejects anything but the current generation.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tracing::debug;

/// The app's timer slots. One active schedule per id; rescheduling an id
/// always cancels its predecessor first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerId {
    /// Simulated initial table load (one-shot).
    TableLoad,
    /// Form success-banner auto-hide (one-shot).
    FormSuccess,
    /// Counter auto-increment (recurring).
    CounterAuto,
}

/// One firing of a timer, delivered through the event channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerTick {
    pub id: TimerId,
    pub generation: u64,
}

struct Slot {
    generation: u64,
    running: Arc<AtomicBool>,
}

/// Owns all scheduled timers. Dropping it cancels everything, so a torn
/// down app can never receive a resurrecting callback.
pub struct Timers {
    tx: Sender<TimerTick>,
    slots: HashMap<TimerId, Slot>,
    next_generation: u64,
}

impl Timers {
    pub fn new(tx: Sender<TimerTick>) -> Self {
        Self {
            tx,
            slots: HashMap::new(),
            next_generation: 0,
        }
    }

    /// Schedule a one-shot tick after `delay`. Cancels any previous
    /// schedule for the same id.
    pub fn schedule_once(&mut self, id: TimerId, delay: Duration) {
        let (generation, running) = self.arm(id);
        let tx = self.tx.clone();

        thread::spawn(move || {
            thread::sleep(delay);
            if running.load(Ordering::SeqCst) {
                let _ = tx.send(TimerTick { id, generation });
            }
        });
    }

    /// Schedule a recurring tick every `period`. Cancels any previous
    /// schedule for the same id. The clock thread exits when the timer is
    /// cancelled or the receiving side goes away.
    pub fn schedule_interval(&mut self, id: TimerId, period: Duration) {
        let (generation, running) = self.arm(id);
        let tx = self.tx.clone();

        thread::spawn(move || loop {
            thread::sleep(period);
            if !running.load(Ordering::SeqCst) {
                break;
            }
            if tx.send(TimerTick { id, generation }).is_err() {
                break;
            }
        });
    }

    /// Cancel a timer. Stops its clock thread and invalidates queued
    /// ticks immediately.
    pub fn cancel(&mut self, id: TimerId) {
        if let Some(slot) = self.slots.remove(&id) {
            slot.running.store(false, Ordering::SeqCst);
            debug!(?id, generation = slot.generation, "timer cancelled");
        }
    }

    /// Cancel every timer (app teardown).
    pub fn cancel_all(&mut self) {
        for (id, slot) in self.slots.drain() {
            slot.running.store(false, Ordering::SeqCst);
            debug!(?id, generation = slot.generation, "timer cancelled");
        }
    }

    /// Whether a received tick belongs to the currently scheduled
    /// generation of its timer. Stale ticks must be dropped by the caller.
    pub fn is_live(&self, tick: &TimerTick) -> bool {
        self.slots
            .get(&tick.id)
            .is_some_and(|slot| slot.generation == tick.generation)
    }

    /// Whether a timer currently has an active schedule.
    pub fn is_scheduled(&self, id: TimerId) -> bool {
        self.slots.contains_key(&id)
    }

    /// The tick the current schedule of `id` would deliver. Test drivers
    /// use this to fabricate live ticks without waiting on real clocks.
    pub fn current_tick(&self, id: TimerId) -> Option<TimerTick> {
        self.slots.get(&id).map(|slot| TimerTick {
            id,
            generation: slot.generation,
        })
    }

    fn arm(&mut self, id: TimerId) -> (u64, Arc<AtomicBool>) {
        self.cancel(id);
        let generation = self.next_generation;
        self.next_generation += 1;
        let running = Arc::new(AtomicBool::new(true));
        self.slots.insert(
            id,
            Slot {
                generation,
                running: running.clone(),
            },
        );
        debug!(?id, generation, "timer scheduled");
        (generation, running)
    }
}

impl Drop for Timers {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::channel;

    #[test]
    fn test_one_shot_fires_once() {
        let (tx, rx) = channel();
        let mut timers = Timers::new(tx);
        timers.schedule_once(TimerId::TableLoad, Duration::from_millis(5));

        let tick = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        assert_eq!(tick.id, TimerId::TableLoad);
        assert!(timers.is_live(&tick));

        // No second firing
        assert!(rx.recv_timeout(Duration::from_millis(50)).is_err());
    }

    #[test]
    fn test_interval_fires_repeatedly() {
        let (tx, rx) = channel();
        let mut timers = Timers::new(tx);
        timers.schedule_interval(TimerId::CounterAuto, Duration::from_millis(5));

        for _ in 0..3 {
            let tick = rx.recv_timeout(Duration::from_secs(2)).unwrap();
            assert_eq!(tick.id, TimerId::CounterAuto);
            assert!(timers.is_live(&tick));
        }
    }

    #[test]
    fn test_cancel_invalidates_queued_ticks() {
        let (tx, rx) = channel();
        let mut timers = Timers::new(tx);
        timers.schedule_interval(TimerId::CounterAuto, Duration::from_millis(2));

        // Let a few ticks queue up, then cancel before draining.
        let first = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        assert!(timers.is_live(&first));
        thread::sleep(Duration::from_millis(20));
        timers.cancel(TimerId::CounterAuto);

        // Everything still in the channel is stale now.
        while let Ok(tick) = rx.try_recv() {
            assert!(!timers.is_live(&tick));
        }
        assert!(!timers.is_scheduled(TimerId::CounterAuto));
    }

    #[test]
    fn test_reschedule_bumps_generation() {
        let (tx, _rx) = channel();
        let mut timers = Timers::new(tx);

        timers.schedule_once(TimerId::FormSuccess, Duration::from_secs(60));
        let old = timers.current_tick(TimerId::FormSuccess).unwrap();

        timers.schedule_once(TimerId::FormSuccess, Duration::from_secs(60));
        let new = timers.current_tick(TimerId::FormSuccess).unwrap();

        assert_ne!(old.generation, new.generation);
        assert!(!timers.is_live(&old));
        assert!(timers.is_live(&new));
    }

    #[test]
    fn test_unknown_tick_is_stale() {
        let (tx, _rx) = channel();
        let timers = Timers::new(tx);
        let tick = TimerTick {
            id: TimerId::TableLoad,
            generation: 7,
        };
        assert!(!timers.is_live(&tick));
    }
}
