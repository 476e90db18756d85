// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Generation-counted auto-advance deadline.
//!
//! The repeating advance timer is modeled sans-IO: the controller stores a
//! single deadline plus a generation counter, and the host schedules the
//! actual platform callback. "Reset" bumps the generation and moves the
//! deadline, which atomically cancels any previously handed-out token —
//! a late callback carrying a stale token is ignored, so there is never
//! more than one live pending fire and an old timer cannot fire after a
//! new one is scheduled.

use crate::time::HostTime;

/// Opaque handle identifying one scheduled auto-advance fire.
///
/// Obtained from [`Carousel::pending_advance`](crate::Carousel::pending_advance)
/// and redeemed through [`Carousel::on_timer_fire`](crate::Carousel::on_timer_fire).
/// Any reset performed in between invalidates the token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

/// Deadline state for the repeating advance timer.
#[derive(Debug, Clone)]
pub(crate) struct AutoAdvance {
    interval: u64,
    generation: u64,
    deadline: HostTime,
}

impl AutoAdvance {
    pub(crate) const fn new(interval: u64, now: HostTime) -> Self {
        Self {
            interval,
            generation: 0,
            deadline: now.after(interval),
        }
    }

    /// The token and deadline of the single live pending fire.
    pub(crate) const fn pending(&self) -> (TimerToken, HostTime) {
        (TimerToken(self.generation), self.deadline)
    }

    /// Consumes a fire attempt. Returns `false` for stale tokens; on
    /// success, schedules the next repetition one interval from `now`.
    pub(crate) const fn fire(&mut self, token: TimerToken, now: HostTime) -> bool {
        if token.0 != self.generation {
            return false;
        }
        self.generation += 1;
        self.deadline = now.after(self.interval);
        true
    }

    /// Cancels the live token and schedules a fresh deadline one interval
    /// from `now`. Returns the new deadline.
    pub(crate) const fn reset(&mut self, now: HostTime) -> HostTime {
        self.generation += 1;
        self.deadline = now.after(self.interval);
        self.deadline
    }
}

#[cfg(test)]
mod tests {
    use super::AutoAdvance;
    use crate::time::HostTime;

    #[test]
    fn fire_accepts_only_the_live_token() {
        let mut timer = AutoAdvance::new(1_000, HostTime(0));
        let (token, deadline) = timer.pending();
        assert_eq!(deadline, HostTime(1_000));

        assert!(timer.fire(token, deadline));
        // The consumed token is dead; the next repetition has a fresh one.
        assert!(!timer.fire(token, HostTime(2_000)));
        let (next, next_deadline) = timer.pending();
        assert_eq!(next_deadline, HostTime(2_000));
        assert!(timer.fire(next, next_deadline));
    }

    #[test]
    fn reset_invalidates_the_outstanding_token() {
        let mut timer = AutoAdvance::new(1_000, HostTime(0));
        let (stale, _) = timer.pending();

        assert_eq!(timer.reset(HostTime(400)), HostTime(1_400));
        assert!(!timer.fire(stale, HostTime(1_000)), "cancelled token fired");

        let (live, deadline) = timer.pending();
        assert_eq!(deadline, HostTime(1_400));
        assert!(timer.fire(live, deadline));
    }

    #[test]
    fn repeated_resets_keep_a_single_live_token() {
        let mut timer = AutoAdvance::new(1_000, HostTime(0));
        let mut tokens = [timer.pending().0; 4];
        let mut now = 0;
        for slot in tokens.iter_mut().skip(1) {
            now += 10;
            timer.reset(HostTime(now));
            *slot = timer.pending().0;
        }
        // Only the most recent token is redeemable.
        for stale in &tokens[..3] {
            assert!(!timer.fire(*stale, HostTime(5_000)));
        }
        assert!(timer.fire(tokens[3], HostTime(5_000)));
    }
}
