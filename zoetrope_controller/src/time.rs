// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-supplied monotonic time.
//!
//! The controller never reads a clock. Every event handler takes the current
//! [`HostTime`] from the caller, and the auto-advance deadline is handed back
//! in the same unit. Ticks are host-chosen (milliseconds by convention); the
//! controller only ever adds intervals and compares.

/// A point in time expressed in host-chosen monotonic ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct HostTime(pub u64);

impl HostTime {
    /// Returns the raw tick value.
    #[inline]
    #[must_use]
    pub const fn ticks(self) -> u64 {
        self.0
    }

    /// Returns the time `ticks` after `self`, saturating at the maximum
    /// representable time.
    #[inline]
    #[must_use]
    pub const fn after(self, ticks: u64) -> Self {
        Self(self.0.saturating_add(ticks))
    }
}
