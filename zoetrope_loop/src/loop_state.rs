// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Physical/logical index tracking and seam-wrap arithmetic.

use core::error::Error;
use core::fmt;
use core::num::NonZeroUsize;

use crate::strip::PageSlots;

/// Error produced when constructing a [`LoopState`] with an invalid
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum LoopError {
    /// The item count was zero; a loop needs at least one item.
    InvalidItemCount,
}

impl fmt::Display for LoopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidItemCount => write!(f, "loop requires at least one item"),
        }
    }
}

impl Error for LoopError {}

/// A silent repositioning of the scroll surface across the seam.
///
/// Returned by [`LoopState::correct_for_seam`] when the reported scroll
/// offset has crossed either edge of the doubled strip. The controller must
/// apply `target_offset` to the surface **without animation** so the jump is
/// visually imperceptible; `physical_index` is the page the state has
/// already been moved to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeamCorrection {
    /// Offset the surface should jump to, in the same unit as the page width.
    pub target_offset: f64,
    /// The physical index after the jump.
    pub physical_index: usize,
}

/// Index model for a doubled page strip.
///
/// Holds the logical item count N and the current physical page index within
/// the 2N-page doubled strip. The logical index is always derived as
/// `physical mod N` and never stored or set independently.
///
/// This type performs no I/O and holds no handles to any rendering surface;
/// it is created once per mount and dropped on unmount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopState {
    item_count: NonZeroUsize,
    physical: usize,
}

impl LoopState {
    /// Creates a new state over `item_count` logical items, starting at
    /// `start_physical`.
    ///
    /// `start_physical` is wrapped into the doubled range `[0, 2N)`, so a
    /// host may pass a logical index directly.
    ///
    /// # Errors
    ///
    /// Returns [`LoopError::InvalidItemCount`] if `item_count` is zero.
    pub fn new(item_count: usize, start_physical: usize) -> Result<Self, LoopError> {
        let item_count = NonZeroUsize::new(item_count).ok_or(LoopError::InvalidItemCount)?;
        let physical = start_physical % (item_count.get() * 2);
        Ok(Self {
            item_count,
            physical,
        })
    }

    /// Returns the logical item count N.
    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.item_count.get()
    }

    /// Returns the number of physical pages in the doubled strip (2N).
    #[must_use]
    pub const fn page_count(&self) -> usize {
        self.item_count.get() * 2
    }

    /// Returns the current physical page index.
    #[must_use]
    pub const fn physical_index(&self) -> usize {
        self.physical
    }

    /// Returns the current logical index, `physical mod N`.
    ///
    /// This is the only value meant to be observable outside the carousel.
    #[must_use]
    pub const fn logical_index(&self) -> usize {
        self.physical % self.item_count.get()
    }

    /// Returns the logical item index rendered by the given physical page.
    #[must_use]
    pub const fn logical_of(&self, physical: usize) -> usize {
        physical % self.item_count.get()
    }

    /// Returns an iterator over the doubled strip, pairing each physical
    /// page with the logical item it renders.
    #[must_use]
    pub const fn slots(&self) -> PageSlots {
        PageSlots::new(self.item_count)
    }

    /// Moves the physical index by `delta` pages, saturating at zero, and
    /// returns the new index.
    ///
    /// This deliberately applies no seam correction: whether a correction
    /// is needed depends on the surface's actual position, not on index
    /// arithmetic alone, so that decision belongs to the controller. A
    /// transient index at or past `2N` is normalized by the next
    /// [`correct_for_seam`](Self::correct_for_seam) call.
    pub fn advance(&mut self, delta: isize) -> usize {
        self.physical = self.physical.saturating_add_signed(delta);
        self.physical
    }

    /// Updates the physical index from a continuous scroll offset, returning
    /// a [`SeamCorrection`] if the offset crossed either seam.
    ///
    /// The three-way branch and its tie-breaks are load-bearing:
    ///
    /// - `raw_offset >= (2N-1) * page_width` jumps to `(N-1) * page_width`
    ///   with physical index `N-1`. Equality snaps *early* so the duplicated
    ///   tail item past page `2N-1` is never shown.
    /// - `raw_offset < 0` jumps to `N * page_width` with physical index `N`.
    /// - Otherwise there is nothing to correct and the physical index becomes
    ///   the nearest page.
    ///
    /// The method is idempotent: feeding back an already-corrected offset
    /// returns `None` and leaves the index unchanged.
    ///
    /// A non-positive or non-finite `page_width` (a viewport mid-layout)
    /// yields `None` and leaves the index untouched.
    pub fn correct_for_seam(
        &mut self,
        raw_offset: f64,
        page_width: f64,
    ) -> Option<SeamCorrection> {
        if !(page_width > 0.0 && page_width.is_finite()) {
            return None;
        }
        let n = self.item_count.get();
        let upper = (self.page_count() - 1) as f64 * page_width;

        if raw_offset >= upper {
            self.physical = n - 1;
            Some(SeamCorrection {
                target_offset: (n - 1) as f64 * page_width,
                physical_index: n - 1,
            })
        } else if raw_offset < 0.0 {
            self.physical = n;
            Some(SeamCorrection {
                target_offset: n as f64 * page_width,
                physical_index: n,
            })
        } else {
            self.physical = nearest_page_index(raw_offset, page_width, self.page_count());
            None
        }
    }
}

/// Rounds a continuous scroll offset to the nearest page index, clamped to
/// `0..page_count`.
///
/// Offsets at an exact half-page boundary round up. Negative offsets clamp
/// to page 0; callers that need seam behavior for negative offsets should
/// consult [`LoopState::correct_for_seam`] first.
#[must_use]
pub fn nearest_page_index(raw_offset: f64, page_width: f64, page_count: usize) -> usize {
    if page_count == 0 || !(page_width > 0.0 && page_width.is_finite()) {
        return 0;
    }
    let ratio = raw_offset / page_width + 0.5;
    // Saturating float-to-int conversion handles negative ratios; truncation
    // equals floor over the non-negative remainder, giving round-half-up.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "the result is clamped to the page range immediately after the cast"
    )]
    let index = ratio as usize;
    index.min(page_count - 1)
}

#[cfg(test)]
mod tests {
    use super::{LoopError, LoopState, nearest_page_index};

    #[test]
    fn zero_items_is_rejected() {
        assert_eq!(LoopState::new(0, 0), Err(LoopError::InvalidItemCount));
    }

    #[test]
    fn start_index_wraps_into_doubled_range() {
        let state = LoopState::new(3, 7).unwrap();
        assert_eq!(state.physical_index(), 1);

        let state = LoopState::new(1, 2).unwrap();
        assert_eq!(state.physical_index(), 0);
    }

    #[test]
    fn logical_is_physical_mod_item_count() {
        for n in 1..=5 {
            for physical in 0..2 * n {
                let state = LoopState::new(n, physical).unwrap();
                assert_eq!(
                    state.logical_index(),
                    physical % n,
                    "logical index mismatch for n={n} physical={physical}"
                );
            }
        }
    }

    #[test]
    fn advance_moves_without_correcting() {
        let mut state = LoopState::new(3, 4).unwrap();
        assert_eq!(state.advance(1), 5);
        assert_eq!(state.logical_index(), 2);
        // A further step may transiently leave the doubled range.
        assert_eq!(state.advance(1), 6);
        // Backward steps saturate at zero.
        assert_eq!(state.advance(-10), 0);
    }

    #[test]
    fn in_range_offset_rounds_to_nearest_page() {
        let mut state = LoopState::new(3, 0).unwrap();
        assert_eq!(state.correct_for_seam(149.0, 100.0), None);
        assert_eq!(state.physical_index(), 1);
        assert_eq!(state.correct_for_seam(150.0, 100.0), None);
        assert_eq!(state.physical_index(), 2);
    }

    #[test]
    fn upper_seam_snaps_exactly_at_last_page() {
        let mut state = LoopState::new(3, 4).unwrap();
        let correction = state.correct_for_seam(500.0, 100.0).unwrap();
        assert_eq!(correction.target_offset, 200.0);
        assert_eq!(correction.physical_index, 2);
        assert_eq!(state.physical_index(), 2);
        // Logical index is preserved across the jump: 5 mod 3 == 2 mod 3.
        assert_eq!(state.logical_index(), 2);
    }

    #[test]
    fn lower_seam_jumps_to_mirrored_first_copy_end() {
        let mut state = LoopState::new(3, 0).unwrap();
        let correction = state.correct_for_seam(-1.0, 100.0).unwrap();
        assert_eq!(correction.target_offset, 300.0);
        assert_eq!(correction.physical_index, 3);
        // 3 mod 3 == 0 mod 3: still showing the same item.
        assert_eq!(state.logical_index(), 0);
    }

    #[test]
    fn correction_is_idempotent() {
        let mut state = LoopState::new(3, 4).unwrap();
        let correction = state.correct_for_seam(600.0, 100.0).unwrap();
        assert_eq!(
            state.correct_for_seam(correction.target_offset, 100.0),
            None,
            "re-applying a corrected offset must not correct again"
        );
        assert_eq!(state.physical_index(), correction.physical_index);
    }

    #[test]
    fn single_item_loops_between_its_two_copies() {
        let mut state = LoopState::new(1, 0).unwrap();
        assert_eq!(state.page_count(), 2);
        // Page 1 is the last physical page, so reaching it snaps to page 0.
        let correction = state.correct_for_seam(100.0, 100.0).unwrap();
        assert_eq!(correction.target_offset, 0.0);
        assert_eq!(correction.physical_index, 0);
        let correction = state.correct_for_seam(-5.0, 100.0).unwrap();
        assert_eq!(correction.target_offset, 100.0);
        assert_eq!(correction.physical_index, 1);
    }

    #[test]
    fn degenerate_page_width_leaves_state_untouched() {
        let mut state = LoopState::new(3, 2).unwrap();
        assert_eq!(state.correct_for_seam(500.0, 0.0), None);
        assert_eq!(state.correct_for_seam(500.0, -10.0), None);
        assert_eq!(state.correct_for_seam(500.0, f64::NAN), None);
        assert_eq!(state.physical_index(), 2);
    }

    #[test]
    fn nearest_page_rounds_half_up_and_clamps() {
        assert_eq!(nearest_page_index(0.0, 100.0, 6), 0);
        assert_eq!(nearest_page_index(49.9, 100.0, 6), 0);
        assert_eq!(nearest_page_index(50.0, 100.0, 6), 1);
        assert_eq!(nearest_page_index(549.0, 100.0, 6), 5);
        // Out-of-range offsets clamp rather than index past the strip.
        assert_eq!(nearest_page_index(10_000.0, 100.0, 6), 5);
        assert_eq!(nearest_page_index(-80.0, 100.0, 6), 0);
        // Degenerate geometry.
        assert_eq!(nearest_page_index(100.0, 0.0, 6), 0);
        assert_eq!(nearest_page_index(100.0, 100.0, 0), 0);
    }
}
