// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The doubled page strip: physical pages paired with the items they render.
//!
//! Hosts materialize the carousel's pages once at mount time by walking
//! [`PageSlots`] and rendering `items[slot.logical]` into physical page
//! `slot.physical`. The strip is purely derived from the item count; it
//! owns no item data and no view handles.

use core::iter::FusedIterator;
use core::num::NonZeroUsize;

/// One page position in the doubled strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageSlot {
    /// Index within the doubled strip, `0..2N`.
    pub physical: usize,
    /// Index of the item this page renders, `physical mod N`.
    pub logical: usize,
}

/// Iterator over the `2N` slots of a doubled page strip, in physical order.
///
/// Produced by [`LoopState::slots`](crate::LoopState::slots).
#[derive(Debug, Clone)]
pub struct PageSlots {
    item_count: NonZeroUsize,
    front: usize,
    back: usize,
}

impl PageSlots {
    pub(crate) const fn new(item_count: NonZeroUsize) -> Self {
        Self {
            item_count,
            front: 0,
            back: item_count.get() * 2,
        }
    }

    const fn slot(&self, physical: usize) -> PageSlot {
        PageSlot {
            physical,
            logical: physical % self.item_count.get(),
        }
    }
}

impl Iterator for PageSlots {
    type Item = PageSlot;

    fn next(&mut self) -> Option<PageSlot> {
        if self.front == self.back {
            return None;
        }
        let slot = self.slot(self.front);
        self.front += 1;
        Some(slot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for PageSlots {
    fn next_back(&mut self) -> Option<PageSlot> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.slot(self.back))
    }
}

impl ExactSizeIterator for PageSlots {}

impl FusedIterator for PageSlots {}

#[cfg(test)]
mod tests {
    use std::vec::Vec;

    use crate::LoopState;

    #[test]
    fn slots_cover_both_copies_in_order() {
        let state = LoopState::new(3, 0).unwrap();
        let slots: Vec<(usize, usize)> = state
            .slots()
            .map(|slot| (slot.physical, slot.logical))
            .collect();
        assert_eq!(
            slots,
            [(0, 0), (1, 1), (2, 2), (3, 0), (4, 1), (5, 2)],
            "second copy must repeat the items of the first"
        );
    }

    #[test]
    fn slots_report_exact_length() {
        let state = LoopState::new(4, 0).unwrap();
        let slots = state.slots();
        assert_eq!(slots.len(), 8);
        assert_eq!(slots.count(), 8);
    }

    #[test]
    fn slots_iterate_backwards() {
        let state = LoopState::new(2, 0).unwrap();
        let reversed: Vec<usize> = state.slots().rev().map(|slot| slot.physical).collect();
        assert_eq!(reversed, [3, 2, 1, 0]);
    }
}
