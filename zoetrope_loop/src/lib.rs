// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoetrope Loop: the loop-illusion index model for infinite carousels.
//!
//! A carousel over N items can be made to scroll "infinitely" in both
//! directions without a circular data structure: lay the N items out twice
//! (2N physical pages), and whenever the scroll position crosses the seam
//! between the two copies, silently jump to the mirrored page on the other
//! side. Because the mirrored page shows the same item, the jump is
//! invisible.
//!
//! This crate provides the pure arithmetic for that trick:
//!
//! - [`LoopState`]: tracks the *physical* page index within the doubled
//!   strip and derives the *logical* index (`physical mod N`) that hosts
//!   expose to users (for example, to a page indicator).
//! - [`LoopState::correct_for_seam`]: given a continuous scroll offset,
//!   decides whether a seam jump is required and to where.
//! - [`PageSlots`]: an iterator over the doubled strip, pairing each
//!   physical page with the logical item it renders, for hosts that
//!   materialize page views at mount time.
//! - [`nearest_page_index`]: offset → page rounding shared by seam
//!   correction and drag-release snapping.
//!
//! This crate deliberately does **not** know about views, scroll surfaces,
//! or timers. Controllers (such as `zoetrope_controller`) are responsible
//! for reading positions from a real scrollable surface, applying returned
//! [`SeamCorrection`]s without animation, and publishing logical index
//! changes outward.
//!
//! ## Minimal example
//!
//! ```rust
//! use zoetrope_loop::LoopState;
//!
//! // Three items, doubled to six physical pages of width 100.
//! let mut state = LoopState::new(3, 0).unwrap();
//! assert_eq!(state.page_count(), 6);
//!
//! // Scrolling to page 3 needs no correction; the logical index wraps.
//! assert!(state.correct_for_seam(300.0, 100.0).is_none());
//! assert_eq!(state.physical_index(), 3);
//! assert_eq!(state.logical_index(), 0);
//!
//! // Reaching the last physical page jumps back to the mirrored page.
//! let correction = state.correct_for_seam(500.0, 100.0).unwrap();
//! assert_eq!(correction.target_offset, 200.0);
//! assert_eq!(state.physical_index(), 2);
//! ```
//!
//! This crate is `no_std` and has no dependencies.

#![no_std]

#[cfg(test)]
extern crate std;

mod loop_state;
mod strip;

pub use loop_state::{LoopError, LoopState, SeamCorrection, nearest_page_index};
pub use strip::{PageSlot, PageSlots};
