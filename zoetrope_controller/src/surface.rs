// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contract for the platform's scrollable surface.
//!
//! The carousel core splits platform-specific work out into a host layer.
//! The host provides the following pieces:
//!
//! - **Page materialization** — At mount time, walk
//!   [`Carousel::slots`](crate::Carousel::slots) and render one page view per
//!   slot. The core never inspects or caches the render output.
//!
//! - **A scroll surface** — Implements [`ScrollSurface`] over the platform's
//!   horizontally scrollable view. Content width is `page_count × viewport
//!   width`; each page is exactly one viewport wide.
//!
//! - **Event forwarding** — Platform scroll callbacks are forwarded as
//!   direct method calls on the controller:
//!   position updates (including programmatic animated moves) go to
//!   [`Carousel::on_scroll_position_changed`](crate::Carousel::on_scroll_position_changed),
//!   and drag-release target negotiation goes to
//!   [`Carousel::on_drag_will_end`](crate::Carousel::on_drag_will_end).
//!
//! - **Timer scheduling** — The core exposes a deadline and a token via
//!   [`Carousel::pending_advance`](crate::Carousel::pending_advance); the
//!   host schedules a callback for that deadline and invokes
//!   [`Carousel::on_timer_fire`](crate::Carousel::on_timer_fire) with the
//!   token when it fires. Stale tokens are ignored, so the host never needs
//!   to cancel a platform timer precisely.
//!
//! A typical host event loop wires the pieces together like this:
//!
//! ```rust,ignore
//! fn on_platform_scroll(carousel: &mut Carousel<MySurface>, offset: f64) {
//!     if let Some(change) = carousel.on_scroll_position_changed(offset, now()) {
//!         page_indicator.set(change.current);
//!     }
//!     timer_queue.schedule(carousel.pending_advance());
//! }
//! ```

/// A horizontally scrollable, paged surface provided by the platform layer.
///
/// Offsets are in the same 1D coordinate space as the viewport width
/// (typically logical pixels), measured from the start of the doubled strip.
///
/// Implementations must guarantee that the *last* `set_position` call wins:
/// a non-animated reposition issued while an animated scroll is in flight
/// overrides the animation. Seam corrections rely on this.
pub trait ScrollSurface {
    /// Moves the surface to `offset`, animated or immediate.
    ///
    /// Non-animated moves must be visually instantaneous; they are used for
    /// seam corrections that have to be imperceptible.
    fn set_position(&mut self, offset: f64, animated: bool);

    /// Returns the current scroll offset.
    fn position(&self) -> f64;

    /// Returns the current viewport width, which is also the page width.
    fn viewport_width(&self) -> f64;
}
