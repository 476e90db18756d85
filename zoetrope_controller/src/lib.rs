// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller for an infinitely-looping, auto-advancing image carousel.
//!
//! The carousel presents N items as an endless horizontal strip that also
//! advances by one page on a repeating timer. Under the hood the strip
//! holds 2N physical pages (the item sequence twice over); whenever a
//! scroll crosses either end, the surface is silently repositioned to the
//! mirrored page showing identical content, so the user can scroll in one
//! direction forever. Consumers only ever observe the *logical* index
//! `physical mod N`.
//!
//! This crate is sans-IO: it owns no views, threads, or timers. The host
//! implements [`ScrollSurface`] over its platform scroll view, forwards
//! scroll callbacks as method calls, and schedules one callback for the
//! deadline exposed by [`Carousel::pending_advance`]. The pure index and
//! seam arithmetic lives in the [`zoetrope_loop`] crate.
//!
//! ## Example
//!
//! ```rust
//! use zoetrope_controller::{Carousel, CarouselConfig, HostTime, ScrollSurface};
//!
//! struct Surface {
//!     position: f64,
//! }
//!
//! impl ScrollSurface for Surface {
//!     fn set_position(&mut self, offset: f64, _animated: bool) {
//!         self.position = offset;
//!     }
//!     fn position(&self) -> f64 {
//!         self.position
//!     }
//!     fn viewport_width(&self) -> f64 {
//!         100.0
//!     }
//! }
//!
//! let config = CarouselConfig::new(3, 5_000);
//! let mut carousel = Carousel::new(config, Surface { position: 0.0 }, HostTime(0))?;
//!
//! // The host schedules a callback for the exposed deadline.
//! let (token, deadline) = carousel.pending_advance();
//! assert_eq!(deadline, HostTime(5_000));
//!
//! // When it fires, the carousel asks the surface to animate one page on.
//! assert!(carousel.on_timer_fire(token, deadline));
//!
//! // The surface reports the position back and the logical index follows.
//! let change = carousel.on_scroll_position_changed(100.0, deadline.after(16));
//! assert_eq!(change.map(|c| c.current), Some(1));
//! # Ok::<_, zoetrope_controller::ConfigError>(())
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): Use the Rust standard library.
//! - `libm`: Allow use of floating point math from `libm` for `no_std`
//!   targets without `std`.
//! - `trace`: Store the [`TraceSink`](trace::TraceSink) passed to
//!   [`Carousel::with_trace_sink`] and emit diagnostic events to it.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

mod config;
mod controller;
mod surface;
mod time;
mod timer;
pub mod trace;

pub use config::{CarouselConfig, ConfigError};
pub use controller::{Carousel, IndexChange};
pub use surface::ScrollSurface;
pub use time::HostTime;
pub use timer::TimerToken;

pub use zoetrope_loop::{LoopState, PageSlot, PageSlots, SeamCorrection};
