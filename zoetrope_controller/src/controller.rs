// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The carousel controller: bridges the loop model to the scroll surface.

#[cfg(not(feature = "trace"))]
use core::marker::PhantomData;

use kurbo::Vec2;
use zoetrope_loop::{LoopState, PageSlots, nearest_page_index};

use crate::config::{CarouselConfig, ConfigError};
use crate::surface::ScrollSurface;
use crate::time::HostTime;
use crate::timer::{AutoAdvance, TimerToken};
use crate::trace::{
    AutoAdvanceEvent, DragSnapEvent, GeometryClampEvent, IndexChangeEvent, NoopSink, SeamSnapEvent,
    TimerResetEvent, TraceSink,
};

/// A change of the externally observable logical index.
///
/// Returned synchronously from the call that caused the underlying physical
/// index to move; the host forwards it to whatever binding or indicator it
/// maintains. The controller itself never publishes anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexChange {
    /// Logical index before the change.
    pub previous: usize,
    /// Logical index after the change.
    pub current: usize,
}

/// Controller for an infinitely-looping, auto-advancing carousel.
///
/// This type:
///
/// - owns the [`ScrollSurface`] handle and a [`LoopState`] over the doubled
///   page strip,
/// - converts raw scroll offsets into page indices and applies seam
///   corrections without animation,
/// - snaps drag releases to exactly one page per gesture,
/// - exposes the auto-advance deadline for the host to schedule against.
///
/// It does *not* know about any widget/view system; hosts materialize page
/// views from [`slots`](Self::slots) and forward platform scroll callbacks
/// as method calls. All methods are meant to be called from one logical
/// thread (the UI thread); the three event sources — drag callbacks, scroll
/// position callbacks, and timer fires — must not run concurrently, which
/// platform UI contracts already guarantee.
#[derive(Debug)]
pub struct Carousel<S: ScrollSurface, T: TraceSink = NoopSink> {
    state: LoopState,
    surface: S,
    timer: AutoAdvance,
    page_width: f64,
    last_logical: usize,
    #[cfg(feature = "trace")]
    sink: T,
    #[cfg(not(feature = "trace"))]
    _marker: PhantomData<T>,
}

impl<S: ScrollSurface> Carousel<S, NoopSink> {
    /// Creates a carousel over `config.item_count` items, reading the page
    /// width from the surface.
    ///
    /// The first auto-advance deadline is scheduled one interval after
    /// `now`; nothing fires until the host redeems it through
    /// [`on_timer_fire`](Self::on_timer_fire).
    ///
    /// # Errors
    ///
    /// Fails fast with a [`ConfigError`] before any timer state is created
    /// if the configuration is invalid.
    pub fn new(config: CarouselConfig, surface: S, now: HostTime) -> Result<Self, ConfigError> {
        Self::with_trace_sink(config, surface, now, NoopSink)
    }
}

impl<S: ScrollSurface, T: TraceSink> Carousel<S, T> {
    /// Like [`Carousel::new`], with a [`TraceSink`] attached.
    ///
    /// The sink only receives events when the `trace` feature is enabled;
    /// without it the sink is not even stored.
    pub fn with_trace_sink(
        config: CarouselConfig,
        surface: S,
        now: HostTime,
        sink: T,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = LoopState::new(config.item_count, config.start_physical_index)
            .map_err(|_| ConfigError::EmptyItems)?;
        let page_width = surface.viewport_width().max(0.0);
        let last_logical = state.logical_index();
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
        }
        Ok(Self {
            state,
            surface,
            timer: AutoAdvance::new(config.interval_ticks, now),
            page_width,
            last_logical,
            #[cfg(feature = "trace")]
            sink,
            #[cfg(not(feature = "trace"))]
            _marker: PhantomData,
        })
    }

    /// Returns the logical item count N.
    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.state.item_count()
    }

    /// Returns the number of physical pages (2N).
    #[must_use]
    pub const fn page_count(&self) -> usize {
        self.state.page_count()
    }

    /// Returns the current physical page index.
    #[must_use]
    pub const fn physical_index(&self) -> usize {
        self.state.physical_index()
    }

    /// Returns the current logical index.
    #[must_use]
    pub const fn logical_index(&self) -> usize {
        self.state.logical_index()
    }

    /// Returns the cached page width (the viewport width at mount or at the
    /// last [`refresh_viewport`](Self::refresh_viewport)).
    #[must_use]
    pub const fn page_width(&self) -> f64 {
        self.page_width
    }

    /// Returns the doubled strip for page materialization at mount time.
    #[must_use]
    pub const fn slots(&self) -> PageSlots {
        self.state.slots()
    }

    /// Returns a shared reference to the scroll surface.
    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns a mutable reference to the scroll surface.
    pub const fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Returns the token and deadline of the single live pending
    /// auto-advance fire.
    ///
    /// The host schedules a callback for the deadline and redeems the token
    /// through [`on_timer_fire`](Self::on_timer_fire). Every scroll event
    /// reschedules the deadline and invalidates the token, so the host
    /// should re-query after each event it forwards.
    #[must_use]
    pub const fn pending_advance(&self) -> (TimerToken, HostTime) {
        self.timer.pending()
    }

    /// Redeems an auto-advance fire.
    ///
    /// Returns `false` (doing nothing) for a stale token, which is how a
    /// cancelled timer is kept from firing late. For the live token,
    /// requests an *animated* scroll to the next physical page and
    /// schedules the next repetition one interval after `now`.
    ///
    /// No seam correction is pre-applied here: once the surface reports the
    /// animated position back through
    /// [`on_scroll_position_changed`](Self::on_scroll_position_changed),
    /// the seam is handled there, on the same path as user drags.
    pub fn on_timer_fire(&mut self, token: TimerToken, now: HostTime) -> bool {
        if !self.timer.fire(token, now) {
            return false;
        }
        let physical_target = self.state.physical_index() + 1;
        let target_offset = physical_target as f64 * self.page_width;
        self.surface.set_position(target_offset, true);
        let (_, next_deadline) = self.timer.pending();
        self.with_sink(|sink| {
            sink.on_auto_advance(&AutoAdvanceEvent {
                physical_target,
                target_offset,
                next_deadline,
            });
        });
        true
    }

    /// Negotiates the landing offset for a released drag.
    ///
    /// `proposed_offset` is where the platform's own deceleration would
    /// land; it is always replaced:
    ///
    /// - zero release velocity snaps to the page nearest the *current*
    ///   surface position, with no directional bias;
    /// - any non-zero velocity moves exactly one page forward or backward
    ///   from the current physical index, however far the drag itself
    ///   travelled.
    ///
    /// The zero check is an exact `== 0.0` comparison. That is a known
    /// floating-point fragility kept on purpose: platforms report a literal
    /// zero for a plain lift-off, and an epsilon would reclassify the
    /// slowest deliberate flicks as taps.
    ///
    /// A backward step from physical page 0 returns a negative offset; the
    /// surface animates into the overshoot and the seam correction brings
    /// it back on the next position report.
    pub fn on_drag_will_end(&mut self, velocity: Vec2, proposed_offset: f64) -> f64 {
        let width = self.page_width;
        let adjusted = if velocity.x == 0.0 {
            let index =
                nearest_page_index(self.surface.position(), width, self.state.page_count());
            index as f64 * width
        } else if velocity.x > 0.0 {
            (self.state.physical_index() + 1) as f64 * width
        } else {
            (self.state.physical_index() as f64 - 1.0) * width
        };
        self.with_sink(|sink| {
            sink.on_drag_snap(&DragSnapEvent {
                velocity_x: velocity.x,
                proposed_offset,
                adjusted_offset: adjusted,
            });
        });
        adjusted
    }

    /// Handles a surface position report (user drags and programmatic
    /// animated moves alike).
    ///
    /// Applies the seam correction when the offset crossed either edge of
    /// the doubled strip — repositioning the surface *without* animation,
    /// which by the surface contract overrides any in-flight animated
    /// scroll — and otherwise re-derives the physical index from the
    /// rounded position.
    ///
    /// Offsets more than one full page beyond either seam can only come
    /// from a platform layout bug; they are clamped into the tolerated band
    /// and recovered locally, never surfaced to the caller.
    ///
    /// Every call defers the auto-advance deadline to one interval after
    /// `now` (cancelling the outstanding [`TimerToken`]), so the timer
    /// never races live scroll activity.
    ///
    /// Returns the [`IndexChange`] if the logical index moved.
    pub fn on_scroll_position_changed(
        &mut self,
        raw_offset: f64,
        now: HostTime,
    ) -> Option<IndexChange> {
        let width = self.page_width;
        if !(width > 0.0) || !raw_offset.is_finite() {
            // Mid-layout viewport or nonsensical report; keep the index and
            // just defer the timer like any other scroll activity.
            self.reset_timer(now);
            return None;
        }

        let band_max = self.state.page_count() as f64 * width;
        let mut raw = raw_offset;
        if raw < -width || raw > band_max {
            let clamped = raw.clamp(-width, band_max);
            self.with_sink(|sink| {
                sink.on_geometry_clamp(&GeometryClampEvent {
                    reported_offset: raw,
                    clamped_offset: clamped,
                });
            });
            raw = clamped;
        }

        if let Some(correction) = self.state.correct_for_seam(raw, width) {
            self.surface.set_position(correction.target_offset, false);
            self.with_sink(|sink| {
                sink.on_seam_snap(&SeamSnapEvent {
                    reported_offset: raw,
                    target_offset: correction.target_offset,
                    physical_index: correction.physical_index,
                });
            });
        }

        self.reset_timer(now);

        let current = self.state.logical_index();
        if current == self.last_logical {
            return None;
        }
        let change = IndexChange {
            previous: self.last_logical,
            current,
        };
        self.last_logical = current;
        self.with_sink(|sink| {
            sink.on_index_change(&IndexChangeEvent {
                previous: change.previous,
                current: change.current,
            });
        });
        Some(change)
    }

    /// Re-reads the viewport width after a layout pass and re-snaps the
    /// surface to the current physical page.
    ///
    /// Cached offsets are invalid after a resize; the new position is
    /// recomputed from the physical index, never interpolated from the old
    /// offset.
    pub fn refresh_viewport(&mut self) {
        let width = self.surface.viewport_width().max(0.0);
        self.page_width = width;
        if width > 0.0 {
            self.surface
                .set_position(self.state.physical_index() as f64 * width, false);
        }
    }

    fn reset_timer(&mut self, now: HostTime) {
        let deadline = self.timer.reset(now);
        self.with_sink(|sink| {
            sink.on_timer_reset(&TimerResetEvent { deadline });
        });
    }

    #[inline]
    fn with_sink(&mut self, f: impl FnOnce(&mut T)) {
        #[cfg(feature = "trace")]
        f(&mut self.sink);
        #[cfg(not(feature = "trace"))]
        {
            _ = f;
        }
    }
}
