// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the carousel event flow.
//!
//! [`TraceSink`] has one method per event with default no-op bodies, so
//! implementing only the events you care about is fine. A sink is attached
//! at construction via
//! [`Carousel::with_trace_sink`](crate::Carousel::with_trace_sink).
//!
//! Without the `trace` feature, the carousel does not store the sink and
//! every emission compiles to nothing (zero overhead). With it, each
//! emission is a direct call into the sink.

use crate::time::HostTime;

/// Emitted when an accepted timer fire requests an animated advance.
#[derive(Clone, Copy, Debug)]
pub struct AutoAdvanceEvent {
    /// Physical page the surface was asked to animate to.
    pub physical_target: usize,
    /// Requested offset, `physical_target × page width`.
    pub target_offset: f64,
    /// Deadline of the next scheduled repetition.
    pub next_deadline: HostTime,
}

/// Emitted when a drag release negotiates its landing offset.
#[derive(Clone, Copy, Debug)]
pub struct DragSnapEvent {
    /// Horizontal release velocity reported by the platform.
    pub velocity_x: f64,
    /// Landing offset the platform's own deceleration proposed.
    pub proposed_offset: f64,
    /// Offset the controller substituted.
    pub adjusted_offset: f64,
}

/// Emitted when a seam crossing triggers a silent reposition.
#[derive(Clone, Copy, Debug)]
pub struct SeamSnapEvent {
    /// Offset reported by the surface.
    pub reported_offset: f64,
    /// Offset of the mirrored page the surface was jumped to.
    pub target_offset: f64,
    /// Physical index after the jump.
    pub physical_index: usize,
}

/// Emitted when the surface reports an offset outside the tolerated
/// one-page overshoot band and the controller clamps it.
#[derive(Clone, Copy, Debug)]
pub struct GeometryClampEvent {
    /// Offset reported by the surface.
    pub reported_offset: f64,
    /// Offset after clamping into the tolerated band.
    pub clamped_offset: f64,
}

/// Emitted every time scroll activity defers the auto-advance timer.
#[derive(Clone, Copy, Debug)]
pub struct TimerResetEvent {
    /// The rescheduled deadline.
    pub deadline: HostTime,
}

/// Emitted when the logical index changes.
#[derive(Clone, Copy, Debug)]
pub struct IndexChangeEvent {
    /// Logical index before the change.
    pub previous: usize,
    /// Logical index after the change.
    pub current: usize,
}

/// Receives trace events from the carousel.
///
/// All methods have default no-op implementations.
pub trait TraceSink {
    /// Called when a timer fire requests an animated advance.
    fn on_auto_advance(&mut self, e: &AutoAdvanceEvent) {
        _ = e;
    }

    /// Called when a drag release negotiates its landing offset.
    fn on_drag_snap(&mut self, e: &DragSnapEvent) {
        _ = e;
    }

    /// Called when a seam crossing triggers a silent reposition.
    fn on_seam_snap(&mut self, e: &SeamSnapEvent) {
        _ = e;
    }

    /// Called when an out-of-band offset is clamped.
    fn on_geometry_clamp(&mut self, e: &GeometryClampEvent) {
        _ = e;
    }

    /// Called when scroll activity reschedules the auto-advance deadline.
    fn on_timer_reset(&mut self, e: &TimerResetEvent) {
        _ = e;
    }

    /// Called when the logical index changes.
    fn on_index_change(&mut self, e: &IndexChangeEvent) {
        _ = e;
    }
}

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}
