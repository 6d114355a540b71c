// Copyright 2026 the Overreact Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Commands the picker emits for the presentation layer.

use kurbo::Point;
use smallvec::SmallVec;

/// One presentation effect to apply, in order.
///
/// The picker never draws; it describes what the overlay should do and the
/// host toolkit executes it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PopupCommand {
    /// Show the strip with its top-left corner at `origin`.
    Show {
        /// Top-left corner of the strip, in the same coordinate space as
        /// the touch events.
        origin: Point,
    },
    /// Highlight the given icon index, or clear the highlight with `None`.
    Highlight(Option<usize>),
    /// Hide the strip.
    Hide,
}

/// Commands produced by one touch event.
///
/// A single event yields at most a couple of commands; the inline capacity
/// keeps the per-event path allocation-free.
pub type Commands = SmallVec<[PopupCommand; 2]>;
