// Copyright 2026 the Overreact Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overreact Gesture: the touch state machine behind a reaction picker.
//!
//! A reaction picker session is one press-drag-release interaction: the
//! pointer goes down on the trigger, the strip opens, the hover follows the
//! pointer across the icons, and the release commits whichever icon was
//! hovered (or nothing). [`GestureTracker`] is that state machine and
//! nothing else:
//!
//! - It consumes `(phase, hit)` pairs, where the hit (the icon index under
//!   the pointer) has already been resolved by the caller (for example with
//!   `overreact_strip`'s hit tester). The tracker performs no hit testing
//!   and owns no geometry.
//! - It reports every state change as a [`Transition`], which a presentation
//!   layer can map directly onto show/highlight/hide effects.
//!
//! ## States
//!
//! `Idle` → (pointer down) → `Open(hovered)` → (pointer up, cancel, or
//! external dismiss) → closed, which immediately re-arms to `Idle` so the
//! same tracker serves any number of sessions. At most one session is live
//! at a time: a pointer down while a session is open is ignored.
//!
//! ## Minimal example
//!
//! ```rust
//! use overreact_gesture::{GestureTracker, Transition};
//!
//! let mut tracker = GestureTracker::new();
//!
//! assert_eq!(tracker.on_down(), Transition::Opened);
//! assert_eq!(tracker.on_move(Some(0)), Transition::HoverChanged(Some(0)));
//! assert_eq!(tracker.on_move(Some(3)), Transition::HoverChanged(Some(3)));
//!
//! // The release commits the hit at the release position.
//! assert_eq!(
//!     tracker.on_up(Some(3)),
//!     Transition::Committed { selection: Some(3) }
//! );
//!
//! // The tracker is immediately reusable.
//! assert_eq!(tracker.on_down(), Transition::Opened);
//! // A cancel always commits nothing, whatever was hovered.
//! tracker.on_move(Some(1));
//! assert_eq!(tracker.on_cancel(), Transition::Committed { selection: None });
//! ```
//!
//! All events are expected on one thread, in order; the tracker is plain
//! mutable state with no interior synchronization.
//!
//! This crate is `no_std` and allocation-free.

#![no_std]

/// The phase of a single-pointer touch event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    /// The pointer made contact.
    Down,
    /// The pointer moved while in contact.
    Move,
    /// The pointer lifted; commits the current hit.
    Up,
    /// The interaction was interrupted (system gesture, palm rejection);
    /// commits nothing.
    Cancel,
}

/// What a touch event did to the tracker.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// The event did not apply in the current state (for example a second
    /// pointer down while a session is open) and was dropped.
    Ignored,
    /// The event applied but changed nothing (a move over the same icon).
    Unchanged,
    /// A session opened; the presentation layer should show the strip.
    Opened,
    /// The hovered icon changed; the presentation layer should re-highlight.
    HoverChanged(Option<usize>),
    /// The session ended. `selection` is the committed icon index, `None`
    /// for no selection. The tracker has already re-armed to idle when this
    /// is returned.
    Committed {
        /// Committed icon index, `None` when the pointer was over nothing
        /// or the session was canceled/dismissed.
        selection: Option<usize>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum State {
    Idle,
    Open { hovered: Option<usize> },
}

/// Tracks one press-drag-release session over the reaction strip.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GestureTracker {
    state: State,
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureTracker {
    /// A tracker in the idle state.
    pub const fn new() -> Self {
        Self { state: State::Idle }
    }

    /// Whether a session is currently open.
    pub fn is_open(&self) -> bool {
        matches!(self.state, State::Open { .. })
    }

    /// The currently hovered icon index, if a session is open.
    pub fn hovered(&self) -> Option<usize> {
        match self.state {
            State::Idle => None,
            State::Open { hovered } => hovered,
        }
    }

    /// Pointer down on the trigger. Opens a session with no hover; the
    /// first move establishes the hover.
    ///
    /// Ignored while a session is already open, preserving the one-live-
    /// session invariant against rapid re-presses.
    pub fn on_down(&mut self) -> Transition {
        match self.state {
            State::Idle => {
                self.state = State::Open { hovered: None };
                Transition::Opened
            }
            State::Open { .. } => Transition::Ignored,
        }
    }

    /// Pointer move with the pre-resolved hit at the new position.
    pub fn on_move(&mut self, hit: Option<usize>) -> Transition {
        match &mut self.state {
            State::Idle => Transition::Ignored,
            State::Open { hovered } => {
                if *hovered == hit {
                    Transition::Unchanged
                } else {
                    *hovered = hit;
                    Transition::HoverChanged(hit)
                }
            }
        }
    }

    /// Pointer up with the pre-resolved hit at the release position.
    ///
    /// The hit at release is the terminal hover and becomes the committed
    /// selection; earlier hovers never influence it.
    pub fn on_up(&mut self, hit: Option<usize>) -> Transition {
        match self.state {
            State::Idle => Transition::Ignored,
            State::Open { .. } => {
                self.state = State::Idle;
                Transition::Committed { selection: hit }
            }
        }
    }

    /// Pointer cancel. Ends the session committing nothing, regardless of
    /// the hover.
    pub fn on_cancel(&mut self) -> Transition {
        match self.state {
            State::Idle => Transition::Ignored,
            State::Open { .. } => {
                self.state = State::Idle;
                Transition::Committed { selection: None }
            }
        }
    }

    /// External teardown (the popup was removed out from under the
    /// gesture). Equivalent to a cancel: ends any open session committing
    /// nothing.
    pub fn dismiss(&mut self) -> Transition {
        self.on_cancel()
    }

    /// Dispatch one event by phase. `hit` is ignored for
    /// [`TouchPhase::Down`] (a session always opens unhovered) and for
    /// [`TouchPhase::Cancel`] (a cancel never selects).
    pub fn handle(&mut self, phase: TouchPhase, hit: Option<usize>) -> Transition {
        match phase {
            TouchPhase::Down => self.on_down(),
            TouchPhase::Move => self.on_move(hit),
            TouchPhase::Up => self.on_up(hit),
            TouchPhase::Cancel => self.on_cancel(),
        }
    }
}
