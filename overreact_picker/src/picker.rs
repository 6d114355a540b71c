// Copyright 2026 the Overreact Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The picker: gesture driving, selection dispatch, and session bookkeeping.

use alloc::boxed::Box;
use core::fmt;

use kurbo::{Point, Rect, Size};
use overreact_config::{Reaction, ReactionsConfig};
use overreact_gesture::{GestureTracker, TouchPhase, Transition};
use overreact_strip::{StripLayout, StripMetrics};

use crate::command::{Commands, PopupCommand};

/// What a completed gesture session selected.
///
/// Passed to the listener exactly once per session. `index` is the position
/// in [`ReactionsConfig::reactions`]; both fields are `None` for a
/// no-selection outcome (release over nothing, cancel, external dismiss).
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionResult<I> {
    /// The selected reaction, if any.
    pub reaction: Option<Reaction<I>>,
    /// The selected index, if any.
    pub index: Option<usize>,
}

impl<I> SelectionResult<I> {
    /// A no-selection outcome.
    pub fn none() -> Self {
        Self {
            reaction: None,
            index: None,
        }
    }

    /// Whether nothing was selected.
    pub fn is_none(&self) -> bool {
        self.index.is_none()
    }
}

type BoxedListener<I> = Box<dyn FnMut(&SelectionResult<I>) -> bool>;

bitflags::bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    struct SessionFlags: u8 {
        /// The popup is currently shown.
        const POPUP_OPEN        = 0b0000_0001;
        /// Every event of the opening gesture so far stayed inside the
        /// trigger bounds; the release arms the popup instead of committing.
        const STAYED_IN_TRIGGER = 0b0000_0010;
    }
}

/// A press-and-drag reaction picker attached to one trigger control.
///
/// Owned explicitly by the trigger's owner: create it at trigger setup with
/// the screen size and the trigger's bounds, feed it every touch event the
/// trigger receives, apply the returned [`PopupCommand`]s, and drop it at
/// teardown. See the crate docs for the full protocol.
pub struct Picker<I> {
    config: ReactionsConfig<I>,
    metrics: StripMetrics,
    tracker: GestureTracker,
    layout: Option<StripLayout>,
    listener: Option<BoxedListener<I>>,
    screen: Size,
    anchor: Rect,
    flags: SessionFlags,
}

impl<I: fmt::Debug> fmt::Debug for Picker<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Picker")
            .field("config", &self.config)
            .field("tracker", &self.tracker)
            .field("screen", &self.screen)
            .field("anchor", &self.anchor)
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}

impl<I> Picker<I> {
    /// Create a picker for a trigger with the given bounds on the given
    /// screen. No listener is set; commits auto-dismiss until one is.
    pub fn new(config: ReactionsConfig<I>, screen: Size, anchor: Rect) -> Self {
        let metrics = StripMetrics::new(&config);
        Self {
            config,
            metrics,
            tracker: GestureTracker::new(),
            layout: None,
            listener: None,
            screen,
            anchor,
            flags: SessionFlags::empty(),
        }
    }

    /// Set the selection listener. Replaces any previous listener.
    pub fn set_listener(&mut self, listener: impl FnMut(&SelectionResult<I>) -> bool + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Remove the listener; commits auto-dismiss again.
    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    /// Update the screen size (for example after a rotation).
    pub fn set_screen(&mut self, screen: Size) {
        self.screen = screen;
    }

    /// Update the trigger bounds (for example after a relayout).
    pub fn set_anchor(&mut self, anchor: Rect) {
        self.anchor = anchor;
    }

    /// The configuration this picker was built from.
    pub fn config(&self) -> &ReactionsConfig<I> {
        &self.config
    }

    /// The strip metrics derived from the configuration.
    pub fn metrics(&self) -> &StripMetrics {
        &self.metrics
    }

    /// The current session's resting layout, while the popup is shown.
    pub fn layout(&self) -> Option<&StripLayout> {
        self.layout.as_ref()
    }

    /// Whether the popup is currently shown.
    pub fn is_open(&self) -> bool {
        self.flags.contains(SessionFlags::POPUP_OPEN)
    }

    /// The currently hovered icon index, if a gesture is in progress.
    pub fn hovered(&self) -> Option<usize> {
        self.tracker.hovered()
    }

    fn locate(&self, position: Point) -> Option<usize> {
        // A strip that has not been laid out yet hovers nothing.
        self.layout.as_ref().and_then(|l| l.locate(position))
    }

    fn in_anchor(&self, position: Point) -> bool {
        position.x >= self.anchor.x0
            && position.x <= self.anchor.x1
            && position.y >= self.anchor.y0
            && position.y <= self.anchor.y1
    }
}

impl<I: Clone> Picker<I> {
    /// Feed one touch event and collect the presentation commands it
    /// produced.
    ///
    /// Events are expected in the usual order (down, moves, then up or
    /// cancel) on one thread. Out-of-order events are dropped without
    /// effect, matching the tracker's single-live-session policy.
    pub fn handle_touch(&mut self, phase: TouchPhase, position: Point) -> Commands {
        let mut out = Commands::new();

        if !self.in_anchor(position) {
            self.flags.remove(SessionFlags::STAYED_IN_TRIGGER);
        }

        match phase {
            TouchPhase::Down if !self.is_open() => {
                let origin = self.metrics.place(self.screen, self.anchor, position);
                self.layout = Some(self.metrics.layout(origin));
                if self.tracker.on_down() == Transition::Opened {
                    self.flags.insert(SessionFlags::POPUP_OPEN);
                    if self.in_anchor(position) {
                        self.flags.insert(SessionFlags::STAYED_IN_TRIGGER);
                    }
                    out.push(PopupCommand::Show { origin });
                }
            }
            TouchPhase::Down if !self.tracker.is_open() => {
                // The popup is still visible after a veto; a fresh press
                // starts a new session over it without re-showing.
                let _ = self.tracker.on_down();
            }
            TouchPhase::Down | TouchPhase::Move => {
                // A down while the session is still open continues it: the
                // popup was armed by a tap on the trigger and this is the
                // follow-up gesture.
                let hit = self.locate(position);
                if let Transition::HoverChanged(hovered) = self.tracker.on_move(hit) {
                    out.push(PopupCommand::Highlight(hovered));
                }
            }
            TouchPhase::Up => {
                if self.is_open() && self.flags.contains(SessionFlags::STAYED_IN_TRIGGER) {
                    // Arming tap: the whole gesture stayed on the trigger.
                    // Keep the popup open and wait for the next gesture.
                    self.flags.remove(SessionFlags::STAYED_IN_TRIGGER);
                    if let Transition::HoverChanged(hovered) = self.tracker.on_move(None) {
                        out.push(PopupCommand::Highlight(hovered));
                    }
                } else {
                    let hit = self.locate(position);
                    if let Transition::Committed { selection } = self.tracker.on_up(hit) {
                        self.commit(selection, &mut out);
                    }
                }
            }
            TouchPhase::Cancel => {
                if let Transition::Committed { selection } = self.tracker.on_cancel() {
                    self.commit(selection, &mut out);
                }
            }
        }

        out
    }

    /// Tear the popup down externally (for example the host window went
    /// away). Any open session completes with no selection and the listener
    /// is notified once; external teardown cannot be vetoed.
    pub fn dismiss(&mut self) -> Commands {
        let mut out = Commands::new();
        if let Transition::Committed { .. } = self.tracker.dismiss() {
            let result = SelectionResult::none();
            if let Some(listener) = self.listener.as_mut() {
                let _ = listener(&result);
            }
        }
        if self.is_open() {
            self.flags = SessionFlags::empty();
            self.layout = None;
            out.push(PopupCommand::Hide);
        }
        out
    }

    /// Dispatch a completed session to the listener and emit the resulting
    /// commands.
    ///
    /// The tracker has already re-armed by the time this runs, so a
    /// panicking listener cannot leave a session open.
    fn commit(&mut self, selection: Option<usize>, out: &mut Commands) {
        let result = match selection {
            Some(index) => SelectionResult {
                reaction: self.config.reaction(index).cloned(),
                index: Some(index),
            },
            None => SelectionResult::none(),
        };
        let dismiss = match self.listener.as_mut() {
            Some(listener) => listener(&result),
            None => true,
        };
        if dismiss {
            self.flags = SessionFlags::empty();
            self.layout = None;
            out.push(PopupCommand::Hide);
        } else {
            // Veto: the popup stays open with the highlight cleared.
            self.flags = SessionFlags::POPUP_OPEN;
            out.push(PopupCommand::Highlight(None));
        }
    }
}
