// Copyright 2026 the Overreact Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overreact Picker: the object that ties a reaction picker together.
//!
//! [`Picker`] is owned by whoever owns the trigger control. It is created at
//! trigger setup, fed the trigger's raw touch events, and dropped at trigger
//! teardown; there is no hidden registration anywhere. Per event it:
//!
//! 1. resolves the pointer position to an icon hit (`overreact_strip`),
//! 2. advances the gesture state machine (`overreact_gesture`),
//! 3. on a completed session, invokes the selection listener exactly once,
//! 4. and returns the [`PopupCommand`]s the presentation layer should apply:
//!    [`Show`](PopupCommand::Show), [`Highlight`](PopupCommand::Highlight),
//!    [`Hide`](PopupCommand::Hide).
//!
//! The crate renders nothing; the commands are the whole output surface.
//!
//! ## Selection listener
//!
//! The listener is a plain function value `FnMut(&SelectionResult<I>) -> bool`.
//! It runs synchronously, once per completed session (including
//! no-selection outcomes), and its return value decides auto-dismissal:
//! `true` hides the popup, `false` vetoes the hide and keeps the strip open
//! with the highlight cleared (useful for validation-style flows). With no
//! listener set, every commit dismisses.
//!
//! The gesture session is closed *before* the listener runs, so a listener
//! that panics cannot strand an open session and block future interactions.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use overreact_config::{Reaction, ReactionsConfigBuilder};
//! use overreact_picker::{Picker, PopupCommand, TouchPhase};
//!
//! let config = ReactionsConfigBuilder::new((0..6).map(Reaction::new))
//!     .reaction_size(40.0)
//!     .horizontal_margin(16.0)
//!     .build()
//!     .expect("valid");
//!
//! let screen = Size::new(1080.0, 1920.0);
//! let trigger = Rect::new(100.0, 900.0, 260.0, 960.0);
//! let mut picker = Picker::new(config, screen, trigger);
//! picker.set_listener(|selection| {
//!     // React to the committed selection here.
//!     selection.index.is_some() // keep the popup open on empty commits
//! });
//!
//! // Press on the trigger, drag up onto the strip, release.
//! let commands = picker.handle_touch(TouchPhase::Down, Point::new(150.0, 930.0));
//! assert!(matches!(commands[0], PopupCommand::Show { .. }));
//! ```
//!
//! All events are expected on the one thread that drives the UI; the picker
//! is plain mutable state.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod command;
mod picker;

pub use command::{Commands, PopupCommand};
pub use picker::{Picker, SelectionResult};

pub use overreact_gesture::TouchPhase;
