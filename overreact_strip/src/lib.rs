// Copyright 2026 the Overreact Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overreact Strip: strip geometry and hit testing for a reaction picker.
//!
//! The reaction strip is a horizontal row of icons shown above a trigger
//! control. This crate turns a validated [`ReactionsConfig`] into concrete
//! geometry and answers the one question the gesture layer keeps asking:
//! *which icon, if any, is under the pointer right now?*
//!
//! - [`StripMetrics`]: sizes derived once from the configuration (resting,
//!   shrunken, and enlarged icon sizes, the divider between icons, and the
//!   overall strip extent). Also computes the strip's placement relative to
//!   an anchor rectangle and the press point.
//! - [`StripLayout`]: the laid-out per-icon bounding rectangles for one
//!   strip position and highlight state.
//! - [`StripLayout::locate`]: the pure hit tester, with a slop region so the
//!   user does not have to be pixel-perfect.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use overreact_config::{Reaction, ReactionsConfigBuilder};
//! use overreact_strip::StripMetrics;
//!
//! let config = ReactionsConfigBuilder::new((0..6).map(Reaction::new))
//!     .reaction_size(40.0)
//!     .horizontal_margin(16.0)
//!     .build()
//!     .expect("valid");
//!
//! let metrics = StripMetrics::new(&config);
//! let layout = metrics.layout(Point::new(0.0, 0.0));
//!
//! // The center of the first icon hits index 0.
//! let center = layout.rects()[0].center();
//! assert_eq!(layout.locate(center), Some(0));
//!
//! // Far away from the strip, nothing is hit.
//! assert_eq!(layout.locate(Point::new(-500.0, -500.0)), None);
//! ```
//!
//! Hit testing is a pure function of the layout and the query point; the
//! layout itself is a plain value that the presentation layer may also build
//! directly (for example from animated, in-flight icon bounds) via
//! [`StripLayout::new`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod hit;
mod layout;
mod metrics;

pub use hit::HitParams;
pub use layout::StripLayout;
pub use metrics::StripMetrics;
