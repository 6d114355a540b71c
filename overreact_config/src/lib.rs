// Copyright 2026 the Overreact Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overreact Config: immutable configuration for a press-and-drag reaction picker.
//!
//! A reaction picker shows a horizontal strip of selectable icons (reactions)
//! above a trigger control while the user holds a press. This crate owns the
//! configuration half of that system: the ordered reaction list plus the
//! geometry and styling values the strip is derived from.
//!
//! The crate is deliberately toolkit-agnostic. A [`Reaction`] carries a
//! caller-defined icon handle `I` such as a resource ID or an image key (the
//! crate never loads or draws anything) and an optional label. All values are
//! immutable once built: [`ReactionsConfig`] can only be produced through
//! [`ReactionsConfigBuilder::build`], which validates the combination and
//! rejects invalid configurations up front rather than at first touch.
//!
//! ## Minimal example
//!
//! ```rust
//! use overreact_config::{Reaction, ReactionsConfigBuilder};
//!
//! // Using &str as a stand-in for an application-specific icon handle.
//! let config = ReactionsConfigBuilder::new([
//!     Reaction::new("like").with_label("Like"),
//!     Reaction::new("love").with_label("Love"),
//!     Reaction::new("haha"),
//! ])
//! .reaction_size(48.0)
//! .horizontal_margin(16.0)
//! .build()
//! .expect("non-empty list with positive sizes is valid");
//!
//! assert_eq!(config.reactions().len(), 3);
//! // The vertical margin defaults to the horizontal one.
//! assert_eq!(config.vertical_margin(), 16.0);
//! ```
//!
//! ## Validation
//!
//! [`ReactionsConfigBuilder::build`] fails fast with a [`ConfigError`] when
//! the reaction list is empty, the icon size is not strictly positive, a
//! margin or padding is negative, or any dimension is non-finite. Downstream
//! crates may therefore assume every [`ReactionsConfig`] they receive is
//! internally consistent.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

pub use peniko::Color;

/// Default icon size in logical pixels.
pub const DEFAULT_REACTION_SIZE: f64 = 48.0;

/// Default horizontal margin in logical pixels.
///
/// The vertical margin and the popup screen margin both fall back to the
/// horizontal margin when left unset.
pub const DEFAULT_MARGIN: f64 = 16.0;

/// Default label text size in logical pixels.
pub const DEFAULT_TEXT_SIZE: f64 = 12.0;

/// One selectable entry in the reaction strip.
///
/// The icon handle `I` is application-defined; this crate treats it as an
/// opaque value and only threads it through to the selection callback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reaction<I> {
    icon: I,
    label: Option<String>,
}

impl<I> Reaction<I> {
    /// Create a reaction from an icon handle, without a label.
    pub fn new(icon: I) -> Self {
        Self { icon, label: None }
    }

    /// Attach a display label shown above the enlarged icon.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// The application-defined icon handle.
    pub fn icon(&self) -> &I {
        &self.icon
    }

    /// The optional display label.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// Horizontal placement of the strip relative to its trigger or the screen.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum PopupGravity {
    /// Slightly right of the press point, similar to the Facebook app.
    #[default]
    Default,
    /// Align the strip's left edge with the trigger's left edge.
    /// Falls back to screen-right when that would overflow.
    ParentLeft,
    /// Align the strip's right edge with the trigger's right edge.
    /// Falls back to screen-left when that would underflow.
    ParentRight,
    /// Pin to the left screen edge, inset by the popup margin.
    ScreenLeft,
    /// Pin to the right screen edge, inset by the popup margin.
    ScreenRight,
    /// Center on the screen.
    Center,
}

/// Styling for the label shown above a highlighted reaction.
///
/// Plain value bag; the presentation layer interprets it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Label text color.
    pub color: Color,
    /// Label text size in logical pixels.
    pub size: f64,
    /// Horizontal padding around the label text.
    pub horizontal_padding: f64,
    /// Vertical padding around the label text.
    pub vertical_padding: f64,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            size: DEFAULT_TEXT_SIZE,
            horizontal_padding: 8.0,
            vertical_padding: 4.0,
        }
    }
}

/// Why a configuration was rejected at build time.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The reaction list is empty.
    EmptyReactions,
    /// The icon size is zero or negative.
    NonPositiveIconSize,
    /// A margin or padding is negative.
    NegativeMargin,
    /// A dimension is NaN or infinite.
    NonFiniteDimension,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::EmptyReactions => "reaction list is empty",
            Self::NonPositiveIconSize => "reaction size must be strictly positive",
            Self::NegativeMargin => "margins and paddings must be non-negative",
            Self::NonFiniteDimension => "dimensions must be finite",
        };
        f.write_str(msg)
    }
}

impl core::error::Error for ConfigError {}

/// Immutable configuration snapshot for one reaction picker.
///
/// Constructed only via [`ReactionsConfigBuilder::build`]; every instance is
/// validated and read-only for the lifetime of the picker that owns it.
#[derive(Clone, Debug)]
pub struct ReactionsConfig<I> {
    reactions: Vec<Reaction<I>>,
    reaction_size: f64,
    horizontal_margin: f64,
    vertical_margin: f64,
    popup_gravity: PopupGravity,
    popup_margin: f64,
    popup_color: Color,
    text: TextStyle,
}

impl<I> ReactionsConfig<I> {
    /// The ordered reaction list. Indices reported elsewhere refer to
    /// positions in this slice.
    pub fn reactions(&self) -> &[Reaction<I>] {
        &self.reactions
    }

    /// The reaction at `index`, if in range.
    pub fn reaction(&self, index: usize) -> Option<&Reaction<I>> {
        self.reactions.get(index)
    }

    /// Number of configured reactions. Always at least one.
    pub fn len(&self) -> usize {
        self.reactions.len()
    }

    /// Always `false`; an empty list is rejected at build time. Present to
    /// satisfy the usual `len`/`is_empty` pairing.
    pub fn is_empty(&self) -> bool {
        self.reactions.is_empty()
    }

    /// Icon size at rest, in logical pixels.
    pub fn reaction_size(&self) -> f64 {
        self.reaction_size
    }

    /// Horizontal inset between the strip edge and the first/last icon.
    pub fn horizontal_margin(&self) -> f64 {
        self.horizontal_margin
    }

    /// Vertical inset between the strip edge and the icons.
    pub fn vertical_margin(&self) -> f64 {
        self.vertical_margin
    }

    /// Horizontal placement policy for the strip.
    pub fn popup_gravity(&self) -> PopupGravity {
        self.popup_gravity
    }

    /// Inset from the screen edge used by the screen-relative gravities.
    pub fn popup_margin(&self) -> f64 {
        self.popup_margin
    }

    /// Background color of the strip.
    pub fn popup_color(&self) -> Color {
        self.popup_color
    }

    /// Label styling.
    pub fn text(&self) -> &TextStyle {
        &self.text
    }
}

/// Builder for [`ReactionsConfig`].
///
/// Unset values fall back to defaults at [`build`](Self::build) time; the
/// vertical margin and the popup screen margin default to the horizontal
/// margin, matching the common square-inset look.
#[derive(Clone, Debug)]
pub struct ReactionsConfigBuilder<I> {
    reactions: Vec<Reaction<I>>,
    reaction_size: f64,
    horizontal_margin: f64,
    vertical_margin: Option<f64>,
    popup_gravity: PopupGravity,
    popup_margin: Option<f64>,
    popup_color: Color,
    text: TextStyle,
}

impl<I> ReactionsConfigBuilder<I> {
    /// Start a builder from an ordered reaction list.
    pub fn new(reactions: impl IntoIterator<Item = Reaction<I>>) -> Self {
        Self {
            reactions: reactions.into_iter().collect(),
            reaction_size: DEFAULT_REACTION_SIZE,
            horizontal_margin: DEFAULT_MARGIN,
            vertical_margin: None,
            popup_gravity: PopupGravity::default(),
            popup_margin: None,
            popup_color: Color::WHITE,
            text: TextStyle::default(),
        }
    }

    /// Resting icon size in logical pixels.
    #[must_use]
    pub fn reaction_size(mut self, size: f64) -> Self {
        self.reaction_size = size;
        self
    }

    /// Horizontal inset between the strip edge and the first/last icon.
    /// Also the default for the vertical and popup margins.
    #[must_use]
    pub fn horizontal_margin(mut self, margin: f64) -> Self {
        self.horizontal_margin = margin;
        self
    }

    /// Vertical inset between the strip edge and the icons.
    #[must_use]
    pub fn vertical_margin(mut self, margin: f64) -> Self {
        self.vertical_margin = Some(margin);
        self
    }

    /// Horizontal placement policy for the strip.
    #[must_use]
    pub fn popup_gravity(mut self, gravity: PopupGravity) -> Self {
        self.popup_gravity = gravity;
        self
    }

    /// Inset from the screen edge used by the screen-relative gravities.
    #[must_use]
    pub fn popup_margin(mut self, margin: f64) -> Self {
        self.popup_margin = Some(margin);
        self
    }

    /// Background color of the strip.
    #[must_use]
    pub fn popup_color(mut self, color: Color) -> Self {
        self.popup_color = color;
        self
    }

    /// Label styling.
    #[must_use]
    pub fn text(mut self, text: TextStyle) -> Self {
        self.text = text;
        self
    }

    /// Validate and freeze the configuration.
    ///
    /// ## Errors
    ///
    /// - [`ConfigError::EmptyReactions`] when no reactions were provided.
    /// - [`ConfigError::NonFiniteDimension`] when any dimension is NaN or
    ///   infinite.
    /// - [`ConfigError::NonPositiveIconSize`] when the icon size is not
    ///   strictly positive.
    /// - [`ConfigError::NegativeMargin`] when a margin or padding is
    ///   negative.
    pub fn build(self) -> Result<ReactionsConfig<I>, ConfigError> {
        if self.reactions.is_empty() {
            return Err(ConfigError::EmptyReactions);
        }

        let vertical_margin = self.vertical_margin.unwrap_or(self.horizontal_margin);
        let popup_margin = self.popup_margin.unwrap_or(self.horizontal_margin);

        let dims = [
            self.reaction_size,
            self.horizontal_margin,
            vertical_margin,
            popup_margin,
            self.text.size,
            self.text.horizontal_padding,
            self.text.vertical_padding,
        ];
        if dims.iter().any(|d| !d.is_finite()) {
            return Err(ConfigError::NonFiniteDimension);
        }
        if self.reaction_size <= 0.0 {
            return Err(ConfigError::NonPositiveIconSize);
        }
        let margins = [
            self.horizontal_margin,
            vertical_margin,
            popup_margin,
            self.text.horizontal_padding,
            self.text.vertical_padding,
        ];
        if margins.iter().any(|m| *m < 0.0) {
            return Err(ConfigError::NegativeMargin);
        }

        Ok(ReactionsConfig {
            reactions: self.reactions,
            reaction_size: self.reaction_size,
            horizontal_margin: self.horizontal_margin,
            vertical_margin,
            popup_gravity: self.popup_gravity,
            popup_margin,
            popup_color: self.popup_color,
            text: self.text,
        })
    }
}
