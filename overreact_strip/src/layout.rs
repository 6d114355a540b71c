// Copyright 2026 the Overreact Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The laid-out strip: per-icon bounding rectangles plus the strip bounds.

use alloc::vec::Vec;
use kurbo::{Point, Rect};

use crate::hit::HitParams;

/// Per-icon bounding rectangles for one strip position and highlight state.
///
/// A layout is a plain value: [`StripMetrics::layout`](crate::StripMetrics::layout)
/// builds one for the resting strip, and a presentation layer that animates
/// icon bounds can build its own from the live rectangles. Hit testing via
/// [`locate`](Self::locate) treats the rectangles as authoritative and never
/// mutates the layout.
#[derive(Clone, Debug, PartialEq)]
pub struct StripLayout {
    bounds: Rect,
    rects: Vec<Rect>,
    params: HitParams,
}

impl StripLayout {
    /// Build a layout from explicit geometry.
    ///
    /// `rects` are ordered by reaction index and are expected to lie inside
    /// `bounds`; `params` controls the hit-test slop around `bounds`.
    pub fn new(bounds: Rect, rects: Vec<Rect>, params: HitParams) -> Self {
        Self {
            bounds,
            rects,
            params,
        }
    }

    /// An empty layout, hit by nothing. Stands in for a strip that has not
    /// been measured yet.
    pub fn empty() -> Self {
        Self {
            bounds: Rect::ZERO,
            rects: Vec::new(),
            params: HitParams::default(),
        }
    }

    /// The overall strip bounds.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// The per-icon bounding rectangles, ordered by reaction index.
    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    /// The hit-test tolerance for this layout.
    pub fn params(&self) -> HitParams {
        self.params
    }

    /// The slop-expanded region within which a pointer still resolves to the
    /// nearest icon.
    pub fn envelope(&self) -> Rect {
        self.bounds.inflate(self.params.slop, self.params.slop)
    }

    /// Whether the layout contains no icons.
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Inclusive-bounds containment, shared by both hit-test tiers.
    pub(crate) fn contains_inclusive(rect: &Rect, point: Point) -> bool {
        point.x >= rect.x0 && point.x <= rect.x1 && point.y >= rect.y0 && point.y <= rect.y1
    }
}
