// Copyright 2026 the Overreact Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure hit testing over a [`StripLayout`].
//!
//! The tester answers in three tiers:
//!
//! 1. A pointer inside an icon rectangle (inclusive bounds) hits that icon.
//! 2. A pointer outside every icon but inside the strip's slop-expanded
//!    envelope hits the geometrically nearest icon, so the user does not
//!    have to be pixel-perfect over the gaps or padding.
//! 3. A pointer outside the envelope hits nothing.
//!
//! Nearest-icon resolution compares squared point-to-rectangle distances, so
//! no square roots are needed and the result is exact. Ties resolve to the
//! lower index deterministically.

use kurbo::{Point, Rect};

use crate::layout::StripLayout;

/// Hit-test tolerance.
///
/// `slop` expands the strip bounds into the envelope within which a pointer
/// still resolves to the nearest icon (see
/// [`StripLayout::envelope`](crate::StripLayout::envelope)).
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct HitParams {
    /// Extra distance around the strip bounds, in logical pixels.
    pub slop: f64,
}

impl StripLayout {
    /// The index of the icon under `point`, or `None`.
    ///
    /// Pure function of the layout and the point; call it on every pointer
    /// move. An empty (unmeasured) layout always returns `None`.
    pub fn locate(&self, point: Point) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        for (index, rect) in self.rects().iter().enumerate() {
            if Self::contains_inclusive(rect, point) {
                return Some(index);
            }
        }
        if !Self::contains_inclusive(&self.envelope(), point) {
            return None;
        }
        // Clamped hover: inside the envelope but over a gap or the padding.
        let mut best = 0;
        let mut best_dist = f64::INFINITY;
        for (index, rect) in self.rects().iter().enumerate() {
            let dist = dist_sq(rect, point);
            if dist < best_dist {
                best_dist = dist;
                best = index;
            }
        }
        Some(best)
    }
}

/// Squared distance from `point` to the nearest point of `rect` (zero when
/// inside).
fn dist_sq(rect: &Rect, point: Point) -> f64 {
    let dx = (rect.x0 - point.x).max(point.x - rect.x1).max(0.0);
    let dy = (rect.y0 - point.y).max(point.y - rect.y1).max(0.0);
    dx * dx + dy * dy
}

#[cfg(test)]
mod tests {
    use super::*;
    use overreact_config::{Reaction, ReactionsConfigBuilder};

    use crate::metrics::StripMetrics;

    fn layout(n: usize) -> StripLayout {
        let config = ReactionsConfigBuilder::new((0..n).map(Reaction::new))
            .reaction_size(40.0)
            .horizontal_margin(16.0)
            .build()
            .expect("valid");
        StripMetrics::new(&config).layout(Point::ZERO)
    }

    #[test]
    fn interior_points_hit_their_own_icon() {
        let layout = layout(6);
        for (i, rect) in layout.rects().iter().enumerate() {
            assert_eq!(layout.locate(rect.center()), Some(i));
            // Corners are inclusive.
            assert_eq!(layout.locate(Point::new(rect.x0, rect.y0)), Some(i));
        }
    }

    #[test]
    fn outside_the_envelope_hits_nothing() {
        let layout = layout(6);
        let envelope = layout.envelope();
        assert_eq!(
            layout.locate(Point::new(envelope.x0 - 1.0, envelope.y0 - 1.0)),
            None
        );
        assert_eq!(
            layout.locate(Point::new(envelope.x1 + 1.0, envelope.center().y)),
            None
        );
        assert_eq!(layout.locate(Point::new(-500.0, -500.0)), None);
    }

    #[test]
    fn gaps_resolve_to_the_nearer_icon() {
        let layout = layout(6);
        let rects = layout.rects();
        let y = rects[0].center().y;
        // Just past icon 2's right edge: still nearer to 2.
        let near_two = Point::new(rects[2].x1 + 1.0, y);
        assert_eq!(layout.locate(near_two), Some(2));
        // Just before icon 3's left edge: nearer to 3.
        let near_three = Point::new(rects[3].x0 - 1.0, y);
        assert_eq!(layout.locate(near_three), Some(3));
    }

    #[test]
    fn gap_midpoint_ties_resolve_to_the_lower_index() {
        let layout = layout(4);
        let rects = layout.rects();
        let mid = Point::new((rects[1].x1 + rects[2].x0) / 2.0, rects[1].center().y);
        assert_eq!(layout.locate(mid), Some(1));
    }

    #[test]
    fn padding_clamps_to_the_edge_icons() {
        let layout = layout(6);
        let rects = layout.rects();
        // Within the left padding, level with the icons.
        let left = Point::new(rects[0].x0 - 5.0, rects[0].center().y);
        assert_eq!(layout.locate(left), Some(0));
        // Within the right padding.
        let right = Point::new(rects[5].x1 + 5.0, rects[5].center().y);
        assert_eq!(layout.locate(right), Some(5));
        // Below the strip but within the slop.
        let below = Point::new(rects[3].center().x, layout.bounds().y1 + 5.0);
        assert_eq!(layout.locate(below), Some(3));
    }

    #[test]
    fn dist_sq_is_zero_inside() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(dist_sq(&rect, Point::new(5.0, 5.0)), 0.0);
        assert_eq!(dist_sq(&rect, Point::new(13.0, 14.0)), 9.0 + 16.0);
    }
}
