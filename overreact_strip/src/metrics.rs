// Copyright 2026 the Overreact Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sizes and placement derived from a reaction configuration.

use kurbo::{Point, Rect, Size};
use overreact_config::{PopupGravity, ReactionsConfig};

use crate::hit::HitParams;
use crate::layout::StripLayout;

/// Geometry derived once from a [`ReactionsConfig`].
///
/// All values are in the same logical coordinate space as the touch events.
/// The three icon sizes model the highlight behavior of the strip: at rest
/// every icon is `medium`; while one icon is highlighted it grows to `large`
/// and the others shrink to `small` so the strip width stays constant.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StripMetrics {
    count: usize,
    medium: f64,
    small: f64,
    large: f64,
    divider: f64,
    horizontal_margin: f64,
    vertical_margin: f64,
    width: f64,
    height: f64,
    gravity: PopupGravity,
    popup_margin: f64,
}

impl StripMetrics {
    /// Derive metrics from a validated configuration.
    pub fn new<I>(config: &ReactionsConfig<I>) -> Self {
        let count = config.len();
        let n = count as f64;
        let horizontal_margin = config.horizontal_margin();
        let vertical_margin = config.vertical_margin();
        let divider = horizontal_margin / 2.0;

        let medium = config.reaction_size();
        let large = 2.0 * medium;
        let width = 2.0 * horizontal_margin + n * medium + (n - 1.0) * divider;
        // With one icon enlarged, the remaining width is shared by the
        // others. A single-icon strip has no "others"; keep `small` sane.
        let small = if count > 1 {
            (width - 2.0 * horizontal_margin - large - (n - 1.0) * divider) / (n - 1.0)
        } else {
            medium
        };
        let height = medium + 2.0 * vertical_margin;

        Self {
            count,
            medium,
            small,
            large,
            divider,
            horizontal_margin,
            vertical_margin,
            width,
            height,
            gravity: config.popup_gravity(),
            popup_margin: config.popup_margin(),
        }
    }

    /// Number of icons in the strip.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Resting icon size.
    pub fn medium(&self) -> f64 {
        self.medium
    }

    /// Icon size while another icon is highlighted.
    pub fn small(&self) -> f64 {
        self.small
    }

    /// Icon size while highlighted.
    pub fn large(&self) -> f64 {
        self.large
    }

    /// Gap between adjacent icons.
    pub fn divider(&self) -> f64 {
        self.divider
    }

    /// Total strip width. Invariant across highlight states.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Total strip height at rest.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// The size of icon `index` under the given highlight state.
    pub fn icon_size(&self, index: usize, highlight: Option<usize>) -> f64 {
        match highlight {
            None => self.medium,
            Some(h) if h == index => self.large,
            Some(_) => self.small,
        }
    }

    /// Hit-test tolerance used by layouts built from these metrics.
    ///
    /// The slop equals the horizontal margin, so a pointer in the strip's
    /// padding still resolves to the nearest icon.
    pub fn hit_params(&self) -> HitParams {
        HitParams {
            slop: self.horizontal_margin,
        }
    }

    /// Lay out the strip at rest (every icon at `medium`).
    pub fn layout(&self, origin: Point) -> StripLayout {
        self.layout_highlighted(origin, None)
    }

    /// Lay out the strip with `highlight` enlarged and the rest shrunken.
    ///
    /// Icons are bottom-aligned inside the strip so that a growing icon
    /// expands upward, away from the user's finger.
    pub fn layout_highlighted(&self, origin: Point, highlight: Option<usize>) -> StripLayout {
        let bounds = Rect::new(
            origin.x,
            origin.y,
            origin.x + self.width,
            origin.y + self.height,
        );
        let bottom = origin.y + self.height - self.vertical_margin;
        let mut x = origin.x + self.horizontal_margin;
        let mut rects = alloc::vec::Vec::with_capacity(self.count);
        for i in 0..self.count {
            let size = self.icon_size(i, highlight);
            rects.push(Rect::new(x, bottom - size, x + size, bottom));
            x += size + self.divider;
        }
        StripLayout::new(bounds, rects, self.hit_params())
    }

    /// Compute the strip origin for a given screen, anchor (trigger bounds),
    /// and first-press point.
    ///
    /// Horizontal placement follows the configured [`PopupGravity`], with
    /// fallbacks when the preferred position would clip: parent-relative
    /// gravities fall back to the opposite screen edge, and any position
    /// that still overflows is centered. Vertically the strip sits above the
    /// anchor, or below it when there is no room above.
    pub fn place(&self, screen: Size, anchor: Rect, press: Point) -> Point {
        let mut x = match self.gravity {
            PopupGravity::Default => press.x - self.horizontal_margin - self.medium / 2.0,
            PopupGravity::ParentLeft => {
                if anchor.x0 + self.width > screen.width {
                    screen.width - self.width - self.popup_margin
                } else {
                    anchor.x0
                }
            }
            PopupGravity::ParentRight => {
                let x = anchor.x1 - self.width;
                if x < 0.0 { self.popup_margin } else { x }
            }
            PopupGravity::ScreenLeft => self.popup_margin,
            PopupGravity::ScreenRight => screen.width - self.width - self.popup_margin,
            PopupGravity::Center => (screen.width - self.width) / 2.0,
        };
        if x < 0.0 || x + self.width >= screen.width {
            x = ((screen.width - self.width) / 2.0).max(0.0);
        }

        let mut y = anchor.y0 - 2.0 * self.height;
        if y < 0.0 {
            y = anchor.y1 + self.height;
        }
        Point::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use overreact_config::{Reaction, ReactionsConfigBuilder};

    fn config(n: usize) -> ReactionsConfig<usize> {
        ReactionsConfigBuilder::new((0..n).map(Reaction::new))
            .reaction_size(40.0)
            .horizontal_margin(16.0)
            .build()
            .expect("valid")
    }

    #[test]
    fn width_and_height_formulas() {
        let m = StripMetrics::new(&config(6));
        // 2*16 + 6*40 + 5*8
        assert_eq!(m.width(), 312.0);
        // 40 + 2*16
        assert_eq!(m.height(), 72.0);
        assert_eq!(m.divider(), 8.0);
        assert_eq!(m.large(), 80.0);
    }

    #[test]
    fn highlighted_row_fits_the_same_width() {
        let m = StripMetrics::new(&config(6));
        let n = m.count() as f64;
        let row = m.large() + (n - 1.0) * m.small() + (n - 1.0) * m.divider();
        let inner = m.width() - 2.0 * 16.0;
        assert!(
            (row - inner).abs() < 1e-9,
            "highlighted icons must fill the same inner width"
        );
    }

    #[test]
    fn single_icon_strip_has_no_shrunken_size() {
        let m = StripMetrics::new(&config(1));
        assert_eq!(m.small(), m.medium());
        let layout = m.layout_highlighted(Point::ZERO, Some(0));
        assert_eq!(layout.rects().len(), 1);
        assert_eq!(layout.rects()[0].width(), m.large());
    }

    #[test]
    fn layout_is_bottom_aligned_with_divider_gaps() {
        let m = StripMetrics::new(&config(3));
        let layout = m.layout(Point::new(10.0, 20.0));
        let rects = layout.rects();
        assert_eq!(rects.len(), 3);
        let bottom = 20.0 + m.height() - 16.0;
        for r in rects {
            assert_eq!(r.y1, bottom);
            assert_eq!(r.width(), m.medium());
        }
        assert_eq!(rects[0].x0, 10.0 + 16.0);
        assert!((rects[1].x0 - (rects[0].x1 + m.divider())).abs() < 1e-9);
    }

    #[test]
    fn highlight_reshapes_the_row() {
        let m = StripMetrics::new(&config(4));
        let layout = m.layout_highlighted(Point::ZERO, Some(2));
        let rects = layout.rects();
        assert_eq!(rects[2].width(), m.large());
        for (i, r) in rects.iter().enumerate() {
            if i != 2 {
                assert!((r.width() - m.small()).abs() < 1e-9);
            }
            // Growth is upward; bottoms stay aligned.
            assert_eq!(r.y1, rects[0].y1);
        }
    }

    #[test]
    fn default_gravity_follows_the_press_point() {
        let m = StripMetrics::new(&config(3));
        let screen = Size::new(1000.0, 2000.0);
        let anchor = Rect::new(300.0, 900.0, 420.0, 960.0);
        let origin = m.place(screen, anchor, Point::new(350.0, 930.0));
        assert_eq!(origin.x, 350.0 - 16.0 - 20.0);
        assert_eq!(origin.y, 900.0 - 2.0 * m.height());
    }

    #[test]
    fn overflowing_positions_are_centered() {
        let m = StripMetrics::new(&config(6));
        let screen = Size::new(300.0, 2000.0);
        let anchor = Rect::new(0.0, 900.0, 120.0, 960.0);
        // Strip (312 wide) cannot fit a 300 wide screen at all.
        let origin = m.place(screen, anchor, Point::new(10.0, 930.0));
        assert_eq!(origin.x, 0.0);
    }

    #[test]
    fn parent_gravities_fall_back_to_the_opposite_edge() {
        let m = StripMetrics::new(&config(3));
        let screen = Size::new(400.0, 2000.0);

        let cfg = ReactionsConfigBuilder::new((0..3).map(Reaction::new))
            .reaction_size(40.0)
            .horizontal_margin(16.0)
            .popup_gravity(PopupGravity::ParentLeft)
            .build()
            .expect("valid");
        let left = StripMetrics::new(&cfg);
        // Anchor so far right that left-alignment overflows.
        let anchor = Rect::new(350.0, 900.0, 390.0, 960.0);
        let origin = left.place(screen, anchor, Point::new(360.0, 930.0));
        assert_eq!(origin.x, screen.width - m.width() - 16.0);

        let cfg = ReactionsConfigBuilder::new((0..3).map(Reaction::new))
            .reaction_size(40.0)
            .horizontal_margin(16.0)
            .popup_gravity(PopupGravity::ParentRight)
            .build()
            .expect("valid");
        let right = StripMetrics::new(&cfg);
        // Anchor so far left that right-alignment underflows.
        let anchor = Rect::new(10.0, 900.0, 50.0, 960.0);
        let origin = right.place(screen, anchor, Point::new(20.0, 930.0));
        assert_eq!(origin.x, 16.0);
    }

    #[test]
    fn strip_moves_below_the_anchor_near_the_top_edge() {
        let m = StripMetrics::new(&config(3));
        let screen = Size::new(1000.0, 2000.0);
        let anchor = Rect::new(300.0, 10.0, 420.0, 70.0);
        let origin = m.place(screen, anchor, Point::new(350.0, 40.0));
        assert_eq!(origin.y, anchor.y1 + m.height());
    }
}
