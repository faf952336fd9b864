use foundation::geometry::Rect;

/// Viewport intersection test with a trigger margin.
///
/// The viewport is inflated outward by `margin_px` before the overlap test,
/// so a positive margin reports intersection while the element is still up
/// to `margin_px` away from the visible area, and a negative margin only
/// once it is that far inside (the site uses -100px for sections, -50px for
/// counters).
pub fn is_intersecting(viewport: Rect, bounds: Rect, margin_px: f64) -> bool {
    viewport.expand(margin_px).intersects(&bounds)
}

/// Standalone visibility signal for elements outside the page world.
///
/// In one-shot mode the signal latches: once it has reported `true` it
/// keeps reporting `true` for the observer's lifetime regardless of scroll
/// position. An element already in view at mount latches on the first
/// update; one that never enters the viewport simply stays `false`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewportObserver {
    pub margin_px: f64,
    pub one_shot: bool,
    latched: bool,
    current: bool,
}

impl ViewportObserver {
    pub fn new(margin_px: f64, one_shot: bool) -> Self {
        Self {
            margin_px,
            one_shot,
            latched: false,
            current: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        if self.one_shot { self.latched } else { self.current }
    }

    /// Feeds the observer a fresh viewport/bounds pair; returns the signal.
    pub fn update(&mut self, viewport: Rect, bounds: Rect) -> bool {
        self.current = is_intersecting(viewport, bounds, self.margin_px);
        if self.current {
            self.latched = true;
        }
        self.is_visible()
    }
}

#[cfg(test)]
mod tests {
    use super::{ViewportObserver, is_intersecting};
    use foundation::geometry::{Rect, Vec2};

    fn viewport() -> Rect {
        Rect::from_origin_size(Vec2::new(0.0, 0.0), 1280.0, 720.0)
    }

    #[test]
    fn negative_margin_delays_the_trigger() {
        // Element whose top edge has just entered the bottom of the view.
        let bounds = Rect::from_origin_size(Vec2::new(0.0, 700.0), 500.0, 400.0);
        assert!(is_intersecting(viewport(), bounds, 0.0));
        // With -100px it has not crossed far enough yet.
        assert!(!is_intersecting(viewport(), bounds, -100.0));

        // 80px further in, it has.
        let deeper = bounds.translate(Vec2::new(0.0, -80.0));
        assert!(is_intersecting(viewport(), deeper, -100.0));
    }

    #[test]
    fn one_shot_signal_latches() {
        let mut obs = ViewportObserver::new(0.0, true);
        let inside = Rect::from_origin_size(Vec2::new(100.0, 100.0), 50.0, 50.0);
        let outside = Rect::from_origin_size(Vec2::new(100.0, 5000.0), 50.0, 50.0);

        assert!(!obs.update(viewport(), outside));
        assert!(obs.update(viewport(), inside));
        // Scrolled back out: still true.
        assert!(obs.update(viewport(), outside));
    }

    #[test]
    fn continuous_mode_follows_the_viewport() {
        let mut obs = ViewportObserver::new(0.0, false);
        let inside = Rect::from_origin_size(Vec2::new(100.0, 100.0), 50.0, 50.0);
        let outside = Rect::from_origin_size(Vec2::new(100.0, 5000.0), 50.0, 50.0);

        assert!(obs.update(viewport(), inside));
        assert!(!obs.update(viewport(), outside));
    }

    #[test]
    fn element_in_view_at_mount_reports_true_immediately() {
        let mut obs = ViewportObserver::new(-100.0, true);
        let hero = Rect::from_origin_size(Vec2::new(0.0, 0.0), 1280.0, 900.0);
        assert!(obs.update(viewport(), hero));
    }
}
