use foundation::easing::Easing;
use foundation::geometry::Vec2;
use foundation::time::Time;

use crate::style::StyleSample;

/// One entrance transition, declared per element at composition time.
///
/// Immutable. `from` is rendered for as long as the element is hidden,
/// then the player eases toward `to` over `duration_ms`, starting
/// `delay_ms` after the reveal trigger.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AnimationSpec {
    pub from: StyleSample,
    pub to: StyleSample,
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub easing: Easing,
}

impl AnimationSpec {
    pub fn new(from: StyleSample, to: StyleSample, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            duration_ms,
            delay_ms: 0.0,
            easing: Easing::EaseOut,
        }
    }

    /// Fade in while sliding up from `rise_px` below the resting position.
    /// The workhorse entrance of every section.
    pub fn fade_up(rise_px: f64, duration_ms: f64) -> Self {
        Self::new(
            StyleSample::hidden_offset(Vec2::new(0.0, rise_px)),
            StyleSample::resting(),
            duration_ms,
        )
    }

    /// Fade in while sliding horizontally from `offset_px` (negative = from
    /// the left).
    pub fn fade_slide_x(offset_px: f64, duration_ms: f64) -> Self {
        Self::new(
            StyleSample::hidden_offset(Vec2::new(offset_px, 0.0)),
            StyleSample::resting(),
            duration_ms,
        )
    }

    /// Plain opacity fade.
    pub fn fade(duration_ms: f64) -> Self {
        Self::new(
            StyleSample::hidden_offset(Vec2::zero()),
            StyleSample::resting(),
            duration_ms,
        )
    }

    pub fn with_delay_ms(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_from_scale(mut self, scale: f64) -> Self {
        self.from.scale = scale;
        self
    }

    /// Total time from trigger to completion.
    pub fn end_ms(&self) -> f64 {
        self.delay_ms + self.duration_ms
    }
}

/// Samples the style for an element at `now`.
///
/// `revealed_at` is the shared trigger timestamp stamped when the element's
/// reveal fired (`None` while still hidden). Before the trigger and through
/// the delay the sample equals `from`; past `delay + duration` it clamps to
/// `to`, so a finished animation is stable frame over frame.
pub fn sample(spec: &AnimationSpec, revealed_at: Option<Time>, now: Time) -> StyleSample {
    let Some(triggered) = revealed_at else {
        return spec.from;
    };

    let elapsed_ms = (now.0 - triggered.0).max(0.0) * 1000.0;
    let active_ms = elapsed_ms - spec.delay_ms;
    if active_ms <= 0.0 {
        return spec.from;
    }
    if spec.duration_ms <= 0.0 || active_ms >= spec.duration_ms {
        return spec.to;
    }

    let t = spec.easing.sample(active_ms / spec.duration_ms);
    spec.from.lerp(spec.to, t)
}

/// True once the sample has clamped at `to`.
pub fn is_finished(spec: &AnimationSpec, revealed_at: Option<Time>, now: Time) -> bool {
    match revealed_at {
        Some(triggered) => (now.0 - triggered.0) * 1000.0 >= spec.end_ms(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::{AnimationSpec, is_finished, sample};
    use foundation::easing::Easing;
    use foundation::time::Time;

    fn spec() -> AnimationSpec {
        AnimationSpec::fade_up(30.0, 500.0)
            .with_delay_ms(250.0)
            .with_easing(Easing::Linear)
    }

    #[test]
    fn hidden_elements_hold_the_from_style() {
        let s = spec();
        let out = sample(&s, None, Time(1000.0));
        assert_eq!(out, s.from);
    }

    #[test]
    fn delay_holds_from_then_eases_to_target() {
        let s = spec();
        let t0 = Time(10.0);

        // Inside the delay window.
        assert_eq!(sample(&s, Some(t0), Time(10.125)), s.from);

        // Halfway through the active window: 250ms delay + 250ms.
        let mid = sample(&s, Some(t0), Time(10.5));
        assert_eq!(mid.opacity, 0.5);
        assert_eq!(mid.translate.y, 15.0);

        // Past the end: clamped at `to`, and stays there.
        assert_eq!(sample(&s, Some(t0), Time(10.75)), s.to);
        assert_eq!(sample(&s, Some(t0), Time(99.0)), s.to);
    }

    #[test]
    fn finished_only_after_delay_plus_duration() {
        let s = spec();
        let t0 = Time(0.0);
        assert!(!is_finished(&s, None, Time(100.0)));
        assert!(!is_finished(&s, Some(t0), Time(0.5)));
        assert!(is_finished(&s, Some(t0), Time(0.75)));
    }

    #[test]
    fn zero_duration_snaps_to_target() {
        let s = AnimationSpec::fade(0.0);
        let out = sample(&s, Some(Time(0.0)), Time(0.001));
        assert_eq!(out, s.to);
    }
}
