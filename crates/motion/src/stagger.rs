use crate::player::AnimationSpec;

/// Linear stagger: the `index`th element of a group starts `index * step_ms`
/// after the group's base delay.
///
/// All members of a cascade share one trigger timestamp, so the offsets are
/// relative to that single event rather than independently scheduled.
pub fn staggered(base: AnimationSpec, index: usize, step_ms: f64) -> AnimationSpec {
    base.with_delay_ms(base.delay_ms + index as f64 * step_ms)
}

/// The specs for a whole cascade of `count` siblings.
pub fn cascade(base: AnimationSpec, count: usize, step_ms: f64) -> Vec<AnimationSpec> {
    (0..count).map(|i| staggered(base, i, step_ms)).collect()
}

#[cfg(test)]
mod tests {
    use super::{cascade, staggered};
    use crate::player::{AnimationSpec, sample};
    use foundation::easing::Easing;
    use foundation::time::Time;

    #[test]
    fn stagger_adds_on_top_of_base_delay() {
        let base = AnimationSpec::fade_up(20.0, 500.0).with_delay_ms(500.0);
        assert_eq!(staggered(base, 0, 100.0).delay_ms, 500.0);
        assert_eq!(staggered(base, 3, 100.0).delay_ms, 800.0);
    }

    #[test]
    fn cascade_members_share_one_trigger() {
        let specs = cascade(
            AnimationSpec::fade_up(20.0, 100.0).with_easing(Easing::Linear),
            3,
            100.0,
        );
        let t0 = Time(0.0);

        // 125ms after the shared trigger: first finished, second mid-flight,
        // third still waiting.
        let now = Time(0.125);
        assert_eq!(sample(&specs[0], Some(t0), now), specs[0].to);
        let mid = sample(&specs[1], Some(t0), now);
        assert_eq!(mid.opacity, 0.25);
        assert_eq!(sample(&specs[2], Some(t0), now), specs[2].from);
    }
}
