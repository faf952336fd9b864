//! Entrance-animation presets, one per recurring section pattern.
//!
//! Durations, offsets and stagger steps mirror the site's design: section
//! headers rise 30px over 600ms, sibling groups cascade at 100-200ms steps,
//! the hero runs its own richer choreography.

use foundation::easing::Easing;
use foundation::geometry::Vec2;
use motion::player::AnimationSpec;
use motion::stagger::staggered;
use motion::style::StyleSample;

/// Sections trigger 100px after entering the viewport.
pub const SECTION_MARGIN_PX: f64 = -100.0;
/// Counters wait until they are 50px inside.
pub const COUNTER_MARGIN_PX: f64 = -50.0;

/// The `[0.22, 1, 0.36, 1]` curve used by the hero choreography.
fn hero_ease() -> Easing {
    Easing::CubicBezier(0.22, 1.0, 0.36, 1.0)
}

/// Navigation bar: drops in from above at full opacity.
pub fn nav_bar() -> AnimationSpec {
    AnimationSpec::new(
        StyleSample {
            opacity: 1.0,
            translate: Vec2::new(0.0, -100.0),
            scale: 1.0,
        },
        StyleSample::resting(),
        600.0,
    )
}

/// Section header: rise and fade over 600ms.
pub fn header() -> AnimationSpec {
    AnimationSpec::fade_up(30.0, 600.0)
}

/// Body block within a section, staggered at 200ms.
pub fn block(index: usize) -> AnimationSpec {
    staggered(
        AnimationSpec::fade_up(20.0, 600.0).with_delay_ms(200.0),
        index,
        200.0,
    )
}

/// Card in a grid (edge pillars, team), staggered at 200ms.
pub fn card(index: usize) -> AnimationSpec {
    staggered(AnimationSpec::fade_up(30.0, 600.0), index, 200.0)
}

/// Metric tile, staggered at 100ms.
pub fn metric(index: usize) -> AnimationSpec {
    staggered(AnimationSpec::fade_up(30.0, 600.0), index, 100.0)
}

/// Process stage row: slides in from the left after the tiles.
pub fn stage(index: usize) -> AnimationSpec {
    staggered(
        AnimationSpec::fade_slide_x(-20.0, 500.0).with_delay_ms(500.0),
        index,
        100.0,
    )
}

/// Map panel slides in from the left.
pub fn map_panel() -> AnimationSpec {
    AnimationSpec::fade_slide_x(-30.0, 600.0).with_delay_ms(200.0)
}

/// Region details column slides in from the right.
pub fn details_panel() -> AnimationSpec {
    AnimationSpec::fade_slide_x(30.0, 600.0).with_delay_ms(400.0)
}

/// One region entry in the details column.
pub fn region_item(index: usize) -> AnimationSpec {
    staggered(
        AnimationSpec::fade_up(20.0, 500.0).with_delay_ms(500.0),
        index,
        100.0,
    )
}

/// Small italic footnote at the bottom of a section.
pub fn footnote(delay_ms: f64) -> AnimationSpec {
    AnimationSpec::fade(600.0).with_delay_ms(delay_ms)
}

/// Hero headline.
pub fn hero_headline() -> AnimationSpec {
    AnimationSpec::fade_up(20.0, 900.0)
        .with_delay_ms(200.0)
        .with_easing(hero_ease())
}

/// Hero kicker line.
pub fn hero_kicker() -> AnimationSpec {
    AnimationSpec::fade(800.0).with_delay_ms(450.0)
}

/// Hero pillar boxes: scale in slightly, 100ms apart from 800ms.
pub fn hero_pillar(index: usize) -> AnimationSpec {
    staggered(
        AnimationSpec::fade_up(10.0, 600.0)
            .with_delay_ms(800.0)
            .with_from_scale(0.95)
            .with_easing(hero_ease()),
        index,
        100.0,
    )
}

/// Hero call-to-action button.
pub fn hero_cta() -> AnimationSpec {
    AnimationSpec::fade_up(20.0, 800.0).with_delay_ms(1200.0)
}

/// Hero content container.
pub fn hero_container() -> AnimationSpec {
    AnimationSpec::fade_up(30.0, 800.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use foundation::time::Time;
    use motion::player::sample;

    #[test]
    fn hero_pillars_cascade_from_a_shared_trigger() {
        let specs: Vec<_> = (0..3).map(hero_pillar).collect();
        assert_eq!(specs[0].delay_ms, 800.0);
        assert_eq!(specs[1].delay_ms, 900.0);
        assert_eq!(specs[2].delay_ms, 1000.0);

        // 850ms after the shared trigger only the first has started moving.
        let t0 = Time(0.0);
        let now = Time(0.85);
        assert!(sample(&specs[0], Some(t0), now).opacity > 0.0);
        assert_eq!(sample(&specs[1], Some(t0), now).opacity, 0.0);
        assert_eq!(sample(&specs[2], Some(t0), now).opacity, 0.0);
    }

    #[test]
    fn presence_panels_arrive_left_then_right() {
        let map = map_panel();
        let details = details_panel();
        assert!(map.from.translate.x < 0.0);
        assert!(details.from.translate.x > 0.0);
        assert!(map.delay_ms < details.delay_ms);
    }

    #[test]
    fn all_presets_land_at_rest() {
        let specs = [
            nav_bar(),
            header(),
            block(2),
            card(1),
            metric(3),
            stage(4),
            map_panel(),
            details_panel(),
            region_item(0),
            footnote(800.0),
            hero_headline(),
            hero_kicker(),
            hero_pillar(0),
            hero_cta(),
            hero_container(),
        ];
        for spec in specs {
            let done = sample(&spec, Some(Time(0.0)), Time(60.0));
            assert_eq!(done.opacity, 1.0);
            assert_eq!(done.translate.x, 0.0);
            assert_eq!(done.translate.y, 0.0);
            assert_eq!(done.scale, 1.0);
        }
    }
}
