//! Formatting of sampled styles into inline CSS values.

use motion::style::StyleSample;

/// CSS `opacity` value.
pub fn opacity_value(sample: &StyleSample) -> String {
    format!("{:.4}", sample.opacity)
}

/// CSS `transform` value. Identity transforms collapse to `none` so
/// finished elements leave no stacking-context residue.
pub fn transform_value(sample: &StyleSample) -> String {
    let translated = sample.translate.x != 0.0 || sample.translate.y != 0.0;
    let scaled = sample.scale != 1.0;
    if !translated && !scaled {
        return "none".into();
    }

    let mut out = format!(
        "translate({:.2}px, {:.2}px)",
        sample.translate.x, sample.translate.y
    );
    if scaled {
        out.push_str(&format!(" scale({:.4})", sample.scale));
    }
    out
}

/// Ticker strip offset.
pub fn ticker_transform(offset_px: f64) -> String {
    format!("translateX({offset_px:.1}px)")
}

/// Parallax offset for the hero grid, eased by the 300ms CSS transition
/// already declared on the element.
pub fn parallax_transform(x_px: f64, y_px: f64) -> String {
    format!("translate({x_px:.2}px, {y_px:.2}px)")
}

/// Signed percentage for a ticker change cell, e.g. `+2.3%` / `-0.5%`.
pub fn signed_pct(change_pct: f64) -> String {
    if change_pct >= 0.0 {
        format!("+{change_pct:.1}%")
    } else {
        format!("{change_pct:.1}%")
    }
}

#[cfg(test)]
mod tests {
    use super::{opacity_value, signed_pct, ticker_transform, transform_value};
    use foundation::geometry::Vec2;
    use motion::style::StyleSample;

    #[test]
    fn identity_transform_is_none() {
        assert_eq!(transform_value(&StyleSample::resting()), "none");
    }

    #[test]
    fn transform_renders_translate_then_scale() {
        let s = StyleSample::hidden_offset(Vec2::new(0.0, 30.0)).with_scale(0.95);
        assert_eq!(transform_value(&s), "translate(0.00px, 30.00px) scale(0.9500)");

        let unscaled = StyleSample::hidden_offset(Vec2::new(-30.0, 0.0));
        assert_eq!(transform_value(&unscaled), "translate(-30.00px, 0.00px)");
    }

    #[test]
    fn opacity_is_fixed_precision() {
        let mut s = StyleSample::resting();
        s.opacity = 0.123456;
        assert_eq!(opacity_value(&s), "0.1235");
    }

    #[test]
    fn ticker_offset_formats_as_translate_x() {
        assert_eq!(ticker_transform(-246.0), "translateX(-246.0px)");
    }

    #[test]
    fn change_cells_carry_an_explicit_sign() {
        assert_eq!(signed_pct(2.3), "+2.3%");
        assert_eq!(signed_pct(-0.5), "-0.5%");
        assert_eq!(signed_pct(0.0), "+0.0%");
    }
}
