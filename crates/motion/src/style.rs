use foundation::geometry::Vec2;

/// The animatable style subset: opacity, 2D translation, uniform scale.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StyleSample {
    pub opacity: f64,
    pub translate: Vec2,
    pub scale: f64,
}

impl StyleSample {
    /// Fully visible, untransformed.
    pub fn resting() -> Self {
        Self {
            opacity: 1.0,
            translate: Vec2::zero(),
            scale: 1.0,
        }
    }

    pub fn hidden_offset(translate: Vec2) -> Self {
        Self {
            opacity: 0.0,
            translate,
            scale: 1.0,
        }
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            opacity: self.opacity + (other.opacity - self.opacity) * t,
            translate: self.translate.lerp(other.translate, t),
            scale: self.scale + (other.scale - self.scale) * t,
        }
    }
}

impl Default for StyleSample {
    fn default() -> Self {
        Self::resting()
    }
}

#[cfg(test)]
mod tests {
    use super::StyleSample;
    use foundation::geometry::Vec2;

    #[test]
    fn lerp_interpolates_all_channels() {
        let a = StyleSample::hidden_offset(Vec2::new(0.0, 30.0)).with_scale(0.9);
        let b = StyleSample::resting();
        let mid = a.lerp(b, 0.5);
        assert_eq!(mid.opacity, 0.5);
        assert_eq!(mid.translate, Vec2::new(0.0, 15.0));
        assert_eq!(mid.scale, 0.95);
    }
}
