/// Damped spring driving an animated counter from zero to its target.
///
/// Matches the source site's counter feel (stiffness 100, damping 60, unit
/// mass). Stepping is semi-implicit Euler with a capped dt so a dropped
/// frame cannot destabilize the spring.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SpringCounter {
    value: f64,
    velocity: f64,
    target: f64,
    stiffness: f64,
    damping: f64,
    started: bool,
}

/// Largest dt (seconds) integrated in one step; longer frames are split.
/// Must keep `damping * dt` well under 1 or the integration oscillates.
const MAX_STEP_S: f64 = 1.0 / 120.0;

/// Displacement/velocity thresholds below which the counter snaps to rest.
const SETTLE_EPS: f64 = 1e-3;

impl SpringCounter {
    pub fn new(target: f64) -> Self {
        Self {
            value: 0.0,
            velocity: 0.0,
            target,
            stiffness: 100.0,
            damping: 60.0,
            started: false,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn started(&self) -> bool {
        self.started
    }

    /// Arms the spring; called once when the counter's element reveals.
    pub fn start(&mut self) {
        self.started = true;
    }

    pub fn is_settled(&self) -> bool {
        self.started
            && (self.target - self.value).abs() < SETTLE_EPS
            && self.velocity.abs() < SETTLE_EPS
    }

    /// Advances the spring by `dt_s`. No-op until started.
    pub fn step(&mut self, dt_s: f64) {
        if !self.started || self.is_settled() {
            return;
        }

        let mut remaining = dt_s.max(0.0);
        while remaining > 0.0 {
            let dt = remaining.min(MAX_STEP_S);
            remaining -= dt;

            let displacement = self.target - self.value;
            let accel = self.stiffness * displacement - self.damping * self.velocity;
            self.velocity += accel * dt;
            self.value += self.velocity * dt;
        }

        if (self.target - self.value).abs() < SETTLE_EPS && self.velocity.abs() < SETTLE_EPS {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }
}

/// Display formatting for a counter value: `{prefix}{value:.decimals}{suffix}`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CounterFormat {
    pub prefix: String,
    pub suffix: String,
    pub decimals: usize,
}

impl CounterFormat {
    pub fn suffix(suffix: impl Into<String>) -> Self {
        Self {
            prefix: String::new(),
            suffix: suffix.into(),
            decimals: 0,
        }
    }

    pub fn format(&self, value: f64) -> String {
        format!(
            "{}{:.*}{}",
            self.prefix, self.decimals, value, self.suffix
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{CounterFormat, SpringCounter};

    fn settle(counter: &mut SpringCounter) -> f64 {
        let mut elapsed = 0.0;
        while !counter.is_settled() {
            counter.step(1.0 / 60.0);
            elapsed += 1.0 / 60.0;
            assert!(elapsed < 30.0, "spring failed to settle");
        }
        elapsed
    }

    #[test]
    fn does_not_move_until_started() {
        let mut c = SpringCounter::new(100.0);
        c.step(1.0);
        assert_eq!(c.value(), 0.0);
        assert!(!c.is_settled());
    }

    #[test]
    fn settles_on_target() {
        let mut c = SpringCounter::new(34_000.0);
        c.start();
        settle(&mut c);
        assert_eq!(c.value(), 34_000.0);
    }

    #[test]
    fn value_grows_monotonically_for_overdamped_params() {
        // damping 60 vs stiffness 100 is heavily overdamped: no overshoot.
        let mut c = SpringCounter::new(15.0);
        c.start();
        let mut prev = 0.0;
        for _ in 0..600 {
            c.step(1.0 / 60.0);
            assert!(c.value() >= prev - 1e-9);
            assert!(c.value() <= 15.0 + 1e-6);
            prev = c.value();
        }
    }

    #[test]
    fn huge_frame_gap_stays_stable() {
        let mut c = SpringCounter::new(8.0);
        c.start();
        c.step(5.0);
        assert!(c.value() <= 8.0 + 1e-6);
        assert!(c.value() >= 0.0);
    }

    #[test]
    fn format_applies_prefix_suffix_decimals() {
        let f = CounterFormat {
            prefix: "$".into(),
            suffix: "%".into(),
            decimals: 1,
        };
        assert_eq!(f.format(15.04), "$15.0%");
        assert_eq!(CounterFormat::suffix("+").format(34_000.0), "34000+");
    }
}
