use foundation::time::Time;

/// One-shot reveal state machine.
///
/// `Hidden` is initial, `Revealed` is terminal. The transition fires exactly
/// once, when the viewport observer first reports intersection; there is no
/// reverse transition even if the element scrolls back out of view.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

/// Per-element reveal tracking.
///
/// `margin_px` inflates the viewport for the trigger test, so elements
/// start animating shortly before they are fully visible. `revealed_at` is
/// the shared trigger timestamp a cascade's stagger delays are measured
/// from.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RevealTarget {
    pub margin_px: f64,
    state: RevealState,
    revealed_at: Option<Time>,
}

impl RevealTarget {
    pub fn new(margin_px: f64) -> Self {
        Self {
            margin_px,
            state: RevealState::Hidden,
            revealed_at: None,
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn has_triggered(&self) -> bool {
        self.state == RevealState::Revealed
    }

    pub fn revealed_at(&self) -> Option<Time> {
        self.revealed_at
    }

    /// Fires the `Hidden -> Revealed` transition.
    ///
    /// Returns `true` only on the first call; later calls are no-ops and the
    /// original trigger timestamp is kept.
    pub fn trigger(&mut self, at: Time) -> bool {
        if self.state == RevealState::Revealed {
            return false;
        }
        self.state = RevealState::Revealed;
        self.revealed_at = Some(at);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::{RevealState, RevealTarget};
    use foundation::time::Time;

    #[test]
    fn transition_fires_exactly_once() {
        let mut r = RevealTarget::new(100.0);
        assert_eq!(r.state(), RevealState::Hidden);
        assert!(!r.has_triggered());

        assert!(r.trigger(Time(1.0)));
        assert!(r.has_triggered());
        assert_eq!(r.revealed_at(), Some(Time(1.0)));

        // Re-triggering neither fires nor moves the timestamp.
        assert!(!r.trigger(Time(5.0)));
        assert_eq!(r.revealed_at(), Some(Time(1.0)));
    }
}
