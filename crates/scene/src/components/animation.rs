use motion::player::AnimationSpec;

/// The entrance transition declared for an element.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RevealAnimation {
    pub spec: AnimationSpec,
}

impl RevealAnimation {
    pub fn new(spec: AnimationSpec) -> Self {
        Self { spec }
    }
}
