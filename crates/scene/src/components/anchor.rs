/// In-page anchor identifier used by the navigation contract.
///
/// Navigation items address sections by this id; clicking scrolls the
/// matching section into view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorId(pub String);

impl AnchorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
