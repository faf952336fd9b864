use crate::entity::ElementId;
use foundation::handles::Handle;

/// Deterministic element set.
///
/// Membership is tracked by `ElementId::index()`. A page has at most a few
/// hundred animated elements, so this is a sorted index vector rather than
/// anything clever.
///
/// Ordering contract:
/// - Iteration yields indices (and `ElementId`s) in ascending index order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    indices: Vec<u32>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn clear(&mut self) {
        self.indices.clear();
    }

    pub fn contains(&self, element: ElementId) -> bool {
        self.contains_index(element.index())
    }

    pub fn contains_index(&self, index: u32) -> bool {
        self.indices.binary_search(&index).is_ok()
    }

    /// Inserts `element` into the set.
    ///
    /// Returns `true` if the set changed.
    pub fn insert(&mut self, element: ElementId) -> bool {
        self.insert_index(element.index())
    }

    pub fn insert_index(&mut self, index: u32) -> bool {
        match self.indices.binary_search(&index) {
            Ok(_) => false,
            Err(pos) => {
                self.indices.insert(pos, index);
                true
            }
        }
    }

    /// Iterates selected element indices in ascending order.
    pub fn iter_indices(&self) -> impl Iterator<Item = u32> + '_ {
        self.indices.iter().copied()
    }

    /// Iterates selected elements in ascending index order.
    ///
    /// Note: this uses generation 0 handles, matching `PageWorld` behavior.
    pub fn iter_elements(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.iter_indices()
            .map(|idx| ElementId(Handle::new(idx, 0)))
    }
}

#[cfg(test)]
mod tests {
    use super::SelectionSet;
    use crate::entity::ElementId;
    use foundation::handles::Handle;

    fn e(idx: u32) -> ElementId {
        ElementId(Handle::new(idx, 0))
    }

    #[test]
    fn insert_contains_and_len() {
        let mut s = SelectionSet::new();
        assert!(s.is_empty());
        assert!(!s.contains(e(1)));

        assert!(s.insert(e(1)));
        assert!(s.contains(e(1)));
        assert_eq!(s.len(), 1);
        assert!(!s.insert(e(1)));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn iter_is_sorted() {
        let mut s = SelectionSet::new();
        s.insert(e(10));
        s.insert(e(2));
        s.insert(e(65));
        let got: Vec<u32> = s.iter_indices().collect();
        assert_eq!(got, vec![2, 10, 65]);
    }
}
