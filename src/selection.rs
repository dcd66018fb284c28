/// Per-record "included" flags for one enumeration snapshot.
///
/// Indices outside `0..len()` are ignored by every mutating operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    included: Vec<bool>,
}

impl SelectionState {
    /// Creates a selection of `n` records, all included.
    pub fn initialize(n: usize) -> Self {
        Self {
            included: vec![true; n],
        }
    }

    pub fn len(&self) -> usize {
        self.included.len()
    }

    pub fn is_empty(&self) -> bool {
        self.included.is_empty()
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.included.get(index).copied().unwrap_or(false)
    }

    /// Flips the flag at `index`. Returns `false` if `index` is out of range.
    pub fn toggle(&mut self, index: usize) -> bool {
        match self.included.get_mut(index) {
            Some(flag) => {
                *flag = !*flag;
                true
            }
            None => false,
        }
    }

    /// Sets the flag at `index`. Returns `false` if `index` is out of range.
    pub fn set(&mut self, index: usize, included: bool) -> bool {
        match self.included.get_mut(index) {
            Some(flag) => {
                *flag = included;
                true
            }
            None => false,
        }
    }

    /// Select-all / unselect-all.
    pub fn set_all(&mut self, included: bool) {
        self.included.fill(included);
    }

    /// Included indices in ascending order, which is enumeration order.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.included
            .iter()
            .enumerate()
            .filter_map(|(i, &on)| on.then_some(i))
            .collect()
    }

    pub fn selected_count(&self) -> usize {
        self.included.iter().filter(|&&on| on).count()
    }
}
