use crate::key::IndexMap;

/// Host-owned memo of rendered output, keyed by item index.
///
/// This cache is independent from geometry: resetting geometry does not touch it, and it is
/// cleared only when its owner decides to (typically on [`crate::ScrollSettled`]).
#[derive(Clone, Debug)]
pub struct CellCache<T> {
    cells: IndexMap<T>,
}

impl<T> CellCache<T> {
    pub fn new() -> Self {
        Self {
            cells: IndexMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains_key(&index)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.cells.get(&index)
    }

    /// Returns the memoized output for `index`, rendering it with `render` on a miss.
    pub fn get_or_insert_with(&mut self, index: usize, render: impl FnOnce(usize) -> T) -> &T {
        self.cells.entry(index).or_insert_with(|| render(index))
    }

    pub fn remove(&mut self, index: usize) -> Option<T> {
        self.cells.remove(&index)
    }

    pub fn invalidate(&mut self) {
        self.cells.clear();
    }
}

impl<T> Default for CellCache<T> {
    fn default() -> Self {
        Self::new()
    }
}
