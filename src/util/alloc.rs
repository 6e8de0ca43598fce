#![cfg(test)]

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct ZeroSizedType;

/// Counts how many of its clones have been dropped, so tests can check that each entry of an Array
/// is dropped exactly once.
#[derive(Debug, Clone)]
pub struct DropCounter(Rc<Cell<usize>>);

impl DropCounter {
    pub fn new() -> DropCounter {
        DropCounter(Rc::new(Cell::new(0)))
    }

    /// Returns the number of drops since the last call and resets the count.
    pub fn take(&self) -> usize {
        self.0.replace(0)
    }
}

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
