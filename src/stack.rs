use std::fmt::{self, Debug};

use tracing::{debug, trace};

use crate::{
    debug::write_levels,
    error::{fail, StackError},
};

/// A last-in-first-out stack over a growable array.
///
/// Elements are only reachable from the top. Removing an element moves it out
/// of the backing store (or drops it), so the stack never keeps a removed
/// value alive.
///
/// `pop` and `pop_n` trust the caller: check [`len`](Self::len) first, or use
/// the `try_` variants.
#[derive(Clone)]
pub struct GenericStack<T> {
    values: Vec<T>,
}

impl<T> GenericStack<T> {
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// An empty stack that can hold `capacity` elements before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.values.capacity()
    }

    pub fn push(&mut self, value: T) {
        self.values.push(value);
    }

    /// Push each value in order; the last one ends up on top.
    pub fn push_all<I: IntoIterator<Item = T>>(&mut self, values: I) {
        self.values.extend(values);
    }

    /// Panics on underflow.
    pub fn pop(&mut self) -> T {
        match self.values.pop() {
            Some(value) => value,
            None => fail(StackError::Underflow {
                requested: 1,
                len: 0,
            }),
        }
    }

    pub fn try_pop(&mut self) -> Result<T, StackError> {
        self.values.pop().ok_or_else(|| {
            let err = StackError::Underflow {
                requested: 1,
                len: 0,
            };
            debug!(%err, "checked pop on empty stack");
            err
        })
    }

    /// Pop the `n` top-most elements into `dst[..n]`, former top first.
    ///
    /// Panics if the stack holds fewer than `n` elements, or `dst` is shorter
    /// than `n`. The stack is left untouched when it panics.
    pub fn pop_n(&mut self, dst: &mut [T], n: usize) {
        if let Err(err) = self.check_pop_n(dst.len(), n) {
            fail(err);
        }
        self.drain_top_into(dst, n);
    }

    pub fn try_pop_n(&mut self, dst: &mut [T], n: usize) -> Result<(), StackError> {
        self.check_pop_n(dst.len(), n).map_err(|err| {
            debug!(%err, "checked pop_n rejected");
            err
        })?;
        self.drain_top_into(dst, n);
        Ok(())
    }

    /// Move every element onto the top of `dst`, bottom first, so this
    /// stack's top becomes `dst`'s top. Leaves this stack empty.
    pub fn move_all(&mut self, dst: &mut GenericStack<T>) {
        let moved = self.values.len();
        dst.values.append(&mut self.values);
        trace!(moved, dst_len = dst.values.len(), "moved all elements");
    }

    fn check_pop_n(&self, dst_len: usize, n: usize) -> Result<(), StackError> {
        if self.values.len() < n {
            return Err(StackError::Underflow {
                requested: n,
                len: self.values.len(),
            });
        }
        if dst_len < n {
            return Err(StackError::DestinationTooShort {
                required: n,
                len: dst_len,
            });
        }
        Ok(())
    }

    /// Helper for `pop_n` and `try_pop_n`. Bounds are already checked.
    fn drain_top_into(&mut self, dst: &mut [T], n: usize) {
        let start = self.values.len() - n;
        let top_down = self.values.drain(start..).rev();
        for (slot, value) in dst[..n].iter_mut().zip(top_down) {
            *slot = value;
        }
        trace!(n, len = self.values.len(), "popped top elements");
    }
}

impl<T> Default for GenericStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for GenericStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.push_all(iter);
    }
}

/// The last item becomes the top.
impl<T> FromIterator<T> for GenericStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<T: Debug> Debug for GenericStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            // One element per line, top first.
            return write_levels(f, &self.values);
        }

        // Bottom to top.
        f.debug_list().entries(&self.values).finish()
    }
}
