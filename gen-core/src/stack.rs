//! Pop and peek helpers for stacks that may hold empty slots.

/// `try_pop`/`try_peek` for a stack whose slots are optional.
///
/// Both operations report `None` for an empty stack and for an empty top slot,
/// so callers only have to handle one case.
///
/// # Example
///
/// ```
/// use gentools_core::NullableStack;
///
/// let mut stack = vec![None, Some(10)];
/// assert_eq!(stack.try_peek_some(), Some(&10));
/// assert_eq!(stack.try_pop_some(), Some(10));
/// assert_eq!(stack.try_pop_some(), None);
/// assert!(stack.is_empty());
/// ```
pub trait NullableStack<T> {
    /// Remove the top slot and return its value.
    ///
    /// An empty top slot is still removed.
    fn try_pop_some(&mut self) -> Option<T>;

    /// Borrow the value in the top slot without removing it.
    fn try_peek_some(&self) -> Option<&T>;
}

impl<T> NullableStack<T> for Vec<Option<T>> {
    fn try_pop_some(&mut self) -> Option<T> {
        self.pop().flatten()
    }

    fn try_peek_some(&self) -> Option<&T> {
        self.last().and_then(Option::as_ref)
    }
}
