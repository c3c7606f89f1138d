//! Inheritance queries over a host type graph.

use std::{collections::HashSet, hash::Hash};

/// A named type in the host's type graph.
///
/// Only [`base_type`](Self::base_type) is required. Every query keeps a
/// visited set, so a malformed graph with a cycle terminates.
pub trait NamedTypeSymbol: Clone + Eq + Hash {
    /// Direct base type, if any.
    fn base_type(&self) -> Option<Self>;

    /// Directly implemented interfaces.
    fn interfaces(&self) -> Vec<Self> {
        Vec::new()
    }

    /// Whether `base` is this type or appears on its base-type chain.
    fn inherits_from(&self, base: &Self) -> bool {
        self == base || self.base_types().any(|ty| &ty == base)
    }

    /// Base-type chain, nearest first, excluding `self`.
    fn base_types(&self) -> BaseTypes<Self> {
        BaseTypes::new(self.clone())
    }

    /// Whether `target` is reachable from this type through base types or
    /// interfaces, including this type itself.
    fn implements(&self, target: &Self) -> bool {
        let mut visited = HashSet::new();
        let mut stack = vec![self.clone()];

        while let Some(ty) = stack.pop() {
            if &ty == target {
                return true;
            }
            if !visited.insert(ty.clone()) {
                continue;
            }
            stack.extend(ty.interfaces().into_iter().rev());
            stack.extend(ty.base_type());
        }
        false
    }
}

/// Iterator over a base-type chain, returned by [`NamedTypeSymbol::base_types`].
#[derive(Debug, Clone)]
pub struct BaseTypes<T> {
    current: Option<T>,
    visited: HashSet<T>,
}

impl<T: NamedTypeSymbol> BaseTypes<T> {
    fn new(start: T) -> Self {
        let current = start.base_type();
        let visited = HashSet::from([start]);
        Self { current, visited }
    }
}

impl<T: NamedTypeSymbol> Iterator for BaseTypes<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let ty = self.current.take()?;
        if !self.visited.insert(ty.clone()) {
            return None;
        }
        self.current = ty.base_type();
        Some(ty)
    }
}
