//! Symbol resolution over a host semantic model.

/// Host-provided semantic model mapping syntax nodes to symbols.
pub trait SemanticModel {
    type Node: ?Sized;
    type Symbol;

    /// The symbol bound to `node`, if any.
    fn symbol_info(&self, node: &Self::Node) -> Option<Self::Symbol>;
}

/// Thin wrapper over a [`SemanticModel`], so generators can be tested
/// against a fake model.
#[derive(Debug)]
pub struct SymbolResolver<'m, M> {
    model: &'m M,
}

impl<M> Clone for SymbolResolver<'_, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Copy for SymbolResolver<'_, M> {}

impl<'m, M: SemanticModel> SymbolResolver<'m, M> {
    /// Wrap a borrowed semantic model.
    pub fn new(model: &'m M) -> Self {
        Self { model }
    }

    /// Resolve the symbol bound to `node`.
    pub fn resolve(&self, node: &M::Node) -> Option<M::Symbol> {
        self.model.symbol_info(node)
    }

    /// Resolve the symbol bound to `node` and narrow it to `T`.
    ///
    /// Returns `None` when nothing is bound or the symbol is of another kind.
    pub fn resolve_as<T>(&self, node: &M::Node) -> Option<T>
    where
        T: TryFrom<M::Symbol>,
    {
        self.resolve(node).and_then(|symbol| T::try_from(symbol).ok())
    }
}
