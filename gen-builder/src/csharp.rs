//! C# conveniences for [`TextBuilder`].

use indexmap::IndexSet;

use crate::TextBuilder;

impl TextBuilder {
    /// Append `using {namespace};` as a line.
    pub fn append_using(&mut self, namespace: &str) -> &mut Self {
        self.append_line(&format!("using {namespace};"))
    }

    /// Append a `using` line per namespace, in order and without deduplication.
    pub fn append_usings<I>(&mut self, namespaces: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.for_each(namespaces, |b, namespace| {
            b.append_using(namespace.as_ref());
        })
    }

    /// Append `using` lines collected from several sources.
    ///
    /// Each namespace is emitted once, at the position it was first seen.
    ///
    /// # Example
    ///
    /// ```
    /// use gentools_builder::TextBuilder;
    ///
    /// let mut builder = TextBuilder::new();
    /// builder.append_multiple_usings([["A", "B"], ["B", "C"]]);
    ///
    /// assert_eq!(builder.to_text(), "using A;\nusing B;\nusing C;\n");
    /// ```
    pub fn append_multiple_usings<I, S>(&mut self, sources: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: IntoIterator,
        S::Item: AsRef<str>,
    {
        let namespaces: IndexSet<String> = sources
            .into_iter()
            .flatten()
            .map(|namespace| namespace.as_ref().to_string())
            .collect();
        self.append_usings(&namespaces)
    }

    /// Append an inline ` // {comment}` without a line terminator.
    pub fn append_comment(&mut self, comment: &str) -> &mut Self {
        self.append(&format!(" // {comment}"))
    }

    /// Append `// {comment}` as a line.
    pub fn append_line_comment(&mut self, comment: &str) -> &mut Self {
        self.append_line(&format!("// {comment}"))
    }

    /// Append the `// <auto-generated />` marker line.
    pub fn append_auto_generated(&mut self) -> &mut Self {
        self.append_line_comment("<auto-generated />")
    }

    /// Append a file-scoped `namespace {name};` line.
    pub fn append_namespace(&mut self, name: &str) -> &mut Self {
        self.append_line(&format!("namespace {name};"))
    }

    /// Append the `#nullable enable` directive line.
    pub fn append_nullable_enable(&mut self) -> &mut Self {
        self.append_line("#nullable enable")
    }
}
