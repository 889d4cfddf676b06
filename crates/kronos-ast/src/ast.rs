//! The top-level AST handle returned to callers of `parse`.

use crate::node::Node;

/// An ordered sequence of top-level statements, plus the capacity metadata
/// the data model asks for. In Rust the backing `Vec` already owns its
/// growth strategy, so `capacity()` simply exposes what `Vec` tracks rather
/// than a second, independently-maintained counter — see `DESIGN.md` for why
/// that resolves the "capacity metadata" requirement without a parallel
/// bookkeeping field that could drift from the real allocation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Ast {
    /// Successfully parsed top-level statements, in source order. Statements
    /// that failed to parse are never appended here.
    pub statements: Vec<Node>,
}

impl Ast {
    /// An empty AST with the literal parsers' standard starting capacity.
    pub fn new() -> Self {
        Ast { statements: Vec::with_capacity(crate::grow::INITIAL_CAPACITY) }
    }

    /// Current backing allocation size, in elements.
    pub fn capacity(&self) -> usize {
        self.statements.capacity()
    }

    /// Release every node owned by this AST.
    ///
    /// `Node`'s fields are all owned (`Box`/`Vec`), so the compiler-generated
    /// `Drop` glue already performs the "single recursive destructor, safe on
    /// partially-initialized nodes, zero leaks" contract the design calls
    /// for. This method exists so the `parse` / `ast_free` entry-point pair
    /// described in the external interface has a literal counterpart callers
    /// can reach for.
    pub fn free(self) {
        drop(self);
    }

    /// One line per top-level statement, each just the statement's tag name.
    /// Matches the "debug printer" entry point in the external interface —
    /// intended for eyeballing parse results, not for machine consumption.
    pub fn debug_print(&self) -> String {
        self.statements.iter().map(|n| n.tag()).collect::<Vec<_>>().join("\n")
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use crate::node::NodeKind;

    #[test]
    fn debug_print_emits_one_tag_per_statement() {
        let mut ast = Ast::new();
        ast.statements.push(Node::new(NodeKind::Print { value: Box::new(Node::new(NodeKind::Number(1.0))) }));
        ast.statements.push(Node::new(NodeKind::Break));
        assert_eq!(ast.debug_print(), "Print\nBreak");
    }

    #[test]
    fn new_ast_starts_with_standard_capacity() {
        let ast = Ast::new();
        assert!(ast.capacity() >= crate::grow::INITIAL_CAPACITY);
        assert!(ast.statements.is_empty());
    }
}
