//! Abstract syntax tree definitions for the Kronos scripting language.
//!
//! This crate defines the AST the Kronos parser builds and that downstream
//! passes (the bytecode compiler, the virtual machine, LSP-facing tooling)
//! read. It knows nothing about how to get there from source text — that's
//! `kronos-parser` — and nothing about what the nodes mean at runtime —
//! that's the bytecode compiler and VM's job. It is the contract between
//! them: tag values and payload field names here are load-bearing for every
//! downstream consumer.

mod ast;
mod grow;
mod node;

pub use ast::Ast;
pub use grow::{push_growing, INITIAL_CAPACITY};
pub use node::{BinaryOp, CatchClause, Node, NodeKind, SourcePos, UnaryOp};
