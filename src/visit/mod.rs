//! # Visiting GraphQL ASTs
//!
//! The `graphql_language::visit` module contains a depth-first traversal for GraphQL ASTs with
//! dynamically registered callbacks.
//!
//! A [Visitor] is populated with callbacks that are keyed by the [ASTKind](crate::ast::ASTKind)
//! of nodes they should react to, or registered for all nodes at once. Each callback receives
//! the visited node as a [NodeRef] along with the node's parent, and returns a [VisitFlow]
//! signal that can skip over the node's children.
//!
//! Typically, a visitor is used in GraphQL to gain information about the AST and inspect it for
//! certain features. In this example we'll count all fields in a document:
//!
//! ```
//! use graphql_language::{ast::*, visit::*};
//!
//! let ctx = ASTContext::new();
//! let document = Document::parse(&ctx, "{ a b { c } }").unwrap();
//!
//! let fields = std::cell::Cell::new(0);
//! let mut visitor = Visitor::new();
//! visitor.on_enter(ASTKind::Field, |_node, _parent| {
//!     fields.set(fields.get() + 1);
//!     VisitFlow::Next
//! });
//! visitor.visit(&ctx, document);
//!
//! assert_eq!(fields.get(), 3);
//! ```
//!
//! When [`Visitor::follow_fragments`] is enabled, the traversal descends from fragment spreads
//! into the selection sets of the fragment definitions they name, which is useful to observe the
//! effective selections of an operation.

mod visitor;

pub use visitor::*;
