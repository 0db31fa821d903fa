//! # JSON Conversion
//!
//! The `graphql_language::json` module contains utilities to convert from and to `serde_json`
//! values. Any values that are converted to this crate's structures are represented as AST
//! values.
//!
//! The [ValueFromNode] trait allows conversion to `serde_json` values using a `to_json` method on
//! any given value. This method converts without using any type information.
//!
//! The module otherwise contains a handful of utility functions:
//!
//! - [ast_variables_from_value] is used to create a `Variables` map for a given JSON value.
//! - [ast_from_value] is used to convert any given JSON value to AST values while casting it.
//! - [ast_from_value_untyped] is used to convert any given JSON value to AST values without casting.
//! - [value_from_ast_variables] is used to convert AST `Variables` back to a JSON value.
//! - [value_from_ast] is used to convert a given AST value to a JSON value while filling in variables.
//!
//! Separately, [document_to_json] and [document_from_json] map a whole parsed
//! [Document](crate::ast::Document) to a JSON form and back, including source positions. This
//! form is what the parse cache persists on disk.

mod conversion;
mod document;
mod values;

pub use conversion::*;
pub use document::*;
pub use values::*;
