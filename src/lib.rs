//! `graphql_language`
//! =========
//!
//! _Fast and easy GraphQL language handling._
//!
//! The **`graphql_language`** library follows two goals:
//!
//! - To support a pleasant-to-use API for the GraphQL language, both queries and type
//!   system definitions
//! - To be stupendously fast at processing GraphQL language ASTs
//!
//! The crate parses executable documents and SDL into a single arena-allocated AST with source
//! positions, prints them back out canonically, and layers utilities on top of that AST rather
//! than aiming for full, server-side GraphQL execution. Validation rules, introspection, and
//! transports are out of scope; what remains is the language itself and the operations
//! intermediary GraphQL tooling needs:
//!
//! - the [ast](ast) module's lexer, parser, and canonical printer,
//! - the [visit](visit) module's callback-driven traversal,
//! - the [schema](schema) module's lightweight client-side schema index,
//! - the [sanitize](sanitize) module's schema-aware redacting printer,
//! - the [json](json) module's JSON form of values and whole documents
//!   (feature `json`), and
//! - the [cache](cache) module's file-backed parse cache (feature `cache`).
//!
//! [A good place to start learning more about this crate is the `ast` module...](ast)

pub mod ast;
pub mod error;
pub mod sanitize;
pub mod schema;
pub mod visit;

pub use bumpalo;

#[cfg(feature = "json")]
pub mod json;

#[cfg(feature = "cache")]
pub mod cache;
