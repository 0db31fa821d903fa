//! # Sanitized Printing
//!
//! The `graphql_language::sanitize` module prints operations with their string literals redacted,
//! so that documents can be logged or persisted without leaking user-provided values. The output
//! follows the canonical printer's layout with two differences:
//!
//! - String literals are replaced by the fixed `"<REDACTED>"` marker, unless the declared input
//!   type at their position is an enum or the `ID` scalar. Enum and `ID` values are part of a
//!   query's shape rather than its payload and print verbatim.
//! - Variables are inlined: every variable identifier is substituted with its bound runtime
//!   value, converted to a value literal under the variable's declared type, and the operation's
//!   variable definitions are dropped from the output. The inlined literals are then subject to
//!   the same redaction rule.
//!
//! Since redaction depends on the declared type at every value position, printing needs a
//! [ClientSchema] and threads the expected type through the traversal as it descends through
//! field return types, fragment type conditions, argument types, and list element types.
//!
//! ```
//! use graphql_language::{ast::*, sanitize::*, schema::*};
//!
//! let ctx = ASTContext::new();
//! let sdl = Document::parse(&ctx, "type Query { user(id: ID, name: String): Query }").unwrap();
//! let schema = ClientSchema::from_document(&ctx, sdl);
//!
//! let query = Document::parse(&ctx, r#"{ user(id: "4", name: "Ada") { __typename } }"#).unwrap();
//! let output = SanitizedPrinter::new(&schema).print_document(query).unwrap();
//! assert_eq!(output, "{\n  user(id: \"4\", name: \"<REDACTED>\") {\n    __typename\n  }\n}");
//! ```

use std::fmt::Write;

use crate::ast::{
    Argument, Directive, Document, Field, FragmentDefinition, OperationDefinition, OperationKind,
    PrintNode, Selection, SelectionSet, Type, Value, Variables,
};
use crate::error::{Error, Result};
use crate::schema::{ClientSchema, TypeKind};

/// The marker that replaces redacted string literals in the output.
pub const REDACTED: &str = "\"<REDACTED>\"";

/// A schema-aware printer that redacts string literals and inlines variable values.
///
/// The printer is single-use: configure it with [`SanitizedPrinter::variables`] and consume it
/// with [`SanitizedPrinter::print_document`]. A variable without a bound value is inlined as
/// `null`. Fields and arguments the schema doesn't know fail with a
/// [GraphQL](crate::error::ErrorKind::GraphQL) error, since without a declared type there is no
/// way to decide whether a value may print verbatim.
pub struct SanitizedPrinter<'a, 'b> {
    schema: &'b ClientSchema<'a>,
    variables: Option<&'b Variables<'a>>,
    out: String,
}

impl<'a, 'b> SanitizedPrinter<'a, 'b> {
    pub fn new(schema: &'b ClientSchema<'a>) -> Self {
        SanitizedPrinter {
            schema,
            variables: None,
            out: String::new(),
        }
    }

    /// Sets the runtime values that variable identifiers are substituted with.
    pub fn variables(mut self, variables: &'b Variables<'a>) -> Self {
        self.variables = Some(variables);
        self
    }

    /// Prints the document with redacted string literals and inlined variables.
    pub fn print_document(mut self, document: &Document<'a>) -> Result<String> {
        self.out.reserve(document.size_hint);
        let mut first = true;
        for definition in document.definitions.iter() {
            if first {
                first = false;
            } else {
                self.out.push_str("\n\n");
            }
            match definition {
                crate::ast::Definition::Operation(operation) => self.write_operation(operation)?,
                crate::ast::Definition::Fragment(fragment) => self.write_fragment(fragment)?,
                // Type-system definitions carry no runtime values and print canonically.
                other => other.write_to_buffer(0, &mut self.out)?,
            }
        }
        Ok(self.out)
    }

    fn write_operation(&mut self, operation: &OperationDefinition<'a>) -> Result<()> {
        // Variable definitions are dropped since their values are inlined below.
        let shorthand = operation.operation == OperationKind::Query
            && operation.name.is_none()
            && operation.directives.is_empty();
        let keyword = match operation.operation {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
            OperationKind::Subscription => "subscription",
        };
        if !shorthand {
            self.out.push_str(keyword);
            if let Some(name) = &operation.name {
                self.out.push(' ');
                self.out.push_str(name.name);
            }
            self.write_directives(&operation.directives.children)?;
            self.out.push(' ');
        }
        let root = self.schema.root_type(operation.operation).ok_or_else(|| {
            Error::new(format!("Schema has no root type for {keyword} operations"), None)
        })?;
        self.write_selection_set(&operation.selection_set, root, 0)
    }

    fn write_fragment(&mut self, fragment: &FragmentDefinition<'a>) -> Result<()> {
        self.out.push_str("fragment ");
        self.out.push_str(fragment.name.name);
        self.out.push_str(" on ");
        self.out.push_str(fragment.type_condition.name);
        self.write_directives(&fragment.directives.children)?;
        self.out.push(' ');
        self.write_selection_set(&fragment.selection_set, fragment.type_condition.name, 0)
    }

    fn write_selection_set(
        &mut self,
        selection_set: &SelectionSet<'a>,
        parent_type: &str,
        level: usize,
    ) -> Result<()> {
        if selection_set.is_empty() {
            return Ok(());
        }
        let level = level + 1;
        self.out.push('{');
        for selection in selection_set.selections.iter() {
            self.out.push('\n');
            self.write_indent(level);
            match selection {
                Selection::Field(field) => self.write_field(field, parent_type, level)?,
                Selection::FragmentSpread(spread) => {
                    self.out.push_str("...");
                    self.out.push_str(spread.name.name);
                    self.write_directives(&spread.directives.children)?;
                }
                Selection::InlineFragment(inline) => {
                    self.out.push_str("...");
                    let parent_type = match &inline.type_condition {
                        Some(condition) => {
                            self.out.push_str(" on ");
                            self.out.push_str(condition.name);
                            condition.name
                        }
                        None => parent_type,
                    };
                    self.write_directives(&inline.directives.children)?;
                    self.out.push(' ');
                    self.write_selection_set(&inline.selection_set, parent_type, level)?;
                }
            }
        }
        self.out.push('\n');
        self.write_indent(level - 1);
        self.out.push('}');
        Ok(())
    }

    fn write_field(&mut self, field: &Field<'a>, parent_type: &str, level: usize) -> Result<()> {
        if let Some(alias) = field.alias {
            self.out.push_str(alias);
            self.out.push_str(": ");
        }
        self.out.push_str(field.name);

        if !field.arguments.is_empty() {
            self.out.push('(');
            let mut first = true;
            for argument in field.arguments.children.iter() {
                if first {
                    first = false;
                } else {
                    self.out.push_str(", ");
                }
                let expected = self
                    .schema
                    .field_argument_type(parent_type, field.name, argument.name)
                    .ok_or_else(|| unknown_argument(parent_type, field.name, argument))?;
                self.out.push_str(argument.name);
                self.out.push_str(": ");
                self.write_value(&argument.value, expected, level)?;
            }
            self.out.push(')');
        }

        self.write_directives(&field.directives.children)?;

        if !field.selection_set.is_empty() {
            let of_type = self
                .schema
                .field_type(parent_type, field.name)
                .ok_or_else(|| {
                    Error::new(
                        format!("Unknown field \"{}\" on type \"{parent_type}\"", field.name),
                        None,
                    )
                })?;
            self.out.push(' ');
            self.write_selection_set(&field.selection_set, of_type.of_type().name, level)?;
        }
        Ok(())
    }

    fn write_directives(&mut self, directives: &[Directive<'a>]) -> Result<()> {
        for directive in directives {
            self.out.push_str(" @");
            self.out.push_str(directive.name);
            if !directive.arguments.is_empty() {
                self.out.push('(');
                let mut first = true;
                for argument in directive.arguments.children.iter() {
                    if first {
                        first = false;
                    } else {
                        self.out.push_str(", ");
                    }
                    let expected = self
                        .schema
                        .directive_argument_type(directive.name, argument.name)
                        .ok_or_else(|| {
                            Error::new(
                                format!(
                                    "Unknown argument \"{}\" on directive \"@{}\"",
                                    argument.name, directive.name
                                ),
                                None,
                            )
                        })?;
                    self.out.push_str(argument.name);
                    self.out.push_str(": ");
                    // Directives appear inline, so nested block strings stay at depth zero.
                    self.write_value(&argument.value, expected, 0)?;
                }
                self.out.push(')');
            }
        }
        Ok(())
    }

    /// Writes a value literal under its declared type, redacting strings and inlining variables.
    fn write_value(&mut self, value: &Value<'a>, expected: &'a Type<'a>, level: usize) -> Result<()> {
        let expected = unwrap_non_null(expected);
        match value {
            Value::Variable(variable) => {
                let bound = self
                    .variables
                    .and_then(|variables| variables.get(variable.name));
                match bound {
                    // A string bound to an enum-typed variable is written as an enum value.
                    Some(Value::String(string))
                        if self.expected_kind(expected) == Some(TypeKind::Enum) =>
                    {
                        self.out.push_str(string.value);
                        Ok(())
                    }
                    Some(bound) => self.write_value(bound, expected, level),
                    None => {
                        self.out.push_str("null");
                        Ok(())
                    }
                }
            }
            Value::String(string) => {
                if self.prints_verbatim(expected) {
                    string.write_to_buffer(level, &mut self.out)?;
                } else {
                    self.out.push_str(REDACTED);
                }
                Ok(())
            }
            Value::List(list) => {
                let element = match expected {
                    Type::ListType(inner) => *inner,
                    // A single value in list position coerces to a one-element list.
                    other => other,
                };
                self.out.push('[');
                let mut first = true;
                for child in list.children.iter() {
                    if first {
                        first = false;
                    } else {
                        self.out.push_str(", ");
                    }
                    self.write_value(child, element, level)?;
                }
                self.out.push(']');
                Ok(())
            }
            Value::Object(object) => {
                let input_type = expected.of_type().name;
                self.out.push('{');
                let mut first = true;
                for field in object.children.iter() {
                    if first {
                        first = false;
                    } else {
                        self.out.push_str(", ");
                    }
                    let field_type = self
                        .schema
                        .input_field_type(input_type, field.name)
                        .ok_or_else(|| {
                            Error::new(
                                format!(
                                    "Unknown field \"{}\" on input type \"{input_type}\"",
                                    field.name
                                ),
                                None,
                            )
                        })?;
                    self.out.push_str(field.name);
                    self.out.push_str(": ");
                    self.write_value(&field.value, field_type, level)?;
                }
                self.out.push('}');
                Ok(())
            }
            other => {
                other.write_to_buffer(level, &mut self.out)?;
                Ok(())
            }
        }
    }

    /// A string literal prints verbatim when an enum or the `ID` scalar is expected.
    fn prints_verbatim(&self, expected: &'a Type<'a>) -> bool {
        let name = expected.of_type().name;
        name == "ID" || self.schema.type_kind(name) == Some(TypeKind::Enum)
    }

    fn expected_kind(&self, expected: &'a Type<'a>) -> Option<TypeKind> {
        self.schema.type_kind(expected.of_type().name)
    }

    fn write_indent(&mut self, level: usize) {
        for _ in 0..level {
            self.out.push_str("  ");
        }
    }
}

fn unwrap_non_null<'a>(of_type: &'a Type<'a>) -> &'a Type<'a> {
    match of_type {
        Type::NonNullType(inner) => unwrap_non_null(inner),
        Type::ListType(_) | Type::NamedType(_) => of_type,
    }
}

fn unknown_argument(parent_type: &str, field: &str, argument: &Argument) -> Error {
    Error::new(
        format!("Unknown argument \"{}\" on field \"{parent_type}.{field}\"", argument.name),
        None,
    )
}

#[cfg(test)]
mod tests {
    use hashbrown::HashMap;

    use super::*;
    use crate::ast::{ASTContext, BooleanValue, ParseNode, StringValue};
    use crate::error::ErrorKind;

    fn schema(ctx: &ASTContext) -> ClientSchema<'_> {
        let sdl = Document::parse(
            ctx,
            r#"
            type Query {
              user(id: ID!, name: String, role: Role, filter: Filter): User
              search(terms: [String!]): [User]
            }

            type User {
              id: ID!
              name: String
            }

            enum Role { ADMIN MEMBER }

            input Filter {
              token: String
              label: ID
              roles: [Role]
            }
            "#,
        )
        .unwrap();
        ClientSchema::from_document(ctx, sdl)
    }

    #[test]
    fn redacts_string_literals() {
        let ctx = ASTContext::new();
        let schema = schema(&ctx);
        let query =
            Document::parse(&ctx, r#"{ user(name: "Ada Lovelace") { name } }"#).unwrap();
        let output = SanitizedPrinter::new(&schema).print_document(query).unwrap();
        assert_eq!(
            output,
            "{\n  user(name: \"<REDACTED>\") {\n    name\n  }\n}"
        );
    }

    #[test]
    fn id_and_enum_literals_print_verbatim() {
        let ctx = ASTContext::new();
        let schema = schema(&ctx);
        let query =
            Document::parse(&ctx, r#"{ user(id: "user-1", role: ADMIN) { id } }"#).unwrap();
        let output = SanitizedPrinter::new(&schema).print_document(query).unwrap();
        assert_eq!(
            output,
            "{\n  user(id: \"user-1\", role: ADMIN) {\n    id\n  }\n}"
        );
    }

    #[test]
    fn redaction_descends_into_input_objects_and_lists() {
        let ctx = ASTContext::new();
        let schema = schema(&ctx);
        let query = Document::parse(
            &ctx,
            r#"{ user(filter: {token: "secret", label: "ok", roles: [ADMIN]}) { id } }"#,
        )
        .unwrap();
        let output = SanitizedPrinter::new(&schema).print_document(query).unwrap();
        assert_eq!(
            output,
            "{\n  user(filter: {token: \"<REDACTED>\", label: \"ok\", roles: [ADMIN]}) {\n    id\n  }\n}"
        );

        let query = Document::parse(&ctx, r#"{ search(terms: ["a", "b"]) { id } }"#).unwrap();
        let output = SanitizedPrinter::new(&schema).print_document(query).unwrap();
        assert_eq!(
            output,
            "{\n  search(terms: [\"<REDACTED>\", \"<REDACTED>\"]) {\n    id\n  }\n}"
        );
    }

    #[test]
    fn inlines_variables_and_drops_definitions() {
        let ctx = ASTContext::new();
        let schema = schema(&ctx);
        let query = Document::parse(
            &ctx,
            r#"query Find($id: ID!, $name: String) { user(id: $id, name: $name) { id } }"#,
        )
        .unwrap();

        let mut variables: Variables = HashMap::new_in(&ctx.arena);
        variables.insert("id", Value::String(StringValue::new(&ctx, "user-7")));
        variables.insert("name", Value::String(StringValue::new(&ctx, "Ada")));

        let output = SanitizedPrinter::new(&schema)
            .variables(&variables)
            .print_document(query)
            .unwrap();
        assert_eq!(
            output,
            "query Find {\n  user(id: \"user-7\", name: \"<REDACTED>\") {\n    id\n  }\n}"
        );
    }

    #[test]
    fn unbound_variables_inline_as_null() {
        let ctx = ASTContext::new();
        let schema = schema(&ctx);
        let query =
            Document::parse(&ctx, r#"query ($name: String) { user(name: $name) { id } }"#)
                .unwrap();
        let output = SanitizedPrinter::new(&schema).print_document(query).unwrap();
        assert_eq!(output, "{\n  user(name: null) {\n    id\n  }\n}");
    }

    #[test]
    fn enum_typed_variable_strings_become_enum_values() {
        let ctx = ASTContext::new();
        let schema = schema(&ctx);
        let query =
            Document::parse(&ctx, r#"query ($role: Role) { user(role: $role) { id } }"#).unwrap();

        let mut variables: Variables = HashMap::new_in(&ctx.arena);
        variables.insert("role", Value::String(StringValue::new(&ctx, "MEMBER")));

        let output = SanitizedPrinter::new(&schema)
            .variables(&variables)
            .print_document(query)
            .unwrap();
        assert_eq!(output, "{\n  user(role: MEMBER) {\n    id\n  }\n}");
    }

    #[test]
    fn directive_arguments_resolve_against_builtins() {
        let ctx = ASTContext::new();
        let schema = schema(&ctx);
        let query =
            Document::parse(&ctx, r#"query ($yes: Boolean!) { user @include(if: $yes) { id } }"#)
                .unwrap();

        let mut variables: Variables = HashMap::new_in(&ctx.arena);
        variables.insert("yes", Value::Boolean(BooleanValue { value: true, loc: Default::default() }));

        let output = SanitizedPrinter::new(&schema)
            .variables(&variables)
            .print_document(query)
            .unwrap();
        assert_eq!(output, "{\n  user @include(if: true) {\n    id\n  }\n}");
    }

    #[test]
    fn fragments_redact_under_their_type_condition() {
        let ctx = ASTContext::new();
        let schema = schema(&ctx);
        let query = Document::parse(
            &ctx,
            r#"{ user(id: "u") { ...Names } } fragment Names on Query { user(name: "x") { name } }"#,
        )
        .unwrap();
        let output = SanitizedPrinter::new(&schema).print_document(query).unwrap();
        assert_eq!(
            output,
            "{\n  user(id: \"u\") {\n    ...Names\n  }\n}\n\nfragment Names on Query {\n  user(name: \"<REDACTED>\") {\n    name\n  }\n}"
        );
    }

    #[test]
    fn unknown_fields_and_arguments_are_errors() {
        let ctx = ASTContext::new();
        let schema = schema(&ctx);

        let query = Document::parse(&ctx, r#"{ unknown { id } }"#).unwrap();
        let error = SanitizedPrinter::new(&schema).print_document(query).unwrap_err();
        assert_eq!(error.kind(), &ErrorKind::GraphQL);
        assert_eq!(error.message(), "Unknown field \"unknown\" on type \"Query\"");

        let query = Document::parse(&ctx, r#"{ user(nope: 1) { id } }"#).unwrap();
        let error = SanitizedPrinter::new(&schema).print_document(query).unwrap_err();
        assert_eq!(
            error.message(),
            "Unknown argument \"nope\" on field \"Query.user\""
        );
    }
}
