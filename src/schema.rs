//! # Client Schema
//!
//! The `graphql_language::schema` module contains a minimal, read-only view of a GraphQL schema.
//! It is never executable and only answers the type lookups that schema-aware printing needs:
//! resolving a field's return type, a field or directive argument's declared type, and an input
//! object's field types.
//! [Reference](https://spec.graphql.org/October2021/#sec-Schema)
//!
//! A [ClientSchema] is built from a parsed type-system [Document](crate::ast::Document):
//!
//! ```
//! use graphql_language::{ast::*, schema::*};
//!
//! let ctx = ASTContext::new();
//! let document = Document::parse(&ctx, "type Query { name: String }").unwrap();
//! let schema = ClientSchema::from_document(&ctx, document);
//!
//! assert_eq!(schema.type_kind("Query"), Some(TypeKind::Object));
//! assert_eq!(schema.field_type("Query", "name").unwrap().of_type().name, "String");
//! ```

use hashbrown::hash_map::DefaultHashBuilder;
use hashbrown::HashMap;

use crate::ast::{
    ASTContext, Definition, DirectiveDefinition, Document, FieldDefinition, InputValueDefinition,
    Loc, NamedType, OperationKind, Type,
};

type Map<'a, V> = HashMap<&'a str, V, DefaultHashBuilder, &'a bumpalo::Bump>;

/// The classification of a named schema type.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
}

#[derive(Debug, Clone)]
enum SchemaType<'a> {
    Scalar,
    Enum,
    Union,
    Object(Map<'a, &'a FieldDefinition<'a>>),
    Interface(Map<'a, &'a FieldDefinition<'a>>),
    InputObject(Map<'a, &'a InputValueDefinition<'a>>),
}

impl<'a> SchemaType<'a> {
    fn kind(&self) -> TypeKind {
        match self {
            SchemaType::Scalar => TypeKind::Scalar,
            SchemaType::Enum => TypeKind::Enum,
            SchemaType::Union => TypeKind::Union,
            SchemaType::Object(_) => TypeKind::Object,
            SchemaType::Interface(_) => TypeKind::Interface,
            SchemaType::InputObject(_) => TypeKind::InputObject,
        }
    }

    fn fields(&self) -> Option<&Map<'a, &'a FieldDefinition<'a>>> {
        match self {
            SchemaType::Object(fields) | SchemaType::Interface(fields) => Some(fields),
            _ => None,
        }
    }
}

static STRING_TYPE: Type<'static> = Type::NamedType(NamedType {
    name: "String",
    loc: Loc { line: 0, column: 0 },
});

static BOOLEAN_TYPE: Type<'static> = Type::NamedType(NamedType {
    name: "Boolean",
    loc: Loc { line: 0, column: 0 },
});

static NON_NULL_BOOLEAN_TYPE: Type<'static> = Type::NonNullType(&BOOLEAN_TYPE);

/// A schema built from type-system definitions, exposing type lookups only.
///
/// The schema resolves names, kinds, field types, and argument types. Resolution of interface
/// implementations, validation, and execution are out of scope. The built-in scalars and the
/// built-in `@skip`, `@include`, and `@deprecated` directives are always present.
#[derive(Debug, Clone)]
pub struct ClientSchema<'a> {
    types: Map<'a, SchemaType<'a>>,
    directives: Map<'a, &'a DirectiveDefinition<'a>>,
    query_root: Option<&'a str>,
    mutation_root: Option<&'a str>,
    subscription_root: Option<&'a str>,
}

impl<'a> ClientSchema<'a> {
    /// Builds a schema from the type-system definitions and extensions of a parsed document.
    ///
    /// Executable definitions in the document are ignored. An extension for an unknown type
    /// registers the type rather than failing, and a repeated definition replaces the earlier
    /// one, since this schema exists for lookups and not for validation.
    pub fn from_document(ctx: &'a ASTContext, document: &'a Document<'a>) -> Self {
        let mut schema = ClientSchema {
            types: HashMap::new_in(&ctx.arena),
            directives: HashMap::new_in(&ctx.arena),
            query_root: None,
            mutation_root: None,
            subscription_root: None,
        };
        for name in ["Int", "Float", "String", "Boolean", "ID"] {
            schema.types.insert(name, SchemaType::Scalar);
        }

        for definition in document.definitions.iter() {
            match definition {
                Definition::Schema(schema_def) => {
                    schema.query_root = schema_def.query.as_ref().map(|x| x.name);
                    schema.mutation_root = schema_def.mutation.as_ref().map(|x| x.name);
                    schema.subscription_root = schema_def.subscription.as_ref().map(|x| x.name);
                }
                Definition::SchemaExtension(extension) => {
                    if let Some(query) = &extension.query {
                        schema.query_root = Some(query.name);
                    }
                    if let Some(mutation) = &extension.mutation {
                        schema.mutation_root = Some(mutation.name);
                    }
                    if let Some(subscription) = &extension.subscription {
                        schema.subscription_root = Some(subscription.name);
                    }
                }

                Definition::Scalar(scalar) => {
                    schema.types.insert(scalar.name.name, SchemaType::Scalar);
                }
                Definition::ScalarExtension(extension) => {
                    schema.types.insert(extension.name.name, SchemaType::Scalar);
                }
                Definition::Enum(r#enum) => {
                    schema.types.insert(r#enum.name.name, SchemaType::Enum);
                }
                Definition::EnumExtension(extension) => {
                    schema.types.insert(extension.name.name, SchemaType::Enum);
                }
                Definition::Union(union) => {
                    schema.types.insert(union.name.name, SchemaType::Union);
                }
                Definition::UnionExtension(extension) => {
                    schema.types.insert(extension.name.name, SchemaType::Union);
                }

                Definition::Object(object) => {
                    let fields = field_map(ctx, &object.fields);
                    schema.types.insert(object.name.name, SchemaType::Object(fields));
                }
                Definition::ObjectExtension(extension) => {
                    schema.extend_fields(ctx, extension.name.name, &extension.fields, false);
                }
                Definition::Interface(interface) => {
                    let fields = field_map(ctx, &interface.fields);
                    schema
                        .types
                        .insert(interface.name.name, SchemaType::Interface(fields));
                }
                Definition::InterfaceExtension(extension) => {
                    schema.extend_fields(ctx, extension.name.name, &extension.fields, true);
                }

                Definition::InputObject(input) => {
                    let fields = input_field_map(ctx, &input.fields);
                    schema
                        .types
                        .insert(input.name.name, SchemaType::InputObject(fields));
                }
                Definition::InputObjectExtension(extension) => {
                    match schema.types.get_mut(extension.name.name) {
                        Some(SchemaType::InputObject(fields)) => {
                            for field in extension.fields.iter() {
                                fields.insert(field.name, field);
                            }
                        }
                        _ => {
                            let fields = input_field_map(ctx, &extension.fields);
                            schema
                                .types
                                .insert(extension.name.name, SchemaType::InputObject(fields));
                        }
                    }
                }

                Definition::Directive(directive) => {
                    schema.directives.insert(directive.name, directive);
                }

                Definition::Operation(_) | Definition::Fragment(_) => {}
            }
        }
        schema
    }

    fn extend_fields(
        &mut self,
        ctx: &'a ASTContext,
        name: &'a str,
        new_fields: &'a bumpalo::collections::Vec<'a, FieldDefinition<'a>>,
        as_interface: bool,
    ) {
        match self.types.get_mut(name) {
            Some(SchemaType::Object(fields)) | Some(SchemaType::Interface(fields)) => {
                for field in new_fields.iter() {
                    fields.insert(field.name, field);
                }
            }
            _ => {
                let fields = field_map(ctx, new_fields);
                let schema_type = if as_interface {
                    SchemaType::Interface(fields)
                } else {
                    SchemaType::Object(fields)
                };
                self.types.insert(name, schema_type);
            }
        }
    }

    /// Returns the [TypeKind] of the named type, if the schema knows it.
    pub fn type_kind(&self, name: &str) -> Option<TypeKind> {
        self.types.get(name).map(SchemaType::kind)
    }

    /// Returns the root type name for the given operation kind.
    ///
    /// When the document carried no schema definition, the conventional root type names
    /// (`Query`, `Mutation`, `Subscription`) apply if such a type exists.
    pub fn root_type(&self, operation: OperationKind) -> Option<&'a str> {
        let (explicit, conventional) = match operation {
            OperationKind::Query => (self.query_root, "Query"),
            OperationKind::Mutation => (self.mutation_root, "Mutation"),
            OperationKind::Subscription => (self.subscription_root, "Subscription"),
        };
        explicit.or_else(|| self.types.get_key_value(conventional).map(|(name, _)| *name))
    }

    /// Resolves the declared return type of a field on an object or interface type.
    /// The `__typename` meta field resolves on every type.
    pub fn field_type(&self, parent: &str, field: &str) -> Option<&'a Type<'a>> {
        if field == "__typename" {
            return Some(&STRING_TYPE);
        }
        let definition = self.types.get(parent)?.fields()?.get(field)?;
        Some(&definition.of_type)
    }

    /// Resolves the declared type of an argument of a field on an object or interface type.
    pub fn field_argument_type(
        &self,
        parent: &str,
        field: &str,
        argument: &str,
    ) -> Option<&'a Type<'a>> {
        let definition = self.types.get(parent)?.fields()?.get(field)?;
        definition
            .arguments
            .iter()
            .find(|x| x.name == argument)
            .map(|x| &x.of_type)
    }

    /// Resolves the declared type of a directive's argument. The built-in `@skip`, `@include`,
    /// and `@deprecated` directives resolve without a definition in the schema.
    pub fn directive_argument_type(&self, directive: &str, argument: &str) -> Option<&'a Type<'a>> {
        if let Some(definition) = self.directives.get(directive) {
            return definition
                .arguments
                .iter()
                .find(|x| x.name == argument)
                .map(|x| &x.of_type);
        }
        match (directive, argument) {
            ("skip", "if") | ("include", "if") => Some(&NON_NULL_BOOLEAN_TYPE),
            ("deprecated", "reason") => Some(&STRING_TYPE),
            _ => None,
        }
    }

    /// Resolves the declared type of a field on an input object type.
    pub fn input_field_type(&self, input: &str, field: &str) -> Option<&'a Type<'a>> {
        match self.types.get(input)? {
            SchemaType::InputObject(fields) => fields.get(field).map(|x| &x.of_type),
            _ => None,
        }
    }
}

fn field_map<'a>(
    ctx: &'a ASTContext,
    fields: &'a bumpalo::collections::Vec<'a, FieldDefinition<'a>>,
) -> Map<'a, &'a FieldDefinition<'a>> {
    let mut map = HashMap::new_in(&ctx.arena);
    for field in fields.iter() {
        map.insert(field.name, field);
    }
    map
}

fn input_field_map<'a>(
    ctx: &'a ASTContext,
    fields: &'a bumpalo::collections::Vec<'a, InputValueDefinition<'a>>,
) -> Map<'a, &'a InputValueDefinition<'a>> {
    let mut map = HashMap::new_in(&ctx.arena);
    for field in fields.iter() {
        map.insert(field.name, field);
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::ParseNode;

    fn schema_document(ctx: &ASTContext) -> &Document<'_> {
        Document::parse(
            ctx,
            r#"
            schema { query: QueryRoot }

            type QueryRoot {
              user(id: ID!): User
              search(filter: Filter): [User!]
            }

            type User {
              id: ID!
              name: String
              role: Role
            }

            enum Role { ADMIN MEMBER }

            input Filter {
              name: String
              role: Role
            }

            directive @cost(value: Int!) on FIELD
            "#,
        )
        .unwrap()
    }

    #[test]
    fn resolves_kinds_and_roots() {
        let ctx = ASTContext::new();
        let schema = ClientSchema::from_document(&ctx, schema_document(&ctx));

        assert_eq!(schema.type_kind("QueryRoot"), Some(TypeKind::Object));
        assert_eq!(schema.type_kind("Role"), Some(TypeKind::Enum));
        assert_eq!(schema.type_kind("Filter"), Some(TypeKind::InputObject));
        assert_eq!(schema.type_kind("ID"), Some(TypeKind::Scalar));
        assert_eq!(schema.type_kind("Missing"), None);

        assert_eq!(schema.root_type(OperationKind::Query), Some("QueryRoot"));
        assert_eq!(schema.root_type(OperationKind::Mutation), None);
    }

    #[test]
    fn conventional_roots_apply_without_schema_definition() {
        let ctx = ASTContext::new();
        let document = Document::parse(&ctx, "type Query { ok: Boolean }").unwrap();
        let schema = ClientSchema::from_document(&ctx, document);
        assert_eq!(schema.root_type(OperationKind::Query), Some("Query"));
    }

    #[test]
    fn resolves_field_and_argument_types() {
        let ctx = ASTContext::new();
        let schema = ClientSchema::from_document(&ctx, schema_document(&ctx));

        let user = schema.field_type("QueryRoot", "user").unwrap();
        assert_eq!(user.of_type().name, "User");
        let id_arg = schema.field_argument_type("QueryRoot", "user", "id").unwrap();
        assert!(matches!(id_arg, Type::NonNullType(_)));
        assert_eq!(id_arg.of_type().name, "ID");

        assert_eq!(schema.field_type("QueryRoot", "missing"), None);
        assert_eq!(schema.field_argument_type("QueryRoot", "user", "missing"), None);

        let typename = schema.field_type("User", "__typename").unwrap();
        assert_eq!(typename.of_type().name, "String");
    }

    #[test]
    fn resolves_input_fields_and_directive_arguments() {
        let ctx = ASTContext::new();
        let schema = ClientSchema::from_document(&ctx, schema_document(&ctx));

        let role = schema.input_field_type("Filter", "role").unwrap();
        assert_eq!(role.of_type().name, "Role");
        assert_eq!(schema.input_field_type("User", "role"), None);

        let cost = schema.directive_argument_type("cost", "value").unwrap();
        assert_eq!(cost.of_type().name, "Int");
        let skip = schema.directive_argument_type("skip", "if").unwrap();
        assert_eq!(skip.of_type().name, "Boolean");
        assert_eq!(schema.directive_argument_type("unknown", "arg"), None);
    }

    #[test]
    fn extensions_merge_into_existing_types() {
        let ctx = ASTContext::new();
        let document = Document::parse(
            &ctx,
            "type Query { a: Int } extend type Query { b: String } extend schema { mutation: M } type M { c: Int }",
        )
        .unwrap();
        let schema = ClientSchema::from_document(&ctx, document);

        assert_eq!(schema.field_type("Query", "a").unwrap().of_type().name, "Int");
        assert_eq!(schema.field_type("Query", "b").unwrap().of_type().name, "String");
        assert_eq!(schema.root_type(OperationKind::Mutation), Some("M"));
    }
}
