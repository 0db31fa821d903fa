use std::fmt;

/// An enum of identifiers representing AST nodes.
///
/// This enum can be printed using the [`fmt::Display`] trait.
/// It doubles as the key under which visitor callbacks are registered for a given kind of node.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ASTKind {
    /// See: [crate::ast::Definition]
    Definition,
    /// See: [crate::ast::Document]
    Document,
    /// See: [crate::ast::OperationDefinition]
    OperationDefinition,
    /// See: [crate::ast::OperationKind]
    OperationKind,
    /// See: [crate::ast::FragmentDefinition]
    FragmentDefinition,
    /// See: [crate::ast::VariableDefinitions]
    VariableDefinitions,
    /// See: [crate::ast::VariableDefinition]
    VariableDefinition,
    /// See: [crate::ast::Type]
    Type,
    /// See: [crate::ast::NamedType]
    NamedType,
    /// See: `ListType` on [crate::ast::Type]
    ListType,
    /// See: `NonNullType` on [crate::ast::Type]
    NonNullType,
    /// See: [crate::ast::Field]
    Field,
    /// See: [crate::ast::FragmentSpread]
    FragmentSpread,
    /// See: [crate::ast::InlineFragment]
    InlineFragment,
    /// See: [crate::ast::SelectionSet]
    SelectionSet,
    /// See: [crate::ast::Selection]
    Selection,
    /// See: [crate::ast::Directives]
    Directives,
    /// See: [crate::ast::Directive]
    Directive,
    /// See: [crate::ast::Arguments]
    Arguments,
    /// See: [crate::ast::Argument]
    Argument,
    /// See: [crate::ast::ObjectValue]
    Object,
    /// See: [crate::ast::ObjectField]
    ObjectField,
    /// See: [crate::ast::Value]
    Value,
    /// See: [crate::ast::Variable]
    Variable,
    /// See: [crate::ast::StringValue]
    String,
    /// See: [crate::ast::FloatValue]
    Float,
    /// See: [crate::ast::IntValue]
    Int,
    /// See: [crate::ast::BooleanValue]
    Boolean,
    /// See: [crate::ast::EnumValue]
    Enum,
    /// See: [crate::ast::ListValue]
    List,
    /// See: [crate::ast::NullValue]
    Null,
    /// See: [crate::ast::SchemaDefinition]
    SchemaDefinition,
    /// See: [crate::ast::ScalarTypeDefinition]
    ScalarTypeDefinition,
    /// See: [crate::ast::ObjectTypeDefinition]
    ObjectTypeDefinition,
    /// See: [crate::ast::InterfaceTypeDefinition]
    InterfaceTypeDefinition,
    /// See: [crate::ast::UnionTypeDefinition]
    UnionTypeDefinition,
    /// See: [crate::ast::EnumTypeDefinition]
    EnumTypeDefinition,
    /// See: [crate::ast::InputObjectTypeDefinition]
    InputObjectTypeDefinition,
    /// See: [crate::ast::DirectiveDefinition]
    DirectiveDefinition,
    /// See: [crate::ast::SchemaExtension]
    SchemaExtension,
    /// See: [crate::ast::ScalarTypeExtension]
    ScalarTypeExtension,
    /// See: [crate::ast::ObjectTypeExtension]
    ObjectTypeExtension,
    /// See: [crate::ast::InterfaceTypeExtension]
    InterfaceTypeExtension,
    /// See: [crate::ast::UnionTypeExtension]
    UnionTypeExtension,
    /// See: [crate::ast::EnumTypeExtension]
    EnumTypeExtension,
    /// See: [crate::ast::InputObjectTypeExtension]
    InputObjectTypeExtension,
    /// See: [crate::ast::FieldDefinition]
    FieldDefinition,
    /// See: [crate::ast::InputValueDefinition]
    InputValueDefinition,
    /// See: [crate::ast::EnumValueDefinition]
    EnumValueDefinition,
}

impl fmt::Display for ASTKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ASTKind::Definition => f.write_str("Definition"),
            ASTKind::Document => f.write_str("Document"),
            ASTKind::OperationDefinition => f.write_str("Operation Definition"),
            ASTKind::OperationKind => f.write_str("Operation Kind"),
            ASTKind::FragmentDefinition => f.write_str("Fragment Definition"),
            ASTKind::VariableDefinitions => f.write_str("Variable Definitions"),
            ASTKind::VariableDefinition => f.write_str("Variable Definition"),
            ASTKind::Type => f.write_str("Type"),
            ASTKind::NamedType => f.write_str("Type Name"),
            ASTKind::ListType => f.write_str("List Type"),
            ASTKind::NonNullType => f.write_str("Non-null Type"),
            ASTKind::Field => f.write_str("Field"),
            ASTKind::FragmentSpread => f.write_str("Fragment Spread"),
            ASTKind::InlineFragment => f.write_str("Inline Fragment"),
            ASTKind::SelectionSet => f.write_str("Selection Set"),
            ASTKind::Selection => f.write_str("Selection"),
            ASTKind::Directives => f.write_str("Directives"),
            ASTKind::Directive => f.write_str("Directive"),
            ASTKind::Arguments => f.write_str("Arguments"),
            ASTKind::Argument => f.write_str("Argument"),
            ASTKind::Object => f.write_str("Object"),
            ASTKind::ObjectField => f.write_str("Object Field"),
            ASTKind::Value => f.write_str("Value"),
            ASTKind::Variable => f.write_str("Variable"),
            ASTKind::String => f.write_str("String"),
            ASTKind::Float => f.write_str("Float"),
            ASTKind::Int => f.write_str("Integer"),
            ASTKind::Boolean => f.write_str("Boolean"),
            ASTKind::Enum => f.write_str("Enum"),
            ASTKind::List => f.write_str("List"),
            ASTKind::Null => f.write_str("Null"),
            ASTKind::SchemaDefinition => f.write_str("Schema Definition"),
            ASTKind::ScalarTypeDefinition => f.write_str("Scalar Type Definition"),
            ASTKind::ObjectTypeDefinition => f.write_str("Object Type Definition"),
            ASTKind::InterfaceTypeDefinition => f.write_str("Interface Type Definition"),
            ASTKind::UnionTypeDefinition => f.write_str("Union Type Definition"),
            ASTKind::EnumTypeDefinition => f.write_str("Enum Type Definition"),
            ASTKind::InputObjectTypeDefinition => f.write_str("Input Object Type Definition"),
            ASTKind::DirectiveDefinition => f.write_str("Directive Definition"),
            ASTKind::SchemaExtension => f.write_str("Schema Extension"),
            ASTKind::ScalarTypeExtension => f.write_str("Scalar Type Extension"),
            ASTKind::ObjectTypeExtension => f.write_str("Object Type Extension"),
            ASTKind::InterfaceTypeExtension => f.write_str("Interface Type Extension"),
            ASTKind::UnionTypeExtension => f.write_str("Union Type Extension"),
            ASTKind::EnumTypeExtension => f.write_str("Enum Type Extension"),
            ASTKind::InputObjectTypeExtension => f.write_str("Input Object Type Extension"),
            ASTKind::FieldDefinition => f.write_str("Field Definition"),
            ASTKind::InputValueDefinition => f.write_str("Input Value Definition"),
            ASTKind::EnumValueDefinition => f.write_str("Enum Value Definition"),
        }
    }
}
