//! Serialization of whole documents to a JSON form and back.
//!
//! Every node serializes to an object with a `kind` tag, its fields, and its source position, so
//! a document restored from JSON behaves like one that was just parsed. The parse cache persists
//! this form on disk.

use bumpalo::collections::Vec;
use serde_json::{json, Map as JSMap, Value as JSValue};

use crate::ast::*;
use crate::error::{Error, Result};

/// Converts a parsed document into its JSON form.
pub fn document_to_json(document: &Document) -> JSValue {
    let definitions: std::vec::Vec<JSValue> = document
        .definitions
        .iter()
        .map(definition_to_json)
        .collect();
    json!({
        "kind": "Document",
        "definitions": definitions,
        "size_hint": document.size_hint,
    })
}

/// Restores a document from its JSON form into the given context's arena.
pub fn document_from_json<'a>(ctx: &'a ASTContext, json: &JSValue) -> Result<&'a Document<'a>> {
    let obj = as_object(json)?;
    expect_kind(obj, "Document")?;
    let mut definitions = Vec::new_in(&ctx.arena);
    for definition in array(obj, "definitions")? {
        definitions.push(definition_from_json(ctx, definition)?);
    }
    let size_hint = obj
        .get("size_hint")
        .and_then(JSValue::as_u64)
        .unwrap_or(0) as usize;
    Ok(ctx.alloc(Document {
        definitions,
        size_hint,
    }))
}

fn loc_json(loc: &Loc) -> JSValue {
    json!({ "line": loc.line, "column": loc.column })
}

fn named_type_json(name: &NamedType) -> JSValue {
    json!({ "name": name.name, "loc": loc_json(&name.loc) })
}

fn opt_named_type_json(name: &Option<NamedType>) -> JSValue {
    match name {
        Some(name) => named_type_json(name),
        None => JSValue::Null,
    }
}

fn description_json(description: &Option<StringValue>) -> JSValue {
    match description {
        Some(description) => {
            json!({ "value": description.value, "loc": loc_json(&description.loc) })
        }
        None => JSValue::Null,
    }
}

fn type_to_json(of_type: &Type) -> JSValue {
    match of_type {
        Type::NamedType(name) => {
            json!({ "kind": "NamedType", "name": name.name, "loc": loc_json(&name.loc) })
        }
        Type::ListType(inner) => json!({ "kind": "ListType", "of_type": type_to_json(inner) }),
        Type::NonNullType(inner) => {
            json!({ "kind": "NonNullType", "of_type": type_to_json(inner) })
        }
    }
}

fn value_to_json(value: &Value) -> JSValue {
    match value {
        Value::Variable(x) => {
            json!({ "kind": "Variable", "name": x.name, "loc": loc_json(&x.loc) })
        }
        Value::String(x) => json!({ "kind": "String", "value": x.value, "loc": loc_json(&x.loc) }),
        Value::Int(x) => json!({ "kind": "Int", "value": x.value, "loc": loc_json(&x.loc) }),
        Value::Float(x) => json!({ "kind": "Float", "value": x.value, "loc": loc_json(&x.loc) }),
        Value::Boolean(x) => {
            json!({ "kind": "Boolean", "value": x.value, "loc": loc_json(&x.loc) })
        }
        Value::Enum(x) => json!({ "kind": "Enum", "value": x.value, "loc": loc_json(&x.loc) }),
        Value::Null(x) => json!({ "kind": "Null", "loc": loc_json(&x.loc) }),
        Value::List(x) => {
            let values: std::vec::Vec<JSValue> = x.children.iter().map(value_to_json).collect();
            json!({ "kind": "List", "values": values, "loc": loc_json(&x.loc) })
        }
        Value::Object(x) => {
            let fields: std::vec::Vec<JSValue> = x
                .children
                .iter()
                .map(|field| {
                    json!({
                        "name": field.name,
                        "value": value_to_json(&field.value),
                        "loc": loc_json(&field.loc),
                    })
                })
                .collect();
            json!({ "kind": "Object", "fields": fields, "loc": loc_json(&x.loc) })
        }
    }
}

fn arguments_json(arguments: &Arguments) -> JSValue {
    let children: std::vec::Vec<JSValue> = arguments
        .children
        .iter()
        .map(|argument| {
            json!({
                "name": argument.name,
                "value": value_to_json(&argument.value),
                "loc": loc_json(&argument.loc),
            })
        })
        .collect();
    JSValue::Array(children)
}

fn directives_json(directives: &Directives) -> JSValue {
    let children: std::vec::Vec<JSValue> = directives
        .children
        .iter()
        .map(|directive| {
            json!({
                "name": directive.name,
                "arguments": arguments_json(&directive.arguments),
                "loc": loc_json(&directive.loc),
            })
        })
        .collect();
    JSValue::Array(children)
}

fn selection_set_json(selection_set: &SelectionSet) -> JSValue {
    let selections: std::vec::Vec<JSValue> = selection_set
        .selections
        .iter()
        .map(|selection| match selection {
            Selection::Field(field) => json!({
                "kind": "Field",
                "alias": field.alias,
                "name": field.name,
                "arguments": arguments_json(&field.arguments),
                "directives": directives_json(&field.directives),
                "selection_set": selection_set_json(&field.selection_set),
                "loc": loc_json(&field.loc),
            }),
            Selection::FragmentSpread(spread) => json!({
                "kind": "FragmentSpread",
                "name": named_type_json(&spread.name),
                "directives": directives_json(&spread.directives),
                "loc": loc_json(&spread.loc),
            }),
            Selection::InlineFragment(inline) => json!({
                "kind": "InlineFragment",
                "type_condition": opt_named_type_json(&inline.type_condition),
                "directives": directives_json(&inline.directives),
                "selection_set": selection_set_json(&inline.selection_set),
                "loc": loc_json(&inline.loc),
            }),
        })
        .collect();
    JSValue::Array(selections)
}

fn input_value_definitions_json(arguments: &[InputValueDefinition]) -> JSValue {
    let children: std::vec::Vec<JSValue> = arguments
        .iter()
        .map(|input| {
            json!({
                "description": description_json(&input.description),
                "name": input.name,
                "of_type": type_to_json(&input.of_type),
                "default_value": value_to_json(&input.default_value),
                "directives": directives_json(&input.directives),
                "loc": loc_json(&input.loc),
            })
        })
        .collect();
    JSValue::Array(children)
}

fn field_definitions_json(fields: &[FieldDefinition]) -> JSValue {
    let children: std::vec::Vec<JSValue> = fields
        .iter()
        .map(|field| {
            json!({
                "description": description_json(&field.description),
                "name": field.name,
                "arguments": input_value_definitions_json(&field.arguments),
                "of_type": type_to_json(&field.of_type),
                "directives": directives_json(&field.directives),
                "loc": loc_json(&field.loc),
            })
        })
        .collect();
    JSValue::Array(children)
}

fn named_types_json(names: &[NamedType]) -> JSValue {
    JSValue::Array(names.iter().map(named_type_json).collect())
}

fn enum_values_json(values: &[EnumValueDefinition]) -> JSValue {
    let children: std::vec::Vec<JSValue> = values
        .iter()
        .map(|value| {
            json!({
                "description": description_json(&value.description),
                "value": value.value.value,
                "value_loc": loc_json(&value.value.loc),
                "directives": directives_json(&value.directives),
                "loc": loc_json(&value.loc),
            })
        })
        .collect();
    JSValue::Array(children)
}

fn definition_to_json(definition: &Definition) -> JSValue {
    match definition {
        Definition::Operation(operation) => json!({
            "kind": "OperationDefinition",
            "operation": match operation.operation {
                OperationKind::Query => "query",
                OperationKind::Mutation => "mutation",
                OperationKind::Subscription => "subscription",
            },
            "name": opt_named_type_json(&operation.name),
            "variable_definitions": operation.variable_definitions.children.iter().map(|var_def| json!({
                "variable": { "name": var_def.variable.name, "loc": loc_json(&var_def.variable.loc) },
                "of_type": type_to_json(&var_def.of_type),
                "default_value": value_to_json(&var_def.default_value),
                "directives": directives_json(&var_def.directives),
                "loc": loc_json(&var_def.loc),
            })).collect::<std::vec::Vec<JSValue>>(),
            "directives": directives_json(&operation.directives),
            "selection_set": selection_set_json(&operation.selection_set),
            "loc": loc_json(&operation.loc),
        }),
        Definition::Fragment(fragment) => json!({
            "kind": "FragmentDefinition",
            "name": named_type_json(&fragment.name),
            "type_condition": named_type_json(&fragment.type_condition),
            "directives": directives_json(&fragment.directives),
            "selection_set": selection_set_json(&fragment.selection_set),
            "loc": loc_json(&fragment.loc),
        }),
        Definition::Schema(schema) => json!({
            "kind": "SchemaDefinition",
            "directives": directives_json(&schema.directives),
            "query": opt_named_type_json(&schema.query),
            "mutation": opt_named_type_json(&schema.mutation),
            "subscription": opt_named_type_json(&schema.subscription),
            "loc": loc_json(&schema.loc),
        }),
        Definition::SchemaExtension(extension) => json!({
            "kind": "SchemaExtension",
            "directives": directives_json(&extension.directives),
            "query": opt_named_type_json(&extension.query),
            "mutation": opt_named_type_json(&extension.mutation),
            "subscription": opt_named_type_json(&extension.subscription),
            "loc": loc_json(&extension.loc),
        }),
        Definition::Scalar(scalar) => json!({
            "kind": "ScalarTypeDefinition",
            "description": description_json(&scalar.description),
            "name": named_type_json(&scalar.name),
            "directives": directives_json(&scalar.directives),
            "loc": loc_json(&scalar.loc),
        }),
        Definition::ScalarExtension(extension) => json!({
            "kind": "ScalarTypeExtension",
            "name": named_type_json(&extension.name),
            "directives": directives_json(&extension.directives),
            "loc": loc_json(&extension.loc),
        }),
        Definition::Object(object) => json!({
            "kind": "ObjectTypeDefinition",
            "description": description_json(&object.description),
            "name": named_type_json(&object.name),
            "interfaces": named_types_json(&object.interfaces),
            "directives": directives_json(&object.directives),
            "fields": field_definitions_json(&object.fields),
            "loc": loc_json(&object.loc),
        }),
        Definition::ObjectExtension(extension) => json!({
            "kind": "ObjectTypeExtension",
            "name": named_type_json(&extension.name),
            "interfaces": named_types_json(&extension.interfaces),
            "directives": directives_json(&extension.directives),
            "fields": field_definitions_json(&extension.fields),
            "loc": loc_json(&extension.loc),
        }),
        Definition::Interface(interface) => json!({
            "kind": "InterfaceTypeDefinition",
            "description": description_json(&interface.description),
            "name": named_type_json(&interface.name),
            "interfaces": named_types_json(&interface.interfaces),
            "directives": directives_json(&interface.directives),
            "fields": field_definitions_json(&interface.fields),
            "loc": loc_json(&interface.loc),
        }),
        Definition::InterfaceExtension(extension) => json!({
            "kind": "InterfaceTypeExtension",
            "name": named_type_json(&extension.name),
            "interfaces": named_types_json(&extension.interfaces),
            "directives": directives_json(&extension.directives),
            "fields": field_definitions_json(&extension.fields),
            "loc": loc_json(&extension.loc),
        }),
        Definition::Union(union) => json!({
            "kind": "UnionTypeDefinition",
            "description": description_json(&union.description),
            "name": named_type_json(&union.name),
            "directives": directives_json(&union.directives),
            "types": named_types_json(&union.types),
            "loc": loc_json(&union.loc),
        }),
        Definition::UnionExtension(extension) => json!({
            "kind": "UnionTypeExtension",
            "name": named_type_json(&extension.name),
            "directives": directives_json(&extension.directives),
            "types": named_types_json(&extension.types),
            "loc": loc_json(&extension.loc),
        }),
        Definition::Enum(r#enum) => json!({
            "kind": "EnumTypeDefinition",
            "description": description_json(&r#enum.description),
            "name": named_type_json(&r#enum.name),
            "directives": directives_json(&r#enum.directives),
            "values": enum_values_json(&r#enum.values),
            "loc": loc_json(&r#enum.loc),
        }),
        Definition::EnumExtension(extension) => json!({
            "kind": "EnumTypeExtension",
            "name": named_type_json(&extension.name),
            "directives": directives_json(&extension.directives),
            "values": enum_values_json(&extension.values),
            "loc": loc_json(&extension.loc),
        }),
        Definition::InputObject(input) => json!({
            "kind": "InputObjectTypeDefinition",
            "description": description_json(&input.description),
            "name": named_type_json(&input.name),
            "directives": directives_json(&input.directives),
            "fields": input_value_definitions_json(&input.fields),
            "loc": loc_json(&input.loc),
        }),
        Definition::InputObjectExtension(extension) => json!({
            "kind": "InputObjectTypeExtension",
            "name": named_type_json(&extension.name),
            "directives": directives_json(&extension.directives),
            "fields": input_value_definitions_json(&extension.fields),
            "loc": loc_json(&extension.loc),
        }),
        Definition::Directive(directive) => json!({
            "kind": "DirectiveDefinition",
            "description": description_json(&directive.description),
            "name": directive.name,
            "arguments": input_value_definitions_json(&directive.arguments),
            "repeatable": directive.repeatable,
            "locations": directive.locations.iter().copied().collect::<std::vec::Vec<&str>>(),
            "loc": loc_json(&directive.loc),
        }),
    }
}

fn invalid(what: &str) -> Error {
    Error::new(format!("Invalid serialized document: {what}"), None)
}

fn as_object(json: &JSValue) -> Result<&JSMap<String, JSValue>> {
    json.as_object().ok_or_else(|| invalid("expected object"))
}

fn expect_kind(obj: &JSMap<String, JSValue>, kind: &str) -> Result<()> {
    match obj.get("kind").and_then(JSValue::as_str) {
        Some(found) if found == kind => Ok(()),
        _ => Err(invalid(&format!("expected {kind} node"))),
    }
}

fn kind_of<'b>(obj: &'b JSMap<String, JSValue>) -> Result<&'b str> {
    obj.get("kind")
        .and_then(JSValue::as_str)
        .ok_or_else(|| invalid("missing kind tag"))
}

fn string<'b>(obj: &'b JSMap<String, JSValue>, key: &str) -> Result<&'b str> {
    obj.get(key)
        .and_then(JSValue::as_str)
        .ok_or_else(|| invalid(&format!("missing {key}")))
}

fn boolean(obj: &JSMap<String, JSValue>, key: &str) -> Result<bool> {
    obj.get(key)
        .and_then(JSValue::as_bool)
        .ok_or_else(|| invalid(&format!("missing {key}")))
}

fn array<'b>(obj: &'b JSMap<String, JSValue>, key: &str) -> Result<&'b [JSValue]> {
    obj.get(key)
        .and_then(JSValue::as_array)
        .map(|x| x.as_slice())
        .ok_or_else(|| invalid(&format!("missing {key}")))
}

fn optional<'b>(obj: &'b JSMap<String, JSValue>, key: &str) -> Option<&'b JSValue> {
    obj.get(key).filter(|value| !value.is_null())
}

fn loc_from(obj: &JSMap<String, JSValue>) -> Loc {
    let loc = obj.get("loc").and_then(JSValue::as_object);
    let line = loc
        .and_then(|x| x.get("line"))
        .and_then(JSValue::as_u64)
        .unwrap_or(0) as usize;
    let column = loc
        .and_then(|x| x.get("column"))
        .and_then(JSValue::as_u64)
        .unwrap_or(0) as usize;
    Loc::new(line, column)
}

fn named_type_from<'a>(ctx: &'a ASTContext, json: &JSValue) -> Result<NamedType<'a>> {
    let obj = as_object(json)?;
    Ok(NamedType {
        name: ctx.alloc_str(string(obj, "name")?),
        loc: loc_from(obj),
    })
}

fn opt_named_type_from<'a>(
    ctx: &'a ASTContext,
    obj: &JSMap<String, JSValue>,
    key: &str,
) -> Result<Option<NamedType<'a>>> {
    optional(obj, key)
        .map(|json| named_type_from(ctx, json))
        .transpose()
}

fn description_from<'a>(
    ctx: &'a ASTContext,
    obj: &JSMap<String, JSValue>,
) -> Result<Option<StringValue<'a>>> {
    optional(obj, "description")
        .map(|json| {
            let obj = as_object(json)?;
            Ok(StringValue {
                value: ctx.alloc_str(string(obj, "value")?),
                loc: loc_from(obj),
            })
        })
        .transpose()
}

fn type_from<'a>(ctx: &'a ASTContext, json: &JSValue) -> Result<Type<'a>> {
    let obj = as_object(json)?;
    match kind_of(obj)? {
        "NamedType" => Ok(Type::NamedType(NamedType {
            name: ctx.alloc_str(string(obj, "name")?),
            loc: loc_from(obj),
        })),
        "ListType" => {
            let inner = type_from(ctx, obj.get("of_type").ok_or_else(|| invalid("missing of_type"))?)?;
            Ok(inner.into_list(ctx))
        }
        "NonNullType" => {
            let inner = type_from(ctx, obj.get("of_type").ok_or_else(|| invalid("missing of_type"))?)?;
            Ok(inner.into_nonnull(ctx))
        }
        kind => Err(invalid(&format!("unknown type kind {kind}"))),
    }
}

fn value_from<'a>(ctx: &'a ASTContext, json: &JSValue) -> Result<Value<'a>> {
    let obj = as_object(json)?;
    let loc = loc_from(obj);
    match kind_of(obj)? {
        "Variable" => Ok(Value::Variable(Variable {
            name: ctx.alloc_str(string(obj, "name")?),
            loc,
        })),
        "String" => Ok(Value::String(StringValue {
            value: ctx.alloc_str(string(obj, "value")?),
            loc,
        })),
        "Int" => Ok(Value::Int(IntValue {
            value: ctx.alloc_str(string(obj, "value")?),
            loc,
        })),
        "Float" => Ok(Value::Float(FloatValue {
            value: ctx.alloc_str(string(obj, "value")?),
            loc,
        })),
        "Boolean" => Ok(Value::Boolean(BooleanValue {
            value: boolean(obj, "value")?,
            loc,
        })),
        "Enum" => Ok(Value::Enum(EnumValue {
            value: ctx.alloc_str(string(obj, "value")?),
            loc,
        })),
        "Null" => Ok(Value::Null(NullValue { loc })),
        "List" => {
            let mut children = Vec::new_in(&ctx.arena);
            for value in array(obj, "values")? {
                children.push(value_from(ctx, value)?);
            }
            Ok(Value::List(ListValue { children, loc }))
        }
        "Object" => {
            let mut children = Vec::new_in(&ctx.arena);
            for field in array(obj, "fields")? {
                let field = as_object(field)?;
                children.push(ObjectField {
                    name: ctx.alloc_str(string(field, "name")?),
                    value: value_from(
                        ctx,
                        field.get("value").ok_or_else(|| invalid("missing value"))?,
                    )?,
                    loc: loc_from(field),
                });
            }
            Ok(Value::Object(ObjectValue { children, loc }))
        }
        kind => Err(invalid(&format!("unknown value kind {kind}"))),
    }
}

fn arguments_from<'a>(
    ctx: &'a ASTContext,
    obj: &JSMap<String, JSValue>,
    key: &str,
) -> Result<Arguments<'a>> {
    let mut children = Vec::new_in(&ctx.arena);
    for argument in array(obj, key)? {
        let argument = as_object(argument)?;
        children.push(Argument {
            name: ctx.alloc_str(string(argument, "name")?),
            value: value_from(
                ctx,
                argument.get("value").ok_or_else(|| invalid("missing value"))?,
            )?,
            loc: loc_from(argument),
        });
    }
    Ok(Arguments { children })
}

fn directives_from<'a>(
    ctx: &'a ASTContext,
    obj: &JSMap<String, JSValue>,
) -> Result<Directives<'a>> {
    let mut children = Vec::new_in(&ctx.arena);
    for directive in array(obj, "directives")? {
        let directive = as_object(directive)?;
        children.push(Directive {
            name: ctx.alloc_str(string(directive, "name")?),
            arguments: arguments_from(ctx, directive, "arguments")?,
            loc: loc_from(directive),
        });
    }
    Ok(Directives { children })
}

fn selection_set_from<'a>(
    ctx: &'a ASTContext,
    obj: &JSMap<String, JSValue>,
) -> Result<SelectionSet<'a>> {
    let mut selections = Vec::new_in(&ctx.arena);
    for selection in array(obj, "selection_set")? {
        let selection = as_object(selection)?;
        let loc = loc_from(selection);
        let node = match kind_of(selection)? {
            "Field" => Selection::Field(Field {
                alias: optional(selection, "alias")
                    .and_then(JSValue::as_str)
                    .map(|alias| ctx.alloc_str(alias)),
                name: ctx.alloc_str(string(selection, "name")?),
                arguments: arguments_from(ctx, selection, "arguments")?,
                directives: directives_from(ctx, selection)?,
                selection_set: selection_set_from(ctx, selection)?,
                loc,
            }),
            "FragmentSpread" => Selection::FragmentSpread(FragmentSpread {
                name: named_type_from(
                    ctx,
                    selection.get("name").ok_or_else(|| invalid("missing name"))?,
                )?,
                directives: directives_from(ctx, selection)?,
                loc,
            }),
            "InlineFragment" => Selection::InlineFragment(InlineFragment {
                type_condition: opt_named_type_from(ctx, selection, "type_condition")?,
                directives: directives_from(ctx, selection)?,
                selection_set: selection_set_from(ctx, selection)?,
                loc,
            }),
            kind => return Err(invalid(&format!("unknown selection kind {kind}"))),
        };
        selections.push(node);
    }
    Ok(SelectionSet { selections })
}

fn input_value_definitions_from<'a>(
    ctx: &'a ASTContext,
    obj: &JSMap<String, JSValue>,
    key: &str,
) -> Result<Vec<'a, InputValueDefinition<'a>>> {
    let mut children = Vec::new_in(&ctx.arena);
    for input in array(obj, key)? {
        let input = as_object(input)?;
        children.push(InputValueDefinition {
            description: description_from(ctx, input)?,
            name: ctx.alloc_str(string(input, "name")?),
            of_type: type_from(
                ctx,
                input.get("of_type").ok_or_else(|| invalid("missing of_type"))?,
            )?,
            default_value: value_from(
                ctx,
                input
                    .get("default_value")
                    .ok_or_else(|| invalid("missing default_value"))?,
            )?,
            directives: directives_from(ctx, input)?,
            loc: loc_from(input),
        });
    }
    Ok(children)
}

fn field_definitions_from<'a>(
    ctx: &'a ASTContext,
    obj: &JSMap<String, JSValue>,
) -> Result<Vec<'a, FieldDefinition<'a>>> {
    let mut children = Vec::new_in(&ctx.arena);
    for field in array(obj, "fields")? {
        let field = as_object(field)?;
        children.push(FieldDefinition {
            description: description_from(ctx, field)?,
            name: ctx.alloc_str(string(field, "name")?),
            arguments: input_value_definitions_from(ctx, field, "arguments")?,
            of_type: type_from(
                ctx,
                field.get("of_type").ok_or_else(|| invalid("missing of_type"))?,
            )?,
            directives: directives_from(ctx, field)?,
            loc: loc_from(field),
        });
    }
    Ok(children)
}

fn named_types_from<'a>(
    ctx: &'a ASTContext,
    obj: &JSMap<String, JSValue>,
    key: &str,
) -> Result<Vec<'a, NamedType<'a>>> {
    let mut children = Vec::new_in(&ctx.arena);
    for name in array(obj, key)? {
        children.push(named_type_from(ctx, name)?);
    }
    Ok(children)
}

fn enum_values_from<'a>(
    ctx: &'a ASTContext,
    obj: &JSMap<String, JSValue>,
) -> Result<Vec<'a, EnumValueDefinition<'a>>> {
    let mut children = Vec::new_in(&ctx.arena);
    for value in array(obj, "values")? {
        let value = as_object(value)?;
        let value_loc = value
            .get("value_loc")
            .and_then(JSValue::as_object)
            .map(|loc| {
                Loc::new(
                    loc.get("line").and_then(JSValue::as_u64).unwrap_or(0) as usize,
                    loc.get("column").and_then(JSValue::as_u64).unwrap_or(0) as usize,
                )
            })
            .unwrap_or_default();
        children.push(EnumValueDefinition {
            description: description_from(ctx, value)?,
            value: EnumValue {
                value: ctx.alloc_str(string(value, "value")?),
                loc: value_loc,
            },
            directives: directives_from(ctx, value)?,
            loc: loc_from(value),
        });
    }
    Ok(children)
}

fn definition_from_json<'a>(ctx: &'a ASTContext, json: &JSValue) -> Result<Definition<'a>> {
    let obj = as_object(json)?;
    let loc = loc_from(obj);
    match kind_of(obj)? {
        "OperationDefinition" => {
            let operation = match string(obj, "operation")? {
                "query" => OperationKind::Query,
                "mutation" => OperationKind::Mutation,
                "subscription" => OperationKind::Subscription,
                kind => return Err(invalid(&format!("unknown operation kind {kind}"))),
            };
            let mut variable_definitions = Vec::new_in(&ctx.arena);
            for var_def in array(obj, "variable_definitions")? {
                let var_def = as_object(var_def)?;
                let variable = as_object(
                    var_def
                        .get("variable")
                        .ok_or_else(|| invalid("missing variable"))?,
                )?;
                variable_definitions.push(VariableDefinition {
                    variable: Variable {
                        name: ctx.alloc_str(string(variable, "name")?),
                        loc: loc_from(variable),
                    },
                    of_type: type_from(
                        ctx,
                        var_def.get("of_type").ok_or_else(|| invalid("missing of_type"))?,
                    )?,
                    default_value: value_from(
                        ctx,
                        var_def
                            .get("default_value")
                            .ok_or_else(|| invalid("missing default_value"))?,
                    )?,
                    directives: directives_from(ctx, var_def)?,
                    loc: loc_from(var_def),
                });
            }
            Ok(Definition::Operation(OperationDefinition {
                operation,
                name: opt_named_type_from(ctx, obj, "name")?,
                variable_definitions: VariableDefinitions {
                    children: variable_definitions,
                },
                directives: directives_from(ctx, obj)?,
                selection_set: selection_set_from(ctx, obj)?,
                loc,
            }))
        }
        "FragmentDefinition" => Ok(Definition::Fragment(FragmentDefinition {
            name: named_type_from(ctx, obj.get("name").ok_or_else(|| invalid("missing name"))?)?,
            type_condition: named_type_from(
                ctx,
                obj.get("type_condition")
                    .ok_or_else(|| invalid("missing type_condition"))?,
            )?,
            directives: directives_from(ctx, obj)?,
            selection_set: selection_set_from(ctx, obj)?,
            loc,
        })),
        "SchemaDefinition" => Ok(Definition::Schema(SchemaDefinition {
            directives: directives_from(ctx, obj)?,
            query: opt_named_type_from(ctx, obj, "query")?,
            mutation: opt_named_type_from(ctx, obj, "mutation")?,
            subscription: opt_named_type_from(ctx, obj, "subscription")?,
            loc,
        })),
        "SchemaExtension" => Ok(Definition::SchemaExtension(SchemaExtension {
            directives: directives_from(ctx, obj)?,
            query: opt_named_type_from(ctx, obj, "query")?,
            mutation: opt_named_type_from(ctx, obj, "mutation")?,
            subscription: opt_named_type_from(ctx, obj, "subscription")?,
            loc,
        })),
        "ScalarTypeDefinition" => Ok(Definition::Scalar(ScalarTypeDefinition {
            description: description_from(ctx, obj)?,
            name: named_type_from(ctx, obj.get("name").ok_or_else(|| invalid("missing name"))?)?,
            directives: directives_from(ctx, obj)?,
            loc,
        })),
        "ScalarTypeExtension" => Ok(Definition::ScalarExtension(ScalarTypeExtension {
            name: named_type_from(ctx, obj.get("name").ok_or_else(|| invalid("missing name"))?)?,
            directives: directives_from(ctx, obj)?,
            loc,
        })),
        "ObjectTypeDefinition" => Ok(Definition::Object(ObjectTypeDefinition {
            description: description_from(ctx, obj)?,
            name: named_type_from(ctx, obj.get("name").ok_or_else(|| invalid("missing name"))?)?,
            interfaces: named_types_from(ctx, obj, "interfaces")?,
            directives: directives_from(ctx, obj)?,
            fields: field_definitions_from(ctx, obj)?,
            loc,
        })),
        "ObjectTypeExtension" => Ok(Definition::ObjectExtension(ObjectTypeExtension {
            name: named_type_from(ctx, obj.get("name").ok_or_else(|| invalid("missing name"))?)?,
            interfaces: named_types_from(ctx, obj, "interfaces")?,
            directives: directives_from(ctx, obj)?,
            fields: field_definitions_from(ctx, obj)?,
            loc,
        })),
        "InterfaceTypeDefinition" => Ok(Definition::Interface(InterfaceTypeDefinition {
            description: description_from(ctx, obj)?,
            name: named_type_from(ctx, obj.get("name").ok_or_else(|| invalid("missing name"))?)?,
            interfaces: named_types_from(ctx, obj, "interfaces")?,
            directives: directives_from(ctx, obj)?,
            fields: field_definitions_from(ctx, obj)?,
            loc,
        })),
        "InterfaceTypeExtension" => Ok(Definition::InterfaceExtension(InterfaceTypeExtension {
            name: named_type_from(ctx, obj.get("name").ok_or_else(|| invalid("missing name"))?)?,
            interfaces: named_types_from(ctx, obj, "interfaces")?,
            directives: directives_from(ctx, obj)?,
            fields: field_definitions_from(ctx, obj)?,
            loc,
        })),
        "UnionTypeDefinition" => Ok(Definition::Union(UnionTypeDefinition {
            description: description_from(ctx, obj)?,
            name: named_type_from(ctx, obj.get("name").ok_or_else(|| invalid("missing name"))?)?,
            directives: directives_from(ctx, obj)?,
            types: named_types_from(ctx, obj, "types")?,
            loc,
        })),
        "UnionTypeExtension" => Ok(Definition::UnionExtension(UnionTypeExtension {
            name: named_type_from(ctx, obj.get("name").ok_or_else(|| invalid("missing name"))?)?,
            directives: directives_from(ctx, obj)?,
            types: named_types_from(ctx, obj, "types")?,
            loc,
        })),
        "EnumTypeDefinition" => Ok(Definition::Enum(EnumTypeDefinition {
            description: description_from(ctx, obj)?,
            name: named_type_from(ctx, obj.get("name").ok_or_else(|| invalid("missing name"))?)?,
            directives: directives_from(ctx, obj)?,
            values: enum_values_from(ctx, obj)?,
            loc,
        })),
        "EnumTypeExtension" => Ok(Definition::EnumExtension(EnumTypeExtension {
            name: named_type_from(ctx, obj.get("name").ok_or_else(|| invalid("missing name"))?)?,
            directives: directives_from(ctx, obj)?,
            values: enum_values_from(ctx, obj)?,
            loc,
        })),
        "InputObjectTypeDefinition" => Ok(Definition::InputObject(InputObjectTypeDefinition {
            description: description_from(ctx, obj)?,
            name: named_type_from(ctx, obj.get("name").ok_or_else(|| invalid("missing name"))?)?,
            directives: directives_from(ctx, obj)?,
            fields: input_value_definitions_from(ctx, obj, "fields")?,
            loc,
        })),
        "InputObjectTypeExtension" => {
            Ok(Definition::InputObjectExtension(InputObjectTypeExtension {
                name: named_type_from(
                    ctx,
                    obj.get("name").ok_or_else(|| invalid("missing name"))?,
                )?,
                directives: directives_from(ctx, obj)?,
                fields: input_value_definitions_from(ctx, obj, "fields")?,
                loc,
            }))
        }
        "DirectiveDefinition" => {
            let mut locations = Vec::new_in(&ctx.arena);
            for location in array(obj, "locations")? {
                let location = location
                    .as_str()
                    .ok_or_else(|| invalid("malformed directive location"))?;
                locations.push(ctx.alloc_str(location));
            }
            Ok(Definition::Directive(DirectiveDefinition {
                description: description_from(ctx, obj)?,
                name: ctx.alloc_str(string(obj, "name")?),
                arguments: input_value_definitions_from(ctx, obj, "arguments")?,
                repeatable: boolean(obj, "repeatable")?,
                locations,
                loc,
            }))
        }
        kind => Err(invalid(&format!("unknown definition kind {kind}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{ParseNode, PrintNode};

    #[test]
    fn documents_round_trip_through_json() {
        let ctx = ASTContext::new();
        let source = "query Q($x: [Int!] = [1, 2]) @dir {\n  a: b(obj: {k: \"v\"}) {\n    ...F\n    ... on T {\n      c\n    }\n  }\n}\n\nfragment F on T {\n  d @skip(if: $x)\n}";
        let document = Document::parse(&ctx, source).unwrap();

        let json = document_to_json(document);
        let restored = document_from_json(&ctx, &json).unwrap();

        assert_eq!(document, restored);
        assert_eq!(document.print(), restored.print());
    }

    #[test]
    fn type_system_definitions_round_trip_through_json() {
        let ctx = ASTContext::new();
        let source = indoc::indoc! {r#"
            "Docs"
            type User implements Node {
              id: ID!
              tags(first: Int = 10): [String]
            }

            enum Role {
              ADMIN
              MEMBER
            }

            union Any = User

            input Filter {
              q: String
            }

            directive @cost(value: Int!) repeatable on FIELD | OBJECT

            schema {
              query: User
            }

            extend type User @deprecated
        "#};
        let document = Document::parse(&ctx, source).unwrap();

        let json = document_to_json(document);
        let restored = document_from_json(&ctx, &json).unwrap();

        assert_eq!(document, restored);
        assert_eq!(document.print(), restored.print());
    }

    #[test]
    fn positions_survive_the_round_trip() {
        let ctx = ASTContext::new();
        let document = Document::parse(&ctx, "{\n  field\n}").unwrap();
        let json = document_to_json(document);
        let restored = document_from_json(&ctx, &json).unwrap();

        let operation = restored.operation(None).unwrap();
        let field = operation.selection_set.selections[0].field().unwrap();
        assert_eq!((field.loc.line, field.loc.column), (2, 3));
    }

    #[test]
    fn malformed_json_is_rejected() {
        let ctx = ASTContext::new();
        let error = document_from_json(&ctx, &serde_json::json!({"kind": "Nope"})).unwrap_err();
        assert!(error.message().starts_with("Invalid serialized document"));

        let error = document_from_json(&ctx, &serde_json::json!([1, 2])).unwrap_err();
        assert!(error.message().starts_with("Invalid serialized document"));
    }
}
