use hashbrown::HashMap;

use crate::ast::*;

/// A visitor signal that is returned from [Visitor] callbacks to alter the flow of traversal.
///
/// Callbacks return `VisitFlow::Next` to continue the depth-first traversal. An enter callback
/// may instead return `VisitFlow::Skip` to skip over the current node's children. Leave callbacks
/// still run for a skipped node, so paired enter and leave hooks always balance.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum VisitFlow {
    /// Continue visiting nodes as usual.
    Next,
    /// Skip over the current node's children without visiting them.
    /// (Only applies to enter callbacks)
    Skip,
}

/// A borrowed reference to any visitable AST node.
///
/// References carry the AST context's lifetime and are handed to visitor callbacks together with
/// the node's parent. The [`NodeRef::kind`] method returns the matching [ASTKind], which is also
/// the key under which callbacks are registered.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Document(&'a Document<'a>),
    OperationDefinition(&'a OperationDefinition<'a>),
    FragmentDefinition(&'a FragmentDefinition<'a>),
    VariableDefinition(&'a VariableDefinition<'a>),
    SelectionSet(&'a SelectionSet<'a>),
    Field(&'a Field<'a>),
    FragmentSpread(&'a FragmentSpread<'a>),
    InlineFragment(&'a InlineFragment<'a>),
    Directive(&'a Directive<'a>),
    Argument(&'a Argument<'a>),
    Variable(&'a Variable<'a>),
    NamedType(&'a NamedType<'a>),
    String(&'a StringValue<'a>),
    Int(&'a IntValue<'a>),
    Float(&'a FloatValue<'a>),
    Boolean(&'a BooleanValue),
    Null(&'a NullValue),
    Enum(&'a EnumValue<'a>),
    List(&'a ListValue<'a>),
    Object(&'a ObjectValue<'a>),
    ObjectField(&'a ObjectField<'a>),
    SchemaDefinition(&'a SchemaDefinition<'a>),
    ScalarTypeDefinition(&'a ScalarTypeDefinition<'a>),
    ObjectTypeDefinition(&'a ObjectTypeDefinition<'a>),
    InterfaceTypeDefinition(&'a InterfaceTypeDefinition<'a>),
    UnionTypeDefinition(&'a UnionTypeDefinition<'a>),
    EnumTypeDefinition(&'a EnumTypeDefinition<'a>),
    InputObjectTypeDefinition(&'a InputObjectTypeDefinition<'a>),
    DirectiveDefinition(&'a DirectiveDefinition<'a>),
    SchemaExtension(&'a SchemaExtension<'a>),
    ScalarTypeExtension(&'a ScalarTypeExtension<'a>),
    ObjectTypeExtension(&'a ObjectTypeExtension<'a>),
    InterfaceTypeExtension(&'a InterfaceTypeExtension<'a>),
    UnionTypeExtension(&'a UnionTypeExtension<'a>),
    EnumTypeExtension(&'a EnumTypeExtension<'a>),
    InputObjectTypeExtension(&'a InputObjectTypeExtension<'a>),
    FieldDefinition(&'a FieldDefinition<'a>),
    InputValueDefinition(&'a InputValueDefinition<'a>),
    EnumValueDefinition(&'a EnumValueDefinition<'a>),
}

impl<'a> NodeRef<'a> {
    /// The [ASTKind] identifying this node, which callbacks are registered under.
    pub fn kind(&self) -> ASTKind {
        match self {
            NodeRef::Document(_) => ASTKind::Document,
            NodeRef::OperationDefinition(_) => ASTKind::OperationDefinition,
            NodeRef::FragmentDefinition(_) => ASTKind::FragmentDefinition,
            NodeRef::VariableDefinition(_) => ASTKind::VariableDefinition,
            NodeRef::SelectionSet(_) => ASTKind::SelectionSet,
            NodeRef::Field(_) => ASTKind::Field,
            NodeRef::FragmentSpread(_) => ASTKind::FragmentSpread,
            NodeRef::InlineFragment(_) => ASTKind::InlineFragment,
            NodeRef::Directive(_) => ASTKind::Directive,
            NodeRef::Argument(_) => ASTKind::Argument,
            NodeRef::Variable(_) => ASTKind::Variable,
            NodeRef::NamedType(_) => ASTKind::NamedType,
            NodeRef::String(_) => ASTKind::String,
            NodeRef::Int(_) => ASTKind::Int,
            NodeRef::Float(_) => ASTKind::Float,
            NodeRef::Boolean(_) => ASTKind::Boolean,
            NodeRef::Null(_) => ASTKind::Null,
            NodeRef::Enum(_) => ASTKind::Enum,
            NodeRef::List(_) => ASTKind::List,
            NodeRef::Object(_) => ASTKind::Object,
            NodeRef::ObjectField(_) => ASTKind::ObjectField,
            NodeRef::SchemaDefinition(_) => ASTKind::SchemaDefinition,
            NodeRef::ScalarTypeDefinition(_) => ASTKind::ScalarTypeDefinition,
            NodeRef::ObjectTypeDefinition(_) => ASTKind::ObjectTypeDefinition,
            NodeRef::InterfaceTypeDefinition(_) => ASTKind::InterfaceTypeDefinition,
            NodeRef::UnionTypeDefinition(_) => ASTKind::UnionTypeDefinition,
            NodeRef::EnumTypeDefinition(_) => ASTKind::EnumTypeDefinition,
            NodeRef::InputObjectTypeDefinition(_) => ASTKind::InputObjectTypeDefinition,
            NodeRef::DirectiveDefinition(_) => ASTKind::DirectiveDefinition,
            NodeRef::SchemaExtension(_) => ASTKind::SchemaExtension,
            NodeRef::ScalarTypeExtension(_) => ASTKind::ScalarTypeExtension,
            NodeRef::ObjectTypeExtension(_) => ASTKind::ObjectTypeExtension,
            NodeRef::InterfaceTypeExtension(_) => ASTKind::InterfaceTypeExtension,
            NodeRef::UnionTypeExtension(_) => ASTKind::UnionTypeExtension,
            NodeRef::EnumTypeExtension(_) => ASTKind::EnumTypeExtension,
            NodeRef::InputObjectTypeExtension(_) => ASTKind::InputObjectTypeExtension,
            NodeRef::FieldDefinition(_) => ASTKind::FieldDefinition,
            NodeRef::InputValueDefinition(_) => ASTKind::InputValueDefinition,
            NodeRef::EnumValueDefinition(_) => ASTKind::EnumValueDefinition,
        }
    }
}

/// A registered visitor callback. It receives the visited node and its parent, and returns a
/// [VisitFlow] signal.
pub type VisitFn<'a> = Box<dyn FnMut(NodeRef<'a>, Option<NodeRef<'a>>) -> VisitFlow + 'a>;

type Fragments<'a> = HashMap<
    &'a str,
    &'a FragmentDefinition<'a>,
    hashbrown::hash_map::DefaultHashBuilder,
    &'a bumpalo::Bump,
>;

/// A depth-first AST traversal with dynamically registered callbacks.
///
/// Callbacks are registered per node kind under the node's [ASTKind], or for every node via
/// [`Visitor::on_enter_any`] and [`Visitor::on_leave_any`]. While the AST is traversed in
/// depth-first document order, enter callbacks are called from top-to-bottom while the traversal
/// is recursing, and leave callbacks are called from bottom-to-top while it is returning.
///
/// ```
/// use graphql_language::{ast::*, visit::*};
///
/// let ctx = ASTContext::new();
/// let document = Document::parse(&ctx, "{ a b }").unwrap();
///
/// let fields = std::cell::Cell::new(0);
/// let mut visitor = Visitor::new();
/// visitor.on_enter(ASTKind::Field, |_node, _parent| {
///     fields.set(fields.get() + 1);
///     VisitFlow::Next
/// });
/// visitor.visit(&ctx, document);
/// assert_eq!(fields.get(), 2);
/// ```
#[derive(Default)]
pub struct Visitor<'a> {
    enter: HashMap<ASTKind, Vec<VisitFn<'a>>>,
    leave: HashMap<ASTKind, Vec<VisitFn<'a>>>,
    enter_any: Vec<VisitFn<'a>>,
    leave_any: Vec<VisitFn<'a>>,
    follow_fragments: bool,
}

impl<'a> Visitor<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback that runs when a node of the given kind is entered, before its
    /// children are visited.
    pub fn on_enter<F>(&mut self, kind: ASTKind, callback: F) -> &mut Self
    where
        F: FnMut(NodeRef<'a>, Option<NodeRef<'a>>) -> VisitFlow + 'a,
    {
        self.enter.entry(kind).or_default().push(Box::new(callback));
        self
    }

    /// Registers a callback that runs when a node of the given kind is left, after its children
    /// were visited.
    pub fn on_leave<F>(&mut self, kind: ASTKind, callback: F) -> &mut Self
    where
        F: FnMut(NodeRef<'a>, Option<NodeRef<'a>>) -> VisitFlow + 'a,
    {
        self.leave.entry(kind).or_default().push(Box::new(callback));
        self
    }

    /// Registers a callback that runs when any node is entered, before kind-specific callbacks.
    pub fn on_enter_any<F>(&mut self, callback: F) -> &mut Self
    where
        F: FnMut(NodeRef<'a>, Option<NodeRef<'a>>) -> VisitFlow + 'a,
    {
        self.enter_any.push(Box::new(callback));
        self
    }

    /// Registers a callback that runs when any node is left, after kind-specific callbacks.
    pub fn on_leave_any<F>(&mut self, callback: F) -> &mut Self
    where
        F: FnMut(NodeRef<'a>, Option<NodeRef<'a>>) -> VisitFlow + 'a,
    {
        self.leave_any.push(Box::new(callback));
        self
    }

    /// When enabled, the traversal descends from a [FragmentSpread] into the selection set of the
    /// named [FragmentDefinition]. Fragment cycles are visited once and not followed further.
    pub fn follow_fragments(&mut self, follow: bool) -> &mut Self {
        self.follow_fragments = follow;
        self
    }

    /// Traverses the document in depth-first document order, running registered callbacks.
    pub fn visit(&mut self, ctx: &'a ASTContext, document: &'a Document<'a>) {
        let fragments = document.fragments(ctx);
        let mut active = Vec::new();
        self.visit_node(
            NodeRef::Document(document),
            None,
            &fragments,
            &mut active,
        );
    }

    fn run_enter(&mut self, node: NodeRef<'a>, parent: Option<NodeRef<'a>>) -> VisitFlow {
        // A Skip suppresses all remaining enter callbacks for this node, not just its children.
        for callback in self.enter_any.iter_mut() {
            if callback(node, parent) == VisitFlow::Skip {
                return VisitFlow::Skip;
            }
        }
        if let Some(callbacks) = self.enter.get_mut(&node.kind()) {
            for callback in callbacks.iter_mut() {
                if callback(node, parent) == VisitFlow::Skip {
                    return VisitFlow::Skip;
                }
            }
        }
        VisitFlow::Next
    }

    fn run_leave(&mut self, node: NodeRef<'a>, parent: Option<NodeRef<'a>>) {
        if let Some(callbacks) = self.leave.get_mut(&node.kind()) {
            for callback in callbacks.iter_mut() {
                callback(node, parent);
            }
        }
        for callback in self.leave_any.iter_mut() {
            callback(node, parent);
        }
    }

    fn visit_node(
        &mut self,
        node: NodeRef<'a>,
        parent: Option<NodeRef<'a>>,
        fragments: &Fragments<'a>,
        active: &mut Vec<&'a str>,
    ) {
        if self.run_enter(node, parent) == VisitFlow::Next {
            self.visit_children(node, fragments, active);
        }
        self.run_leave(node, parent);
    }

    fn visit_value(
        &mut self,
        value: &'a Value<'a>,
        parent: NodeRef<'a>,
        fragments: &Fragments<'a>,
        active: &mut Vec<&'a str>,
    ) {
        let node = match value {
            Value::Variable(variable) => NodeRef::Variable(variable),
            Value::String(string) => NodeRef::String(string),
            Value::Float(float) => NodeRef::Float(float),
            Value::Int(int) => NodeRef::Int(int),
            Value::Boolean(boolean) => NodeRef::Boolean(boolean),
            Value::Null(null) => NodeRef::Null(null),
            Value::Enum(value) => NodeRef::Enum(value),
            Value::List(list) => NodeRef::List(list),
            Value::Object(object) => NodeRef::Object(object),
        };
        self.visit_node(node, Some(parent), fragments, active);
    }

    fn visit_selection_set(
        &mut self,
        selection_set: &'a SelectionSet<'a>,
        parent: NodeRef<'a>,
        fragments: &Fragments<'a>,
        active: &mut Vec<&'a str>,
    ) {
        if !selection_set.is_empty() {
            self.visit_node(
                NodeRef::SelectionSet(selection_set),
                Some(parent),
                fragments,
                active,
            );
        }
    }

    /// Visits the children of a node, in document order.
    fn visit_children(
        &mut self,
        node: NodeRef<'a>,
        fragments: &Fragments<'a>,
        active: &mut Vec<&'a str>,
    ) {
        let parent = Some(node);
        match node {
            NodeRef::Document(document) => {
                for definition in document.definitions.iter() {
                    let child = match definition {
                        Definition::Operation(operation) => {
                            NodeRef::OperationDefinition(operation)
                        }
                        Definition::Fragment(fragment) => NodeRef::FragmentDefinition(fragment),
                        Definition::Schema(schema) => NodeRef::SchemaDefinition(schema),
                        Definition::Scalar(scalar) => NodeRef::ScalarTypeDefinition(scalar),
                        Definition::Object(object) => NodeRef::ObjectTypeDefinition(object),
                        Definition::Interface(interface) => {
                            NodeRef::InterfaceTypeDefinition(interface)
                        }
                        Definition::Union(union) => NodeRef::UnionTypeDefinition(union),
                        Definition::Enum(r#enum) => NodeRef::EnumTypeDefinition(r#enum),
                        Definition::InputObject(input) => {
                            NodeRef::InputObjectTypeDefinition(input)
                        }
                        Definition::Directive(directive) => {
                            NodeRef::DirectiveDefinition(directive)
                        }
                        Definition::SchemaExtension(extension) => {
                            NodeRef::SchemaExtension(extension)
                        }
                        Definition::ScalarExtension(extension) => {
                            NodeRef::ScalarTypeExtension(extension)
                        }
                        Definition::ObjectExtension(extension) => {
                            NodeRef::ObjectTypeExtension(extension)
                        }
                        Definition::InterfaceExtension(extension) => {
                            NodeRef::InterfaceTypeExtension(extension)
                        }
                        Definition::UnionExtension(extension) => {
                            NodeRef::UnionTypeExtension(extension)
                        }
                        Definition::EnumExtension(extension) => {
                            NodeRef::EnumTypeExtension(extension)
                        }
                        Definition::InputObjectExtension(extension) => {
                            NodeRef::InputObjectTypeExtension(extension)
                        }
                    };
                    self.visit_node(child, parent, fragments, active);
                }
            }

            NodeRef::OperationDefinition(operation) => {
                for var_def in operation.variable_definitions.children.iter() {
                    self.visit_node(NodeRef::VariableDefinition(var_def), parent, fragments, active);
                }
                for directive in operation.directives.children.iter() {
                    self.visit_node(NodeRef::Directive(directive), parent, fragments, active);
                }
                self.visit_selection_set(&operation.selection_set, node, fragments, active);
            }

            NodeRef::FragmentDefinition(fragment) => {
                self.visit_node(
                    NodeRef::NamedType(&fragment.type_condition),
                    parent,
                    fragments,
                    active,
                );
                for directive in fragment.directives.children.iter() {
                    self.visit_node(NodeRef::Directive(directive), parent, fragments, active);
                }
                self.visit_selection_set(&fragment.selection_set, node, fragments, active);
            }

            NodeRef::VariableDefinition(var_def) => {
                self.visit_node(NodeRef::Variable(&var_def.variable), parent, fragments, active);
                self.visit_node(
                    NodeRef::NamedType(var_def.of_type.of_type()),
                    parent,
                    fragments,
                    active,
                );
                if !var_def.default_value.is_null() {
                    self.visit_value(&var_def.default_value, node, fragments, active);
                }
                for directive in var_def.directives.children.iter() {
                    self.visit_node(NodeRef::Directive(directive), parent, fragments, active);
                }
            }

            NodeRef::SelectionSet(selection_set) => {
                for selection in selection_set.selections.iter() {
                    let child = match selection {
                        Selection::Field(field) => NodeRef::Field(field),
                        Selection::FragmentSpread(spread) => NodeRef::FragmentSpread(spread),
                        Selection::InlineFragment(inline) => NodeRef::InlineFragment(inline),
                    };
                    self.visit_node(child, parent, fragments, active);
                }
            }

            NodeRef::Field(field) => {
                for argument in field.arguments.children.iter() {
                    self.visit_node(NodeRef::Argument(argument), parent, fragments, active);
                }
                for directive in field.directives.children.iter() {
                    self.visit_node(NodeRef::Directive(directive), parent, fragments, active);
                }
                self.visit_selection_set(&field.selection_set, node, fragments, active);
            }

            NodeRef::FragmentSpread(spread) => {
                self.visit_node(NodeRef::NamedType(&spread.name), parent, fragments, active);
                for directive in spread.directives.children.iter() {
                    self.visit_node(NodeRef::Directive(directive), parent, fragments, active);
                }
                if self.follow_fragments {
                    if let Some(fragment) = fragments.get(spread.name.name) {
                        if !active.contains(&fragment.name.name) {
                            active.push(fragment.name.name);
                            self.visit_selection_set(
                                &fragment.selection_set,
                                node,
                                fragments,
                                active,
                            );
                            active.pop();
                        }
                    }
                }
            }

            NodeRef::InlineFragment(inline) => {
                if let Some(type_condition) = &inline.type_condition {
                    self.visit_node(NodeRef::NamedType(type_condition), parent, fragments, active);
                }
                for directive in inline.directives.children.iter() {
                    self.visit_node(NodeRef::Directive(directive), parent, fragments, active);
                }
                self.visit_selection_set(&inline.selection_set, node, fragments, active);
            }

            NodeRef::Directive(directive) => {
                for argument in directive.arguments.children.iter() {
                    self.visit_node(NodeRef::Argument(argument), parent, fragments, active);
                }
            }

            NodeRef::Argument(argument) => {
                self.visit_value(&argument.value, node, fragments, active);
            }

            NodeRef::List(list) => {
                for value in list.children.iter() {
                    self.visit_value(value, node, fragments, active);
                }
            }

            NodeRef::Object(object) => {
                for field in object.children.iter() {
                    self.visit_node(NodeRef::ObjectField(field), parent, fragments, active);
                }
            }

            NodeRef::ObjectField(field) => {
                self.visit_value(&field.value, node, fragments, active);
            }

            NodeRef::SchemaDefinition(schema) => {
                for directive in schema.directives.children.iter() {
                    self.visit_node(NodeRef::Directive(directive), parent, fragments, active);
                }
                for root in [&schema.query, &schema.mutation, &schema.subscription]
                    .into_iter()
                    .flatten()
                {
                    self.visit_node(NodeRef::NamedType(root), parent, fragments, active);
                }
            }

            NodeRef::SchemaExtension(extension) => {
                for directive in extension.directives.children.iter() {
                    self.visit_node(NodeRef::Directive(directive), parent, fragments, active);
                }
                for root in [&extension.query, &extension.mutation, &extension.subscription]
                    .into_iter()
                    .flatten()
                {
                    self.visit_node(NodeRef::NamedType(root), parent, fragments, active);
                }
            }

            NodeRef::ScalarTypeDefinition(scalar) => {
                self.visit_node(NodeRef::NamedType(&scalar.name), parent, fragments, active);
                for directive in scalar.directives.children.iter() {
                    self.visit_node(NodeRef::Directive(directive), parent, fragments, active);
                }
            }

            NodeRef::ScalarTypeExtension(extension) => {
                self.visit_node(NodeRef::NamedType(&extension.name), parent, fragments, active);
                for directive in extension.directives.children.iter() {
                    self.visit_node(NodeRef::Directive(directive), parent, fragments, active);
                }
            }

            NodeRef::ObjectTypeDefinition(object) => {
                self.visit_node(NodeRef::NamedType(&object.name), parent, fragments, active);
                for interface in object.interfaces.iter() {
                    self.visit_node(NodeRef::NamedType(interface), parent, fragments, active);
                }
                for directive in object.directives.children.iter() {
                    self.visit_node(NodeRef::Directive(directive), parent, fragments, active);
                }
                for field in object.fields.iter() {
                    self.visit_node(NodeRef::FieldDefinition(field), parent, fragments, active);
                }
            }

            NodeRef::ObjectTypeExtension(extension) => {
                self.visit_node(NodeRef::NamedType(&extension.name), parent, fragments, active);
                for interface in extension.interfaces.iter() {
                    self.visit_node(NodeRef::NamedType(interface), parent, fragments, active);
                }
                for directive in extension.directives.children.iter() {
                    self.visit_node(NodeRef::Directive(directive), parent, fragments, active);
                }
                for field in extension.fields.iter() {
                    self.visit_node(NodeRef::FieldDefinition(field), parent, fragments, active);
                }
            }

            NodeRef::InterfaceTypeDefinition(interface) => {
                self.visit_node(NodeRef::NamedType(&interface.name), parent, fragments, active);
                for implemented in interface.interfaces.iter() {
                    self.visit_node(NodeRef::NamedType(implemented), parent, fragments, active);
                }
                for directive in interface.directives.children.iter() {
                    self.visit_node(NodeRef::Directive(directive), parent, fragments, active);
                }
                for field in interface.fields.iter() {
                    self.visit_node(NodeRef::FieldDefinition(field), parent, fragments, active);
                }
            }

            NodeRef::InterfaceTypeExtension(extension) => {
                self.visit_node(NodeRef::NamedType(&extension.name), parent, fragments, active);
                for implemented in extension.interfaces.iter() {
                    self.visit_node(NodeRef::NamedType(implemented), parent, fragments, active);
                }
                for directive in extension.directives.children.iter() {
                    self.visit_node(NodeRef::Directive(directive), parent, fragments, active);
                }
                for field in extension.fields.iter() {
                    self.visit_node(NodeRef::FieldDefinition(field), parent, fragments, active);
                }
            }

            NodeRef::UnionTypeDefinition(union) => {
                self.visit_node(NodeRef::NamedType(&union.name), parent, fragments, active);
                for directive in union.directives.children.iter() {
                    self.visit_node(NodeRef::Directive(directive), parent, fragments, active);
                }
                for member in union.types.iter() {
                    self.visit_node(NodeRef::NamedType(member), parent, fragments, active);
                }
            }

            NodeRef::UnionTypeExtension(extension) => {
                self.visit_node(NodeRef::NamedType(&extension.name), parent, fragments, active);
                for directive in extension.directives.children.iter() {
                    self.visit_node(NodeRef::Directive(directive), parent, fragments, active);
                }
                for member in extension.types.iter() {
                    self.visit_node(NodeRef::NamedType(member), parent, fragments, active);
                }
            }

            NodeRef::EnumTypeDefinition(r#enum) => {
                self.visit_node(NodeRef::NamedType(&r#enum.name), parent, fragments, active);
                for directive in r#enum.directives.children.iter() {
                    self.visit_node(NodeRef::Directive(directive), parent, fragments, active);
                }
                for value in r#enum.values.iter() {
                    self.visit_node(NodeRef::EnumValueDefinition(value), parent, fragments, active);
                }
            }

            NodeRef::EnumTypeExtension(extension) => {
                self.visit_node(NodeRef::NamedType(&extension.name), parent, fragments, active);
                for directive in extension.directives.children.iter() {
                    self.visit_node(NodeRef::Directive(directive), parent, fragments, active);
                }
                for value in extension.values.iter() {
                    self.visit_node(NodeRef::EnumValueDefinition(value), parent, fragments, active);
                }
            }

            NodeRef::InputObjectTypeDefinition(input) => {
                self.visit_node(NodeRef::NamedType(&input.name), parent, fragments, active);
                for directive in input.directives.children.iter() {
                    self.visit_node(NodeRef::Directive(directive), parent, fragments, active);
                }
                for field in input.fields.iter() {
                    self.visit_node(NodeRef::InputValueDefinition(field), parent, fragments, active);
                }
            }

            NodeRef::InputObjectTypeExtension(extension) => {
                self.visit_node(NodeRef::NamedType(&extension.name), parent, fragments, active);
                for directive in extension.directives.children.iter() {
                    self.visit_node(NodeRef::Directive(directive), parent, fragments, active);
                }
                for field in extension.fields.iter() {
                    self.visit_node(NodeRef::InputValueDefinition(field), parent, fragments, active);
                }
            }

            NodeRef::DirectiveDefinition(directive) => {
                for argument in directive.arguments.iter() {
                    self.visit_node(
                        NodeRef::InputValueDefinition(argument),
                        parent,
                        fragments,
                        active,
                    );
                }
            }

            NodeRef::FieldDefinition(field) => {
                for argument in field.arguments.iter() {
                    self.visit_node(
                        NodeRef::InputValueDefinition(argument),
                        parent,
                        fragments,
                        active,
                    );
                }
                self.visit_node(
                    NodeRef::NamedType(field.of_type.of_type()),
                    parent,
                    fragments,
                    active,
                );
                for directive in field.directives.children.iter() {
                    self.visit_node(NodeRef::Directive(directive), parent, fragments, active);
                }
            }

            NodeRef::InputValueDefinition(input) => {
                self.visit_node(
                    NodeRef::NamedType(input.of_type.of_type()),
                    parent,
                    fragments,
                    active,
                );
                if !input.default_value.is_null() {
                    self.visit_value(&input.default_value, node, fragments, active);
                }
                for directive in input.directives.children.iter() {
                    self.visit_node(NodeRef::Directive(directive), parent, fragments, active);
                }
            }

            NodeRef::EnumValueDefinition(value) => {
                self.visit_node(NodeRef::Enum(&value.value), parent, fragments, active);
                for directive in value.directives.children.iter() {
                    self.visit_node(NodeRef::Directive(directive), parent, fragments, active);
                }
            }

            // Leaf values carry no children.
            NodeRef::Variable(_)
            | NodeRef::NamedType(_)
            | NodeRef::String(_)
            | NodeRef::Int(_)
            | NodeRef::Float(_)
            | NodeRef::Boolean(_)
            | NodeRef::Null(_)
            | NodeRef::Enum(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;
    use crate::ast::{ASTContext, Document, ParseNode};

    #[test]
    fn counts_nodes_by_kind() {
        let ctx = ASTContext::new();
        let document =
            Document::parse(&ctx, "query A($x: Int = 2) { a b(arg: [1, 2]) @defer { c } }")
                .unwrap();

        let fields = Cell::new(0);
        let directives = Cell::new(0);
        let ints = Cell::new(0);
        let mut visitor = Visitor::new();
        visitor
            .on_enter(ASTKind::Field, |_, _| {
                fields.set(fields.get() + 1);
                VisitFlow::Next
            })
            .on_enter(ASTKind::Directive, |_, _| {
                directives.set(directives.get() + 1);
                VisitFlow::Next
            })
            .on_enter(ASTKind::Int, |_, _| {
                ints.set(ints.get() + 1);
                VisitFlow::Next
            });
        visitor.visit(&ctx, document);

        assert_eq!(fields.get(), 3);
        assert_eq!(directives.get(), 1);
        // The variable's default value and the two list elements
        assert_eq!(ints.get(), 3);
    }

    #[test]
    fn parents_are_passed_to_callbacks() {
        let ctx = ASTContext::new();
        let document = Document::parse(&ctx, "{ a(arg: 1) }").unwrap();

        let checked = Cell::new(false);
        let mut visitor = Visitor::new();
        visitor.on_enter(ASTKind::Argument, |_, parent| {
            assert!(matches!(parent, Some(NodeRef::Field(field)) if field.name == "a"));
            checked.set(true);
            VisitFlow::Next
        });
        visitor.visit(&ctx, document);
        assert!(checked.get());
    }

    #[test]
    fn enter_and_leave_bracket_children() {
        let ctx = ASTContext::new();
        let document = Document::parse(&ctx, "{ a { b } }").unwrap();

        let order = RefCell::new(Vec::new());
        let mut visitor = Visitor::new();
        visitor
            .on_enter(ASTKind::Field, |node, _| {
                if let NodeRef::Field(field) = node {
                    order.borrow_mut().push(format!("enter {}", field.name));
                }
                VisitFlow::Next
            })
            .on_leave(ASTKind::Field, |node, _| {
                if let NodeRef::Field(field) = node {
                    order.borrow_mut().push(format!("leave {}", field.name));
                }
                VisitFlow::Next
            });
        visitor.visit(&ctx, document);

        assert_eq!(
            *order.borrow(),
            vec!["enter a", "enter b", "leave b", "leave a"]
        );
    }

    #[test]
    fn skip_prevents_children_but_still_leaves() {
        let ctx = ASTContext::new();
        let document = Document::parse(&ctx, "{ a { b c } d }").unwrap();

        let entered = RefCell::new(Vec::new());
        let left = RefCell::new(Vec::new());
        let mut visitor = Visitor::new();
        visitor
            .on_enter(ASTKind::Field, |node, _| {
                if let NodeRef::Field(field) = node {
                    entered.borrow_mut().push(field.name);
                    if field.name == "a" {
                        return VisitFlow::Skip;
                    }
                }
                VisitFlow::Next
            })
            .on_leave(ASTKind::Field, |node, _| {
                if let NodeRef::Field(field) = node {
                    left.borrow_mut().push(field.name);
                }
                VisitFlow::Next
            });
        visitor.visit(&ctx, document);

        assert_eq!(*entered.borrow(), vec!["a", "d"]);
        // A skipped node still runs its leave callbacks.
        assert_eq!(*left.borrow(), vec!["a", "d"]);
    }

    #[test]
    fn skip_suppresses_remaining_enter_callbacks() {
        let ctx = ASTContext::new();
        let document = Document::parse(&ctx, "{ a }").unwrap();

        let later_enters = Cell::new(0);
        let left = Cell::new(0);
        let mut visitor = Visitor::new();
        visitor
            .on_enter(ASTKind::Field, |_, _| VisitFlow::Skip)
            .on_enter(ASTKind::Field, |_, _| {
                later_enters.set(later_enters.get() + 1);
                VisitFlow::Next
            })
            .on_leave(ASTKind::Field, |_, _| {
                left.set(left.get() + 1);
                VisitFlow::Next
            });
        visitor.visit(&ctx, document);

        // Enter callbacks registered after the one that skipped never run for that node.
        assert_eq!(later_enters.get(), 0);
        assert_eq!(left.get(), 1);
    }

    #[test]
    fn any_callbacks_see_every_node() {
        let ctx = ASTContext::new();
        let document = Document::parse(&ctx, "{ a }").unwrap();

        let enters = Cell::new(0);
        let leaves = Cell::new(0);
        let mut visitor = Visitor::new();
        visitor
            .on_enter_any(|_, _| {
                enters.set(enters.get() + 1);
                VisitFlow::Next
            })
            .on_leave_any(|_, _| {
                leaves.set(leaves.get() + 1);
                VisitFlow::Next
            });
        visitor.visit(&ctx, document);

        // Document, OperationDefinition, SelectionSet, Field
        assert_eq!(enters.get(), 4);
        assert_eq!(leaves.get(), 4);
    }

    #[test]
    fn follows_fragment_spreads() {
        let ctx = ASTContext::new();
        let document = Document::parse(
            &ctx,
            "{ ...Frag } fragment Frag on Query { a b }",
        )
        .unwrap();

        let without = Cell::new(0);
        let mut visitor = Visitor::new();
        visitor.on_enter(ASTKind::Field, |_, _| {
            without.set(without.get() + 1);
            VisitFlow::Next
        });
        visitor.visit(&ctx, document);
        // The fragment definition itself is visited once.
        assert_eq!(without.get(), 2);

        let with = Cell::new(0);
        let mut visitor = Visitor::new();
        visitor
            .follow_fragments(true)
            .on_enter(ASTKind::Field, |_, _| {
                with.set(with.get() + 1);
                VisitFlow::Next
            });
        visitor.visit(&ctx, document);
        // Once through the spread and once through the definition.
        assert_eq!(with.get(), 4);
    }

    #[test]
    fn fragment_cycles_terminate() {
        let ctx = ASTContext::new();
        let document = Document::parse(
            &ctx,
            "{ ...A } fragment A on Query { a ...B } fragment B on Query { b ...A }",
        )
        .unwrap();

        let spreads = Cell::new(0);
        let mut visitor = Visitor::new();
        visitor
            .follow_fragments(true)
            .on_enter(ASTKind::FragmentSpread, |_, _| {
                spreads.set(spreads.get() + 1);
                VisitFlow::Next
            });
        visitor.visit(&ctx, document);
        assert!(spreads.get() >= 3);
    }

    #[test]
    fn visits_type_system_definitions() {
        let ctx = ASTContext::new();
        let document = Document::parse(
            &ctx,
            "type Thing implements Node { id: ID! tags(first: Int = 10): [String] } enum Color { RED GREEN }",
        )
        .unwrap();

        let names = RefCell::new(Vec::new());
        let field_defs = Cell::new(0);
        let enum_values = Cell::new(0);
        let mut visitor = Visitor::new();
        visitor
            .on_enter(ASTKind::NamedType, |node, _| {
                if let NodeRef::NamedType(named) = node {
                    names.borrow_mut().push(named.name);
                }
                VisitFlow::Next
            })
            .on_enter(ASTKind::FieldDefinition, |_, _| {
                field_defs.set(field_defs.get() + 1);
                VisitFlow::Next
            })
            .on_enter(ASTKind::EnumValueDefinition, |_, _| {
                enum_values.set(enum_values.get() + 1);
                VisitFlow::Next
            });
        visitor.visit(&ctx, document);

        assert_eq!(field_defs.get(), 2);
        assert_eq!(enum_values.get(), 2);
        assert_eq!(
            *names.borrow(),
            vec!["Thing", "Node", "ID", "Int", "String", "Color"]
        );
    }
}
