use super::ast::*;
use super::lexer::{Lexer, Token, TokenKind};
use crate::error::{Error, Result};
use bumpalo::collections::Vec;

#[inline]
fn loc(token: &Token) -> Loc {
    Loc::new(token.line, token.column)
}

/// Token kinds that may start a value literal, for error messages.
const VALUE_START: &[TokenKind] = &[
    TokenKind::Dollar,
    TokenKind::Int,
    TokenKind::Float,
    TokenKind::String,
    TokenKind::Identifier,
    TokenKind::BracketOpen,
    TokenKind::BraceOpen,
    TokenKind::Null,
    TokenKind::True,
    TokenKind::False,
];

pub(crate) mod private {
    use super::{ASTContext, Error, Lexer, Result, Token, TokenKind};

    /// Private Parser context state that's kept to keep track of the current parser's progress and
    /// state. This contains the AST context's arena and a [Lexer].
    pub struct ParserContext<'a> {
        pub(crate) arena: &'a bumpalo::Bump,
        pub(crate) lexer: Lexer<'a>,
        pub(crate) peeked: Option<&'a Token<'a>>,
        pub(crate) in_var_def: bool,
    }

    impl<'a> ParserContext<'a> {
        /// Create a new Parser context for a given AST context and initialize it with an input
        /// source string to parse from.
        pub(crate) fn new(ctx: &'a ASTContext, source: &'a str) -> Self {
            ParserContext {
                arena: &ctx.arena,
                lexer: Lexer::new(ctx, source),
                peeked: None,
                in_var_def: false,
            }
        }

        #[inline]
        pub(crate) fn next(&mut self) -> Result<&'a Token<'a>> {
            match self.peeked.take() {
                Some(token) => Ok(token),
                None => self.lexer.next(),
            }
        }

        #[inline]
        pub(crate) fn peek(&mut self) -> Result<&'a Token<'a>> {
            match self.peeked {
                Some(token) => Ok(token),
                None => {
                    let token = self.lexer.next()?;
                    self.peeked = Some(token);
                    Ok(token)
                }
            }
        }

        /// Consumes the next token and checks it against the expected kind.
        #[inline]
        pub(crate) fn expect(&mut self, kind: TokenKind) -> Result<&'a Token<'a>> {
            let token = self.next()?;
            if token.kind == kind {
                Ok(token)
            } else {
                Err(self.unexpected(token, &[kind]))
            }
        }

        /// Consumes the next token, accepting any name, including contextual keywords.
        #[inline]
        pub(crate) fn next_name(&mut self) -> Result<&'a Token<'a>> {
            let token = self.next()?;
            if token.kind.is_name() {
                Ok(token)
            } else {
                Err(self.unexpected(token, &[TokenKind::Identifier]))
            }
        }

        /// Builds a positioned syntax error for a token that matched none of the expected kinds.
        pub(crate) fn unexpected(&self, token: &Token<'a>, expected: &[TokenKind]) -> Error {
            Error::unexpected_token(
                self.lexer.source(),
                expected,
                token.kind,
                token.value,
                token.location(),
            )
        }

        #[inline]
        pub(crate) fn offset(&self) -> usize {
            self.lexer.offset()
        }
    }

    /// (Private) Trait for parsing AST Nodes from a Parser Context.
    /// The [`super::ParseNode`] trait implements the public `parse` method instead.
    pub trait ParseNode<'a>: Sized {
        fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<Self>;
    }
}

use private::ParseNode as _;
use private::ParserContext;

/// Trait for parsing AST Nodes from source texts using recursive descent and a lexer.
///
/// This trait is implemented by all AST Nodes and can hence be used to granularly parse GraphQL
/// language. However, mostly this will be used via `Document::parse`.
pub trait ParseNode<'a>: private::ParseNode<'a> {
    /// Parse an input source text into the implementor's AST Node structure and allocate the
    /// resulting AST into the current AST Context's arena.
    ///
    /// The first failure aborts the parse; no partial AST is returned.
    fn parse<T: ToString>(ctx: &'a ASTContext, source: T) -> Result<&'a Self> {
        let source = ctx.alloc_string(source.to_string());
        let mut parser_ctx = ParserContext::new(ctx, source);
        let value = Self::new_with_ctx(&mut parser_ctx)?;
        Ok(ctx.alloc(value))
    }
}

impl<'a, T: private::ParseNode<'a>> ParseNode<'a> for T {}

impl<'a> private::ParseNode<'a> for BooleanValue {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<BooleanValue> {
        let token = ctx.next()?;
        match token.kind {
            TokenKind::True => Ok(BooleanValue {
                value: true,
                loc: loc(token),
            }),
            TokenKind::False => Ok(BooleanValue {
                value: false,
                loc: loc(token),
            }),
            _ => Err(ctx.unexpected(token, &[TokenKind::True, TokenKind::False])),
        }
    }
}

impl<'a> private::ParseNode<'a> for NullValue {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<NullValue> {
        let token = ctx.expect(TokenKind::Null)?;
        Ok(NullValue { loc: loc(token) })
    }
}

impl<'a> private::ParseNode<'a> for EnumValue<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<EnumValue<'a>> {
        let token = ctx.next()?;
        match token.kind {
            TokenKind::True | TokenKind::False | TokenKind::Null => {
                Err(ctx.unexpected(token, &[TokenKind::Identifier]))
            }
            kind if kind.is_name() => Ok(EnumValue {
                value: token.value,
                loc: loc(token),
            }),
            _ => Err(ctx.unexpected(token, &[TokenKind::Identifier])),
        }
    }
}

impl<'a> private::ParseNode<'a> for FloatValue<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<FloatValue<'a>> {
        let token = ctx.expect(TokenKind::Float)?;
        Ok(FloatValue {
            value: token.value,
            loc: loc(token),
        })
    }
}

impl<'a> private::ParseNode<'a> for IntValue<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<IntValue<'a>> {
        let token = ctx.expect(TokenKind::Int)?;
        Ok(IntValue {
            value: token.value,
            loc: loc(token),
        })
    }
}

impl<'a> private::ParseNode<'a> for StringValue<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<StringValue<'a>> {
        let token = ctx.next()?;
        match token.kind {
            TokenKind::String | TokenKind::BlockString => Ok(StringValue {
                value: token.value,
                loc: loc(token),
            }),
            _ => Err(ctx.unexpected(token, &[TokenKind::String])),
        }
    }
}

impl<'a> private::ParseNode<'a> for Variable<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<Variable<'a>> {
        let dollar = ctx.expect(TokenKind::Dollar)?;
        let name = ctx.next_name()?;
        Ok(Variable {
            name: name.value,
            loc: loc(dollar),
        })
    }
}

impl<'a> private::ParseNode<'a> for Value<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<Value<'a>> {
        let in_var_def = ctx.in_var_def;
        let token = ctx.peek()?;
        match token.kind {
            TokenKind::Null => NullValue::new_with_ctx(ctx).map(Value::Null),
            TokenKind::Dollar if in_var_def => {
                // Default values must be static and cannot refer to other variables.
                Err(ctx.unexpected(token, &VALUE_START[1..]))
            }
            TokenKind::Dollar => Variable::new_with_ctx(ctx).map(Value::Variable),
            TokenKind::True | TokenKind::False => {
                BooleanValue::new_with_ctx(ctx).map(Value::Boolean)
            }
            TokenKind::Float => FloatValue::new_with_ctx(ctx).map(Value::Float),
            TokenKind::Int => IntValue::new_with_ctx(ctx).map(Value::Int),
            TokenKind::String | TokenKind::BlockString => {
                StringValue::new_with_ctx(ctx).map(Value::String)
            }
            TokenKind::BracketOpen => ListValue::new_with_ctx(ctx).map(Value::List),
            TokenKind::BraceOpen => ObjectValue::new_with_ctx(ctx).map(Value::Object),
            kind if kind.is_name() => EnumValue::new_with_ctx(ctx).map(Value::Enum),
            _ => Err(ctx.unexpected(token, VALUE_START)),
        }
    }
}

impl<'a> private::ParseNode<'a> for ObjectField<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<ObjectField<'a>> {
        let name = ctx.next_name()?;
        ctx.expect(TokenKind::Colon)?;
        let value = Value::new_with_ctx(ctx)?;
        Ok(ObjectField {
            name: name.value,
            value,
            loc: loc(name),
        })
    }
}

impl<'a> private::ParseNode<'a> for ObjectValue<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<ObjectValue<'a>> {
        let brace = ctx.expect(TokenKind::BraceOpen)?;
        let mut children = Vec::new_in(ctx.arena);
        while ctx.peek()?.kind != TokenKind::BraceClose {
            children.push(ObjectField::new_with_ctx(ctx)?);
        }
        ctx.next()?;
        Ok(ObjectValue {
            children,
            loc: loc(brace),
        })
    }
}

impl<'a> private::ParseNode<'a> for ListValue<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<ListValue<'a>> {
        let bracket = ctx.expect(TokenKind::BracketOpen)?;
        let mut children = Vec::new_in(ctx.arena);
        while ctx.peek()?.kind != TokenKind::BracketClose {
            children.push(Value::new_with_ctx(ctx)?);
        }
        ctx.next()?;
        Ok(ListValue {
            children,
            loc: loc(bracket),
        })
    }
}

impl<'a> private::ParseNode<'a> for Argument<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<Argument<'a>> {
        let name = ctx.next_name()?;
        ctx.expect(TokenKind::Colon)?;
        let value = Value::new_with_ctx(ctx)?;
        Ok(Argument {
            name: name.value,
            value,
            loc: loc(name),
        })
    }
}

impl<'a> private::ParseNode<'a> for Arguments<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<Arguments<'a>> {
        let mut children = Vec::new_in(ctx.arena);
        if ctx.peek()?.kind == TokenKind::ParenOpen {
            ctx.next()?;
            while ctx.peek()?.kind != TokenKind::ParenClose {
                children.push(Argument::new_with_ctx(ctx)?);
            }
            ctx.next()?;
        }
        Ok(Arguments { children })
    }
}

impl<'a> private::ParseNode<'a> for Directive<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<Directive<'a>> {
        let at = ctx.expect(TokenKind::At)?;
        let name = ctx.next_name()?;
        let arguments = Arguments::new_with_ctx(ctx)?;
        Ok(Directive {
            name: name.value,
            arguments,
            loc: loc(at),
        })
    }
}

impl<'a> private::ParseNode<'a> for Directives<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<Directives<'a>> {
        let mut children = Vec::new_in(ctx.arena);
        while ctx.peek()?.kind == TokenKind::At {
            children.push(Directive::new_with_ctx(ctx)?);
        }
        Ok(Directives { children })
    }
}

impl<'a> private::ParseNode<'a> for Field<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<Field<'a>> {
        let name_or_alias = ctx.next_name()?;
        let (alias, name) = if ctx.peek()?.kind == TokenKind::Colon {
            ctx.next()?;
            let name = ctx.next_name()?;
            (Some(name_or_alias.value), name.value)
        } else {
            (None, name_or_alias.value)
        };

        let arguments = Arguments::new_with_ctx(ctx)?;
        let directives = Directives::new_with_ctx(ctx)?;
        let selection_set = SelectionSet::new_with_ctx(ctx)?;

        Ok(Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
            loc: loc(name_or_alias),
        })
    }
}

impl<'a> private::ParseNode<'a> for NamedType<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<NamedType<'a>> {
        let token = ctx.next_name()?;
        Ok(NamedType {
            name: token.value,
            loc: loc(token),
        })
    }
}

impl<'a> private::ParseNode<'a> for FragmentSpread<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<FragmentSpread<'a>> {
        let mut spread_loc = None;
        if ctx.peek()?.kind == TokenKind::Spread {
            spread_loc = Some(loc(ctx.next()?));
        }
        let token = ctx.peek()?;
        if token.kind == TokenKind::On || !token.kind.is_name() {
            return Err(ctx.unexpected(token, &[TokenKind::Identifier]));
        }
        let name = NamedType::new_with_ctx(ctx)?;
        let directives = Directives::new_with_ctx(ctx)?;
        Ok(FragmentSpread {
            name,
            directives,
            loc: spread_loc.unwrap_or(name.loc),
        })
    }
}

impl<'a> private::ParseNode<'a> for InlineFragment<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<InlineFragment<'a>> {
        let mut spread_loc = None;
        if ctx.peek()?.kind == TokenKind::Spread {
            spread_loc = Some(loc(ctx.next()?));
        }
        let type_condition = if ctx.peek()?.kind == TokenKind::On {
            ctx.next()?;
            Some(NamedType::new_with_ctx(ctx)?)
        } else {
            None
        };
        let directives = Directives::new_with_ctx(ctx)?;
        let brace = ctx.peek()?;
        if brace.kind != TokenKind::BraceOpen {
            return Err(ctx.unexpected(brace, &[TokenKind::BraceOpen]));
        }
        let selection_set = SelectionSet::new_with_ctx(ctx)?;
        Ok(InlineFragment {
            type_condition,
            directives,
            selection_set,
            loc: spread_loc.unwrap_or_else(Loc::default),
        })
    }
}

impl<'a> private::ParseNode<'a> for Selection<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<Selection<'a>> {
        let token = ctx.peek()?;
        match token.kind {
            TokenKind::Spread => {
                let spread = ctx.next()?;
                let spread_loc = loc(spread);
                let next = ctx.peek()?;
                match next.kind {
                    // `... on`, `... @`, and `... {` open an inline fragment; any other name is
                    // a fragment spread.
                    TokenKind::On | TokenKind::At | TokenKind::BraceOpen => {
                        let mut fragment = InlineFragment::new_with_ctx(ctx)?;
                        fragment.loc = spread_loc;
                        Ok(Selection::InlineFragment(fragment))
                    }
                    kind if kind.is_name() => {
                        let mut spread = FragmentSpread::new_with_ctx(ctx)?;
                        spread.loc = spread_loc;
                        Ok(Selection::FragmentSpread(spread))
                    }
                    _ => Err(ctx.unexpected(next, &[TokenKind::Identifier, TokenKind::On])),
                }
            }
            kind if kind.is_name() => Field::new_with_ctx(ctx).map(Selection::Field),
            _ => Err(ctx.unexpected(token, &[TokenKind::Identifier, TokenKind::Spread])),
        }
    }
}

impl<'a> private::ParseNode<'a> for SelectionSet<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<SelectionSet<'a>> {
        let mut selections = Vec::new_in(ctx.arena);
        if ctx.peek()?.kind == TokenKind::BraceOpen {
            ctx.next()?;
            loop {
                selections.push(Selection::new_with_ctx(ctx)?);
                if ctx.peek()?.kind == TokenKind::BraceClose {
                    ctx.next()?;
                    break;
                }
            }
        }
        Ok(SelectionSet { selections })
    }
}

impl<'a> private::ParseNode<'a> for Type<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<Type<'a>> {
        let token = ctx.next()?;
        let of_type = if token.kind == TokenKind::BracketOpen {
            let inner = Type::new_with_ctx(ctx)?;
            ctx.expect(TokenKind::BracketClose)?;
            Type::ListType(ctx.arena.alloc(inner))
        } else if token.kind.is_name() {
            Type::NamedType(NamedType {
                name: token.value,
                loc: loc(token),
            })
        } else {
            return Err(ctx.unexpected(token, &[TokenKind::Identifier, TokenKind::BracketOpen]));
        };
        if ctx.peek()?.kind == TokenKind::Bang {
            ctx.next()?;
            Ok(Type::NonNullType(ctx.arena.alloc(of_type)))
        } else {
            Ok(of_type)
        }
    }
}

impl<'a> private::ParseNode<'a> for VariableDefinition<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<VariableDefinition<'a>> {
        let variable = Variable::new_with_ctx(ctx)?;
        ctx.expect(TokenKind::Colon)?;
        let of_type = Type::new_with_ctx(ctx)?;
        let default_value = if ctx.peek()?.kind == TokenKind::Equals {
            ctx.next()?;
            ctx.in_var_def = true;
            let value = Value::new_with_ctx(ctx)?;
            ctx.in_var_def = false;
            value
        } else {
            Value::null()
        };
        let directives = Directives::new_with_ctx(ctx)?;
        Ok(VariableDefinition {
            loc: variable.loc,
            variable,
            of_type,
            default_value,
            directives,
        })
    }
}

impl<'a> private::ParseNode<'a> for VariableDefinitions<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<VariableDefinitions<'a>> {
        let mut children = Vec::new_in(ctx.arena);
        if ctx.peek()?.kind == TokenKind::ParenOpen {
            ctx.next()?;
            loop {
                children.push(VariableDefinition::new_with_ctx(ctx)?);
                if ctx.peek()?.kind == TokenKind::ParenClose {
                    ctx.next()?;
                    break;
                }
            }
        }
        Ok(VariableDefinitions { children })
    }
}

impl<'a> private::ParseNode<'a> for FragmentDefinition<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<FragmentDefinition<'a>> {
        let keyword = ctx.expect(TokenKind::Fragment)?;
        let token = ctx.peek()?;
        // A fragment may not be named "on", which would be ambiguous with its type condition.
        if token.kind == TokenKind::On || !token.kind.is_name() {
            return Err(ctx.unexpected(token, &[TokenKind::Identifier]));
        }
        let name = NamedType::new_with_ctx(ctx)?;
        ctx.expect(TokenKind::On)?;
        let type_condition = NamedType::new_with_ctx(ctx)?;
        let directives = Directives::new_with_ctx(ctx)?;
        let brace = ctx.peek()?;
        if brace.kind != TokenKind::BraceOpen {
            return Err(ctx.unexpected(brace, &[TokenKind::BraceOpen]));
        }
        let selection_set = SelectionSet::new_with_ctx(ctx)?;
        Ok(FragmentDefinition {
            name,
            type_condition,
            directives,
            selection_set,
            loc: loc(keyword),
        })
    }
}

impl<'a> private::ParseNode<'a> for OperationKind {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<OperationKind> {
        let token = ctx.next()?;
        match token.kind {
            TokenKind::Query => Ok(OperationKind::Query),
            TokenKind::Mutation => Ok(OperationKind::Mutation),
            TokenKind::Subscription => Ok(OperationKind::Subscription),
            _ => Err(ctx.unexpected(
                token,
                &[
                    TokenKind::Query,
                    TokenKind::Mutation,
                    TokenKind::Subscription,
                ],
            )),
        }
    }
}

impl<'a> private::ParseNode<'a> for OperationDefinition<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<OperationDefinition<'a>> {
        let token = ctx.peek()?;
        let operation_loc = loc(token);
        let operation = match token.kind {
            TokenKind::BraceOpen => {
                let selection_set = SelectionSet::new_with_ctx(ctx)?;
                return Ok(OperationDefinition {
                    operation: OperationKind::Query,
                    name: None,
                    variable_definitions: VariableDefinitions::default_in(ctx.arena),
                    directives: Directives::default_in(ctx.arena),
                    selection_set,
                    loc: operation_loc,
                });
            }
            _ => OperationKind::new_with_ctx(ctx)?,
        };
        let name = if ctx.peek()?.kind.is_name() {
            Some(NamedType::new_with_ctx(ctx)?)
        } else {
            None
        };
        let variable_definitions = VariableDefinitions::new_with_ctx(ctx)?;
        let directives = Directives::new_with_ctx(ctx)?;
        let brace = ctx.peek()?;
        if brace.kind != TokenKind::BraceOpen {
            return Err(ctx.unexpected(brace, &[TokenKind::BraceOpen]));
        }
        let selection_set = SelectionSet::new_with_ctx(ctx)?;
        Ok(OperationDefinition {
            operation,
            name,
            variable_definitions,
            directives,
            selection_set,
            loc: operation_loc,
        })
    }
}

/// Parses an optional leading description string for type-system definitions.
fn parse_description<'a>(ctx: &mut ParserContext<'a>) -> Result<Option<StringValue<'a>>> {
    let token = ctx.peek()?;
    match token.kind {
        TokenKind::String | TokenKind::BlockString => {
            ctx.next()?;
            Ok(Some(StringValue {
                value: token.value,
                loc: loc(token),
            }))
        }
        _ => Ok(None),
    }
}

/// Parses an optional `implements A & B` interface list, with an optional leading `&`.
fn parse_implements<'a>(ctx: &mut ParserContext<'a>) -> Result<Vec<'a, NamedType<'a>>> {
    let mut interfaces = Vec::new_in(ctx.arena);
    if ctx.peek()?.kind == TokenKind::Implements {
        ctx.next()?;
        if ctx.peek()?.kind == TokenKind::Amp {
            ctx.next()?;
        }
        loop {
            interfaces.push(NamedType::new_with_ctx(ctx)?);
            if ctx.peek()?.kind == TokenKind::Amp {
                ctx.next()?;
            } else {
                break;
            }
        }
    }
    Ok(interfaces)
}

/// Parses an optional `{ ... }` block of field definitions.
fn parse_field_definitions<'a>(ctx: &mut ParserContext<'a>) -> Result<Vec<'a, FieldDefinition<'a>>> {
    let mut fields = Vec::new_in(ctx.arena);
    if ctx.peek()?.kind == TokenKind::BraceOpen {
        ctx.next()?;
        loop {
            fields.push(FieldDefinition::new_with_ctx(ctx)?);
            if ctx.peek()?.kind == TokenKind::BraceClose {
                ctx.next()?;
                break;
            }
        }
    }
    Ok(fields)
}

/// Parses an optional parenthesized list of input value definitions.
fn parse_argument_definitions<'a>(
    ctx: &mut ParserContext<'a>,
) -> Result<Vec<'a, InputValueDefinition<'a>>> {
    let mut arguments = Vec::new_in(ctx.arena);
    if ctx.peek()?.kind == TokenKind::ParenOpen {
        ctx.next()?;
        loop {
            arguments.push(InputValueDefinition::new_with_ctx(ctx)?);
            if ctx.peek()?.kind == TokenKind::ParenClose {
                ctx.next()?;
                break;
            }
        }
    }
    Ok(arguments)
}

/// Parses an optional `= A | B` union member list, with an optional leading `|`.
fn parse_union_members<'a>(ctx: &mut ParserContext<'a>) -> Result<Vec<'a, NamedType<'a>>> {
    let mut types = Vec::new_in(ctx.arena);
    if ctx.peek()?.kind == TokenKind::Equals {
        ctx.next()?;
        if ctx.peek()?.kind == TokenKind::Pipe {
            ctx.next()?;
        }
        loop {
            types.push(NamedType::new_with_ctx(ctx)?);
            if ctx.peek()?.kind == TokenKind::Pipe {
                ctx.next()?;
            } else {
                break;
            }
        }
    }
    Ok(types)
}

/// Parses an optional `{ ... }` block of enum value definitions.
fn parse_enum_values<'a>(ctx: &mut ParserContext<'a>) -> Result<Vec<'a, EnumValueDefinition<'a>>> {
    let mut values = Vec::new_in(ctx.arena);
    if ctx.peek()?.kind == TokenKind::BraceOpen {
        ctx.next()?;
        loop {
            values.push(EnumValueDefinition::new_with_ctx(ctx)?);
            if ctx.peek()?.kind == TokenKind::BraceClose {
                ctx.next()?;
                break;
            }
        }
    }
    Ok(values)
}

/// Parses an optional `{ ... }` block of input value definitions.
fn parse_input_fields<'a>(
    ctx: &mut ParserContext<'a>,
) -> Result<Vec<'a, InputValueDefinition<'a>>> {
    let mut fields = Vec::new_in(ctx.arena);
    if ctx.peek()?.kind == TokenKind::BraceOpen {
        ctx.next()?;
        loop {
            fields.push(InputValueDefinition::new_with_ctx(ctx)?);
            if ctx.peek()?.kind == TokenKind::BraceClose {
                ctx.next()?;
                break;
            }
        }
    }
    Ok(fields)
}

/// Parses the `query:`/`mutation:`/`subscription:` entries of a schema definition block into
/// the given slots.
fn parse_root_operation_types<'a>(
    ctx: &mut ParserContext<'a>,
    query: &mut Option<NamedType<'a>>,
    mutation: &mut Option<NamedType<'a>>,
    subscription: &mut Option<NamedType<'a>>,
) -> Result<()> {
    if ctx.peek()?.kind != TokenKind::BraceOpen {
        return Ok(());
    }
    ctx.next()?;
    while ctx.peek()?.kind != TokenKind::BraceClose {
        let token = ctx.next()?;
        let slot = match token.kind {
            TokenKind::Query => &mut *query,
            TokenKind::Mutation => &mut *mutation,
            TokenKind::Subscription => &mut *subscription,
            _ => {
                return Err(ctx.unexpected(
                    token,
                    &[
                        TokenKind::Query,
                        TokenKind::Mutation,
                        TokenKind::Subscription,
                    ],
                ))
            }
        };
        ctx.expect(TokenKind::Colon)?;
        *slot = Some(NamedType::new_with_ctx(ctx)?);
    }
    ctx.next()?;
    Ok(())
}

impl<'a> private::ParseNode<'a> for SchemaDefinition<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<SchemaDefinition<'a>> {
        let keyword = ctx.expect(TokenKind::Schema)?;
        let directives = Directives::new_with_ctx(ctx)?;
        let mut query = None;
        let mut mutation = None;
        let mut subscription = None;
        parse_root_operation_types(ctx, &mut query, &mut mutation, &mut subscription)?;
        Ok(SchemaDefinition {
            directives,
            query,
            mutation,
            subscription,
            loc: loc(keyword),
        })
    }
}

impl<'a> private::ParseNode<'a> for FieldDefinition<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<FieldDefinition<'a>> {
        let description = parse_description(ctx)?;
        let name = ctx.next_name()?;
        let arguments = parse_argument_definitions(ctx)?;
        ctx.expect(TokenKind::Colon)?;
        let of_type = Type::new_with_ctx(ctx)?;
        let directives = Directives::new_with_ctx(ctx)?;
        Ok(FieldDefinition {
            description,
            name: name.value,
            arguments,
            of_type,
            directives,
            loc: loc(name),
        })
    }
}

impl<'a> private::ParseNode<'a> for InputValueDefinition<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<InputValueDefinition<'a>> {
        let description = parse_description(ctx)?;
        let name = ctx.next_name()?;
        ctx.expect(TokenKind::Colon)?;
        let of_type = Type::new_with_ctx(ctx)?;
        let default_value = if ctx.peek()?.kind == TokenKind::Equals {
            ctx.next()?;
            ctx.in_var_def = true;
            let value = Value::new_with_ctx(ctx)?;
            ctx.in_var_def = false;
            value
        } else {
            Value::null()
        };
        let directives = Directives::new_with_ctx(ctx)?;
        Ok(InputValueDefinition {
            description,
            name: name.value,
            of_type,
            default_value,
            directives,
            loc: loc(name),
        })
    }
}

impl<'a> private::ParseNode<'a> for EnumValueDefinition<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<EnumValueDefinition<'a>> {
        let description = parse_description(ctx)?;
        let value = EnumValue::new_with_ctx(ctx)?;
        let directives = Directives::new_with_ctx(ctx)?;
        Ok(EnumValueDefinition {
            description,
            loc: value.loc,
            value,
            directives,
        })
    }
}

impl<'a> private::ParseNode<'a> for ScalarTypeDefinition<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<ScalarTypeDefinition<'a>> {
        let description = parse_description(ctx)?;
        let keyword = ctx.expect(TokenKind::Scalar)?;
        let name = NamedType::new_with_ctx(ctx)?;
        let directives = Directives::new_with_ctx(ctx)?;
        Ok(ScalarTypeDefinition {
            description,
            name,
            directives,
            loc: loc(keyword),
        })
    }
}

impl<'a> private::ParseNode<'a> for ObjectTypeDefinition<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<ObjectTypeDefinition<'a>> {
        let description = parse_description(ctx)?;
        let keyword = ctx.expect(TokenKind::Type)?;
        let name = NamedType::new_with_ctx(ctx)?;
        let interfaces = parse_implements(ctx)?;
        let directives = Directives::new_with_ctx(ctx)?;
        let fields = parse_field_definitions(ctx)?;
        Ok(ObjectTypeDefinition {
            description,
            name,
            interfaces,
            directives,
            fields,
            loc: loc(keyword),
        })
    }
}

impl<'a> private::ParseNode<'a> for InterfaceTypeDefinition<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<InterfaceTypeDefinition<'a>> {
        let description = parse_description(ctx)?;
        let keyword = ctx.expect(TokenKind::Interface)?;
        let name = NamedType::new_with_ctx(ctx)?;
        let interfaces = parse_implements(ctx)?;
        let directives = Directives::new_with_ctx(ctx)?;
        let fields = parse_field_definitions(ctx)?;
        Ok(InterfaceTypeDefinition {
            description,
            name,
            interfaces,
            directives,
            fields,
            loc: loc(keyword),
        })
    }
}

impl<'a> private::ParseNode<'a> for UnionTypeDefinition<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<UnionTypeDefinition<'a>> {
        let description = parse_description(ctx)?;
        let keyword = ctx.expect(TokenKind::Union)?;
        let name = NamedType::new_with_ctx(ctx)?;
        let directives = Directives::new_with_ctx(ctx)?;
        let types = parse_union_members(ctx)?;
        Ok(UnionTypeDefinition {
            description,
            name,
            directives,
            types,
            loc: loc(keyword),
        })
    }
}

impl<'a> private::ParseNode<'a> for EnumTypeDefinition<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<EnumTypeDefinition<'a>> {
        let description = parse_description(ctx)?;
        let keyword = ctx.expect(TokenKind::Enum)?;
        let name = NamedType::new_with_ctx(ctx)?;
        let directives = Directives::new_with_ctx(ctx)?;
        let values = parse_enum_values(ctx)?;
        Ok(EnumTypeDefinition {
            description,
            name,
            directives,
            values,
            loc: loc(keyword),
        })
    }
}

impl<'a> private::ParseNode<'a> for InputObjectTypeDefinition<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<InputObjectTypeDefinition<'a>> {
        let description = parse_description(ctx)?;
        let keyword = ctx.expect(TokenKind::Input)?;
        let name = NamedType::new_with_ctx(ctx)?;
        let directives = Directives::new_with_ctx(ctx)?;
        let fields = parse_input_fields(ctx)?;
        Ok(InputObjectTypeDefinition {
            description,
            name,
            directives,
            fields,
            loc: loc(keyword),
        })
    }
}

impl<'a> private::ParseNode<'a> for DirectiveDefinition<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<DirectiveDefinition<'a>> {
        let description = parse_description(ctx)?;
        let keyword = ctx.expect(TokenKind::Directive)?;
        ctx.expect(TokenKind::At)?;
        let name = ctx.next_name()?;
        let arguments = parse_argument_definitions(ctx)?;
        let repeatable = if ctx.peek()?.kind == TokenKind::Repeatable {
            ctx.next()?;
            true
        } else {
            false
        };
        ctx.expect(TokenKind::On)?;
        if ctx.peek()?.kind == TokenKind::Pipe {
            ctx.next()?;
        }
        let mut locations = Vec::new_in(ctx.arena);
        loop {
            let location = ctx.next_name()?;
            locations.push(location.value);
            if ctx.peek()?.kind == TokenKind::Pipe {
                ctx.next()?;
            } else {
                break;
            }
        }
        Ok(DirectiveDefinition {
            description,
            name: name.value,
            arguments,
            repeatable,
            locations,
            loc: loc(keyword),
        })
    }
}

/// Parses a type-system extension after an `extend` keyword has been peeked.
fn parse_extension<'a>(ctx: &mut ParserContext<'a>) -> Result<Definition<'a>> {
    let extend = ctx.expect(TokenKind::Extend)?;
    let extend_loc = loc(extend);
    let token = ctx.next()?;
    match token.kind {
        TokenKind::Schema => {
            let directives = Directives::new_with_ctx(ctx)?;
            let mut query = None;
            let mut mutation = None;
            let mut subscription = None;
            parse_root_operation_types(ctx, &mut query, &mut mutation, &mut subscription)?;
            Ok(Definition::SchemaExtension(SchemaExtension {
                directives,
                query,
                mutation,
                subscription,
                loc: extend_loc,
            }))
        }
        TokenKind::Scalar => {
            let name = NamedType::new_with_ctx(ctx)?;
            let directives = Directives::new_with_ctx(ctx)?;
            Ok(Definition::ScalarExtension(ScalarTypeExtension {
                name,
                directives,
                loc: extend_loc,
            }))
        }
        TokenKind::Type => {
            let name = NamedType::new_with_ctx(ctx)?;
            let interfaces = parse_implements(ctx)?;
            let directives = Directives::new_with_ctx(ctx)?;
            let fields = parse_field_definitions(ctx)?;
            Ok(Definition::ObjectExtension(ObjectTypeExtension {
                name,
                interfaces,
                directives,
                fields,
                loc: extend_loc,
            }))
        }
        TokenKind::Interface => {
            let name = NamedType::new_with_ctx(ctx)?;
            let interfaces = parse_implements(ctx)?;
            let directives = Directives::new_with_ctx(ctx)?;
            let fields = parse_field_definitions(ctx)?;
            Ok(Definition::InterfaceExtension(InterfaceTypeExtension {
                name,
                interfaces,
                directives,
                fields,
                loc: extend_loc,
            }))
        }
        TokenKind::Union => {
            let name = NamedType::new_with_ctx(ctx)?;
            let directives = Directives::new_with_ctx(ctx)?;
            let types = parse_union_members(ctx)?;
            Ok(Definition::UnionExtension(UnionTypeExtension {
                name,
                directives,
                types,
                loc: extend_loc,
            }))
        }
        TokenKind::Enum => {
            let name = NamedType::new_with_ctx(ctx)?;
            let directives = Directives::new_with_ctx(ctx)?;
            let values = parse_enum_values(ctx)?;
            Ok(Definition::EnumExtension(EnumTypeExtension {
                name,
                directives,
                values,
                loc: extend_loc,
            }))
        }
        TokenKind::Input => {
            let name = NamedType::new_with_ctx(ctx)?;
            let directives = Directives::new_with_ctx(ctx)?;
            let fields = parse_input_fields(ctx)?;
            Ok(Definition::InputObjectExtension(InputObjectTypeExtension {
                name,
                directives,
                fields,
                loc: extend_loc,
            }))
        }
        _ => Err(ctx.unexpected(
            token,
            &[
                TokenKind::Schema,
                TokenKind::Scalar,
                TokenKind::Type,
                TokenKind::Interface,
                TokenKind::Union,
                TokenKind::Enum,
                TokenKind::Input,
            ],
        )),
    }
}

const TYPE_SYSTEM_KEYWORDS: &[TokenKind] = &[
    TokenKind::Scalar,
    TokenKind::Type,
    TokenKind::Interface,
    TokenKind::Union,
    TokenKind::Enum,
    TokenKind::Input,
    TokenKind::Directive,
];

impl<'a> private::ParseNode<'a> for Document<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<Document<'a>> {
        let mut definitions = Vec::new_in(ctx.arena);
        loop {
            let token = ctx.peek()?;
            let definition = match token.kind {
                TokenKind::End => break,
                TokenKind::BraceOpen
                | TokenKind::Query
                | TokenKind::Mutation
                | TokenKind::Subscription => {
                    OperationDefinition::new_with_ctx(ctx).map(Definition::Operation)?
                }
                TokenKind::Fragment => {
                    FragmentDefinition::new_with_ctx(ctx).map(Definition::Fragment)?
                }
                TokenKind::Schema => SchemaDefinition::new_with_ctx(ctx).map(Definition::Schema)?,
                TokenKind::Extend => parse_extension(ctx)?,
                TokenKind::String
                | TokenKind::BlockString
                | TokenKind::Scalar
                | TokenKind::Type
                | TokenKind::Interface
                | TokenKind::Union
                | TokenKind::Enum
                | TokenKind::Input
                | TokenKind::Directive => {
                    let description = parse_description(ctx)?;
                    let keyword = ctx.peek()?;
                    let mut definition = match keyword.kind {
                        TokenKind::Scalar => {
                            ScalarTypeDefinition::new_with_ctx(ctx).map(Definition::Scalar)?
                        }
                        TokenKind::Type => {
                            ObjectTypeDefinition::new_with_ctx(ctx).map(Definition::Object)?
                        }
                        TokenKind::Interface => {
                            InterfaceTypeDefinition::new_with_ctx(ctx).map(Definition::Interface)?
                        }
                        TokenKind::Union => {
                            UnionTypeDefinition::new_with_ctx(ctx).map(Definition::Union)?
                        }
                        TokenKind::Enum => {
                            EnumTypeDefinition::new_with_ctx(ctx).map(Definition::Enum)?
                        }
                        TokenKind::Input => {
                            InputObjectTypeDefinition::new_with_ctx(ctx)
                                .map(Definition::InputObject)?
                        }
                        TokenKind::Directive => {
                            DirectiveDefinition::new_with_ctx(ctx).map(Definition::Directive)?
                        }
                        _ => return Err(ctx.unexpected(keyword, TYPE_SYSTEM_KEYWORDS)),
                    };
                    if description.is_some() {
                        match &mut definition {
                            Definition::Scalar(x) => x.description = description,
                            Definition::Object(x) => x.description = description,
                            Definition::Interface(x) => x.description = description,
                            Definition::Union(x) => x.description = description,
                            Definition::Enum(x) => x.description = description,
                            Definition::InputObject(x) => x.description = description,
                            Definition::Directive(x) => x.description = description,
                            _ => {}
                        }
                    }
                    definition
                }
                _ => {
                    return Err(ctx.unexpected(
                        token,
                        &[
                            TokenKind::BraceOpen,
                            TokenKind::Query,
                            TokenKind::Mutation,
                            TokenKind::Subscription,
                            TokenKind::Fragment,
                            TokenKind::Schema,
                            TokenKind::Extend,
                        ],
                    ))
                }
            };
            definitions.push(definition);
        }
        Ok(Document {
            definitions,
            size_hint: ctx.offset(),
        })
    }
}

#[cfg(test)]
mod tests {
    use bumpalo::collections::Vec;

    use crate::error::{ErrorKind, Location};

    use super::{super::ast::*, ParseNode};
    use crate::ast::PrintNode;

    fn assert_parse<'a, T: 'a>(ctx: &'a ASTContext, source: &'a str, expected: T)
    where
        T: ParseNode<'a> + std::fmt::Debug + PartialEq,
    {
        assert_eq!(*T::parse(ctx, source).unwrap(), expected);
    }

    #[test]
    fn error_positions() {
        let ctx = ASTContext::new();
        let result = Document::parse(&ctx, "query { document { $ }}");
        let error = result.unwrap_err();
        assert_eq!(error.kind(), &ErrorKind::UnexpectedToken);
        assert_eq!(
            error.location(),
            &Some(Location {
                line: 1,
                column: 20
            })
        );

        let result = Document::parse(
            &ctx,
            "query {
            document {
                $
            }
        }",
        );
        assert_eq!(
            result.unwrap_err().location(),
            &Some(Location {
                line: 3,
                column: 17
            })
        );
    }

    #[test]
    fn error_carries_expected_and_found() {
        let ctx = ASTContext::new();
        let error = Document::parse(&ctx, "query !").unwrap_err();
        assert!(error.message().contains("found \"!\""));
        let error = Document::parse(&ctx, "{ field(x: ) }").unwrap_err();
        assert!(error.message().starts_with("Expected"));
    }

    #[test]
    fn named_type() {
        let ctx = ASTContext::new();
        assert_parse(&ctx, "TypeName", NamedType::from("TypeName"));
    }

    #[test]
    fn keywords_are_valid_names() {
        let ctx = ASTContext::new();
        let ast = Document::parse(&ctx, "{ query type(on: 1) }").unwrap();
        assert_eq!(ast.print(), "{\n  query\n  type(on: 1)\n}");
    }

    #[test]
    fn variable() {
        let ctx = ASTContext::new();
        assert_parse(&ctx, "$test", Variable::from("test"));
    }

    #[test]
    fn values() {
        let ctx = ASTContext::new();
        assert_parse(&ctx, "true", Value::Boolean(true.into()));
        assert_parse(&ctx, "false", Value::Boolean(false.into()));
        assert_parse(&ctx, "$var", Value::Variable(Variable::from("var")));
        assert_parse(&ctx, "Opt", Value::Enum(EnumValue::from("Opt")));
        assert_parse(&ctx, "123", Value::Int(IntValue::from("123")));
        assert_parse(&ctx, "0.0", Value::Float(FloatValue::from("0.0")));
        assert_parse(&ctx, "null", Value::null());

        assert_parse(
            &ctx,
            "\"hello world\"",
            Value::String(StringValue::new(&ctx, "hello world")),
        );

        assert_parse(
            &ctx,
            "[null, null]",
            Value::List(ListValue {
                children: Vec::from_iter_in([Value::null(), Value::null()], &ctx.arena),
                loc: Loc::default(),
            }),
        );

        assert_parse(
            &ctx,
            "{ test: true }",
            Value::Object(ObjectValue {
                children: Vec::from_iter_in(
                    [ObjectField {
                        name: "test",
                        value: Value::Boolean(true.into()),
                        loc: Loc::default(),
                    }],
                    &ctx.arena,
                ),
                loc: Loc::default(),
            }),
        );
    }

    #[test]
    fn value_positions() {
        let ctx = ASTContext::new();
        let value = Value::parse(&ctx, "  BANANA").unwrap();
        if let Value::Enum(x) = value {
            assert_eq!((x.loc.line, x.loc.column), (1, 3));
        } else {
            panic!("expected enum value");
        }
    }

    #[test]
    fn arguments() {
        let ctx = ASTContext::new();
        assert_parse(
            &ctx,
            "(a: 1, b: 2)",
            Arguments {
                children: Vec::from_iter_in(
                    [
                        Argument {
                            name: "a",
                            value: Value::Int(IntValue::from("1")),
                            loc: Loc::default(),
                        },
                        Argument {
                            name: "b",
                            value: Value::Int(IntValue::from("2")),
                            loc: Loc::default(),
                        },
                    ],
                    &ctx.arena,
                ),
            },
        );
    }

    #[test]
    fn directive_position_is_at_sign() {
        let ctx = ASTContext::new();
        let directives = Directives::parse(&ctx, "  @defer").unwrap();
        let directive = &directives.children[0];
        assert_eq!(directive.name, "defer");
        assert_eq!((directive.loc.line, directive.loc.column), (1, 3));
    }

    #[test]
    fn fields() {
        let ctx = ASTContext::new();
        let field = Field::parse(&ctx, "alias: name(x: null) @skip(if: true) { child }").unwrap();
        assert_eq!(field.alias, Some("alias"));
        assert_eq!(field.name, "name");
        assert_eq!(field.arguments.children[0].name, "x");
        assert_eq!(field.directives.children[0].name, "skip");
        assert_eq!(field.selection_set.selections[0].field().unwrap().name, "child");
        assert_eq!((field.loc.line, field.loc.column), (1, 1));
    }

    #[test]
    fn selections() {
        let ctx = ASTContext::new();
        let set = SelectionSet::parse(
            &ctx,
            "{ name, ... on Frag { name }, ... OtherFrag, ... { name }, name2: name }",
        )
        .unwrap();
        assert_eq!(set.selections.len(), 5);
        assert!(set.selections[0].field().is_some());
        assert_eq!(
            set.selections[1].inline_fragment().unwrap().type_condition,
            Some(NamedType::from("Frag"))
        );
        assert_eq!(
            set.selections[2].fragment_spread().unwrap().name,
            NamedType::from("OtherFrag")
        );
        assert!(set.selections[3].inline_fragment().is_some());
        assert_eq!(set.selections[4].field().unwrap().alias, Some("name2"));
    }

    #[test]
    fn spread_position_is_ellipsis() {
        let ctx = ASTContext::new();
        let set = SelectionSet::parse(&ctx, "{\n  ... Frag\n}").unwrap();
        let spread = set.selections[0].fragment_spread().unwrap();
        assert_eq!((spread.loc.line, spread.loc.column), (2, 3));
    }

    #[test]
    fn types() {
        let ctx = ASTContext::new();
        assert_parse(&ctx, "Type", Type::NamedType(NamedType::from("Type")));
        assert_parse(
            &ctx,
            "Type!",
            Type::NonNullType(ctx.alloc(Type::NamedType(NamedType::from("Type")))),
        );
        assert_parse(
            &ctx,
            "[Type!]!",
            Type::NonNullType(ctx.alloc(Type::ListType(ctx.alloc(Type::NonNullType(
                ctx.alloc(Type::NamedType(NamedType::from("Type"))),
            ))))),
        );
        assert_parse(
            &ctx,
            "[[Type]]",
            Type::ListType(ctx.alloc(Type::ListType(
                ctx.alloc(Type::NamedType(NamedType::from("Type"))),
            ))),
        );
    }

    #[test]
    fn var_definitions() {
        let ctx = ASTContext::new();

        // A variable definition cannot refer to another variable
        VariableDefinitions::parse(&ctx, "($var: Int = $var)").unwrap_err();
        VariableDefinitions::parse(&ctx, "($var: [Int] = [$var])").unwrap_err();

        assert_parse(
            &ctx,
            "$x: Int = 123 @test",
            VariableDefinition {
                variable: Variable::from("x"),
                of_type: Type::NamedType(NamedType::from("Int")),
                default_value: Value::Int(IntValue::from("123")),
                directives: Directives {
                    children: Vec::from_iter_in(
                        [Directive {
                            name: "test",
                            arguments: Arguments {
                                children: Vec::new_in(&ctx.arena),
                            },
                            loc: Loc::default(),
                        }],
                        &ctx.arena,
                    ),
                },
                loc: Loc::default(),
            },
        );
    }

    #[test]
    fn fragment() {
        let ctx = ASTContext::new();
        let fragment = FragmentDefinition::parse(&ctx, "fragment Test on Type @test { name }").unwrap();
        assert_eq!(fragment.name, NamedType::from("Test"));
        assert_eq!(fragment.type_condition, NamedType::from("Type"));
        assert_eq!(fragment.directives.children[0].name, "test");
        assert_eq!((fragment.loc.line, fragment.loc.column), (1, 1));
    }

    #[test]
    fn fragment_must_not_be_named_on() {
        let ctx = ASTContext::new();
        let error = Document::parse(&ctx, "fragment on on on { name }").unwrap_err();
        assert_eq!(error.kind(), &ErrorKind::UnexpectedToken);
        assert_eq!(
            error.location(),
            &Some(Location {
                line: 1,
                column: 10
            })
        );
    }

    #[test]
    fn operation() {
        let ctx = ASTContext::new();
        let operation = OperationDefinition::parse(&ctx, "query Name($test: Int) @test { name }").unwrap();
        assert_eq!(operation.operation, OperationKind::Query);
        assert_eq!(operation.name, Some(NamedType::from("Name")));
        assert_eq!(operation.variable_definitions.children.len(), 1);
        assert_eq!(operation.directives.children.len(), 1);

        let shorthand = OperationDefinition::parse(&ctx, "{ name }").unwrap();
        assert_eq!(shorthand.operation, OperationKind::Query);
        assert_eq!(shorthand.name, None);

        let mutation = OperationDefinition::parse(&ctx, "mutation { name }").unwrap();
        assert_eq!(mutation.operation, OperationKind::Mutation);
    }

    #[test]
    fn operation_with_high_int_value() {
        let ctx = ASTContext::new();
        let operation = OperationDefinition::parse(
            &ctx,
            "query { field(id: 1002275100009989500000000000000000000000000000000000) }",
        )
        .unwrap();
        let field = operation.selection_set.selections[0].field().unwrap();
        assert_eq!(
            field.arguments.children[0].value,
            Value::Int(IntValue::from(
                "1002275100009989500000000000000000000000000000000000"
            ))
        );
    }

    #[test]
    fn schema_definition() {
        let ctx = ASTContext::new();
        let definition = SchemaDefinition::parse(
            &ctx,
            "schema { query: QueryRoot, mutation: MutationRoot }",
        )
        .unwrap();
        assert_eq!(definition.query, Some(NamedType::from("QueryRoot")));
        assert_eq!(definition.mutation, Some(NamedType::from("MutationRoot")));
        assert_eq!(definition.subscription, None);
    }

    #[test]
    fn object_type_definition() {
        let ctx = ASTContext::new();
        let definition = ObjectTypeDefinition::parse(
            &ctx,
            "\"A thing\" type Thing implements Node & HasName @internal { id: ID! name(full: Boolean = false): String }",
        )
        .unwrap();
        assert_eq!(definition.description.map(|x| x.value), Some("A thing"));
        assert_eq!(definition.name, NamedType::from("Thing"));
        assert_eq!(
            definition.interfaces.as_slice(),
            &[NamedType::from("Node"), NamedType::from("HasName")]
        );
        assert_eq!(definition.directives.children[0].name, "internal");
        assert_eq!(definition.fields.len(), 2);
        assert_eq!(definition.fields[0].name, "id");
        assert_eq!(definition.fields[1].arguments[0].name, "full");
        assert_eq!(
            definition.fields[1].arguments[0].default_value,
            Value::Boolean(false.into())
        );
    }

    #[test]
    fn interface_and_union_definitions() {
        let ctx = ASTContext::new();
        let ast = Document::parse(
            &ctx,
            "interface Node { id: ID! } union Pet = | Cat | Dog",
        )
        .unwrap();
        assert_eq!(ast.definitions.len(), 2);
        match (&ast.definitions[0], &ast.definitions[1]) {
            (Definition::Interface(interface), Definition::Union(union)) => {
                assert_eq!(interface.name, NamedType::from("Node"));
                assert_eq!(
                    union.types.as_slice(),
                    &[NamedType::from("Cat"), NamedType::from("Dog")]
                );
            }
            _ => panic!("expected interface and union definitions"),
        }
    }

    #[test]
    fn enum_and_input_definitions() {
        let ctx = ASTContext::new();
        let ast = Document::parse(
            &ctx,
            "enum Color { RED \"greenish\" GREEN } input Point { x: Int! y: Int! = 0 }",
        )
        .unwrap();
        match (&ast.definitions[0], &ast.definitions[1]) {
            (Definition::Enum(color), Definition::InputObject(point)) => {
                assert_eq!(color.values[0].value, EnumValue::from("RED"));
                assert_eq!(
                    color.values[1].description.map(|x| x.value),
                    Some("greenish")
                );
                assert_eq!(point.fields[1].default_value, Value::Int(IntValue::from("0")));
            }
            _ => panic!("expected enum and input definitions"),
        }
    }

    #[test]
    fn enum_values_must_not_be_reserved() {
        let ctx = ASTContext::new();
        Document::parse(&ctx, "enum Bad { true }").unwrap_err();
        Document::parse(&ctx, "enum Bad { null }").unwrap_err();
    }

    #[test]
    fn directive_definition() {
        let ctx = ASTContext::new();
        let definition = DirectiveDefinition::parse(
            &ctx,
            "directive @limit(count: Int = 10) repeatable on FIELD | FIELD_DEFINITION",
        )
        .unwrap();
        assert_eq!(definition.name, "limit");
        assert!(definition.repeatable);
        assert_eq!(definition.arguments[0].name, "count");
        assert_eq!(definition.locations.as_slice(), &["FIELD", "FIELD_DEFINITION"]);
    }

    #[test]
    fn extensions() {
        let ctx = ASTContext::new();
        let ast = Document::parse(
            &ctx,
            "extend schema { mutation: Mutation } extend type Thing { extra: Int } extend enum Color { BLUE } extend union Pet = Bird extend scalar Date @tz extend input Point { z: Int } extend interface Node { version: Int }",
        )
        .unwrap();
        assert_eq!(ast.definitions.len(), 7);
        assert!(matches!(ast.definitions[0], Definition::SchemaExtension(_)));
        assert!(matches!(ast.definitions[1], Definition::ObjectExtension(_)));
        assert!(matches!(ast.definitions[2], Definition::EnumExtension(_)));
        assert!(matches!(ast.definitions[3], Definition::UnionExtension(_)));
        assert!(matches!(ast.definitions[4], Definition::ScalarExtension(_)));
        assert!(matches!(
            ast.definitions[5],
            Definition::InputObjectExtension(_)
        ));
        assert!(matches!(
            ast.definitions[6],
            Definition::InterfaceExtension(_)
        ));
    }

    #[test]
    fn descriptions_attach_to_definitions() {
        let ctx = ASTContext::new();
        let ast = Document::parse(
            &ctx,
            "\"\"\"\n  The root.\n\"\"\"\ntype Query { ok: Boolean }",
        )
        .unwrap();
        match &ast.definitions[0] {
            Definition::Object(object) => {
                assert_eq!(object.description.map(|x| x.value), Some("The root."));
            }
            _ => panic!("expected object type definition"),
        }
    }
}
