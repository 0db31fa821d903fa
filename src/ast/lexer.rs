use super::ast::ASTContext;
use super::block_string::dedent_block_string_value;
use crate::error::{Error, ErrorKind, Location, Result};

/// The classification of a [Token] as produced by the [Lexer].
///
/// Keywords get their own kinds so that the parser can match on them directly. They remain valid
/// names however, since GraphQL keywords are contextual, which [`TokenKind::is_name`] accounts
/// for.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum TokenKind {
    Bang,
    Dollar,
    Amp,
    ParenOpen,
    ParenClose,
    Spread,
    Colon,
    Equals,
    At,
    BracketOpen,
    BracketClose,
    BraceOpen,
    Pipe,
    BraceClose,

    Query,
    Mutation,
    Subscription,
    Fragment,
    On,
    True,
    False,
    Null,
    Schema,
    Scalar,
    Type,
    Interface,
    Union,
    Enum,
    Input,
    Extend,
    Implements,
    Directive,
    Repeatable,

    Identifier,
    Int,
    Float,
    String,
    BlockString,

    /// A single character that cannot start any token. The parser surfaces these as positioned
    /// syntax errors.
    UnknownChar,
    /// The end of the source text.
    End,
}

impl TokenKind {
    /// Whether a token of this kind may be used where the grammar expects a name.
    #[inline]
    pub fn is_name(&self) -> bool {
        !matches!(
            self,
            TokenKind::Bang
                | TokenKind::Dollar
                | TokenKind::Amp
                | TokenKind::ParenOpen
                | TokenKind::ParenClose
                | TokenKind::Spread
                | TokenKind::Colon
                | TokenKind::Equals
                | TokenKind::At
                | TokenKind::BracketOpen
                | TokenKind::BracketClose
                | TokenKind::BraceOpen
                | TokenKind::Pipe
                | TokenKind::BraceClose
                | TokenKind::Int
                | TokenKind::Float
                | TokenKind::String
                | TokenKind::BlockString
                | TokenKind::UnknownChar
                | TokenKind::End
        )
    }

    /// Whether error messages should quote the token's literal text after its description.
    #[inline]
    pub(crate) fn has_text(&self) -> bool {
        matches!(
            self,
            TokenKind::Identifier
                | TokenKind::Int
                | TokenKind::Float
                | TokenKind::String
                | TokenKind::BlockString
                | TokenKind::UnknownChar
        )
    }

    /// A human readable description of the token kind for error messages.
    pub(crate) fn describe(&self) -> &'static str {
        match self {
            TokenKind::Bang => "\"!\"",
            TokenKind::Dollar => "\"$\"",
            TokenKind::Amp => "\"&\"",
            TokenKind::ParenOpen => "\"(\"",
            TokenKind::ParenClose => "\")\"",
            TokenKind::Spread => "\"...\"",
            TokenKind::Colon => "\":\"",
            TokenKind::Equals => "\"=\"",
            TokenKind::At => "\"@\"",
            TokenKind::BracketOpen => "\"[\"",
            TokenKind::BracketClose => "\"]\"",
            TokenKind::BraceOpen => "\"{\"",
            TokenKind::Pipe => "\"|\"",
            TokenKind::BraceClose => "\"}\"",
            TokenKind::Query => "\"query\"",
            TokenKind::Mutation => "\"mutation\"",
            TokenKind::Subscription => "\"subscription\"",
            TokenKind::Fragment => "\"fragment\"",
            TokenKind::On => "\"on\"",
            TokenKind::True => "\"true\"",
            TokenKind::False => "\"false\"",
            TokenKind::Null => "\"null\"",
            TokenKind::Schema => "\"schema\"",
            TokenKind::Scalar => "\"scalar\"",
            TokenKind::Type => "\"type\"",
            TokenKind::Interface => "\"interface\"",
            TokenKind::Union => "\"union\"",
            TokenKind::Enum => "\"enum\"",
            TokenKind::Input => "\"input\"",
            TokenKind::Extend => "\"extend\"",
            TokenKind::Implements => "\"implements\"",
            TokenKind::Directive => "\"directive\"",
            TokenKind::Repeatable => "\"repeatable\"",
            TokenKind::Identifier => "a name",
            TokenKind::Int => "an integer",
            TokenKind::Float => "a float",
            TokenKind::String => "a string",
            TokenKind::BlockString => "a block string",
            TokenKind::UnknownChar => "an unknown character",
            TokenKind::End => "end of input",
        }
    }
}

/// A classified, positioned lexical unit.
///
/// Tokens are produced on demand by the [Lexer], consumed once by the parser, and never retained
/// inside the AST except as the source of line and column information. String and block string
/// tokens carry their decoded value rather than the raw source slice.
#[derive(Debug, Clone, Copy)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub value: &'a str,
    /// 1-indexed line on which the token starts.
    pub line: usize,
    /// 1-indexed column at which the token starts.
    pub column: usize,
    /// The token that immediately preceded this one, for diagnostics.
    pub prev: Option<&'a Token<'a>>,
}

impl<'a> Token<'a> {
    #[inline]
    pub fn location(&self) -> Location {
        Location {
            line: self.line,
            column: self.column,
        }
    }
}

fn keyword_kind(name: &str) -> TokenKind {
    match name {
        "query" => TokenKind::Query,
        "mutation" => TokenKind::Mutation,
        "subscription" => TokenKind::Subscription,
        "fragment" => TokenKind::Fragment,
        "on" => TokenKind::On,
        "true" => TokenKind::True,
        "false" => TokenKind::False,
        "null" => TokenKind::Null,
        "schema" => TokenKind::Schema,
        "scalar" => TokenKind::Scalar,
        "type" => TokenKind::Type,
        "interface" => TokenKind::Interface,
        "union" => TokenKind::Union,
        "enum" => TokenKind::Enum,
        "input" => TokenKind::Input,
        "extend" => TokenKind::Extend,
        "implements" => TokenKind::Implements,
        "directive" => TokenKind::Directive,
        "repeatable" => TokenKind::Repeatable,
        _ => TokenKind::Identifier,
    }
}

/// A hand-written scanner over the source text that produces one [Token] at a time.
///
/// Commas, whitespace, line terminators, and `#` comments are insignificant and skipped between
/// tokens. Lexing failures for strings are returned as [Error]s, while unknown bytes become
/// [`TokenKind::UnknownChar`] tokens so the parser can point at an exact column.
pub(crate) struct Lexer<'a> {
    ctx: &'a ASTContext,
    source: &'a str,
    pos: usize,
    line: usize,
    column: usize,
    prev: Option<&'a Token<'a>>,
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(ctx: &'a ASTContext, source: &'a str) -> Self {
        Lexer {
            ctx,
            source,
            pos: 0,
            line: 1,
            column: 1,
            prev: None,
        }
    }

    #[inline]
    pub(crate) fn source(&self) -> &'a str {
        self.source
    }

    /// The byte offset the lexer has consumed up to.
    #[inline]
    pub(crate) fn offset(&self) -> usize {
        self.pos
    }

    pub(crate) fn next(&mut self) -> Result<&'a Token<'a>> {
        self.skip_trivia();
        let line = self.line;
        let column = self.column;
        let bytes = self.source.as_bytes();

        let byte = match bytes.get(self.pos) {
            Some(byte) => *byte,
            None => return Ok(self.emit(TokenKind::End, "", line, column)),
        };

        let punctuator = match byte {
            b'!' => Some(TokenKind::Bang),
            b'$' => Some(TokenKind::Dollar),
            b'&' => Some(TokenKind::Amp),
            b'(' => Some(TokenKind::ParenOpen),
            b')' => Some(TokenKind::ParenClose),
            b':' => Some(TokenKind::Colon),
            b'=' => Some(TokenKind::Equals),
            b'@' => Some(TokenKind::At),
            b'[' => Some(TokenKind::BracketOpen),
            b']' => Some(TokenKind::BracketClose),
            b'{' => Some(TokenKind::BraceOpen),
            b'|' => Some(TokenKind::Pipe),
            b'}' => Some(TokenKind::BraceClose),
            _ => None,
        };
        if let Some(kind) = punctuator {
            let text = &self.source[self.pos..self.pos + 1];
            self.pos += 1;
            self.column += 1;
            return Ok(self.emit(kind, text, line, column));
        }

        match byte {
            b'.' => {
                if bytes[self.pos..].starts_with(b"...") {
                    self.pos += 3;
                    self.column += 3;
                    Ok(self.emit(TokenKind::Spread, "...", line, column))
                } else {
                    let mut end = self.pos;
                    while bytes.get(end) == Some(&b'.') {
                        end += 1;
                    }
                    Err(Error::lexing(
                        self.source,
                        format!(
                            "Expected \"...\", found \"{}\"",
                            &self.source[self.pos..end]
                        ),
                        Location { line, column },
                        end - self.pos,
                        ErrorKind::UnknownCharacter,
                    ))
                }
            }
            b'"' => self.read_string(line, column),
            b'-' | b'0'..=b'9' => self.read_number(line, column),
            b'_' | b'a'..=b'z' | b'A'..=b'Z' => {
                let start = self.pos;
                let mut end = start;
                while let Some(b'_' | b'0'..=b'9' | b'a'..=b'z' | b'A'..=b'Z') = bytes.get(end) {
                    end += 1;
                }
                let text = &self.source[start..end];
                self.pos = end;
                self.column += text.len();
                Ok(self.emit(keyword_kind(text), text, line, column))
            }
            _ => {
                let len = self.source[self.pos..]
                    .chars()
                    .next()
                    .map_or(1, char::len_utf8);
                let text = &self.source[self.pos..self.pos + len];
                self.pos += len;
                self.column += 1;
                Ok(self.emit(TokenKind::UnknownChar, text, line, column))
            }
        }
    }

    #[inline]
    fn emit(&mut self, kind: TokenKind, value: &'a str, line: usize, column: usize) -> &'a Token<'a> {
        let token = self.ctx.arena.alloc(Token {
            kind,
            value,
            line,
            column,
            prev: self.prev,
        });
        self.prev = Some(token);
        token
    }

    fn skip_trivia(&mut self) {
        let bytes = self.source.as_bytes();
        loop {
            match bytes.get(self.pos) {
                Some(b' ' | b'\t' | b',') => {
                    self.pos += 1;
                    self.column += 1;
                }
                Some(b'\n') => {
                    self.pos += 1;
                    self.line += 1;
                    self.column = 1;
                }
                Some(b'\r') => {
                    self.pos += 1;
                    if bytes.get(self.pos) == Some(&b'\n') {
                        self.pos += 1;
                    }
                    self.line += 1;
                    self.column = 1;
                }
                Some(b'#') => {
                    while !matches!(bytes.get(self.pos), None | Some(b'\n' | b'\r')) {
                        self.pos += 1;
                    }
                }
                _ if self.source[self.pos..].starts_with('\u{FEFF}') => {
                    self.pos += '\u{FEFF}'.len_utf8();
                }
                _ => break,
            }
        }
    }

    /// Advances the line and column counters over a consumed slice of source text.
    fn advance_position(&mut self, text: &str) {
        let mut chars = text.chars().peekable();
        while let Some(ch) = chars.next() {
            match ch {
                '\n' => {
                    self.line += 1;
                    self.column = 1;
                }
                '\r' => {
                    if chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    self.line += 1;
                    self.column = 1;
                }
                _ => self.column += 1,
            }
        }
    }

    fn read_number(&mut self, line: usize, column: usize) -> Result<&'a Token<'a>> {
        let bytes = self.source.as_bytes();
        let start = self.pos;
        let mut pos = start;
        if bytes[pos] == b'-' {
            pos += 1;
        }
        let digits_start = pos;
        while let Some(b'0'..=b'9') = bytes.get(pos) {
            pos += 1;
        }
        if pos == digits_start {
            return Err(Error::lexing(
                self.source,
                "Expected a digit after \"-\"".into(),
                Location { line, column },
                1,
                ErrorKind::UnknownCharacter,
            ));
        }

        let mut kind = TokenKind::Int;
        if bytes.get(pos) == Some(&b'.')
            && matches!(bytes.get(pos + 1), Some(b'0'..=b'9'))
        {
            kind = TokenKind::Float;
            pos += 1;
            while let Some(b'0'..=b'9') = bytes.get(pos) {
                pos += 1;
            }
        }
        if let Some(b'e' | b'E') = bytes.get(pos) {
            let mut exp = pos + 1;
            if let Some(b'+' | b'-') = bytes.get(exp) {
                exp += 1;
            }
            if matches!(bytes.get(exp), Some(b'0'..=b'9')) {
                kind = TokenKind::Float;
                pos = exp;
                while let Some(b'0'..=b'9') = bytes.get(pos) {
                    pos += 1;
                }
            }
        }

        let text = &self.source[start..pos];
        self.pos = pos;
        self.column += text.len();
        Ok(self.emit(kind, text, line, column))
    }

    fn read_string(&mut self, line: usize, column: usize) -> Result<&'a Token<'a>> {
        if self.source.as_bytes()[self.pos..].starts_with(b"\"\"\"") {
            return self.read_block_string(line, column);
        }

        let source = self.source;
        let bytes = source.as_bytes();
        let start = self.pos + 1;
        let mut pos = start;
        // Buffered output is only created once the first escape sequence is found, so that
        // escape-free strings borrow their source slice directly.
        let mut buffer: Option<String> = None;
        let mut chunk_start = start;

        loop {
            match bytes.get(pos) {
                None | Some(b'\n' | b'\r') => {
                    return Err(Error::lexing(
                        source,
                        "Unterminated string".into(),
                        Location { line, column },
                        1,
                        ErrorKind::UnterminatedString,
                    ));
                }
                Some(b'"') => {
                    let text = match buffer {
                        None => &source[start..pos],
                        Some(mut buffer) => {
                            buffer.push_str(&source[chunk_start..pos]);
                            self.ctx.alloc_string(buffer)
                        }
                    };
                    let consumed = &source[self.pos..pos + 1];
                    self.column += consumed.chars().count();
                    self.pos = pos + 1;
                    return Ok(self.emit(TokenKind::String, text, line, column));
                }
                Some(b'\\') => {
                    let buffer = buffer.get_or_insert_with(String::new);
                    buffer.push_str(&source[chunk_start..pos]);
                    let escape_location = Location {
                        line,
                        column: column + source[self.pos..pos].chars().count(),
                    };
                    match bytes.get(pos + 1) {
                        Some(b'"') => buffer.push('"'),
                        Some(b'\\') => buffer.push('\\'),
                        Some(b'/') => buffer.push('/'),
                        Some(b'b') => buffer.push('\u{0008}'),
                        Some(b'f') => buffer.push('\u{000C}'),
                        Some(b'n') => buffer.push('\n'),
                        Some(b'r') => buffer.push('\r'),
                        Some(b't') => buffer.push('\t'),
                        Some(b'u') => {
                            let hex_start = pos + 2;
                            let mut hex_end = hex_start;
                            while hex_end - hex_start < 4
                                && matches!(bytes.get(hex_end), Some(byte) if byte.is_ascii_hexdigit())
                            {
                                hex_end += 1;
                            }
                            let text = &source[pos..hex_end];
                            if hex_end - hex_start < 4 {
                                return Err(Error::lexing(
                                    source,
                                    format!("Invalid unicode escape sequence \"{text}\""),
                                    escape_location,
                                    text.chars().count(),
                                    ErrorKind::BadEscape,
                                ));
                            }
                            use lexical_core::{
                                parse_with_options, NumberFormatBuilder, ParseIntegerOptions,
                            };
                            const FORMAT: u128 = NumberFormatBuilder::hexadecimal();
                            const OPTIONS: ParseIntegerOptions = ParseIntegerOptions::new();
                            let ch = parse_with_options::<u32, FORMAT>(
                                source[hex_start..hex_end].as_bytes(),
                                &OPTIONS,
                            )
                            .ok()
                            .and_then(std::char::from_u32)
                            .ok_or_else(|| {
                                Error::lexing(
                                    source,
                                    format!("Invalid unicode escape sequence \"{text}\""),
                                    escape_location.clone(),
                                    text.chars().count(),
                                    ErrorKind::BadEscape,
                                )
                            })?;
                            buffer.push(ch);
                            pos = hex_end;
                            chunk_start = pos;
                            continue;
                        }
                        other => {
                            let end = other.map_or(pos + 1, |_| pos + 2).min(source.len());
                            let text = &source[pos..end];
                            return Err(Error::lexing(
                                source,
                                format!("Invalid escape sequence \"{text}\""),
                                escape_location,
                                text.chars().count(),
                                ErrorKind::BadEscape,
                            ));
                        }
                    }
                    pos += 2;
                    chunk_start = pos;
                }
                Some(_) => pos += 1,
            }
        }
    }

    fn read_block_string(&mut self, line: usize, column: usize) -> Result<&'a Token<'a>> {
        let source = self.source;
        let bytes = source.as_bytes();
        let start = self.pos + 3;
        let mut pos = start;
        let mut buffer: Option<String> = None;
        let mut chunk_start = start;

        loop {
            if pos >= bytes.len() {
                return Err(Error::lexing(
                    source,
                    "Unterminated block string".into(),
                    Location { line, column },
                    3,
                    ErrorKind::UnterminatedString,
                ));
            }
            // The only escape inside block strings is `\"""`.
            if bytes[pos] == b'\\' && bytes[pos + 1..].starts_with(b"\"\"\"") {
                let buffer = buffer.get_or_insert_with(String::new);
                buffer.push_str(&source[chunk_start..pos]);
                buffer.push_str("\"\"\"");
                pos += 4;
                chunk_start = pos;
            } else if bytes[pos..].starts_with(b"\"\"\"") {
                let raw = match buffer {
                    None => &source[start..pos],
                    Some(mut buffer) => {
                        buffer.push_str(&source[chunk_start..pos]);
                        self.ctx.alloc_string(buffer)
                    }
                };
                let text = self.ctx.alloc_string(dedent_block_string_value(raw));
                let consumed = &source[self.pos..pos + 3];
                self.advance_position(consumed);
                self.pos = pos + 3;
                return Ok(self.emit(TokenKind::BlockString, text, line, column));
            } else {
                pos += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn tokens<'a>(ctx: &'a ASTContext, source: &'a str) -> std::vec::Vec<&'a Token<'a>> {
        let mut lexer = Lexer::new(ctx, source);
        let mut tokens = std::vec::Vec::new();
        loop {
            let token = lexer.next().unwrap();
            if token.kind == TokenKind::End {
                break;
            }
            tokens.push(token);
        }
        tokens
    }

    #[test]
    fn empty() {
        let ctx = ASTContext::new();
        assert!(tokens(&ctx, "").is_empty());
        assert!(tokens(&ctx, ",,       # comment\n").is_empty());
    }

    #[test]
    fn punctuators() {
        let ctx = ASTContext::new();
        let kinds: std::vec::Vec<TokenKind> = tokens(&ctx, "[]{}()=:!&|$@...")
            .iter()
            .map(|token| token.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::BracketOpen,
                TokenKind::BracketClose,
                TokenKind::BraceOpen,
                TokenKind::BraceClose,
                TokenKind::ParenOpen,
                TokenKind::ParenClose,
                TokenKind::Equals,
                TokenKind::Colon,
                TokenKind::Bang,
                TokenKind::Amp,
                TokenKind::Pipe,
                TokenKind::Dollar,
                TokenKind::At,
                TokenKind::Spread,
            ]
        );
    }

    #[test]
    fn positions() {
        let ctx = ASTContext::new();
        let tokens = tokens(&ctx, "{ id }");
        assert_eq!(tokens.len(), 3);
        assert_eq!((tokens[0].kind, tokens[0].line, tokens[0].column), (TokenKind::BraceOpen, 1, 1));
        assert_eq!((tokens[1].kind, tokens[1].line, tokens[1].column), (TokenKind::Identifier, 1, 3));
        assert_eq!(tokens[1].value, "id");
        assert_eq!((tokens[2].kind, tokens[2].line, tokens[2].column), (TokenKind::BraceClose, 1, 6));
    }

    #[test]
    fn newlines_reset_columns() {
        let ctx = ASTContext::new();
        let tokens = tokens(&ctx, "query\r\n  name\nid");
        assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
        assert_eq!((tokens[1].line, tokens[1].column), (2, 3));
        assert_eq!((tokens[2].line, tokens[2].column), (3, 1));
    }

    #[test]
    fn prev_links() {
        let ctx = ASTContext::new();
        let tokens = tokens(&ctx, "{ id }");
        assert!(tokens[0].prev.is_none());
        assert_eq!(tokens[1].prev.map(|token| token.kind), Some(TokenKind::BraceOpen));
        assert_eq!(tokens[2].prev.map(|token| token.value), Some("id"));
    }

    #[test]
    fn names_and_keywords() {
        let ctx = ASTContext::new();
        let tokens = tokens(&ctx, "hello query on fragment_x");
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].kind, TokenKind::Query);
        assert_eq!(tokens[2].kind, TokenKind::On);
        assert_eq!(tokens[3].kind, TokenKind::Identifier);
        assert_eq!(tokens[3].value, "fragment_x");
    }

    #[test]
    fn numbers() {
        let ctx = ASTContext::new();
        let tokens = tokens(&ctx, "1 -1 0 123 1.0 -10.10E10 1.1e-1 1e1");
        let expected = [
            (TokenKind::Int, "1"),
            (TokenKind::Int, "-1"),
            (TokenKind::Int, "0"),
            (TokenKind::Int, "123"),
            (TokenKind::Float, "1.0"),
            (TokenKind::Float, "-10.10E10"),
            (TokenKind::Float, "1.1e-1"),
            (TokenKind::Float, "1e1"),
        ];
        for (token, (kind, value)) in tokens.iter().zip(expected) {
            assert_eq!((token.kind, token.value), (kind, value));
        }
    }

    #[test]
    fn strings() {
        let ctx = ASTContext::new();
        assert_eq!(tokens(&ctx, "\"hello world\"")[0].value, "hello world");
        assert_eq!(tokens(&ctx, "\"\"")[0].value, "");
        assert_eq!(
            tokens(&ctx, "\"hello \\\" \\n world\"")[0].value,
            "hello \" \n world"
        );
        assert_eq!(tokens(&ctx, "\"\\u0041\"")[0].value, "A");
    }

    #[test]
    fn block_strings() {
        let ctx = ASTContext::new();
        let token = tokens(&ctx, "\"\"\"hello block\"\"\"")[0];
        assert_eq!(token.kind, TokenKind::BlockString);
        assert_eq!(token.value, "hello block");
        assert_eq!(tokens(&ctx, "\"\"\"\"\"\"")[0].value, "");
        assert_eq!(
            tokens(&ctx, "\"\"\"escaped \\\"\"\" quotes\"\"\"")[0].value,
            "escaped \"\"\" quotes"
        );
        let source = "\"\"\"\n    first\n      second\n\"\"\" next";
        let all = tokens(&ctx, source);
        assert_eq!(all[0].value, "first\n  second");
        // The trailing token is positioned past the block string's newlines.
        assert_eq!((all[1].line, all[1].column), (4, 5));
    }

    #[test]
    fn unterminated_string() {
        let ctx = ASTContext::new();
        let mut lexer = Lexer::new(&ctx, "\"hello\nworld\"");
        let error = lexer.next().unwrap_err();
        assert_eq!(error.kind(), &ErrorKind::UnterminatedString);
        // The error points at the opening quote.
        assert_eq!(error.location(), &Some(Location { line: 1, column: 1 }));
    }

    #[test]
    fn bad_unicode_escape() {
        let ctx = ASTContext::new();
        let mut lexer = Lexer::new(&ctx, "\"\\u1\"");
        let error = lexer.next().unwrap_err();
        assert_eq!(error.kind(), &ErrorKind::BadEscape);
        assert!(error.message().contains("\\u1"));
    }

    #[test]
    fn bad_escape() {
        let ctx = ASTContext::new();
        let mut lexer = Lexer::new(&ctx, "\"\\x\"");
        assert_eq!(lexer.next().unwrap_err().kind(), &ErrorKind::BadEscape);
    }

    #[test]
    fn unknown_characters() {
        let ctx = ASTContext::new();
        let tokens = tokens(&ctx, "? %");
        assert_eq!((tokens[0].kind, tokens[0].value), (TokenKind::UnknownChar, "?"));
        assert_eq!((tokens[1].kind, tokens[1].column), (TokenKind::UnknownChar, 3));
    }

    #[test]
    fn malformed_ellipsis() {
        let ctx = ASTContext::new();
        let mut lexer = Lexer::new(&ctx, "..");
        assert_eq!(lexer.next().unwrap_err().kind(), &ErrorKind::UnknownCharacter);
    }
}
