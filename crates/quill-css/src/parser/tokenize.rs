//! Text front end built on `cssparser`.
//!
//! [§ 5.3.10 Parse a list of component values](https://www.w3.org/TR/css-syntax-3/#parse-list-of-component-values)
//!
//! Tokenization itself belongs to `cssparser`; this module only maps its
//! tokens onto [`ComponentValue`] and strips what the shorthand grammars never
//! look at (whitespace, comments, `!important`).

use cssparser::{
    AtRuleParser, BasicParseErrorKind, CowRcStr, DeclarationParser, ParseError, ParseErrorKind,
    Parser, ParserInput, ParserState, QualifiedRuleParser, RuleBodyItemParser, RuleBodyParser,
    Token,
};
use serde::Serialize;

use quill_common::warning::warn_once;

use super::component::{ComponentValue, ValueList};
use crate::error::SyntaxError;

/// [§ 5.4.6 Consume a declaration](https://www.w3.org/TR/css-syntax-3/#consume-declaration)
///
/// A CSS declaration (e.g., `background: red`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Declaration {
    /// The property name, lowercased.
    pub name: String,
    /// The property value, without `!important`.
    pub value: ValueList,
    /// Whether the declaration has `!important`.
    pub important: bool,
}

/// Parse a single property value (`url(a.png) top left / cover, red`).
///
/// # Errors
///
/// Returns a [`SyntaxError`] for blocks, bad strings, bad urls, and any
/// other token a property value cannot hold.
pub fn parse_value(css: &str) -> Result<ValueList, SyntaxError> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    parser
        .parse_entirely(consume_component_values)
        .map(ValueList::from)
        .map_err(|error| syntax_error(&error))
}

/// Parse the contents of a declaration block (`a: b; c: d !important`).
///
/// Declarations that fail to tokenize are dropped with a warning, the way a
/// style sheet parser skips to the next `;`.
#[must_use]
pub fn parse_declarations(css: &str) -> Vec<Declaration> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut body = BlockParser;
    let mut declarations = Vec::new();

    for item in RuleBodyParser::new(&mut parser, &mut body) {
        match item {
            Ok(declaration) => declarations.push(declaration),
            Err((error, source)) => {
                let error = syntax_error(&error);
                warn_once(
                    "CSS",
                    &format!("dropped declaration `{}`: {error}", source.trim()),
                );
            }
        }
    }

    declarations
}

/// [§ 5.4.8 Consume a component value](https://www.w3.org/TR/css-syntax-3/#consume-component-value)
///
/// Consume every remaining component value of `input`. `Parser::next` already
/// skips whitespace and comments.
#[allow(clippy::cast_precision_loss)]
fn consume_component_values<'i>(
    input: &mut Parser<'i, '_>,
) -> Result<Vec<ComponentValue>, ParseError<'i, ()>> {
    let mut values = Vec::new();

    loop {
        let Ok(token) = input.next().cloned() else {
            break;
        };

        let value = match token {
            Token::Ident(name) => ComponentValue::Ident(name.to_string()),
            Token::Number { value, .. } => ComponentValue::Number(value),
            // cssparser stores 50% as 0.5; keep integers exact.
            Token::Percentage {
                unit_value,
                int_value,
                ..
            } => ComponentValue::Percentage(int_value.map_or(unit_value * 100.0, |i| i as f32)),
            Token::Dimension { value, unit, .. } => ComponentValue::dimension(value, &*unit),
            Token::Hash(value) | Token::IDHash(value) => ComponentValue::Hash(value.to_string()),
            Token::QuotedString(value) => ComponentValue::String(value.to_string()),
            Token::UnquotedUrl(url) => ComponentValue::Url(url.to_string()),
            Token::Function(name) => {
                let arguments = input.parse_nested_block(consume_component_values)?;
                function_value(&name, arguments)
            }
            Token::Comma => ComponentValue::Separator,
            Token::Delim('/') => ComponentValue::Delimiter,
            Token::Delim(c) => ComponentValue::Delim(c),
            other => return Err(input.new_unexpected_token_error(other)),
        };
        values.push(value);
    }

    Ok(values)
}

/// `url("a.png")` arrives as a function; fold it into the same shape as `url(a.png)`.
fn function_value(name: &CowRcStr<'_>, arguments: Vec<ComponentValue>) -> ComponentValue {
    if name.eq_ignore_ascii_case("url")
        && let [ComponentValue::String(url)] = arguments.as_slice()
    {
        return ComponentValue::Url(url.clone());
    }
    ComponentValue::function(name.to_ascii_lowercase(), arguments)
}

fn syntax_error(error: &ParseError<'_, ()>) -> SyntaxError {
    let message = match &error.kind {
        ParseErrorKind::Basic(BasicParseErrorKind::UnexpectedToken(token)) => {
            format!("unexpected token {token:?}")
        }
        ParseErrorKind::Basic(BasicParseErrorKind::EndOfInput) => {
            "unexpected end of input".to_string()
        }
        ParseErrorKind::Basic(kind) => format!("{kind:?}"),
        ParseErrorKind::Custom(()) => "invalid value".to_string(),
    };
    SyntaxError {
        message,
        line: error.location.line + 1,
        column: error.location.column,
    }
}

/// [§ 6.4.2 Important declarations](https://www.w3.org/TR/css-cascade-4/#importance)
///
/// "A declaration is important if it has a !important annotation, i.e.
/// if the last two (non-whitespace, non-comment) tokens in its value are
/// a <delim-token> with the value "!" followed by an <ident-token> with
/// a value that is an ASCII case-insensitive match for "important"."
///
/// Whitespace never reaches a [`ComponentValue`], so only the last two entries
/// need checking. Returns the remaining value and the flag.
fn split_important(mut value: Vec<ComponentValue>) -> (Vec<ComponentValue>, bool) {
    let important = matches!(
        value.as_slice(),
        [.., ComponentValue::Delim('!'), last] if last.is_ident("important")
    );
    if important {
        value.truncate(value.len() - 2);
    }
    (value, important)
}

/// Declaration-only body parser: rules and at-rules inside the block are errors.
struct BlockParser;

impl<'i> DeclarationParser<'i> for BlockParser {
    type Declaration = Declaration;
    type Error = ();

    fn parse_value<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
        _declaration_start: &ParserState,
    ) -> Result<Self::Declaration, ParseError<'i, Self::Error>> {
        let (value, important) = split_important(consume_component_values(input)?);
        Ok(Declaration {
            name: name.to_ascii_lowercase(),
            value: ValueList::from(value),
            important,
        })
    }
}

impl<'i> AtRuleParser<'i> for BlockParser {
    type Prelude = ();
    type AtRule = Declaration;
    type Error = ();
}

impl<'i> QualifiedRuleParser<'i> for BlockParser {
    type Prelude = ();
    type QualifiedRule = Declaration;
    type Error = ();
}

impl<'i> RuleBodyItemParser<'i, Declaration, ()> for BlockParser {
    fn parse_declarations(&self) -> bool {
        true
    }

    fn parse_qualified(&self) -> bool {
        false
    }
}
