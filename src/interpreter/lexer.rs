use logos::{Lexer, Logos};

use crate::error::LexError;

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, LexError>;

/// Represents a lexical token of a calculator expression.
///
/// Tokens are produced in source order by [`tokenize`] and never change
/// afterwards. Unary negation is not a lexical category: a `-` is always an
/// [`Token::Operator`] here and the parser decides whether it negates.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5`, `2.1e-10` or `50%`.
    ///
    /// A `%` written directly after the digits is part of the literal and
    /// divides it by 100.
    #[regex(r"[0-9]+(\.[0-9]*)?", lex_number)]
    #[regex(r"\.[0-9]+", lex_number)]
    Number(f64),
    /// Binary operator tokens: `+ - * / ^ %`.
    #[regex(r"[-+*/^%]", |lex| lex.slice().chars().next())]
    Operator(char),
    /// `!`
    #[token("!", |lex| lex.slice().chars().next())]
    Postfix(char),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// Function or constant names such as `sin` or `PI`, folded to lowercase.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_ascii_lowercase())]
    Identifier(String),
    /// Spaces, tabs and newlines.
    #[regex(r"[ \t\n]+", logos::skip)]
    Ignored,
}

/// Converts an expression into its token sequence.
///
/// Whitespace is skipped. The first character that cannot start a token
/// aborts tokenization.
///
/// # Errors
/// Returns [`LexError::UnexpectedCharacter`] naming the offending character
/// and its byte offset.
///
/// # Example
/// ```
/// use scical::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("2 * Sin(50%)").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Number(2.0),
///                 Token::Operator('*'),
///                 Token::Identifier("sin".to_string()),
///                 Token::LParen,
///                 Token::Number(0.5),
///                 Token::RParen]);
///
/// assert!(tokenize("2 $ 3").is_err());
/// ```
pub fn tokenize(source: &str) -> LexResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push(tok);
        } else {
            return Err(LexError::UnexpectedCharacter { character: lexer.slice()
                                                                  .chars()
                                                                  .next()
                                                                  .unwrap_or('\0'),
                                                       position:  lexer.span().start, });
        }
    }

    log::debug!("tokenized {source:?} into {tokens:?}");
    Ok(tokens)
}

/// Finishes a numeric literal whose mantissa has already been matched.
///
/// Extends the token over an exponent suffix when one with at least one digit
/// follows, parses the literal, then consumes a directly adjacent `%` and
/// scales the value by 1/100.
///
/// # Returns
/// - `Some(f64)`: The literal value.
/// - `None`: If the slice is not a valid float.
fn lex_number(lex: &mut Lexer<Token>) -> Option<f64> {
    let exponent = exponent_len(lex.remainder());
    lex.bump(exponent);

    let mut value: f64 = lex.slice().parse().ok()?;

    if lex.remainder().starts_with('%') {
        lex.bump(1);
        value /= 100.0;
    }

    Some(value)
}

/// Returns the byte length of an exponent suffix (`e`, optional sign, digits)
/// at the start of `rest`, or zero when there is no complete suffix.
///
/// A dangling `e` is left alone so it can start an identifier.
fn exponent_len(rest: &str) -> usize {
    let bytes = rest.as_bytes();
    if !matches!(bytes.first(), Some(b'e' | b'E')) {
        return 0;
    }

    let sign = usize::from(matches!(bytes.get(1), Some(b'+' | b'-')));
    let digits = bytes[1 + sign..].iter().take_while(|b| b.is_ascii_digit()).count();

    if digits == 0 { 0 } else { 1 + sign + digits }
}
