use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        environment::{constant::Constant, operator::Operator},
        lexer::Token,
        parser::stack::{Previous, StackEntry, drain_to_group},
    },
    rpn::{RpnToken, render},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Converts an infix token sequence to Reverse Polish Notation.
///
/// This is the entry point for parsing. It runs the shunting-yard algorithm
/// with an explicit stack, so nesting depth never grows the call stack.
///
/// - Numbers go straight to the output; constants are replaced by their value.
/// - An identifier directly followed by `(` opens a call, which is emitted as
///   [`RpnToken::Call`] with its argument count when the matching `)` arrives.
///   Any other identifier is emitted as-is.
/// - A `-` at the start, or after an operator, `(` or `,`, is a negation.
/// - The postfix `!` binds tighter than anything on the stack and goes
///   straight to the output.
///
/// # Errors
/// - `MismatchedParentheses` for an unopened `)` or an unclosed `(`.
/// - `MisplacedComma` for a `,` outside a function call.
/// - `MissingOperand` for an operator with nothing on one of its sides.
/// - `EmptyArgument` for calls such as `max(1,)`.
/// - `UnknownOperator` for an operator symbol without a definition.
///
/// # Example
/// ```
/// use scical::{
///     interpreter::{lexer::tokenize, parser::core::to_rpn},
///     rpn::render,
/// };
///
/// let rpn = to_rpn(&tokenize("2 + 3 * 4").unwrap()).unwrap();
/// assert_eq!(render(&rpn), "2 3 4 * +");
///
/// let rpn = to_rpn(&tokenize("2 ^ 3 ^ 2").unwrap()).unwrap();
/// assert_eq!(render(&rpn), "2 3 2 ^ ^");
///
/// let rpn = to_rpn(&tokenize("max(1, -2, 3!)").unwrap()).unwrap();
/// assert_eq!(render(&rpn), "1 2 neg 3 ! max/3");
/// ```
pub fn to_rpn(tokens: &[Token]) -> ParseResult<Vec<RpnToken>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack = Vec::new();
    let mut previous = Previous::Start;
    let mut iter = tokens.iter().peekable();

    while let Some(token) = iter.next() {
        previous = match token {
            Token::Number(value) => {
                output.push(RpnToken::Number(*value));
                Previous::Operand
            },
            Token::Identifier(name) => parse_identifier(name, &mut iter, &mut output, &mut stack),
            Token::Comma => {
                check_operand_follows(previous, &stack)?;
                parse_comma(previous, &mut output, &mut stack)?;
                Previous::Comma
            },
            Token::LParen => {
                stack.push(StackEntry::Group);
                Previous::Open
            },
            Token::RParen => {
                check_operand_follows(previous, &stack)?;
                parse_closing_paren(previous, &mut output, &mut stack)?;
                Previous::Close
            },
            Token::Postfix(symbol) => {
                let op = Operator::from_postfix_symbol(*symbol).ok_or(ParseError::UnknownOperator { symbol: *symbol })?;
                if previous.expects_operand() {
                    return Err(ParseError::MissingOperand { symbol: *symbol });
                }
                output.push(RpnToken::Operator(op));
                Previous::Postfix
            },
            Token::Operator(symbol) => {
                let op = Operator::from_symbol(*symbol).ok_or(ParseError::UnknownOperator { symbol: *symbol })?;
                let op = classify_minus(op, previous);
                if op != Operator::Negate && previous.expects_operand() {
                    return Err(ParseError::MissingOperand { symbol: *symbol });
                }
                push_operator(op, &mut output, &mut stack);
                Previous::Operator
            },
            Token::Ignored => previous,
        };
    }

    check_operand_follows(previous, &stack)?;
    while let Some(entry) = stack.pop() {
        match entry {
            StackEntry::Operator(op) => output.push(RpnToken::Operator(op)),
            StackEntry::Group | StackEntry::Call { .. } => {
                return Err(ParseError::MismatchedParentheses);
            },
        }
    }

    log::debug!("rpn: {}", render(&output));
    Ok(output)
}

/// Handles an identifier: a constant, the start of a call, or a bare name.
///
/// When the next token is `(`, it is consumed here and a call frame is
/// pushed in its place.
fn parse_identifier<'a, I>(name: &str,
                           tokens: &mut Peekable<I>,
                           output: &mut Vec<RpnToken>,
                           stack: &mut Vec<StackEntry>)
                           -> Previous
    where I: Iterator<Item = &'a Token>
{
    if let Some(constant) = Constant::from_name(name) {
        output.push(RpnToken::Number(constant.value()));
        return Previous::Operand;
    }

    if let Some(Token::LParen) = tokens.peek() {
        tokens.next();
        stack.push(StackEntry::Call { name:   name.to_string(),
                                      commas: 0, });
        return Previous::Open;
    }

    output.push(RpnToken::Identifier(name.to_string()));
    Previous::Operand
}

/// Closes the current argument at a `,`.
fn parse_comma(previous: Previous,
               output: &mut Vec<RpnToken>,
               stack: &mut Vec<StackEntry>)
               -> ParseResult<()> {
    if !drain_to_group(stack, output) {
        return Err(ParseError::MisplacedComma);
    }

    let Some(StackEntry::Call { name, commas }) = stack.last_mut() else {
        return Err(ParseError::MisplacedComma);
    };
    if matches!(previous, Previous::Open | Previous::Comma) {
        return Err(ParseError::EmptyArgument { name: name.clone() });
    }
    *commas += 1;

    Ok(())
}

/// Fails when the last token was an operator, which is still on top of the
/// stack waiting for its right-hand side.
fn check_operand_follows(previous: Previous, stack: &[StackEntry]) -> ParseResult<()> {
    match (previous, stack.last()) {
        (Previous::Operator, Some(StackEntry::Operator(op))) => {
            Err(ParseError::MissingOperand { symbol: op.symbol() })
        },
        _ => Ok(()),
    }
}

/// Closes the innermost group or call at a `)`.
///
/// A closed call is emitted with its argument count: zero for `f()`,
/// otherwise one more than the number of commas it contained.
fn parse_closing_paren(previous: Previous,
                       output: &mut Vec<RpnToken>,
                       stack: &mut Vec<StackEntry>)
                       -> ParseResult<()> {
    if !drain_to_group(stack, output) {
        return Err(ParseError::MismatchedParentheses);
    }

    if let Some(StackEntry::Call { name, commas }) = stack.pop() {
        let argc = match previous {
            Previous::Open => 0,
            Previous::Comma => return Err(ParseError::EmptyArgument { name }),
            _ => commas + 1,
        };
        output.push(RpnToken::Call { name, argc });
    }

    Ok(())
}

/// Turns a binary `-` into a negation when no operand precedes it.
const fn classify_minus(op: Operator, previous: Previous) -> Operator {
    match op {
        Operator::Sub if previous.expects_operand() => Operator::Negate,
        _ => op,
    }
}

/// Emits every stacked operator that `op` yields to, then pushes `op`.
fn push_operator(op: Operator, output: &mut Vec<RpnToken>, stack: &mut Vec<StackEntry>) {
    while let Some(StackEntry::Operator(top)) = stack.last()
          && op.yields_to(*top)
    {
        output.push(RpnToken::Operator(*top));
        stack.pop();
    }
    stack.push(StackEntry::Operator(op));
}
