use log::trace;

use crate::{
    ast::ast::Node,
    errors::errors::{Error, ErrorImpl},
    scanner::tokens::Token,
};

use super::{
    lookups::{Associativity, BindingPower},
    parser::Parser,
};

/// Parses an expression whose operators all bind tighter than `bp`.
pub fn parse_expr<'src>(parser: &mut Parser<'src, '_>, bp: BindingPower) -> Result<Node, Error> {
    // First parse NUD
    let position = parser.get_position();
    let token = match parser.advance() {
        Some(token) => token,
        None => return Err(Error::new(ErrorImpl::UnexpectedEndOfInput, position)),
    };

    let lookups = parser.get_lookups();
    trace!("prefix {:?} at bp {}", token.value, bp.0);
    let mut left = lookups.get_prefix(token.value).parse(parser, token)?;

    // While the next token is an LED binding tighter than bp, keep extending lhs.
    // A token without an LED ends the expression; whoever called us decides
    // whether it belongs there.
    while let Some(value) = parser.current_value() {
        let Some(parselet) = lookups.get_infix(value) else {
            break;
        };
        if parselet.power() <= bp {
            break;
        }

        let Some(token) = parser.advance() else {
            break;
        };
        trace!("infix {:?} at bp {}", token.value, parselet.power().0);
        left = parselet.parse(parser, left, token)?;
    }

    Ok(left)
}

pub fn parse_value_expr(_parser: &mut Parser, token: Token) -> Result<Node, Error> {
    Ok(Node::value(token.value))
}

pub fn parse_prefix_expr(
    parser: &mut Parser,
    token: Token,
    power: BindingPower,
) -> Result<Node, Error> {
    let operand = parse_expr(parser, power)?;

    Ok(Node::unary(token.value, operand))
}

pub fn parse_grouping_expr(
    parser: &mut Parser,
    _token: Token,
    close: &str,
) -> Result<Node, Error> {
    let expr = parse_expr(parser, BindingPower::DEFAULT)?;
    parser.expect(close)?;

    Ok(expr)
}

pub fn parse_binary_expr(
    parser: &mut Parser,
    left: Node,
    token: Token,
    power: BindingPower,
    associativity: Associativity,
) -> Result<Node, Error> {
    let right_bp = match associativity {
        Associativity::Left => power,
        Associativity::Right => power.weaker(),
    };
    let right = parse_expr(parser, right_bp)?;

    Ok(Node::binary(token.value, left, right))
}

pub fn parse_conditional_expr(
    parser: &mut Parser,
    condition: Node,
    _token: Token,
    separator: &str,
) -> Result<Node, Error> {
    // Branches take as much as they can, so nested conditionals chain to the right
    let true_branch = parse_expr(parser, BindingPower::DEFAULT)?;
    parser.expect(separator)?;
    let false_branch = parse_expr(parser, BindingPower::DEFAULT)?;

    Ok(Node::conditional(condition, true_branch, false_branch))
}

pub fn parse_call_expr(
    parser: &mut Parser,
    callee: Node,
    _token: Token,
    separator: &str,
    close: &str,
) -> Result<Node, Error> {
    let mut arguments = vec![];

    // fn1(a, b) and fn1(a, b,) are the same call
    while parser.current_value() != Some(close) {
        arguments.push(parse_expr(parser, BindingPower::DEFAULT)?);

        if parser.current_value() == Some(separator) {
            parser.advance();
        } else {
            break;
        }
    }

    parser.expect(close)?;

    Ok(Node::call(callee, arguments))
}
