use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;

use crate::{ast::ast::Node, errors::errors::Error, scanner::tokens::Token};

use super::{expr::*, parser::Parser};

/// How tightly an operator holds on to its operands. Higher binds tighter.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub struct BindingPower(pub u32);

impl BindingPower {
    pub const DEFAULT: BindingPower = BindingPower(0);
    pub const CONDITIONAL: BindingPower = BindingPower(30);
    pub const ADDITIVE: BindingPower = BindingPower(120);
    pub const MULTIPLICATIVE: BindingPower = BindingPower(130);
    pub const EXPONENT: BindingPower = BindingPower(140);
    pub const UNARY: BindingPower = BindingPower(150);
    pub const CALL: BindingPower = BindingPower(170);

    /// One step weaker, so an equal operator to the right is absorbed.
    pub fn weaker(self) -> BindingPower {
        BindingPower(self.0.saturating_sub(1))
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Associativity {
    Left,
    Right,
}

/// Rules for tokens that start an expression.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum PrefixParselet {
    /// Wraps the token itself as a leaf
    Value,
    /// Applies the operator to the operand parsed at `power`
    Unary { power: BindingPower },
    /// Parses a sub-expression and requires the closing token
    Group { close: &'static str },
}

impl PrefixParselet {
    pub fn parse<'src>(&self, parser: &mut Parser<'src, '_>, token: Token<'src>) -> Result<Node, Error> {
        match *self {
            PrefixParselet::Value => parse_value_expr(parser, token),
            PrefixParselet::Unary { power } => parse_prefix_expr(parser, token, power),
            PrefixParselet::Group { close } => parse_grouping_expr(parser, token, close),
        }
    }
}

/// Rules for tokens that continue an expression after a left operand.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum InfixParselet {
    Binary {
        power: BindingPower,
        associativity: Associativity,
    },
    /// `left ? a : b`, with `separator` between the branches
    Conditional {
        power: BindingPower,
        separator: &'static str,
    },
    /// `left(a, b)`
    Call {
        power: BindingPower,
        separator: &'static str,
        close: &'static str,
    },
}

impl InfixParselet {
    pub fn power(&self) -> BindingPower {
        match *self {
            InfixParselet::Binary { power, .. }
            | InfixParselet::Conditional { power, .. }
            | InfixParselet::Call { power, .. } => power,
        }
    }

    pub fn parse<'src>(
        &self,
        parser: &mut Parser<'src, '_>,
        left: Node,
        token: Token<'src>,
    ) -> Result<Node, Error> {
        match *self {
            InfixParselet::Binary {
                power,
                associativity,
            } => parse_binary_expr(parser, left, token, power, associativity),
            InfixParselet::Conditional { separator, .. } => {
                parse_conditional_expr(parser, left, token, separator)
            }
            InfixParselet::Call {
                separator, close, ..
            } => parse_call_expr(parser, left, token, separator, close),
        }
    }
}

// Lookup tables keyed by token text
pub type PrefixLookup = HashMap<String, PrefixParselet>;
pub type InfixLookup = HashMap<String, InfixParselet>;

/// A grammar: which tokens start an expression, which continue one, and
/// which close a construct.
///
/// Built once and only read while parsing, so one table can serve any
/// number of parsers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parselets {
    prefix_lookup: PrefixLookup,
    infix_lookup: InfixLookup,
    terminators: HashSet<String>,
}

impl Parselets {
    /// An empty grammar. Every token parses as a value.
    pub fn new() -> Self {
        Parselets::default()
    }

    /// Registers a prefix (null denotation) rule for a token.
    pub fn prefix(&mut self, token: &str, parselet: PrefixParselet) -> &mut Self {
        self.prefix_lookup.insert(token.to_string(), parselet);
        self
    }

    /// Registers an infix (left denotation) rule for a token.
    pub fn infix(&mut self, token: &str, parselet: InfixParselet) -> &mut Self {
        self.infix_lookup.insert(token.to_string(), parselet);
        self
    }

    /// Marks a token as closing some construct, such as `)`.
    pub fn terminator(&mut self, token: &str) -> &mut Self {
        self.terminators.insert(token.to_string());
        self
    }

    /// The prefix rule for `token`. Unregistered tokens become values.
    pub fn get_prefix(&self, token: &str) -> PrefixParselet {
        self.prefix_lookup
            .get(token)
            .copied()
            .unwrap_or(PrefixParselet::Value)
    }

    pub fn get_infix(&self, token: &str) -> Option<InfixParselet> {
        self.infix_lookup.get(token).copied()
    }

    pub fn is_terminator(&self, token: &str) -> bool {
        self.terminators.contains(token)
    }
}

fn binary(power: BindingPower, associativity: Associativity) -> InfixParselet {
    InfixParselet::Binary {
        power,
        associativity,
    }
}

/// Builds the arithmetic grammar.
pub fn create_token_lookups() -> Parselets {
    let mut lookups = Parselets::new();

    // Unary and grouping
    lookups
        .prefix("+", PrefixParselet::Unary { power: BindingPower::UNARY })
        .prefix("-", PrefixParselet::Unary { power: BindingPower::UNARY })
        .prefix("(", PrefixParselet::Group { close: ")" });

    // Additive and multiplicative
    lookups
        .infix("+", binary(BindingPower::ADDITIVE, Associativity::Left))
        .infix("-", binary(BindingPower::ADDITIVE, Associativity::Left))
        .infix("*", binary(BindingPower::MULTIPLICATIVE, Associativity::Left))
        .infix("/", binary(BindingPower::MULTIPLICATIVE, Associativity::Left))
        .infix("^", binary(BindingPower::EXPONENT, Associativity::Right));

    lookups.infix(
        "(",
        InfixParselet::Call {
            power: BindingPower::CALL,
            separator: ",",
            close: ")",
        },
    );

    lookups.infix(
        "?",
        InfixParselet::Conditional {
            power: BindingPower::CONDITIONAL,
            separator: ":",
        },
    );

    lookups.terminator(")").terminator(":").terminator(",");

    lookups
}

lazy_static! {
    static ref DEFAULT_LOOKUPS: Parselets = create_token_lookups();
}

/// The arithmetic grammar, built on first use and shared afterwards.
pub fn default_lookups() -> &'static Parselets {
    &DEFAULT_LOOKUPS
}
