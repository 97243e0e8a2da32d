use std::{fmt::Display, mem};

use serde::{Deserialize, Serialize};

/// Expression tree.
///
/// Every composite node owns its children. Nodes are built bottom-up by the
/// parser and never change afterwards. The serialized form is tagged by a
/// `type` field (`value`, `unary`, `binary`, `conditional`, `call`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    /// Any token that is not a prefix operator. Numbers, names and
    /// keywords are not told apart.
    #[serde(rename = "value")]
    Value { value: String },
    #[serde(rename = "unary")]
    UnaryOperation {
        operator: String,
        #[serde(rename = "right")]
        operand: Box<Node>,
    },
    #[serde(rename = "binary")]
    BinaryOperation {
        operator: String,
        left: Box<Node>,
        right: Box<Node>,
    },
    /// `condition ? true_branch : false_branch`
    #[serde(rename = "conditional")]
    ConditionalOperation {
        condition: Box<Node>,
        #[serde(rename = "trueBranch")]
        true_branch: Box<Node>,
        #[serde(rename = "falseBranch")]
        false_branch: Box<Node>,
    },
    #[serde(rename = "call")]
    Call {
        callee: Box<Node>,
        arguments: Vec<Node>,
    },
}

impl Node {
    pub fn value(value: impl Into<String>) -> Self {
        Node::Value {
            value: value.into(),
        }
    }

    pub fn unary(operator: impl Into<String>, operand: Node) -> Self {
        Node::UnaryOperation {
            operator: operator.into(),
            operand: Box::new(operand),
        }
    }

    pub fn binary(operator: impl Into<String>, left: Node, right: Node) -> Self {
        Node::BinaryOperation {
            operator: operator.into(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn conditional(condition: Node, true_branch: Node, false_branch: Node) -> Self {
        Node::ConditionalOperation {
            condition: Box::new(condition),
            true_branch: Box::new(true_branch),
            false_branch: Box::new(false_branch),
        }
    }

    pub fn call(callee: Node, arguments: Vec<Node>) -> Self {
        Node::Call {
            callee: Box::new(callee),
            arguments,
        }
    }

    /// Direct children, left to right.
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::Value { .. } => vec![],
            Node::UnaryOperation { operand, .. } => vec![&**operand],
            Node::BinaryOperation { left, right, .. } => vec![&**left, &**right],
            Node::ConditionalOperation {
                condition,
                true_branch,
                false_branch,
            } => vec![&**condition, &**true_branch, &**false_branch],
            Node::Call { callee, arguments } => {
                let mut children = vec![&**callee];
                children.extend(arguments);
                children
            }
        }
    }

    /// Number of nodes on the longest path from this node to a leaf.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 1)];

        while let Some((node, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            pending.extend(node.children().into_iter().map(|child| (child, depth + 1)));
        }

        deepest
    }

    /// Moves every child out onto `stack`, leaving empty leaves behind.
    fn detach_children(&mut self, stack: &mut Vec<Node>) {
        fn detach(child: &mut Node) -> Node {
            mem::replace(child, Node::Value { value: String::new() })
        }

        match self {
            Node::Value { .. } => {}
            Node::UnaryOperation { operand, .. } => stack.push(detach(operand)),
            Node::BinaryOperation { left, right, .. } => {
                stack.push(detach(left));
                stack.push(detach(right));
            }
            Node::ConditionalOperation {
                condition,
                true_branch,
                false_branch,
            } => {
                stack.push(detach(condition));
                stack.push(detach(true_branch));
                stack.push(detach(false_branch));
            }
            Node::Call { callee, arguments } => {
                stack.push(detach(callee));
                stack.append(arguments);
            }
        }
    }
}

// A sum like `1+1+...+1` nests as deep as it is long, so children are freed
// from a work stack instead of by recursion.
impl Drop for Node {
    fn drop(&mut self) {
        if let Node::Value { .. } = self {
            return;
        }

        let mut stack = vec![];
        self.detach_children(&mut stack);
        while let Some(mut node) = stack.pop() {
            node.detach_children(&mut stack);
        }
    }
}

/// Prints the tree fully parenthesized, e.g. `((-1) + (2 * 3))`.
///
/// The output parses back into an identical tree.
impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Value { value } => write!(f, "{}", value),
            Node::UnaryOperation { operator, operand } => write!(f, "({}{})", operator, operand),
            Node::BinaryOperation {
                operator,
                left,
                right,
            } => write!(f, "({} {} {})", left, operator, right),
            Node::ConditionalOperation {
                condition,
                true_branch,
                false_branch,
            } => write!(f, "({} ? {} : {})", condition, true_branch, false_branch),
            Node::Call { callee, arguments } => {
                write!(f, "{}(", callee)?;
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", argument)?;
                }
                write!(f, ")")
            }
        }
    }
}
