//! Constant evaluation of annotation arguments.

use std::fmt;

use crate::qualified::as_qualified_path;
use crate::tree::{ExprData, ExprNode, Literal, write_quoted};

/// The evaluated value of an annotation argument.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstantValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Char(char),
    String(String),
    /// A dotted reference such as an enum constant, e.g. `RetentionPolicy.RUNTIME`.
    Reference(String),
    Array(Vec<ConstantValue>),
}

impl ConstantValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) | Self::Reference(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<&Literal> for ConstantValue {
    fn from(literal: &Literal) -> Self {
        match literal {
            Literal::Null => Self::Null,
            Literal::Bool(value) => Self::Bool(*value),
            Literal::Int(value) => Self::Int(*value),
            Literal::Float(value) => Self::Float(*value),
            Literal::Char(value) => Self::Char(*value),
            Literal::String(value) => Self::String(value.clone()),
        }
    }
}

impl fmt::Display for ConstantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value:?}"),
            Self::Char(value) => write_quoted(f, value.encode_utf8(&mut [0; 4]), '\''),
            Self::String(value) => write_quoted(f, value, '"'),
            Self::Reference(value) => f.write_str(value),
            Self::Array(values) => {
                f.write_str("[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_str("]")
            }
        }
    }
}

/// Evaluate an expression to a constant.
///
/// Literals evaluate to themselves and pure dotted paths to a
/// [`ConstantValue::Reference`]. An array is constant only if every element
/// is. Anything else, calls included, is not a constant.
pub fn evaluate(node: ExprNode<'_>) -> Option<ConstantValue> {
    match node.data() {
        ExprData::Literal(literal) => Some(literal.into()),
        ExprData::SimpleReference { .. } | ExprData::Qualified { .. } => {
            as_qualified_path(node).map(|path| ConstantValue::Reference(path.join(".")))
        }
        ExprData::Array { .. } => node
            .children()
            .map(evaluate)
            .collect::<Option<Vec<_>>>()
            .map(ConstantValue::Array),
        ExprData::Named { .. } => node.children().next().and_then(evaluate),
        ExprData::Call { .. } | ExprData::Other { .. } => None,
    }
}
