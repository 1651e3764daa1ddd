use crate::interpreter::value::core::Kind;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// A symbol is neither in the symbol table nor a builtin constant.
    #[error("could not find value for symbol {name}")]
    SymbolNotFound {
        /// The name of the symbol.
        name: String,
    },
    /// The operands of a binary operator have different kinds after nil
    /// coercion.
    #[error("type mismatch: {left} {op} {right}")]
    TypeMismatch {
        /// The operator.
        op:    &'static str,
        /// Kind of the left operand.
        left:  Kind,
        /// Kind of the right operand.
        right: Kind,
    },
    /// An operator is not defined for the kind of its operand(s).
    #[error("invalid type: {op} is not defined for {kind}")]
    InvalidType {
        /// The operator.
        op:   &'static str,
        /// The offending kind.
        kind: Kind,
    },
    /// A member selector named a field or key that does not exist.
    #[error("{object} has no member {member}")]
    MemberNotFound {
        /// The selected symbol.
        object: String,
        /// The missing member.
        member: String,
    },
    /// A nil pointer was dereferenced.
    #[error("nil pointer dereference")]
    NilDereference,
    /// Integer division by zero.
    #[error("integer division by zero")]
    DivisionByZero,
    /// Integer arithmetic left the range of its kind.
    #[error("integer overflow in {op}")]
    Overflow {
        /// The operator.
        op: &'static str,
    },
    /// A shift count was negative or not smaller than the operand width.
    #[error("shift count {count} out of range")]
    ShiftOutOfRange {
        /// The shift count, as written.
        count: String,
    },
    /// An integer literal does not fit a signed 64-bit integer.
    #[error("integer literal {text} is too large")]
    LiteralTooLarge {
        /// The literal as written.
        text: String,
    },
    /// A predicate produced something other than a boolean.
    #[error("result is {kind}, not bool")]
    NotBoolean {
        /// The kind of the result.
        kind: Kind,
    },
}
