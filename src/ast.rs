/// An abstract syntax tree (AST) node representing a predicate expression.
///
/// The tree is built by the parser and only read by the evaluator. Nodes own
/// their children; there is no sharing between subtrees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal, kept as written (`42`, `1_000`, `0hFF`).
    Integer {
        /// The raw literal text, including any base prefix and underscores.
        text: String,
    },
    /// A string literal, without its backtick delimiters.
    String {
        /// The literal contents.
        value: String,
    },
    /// A boolean literal: `true` or `false`.
    Bool {
        /// The literal value.
        value: bool,
    },
    /// Reference to a symbol by name.
    Symbol {
        /// Name of the symbol.
        name: String,
    },
    /// Member selection on a symbol (`object.member`).
    Selector {
        /// Name of the selected symbol.
        object: String,
        /// Name of the field or map key.
        member: String,
    },
    /// A prefix operation.
    Unary {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
    },
    /// A binary operation.
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Expr {
    /// Builds a binary node from its parts.
    ///
    /// ## Example
    /// ```
    /// use refine::ast::{BinaryOperator, Expr};
    ///
    /// let expr = Expr::binary(Expr::integer("1"), BinaryOperator::Add, Expr::integer("2"));
    ///
    /// assert_eq!(expr.to_string(), "(1 + 2)");
    /// ```
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::Binary { left: Box::new(left),
                       op,
                       right: Box::new(right) }
    }

    /// Builds a unary node from its parts.
    #[must_use]
    pub fn unary(op: UnaryOperator, operand: Self) -> Self {
        Self::Unary { op,
                      operand: Box::new(operand) }
    }

    /// Builds an integer literal node.
    #[must_use]
    pub fn integer(text: impl Into<String>) -> Self {
        Self::Integer { text: text.into() }
    }

    /// Builds a symbol reference node.
    #[must_use]
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Symbol { name: name.into() }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Logical or (`||`)
    Or,
    /// Logical and (`&&`)
    And,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Addition or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Bitwise or (`|`)
    BitOr,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Bitwise and (`&`)
    BitAnd,
    /// Left shift (`<<`)
    ShiftLeft,
    /// Right shift (`>>`)
    ShiftRight,
}

impl BinaryOperator {
    /// The operator as written in predicate text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Or => "||",
            Self::And => "&&",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Add => "+",
            Self::Sub => "-",
            Self::BitOr => "|",
            Self::Mul => "*",
            Self::Div => "/",
            Self::BitAnd => "&",
            Self::ShiftLeft => "<<",
            Self::ShiftRight => ">>",
        }
    }
}

/// Represents a prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (`-x`).
    Negate,
    /// Arithmetic identity (`+x`).
    Identity,
    /// Logical not (`!x`).
    Not,
    /// Pointer dereference (`*p`).
    Deref,
}

impl UnaryOperator {
    /// The operator as written in predicate text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Negate => "-",
            Self::Identity => "+",
            Self::Not => "!",
            Self::Deref => "*",
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renders the tree fully parenthesized, which makes grouping visible.
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer { text } => write!(f, "{text}"),
            Self::String { value } => write!(f, "`{value}`"),
            Self::Bool { value } => write!(f, "{value}"),
            Self::Symbol { name } => write!(f, "{name}"),
            Self::Selector { object, member } => write!(f, "{object}.{member}"),
            Self::Unary { op, operand } => write!(f, "({op}{operand})"),
            Self::Binary { left, op, right } => write!(f, "({left} {op} {right})"),
        }
    }
}
