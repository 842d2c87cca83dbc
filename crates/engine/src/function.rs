//! Named functions and operators known to the reference engine.

/// Named callable.
///
/// `sum` and `product` are classified as operators: they take any number of
/// arguments and, like functions, are inserted with their parentheses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
	Sin,
	Cos,
	Tan,
	Asin,
	Acos,
	Atan,
	Sinh,
	Cosh,
	Tanh,
	Ln,
	Lg,
	Log,
	Exp,
	Sqrt,
	Abs,
	Floor,
	Ceil,
	Round,
	Min,
	Max,
	Sum,
	Product,
}

impl Function {
	pub const ALL: [Self; 22] = [
		Self::Sin,
		Self::Cos,
		Self::Tan,
		Self::Asin,
		Self::Acos,
		Self::Atan,
		Self::Sinh,
		Self::Cosh,
		Self::Tanh,
		Self::Ln,
		Self::Lg,
		Self::Log,
		Self::Exp,
		Self::Sqrt,
		Self::Abs,
		Self::Floor,
		Self::Ceil,
		Self::Round,
		Self::Min,
		Self::Max,
		Self::Sum,
		Self::Product,
	];

	pub const fn name(self) -> &'static str {
		match self {
			Self::Sin => "sin",
			Self::Cos => "cos",
			Self::Tan => "tan",
			Self::Asin => "asin",
			Self::Acos => "acos",
			Self::Atan => "atan",
			Self::Sinh => "sinh",
			Self::Cosh => "cosh",
			Self::Tanh => "tanh",
			Self::Ln => "ln",
			Self::Lg => "lg",
			Self::Log => "log",
			Self::Exp => "exp",
			Self::Sqrt => "sqrt",
			Self::Abs => "abs",
			Self::Floor => "floor",
			Self::Ceil => "ceil",
			Self::Round => "round",
			Self::Min => "min",
			Self::Max => "max",
			Self::Sum => "sum",
			Self::Product => "product",
		}
	}

	pub fn from_name(name: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|f| f.name() == name)
	}

	/// Returns true for the n-ary operators.
	pub const fn is_operator(self) -> bool {
		matches!(self, Self::Sum | Self::Product)
	}

	/// Accepted argument counts as `(min, max)`; `None` means unbounded.
	pub const fn arity(self) -> (usize, Option<usize>) {
		match self {
			Self::Min | Self::Max | Self::Sum | Self::Product => (1, None),
			Self::Log => (1, Some(2)),
			_ => (1, Some(1)),
		}
	}
}
