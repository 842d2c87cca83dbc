//! Postfix functions (`5!`, `50%`, `30°`).

/// A function written after its argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostfixFunction {
	Percent,
	Factorial,
	DoubleFactorial,
	Degree,
}

impl PostfixFunction {
	/// Symbols ordered longest first so `!!` wins over `!`.
	pub const ALL: [Self; 4] = [Self::DoubleFactorial, Self::Factorial, Self::Percent, Self::Degree];

	/// Symbol as typed by the user.
	pub const fn symbol(self) -> &'static str {
		match self {
			Self::Percent => "%",
			Self::Factorial => "!",
			Self::DoubleFactorial => "!!",
			Self::Degree => "°",
		}
	}

	/// Registry name the symbol substitutes for.
	pub const fn name(self) -> &'static str {
		match self {
			Self::Percent => "percent",
			Self::Factorial => "factorial",
			Self::DoubleFactorial => "double_factorial",
			Self::Degree => "degree",
		}
	}

	/// Longest postfix symbol starting `input`.
	pub fn match_prefix(input: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|f| input.starts_with(f.symbol()))
	}
}
