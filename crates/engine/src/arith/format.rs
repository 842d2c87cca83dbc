//! Number formatting and expression printing.

use super::ast::{BinOp, Expr};
use crate::MAX_PRECISION;

/// Magnitudes below this are floating point noise and print as zero.
const NOISE: f64 = 1e-15;

const PREC_NEG: u8 = 3;
const PREC_POW: u8 = 4;
const PREC_POSTFIX: u8 = 5;
const PREC_ATOM: u8 = 6;

/// Formats a result value.
///
/// Integral values print without a fraction; other values print with at most
/// `precision` fraction digits, trailing zeros trimmed. Values too large or
/// too small for that form switch to scientific notation.
pub(crate) fn format_number(value: f64, precision: usize, grouping: Option<char>) -> String {
	let magnitude = value.abs();
	if magnitude < NOISE {
		return "0".to_string();
	}

	let precision = precision.min(MAX_PRECISION);
	let smallest = 10f64.powi(-(precision as i32));
	if magnitude >= 1e15 || magnitude < smallest / 2.0 {
		let formatted = format!("{value:.precision$e}");
		return match formatted.split_once('e') {
			Some((mantissa, exponent)) => format!("{}e{exponent}", trim_fraction(mantissa)),
			None => formatted,
		};
	}

	let formatted = format!("{value:.precision$}");
	let trimmed = trim_fraction(&formatted);
	let trimmed = if trimmed == "-0" { "0" } else { trimmed };
	match grouping {
		Some(separator) => group_thousands(trimmed, separator),
		None => trimmed.to_string(),
	}
}

fn trim_fraction(number: &str) -> &str {
	if number.contains('.') {
		number.trim_end_matches('0').trim_end_matches('.')
	} else {
		number
	}
}

fn group_thousands(number: &str, separator: char) -> String {
	let (sign, unsigned) = match number.strip_prefix('-') {
		Some(rest) => ("-", rest),
		None => ("", number),
	};
	let (int_part, frac_part) = match unsigned.split_once('.') {
		Some((int_part, frac_part)) => (int_part, Some(frac_part)),
		None => (unsigned, None),
	};

	let mut grouped = String::with_capacity(number.len() + int_part.len() / 3);
	grouped.push_str(sign);
	for (i, digit) in int_part.chars().enumerate() {
		if i > 0 && (int_part.len() - i) % 3 == 0 {
			grouped.push(separator);
		}
		grouped.push(digit);
	}
	if let Some(frac_part) = frac_part {
		grouped.push('.');
		grouped.push_str(frac_part);
	}
	grouped
}

/// Prints an expression so that it parses back to the same tree.
pub(crate) fn print_expr(expr: &Expr, precision: usize) -> String {
	let mut out = String::new();
	write_expr(expr, 0, precision, &mut out);
	out
}

fn precedence(expr: &Expr) -> u8 {
	match expr {
		Expr::Num(value) if *value < 0.0 => PREC_NEG,
		Expr::Num(_) | Expr::Var(_) | Expr::Call(..) => PREC_ATOM,
		Expr::Neg(_) => PREC_NEG,
		Expr::Binary(op, ..) => op.precedence(),
		Expr::Postfix(..) => PREC_POSTFIX,
	}
}

fn write_expr(expr: &Expr, min_prec: u8, precision: usize, out: &mut String) {
	let prec = precedence(expr);
	let parens = prec < min_prec;
	if parens {
		out.push('(');
	}

	match expr {
		Expr::Num(value) => out.push_str(&format_number(*value, precision, None)),
		Expr::Var(name) => out.push_str(name),
		Expr::Neg(inner) => {
			out.push('-');
			write_expr(inner, PREC_NEG, precision, out);
		}
		Expr::Binary(BinOp::Pow, base, exponent) => {
			write_expr(base, PREC_POW + 1, precision, out);
			out.push('^');
			write_expr(exponent, PREC_POW, precision, out);
		}
		Expr::Binary(op, lhs, rhs) => {
			write_expr(lhs, prec, precision, out);
			out.push_str(op.symbol());
			write_expr(rhs, prec + 1, precision, out);
		}
		Expr::Call(function, args) => {
			out.push_str(function.name());
			out.push('(');
			for (i, arg) in args.iter().enumerate() {
				if i > 0 {
					out.push_str(", ");
				}
				write_expr(arg, 0, precision, out);
			}
			out.push(')');
		}
		Expr::Postfix(function, inner) => {
			write_expr(inner, PREC_POSTFIX, precision, out);
			out.push_str(function.symbol());
		}
	}

	if parens {
		out.push(')');
	}
}
