//! Numeric evaluation, constant folding and elementary rewriting.

use super::ast::{BinOp, Expr};
use crate::config::{AngleUnit, EngineConfig};
use crate::error::{EngineError, Result};
use crate::{Function, PostfixFunction};

const MAX_FACTORIAL: f64 = 170.0;

pub(crate) fn eval(expr: &Expr, config: &EngineConfig) -> Result<f64> {
	let value = match expr {
		Expr::Num(value) => *value,
		Expr::Var(name) => return Err(EngineError::eval(format!("unknown variable '{name}'"))),
		Expr::Neg(inner) => -eval(inner, config)?,
		Expr::Binary(op, lhs, rhs) => binary(*op, eval(lhs, config)?, eval(rhs, config)?)?,
		Expr::Call(function, args) => {
			let values = args.iter().map(|arg| eval(arg, config)).collect::<Result<Vec<_>>>()?;
			call(*function, &values, config)?
		}
		Expr::Postfix(function, inner) => postfix(*function, eval(inner, config)?, config)?,
	};
	finite(value)
}

fn finite(value: f64) -> Result<f64> {
	if value.is_nan() {
		Err(EngineError::eval("result is undefined"))
	} else if value.is_infinite() {
		Err(EngineError::eval("result is out of range"))
	} else {
		Ok(value)
	}
}

fn binary(op: BinOp, lhs: f64, rhs: f64) -> Result<f64> {
	Ok(match op {
		BinOp::Add => lhs + rhs,
		BinOp::Sub => lhs - rhs,
		BinOp::Mul => lhs * rhs,
		BinOp::Div => {
			if rhs == 0.0 {
				return Err(EngineError::eval("division by zero"));
			}
			lhs / rhs
		}
		BinOp::Pow => lhs.powf(rhs),
	})
}

fn call(function: Function, args: &[f64], config: &EngineConfig) -> Result<f64> {
	let x = args.first().copied().unwrap_or_default();
	let to_rad = |v: f64| match config.angle_unit {
		AngleUnit::Rad => v,
		AngleUnit::Deg => v.to_radians(),
	};
	let from_rad = |v: f64| match config.angle_unit {
		AngleUnit::Rad => v,
		AngleUnit::Deg => v.to_degrees(),
	};

	Ok(match function {
		Function::Sin => to_rad(x).sin(),
		Function::Cos => to_rad(x).cos(),
		Function::Tan => to_rad(x).tan(),
		Function::Asin | Function::Acos if !(-1.0..=1.0).contains(&x) => {
			return Err(EngineError::eval(format!("{} is defined only on [-1, 1]", function.name())));
		}
		Function::Asin => from_rad(x.asin()),
		Function::Acos => from_rad(x.acos()),
		Function::Atan => from_rad(x.atan()),
		Function::Sinh => x.sinh(),
		Function::Cosh => x.cosh(),
		Function::Tanh => x.tanh(),
		Function::Ln | Function::Lg if x <= 0.0 => {
			return Err(EngineError::eval("logarithm of a non-positive number"));
		}
		Function::Ln => x.ln(),
		Function::Lg => x.log10(),
		Function::Log => match args {
			[x] if *x > 0.0 => x.log10(),
			[base, x] if *base > 0.0 && *base != 1.0 && *x > 0.0 => x.ln() / base.ln(),
			_ => return Err(EngineError::eval("logarithm of a non-positive number or invalid base")),
		},
		Function::Exp => x.exp(),
		Function::Sqrt if x < 0.0 => return Err(EngineError::eval("square root of a negative number")),
		Function::Sqrt => x.sqrt(),
		Function::Abs => x.abs(),
		Function::Floor => x.floor(),
		Function::Ceil => x.ceil(),
		Function::Round => x.round(),
		Function::Min => args.iter().copied().fold(f64::INFINITY, f64::min),
		Function::Max => args.iter().copied().fold(f64::NEG_INFINITY, f64::max),
		Function::Sum => args.iter().sum(),
		Function::Product => args.iter().product(),
	})
}

fn postfix(function: PostfixFunction, x: f64, config: &EngineConfig) -> Result<f64> {
	Ok(match function {
		PostfixFunction::Percent => x / 100.0,
		PostfixFunction::Degree => match config.angle_unit {
			AngleUnit::Rad => x.to_radians(),
			AngleUnit::Deg => x,
		},
		PostfixFunction::Factorial | PostfixFunction::DoubleFactorial => {
			if x < 0.0 || x.fract() != 0.0 {
				return Err(EngineError::eval(format!("{} requires a non-negative integer", function.name())));
			}
			if x > MAX_FACTORIAL * 2.0 {
				return Err(EngineError::eval("result is out of range"));
			}
			let step = if function == PostfixFunction::Factorial { 1.0 } else { 2.0 };
			let mut acc = 1.0;
			let mut n = x;
			while n > 1.0 {
				acc *= n;
				n -= step;
			}
			acc
		}
	})
}

/// Folds every variable-free subtree into a number.
pub(crate) fn fold(expr: Expr, config: &EngineConfig) -> Result<Expr> {
	if expr.variables().is_empty() {
		return eval(&expr, config).map(Expr::Num);
	}
	Ok(match expr {
		Expr::Neg(inner) => match fold(*inner, config)? {
			Expr::Neg(double) => *double,
			inner => Expr::Neg(Box::new(inner)),
		},
		Expr::Binary(op, lhs, rhs) => identities(op, fold(*lhs, config)?, fold(*rhs, config)?),
		Expr::Call(function, args) => Expr::Call(
			function,
			args.into_iter().map(|arg| fold(arg, config)).collect::<Result<_>>()?,
		),
		Expr::Postfix(function, inner) => Expr::Postfix(function, Box::new(fold(*inner, config)?)),
		other => other,
	})
}

fn identities(op: BinOp, lhs: Expr, rhs: Expr) -> Expr {
	let is = |expr: &Expr, value: f64| matches!(expr, Expr::Num(v) if *v == value);
	match op {
		BinOp::Add if is(&lhs, 0.0) => rhs,
		BinOp::Add | BinOp::Sub if is(&rhs, 0.0) => lhs,
		BinOp::Mul if is(&lhs, 1.0) => rhs,
		BinOp::Mul | BinOp::Div | BinOp::Pow if is(&rhs, 1.0) => lhs,
		BinOp::Pow if is(&rhs, 0.0) => Expr::Num(1.0),
		_ => Expr::binary(op, lhs, rhs),
	}
}

/// Rewrites derived functions into elementary ones.
pub(crate) fn elementary(expr: Expr) -> Expr {
	match expr {
		Expr::Call(Function::Tan, mut args) if args.len() == 1 => {
			let arg = elementary(args.remove(0));
			Expr::binary(
				BinOp::Div,
				Expr::Call(Function::Sin, vec![arg.clone()]),
				Expr::Call(Function::Cos, vec![arg]),
			)
		}
		Expr::Call(Function::Sqrt, mut args) if args.len() == 1 => {
			Expr::binary(BinOp::Pow, elementary(args.remove(0)), Expr::Num(0.5))
		}
		Expr::Call(function, args) => Expr::Call(function, args.into_iter().map(elementary).collect()),
		Expr::Neg(inner) => Expr::Neg(Box::new(elementary(*inner))),
		Expr::Binary(op, lhs, rhs) => Expr::binary(op, elementary(*lhs), elementary(*rhs)),
		Expr::Postfix(function, inner) => Expr::Postfix(function, Box::new(elementary(*inner))),
		leaf => leaf,
	}
}
