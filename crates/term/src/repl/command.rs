//! REPL line parsing.

use calcpp_editor::{HistoryAction, LaunchRequest};
use calcpp_engine::{AngleUnit, MAX_PRECISION};
use calcpp_primitives::OperationKind;
use thiserror::Error;

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
	/// Button tokens inserted at the caret, in order.
	Tokens(Vec<String>),
	/// `=`: numeric evaluation.
	Evaluate,
	EvaluateAs(OperationKind),
	History(HistoryAction),
	Clear,
	Erase,
	Left,
	Right,
	Home,
	End,
	Copy,
	CreateVar,
	Plot,
	Click,
	PrintHistory,
	Launch(LaunchRequest),
	SetPrecision(usize),
	SetAngle(AngleUnit),
	Help,
	Quit,
}

/// Rejected input line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
	#[error("unknown command :{0} (try :help)")]
	Unknown(String),
	#[error(":{0} needs an argument")]
	MissingArgument(&'static str),
	#[error("invalid argument for :{command}: {value}")]
	InvalidArgument { command: &'static str, value: String },
}

impl Command {
	/// Parses a line; `:`-prefixed words are commands, anything else is a
	/// list of button tokens.
	pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
		let line = line.trim();
		if line.is_empty() {
			return Ok(None);
		}
		if line == "=" {
			return Ok(Some(Self::Evaluate));
		}
		let Some(rest) = line.strip_prefix(':') else {
			return Ok(Some(Self::Tokens(line.split_whitespace().map(str::to_string).collect())));
		};

		let mut words = rest.split_whitespace();
		let name = words.next().unwrap_or_default();
		let arg = words.next();
		let command = match name {
			"undo" | "u" => Self::History(HistoryAction::Undo),
			"redo" | "r" => Self::History(HistoryAction::Redo),
			"clear" | "c" => Self::Clear,
			"erase" | "bs" => Self::Erase,
			"left" => Self::Left,
			"right" => Self::Right,
			"home" => Self::Home,
			"end" => Self::End,
			"copy" => Self::Copy,
			"var" => Self::CreateVar,
			"plot" => Self::Plot,
			"click" => Self::Click,
			"history" => Self::PrintHistory,
			"help" | "h" => Self::Help,
			"quit" | "q" => Self::Quit,
			"numeric" | "simplify" | "elementary" => {
				let kind = name.parse().map_err(|_| CommandError::Unknown(name.to_string()))?;
				Self::EvaluateAs(kind)
			}
			"precision" => {
				let value = arg.ok_or(CommandError::MissingArgument("precision"))?;
				let precision = value
					.parse::<usize>()
					.ok()
					.filter(|precision| *precision <= MAX_PRECISION)
					.ok_or_else(|| CommandError::InvalidArgument {
						command: "precision",
						value: value.to_string(),
					})?;
				Self::SetPrecision(precision)
			}
			"angle" => match arg {
				Some("deg") => Self::SetAngle(AngleUnit::Deg),
				Some("rad") => Self::SetAngle(AngleUnit::Rad),
				Some(value) => {
					return Err(CommandError::InvalidArgument {
						command: "angle",
						value: value.to_string(),
					});
				}
				None => return Err(CommandError::MissingArgument("angle")),
			},
			"show" => {
				let screen = arg.ok_or(CommandError::MissingArgument("show"))?;
				Self::Launch(screen_request(screen).ok_or_else(|| CommandError::InvalidArgument {
					command: "show",
					value: screen.to_string(),
				})?)
			}
			_ => return Err(CommandError::Unknown(name.to_string())),
		};
		Ok(Some(command))
	}
}

fn screen_request(screen: &str) -> Option<LaunchRequest> {
	Some(match screen {
		"history" => LaunchRequest::ShowHistory,
		"help" => LaunchRequest::ShowHelp,
		"settings" => LaunchRequest::ShowSettings,
		"about" => LaunchRequest::ShowAbout,
		"functions" => LaunchRequest::ShowFunctions,
		"operators" => LaunchRequest::ShowOperators,
		"vars" => LaunchRequest::ShowVars,
		_ => return None,
	})
}

pub const HELP: &str = "\
Type button tokens separated by spaces (e.g. `sin 3 0`), `=` to evaluate.
  :undo :redo :clear :erase      history and editing
  :left :right :home :end        caret
  :simplify :elementary :numeric evaluate under another operation
  :copy :var :plot :click        use the result
  :precision N  :angle deg|rad   engine settings
  :history  :show SCREEN  :quit";
