//! Requests for surrounding screens and display interaction results.

use serde::{Deserialize, Serialize};

/// Screen a [`Launcher`](crate::Launcher) should open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "screen", rename_all = "kebab-case")]
pub enum LaunchRequest {
	ShowHistory,
	ShowHelp,
	ShowSettings,
	ShowAbout,
	ShowFunctions,
	ShowOperators,
	ShowVars,
	/// Plot `expression` over its single free `variable`.
	PlotGraph { expression: String, variable: String },
	/// Open the variable editor prefilled with `value`.
	CreateVar { value: String },
}

impl LaunchRequest {
	/// String key of the target screen.
	pub const fn key(&self) -> &'static str {
		match self {
			Self::ShowHistory => "history",
			Self::ShowHelp => "help",
			Self::ShowSettings => "settings",
			Self::ShowAbout => "about",
			Self::ShowFunctions => "functions",
			Self::ShowOperators => "operators",
			Self::ShowVars => "vars",
			Self::PlotGraph { .. } => "plot",
			Self::CreateVar { .. } => "create_var",
		}
	}
}

/// Entries of the result context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuItem {
	Copy,
	ConvertToVar,
	Plot,
}

impl MenuItem {
	pub const ALL: [Self; 3] = [Self::Copy, Self::ConvertToVar, Self::Plot];
}

/// What tapping the display should bring up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayAction {
	/// Context menu with the applicable items, in [`MenuItem::ALL`] order.
	Menu(Vec<MenuItem>),
	/// Error dialog for an invalid result.
	ShowError(String),
	/// Nothing to offer.
	None,
}
