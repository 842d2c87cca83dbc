//! Calculator configuration loaded from TOML.

use std::path::{Path, PathBuf};
use std::time::Duration;

use calcpp_engine::EngineConfig;
use calcpp_primitives::MessageId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::history::DEFAULT_HISTORY_LIMIT;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// Error parsing TOML syntax or an unexpected value.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),
}

/// Localized overrides for user-visible messages.
///
/// Unset entries fall back to [`MessageId::default_text`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Messages {
	pub syntax_error: Option<String>,
	pub result_copied: Option<String>,
	pub not_valid_result: Option<String>,
	pub empty_var_error: Option<String>,
}

impl Messages {
	/// Text shown for `id`.
	pub fn text(&self, id: MessageId) -> &str {
		let custom = match id {
			MessageId::SyntaxError => &self.syntax_error,
			MessageId::ResultCopied => &self.result_copied,
			MessageId::NotValidResult => &self.not_valid_result,
			MessageId::EmptyVarError => &self.empty_var_error,
		};
		custom.as_deref().unwrap_or(id.default_text())
	}
}

/// Top-level calculator settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct CalculatorConfig {
	/// Debounce before a delayed evaluation runs. Zero still defers the job
	/// to the next timer tick.
	pub eval_delay_ms: u64,
	/// Maximum number of retained history snapshots.
	pub history_limit: usize,
	pub messages: Messages,
	pub engine: EngineConfig,
}

impl Default for CalculatorConfig {
	fn default() -> Self {
		Self {
			eval_delay_ms: 0,
			history_limit: DEFAULT_HISTORY_LIMIT,
			messages: Messages::default(),
			engine: EngineConfig::default(),
		}
	}
}

impl CalculatorConfig {
	/// Parses a TOML document.
	pub fn parse(input: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(input)?)
	}

	/// Reads and parses the TOML file at `path`.
	pub fn load(path: &Path) -> Result<Self, ConfigError> {
		let input = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		let config = Self::parse(&input)?;
		tracing::debug!(path = %path.display(), "config.loaded");
		Ok(config)
	}

	pub fn eval_delay(&self) -> Duration {
		Duration::from_millis(self.eval_delay_ms)
	}

	/// Localized syntax-error placeholder.
	pub fn syntax_error(&self) -> &str {
		self.messages.text(MessageId::SyntaxError)
	}
}
