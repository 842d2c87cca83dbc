use std::path::PathBuf;

use clap::Parser;


#[derive(Parser, Debug)]
#[command(name = "calcpp")]
#[command(about = "Calculator with live evaluation and undo history")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Configuration file (defaults to $XDG_CONFIG_HOME/calcpp/config.toml)
	#[arg(long, short = 'c', value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Verbose logging
	#[arg(long, short = 'v')]
	pub verbose: bool,

	/// Evaluate one expression, print the result and exit
	#[arg(long, short = 'e', value_name = "EXPR")]
	pub eval: Option<String>,
}

impl Cli {
	/// Explicit config path, or the default one when that file exists.
	pub fn config_path(&self) -> Option<PathBuf> {
		self.config.clone().or_else(|| default_config_path().filter(|path| path.is_file()))
	}
}

/// `$XDG_CONFIG_HOME/calcpp/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
	dirs::config_dir().map(|dir| dir.join("calcpp").join("config.toml"))
}
