//! Command-line options for `sniff tokens`.

use std::path::{Path, PathBuf};

use sniff_lexer::{encoding_by_name, load_dialect, Dialect, TokenizerConfig};

use crate::CliError;

/// How token dumps are printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One aligned line per token.
    #[default]
    Text,
    Json,
}

/// Parsed `tokens` arguments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub files: Vec<PathBuf>,
    pub format: OutputFormat,
    /// `--encoding=<name>`, overriding the config file.
    pub encoding: Option<String>,
    /// `--tab-width=<n>`, overriding the config file.
    pub tab_width: Option<u32>,
    /// `--config=<file.json>`: a `TokenizerConfig` in JSON.
    pub config: Option<PathBuf>,
    /// `--dialect=<file.json>`: replaces the bundled PHP dialect.
    pub dialect: Option<PathBuf>,
}

impl Options {
    /// Parse the arguments following the `tokens` subcommand.
    pub fn parse(args: &[String]) -> Result<Self, CliError> {
        let mut options = Options::default();
        for arg in args {
            if arg == "--json" {
                options.format = OutputFormat::Json;
            } else if let Some(name) = arg.strip_prefix("--encoding=") {
                options.encoding = Some(name.to_owned());
            } else if let Some(width) = arg.strip_prefix("--tab-width=") {
                let width = width
                    .parse()
                    .map_err(|_| CliError::Usage(format!("invalid tab width '{width}'")))?;
                options.tab_width = Some(width);
            } else if let Some(path) = arg.strip_prefix("--config=") {
                options.config = Some(PathBuf::from(path));
            } else if let Some(path) = arg.strip_prefix("--dialect=") {
                options.dialect = Some(PathBuf::from(path));
            } else if arg.starts_with('-') {
                return Err(CliError::Usage(format!("unknown option '{arg}'")));
            } else {
                options.files.push(PathBuf::from(arg));
            }
        }
        if options.files.is_empty() {
            return Err(CliError::Usage("missing file path".to_owned()));
        }
        Ok(options)
    }

    /// The tokenizer config: defaults, then the config file, then flags.
    pub fn tokenizer_config(&self) -> Result<TokenizerConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => TokenizerConfig::from_json(&read_text(path)?).map_err(|source| {
                CliError::Config {
                    path: path.clone(),
                    source,
                }
            })?,
            None => TokenizerConfig::default(),
        };
        if let Some(name) = &self.encoding {
            config.encoding = encoding_by_name(name).map_err(|source| CliError::Tokenize {
                path: PathBuf::from("--encoding"),
                source,
            })?;
        }
        if let Some(width) = self.tab_width {
            config.tab_width = width;
        }
        Ok(config)
    }

    /// The dialect: the bundled PHP table unless `--dialect` names one.
    pub fn dialect(&self) -> Result<Dialect, CliError> {
        match &self.dialect {
            Some(path) => load_dialect(&read_text(path)?).map_err(|source| CliError::Tokenize {
                path: path.clone(),
                source,
            }),
            None => Dialect::php().map_err(|source| CliError::Config {
                path: PathBuf::from("dialects/php.json"),
                source,
            }),
        }
    }
}

fn read_text(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests;
