//! Miette-based error diagnostics for CLI error presentation.
//!
//! Configuration problems are the only errors that stop the calculator
//! before it starts, so they get source context and help text.

use std::path::Path;

use miette::{Diagnostic, NamedSource, Report, SourceSpan};
use thiserror::Error;

use crate::error::{ConfigError, Error};

/// Configuration error with source location context.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(traderisk::config))]
pub struct ConfigDiagnostic {
    /// Human-readable error message.
    pub message: String,

    /// The configuration file content.
    #[source_code]
    pub src: NamedSource<String>,

    /// Byte offset and length of the problematic region.
    #[label("here")]
    pub span: SourceSpan,

    /// Optional help text with suggestions for fixing the error.
    #[help]
    pub help: Option<String>,
}

impl ConfigDiagnostic {
    #[must_use]
    pub fn new(
        message: impl Into<String>,
        name: impl AsRef<str>,
        src: impl Into<String>,
        offset: usize,
        len: usize,
    ) -> Self {
        Self {
            message: message.into(),
            src: NamedSource::new(name, src.into()),
            span: (offset, len).into(),
            help: None,
        }
    }

    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Configuration problem without a source location.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(traderisk::config))]
pub struct SettingsError {
    pub message: String,

    #[help]
    pub help: Option<String>,
}

/// Turn a configuration load failure into a renderable report.
pub fn config_report(path: &Path, err: Error) -> Report {
    let help = format!(
        "fix {} or run `traderisk config init --force` to regenerate it",
        path.display()
    );

    if let Error::Config(ConfigError::Parse(parse)) = &err {
        if let (Some(span), Ok(src)) = (parse.span(), std::fs::read_to_string(path)) {
            let diagnostic = ConfigDiagnostic::new(
                format!("invalid configuration: {}", parse.message()),
                path.display().to_string(),
                src,
                span.start,
                span.end.saturating_sub(span.start),
            )
            .with_help(help);
            return Report::new(diagnostic);
        }
    }

    Report::new(SettingsError {
        message: err.to_string(),
        help: Some(help),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_errors_carry_a_span() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[logging\nlevel = \"info\"\n").unwrap();

        let err = crate::infrastructure::config::settings::Config::load(&path).unwrap_err();
        let report = config_report(&path, err);
        let diagnostic = report
            .downcast_ref::<ConfigDiagnostic>()
            .expect("parse error should map to a located diagnostic");
        assert!(diagnostic.message.starts_with("invalid configuration"));
        assert!(diagnostic.help.is_some());
    }

    #[test]
    fn validation_errors_map_to_plain_diagnostic() {
        let err: Error = ConfigError::InvalidValue {
            field: "format",
            reason: "must be one of pretty, json".into(),
        }
        .into();
        let report = config_report(Path::new("missing.toml"), err);
        let diagnostic = report.downcast_ref::<SettingsError>().unwrap();
        assert!(diagnostic.message.contains("format"));
    }
}
