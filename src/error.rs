//! Error handling for station uptime input parsing.
//!
//! Every variant is fatal at the point of detection: parsing stops at the
//! first problem and no partial result is produced. The uptime engine itself
//! has no error path once it is handed validated input.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UptimeError {
    #[error("Failed to read input file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Missing required section: {section}")]
    MissingSection { section: String },

    #[error("Malformed line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    #[error("Invalid boolean token on line {line}: '{token}' (expected 'true' or 'false')")]
    InvalidBooleanToken { line: usize, token: String },

    #[error("Invalid time range on line {line}: start {start} is after end {end}")]
    InvalidTimeRange { line: usize, start: u64, end: u64 },

    #[error("Report on line {line} references undeclared charger '{charger_id}'")]
    UnknownChargerReference { line: usize, charger_id: String },
}

impl UptimeError {
    /// Create a malformed line error
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedLine {
            line,
            reason: reason.into(),
        }
    }

    /// Create a missing section error
    pub fn missing_section(section: impl Into<String>) -> Self {
        Self::MissingSection {
            section: section.into(),
        }
    }

    /// Attach the source line to a line-level error
    pub fn at_line(mut self, source_line: usize) -> Self {
        match &mut self {
            Self::MalformedLine { line, .. }
            | Self::InvalidBooleanToken { line, .. }
            | Self::InvalidTimeRange { line, .. }
            | Self::UnknownChargerReference { line, .. } => *line = source_line,
            Self::Io { .. } | Self::MissingSection { .. } => {}
        }
        self
    }

    /// Line number the error was detected on, if it came from a specific line
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::MalformedLine { line, .. }
            | Self::InvalidBooleanToken { line, .. }
            | Self::InvalidTimeRange { line, .. }
            | Self::UnknownChargerReference { line, .. } => Some(*line),
            Self::Io { .. } | Self::MissingSection { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, UptimeError>;
