use std::fmt;
use serde::{Deserialize, Serialize};

/// Declaration order gives the sort order: `Info < Warning < Error`.
#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum IssueSeverity {
    #[default]
    Info,
    Warning,
    Error,
}

impl IssueSeverity {
    /// Case-insensitive parse of a model-supplied severity. Anything
    /// unrecognized becomes `Info`.
    pub fn parse_lenient(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("error") => IssueSeverity::Error,
            Some("warning") => IssueSeverity::Warning,
            _ => IssueSeverity::Info,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            IssueSeverity::Info => "Info",
            IssueSeverity::Warning => "Warning",
            IssueSeverity::Error => "Error",
        }
    }
}

impl fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
