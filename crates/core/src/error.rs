use std::fmt;

/// Aborting error taxonomy for a report run.
///
/// Per-row problems (unparseable dates, non-numeric quantities) are
/// absorbed where they occur and never appear here: absence degrades
/// to zero/empty values inside the engine.
#[derive(Debug)]
pub enum ScheduleError {
    /// No schedule source file matched the target date.
    NoCandidate { dir: String, pattern: String },
    /// Multiple candidates existed and none was selected.
    SelectionCancelled,
    /// A supplied grid's source format is not a recognized tabular format.
    UnsupportedFormat { path: String },
    /// IO error (file read/write, directory listing).
    Io(String),
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCandidate { dir, pattern } => {
                write!(f, "no schedule source matching '{pattern}' in {dir}")
            }
            Self::SelectionCancelled => {
                write!(f, "schedule source selection was cancelled")
            }
            Self::UnsupportedFormat { path } => {
                write!(f, "unsupported file format: {path}")
            }
            Self::Io(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl std::error::Error for ScheduleError {}
