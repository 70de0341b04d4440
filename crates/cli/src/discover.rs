//! Schedule-source candidate discovery.
//!
//! The import directory is scanned for tabular files whose names
//! contain the target date as `M-D` or `MM-DD`. With multiple
//! candidates, selection happens via `--pick` or `--latest`; declining
//! to choose cancels the run.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Datelike, Local, NaiveDate};
use prodsched_core::ScheduleError;

const RECOGNIZED_EXTENSIONS: &[&str] = &["xls", "xlsx", "csv"];

#[derive(Debug, Clone)]
pub struct Candidate {
    pub name: String,
    pub path: PathBuf,
    pub modified: SystemTime,
}

impl Candidate {
    pub fn modified_display(&self) -> String {
        DateTime::<Local>::from(self.modified)
            .format("%Y-%m-%d %H:%M")
            .to_string()
    }
}

/// Filename patterns for a target date: bare `M-D` plus zero-padded
/// `MM-DD` (identical for double-digit dates).
pub fn date_patterns(target: NaiveDate) -> Vec<String> {
    let bare = format!("{}-{}", target.month(), target.day());
    let padded = format!("{:02}-{:02}", target.month(), target.day());
    if bare == padded {
        vec![bare]
    } else {
        vec![bare, padded]
    }
}

/// Scan `dir` for candidates, newest first. An empty result is
/// `NoCandidate`; an unreadable directory is `Io`.
pub fn find_candidates(dir: &Path, target: NaiveDate) -> Result<Vec<Candidate>, ScheduleError> {
    let patterns = date_patterns(target);

    let entries = std::fs::read_dir(dir)
        .map_err(|e| ScheduleError::Io(format!("cannot read {}: {e}", dir.display())))?;

    let mut candidates = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let recognized = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| RECOGNIZED_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
            .unwrap_or(false);
        if !recognized || !patterns.iter().any(|p| name.contains(p.as_str())) {
            continue;
        }

        let modified = entry
            .metadata()
            .and_then(|m| m.modified())
            .unwrap_or(SystemTime::UNIX_EPOCH);
        candidates.push(Candidate {
            name: name.to_string(),
            path,
            modified,
        });
    }

    if candidates.is_empty() {
        return Err(ScheduleError::NoCandidate {
            dir: dir.display().to_string(),
            pattern: patterns.join("|"),
        });
    }

    candidates.sort_by(|a, b| b.modified.cmp(&a.modified));
    Ok(candidates)
}

/// Resolve a single candidate. One candidate needs no selector;
/// otherwise `pick` matches by file name and `latest` takes the newest.
/// Ambiguity without a selector, or a `pick` that matches nothing,
/// cancels the selection.
pub fn choose<'a>(
    candidates: &'a [Candidate],
    pick: Option<&str>,
    latest: bool,
) -> Result<&'a Candidate, ScheduleError> {
    if candidates.len() == 1 {
        return Ok(&candidates[0]);
    }
    if let Some(name) = pick {
        return candidates
            .iter()
            .find(|c| c.name == name)
            .ok_or(ScheduleError::SelectionCancelled);
    }
    if latest {
        return Ok(&candidates[0]);
    }
    Err(ScheduleError::SelectionCancelled)
}
