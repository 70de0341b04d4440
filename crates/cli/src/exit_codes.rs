//! CLI exit code registry.
//!
//! Exit codes are part of the shell contract — scripts rely on them.
//!
//! | Code | Meaning                                   |
//! |------|-------------------------------------------|
//! | 0    | Success                                   |
//! | 1    | General error (unspecified)               |
//! | 2    | Usage error (bad args, unreadable config) |
//! | 3    | No schedule-source candidate found        |
//! | 4    | Candidate selection required / cancelled  |
//! | 5    | Unsupported file format                   |
//! | 6    | Runtime error (IO, write failure)         |

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// Usage error - bad arguments, unreadable or invalid config.
pub const EXIT_USAGE: u8 = 2;

/// No schedule source file matched the target date.
pub const EXIT_NO_CANDIDATE: u8 = 3;

/// Multiple candidates and neither `--pick` nor `--latest` given.
pub const EXIT_SELECTION: u8 = 4;

/// A supplied file's format is not a recognized tabular format.
pub const EXIT_FORMAT: u8 = 5;

/// Runtime error - file read/write, directory listing.
pub const EXIT_RUNTIME: u8 = 6;
