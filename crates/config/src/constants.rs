//! Centralized constants for the dotcfg workspace.
//!
//! This module contains separators, variable names and limits shared by the
//! store, the loader and the CLI.

// =============================================================================
// Key Paths
// =============================================================================

/// Separator between segments of a key path (`"db.connections.primary"`).
pub const PATH_SEPARATOR: char = '.';

/// Largest number of `null` slots a single write may append to a sequence.
///
/// Writing `items.5` into a three-element sequence pads indices 3 and 4.
/// An index reaching further replaces the sequence with a mapping keyed by
/// the numeric segment.
pub const MAX_SEQUENCE_PADDING: usize = 1024;

// =============================================================================
// Environment
// =============================================================================

/// Separator between the prefix and each path segment in environment variable
/// names (`APP__DB__PORT` addresses `db.port` under prefix `APP`).
pub const ENV_SEGMENT_SEPARATOR: &str = "__";

/// Setting this variable to `1` or `true` disables `.env` loading.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";

// =============================================================================
// Persistence
// =============================================================================

/// Suffix appended to a file name for the temporary file written before an
/// atomic rename (`config.json` is staged as `config.json.tmp`).
pub const TEMP_FILE_EXTENSION: &str = "tmp";
