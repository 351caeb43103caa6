// ============================================================================
// mediatab-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING
//
// The CLI reuses the core error type; any error reaching `main` exits 1.

// ---- Internal crate imports ----
use mediatab_core::{CoreError, CoreResult};

/// Type alias for CLI results using CoreError.
pub type CliResult<T> = CoreResult<T>;

/// Error for a probing run started without any path arguments.
pub fn missing_paths_error() -> CoreError {
    CoreError::Config(
        "no paths given: pass media files or directories, or use --cached".to_string(),
    )
}
