//! UI helper functions for terminal output formatting.

use std::io::Write;

/// Writes `Error: <msg>` on its own line.
pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}
