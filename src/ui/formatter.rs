//! Pure formatting functions for UI output.
//!
//! This module contains all display/formatting logic separated from user
//! interaction. Functions here are pure (no I/O side effects beyond printing)
//! and testable.

use crate::boundary::BoundaryWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("\x1b[33m→\x1b[0m {}", message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("\x1b[33m⚠ WARNING:\x1b[0m {}", warning);
}

/// Display the version fields read from the descriptor.
pub fn display_current_versions(version_code: u32, version_name: &str) {
    println!("\n\x1b[1mCurrent versions:\x1b[0m");
    println!("  versionCode: {}", version_code);
    println!("  versionName: \x1b[36m{}\x1b[0m", version_name);
}

/// Display the proposed field changes before they are applied.
///
/// Shows old and new values side by side for both fields.
pub fn display_proposed_update(
    old_code: u32,
    old_name: &str,
    new_code: u32,
    new_name: &str,
) {
    println!("\n\x1b[1mProposed update:\x1b[0m");
    println!(
        "  versionCode: \x1b[31m{}\x1b[0m -> \x1b[32m{}\x1b[0m",
        old_code, new_code
    );
    println!(
        "  versionName: \x1b[31m{}\x1b[0m -> \x1b[32m{}\x1b[0m",
        old_name, new_name
    );
}

/// Display content a dry run would have written.
///
/// The label names the operation (e.g. the target path); the content is
/// printed verbatim underneath.
pub fn display_dry_run_content(label: &str, content: &str) {
    println!("\x1b[33m→\x1b[0m [dry-run] {}:", label);
    println!("{}", content);
}

/// Display the final summary after an applied update.
pub fn display_summary(
    version_code: u32,
    version_name: &str,
    changelog_written: bool,
    notes: Option<&str>,
) {
    println!("\n\x1b[1mSummary:\x1b[0m");
    println!("  versionCode: {}", version_code);
    println!("  versionName: {}", version_name);
    if changelog_written {
        println!("  changelog:   entry appended");
    } else {
        println!("  changelog:   skipped");
    }
    if let Some(notes) = notes {
        println!("  notes:");
        for line in notes.lines() {
            println!("    - {}", line);
        }
    }
}
