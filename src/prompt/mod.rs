//! Interactive prompt protocol.
//!
//! The workflow consumes prompts through the [Prompter] trait so the whole
//! update sequence can run against a scripted provider instead of a TTY.
//! Validation rules live here and are shared by every implementation; a
//! failed validation re-asks the same field rather than aborting.

pub mod console;
pub mod scripted;

pub use console::ConsolePrompter;
pub use scripted::ScriptedPrompter;

use crate::error::Result;
use crate::version::{is_strict_triple, BumpAction};

/// The fixed five-choice bump menu, in display order.
pub const ACTION_MENU: [(&str, BumpAction); 5] = [
    ("Increment patch (e.g., 0.0.1 -> 0.0.2)", BumpAction::Patch),
    ("Increment minor (e.g., 0.0.1 -> 0.1.0)", BumpAction::Minor),
    ("Increment major (e.g., 0.0.1 -> 1.0.0)", BumpAction::Major),
    ("Set custom version", BumpAction::Custom),
    ("Skip (no increment)", BumpAction::Skip),
];

/// Prompt provider consumed by the workflow, one request at a time.
pub trait Prompter {
    /// Pick one of the five bump actions.
    fn select_action(&mut self) -> Result<BumpAction>;

    /// Ask for a custom versionName; empty input falls back to the current
    /// label.
    fn input_custom_name(&mut self, current_name: &str, strict: bool) -> Result<String>;

    /// Ask for a custom versionCode; must be strictly greater than the
    /// current one. Empty input falls back to current + 1.
    fn input_custom_code(&mut self, current_code: u32) -> Result<u32>;

    /// Ask whether a changelog entry should be written.
    fn confirm_changelog(&mut self) -> Result<bool>;

    /// Ask for free-text release notes; `None` when left empty.
    fn input_release_notes(&mut self) -> Result<Option<String>>;
}

/// Resolve a menu reply ("1"-"5", empty defaults to the first choice).
pub fn parse_menu_selection(input: &str) -> std::result::Result<BumpAction, String> {
    let index = if input.is_empty() {
        1
    } else {
        input
            .parse::<usize>()
            .map_err(|_| format!("'{}' is not a valid selection", input))?
    };
    if index >= 1 && index <= ACTION_MENU.len() {
        Ok(ACTION_MENU[index - 1].1)
    } else {
        Err(format!(
            "Selection must be between 1 and {}",
            ACTION_MENU.len()
        ))
    }
}

/// Validate an operator-supplied versionName.
pub fn validate_custom_name(name: &str, strict: bool) -> std::result::Result<(), String> {
    if name.is_empty() {
        return Err("versionName must not be empty".to_string());
    }
    if strict && !is_strict_triple(name) {
        return Err("Invalid format (use X.Y.Z)".to_string());
    }
    Ok(())
}

/// Parse and validate an operator-supplied versionCode against the hard
/// strictly-greater precondition.
pub fn parse_custom_code(input: &str, current_code: u32) -> std::result::Result<u32, String> {
    let value = input
        .parse::<u32>()
        .map_err(|_| format!("'{}' is not a valid build number", input))?;
    if value > current_code {
        Ok(value)
    } else {
        Err(format!(
            "Must be greater than current versionCode {}",
            current_code
        ))
    }
}
