//! Scripted prompt provider for tests and non-interactive callers.
//!
//! Answers are consumed in order, exactly as an operator would have typed
//! them. An answer that fails a field's validation is discarded and the next
//! one is tried, mirroring the console re-prompt loop; running out of answers
//! is a validation error.

use std::collections::VecDeque;

use crate::error::{GradleBumpError, Result};
use crate::prompt::{parse_custom_code, parse_menu_selection, validate_custom_name, Prompter};
use crate::version::BumpAction;

pub struct ScriptedPrompter {
    answers: VecDeque<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        ScriptedPrompter {
            answers: answers.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.answers.is_empty()
    }

    fn next_answer(&mut self, field: &str) -> Result<String> {
        self.answers.pop_front().ok_or_else(|| {
            GradleBumpError::validation(format!("script exhausted while answering '{}'", field))
        })
    }
}

impl Prompter for ScriptedPrompter {
    fn select_action(&mut self) -> Result<BumpAction> {
        loop {
            let reply = self.next_answer("action")?;
            if let Ok(action) = parse_menu_selection(reply.trim()) {
                return Ok(action);
            }
        }
    }

    fn input_custom_name(&mut self, current_name: &str, strict: bool) -> Result<String> {
        loop {
            let reply = self.next_answer("versionName")?;
            let name = if reply.is_empty() {
                current_name.to_string()
            } else {
                reply
            };
            if validate_custom_name(&name, strict).is_ok() {
                return Ok(name);
            }
        }
    }

    fn input_custom_code(&mut self, current_code: u32) -> Result<u32> {
        loop {
            let reply = self.next_answer("versionCode")?;
            if reply.is_empty() {
                return Ok(current_code + 1);
            }
            if let Ok(code) = parse_custom_code(&reply, current_code) {
                return Ok(code);
            }
        }
    }

    fn confirm_changelog(&mut self) -> Result<bool> {
        let reply = self.next_answer("changelog confirmation")?;
        let response = reply.to_lowercase();
        Ok(!(response == "n" || response == "no"))
    }

    fn input_release_notes(&mut self) -> Result<Option<String>> {
        let reply = self.next_answer("release notes")?;
        if reply.trim().is_empty() {
            Ok(None)
        } else {
            Ok(Some(reply))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_action_selection() {
        let mut prompter = ScriptedPrompter::new(&["3"]);
        assert_eq!(prompter.select_action().unwrap(), BumpAction::Major);
        assert!(prompter.is_exhausted());
    }

    #[test]
    fn test_scripted_action_default_on_empty() {
        let mut prompter = ScriptedPrompter::new(&[""]);
        assert_eq!(prompter.select_action().unwrap(), BumpAction::Patch);
    }

    #[test]
    fn test_invalid_answer_consumes_and_retries() {
        let mut prompter = ScriptedPrompter::new(&["9", "5"]);
        assert_eq!(prompter.select_action().unwrap(), BumpAction::Skip);
    }

    #[test]
    fn test_exhausted_script_is_validation_error() {
        let mut prompter = ScriptedPrompter::new(&[]);
        let err = prompter.select_action().unwrap_err();
        assert!(err.to_string().contains("script exhausted"));
    }

    #[test]
    fn test_custom_code_rejects_until_valid() {
        let mut prompter = ScriptedPrompter::new(&["4", "6", "7"]);
        // current is 6: both 4 and 6 are rejected, 7 is accepted
        assert_eq!(prompter.input_custom_code(6).unwrap(), 7);
    }

    #[test]
    fn test_custom_code_empty_defaults_to_increment() {
        let mut prompter = ScriptedPrompter::new(&[""]);
        assert_eq!(prompter.input_custom_code(6).unwrap(), 7);
    }

    #[test]
    fn test_custom_name_defaults_to_current() {
        let mut prompter = ScriptedPrompter::new(&[""]);
        assert_eq!(
            prompter.input_custom_name("1.2.3", false).unwrap(),
            "1.2.3"
        );
    }

    #[test]
    fn test_custom_name_strict_retries() {
        let mut prompter = ScriptedPrompter::new(&["2.0-beta", "2.0.0"]);
        assert_eq!(prompter.input_custom_name("1.2.3", true).unwrap(), "2.0.0");
    }

    #[test]
    fn test_confirm_changelog_defaults_to_yes() {
        let mut prompter = ScriptedPrompter::new(&["", "n", "y"]);
        assert!(prompter.confirm_changelog().unwrap());
        assert!(!prompter.confirm_changelog().unwrap());
        assert!(prompter.confirm_changelog().unwrap());
    }

    #[test]
    fn test_release_notes_empty_is_none() {
        let mut prompter = ScriptedPrompter::new(&["", "Fixed crash\nAdded dark mode"]);
        assert_eq!(prompter.input_release_notes().unwrap(), None);
        assert_eq!(
            prompter.input_release_notes().unwrap(),
            Some("Fixed crash\nAdded dark mode".to_string())
        );
    }
}
