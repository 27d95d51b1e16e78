//! Interactive stdin prompt provider.
//!
//! Each field re-asks until a valid value is supplied; aborting the process
//! is the only other way out, matching the recoverable-validation contract.

use std::io::{self, Write};

use crate::error::Result;
use crate::prompt::{
    parse_custom_code, parse_menu_selection, validate_custom_name, Prompter, ACTION_MENU,
};
use crate::ui;
use crate::version::BumpAction;

#[derive(Default)]
pub struct ConsolePrompter;

impl ConsolePrompter {
    pub fn new() -> Self {
        ConsolePrompter
    }

    fn read_reply(prompt: &str) -> Result<String> {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        Ok(input.trim().to_string())
    }
}

impl Prompter for ConsolePrompter {
    fn select_action(&mut self) -> Result<BumpAction> {
        println!("\n\x1b[1mWhat do you want to do with the version?\x1b[0m");
        for (i, (label, _)) in ACTION_MENU.iter().enumerate() {
            println!("  {}. {}", i + 1, label);
        }

        loop {
            let reply = Self::read_reply(&format!(
                "\nSelect an action (1-{}) [default: 1]: ",
                ACTION_MENU.len()
            ))?;
            match parse_menu_selection(&reply) {
                Ok(action) => return Ok(action),
                Err(msg) => ui::display_error(&msg),
            }
        }
    }

    fn input_custom_name(&mut self, current_name: &str, strict: bool) -> Result<String> {
        loop {
            let reply =
                Self::read_reply(&format!("Enter new versionName [{}]: ", current_name))?;
            let name = if reply.is_empty() {
                current_name.to_string()
            } else {
                reply
            };
            match validate_custom_name(&name, strict) {
                Ok(()) => return Ok(name),
                Err(msg) => ui::display_error(&msg),
            }
        }
    }

    fn input_custom_code(&mut self, current_code: u32) -> Result<u32> {
        loop {
            let reply = Self::read_reply(&format!(
                "Enter new versionCode [default: {}]: ",
                current_code + 1
            ))?;
            let candidate = if reply.is_empty() {
                return Ok(current_code + 1);
            } else {
                reply
            };
            match parse_custom_code(&candidate, current_code) {
                Ok(code) => return Ok(code),
                Err(msg) => ui::display_error(&msg),
            }
        }
    }

    fn confirm_changelog(&mut self) -> Result<bool> {
        let reply = Self::read_reply("\nGenerate a changelog entry? (Y/n): ")?;
        let response = reply.to_lowercase();
        Ok(!(response == "n" || response == "no"))
    }

    fn input_release_notes(&mut self) -> Result<Option<String>> {
        println!("Release notes, one line per bullet (blank line to finish):");
        let mut lines: Vec<String> = Vec::new();
        loop {
            let mut input = String::new();
            io::stdin().read_line(&mut input)?;
            let line = input.trim_end().to_string();
            if line.trim().is_empty() {
                break;
            }
            lines.push(line);
        }
        if lines.is_empty() {
            Ok(None)
        } else {
            Ok(Some(lines.join("\n")))
        }
    }
}
