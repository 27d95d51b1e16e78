//! File access layer for the descriptor and the changelog.
//!
//! Every mutating helper checks the dry-run flag before touching the file
//! system and emits one human-readable trace line describing what happened
//! or would have happened.

use std::fs;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::changelog::{ChangelogEntry, CHANGELOG_HEADER};
use crate::error::{GradleBumpError, Result};
use crate::ui;

pub struct FileOps {
    dry_run: bool,
}

impl FileOps {
    pub fn new(dry_run: bool) -> Self {
        FileOps { dry_run }
    }

    /// Read the descriptor text.
    pub fn read_descriptor(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|e| GradleBumpError::read(path, e))
    }

    /// Overwrite the descriptor with updated content.
    pub fn write_descriptor(&self, path: &Path, content: &str) -> Result<()> {
        if self.dry_run {
            ui::display_dry_run_content(
                &format!("would update '{}' with", path.display()),
                content,
            );
            return Ok(());
        }
        fs::write(path, content).map_err(|e| GradleBumpError::write(path, e))?;
        ui::display_success(&format!("Updated {}", path.display()));
        Ok(())
    }

    /// Copy the descriptor to `<path>.bak`, overwriting any prior backup.
    ///
    /// Runs before the mutating write whenever a change will be applied.
    pub fn backup_descriptor(&self, path: &Path) -> Result<PathBuf> {
        let backup_path = backup_path_for(path);
        if self.dry_run {
            ui::display_status(&format!(
                "[dry-run] would create backup at '{}'",
                backup_path.display()
            ));
            return Ok(backup_path);
        }
        fs::copy(path, &backup_path).map_err(|e| GradleBumpError::write(&backup_path, e))?;
        ui::display_success(&format!("Backup created at {}", backup_path.display()));
        Ok(backup_path)
    }

    /// Append a rendered entry to the changelog, creating the file with its
    /// heading line first if it does not exist yet.
    pub fn append_changelog(&self, path: &Path, entry: &ChangelogEntry) -> Result<()> {
        let section = entry.render();
        if self.dry_run {
            ui::display_dry_run_content(
                &format!("would append to '{}'", path.display()),
                &section,
            );
            return Ok(());
        }
        if !path.exists() {
            fs::write(path, CHANGELOG_HEADER).map_err(|e| GradleBumpError::write(path, e))?;
        }
        let mut file = OpenOptions::new()
            .append(true)
            .open(path)
            .map_err(|e| GradleBumpError::write(path, e))?;
        file.write_all(section.as_bytes())
            .map_err(|e| GradleBumpError::write(path, e))?;
        ui::display_success(&format!("Changelog updated at {}", path.display()));
        Ok(())
    }
}

/// Backup location for a descriptor path.
pub fn backup_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".bak");
    PathBuf::from(name)
}
