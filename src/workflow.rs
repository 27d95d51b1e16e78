//! Main workflow orchestration logic.
//!
//! Sequences descriptor reading, field parsing, the interactive bump menu,
//! and the mutation sequence (backup, rewrite, changelog). Decoupled from
//! clap so the workflow can be driven programmatically with any [Prompter].

use std::path::PathBuf;

use crate::boundary::BoundaryWarning;
use crate::changelog::ChangelogEntry;
use crate::error::Result;
use crate::file_ops::{backup_path_for, FileOps};
use crate::gradle;
use crate::prompt::Prompter;
use crate::ui;
use crate::version::{plan_structured_bump, BumpAction, UpdatePlan, VersionLabel};

/// Arguments for the update workflow.
///
/// Mirrors the CLI surface but in resolved form, so the workflow never
/// consults the process environment itself.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateWorkflowArgs {
    /// Resolved path to the build descriptor
    pub gradle_path: PathBuf,

    /// Resolved path to the changelog file
    pub changelog_path: PathBuf,

    /// Preview mode - no file mutation anywhere
    pub dry_run: bool,

    /// Require strict MAJOR.MINOR.PATCH version names
    pub strict_names: bool,

    /// Append a changelog entry without asking
    pub always_changelog: bool,
}

/// Result of a completed update workflow.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// Whether the descriptor was (or, in dry-run, would have been) rewritten
    pub changed: bool,

    /// The versionCode after the run
    pub version_code: u32,

    /// The versionName after the run
    pub version_name: String,

    /// Whether a changelog entry was (or would have been) appended
    pub changelog_written: bool,
}

/// Owns the resolved paths and the dry-run flag for one invocation.
pub struct VersionManager {
    args: UpdateWorkflowArgs,
    file_ops: FileOps,
}

impl VersionManager {
    pub fn new(args: UpdateWorkflowArgs) -> Self {
        let file_ops = FileOps::new(args.dry_run);
        VersionManager { args, file_ops }
    }

    /// Run one interactive update session.
    ///
    /// Steps are strictly ordered: read, parse, menu, plan, no-op check,
    /// changelog prompts, backup, rewrite, changelog append, summary.
    /// Errors propagate to the caller; only the CLI shell exits the process.
    pub fn update_version(&self, prompter: &mut dyn Prompter) -> Result<WorkflowResult> {
        let content = self.file_ops.read_descriptor(&self.args.gradle_path)?;
        let current = gradle::parse_versions(&content, self.args.strict_names)?;
        ui::display_current_versions(current.version_code, &current.version_name);

        let label = VersionLabel::parse(&current.version_name)?;
        if !label.is_numeric() {
            ui::display_boundary_warning(&BoundaryWarning::OpaqueVersionName {
                name: current.version_name.clone(),
            });
        }

        let action = prompter.select_action()?;
        let plan = match action {
            BumpAction::Custom => {
                let name = prompter
                    .input_custom_name(&current.version_name, self.args.strict_names)?;
                let code = prompter.input_custom_code(current.version_code)?;
                UpdatePlan {
                    action,
                    new_version_code: code,
                    new_version_name: name,
                }
            }
            _ => plan_structured_bump(action, current.version_code, &current.version_name)?,
        };

        if plan.new_version_code == current.version_code
            && plan.new_version_name == current.version_name
        {
            ui::display_status("No version changes applied.");
            return Ok(WorkflowResult {
                changed: false,
                version_code: current.version_code,
                version_name: current.version_name,
                changelog_written: false,
            });
        }

        let write_changelog = self.args.always_changelog || prompter.confirm_changelog()?;
        let notes = if write_changelog {
            prompter.input_release_notes()?
        } else {
            None
        };

        ui::display_proposed_update(
            current.version_code,
            &current.version_name,
            plan.new_version_code,
            plan.new_version_name.as_str(),
        );

        if backup_path_for(&self.args.gradle_path).exists() {
            ui::display_boundary_warning(&BoundaryWarning::ExistingBackup {
                path: backup_path_for(&self.args.gradle_path),
            });
        }
        self.file_ops.backup_descriptor(&self.args.gradle_path)?;

        let new_content = gradle::rewrite_versions(
            &content,
            plan.new_version_code,
            &plan.new_version_name,
            self.args.strict_names,
        )?;
        self.file_ops
            .write_descriptor(&self.args.gradle_path, &new_content)?;

        if write_changelog {
            let entry = ChangelogEntry::new(
                plan.new_version_name.clone(),
                plan.new_version_code,
                notes.clone(),
            );
            self.file_ops
                .append_changelog(&self.args.changelog_path, &entry)?;
        } else {
            ui::display_status("Changelog entry skipped.");
        }

        ui::display_summary(
            plan.new_version_code,
            &plan.new_version_name,
            write_changelog,
            notes.as_deref(),
        );

        Ok(WorkflowResult {
            changed: true,
            version_code: plan.new_version_code,
            version_name: plan.new_version_name,
            changelog_written: write_changelog,
        })
    }
}
