//! User interface module - formatting and trace output.
//!
//! Interactive input lives in [crate::prompt]; everything here only prints.

pub mod formatter;

pub use formatter::{
    display_boundary_warning, display_current_versions, display_dry_run_content, display_error,
    display_proposed_update, display_status, display_success, display_summary,
};
