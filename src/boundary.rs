use std::fmt;
use std::path::PathBuf;

/// Non-fatal conditions surfaced to the operator before the workflow
/// proceeds.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// versionName has no numeric `major.minor` prefix; structured bumps
    /// will fall back to suffix-tagged labels
    OpaqueVersionName { name: String },
    /// A previous backup exists and will be overwritten
    ExistingBackup { path: PathBuf },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::OpaqueVersionName { name } => {
                write!(
                    f,
                    "versionName '{}' has no numeric major.minor prefix; structured bumps will append an increment marker instead",
                    name
                )
            }
            BoundaryWarning::ExistingBackup { path } => {
                write!(f, "Existing backup '{}' will be overwritten", path.display())
            }
        }
    }
}
