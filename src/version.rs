use std::fmt;

use regex::Regex;

use crate::error::{GradleBumpError, Result};

/// The action chosen from the bump menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpAction {
    Patch,
    Minor,
    Major,
    Custom,
    Skip,
}

/// Decomposition of a `versionName` string.
///
/// A label with a leading `major.minor[.patch]` numeric run is `Numeric`; the
/// trailing text (a prerelease tag like `-beta`, or nothing) is kept verbatim
/// in `suffix` and survives every structured increment unchanged. Anything
/// without a numeric prefix is `Opaque`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionLabel {
    Numeric {
        major: u32,
        minor: u32,
        patch: u32,
        suffix: String,
    },
    Opaque(String),
}

fn numeric_prefix_regex() -> Result<Regex> {
    Regex::new(r"^(\d+)\.(\d+)(?:\.(\d+))?(.*)$")
        .map_err(|e| GradleBumpError::parse(format!("invalid version label pattern: {}", e)))
}

impl VersionLabel {
    /// Decompose a raw versionName. Never fails: labels without a
    /// `major.minor` prefix are treated as opaque.
    pub fn parse(label: &str) -> Result<Self> {
        let re = numeric_prefix_regex()?;
        let parsed = match re.captures(label) {
            Some(caps) => {
                let major = caps[1].parse::<u32>();
                let minor = caps[2].parse::<u32>();
                let patch = caps
                    .get(3)
                    .map(|m| m.as_str().parse::<u32>())
                    .unwrap_or(Ok(0));
                match (major, minor, patch) {
                    (Ok(major), Ok(minor), Ok(patch)) => VersionLabel::Numeric {
                        major,
                        minor,
                        patch,
                        suffix: caps.get(4).map(|m| m.as_str()).unwrap_or("").to_string(),
                    },
                    // Digit runs too large for u32 fall back to opaque
                    _ => VersionLabel::Opaque(label.to_string()),
                }
            }
            None => VersionLabel::Opaque(label.to_string()),
        };
        Ok(parsed)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, VersionLabel::Numeric { .. })
    }

    /// Compute the new label for a structured bump.
    ///
    /// Numeric labels increment per semantic-versioning rules with lower
    /// components reset to 0 and the suffix carried over. Opaque labels get a
    /// `-<action><newCode>` marker so successive builds stay distinguishable.
    pub fn bump(&self, action: BumpAction, new_version_code: u32) -> String {
        match self {
            VersionLabel::Numeric {
                major,
                minor,
                patch,
                suffix,
            } => match action {
                BumpAction::Patch => format!("{}.{}.{}{}", major, minor, patch + 1, suffix),
                BumpAction::Minor => format!("{}.{}.0{}", major, minor + 1, suffix),
                BumpAction::Major => format!("{}.0.0{}", major + 1, suffix),
                BumpAction::Custom | BumpAction::Skip => self.to_string(),
            },
            VersionLabel::Opaque(label) => match action {
                BumpAction::Patch => format!("{}-patch{}", label, new_version_code),
                BumpAction::Minor => format!("{}-minor{}", label, new_version_code),
                BumpAction::Major => format!("{}-major{}", label, new_version_code),
                BumpAction::Custom | BumpAction::Skip => label.clone(),
            },
        }
    }
}

impl fmt::Display for VersionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionLabel::Numeric {
                major,
                minor,
                patch,
                suffix,
            } => write!(f, "{}.{}.{}{}", major, minor, patch, suffix),
            VersionLabel::Opaque(label) => write!(f, "{}", label),
        }
    }
}

/// Check a label against the strict `MAJOR.MINOR.PATCH` form.
pub fn is_strict_triple(label: &str) -> bool {
    let mut parts = 0;
    for part in label.split('.') {
        if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }
        parts += 1;
    }
    parts == 3
}

/// The computed outcome of a chosen action: the values that will land in the
/// descriptor if the workflow proceeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePlan {
    pub action: BumpAction,
    pub new_version_code: u32,
    pub new_version_name: String,
}

/// Build the plan for a non-custom action.
///
/// Patch/minor/major increment the build number by one and derive the label
/// from the current one; skip leaves both values untouched.
pub fn plan_structured_bump(
    action: BumpAction,
    current_code: u32,
    current_name: &str,
) -> Result<UpdatePlan> {
    let plan = match action {
        BumpAction::Patch | BumpAction::Minor | BumpAction::Major => {
            let label = VersionLabel::parse(current_name)?;
            let new_code = current_code + 1;
            UpdatePlan {
                action,
                new_version_code: new_code,
                new_version_name: label.bump(action, new_code),
            }
        }
        BumpAction::Skip => UpdatePlan {
            action,
            new_version_code: current_code,
            new_version_name: current_name.to_string(),
        },
        BumpAction::Custom => {
            return Err(GradleBumpError::validation(
                "custom action requires operator-supplied values",
            ))
        }
    };
    Ok(plan)
}
