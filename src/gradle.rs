//! Build descriptor field extraction and in-place rewrite.
//!
//! The descriptor is not parsed as a grammar: both fields are located by a
//! fixed first-match pattern and replaced in place, leaving every other byte
//! of the file untouched.

use regex::{Captures, Regex};

use crate::error::{GradleBumpError, Result};

/// The two version fields read from a build.gradle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradleVersions {
    pub version_code: u32,
    pub version_name: String,
}

fn version_code_regex() -> Result<Regex> {
    Regex::new(r"(versionCode\s+)(\d+)")
        .map_err(|e| GradleBumpError::parse(format!("invalid versionCode pattern: {}", e)))
}

fn version_name_regex(strict: bool) -> Result<Regex> {
    let pattern = if strict {
        r#"(versionName\s+)(")(\d+\.\d+\.\d+)(")"#
    } else {
        r#"(versionName\s+)(["'])([^"']+)(["'])"#
    };
    Regex::new(pattern)
        .map_err(|e| GradleBumpError::parse(format!("invalid versionName pattern: {}", e)))
}

/// Extract `versionCode` and `versionName` from descriptor text.
///
/// Only the first occurrence of each field is considered. A missing field is
/// a parse error whose message spells out both expected literal forms so the
/// operator can correct the source file.
pub fn parse_versions(content: &str, strict: bool) -> Result<GradleVersions> {
    let code_caps = version_code_regex()?.captures(content);
    let name_caps = version_name_regex(strict)?.captures(content);

    let (code_caps, name_caps) = match (code_caps, name_caps) {
        (Some(code), Some(name)) => (code, name),
        _ => {
            let name_form = if strict {
                r#"versionName "X.Y.Z""#
            } else {
                r#"versionName "<label>""#
            };
            return Err(GradleBumpError::parse(format!(
                "versionCode or versionName not found in descriptor; expected lines matching `versionCode <number>` and `{}`",
                name_form
            )));
        }
    };

    let version_code = code_caps[2]
        .parse::<u32>()
        .map_err(|e| GradleBumpError::parse(format!("versionCode is not a valid number: {}", e)))?;

    Ok(GradleVersions {
        version_code,
        version_name: name_caps[3].to_string(),
    })
}

/// Rewrite the first `versionCode` and `versionName` occurrences with new
/// values, preserving field spacing and the original quote style.
pub fn rewrite_versions(
    content: &str,
    new_code: u32,
    new_name: &str,
    strict: bool,
) -> Result<String> {
    let with_code = version_code_regex()?.replace(content, |caps: &Captures| {
        format!("{}{}", &caps[1], new_code)
    });
    let with_name = version_name_regex(strict)?.replace(&with_code, |caps: &Captures| {
        format!("{}{}{}{}", &caps[1], &caps[2], new_name, &caps[4])
    });
    Ok(with_name.into_owned())
}
