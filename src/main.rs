use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;

use gradle_bump::config;
use gradle_bump::prompt::ConsolePrompter;
use gradle_bump::ui;
use gradle_bump::workflow::{UpdateWorkflowArgs, VersionManager};

#[derive(clap::Parser)]
#[command(
    name = "gradle-bump",
    about = "Interactively bump versionCode and versionName in an Android build.gradle"
)]
struct Args {
    #[arg(short, long, help = "Path to build.gradle (overrides config)")]
    gradle: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Path to the changelog file (overrides config)")]
    changelog: Option<String>,

    #[arg(long, help = "Preview what would happen without making changes")]
    dry_run: bool,

    #[arg(long, help = "Require strict MAJOR.MINOR.PATCH version names")]
    strict: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("gradle-bump {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    let gradle_path = resolve_path(args.gradle.as_deref().unwrap_or(&config.gradle_path));
    let changelog_path =
        resolve_path(args.changelog.as_deref().unwrap_or(&config.changelog_path));

    let manager = VersionManager::new(UpdateWorkflowArgs {
        gradle_path,
        changelog_path,
        dry_run: args.dry_run,
        strict_names: args.strict || config.strict_names,
        always_changelog: config.behavior.always_changelog,
    });

    let mut prompter = ConsolePrompter::new();
    match manager.update_version(&mut prompter) {
        Ok(_) => Ok(()),
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }
}

fn resolve_path(input_path: &str) -> PathBuf {
    let path = Path::new(input_path);

    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    }
}
