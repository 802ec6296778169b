//! Build automation for ecsctl
//!
//! Usage: cargo xtask <command>
//!
//! Available commands:
//! - build: Build the ecsctl binary
//! - test: Run unit and integration tests
//! - dist: Package a release tarball
//! - ci: Run format, clippy and test checks

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use xshell::{cmd, Shell};

const BIN_NAME: &str = "ecsctl";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for ecsctl")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the ecsctl binary
    Build {
        /// Build in release mode
        #[arg(long)]
        release: bool,
    },
    /// Run tests
    Test {
        /// Run a single integration test target (e.g. follow_test)
        #[arg(long)]
        target: Option<String>,
    },
    /// Package target/release/ecsctl and the README into dist/
    Dist {
        /// Target triple (e.g., x86_64-unknown-linux-gnu)
        #[arg(long)]
        target: Option<String>,
    },
    /// Run CI checks (format, clippy, test)
    Ci,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let sh = Shell::new()?;

    sh.change_dir(project_root()?);

    match cli.command {
        Commands::Build { release } => build(&sh, release),
        Commands::Test { target } => test(&sh, target.as_deref()),
        Commands::Dist { target } => dist(&sh, target.as_deref()),
        Commands::Ci => ci(&sh),
    }
}

fn build(sh: &Shell, release: bool) -> Result<()> {
    let profile_args: &[&str] = if release { &["--release"] } else { &[] };
    cmd!(sh, "cargo build --bin {BIN_NAME} {profile_args...}").run()?;
    println!("built {}", if release { "release" } else { "debug" });
    Ok(())
}

fn test(sh: &Shell, target: Option<&str>) -> Result<()> {
    match target {
        Some(name) => cmd!(sh, "cargo test --test {name}").run()?,
        None => cmd!(sh, "cargo test --package ecsctl").run()?,
    }
    Ok(())
}

fn dist(sh: &Shell, target: Option<&str>) -> Result<()> {
    let release_dir = match target {
        Some(triple) => {
            cmd!(sh, "cargo build --release --bin {BIN_NAME} --target {triple}").run()?;
            format!("target/{}/release", triple)
        }
        None => {
            cmd!(sh, "cargo build --release --bin {BIN_NAME}").run()?;
            "target/release".to_string()
        }
    };

    let binary = Path::new(&release_dir).join(BIN_NAME);
    if !sh.path_exists(&binary) {
        bail!("release binary not found at {}", binary.display());
    }

    let dist_dir = PathBuf::from("dist");
    sh.create_dir(&dist_dir)?;
    sh.copy_file(&binary, dist_dir.join(BIN_NAME))?;
    sh.copy_file("README.md", dist_dir.join("README.md"))?;

    let version = env!("CARGO_PKG_VERSION");
    let suffix = target.unwrap_or("local");
    let archive = format!("{}-{}-{}.tar.gz", BIN_NAME, version, suffix);

    cmd!(sh, "tar -czf {archive} -C dist {BIN_NAME} README.md")
        .run()
        .context("Failed to create tarball")?;

    println!("wrote {}", archive);
    Ok(())
}

fn ci(sh: &Shell) -> Result<()> {
    cmd!(sh, "cargo fmt --all -- --check").run()?;
    cmd!(sh, "cargo clippy --all-targets -- -D warnings").run()?;
    test(sh, None)
}

fn project_root() -> Result<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .context("xtask must live one level below the workspace root")
}
