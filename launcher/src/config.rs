use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Earliest event this repository has solutions for.
pub const MIN_YEAR: u32 = 2024;
pub const DEFAULT_YEAR: u32 = 2024;
pub const DEFAULT_DAY: u32 = 1;
/// Advent runs from December 1st to the 25th.
pub const MAX_DAY: u32 = 25;

/// Program used to launch a resolved entry point.
///
/// The entry point path is appended after `args`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Runner {
    pub program: OsString,
    pub args: Vec<OsString>,
}

impl Runner {
    pub fn new<P, I, A>(program: P, args: I) -> Self
    where
        P: Into<OsString>,
        I: IntoIterator<Item = A>,
        A: Into<OsString>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// `cargo run` against a day's manifest, using `$CARGO` when set.
    pub fn cargo() -> Self {
        let program = std::env::var_os("CARGO").unwrap_or_else(|| OsString::from("cargo"));
        Self::new(program, ["run", "--quiet", "--release", "--manifest-path"])
    }
}

#[derive(Debug, Clone)]
pub struct LauncherConfig {
    /// Root holding the `<year>/<dd>/` directories.
    pub base_dir: PathBuf,
    pub min_year: u32,
    pub default_year: u32,
    pub default_day: u32,
    pub max_day: u32,
    /// File expected inside every `<year>/<dd>/` directory.
    pub entry_point: String,
    pub runner: Runner,
}

impl LauncherConfig {
    /// Production settings rooted at `base_dir`.
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            ..Self::default()
        }
    }
}

/// The launcher crate sits one level below the workspace root.
fn workspace_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .unwrap_or(manifest_dir)
        .to_path_buf()
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            base_dir: workspace_root(),
            min_year: MIN_YEAR,
            default_year: DEFAULT_YEAR,
            default_day: DEFAULT_DAY,
            max_day: MAX_DAY,
            entry_point: String::from("Cargo.toml"),
            runner: Runner::cargo(),
        }
    }
}
