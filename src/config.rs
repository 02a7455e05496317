use std::env;
use std::path::PathBuf;

pub const DEFAULT_RECIPES_DIR: &str = "recipes";
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Resolved run settings. Resolution happens once at startup; the resolved
/// paths are passed explicitly into the scan and output calls so the core
/// never consults ambient state.
#[derive(Debug)]
pub struct Settings {
    pub recipes_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Settings {
    /// CLI flag beats environment beats built-in default.
    pub fn resolve(recipes_flag: Option<PathBuf>, output_flag: Option<PathBuf>) -> Self {
        Settings {
            recipes_dir: resolve_path(recipes_flag, "BATCHCOOK_RECIPES_DIR", DEFAULT_RECIPES_DIR),
            output_dir: resolve_path(output_flag, "BATCHCOOK_OUTPUT_DIR", DEFAULT_OUTPUT_DIR),
        }
    }
}

fn resolve_path(flag: Option<PathBuf>, env_var: &str, default: &str) -> PathBuf {
    flag.or_else(|| env::var_os(env_var).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(default))
}

// ── Tests ──
