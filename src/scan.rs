use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::LoadError;
use crate::model::Recipe;
use crate::parser::parse_document;

/// Load every parsable recipe under `root`, recursively.
///
/// A missing root and a root with zero `.md` files are distinct fatal
/// conditions; an individual document that fails required-field parsing is
/// logged and skipped so the rest of the batch survives. Files are visited
/// in path order, which fixes batch order (and everything downstream that
/// depends on it) across filesystems.
pub fn load_recipes(root: &Path) -> Result<Vec<Recipe>, LoadError> {
    if !root.is_dir() {
        return Err(LoadError::DirectoryNotFound(root.to_path_buf()));
    }

    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .filter(|p| p.extension().is_some_and(|ext| ext == "md"))
        .collect();
    files.sort();

    if files.is_empty() {
        return Err(LoadError::NoRecipesFound(root.to_path_buf()));
    }

    let mut recipes = Vec::with_capacity(files.len());
    for path in files {
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) => {
                warn!("skipping unreadable file {}: {}", path.display(), err);
                continue;
            }
        };
        let abs = path.canonicalize().unwrap_or_else(|_| path.clone());
        match parse_document(&text, &abs) {
            Ok(recipe) => {
                debug!("loaded {} from {}", recipe.name, path.display());
                recipes.push(recipe);
            }
            Err(err) => warn!("skipping {}: {}", path.display(), err),
        }
    }

    Ok(recipes)
}

// ── Tests ──
