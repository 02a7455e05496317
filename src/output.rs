use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use itertools::Itertools;

use crate::model::{GroceryEntry, Recipe};

/// Write the aggregated grocery checklist to
/// `<out_dir>/groceries_<date>.md`, creating `out_dir` if needed.
/// Re-running the same day overwrites the file.
pub fn write_grocery_list(
    entries: &[GroceryEntry],
    out_dir: &Path,
    date: NaiveDate,
) -> Result<PathBuf> {
    let path = dated_path(out_dir, "groceries", date);
    write_file(&path, &render_grocery_list(entries))?;
    Ok(path)
}

/// Write the per-recipe cooking guide to
/// `<out_dir>/instructions_<date>.md`, creating `out_dir` if needed.
pub fn write_cooking_guide(recipes: &[Recipe], out_dir: &Path, date: NaiveDate) -> Result<PathBuf> {
    let path = dated_path(out_dir, "instructions", date);
    write_file(&path, &render_cooking_guide(recipes))?;
    Ok(path)
}

fn dated_path(out_dir: &Path, stem: &str, date: NaiveDate) -> PathBuf {
    out_dir.join(format!("{stem}_{}.md", date.format("%Y-%m-%d")))
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating output directory {}", dir.display()))?;
    }
    fs::write(path, content).with_context(|| format!("writing {}", path.display()))
}

fn render_grocery_list(entries: &[GroceryEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        let quantities = entry
            .quantities
            .iter()
            .map(|(unit, qty)| quantity_fragment(*qty, unit))
            .join(", ");
        match &entry.url {
            Some(url) => out.push_str(&format!("- [ ] [{}]({url}) : {quantities}\n", entry.name)),
            None => out.push_str(&format!("- [ ] {} : {quantities}\n", entry.name)),
        }
    }
    out
}

fn render_cooking_guide(recipes: &[Recipe]) -> String {
    let mut out = String::new();
    for recipe in recipes {
        out.push_str(&format!("# {}\n\n", recipe.name));

        out.push_str("## Ingredients\n");
        for ingredient in &recipe.ingredients {
            match ingredient.quantity {
                Some(qty) => {
                    let fragment = quantity_fragment(qty, ingredient.unit.as_deref().unwrap_or(""));
                    out.push_str(&format!("- [ ] {fragment} : {}\n", ingredient.name));
                }
                None => out.push_str(&format!("- [ ] {}\n", ingredient.name)),
            }
        }
        out.push('\n');

        out.push_str("## Ustensiles\n");
        for tool in &recipe.tools {
            out.push_str(&format!("- [ ] {tool}\n"));
        }
        out.push('\n');

        out.push_str("## Instructions\n");
        for step in &recipe.steps {
            out.push_str(&format!("- [ ] {step}\n"));
        }
        out.push_str("\n\n");
    }
    out
}

/// `<qty> <unit>`, space elided when the unit label is empty. Integral
/// amounts print without a fractional part.
fn quantity_fragment(qty: f64, unit: &str) -> String {
    let qty = if qty.fract() == 0.0 {
        format!("{}", qty as i64)
    } else {
        format!("{qty}")
    };
    if unit.is_empty() {
        qty
    } else {
        format!("{qty} {unit}")
    }
}

// ── Tests ──
