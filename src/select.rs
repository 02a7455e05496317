use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, MultiSelect};

use crate::model::Recipe;

/// Outcome of the interactive loop: an ordered subset to cook, or a cancel
/// signal (Esc) that the caller treats as a no-op.
pub enum Selection {
    Generate(Vec<Recipe>),
    Cancelled,
}

/// Repeatedly prompt for recipes until the `generate` entry is picked.
///
/// Each round lists the not-yet-selected recipes with their portion counts
/// plus a final `generate` entry; the prompt shows the running portion total.
/// Recipes keep the order in which they were picked across rounds.
pub fn select_recipes(recipes: &[Recipe]) -> Result<Selection> {
    let mut chosen: Vec<usize> = Vec::new();

    loop {
        let remaining: Vec<usize> = (0..recipes.len())
            .filter(|i| !chosen.contains(i))
            .collect();
        let total: u32 = chosen.iter().map(|&i| recipes[i].portions).sum();

        let mut items: Vec<String> = remaining
            .iter()
            .map(|&i| choice_label(&recipes[i]))
            .collect();
        items.push("generate: write the grocery list and cooking guide".to_string());
        let generate_pos = items.len() - 1;

        let picks = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(format!(
                "Select recipes to cook ({total} portions so far, Esc to quit)"
            ))
            .items(&items)
            .interact_opt()
            .context("selection prompt failed")?;

        let Some(picks) = picks else {
            return Ok(Selection::Cancelled);
        };

        let mut generate = false;
        for pick in picks {
            if pick == generate_pos {
                generate = true;
            } else {
                chosen.push(remaining[pick]);
            }
        }

        if generate {
            let selected = chosen.iter().map(|&i| recipes[i].clone()).collect();
            return Ok(Selection::Generate(selected));
        }
    }
}

fn choice_label(recipe: &Recipe) -> String {
    format!("{} ({} portions)", recipe.name, recipe.portions)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::model::Macros;

    #[test]
    fn label_shows_portions() {
        let recipe = Recipe {
            name: "Dahl".to_string(),
            source_path: "/r/dahl.md".to_string(),
            portions: 6,
            prep_time: Duration::from_secs(600),
            cook_time: Duration::from_secs(1800),
            ingredients: Vec::new(),
            tools: Vec::new(),
            steps: Vec::new(),
            macros: Macros::default(),
        };
        assert_eq!(choice_label(&recipe), "Dahl (6 portions)");
    }
}
