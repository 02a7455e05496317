use std::collections::HashMap;

use crate::model::{GroceryEntry, Recipe};

/// Merge the ingredient lists of `recipes` into deduplicated grocery entries.
///
/// Walks recipes in order, ingredients in order. An ingredient is keyed by
/// its url when it has one, else by its name; the first occurrence fixes the
/// entry's displayed name and url. Quantities sum per unit label (empty label
/// for unitless amounts); quantity-less ingredients still create their entry
/// so the item shows up on the list. First-appearance order is preserved for
/// entries and for the unit buckets inside each entry.
pub fn aggregate(recipes: &[Recipe]) -> Vec<GroceryEntry> {
    let mut entries: Vec<GroceryEntry> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for recipe in recipes {
        for ingredient in &recipe.ingredients {
            let key = ingredient.url.as_deref().unwrap_or(&ingredient.name);
            let idx = *index.entry(key.to_string()).or_insert_with(|| {
                entries.push(GroceryEntry::new(
                    ingredient.name.clone(),
                    ingredient.url.clone(),
                ));
                entries.len() - 1
            });
            if let Some(quantity) = ingredient.quantity {
                let unit = ingredient.unit.as_deref().unwrap_or("");
                entries[idx].add(unit, quantity);
            }
        }
    }

    entries
}

// ── Tests ──
