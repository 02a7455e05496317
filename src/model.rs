use std::time::Duration;

use serde::{Serialize, Serializer};

/// One checklist item from an ingredient section. `unit` only carries meaning
/// when `quantity` is set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ingredient {
    pub name: String,
    pub url: Option<String>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
}

impl Ingredient {
    pub fn bare(name: impl Into<String>) -> Self {
        Ingredient {
            name: name.into(),
            url: None,
            quantity: None,
            unit: None,
        }
    }
}

/// Per-recipe macro-nutrient summary. Values are trusted as authored.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Macros {
    pub kcal: u32,
    pub proteins: f64,
    pub carbs: f64,
    pub fat: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recipe {
    pub name: String,
    pub source_path: String,
    pub portions: u32,
    #[serde(serialize_with = "as_minutes")]
    pub prep_time: Duration,
    #[serde(serialize_with = "as_minutes")]
    pub cook_time: Duration,
    pub ingredients: Vec<Ingredient>,
    pub tools: Vec<String>,
    pub steps: Vec<String>,
    pub macros: Macros,
}

/// Durations are minute-granular throughout; serialize them as plain minutes.
fn as_minutes<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(d.as_secs() / 60)
}

/// An aggregated, deduplicated shopping-list item spanning possibly many
/// recipes. `quantities` maps a unit label (empty string = unitless) to the
/// accumulated amount, in first-appearance order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroceryEntry {
    pub name: String,
    pub url: Option<String>,
    pub quantities: Vec<(String, f64)>,
}

impl GroceryEntry {
    pub fn new(name: impl Into<String>, url: Option<String>) -> Self {
        GroceryEntry {
            name: name.into(),
            url,
            quantities: Vec::new(),
        }
    }

    /// Sum `amount` into the bucket for `unit`, creating it on first use.
    pub fn add(&mut self, unit: &str, amount: f64) {
        match self.quantities.iter_mut().find(|(u, _)| u == unit) {
            Some((_, total)) => *total += amount,
            None => self.quantities.push((unit.to_string(), amount)),
        }
    }

    pub fn quantity(&self, unit: &str) -> Option<f64> {
        self.quantities
            .iter()
            .find(|(u, _)| u == unit)
            .map(|(_, q)| *q)
    }
}

// ── Tests ──
