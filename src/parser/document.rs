use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;

use crate::error::DocumentError;
use crate::model::{Macros, Recipe};

use super::ingredient::{parse_ingredient_line, CHECKBOX};

static DIGITS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

/// Section the parser is currently inside. Headers not in the synonym table
/// map to `Unknown`, whose checklist lines are dropped silently.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Section {
    None,
    Ingredients,
    Tools,
    Instructions,
    Macros,
    Unknown,
}

impl Section {
    fn from_header(text: &str) -> Self {
        match text.trim().to_lowercase().as_str() {
            "ingrédients" => Section::Ingredients,
            "ustensiles" => Section::Tools,
            "instructions" => Section::Instructions,
            "macronutriments" => Section::Macros,
            _ => Section::Unknown,
        }
    }
}

/// Parse a full recipe document.
///
/// Line-oriented state machine: `# ` sets the recipe name (first occurrence
/// wins), `- nb portions :` / `- temps préparation :` / `- temps cuisson :`
/// set the scalar fields, `## ` switches section, and checklist lines
/// dispatch on the current section. Missing required fields are the only
/// failure mode; malformed ingredient or macro lines degrade field-by-field.
pub fn parse_document(text: &str, source_path: &Path) -> Result<Recipe, DocumentError> {
    let mut name: Option<String> = None;
    let mut portions: Option<u32> = None;
    let mut prep_time: Option<Duration> = None;
    let mut cook_time: Option<Duration> = None;
    let mut ingredients = Vec::new();
    let mut tools = Vec::new();
    let mut steps = Vec::new();
    let mut macros = Macros::default();
    let mut section = Section::None;

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(rest) = line.strip_prefix("# ") {
            if name.is_none() {
                name = Some(rest.trim().to_string());
            }
        } else if line.starts_with("- nb portions :") {
            let value = line.rsplit(':').next().unwrap_or("").trim();
            portions = Some(parse_portions(value)?);
        } else if line.starts_with("- temps préparation :") {
            prep_time = Some(parse_minutes("temps préparation", line)?);
        } else if line.starts_with("- temps cuisson :") {
            cook_time = Some(parse_minutes("temps cuisson", line)?);
        } else if let Some(rest) = line.strip_prefix("## ") {
            section = Section::from_header(rest);
        } else if line.starts_with(CHECKBOX) {
            match section {
                Section::Ingredients => ingredients.push(parse_ingredient_line(line)),
                Section::Tools => tools.push(strip_checkbox(line)),
                Section::Instructions => steps.push(strip_checkbox(line)),
                Section::None | Section::Macros | Section::Unknown => {}
            }
        } else if section == Section::Macros {
            scan_macro_line(line, &mut macros);
        }
    }

    Ok(Recipe {
        name: name.ok_or(DocumentError::MissingName)?,
        source_path: source_path.display().to_string(),
        portions: portions.ok_or(DocumentError::MissingPortions)?,
        prep_time: prep_time.ok_or(DocumentError::MissingPrepTime)?,
        cook_time: cook_time.ok_or(DocumentError::MissingCookTime)?,
        ingredients,
        tools,
        steps,
        macros,
    })
}

fn strip_checkbox(line: &str) -> String {
    line.strip_prefix(CHECKBOX).unwrap_or(line).trim().to_string()
}

fn parse_portions(value: &str) -> Result<u32, DocumentError> {
    match value.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(DocumentError::InvalidNumber {
            field: "nb portions",
            value: value.to_string(),
        }),
    }
}

/// Minutes come from the text between the label colon and the end of line,
/// with any literal `min` token removed: `- temps cuisson : 45 min` → 45.
fn parse_minutes(field: &'static str, line: &str) -> Result<Duration, DocumentError> {
    let value = line.split(':').nth(1).unwrap_or("").replace("min", "");
    let value = value.trim();
    value
        .parse::<u64>()
        .map(|m| Duration::from_secs(m * 60))
        .map_err(|_| DocumentError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

/// Keyword scan for macro lines, first match wins per line. Keywords are
/// case-sensitive literal substrings; the value is the first run of digits.
fn scan_macro_line(line: &str, macros: &mut Macros) {
    let first_digits = || {
        DIGITS_RE
            .find(line)
            .and_then(|m| m.as_str().parse::<u32>().ok())
    };

    if line.contains("calories") || line.contains("kcal") {
        if let Some(v) = first_digits() {
            macros.kcal = v;
        }
    } else if ["protéines", "proteins", "prots"].iter().any(|k| line.contains(k)) {
        if let Some(v) = first_digits() {
            macros.proteins = f64::from(v);
        }
    } else if ["glucides", "carbs"].iter().any(|k| line.contains(k)) {
        if let Some(v) = first_digits() {
            macros.carbs = f64::from(v);
        }
    } else if ["lipides", "fat"].iter().any(|k| line.contains(k)) {
        if let Some(v) = first_digits() {
            macros.fat = f64::from(v);
        }
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn parse(text: &str) -> Result<Recipe, DocumentError> {
        parse_document(text, &PathBuf::from("/recipes/test.md"))
    }

    const FULL: &str = "\
# Poulet basquaise

- nb portions : 4
- temps préparation : 20 min
- temps cuisson : 45 min

## Ingrédients

- [ ] 4 : Cuisses de poulet
- [ ] 3 : [Poivrons](https://market.example/poivrons)
- [ ] 400 g : Tomates pelées
- [ ] Sel

## Ustensiles

- [ ] Cocotte
- [ ] Couteau d'office

## Instructions

- [ ] Faire revenir les cuisses.
- [ ] Ajouter les poivrons : laisser fondre.
- [ ] Mijoter à couvert.

## Macronutriments

- 520 kcal
- 42 g protéines
- 18 g glucides
- 12 g lipides
";

    #[test]
    fn full_document() {
        let recipe = parse(FULL).unwrap();
        assert_eq!(recipe.name, "Poulet basquaise");
        assert_eq!(recipe.portions, 4);
        assert_eq!(recipe.prep_time, Duration::from_secs(20 * 60));
        assert_eq!(recipe.cook_time, Duration::from_secs(45 * 60));
        assert_eq!(recipe.ingredients.len(), 4);
        assert_eq!(recipe.tools, vec!["Cocotte", "Couteau d'office"]);
        assert_eq!(recipe.steps.len(), 3);
        assert_eq!(recipe.source_path, "/recipes/test.md");

        let poivrons = &recipe.ingredients[1];
        assert_eq!(poivrons.name, "Poivrons");
        assert_eq!(poivrons.url.as_deref(), Some("https://market.example/poivrons"));
    }

    #[test]
    fn macros_keyword_scan() {
        let recipe = parse(FULL).unwrap();
        assert_eq!(recipe.macros.kcal, 520);
        assert_eq!(recipe.macros.proteins, 42.0);
        assert_eq!(recipe.macros.carbs, 18.0);
        assert_eq!(recipe.macros.fat, 12.0);
    }

    #[test]
    fn macro_line_without_digits_keeps_default() {
        let text = "\
# X
- nb portions : 2
- temps préparation : 5 min
- temps cuisson : 5 min
## Macronutriments
- beaucoup de kcal
- prots 31
";
        let recipe = parse(text).unwrap();
        assert_eq!(recipe.macros.kcal, 0);
        assert_eq!(recipe.macros.proteins, 31.0);
    }

    #[test]
    fn first_header_wins() {
        let text = "\
# First
# Second
- nb portions : 2
- temps préparation : 5
- temps cuisson : 10
";
        assert_eq!(parse(text).unwrap().name, "First");
    }

    #[test]
    fn section_headers_match_case_insensitively() {
        let text = "\
# X
- nb portions : 1
- temps préparation : 1
- temps cuisson : 1
## INGRÉDIENTS
- [ ] Sel
";
        let recipe = parse(text).unwrap();
        assert_eq!(recipe.ingredients.len(), 1);
    }

    #[test]
    fn unknown_section_drops_checklist_lines() {
        let text = "\
# X
- nb portions : 1
- temps préparation : 1
- temps cuisson : 1
## Notes
- [ ] should vanish
## Ingrédients
- [ ] Sel
";
        let recipe = parse(text).unwrap();
        assert_eq!(recipe.ingredients.len(), 1);
        assert!(recipe.tools.is_empty());
        assert!(recipe.steps.is_empty());
    }

    #[test]
    fn checklist_before_any_section_is_dropped() {
        let text = "\
# X
- nb portions : 1
- temps préparation : 1
- temps cuisson : 1
- [ ] stray item
";
        let recipe = parse(text).unwrap();
        assert!(recipe.ingredients.is_empty());
    }

    #[test]
    fn minutes_without_min_suffix() {
        let text = "\
# X
- nb portions : 1
- temps préparation : 15
- temps cuisson : 30
";
        let recipe = parse(text).unwrap();
        assert_eq!(recipe.prep_time, Duration::from_secs(15 * 60));
        assert_eq!(recipe.cook_time, Duration::from_secs(30 * 60));
    }

    #[test]
    fn missing_name_is_an_error() {
        let text = "- nb portions : 2\n- temps préparation : 5\n- temps cuisson : 5\n";
        assert!(matches!(parse(text), Err(DocumentError::MissingName)));
    }

    #[test]
    fn missing_portions_is_an_error() {
        let text = "# X\n- temps préparation : 5\n- temps cuisson : 5\n";
        assert!(matches!(parse(text), Err(DocumentError::MissingPortions)));
    }

    #[test]
    fn unreadable_portions_is_an_error() {
        let text = "# X\n- nb portions : quatre\n- temps préparation : 5\n- temps cuisson : 5\n";
        assert!(matches!(
            parse(text),
            Err(DocumentError::InvalidNumber { field: "nb portions", .. })
        ));
    }

    #[test]
    fn poulet_basquaise_fixture() {
        let md = std::fs::read_to_string("tests/fixtures/poulet_basquaise.md").unwrap();
        let recipe = parse(&md).unwrap();
        assert_eq!(recipe.name, "Poulet basquaise");
        assert_eq!(recipe.portions, 4);
        assert_eq!(recipe.ingredients.len(), 8);
        assert_eq!(recipe.tools.len(), 2);
        assert_eq!(recipe.steps.len(), 4);
        assert_eq!(recipe.macros.kcal, 520);
        assert_eq!(recipe.macros.fat, 12.0);

        let ail = &recipe.ingredients[4];
        assert_eq!(ail.name, "Ail");
        assert_eq!(ail.quantity, Some(2.0));
        assert_eq!(ail.unit.as_deref(), Some("gousses"));
    }

    #[test]
    fn brouillon_fixture_is_rejected() {
        let md = std::fs::read_to_string("tests/fixtures/brouillon.md").unwrap();
        assert!(matches!(parse(&md), Err(DocumentError::MissingPortions)));
    }
}
