use std::sync::LazyLock;

use regex::Regex;

use crate::model::Ingredient;

/// Checkbox marker opening every checklist line.
pub const CHECKBOX: &str = "- [ ]";

static LINK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)(.*)").unwrap());
static QTY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d+(?:\.\d+)?)\s*(.*)").unwrap());

/// Parse one ingredient checklist line.
///
/// Accepted shapes, after the `- [ ]` marker:
///   `<name>`
///   `<quantity> <unit> : <name>`
///   `<quantity> <unit> : [<name>](<url>)`
///
/// Splits on the FIRST colon only, so a colon inside a link target is never
/// touched. Malformed numeric or unit text degrades to unset fields; this
/// function never fails.
pub fn parse_ingredient_line(raw: &str) -> Ingredient {
    let line = raw.strip_prefix(CHECKBOX).unwrap_or(raw).trim();

    let Some((qty_part, name_part)) = line.split_once(':') else {
        return Ingredient::bare(line);
    };

    // ── Name and optional link: `[label](target) trailing` ──
    let name_part = name_part.trim();
    let mut url = None;
    let name = match LINK_RE.captures(name_part) {
        Some(caps) => {
            url = Some(caps[2].to_string());
            format!("{}{}", &caps[1], &caps[3]).trim().to_string()
        }
        None => name_part.to_string(),
    };

    // ── Quantity and unit: leading numeric token, rest is the unit ──
    // A quantity-part with no leading number is dropped entirely, it does
    // not fold back into the name.
    let mut quantity = None;
    let mut unit = None;
    if let Some(caps) = QTY_RE.captures(qty_part.trim()) {
        if let Ok(q) = caps[1].parse::<f64>() {
            quantity = Some(q);
            let u = caps[2].trim();
            if !u.is_empty() {
                unit = Some(u.to_string());
            }
        }
    }

    Ingredient {
        name,
        url,
        quantity,
        unit,
    }
}

// ── Tests ──
