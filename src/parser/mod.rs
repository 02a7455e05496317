pub mod document;
pub mod ingredient;

pub use document::parse_document;
pub use ingredient::parse_ingredient_line;
