use crate::models::Ingredient;

/// Canonicalizes a recipe's raw ingredient sequence into lowercase names
///
/// Handles both ingredient shapes, preserves order, and silently drops any
/// element whose name normalizes to an empty string. Malformed entries are
/// filtered rather than reported; a single bad record must never take down
/// the scoring pipeline.
pub fn normalized_names(ingredients: &[Ingredient]) -> Vec<String> {
    ingredients
        .iter()
        .filter_map(|ingredient| {
            let name = ingredient.name().trim().to_lowercase();
            if name.is_empty() {
                None
            } else {
                Some(name)
            }
        })
        .collect()
}

/// Normalizes a single user-entered ingredient name
///
/// Returns `None` for names that are empty after trimming.
pub fn normalized_name(name: &str) -> Option<String> {
    let name = name.trim().to_lowercase();
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}
