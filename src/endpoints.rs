//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/items/{position}', use [format_endpoint].

/// The route to list items or create an item.
pub const ITEMS: &str = "/items";
/// The route to fetch a single item by its 1-based position.
pub const ITEM: &str = "/items/{position}";
/// The route to search items by id, name, or category.
pub const SEARCH: &str = "/search";
/// The route to fetch a stored item image.
pub const IMAGE: &str = "/images/{image_name}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/items/{position}', '{position}' is
/// the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let mut param_start = None;
    let mut param_end = None;

    for (index, character) in endpoint_path.char_indices() {
        match character {
            '{' => param_start = Some(index),
            '}' => {
                param_end = Some(index);
                break;
            }
            _ => {}
        }
    }

    match (param_start, param_end) {
        (Some(start), Some(end)) => {
            let mut formatted = endpoint_path.to_owned();
            formatted.replace_range(start..=end, &id.to_string());
            formatted
        }
        _ => endpoint_path.to_owned(),
    }
}

#[cfg(test)]
mod format_endpoint_tests {
    use super::{ITEM, ITEMS, format_endpoint};

    #[test]
    fn replaces_position_parameter() {
        assert_eq!(format_endpoint(ITEM, 42), "/items/42");
    }

    #[test]
    fn returns_path_unchanged_without_parameter() {
        assert_eq!(format_endpoint(ITEMS, 42), ITEMS);
    }
}
