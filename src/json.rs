use serde_json::{Map, Value};

use crate::error::BlockError;

/// # Errors
/// Returns an error if the generated map can't be converted into a JSON
pub fn tuples_to_json(tuples: Vec<(String, String)>) -> Result<String, BlockError> {
    let json_map = tuples
        .into_iter()
        .map(|(key, value)| (key, Value::String(value)))
        .collect::<Map<_, _>>();

    Ok(serde_json::to_string(&json_map)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_object_of_strings() {
        let json = tuples_to_json(vec![
            ("percent".to_string(), "42".to_string()),
            ("color".to_string(), String::new()),
        ])
        .unwrap();

        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["percent"], "42");
        assert_eq!(value["color"], "");
    }
}
