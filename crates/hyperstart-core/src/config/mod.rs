//! Generated configuration files

pub mod env;

pub use env::{merge_env_example, EnvSection, ENV_EXAMPLE};

use crate::error::Result;
use serde::Serialize;

/// Pretty-printed JSON with a trailing newline
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_json_is_pretty() {
        let text = to_json(&json!({ "indexes": [], "fieldOverrides": [] })).unwrap();
        assert!(text.starts_with("{\n  \""));
        assert!(text.ends_with("}\n"));
    }
}
