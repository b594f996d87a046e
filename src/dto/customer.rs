use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Default, Deserialize, Validate, Serialize)]
pub struct CreateCustomerRequest {
    pub name: Option<String>,
}

/// An absent field keeps its stored value; `Some(None)` clears the column.
#[derive(Debug, Clone, Default, Deserialize, Validate, Serialize)]
pub struct UpdateCustomerRequest {
    #[serde(
        default,
        deserialize_with = "super::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<Option<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_null_clears_name() {
        let absent: UpdateCustomerRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.name, None);

        let cleared: UpdateCustomerRequest = serde_json::from_str(r#"{"name": null}"#).unwrap();
        assert_eq!(cleared.name, Some(None));

        let renamed: UpdateCustomerRequest = serde_json::from_str(r#"{"name": "Ada"}"#).unwrap();
        assert_eq!(renamed.name, Some(Some("Ada".to_string())));
    }
}
