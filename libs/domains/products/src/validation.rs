//! Field validation for create and replace payloads.
//!
//! Every field is accepted as raw JSON so a wrong type is reported as a
//! field error next to the others instead of failing deserialization.

use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::models::ProductInput;

/// Order in which failing fields are reported
pub const FIELD_ORDER: [&str; 5] = ["name", "description", "price", "category", "inStock"];

/// Struct field name to payload field name, for the fields whose names differ
const PAYLOAD_NAMES: [(&str, &str); 1] = [("in_stock", "inStock")];

/// Unvalidated product payload as sent by the client
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    #[schema(value_type = String, example = "Widget")]
    #[validate(
        required(message = "Name is required"),
        custom(function = "non_blank_text", message = "Name is required")
    )]
    pub name: Option<Value>,
    #[schema(value_type = String, example = "A small widget")]
    #[validate(
        required(message = "Description is required"),
        custom(function = "non_blank_text", message = "Description is required")
    )]
    pub description: Option<Value>,
    #[schema(value_type = f64, example = 9.99)]
    #[validate(
        required(message = "Price must be a number"),
        custom(function = "json_number", message = "Price must be a number")
    )]
    pub price: Option<Value>,
    #[schema(value_type = String, example = "Tools")]
    #[validate(
        required(message = "Category is required"),
        custom(function = "non_blank_text", message = "Category is required")
    )]
    pub category: Option<Value>,
    #[schema(value_type = bool, example = true)]
    #[validate(
        required(message = "InStock must be a boolean"),
        custom(function = "json_bool", message = "InStock must be a boolean")
    )]
    pub in_stock: Option<Value>,
}

impl ProductDraft {
    /// Check every field and convert into a typed [`ProductInput`].
    ///
    /// On failure all failing fields are reported, one message each, keyed
    /// by their payload names.
    pub fn to_input(&self) -> Result<ProductInput, ValidationErrors> {
        self.validate().map_err(with_payload_names)?;

        // Past validation every field is present with the expected JSON type.
        Ok(ProductInput {
            name: text(&self.name),
            description: text(&self.description),
            price: self.price.as_ref().and_then(Value::as_f64).unwrap_or_default(),
            category: text(&self.category),
            in_stock: self
                .in_stock
                .as_ref()
                .and_then(Value::as_bool)
                .unwrap_or_default(),
        })
    }
}

impl From<ProductInput> for ProductDraft {
    fn from(input: ProductInput) -> Self {
        Self {
            name: Some(Value::String(input.name)),
            description: Some(Value::String(input.description)),
            price: Some(Value::from(input.price)),
            category: Some(Value::String(input.category)),
            in_stock: Some(Value::Bool(input.in_stock)),
        }
    }
}

fn non_blank_text(value: &Value) -> Result<(), ValidationError> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Ok(()),
        _ => Err(ValidationError::new("text")),
    }
}

fn json_number(value: &Value) -> Result<(), ValidationError> {
    if value.is_number() {
        Ok(())
    } else {
        Err(ValidationError::new("number"))
    }
}

fn json_bool(value: &Value) -> Result<(), ValidationError> {
    if value.is_boolean() {
        Ok(())
    } else {
        Err(ValidationError::new("boolean"))
    }
}

fn text(value: &Option<Value>) -> String {
    value
        .as_ref()
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Derived errors are keyed by struct field; clients see the camelCase names.
fn with_payload_names(errors: ValidationErrors) -> ValidationErrors {
    let mut renamed = ValidationErrors::new();
    for (field, list) in errors.field_errors() {
        let name = PAYLOAD_NAMES
            .iter()
            .find(|(rust, _)| *rust == field)
            .map(|(_, payload)| *payload)
            .or_else(|| FIELD_ORDER.iter().copied().find(|f| *f == field));
        if let Some(name) = name {
            for error in list {
                renamed.add(name, error.clone());
            }
        }
    }
    renamed
}
