//! Argument validation against a tool's JSON Schema.
//!
//! Every tool publishes the schema derived from its parameter struct. The
//! same schema gates incoming arguments here, so discovery and validation
//! cannot drift apart. Schemas are compiled once per parameter type.
//!
//! Argument keys without a declared property are ignored; deserialization
//! into the typed parameters drops them.

use std::any::TypeId;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use jsonschema::{Draft, Validator};
use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::JsonObject;
use schemars::JsonSchema;
use serde_json::Value;

/// Compiled validators, keyed by parameter type.
static VALIDATORS: LazyLock<RwLock<HashMap<TypeId, Arc<Validator>>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// The first way the arguments fail their schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    pub message: String,
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Compile a schema for validation.
pub fn compile_schema(schema: &JsonObject) -> Result<Validator, String> {
    jsonschema::options()
        .with_draft(Draft::Draft202012)
        .build(&Value::Object(schema.clone()))
        .map_err(|err| format!("invalid schema: {err}"))
}

/// Validator for the schema derived from `T`, compiled on first use.
pub fn validator_for<T: JsonSchema + 'static>() -> Result<Arc<Validator>, String> {
    let key = TypeId::of::<T>();

    if let Some(validator) = VALIDATORS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&key)
    {
        return Ok(validator.clone());
    }

    let validator = Arc::new(compile_schema(&cached_schema_for_type::<T>())?);
    VALIDATORS
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(key, validator.clone());
    Ok(validator)
}

/// Drop top-level null arguments.
///
/// Optional parameters are published as `nullable`, which the validator does
/// not understand; an explicit null means the same as leaving the key out.
pub fn without_nulls(mut arguments: JsonObject) -> JsonObject {
    arguments.retain(|_, value| !value.is_null());
    arguments
}

/// Validate arguments, reporting the first violation.
pub fn validate_arguments(validator: &Validator, arguments: &JsonObject) -> Result<(), SchemaViolation> {
    let instance = Value::Object(arguments.clone());
    match validator.iter_errors(&instance).next() {
        Some(err) => Err(SchemaViolation {
            message: err.to_string(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    fn sample() -> Validator {
        compile_schema(&object(json!({
            "type": "object",
            "required": ["query"],
            "properties": {
                "query": { "type": "string", "minLength": 1 },
                "limit": { "type": "integer", "nullable": true, "minimum": 1, "maximum": 50 },
                "role": { "$ref": "#/$defs/Role" }
            },
            "$defs": {
                "Role": { "type": "string", "enum": ["recurser", "faculty"] }
            }
        })))
        .unwrap()
    }

    fn check(value: Value) -> Result<(), SchemaViolation> {
        validate_arguments(&sample(), &without_nulls(object(value)))
    }

    #[test]
    fn test_accepts_valid_arguments() {
        assert!(check(json!({ "query": "ada", "limit": 50, "role": "faculty" })).is_ok());
    }

    #[test]
    fn test_missing_required() {
        let err = check(json!({ "limit": 5 })).unwrap_err();
        assert!(err.to_string().contains("query"));
    }

    #[test]
    fn test_bounds() {
        assert!(check(json!({ "query": "a", "limit": 51 })).is_err());
        assert!(check(json!({ "query": "a", "limit": 0 })).is_err());
        assert!(check(json!({ "query": "a", "limit": 1 })).is_ok());
        assert!(check(json!({ "query": "" })).is_err());
    }

    #[test]
    fn test_type_mismatch() {
        assert!(check(json!({ "query": 12 })).is_err());
        assert!(check(json!({ "query": "a", "limit": 2.5 })).is_err());
    }

    #[test]
    fn test_enum_through_ref() {
        assert!(check(json!({ "query": "a", "role": "admin" })).is_err());
    }

    #[test]
    fn test_explicit_nulls_mean_absent() {
        assert!(check(json!({ "query": "a", "limit": null, "role": null })).is_ok());
        // A required key set to null is still missing.
        assert!(check(json!({ "query": null })).is_err());
    }

    #[test]
    fn test_undeclared_keys_ignored() {
        assert!(check(json!({ "query": "a", "unexpected": [1, 2, 3] })).is_ok());
    }

    #[test]
    fn test_validator_compiled_once_per_type() {
        #[derive(schemars::JsonSchema)]
        #[allow(dead_code)]
        struct Sample {
            name: String,
        }

        let first = validator_for::<Sample>().unwrap();
        let second = validator_for::<Sample>().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(validate_arguments(&first, &object(json!({ "name": "x" }))).is_ok());
        assert!(validate_arguments(&first, &object(json!({}))).is_err());
    }
}
