//! Loosely typed construction from JSON records.
//!
//! Typed construction cannot go wrong: the compiler only accepts an
//! `Option<String>` message and an `Option<bool>` flag. Records that arrive
//! as `serde_json::Value` are validated here, and a field of the wrong kind
//! is a [`ConstructionError`].

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::result_state::ResultState;
use crate::error::ConstructionError;
use crate::typeclass::Outcome;

/// Field that carries the success indicator in a JSON record.
pub const SUCCESS_FIELD: &str = "success";

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn optional_bool(field: &'static str, value: Value) -> Result<Option<bool>, ConstructionError> {
    match value {
        Value::Null => Ok(None),
        Value::Bool(flag) => Ok(Some(flag)),
        other => Err(ConstructionError::InvalidField {
            field,
            expected: "bool or null",
            found: kind_of(&other).to_string(),
        }),
    }
}

fn expect_object(value: Value) -> Result<Map<String, Value>, ConstructionError> {
    match value {
        Value::Object(record) => Ok(record),
        other => Err(ConstructionError::InvalidField {
            field: "record",
            expected: "object",
            found: kind_of(&other).to_string(),
        }),
    }
}

/// Builds a state from `{"payload": .., "error_message": .., "success": ..}`.
///
/// Every field is optional. A missing `success` defaults to `true`, an
/// explicit `null` means unknown.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use stepwise::ConstructionError;
/// use stepwise::effect::ResultState;
///
/// let state = ResultState::<i32>::try_from(json!({"payload": 4, "success": null})).unwrap();
/// assert_eq!(state.into_parts(), (Some(4), None, None));
///
/// let broken = ResultState::<i32>::try_from(json!({"error_message": 5}));
/// assert!(matches!(broken, Err(ConstructionError::InvalidField { field: "error_message", .. })));
/// ```
impl<P: DeserializeOwned> TryFrom<Value> for ResultState<P> {
    type Error = ConstructionError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let mut record = expect_object(value)?;

        let payload = match record.remove("payload") {
            None | Some(Value::Null) => None,
            Some(raw) => Some(
                serde_json::from_value(raw)
                    .map_err(|error| ConstructionError::InvalidPayload(error.to_string()))?,
            ),
        };

        let error_message = match record.remove("error_message") {
            None | Some(Value::Null) => None,
            Some(Value::String(message)) => Some(message),
            Some(other) => {
                return Err(ConstructionError::InvalidField {
                    field: "error_message",
                    expected: "string or null",
                    found: kind_of(&other).to_string(),
                });
            }
        };

        let success = match record.remove(SUCCESS_FIELD) {
            None => Some(true),
            Some(raw) => optional_bool(SUCCESS_FIELD, raw)?,
        };

        Ok(Self::new(payload, error_message, success))
    }
}

/// A JSON object known to carry a `"success"` field.
///
/// Use it to drive a [`Maybe`](crate::typeclass::Maybe) chain over
/// untyped records; [`Maybe::try_unit`](crate::typeclass::Maybe::try_unit)
/// rejects a record without the field.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use stepwise::effect::JsonOutcome;
/// use stepwise::typeclass::Maybe;
///
/// let chain = Maybe::<JsonOutcome>::try_unit(json!({"total": 1, "success": true})).unwrap();
/// assert!(!chain.is_halted());
///
/// assert!(Maybe::<JsonOutcome>::try_unit(json!({"total": 1})).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonOutcome(Map<String, Value>);

impl JsonOutcome {
    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Borrows the whole record.
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consumes the record and returns it as a `Value`.
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl TryFrom<Value> for JsonOutcome {
    type Error = ConstructionError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let record = match value {
            Value::Object(record) => record,
            other => {
                return Err(ConstructionError::MissingSuccessIndicator {
                    found: kind_of(&other).to_string(),
                });
            }
        };
        match record.get(SUCCESS_FIELD) {
            None => Err(ConstructionError::MissingSuccessIndicator {
                found: "object without \"success\"".to_string(),
            }),
            Some(flag) => {
                optional_bool(SUCCESS_FIELD, flag.clone())?;
                Ok(Self(record))
            }
        }
    }
}

impl Outcome for JsonOutcome {
    fn success(&self) -> Option<bool> {
        self.0.get(SUCCESS_FIELD).and_then(Value::as_bool)
    }
}
