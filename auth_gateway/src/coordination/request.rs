use serde_json::{Map, Value};

use crate::config::validate_required;

use super::errors::GatewayError;

/// What the handlers need to know about an inbound request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InboundRequest {
    /// Declared origin of the calling web client
    pub origin: Option<String>,
    /// Source IP as seen by the front door
    pub source_ip: Option<String>,
    /// Raw body text, expected to be a JSON object when present
    pub body: Option<String>,
}

impl InboundRequest {
    pub fn new(origin: Option<String>, source_ip: Option<String>, body: Option<String>) -> Self {
        Self {
            origin,
            source_ip,
            body,
        }
    }
}

/// Parsed JSON body of an inbound request
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct RequestBody(Map<String, Value>);

impl RequestBody {
    /// An absent or blank body parses as an empty object, so missing fields
    /// surface as `MissingParameter` rather than a parse failure.
    pub(crate) fn parse(body: Option<&str>) -> Result<Self, GatewayError> {
        let Some(text) = body.filter(|b| !b.trim().is_empty()) else {
            return Ok(Self::default());
        };

        match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(map)) => Ok(Self(map)),
            Ok(_) => Err(GatewayError::InvalidRequestBody(
                "expected a JSON object".to_string(),
            )),
            Err(e) => Err(GatewayError::InvalidRequestBody(e.to_string())),
        }
    }

    /// A field counts only if it is a string; numbers and nulls do not.
    pub(crate) fn field(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Value::as_str)
    }

    pub(crate) fn require_field(&self, name: &str) -> Result<&str, GatewayError> {
        validate_required(self.field(name), name)
            .map_err(|_| GatewayError::MissingParameter(name.to_string()))
    }

    /// Check every named field at once and report all that are missing.
    pub(crate) fn require<'a>(&'a self, names: &[&str]) -> Result<Vec<&'a str>, GatewayError> {
        let mut values = Vec::with_capacity(names.len());
        let mut missing = Vec::new();

        for name in names {
            match validate_required(self.field(name), name) {
                Ok(value) => values.push(value),
                Err(_) => missing.push(*name),
            }
        }

        if missing.is_empty() {
            Ok(values)
        } else {
            Err(GatewayError::MissingParameter(missing.join(", ")))
        }
    }
}
