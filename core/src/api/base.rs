//! Endpoint traits and structures shared by every UI-facing call

use crate::error::{ArgumentError, Error, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;
use tracing::{debug, warn};
use uuid::Uuid;

/// Trait for all endpoints the UI can call
#[async_trait]
pub trait Endpoint: Send + Sync {
    /// Get the name the UI calls this endpoint by
    fn name(&self) -> &str;

    /// Get the description of the endpoint
    fn description(&self) -> &str;

    /// Get the JSON schema for the endpoint's parameters
    fn parameters_schema(&self) -> Value;

    /// Handle a call and produce the payload returned to the UI
    async fn invoke(&self, call: EndpointCall) -> Result<Value>;

    /// Get examples of how to call this endpoint
    fn examples(&self) -> Vec<EndpointExample> {
        Vec::new()
    }
}

/// A call from the UI layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointCall {
    /// Identifier echoed back with the response
    pub id: Value,

    /// Name of the endpoint to call
    pub name: String,

    /// Loosely-typed parameters, normalized by the endpoint
    pub params: Value,
}

/// Example usage of an endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointExample {
    /// Description of what this example does
    pub description: String,

    /// Example parameters
    pub parameters: Value,

    /// Expected result description
    pub expected_result: String,
}

impl EndpointCall {
    /// Create a new call with a fresh id
    pub fn new<S: Into<String>>(name: S, params: Value) -> Self {
        Self {
            id: Value::String(Uuid::new_v4().to_string()),
            name: name.into(),
            params,
        }
    }

    /// Use a caller-supplied id
    pub fn with_id(mut self, id: Value) -> Self {
        self.id = id;
        self
    }

    /// Get a parameter value by key
    pub fn get_parameter<T>(&self, key: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let value = self
            .params
            .get(key)
            .filter(|v| !v.is_null())
            .ok_or_else(|| ArgumentError::InvalidParameters {
                message: format!("Missing parameter: {}", key),
            })?;

        serde_json::from_value(value.clone()).map_err(|_| {
            ArgumentError::InvalidParameters {
                message: format!("Invalid parameter type for: {}", key),
            }
            .into()
        })
    }

    /// Get an optional parameter; absent and `null` both give `None`
    pub fn get_optional<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        match self.params.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(_) => self.get_parameter(key).map(Some),
        }
    }

    /// Deserialize the whole parameter object into a boundary type
    pub fn parse_params<T>(&self) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let params = if self.params.is_null() {
            json!({})
        } else {
            self.params.clone()
        };
        serde_json::from_value(params).map_err(|e| {
            ArgumentError::InvalidParameters {
                message: e.to_string(),
            }
            .into()
        })
    }
}

/// Payload sent to the UI in place of a result
pub fn error_payload(error: &Error) -> Value {
    json!({ "error": error.to_string() })
}

/// Dispatches calls to registered endpoints
pub struct EndpointExecutor {
    endpoints: HashMap<String, Box<dyn Endpoint>>,
}

impl EndpointExecutor {
    /// Create a new executor with no endpoints
    pub fn new() -> Self {
        Self {
            endpoints: HashMap::new(),
        }
    }

    /// Register an endpoint
    pub fn register_endpoint(&mut self, endpoint: Box<dyn Endpoint>) {
        self.endpoints.insert(endpoint.name().to_string(), endpoint);
    }

    /// Get an endpoint by name
    pub fn get_endpoint(&self, name: &str) -> Option<&dyn Endpoint> {
        self.endpoints.get(name).map(|e| e.as_ref())
    }

    /// List endpoint names, sorted
    pub fn list_endpoints(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.endpoints.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Execute a call. Failures become `{ "error": message }`, never `Err`.
    pub async fn execute(&self, call: EndpointCall) -> Value {
        let Some(endpoint) = self.get_endpoint(&call.name) else {
            warn!("Unknown endpoint: {}", call.name);
            return error_payload(&Error::Generic(format!("Unknown endpoint: {}", call.name)));
        };

        let start_time = std::time::Instant::now();
        let name = call.name.clone();
        let result = endpoint.invoke(call).await;
        debug!(
            "Endpoint {} finished in {}ms",
            name,
            start_time.elapsed().as_millis()
        );

        match result {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Endpoint {} failed: {}", name, e);
                error_payload(&e)
            }
        }
    }
}

impl Default for EndpointExecutor {
    fn default() -> Self {
        Self::new()
    }
}
