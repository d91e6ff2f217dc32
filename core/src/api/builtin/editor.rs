//! `open_in_editor`: jump to a match in the external editor

use crate::api::{Endpoint, EndpointCall, EndpointExample};
use crate::config::AppConfig;
use crate::error::{ArgumentError, Result};
use crate::impl_endpoint_factory;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct OpenInEditorEndpoint {
    config: Arc<AppConfig>,
}

impl OpenInEditorEndpoint {
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self { config }
    }
}

/// Accept `12` as well as `"12"` from the UI
fn line_number(call: &EndpointCall) -> Result<u64> {
    match call.params.get("line_num") {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    }
    .ok_or_else(|| {
        ArgumentError::InvalidParameters {
            message: "line_num must be a non-negative integer".to_string(),
        }
        .into()
    })
}

#[async_trait]
impl Endpoint for OpenInEditorEndpoint {
    fn name(&self) -> &str {
        "open_in_editor"
    }

    fn description(&self) -> &str {
        "Open a file at a line in the configured editor\n\
         * Runs `<editor> [root_path] -g <file_path>:<line_num>` without waiting\n\
         * Returns true if the editor was started, false otherwise"
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "file_path": {
                    "type": "string",
                    "description": "File to open"
                },
                "line_num": {
                    "type": "integer",
                    "description": "1-based line to jump to",
                    "minimum": 1
                },
                "root_path": {
                    "type": "string",
                    "description": "Workspace folder to open first (optional)"
                }
            },
            "required": ["file_path", "line_num"]
        })
    }

    async fn invoke(&self, call: EndpointCall) -> Result<Value> {
        let file_path: String = call.get_parameter("file_path")?;
        let line = line_number(&call)?;
        let root_path: Option<String> = call.get_optional("root_path")?;

        let opened = crate::editor::open_in_editor(
            &self.config.editor,
            &file_path,
            line,
            root_path.as_deref(),
        );
        Ok(json!(opened))
    }

    fn examples(&self) -> Vec<EndpointExample> {
        vec![EndpointExample {
            description: "Open a match inside its project window".to_string(),
            parameters: json!({
                "file_path": "/home/me/project/src/main.rs",
                "line_num": 42,
                "root_path": "/home/me/project"
            }),
            expected_result: "true once the editor process has been started".to_string(),
        }]
    }
}

impl_endpoint_factory!(
    OpenInEditorEndpointFactory,
    OpenInEditorEndpoint,
    "open_in_editor",
    "Open a file at a specific line in the external editor"
);
