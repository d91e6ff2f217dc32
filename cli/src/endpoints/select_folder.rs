//! `select_folder`: native folder picker for the UI

use async_trait::async_trait;
use rgview_core::api::{Endpoint, EndpointCall, EndpointExample};
use rgview_core::config::AppConfig;
use rgview_core::impl_endpoint_factory;
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::Arc;

pub struct SelectFolderEndpoint;

impl SelectFolderEndpoint {
    pub fn new(_config: Arc<AppConfig>) -> Self {
        Self
    }
}

#[async_trait]
impl Endpoint for SelectFolderEndpoint {
    fn name(&self) -> &str {
        "select_folder"
    }

    fn description(&self) -> &str {
        "Open the native folder picker and return the chosen folder\n\
         * Returns the absolute path as a string, or null when cancelled\n\
         * Blocks until the dialog is closed"
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "start_path": {
                    "type": "string",
                    "description": "Folder the dialog starts in (optional)"
                }
            },
            "required": []
        })
    }

    async fn invoke(&self, call: EndpointCall) -> rgview_core::Result<Value> {
        let start: Option<String> = call.get_optional("start_path")?;
        let start = start.map(|s| rgview_core::paths::normalize(&s));

        // Blocking on purpose: the bridge awaits one request at a time on the
        // main thread, which is where the macOS picker has to run.
        let picked: Option<PathBuf> = crate::dialog::pick_folder(start.as_deref());
        Ok(match picked {
            Some(path) => json!(path.to_string_lossy()),
            None => Value::Null,
        })
    }

    fn examples(&self) -> Vec<EndpointExample> {
        vec![EndpointExample {
            description: "Let the user choose the search root".to_string(),
            parameters: json!({"start_path": "~/projects"}),
            expected_result: "\"/home/me/projects/app\" or null".to_string(),
        }]
    }
}

impl_endpoint_factory!(
    SelectFolderEndpointFactory,
    SelectFolderEndpoint,
    "select_folder",
    "Open a native dialog to choose a folder"
);
