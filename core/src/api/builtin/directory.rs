//! `list_directory`: one level of the file tree

use crate::api::{Endpoint, EndpointCall, EndpointExample};
use crate::config::AppConfig;
use crate::error::Result;
use crate::fs::list_directory;
use crate::impl_endpoint_factory;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct ListDirectoryEndpoint;

impl ListDirectoryEndpoint {
    pub fn new(_config: Arc<AppConfig>) -> Self {
        Self
    }
}

#[async_trait]
impl Endpoint for ListDirectoryEndpoint {
    fn name(&self) -> &str {
        "list_directory"
    }

    fn description(&self) -> &str {
        "List the immediate children of a directory for the file tree\n\
         * Hidden entries (names starting with '.') are skipped\n\
         * Directories first, then files, each by case-insensitive name\n\
         * A missing path returns an empty list"
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "Directory to list; relative paths and ~ are resolved"
                }
            },
            "required": ["path"]
        })
    }

    async fn invoke(&self, call: EndpointCall) -> Result<Value> {
        let path: String = call.get_parameter("path")?;
        Ok(serde_json::to_value(list_directory(&path))?)
    }

    fn examples(&self) -> Vec<EndpointExample> {
        vec![EndpointExample {
            description: "Expand a project folder".to_string(),
            parameters: json!({"path": "/home/me/project"}),
            expected_result: "[{name, path, is_dir}] with directories first".to_string(),
        }]
    }
}

impl_endpoint_factory!(
    ListDirectoryEndpointFactory,
    ListDirectoryEndpoint,
    "list_directory",
    "List one level of a directory for the lazy file tree"
);
