//! `run_ripgrep`: search and return grouped, highlighted matches

use crate::api::{Endpoint, EndpointCall, EndpointExample};
use crate::config::AppConfig;
use crate::error::Result;
use crate::impl_endpoint_factory;
use crate::search::{run_search, RawSearchRequest};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct SearchEndpoint {
    config: Arc<AppConfig>,
}

impl SearchEndpoint {
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Endpoint for SearchEndpoint {
    fn name(&self) -> &str {
        "run_ripgrep"
    }

    fn description(&self) -> &str {
        "Search files with ripgrep and return matches grouped by file\n\
         * `path` or `paths` may be a single string or a list\n\
         * `extensions` may be a comma-separated string (\"py, js\") or a list\n\
         * Omitting `case_sensitive` uses smart case\n\
         * `extra_args` is passed to ripgrep after shell-style tokenization\n\
         * Returns { success, data: { file: [match] }, count } or { error }"
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Pattern to search for"
                },
                "path": {
                    "type": ["string", "array"],
                    "items": {"type": "string"},
                    "description": "Directory or file to search"
                },
                "paths": {
                    "type": ["string", "array"],
                    "items": {"type": "string"},
                    "description": "Additional directories or files to search"
                },
                "extensions": {
                    "type": ["string", "array"],
                    "items": {"type": "string"},
                    "description": "File extensions to include, e.g. \"py, js\""
                },
                "case_sensitive": {
                    "type": "boolean",
                    "description": "true for exact case, false to ignore case, omit for smart case"
                },
                "extra_args": {
                    "type": "string",
                    "description": "Extra ripgrep flags, e.g. --hidden --type-add \"web:*.html\""
                }
            },
            "required": ["query"]
        })
    }

    async fn invoke(&self, call: EndpointCall) -> Result<Value> {
        let raw: RawSearchRequest = call.parse_params()?;
        let request = raw.into_request(self.config.default_case)?;
        let response = run_search(&self.config, &request).await?;
        Ok(serde_json::to_value(response)?)
    }

    fn examples(&self) -> Vec<EndpointExample> {
        vec![
            EndpointExample {
                description: "Case-insensitive search in Python and JavaScript files".to_string(),
                parameters: json!({
                    "query": "todo",
                    "path": "/home/me/project",
                    "extensions": "py, js",
                    "case_sensitive": false
                }),
                expected_result: "Matches grouped by file with highlighted content_html".to_string(),
            },
            EndpointExample {
                description: "Search two roots, including hidden files".to_string(),
                parameters: json!({
                    "query": "API_KEY",
                    "paths": ["/srv/app", "/etc/app"],
                    "extra_args": "--hidden"
                }),
                expected_result: "Matches from both roots; full_path is absolute".to_string(),
            },
        ]
    }
}

impl_endpoint_factory!(
    SearchEndpointFactory,
    SearchEndpoint,
    "run_ripgrep",
    "Search files with ripgrep and return highlighted matches grouped by file"
);
