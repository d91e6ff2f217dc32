//! One-shot search command

use crate::config::CliConfigLoader;
use crate::output::{render_results, render_summary};
use anyhow::Result;
use clap::Args;
use rgview_core::api::error_payload;
use rgview_core::search::{OneOrMany, RawSearchRequest};
use rgview_core::{run_search, AppConfig, SearchResponse};
use tracing::debug;

/// Arguments for `rgview search`
#[derive(Debug, Clone, Args)]
pub struct SearchArgs {
    /// Pattern to search for
    pub query: String,

    /// Directories or files to search; the first is the display root
    #[arg(required = true)]
    pub paths: Vec<String>,

    /// Only search these extensions, e.g. "py,js"
    #[arg(short = 't', long = "ext", value_delimiter = ',')]
    pub extensions: Vec<String>,

    /// Ignore case
    #[arg(short = 'i', long, conflicts_with = "case_sensitive")]
    pub ignore_case: bool,

    /// Match case exactly (default is smart case)
    #[arg(short = 's', long)]
    pub case_sensitive: bool,

    /// Extra ripgrep arguments, quoted like a shell command line
    #[arg(long, allow_hyphen_values = true)]
    pub extra: Option<String>,

    /// Print the JSON payload a UI would receive
    #[arg(long)]
    pub json: bool,
}

impl SearchArgs {
    fn case_flag(&self) -> Option<bool> {
        if self.case_sensitive {
            Some(true)
        } else if self.ignore_case {
            Some(false)
        } else {
            None
        }
    }

    /// Same loosely-typed shape the `run_ripgrep` endpoint accepts
    pub fn to_raw_request(&self) -> RawSearchRequest {
        RawSearchRequest {
            query: self.query.clone(),
            path: None,
            paths: Some(OneOrMany::Many(self.paths.clone())),
            extensions: (!self.extensions.is_empty())
                .then(|| OneOrMany::Many(self.extensions.clone())),
            case_sensitive: self.case_flag(),
            extra_args: self.extra.clone(),
        }
    }
}

async fn execute(args: &SearchArgs, config: &AppConfig) -> rgview_core::Result<SearchResponse> {
    let request = args.to_raw_request().into_request(config.default_case)?;
    debug!("Search request: {:?}", request);
    run_search(config, &request).await
}

/// Run one search and print it, colored or as JSON
pub async fn search_command(args: SearchArgs, config_loader: CliConfigLoader) -> Result<()> {
    let config = config_loader.load().await?;

    match execute(&args, &config).await {
        Ok(response) if args.json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Ok(response) => {
            print!("{}", render_results(&response.data));
            println!("{}", render_summary(&response));
        }
        Err(e) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&error_payload(&e))?);
            }
            return Err(e.into());
        }
    }

    Ok(())
}
