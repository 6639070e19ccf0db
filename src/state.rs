use std::sync::Arc;

use anyhow::Result;
use reqwest::Client;

use crate::config::Config;
use crate::utils::http::build_http_client;

/// Read-only per-process state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http: Client,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        Ok(AppState {
            config: Arc::new(config),
            http: build_http_client()?,
        })
    }
}
