//! Runtime configuration from the environment.

use std::env;

const API_URL_VAR: &str = "VERNE_API_URL";
const DEFAULT_API_URL: &str = "http://localhost:3001/api";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        let api_url = env::var(API_URL_VAR)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self { api_url }
    }
}
