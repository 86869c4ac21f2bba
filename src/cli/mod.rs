use axum::http::HeaderValue;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use url::Url;

#[derive(Debug, Parser)]
pub struct Args {
    #[arg(long)]
    #[arg(default_value = "0.0.0.0:3030")]
    pub listen_address: SocketAddr,
    #[arg(long)]
    pub jwt_signing_key: String,
    /// Newline-delimited JSON file with one landmark per line.
    #[arg(long)]
    #[arg(default_value = "landmarks.example.ndjson")]
    pub locations: PathBuf,
    /// JSON file with country areas in km² and name aliases. Built-in table if omitted.
    #[arg(long)]
    pub country_areas: Option<PathBuf>,
    /// Base URL of the score backend. Scores are kept in memory if omitted.
    #[arg(long)]
    pub scores_backend_url: Option<Url>,
    #[arg(long)]
    #[arg(default_value_t = 5000)]
    pub scores_timeout_ms: u64,
    /// Length of one countdown second.
    #[arg(long)]
    #[arg(default_value_t = 1000)]
    pub tick_interval_ms: u64,
    /// Seed for drawing landmarks. Random if omitted.
    #[arg(long)]
    pub seed: Option<u64>,
    #[arg(long)]
    #[arg(value_delimiter = ',')]
    #[arg(default_value = "http://127.0.0.1:3000,http://localhost:3000")]
    pub allowed_origins: Vec<HeaderValue>,
}
