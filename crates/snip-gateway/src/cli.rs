use clap::Parser;
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "SNIP_GATEWAY_LISTEN_ADDR";
pub const BASE_URL_ENV: &str = "SNIP_GATEWAY_BASE_URL";
pub const SHORT_PATH_LENGTH_ENV: &str = "SNIP_SHORT_PATH_LENGTH";
pub const RETENTION_DAYS_ENV: &str = "SNIP_RETENTION_DAYS";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

#[derive(Debug, Parser)]
#[command(name = "snip-gateway")]
pub struct Cli {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Public prefix for issued short links.
    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Identifier length in characters.
    #[arg(long, env = SHORT_PATH_LENGTH_ENV, default_value_t = snip_generator::DEFAULT_LENGTH)]
    pub short_path_length: usize,

    /// Retention window applied to new mappings.
    #[arg(long, env = RETENTION_DAYS_ENV, default_value_t = snip_shortener::DEFAULT_RETENTION_DAYS)]
    pub retention_days: i64,
}
