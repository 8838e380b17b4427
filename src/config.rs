//! Gateway configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`), loaded once at startup and treated
//! as immutable for the process lifetime.

use std::net::SocketAddr;

use crate::domain::Network;

/// Top-level gateway configuration.
///
/// Loaded once at startup via [`GatewayConfig::from_env`].
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:5000`).
    pub listen_addr: SocketAddr,

    /// Ledger network the gateway operates against.
    pub network: Network,

    /// Base URL of the external wallet-signing service.
    pub signing_base_url: String,

    /// API key for the signing service.
    pub signing_api_key: String,

    /// API secret for the signing service.
    pub signing_api_secret: String,

    /// Secret used to sign session tokens; held only in memory.
    pub session_secret: String,

    /// Session token lifetime in seconds.
    pub session_ttl_secs: u64,

    /// Expiry window for swap sign requests, in minutes.
    ///
    /// Shorter than the login default because a swap's market
    /// conditions go stale.
    pub swap_expire_mins: u32,

    /// JSON-RPC endpoint of the ledger node.
    pub ledger_endpoint: String,

    /// Seconds between ledger reconnect attempts.
    pub ledger_retry_secs: u64,

    /// Liquidity-pool account identifiers to watch for swaps.
    pub tracked_pools: Vec<String>,

    /// Mint identifier of the wrapped native asset in token transfers.
    pub wrapped_native_mint: String,

    /// Fan-out channel name swap records are published on.
    pub fanout_channel: String,

    /// Fan-out event name swap records are published under.
    pub fanout_event: String,

    /// Capacity of the EventBus broadcast channel.
    pub event_bus_capacity: usize,

    /// Timeout in seconds applied to every outbound HTTP call.
    pub http_timeout_secs: u64,
}

impl GatewayConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to sensible defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let listen_addr: SocketAddr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:5000".to_string())
            .parse()?;

        let network = Network::from_label(
            &std::env::var("LEDGER_NETWORK").unwrap_or_else(|_| "main".to_string()),
        );

        let signing_base_url = std::env::var("SIGNING_SERVICE_URL")
            .unwrap_or_else(|_| "https://xumm.app/api/v1/platform".to_string());
        let signing_api_key = std::env::var("SIGNING_API_KEY").unwrap_or_default();
        let signing_api_secret = std::env::var("SIGNING_API_SECRET").unwrap_or_default();

        let session_secret = std::env::var("SESSION_SECRET").unwrap_or_default();
        let session_ttl_secs = parse_env("SESSION_TTL_SECS", 3600);
        let swap_expire_mins = parse_env("SWAP_EXPIRE_MINS", 5);

        let ledger_endpoint = std::env::var("LEDGER_RPC_URL")
            .unwrap_or_else(|_| "https://s1.ripple.com:51234".to_string());
        let ledger_retry_secs = parse_env("LEDGER_RETRY_SECS", 5);

        let tracked_pools = parse_env_list("TRACKED_POOLS");
        let wrapped_native_mint = std::env::var("WRAPPED_NATIVE_MINT")
            .unwrap_or_else(|_| "So11111111111111111111111111111111111111112".to_string());

        let fanout_channel =
            std::env::var("FANOUT_CHANNEL").unwrap_or_else(|_| "swaps".to_string());
        let fanout_event =
            std::env::var("FANOUT_EVENT").unwrap_or_else(|_| "swap-detected".to_string());

        let event_bus_capacity = parse_env("EVENT_BUS_CAPACITY", 10_000);
        let http_timeout_secs = parse_env("HTTP_TIMEOUT_SECS", 10);

        Ok(Self {
            listen_addr,
            network,
            signing_base_url,
            signing_api_key,
            signing_api_secret,
            session_secret,
            session_ttl_secs,
            swap_expire_mins,
            ledger_endpoint,
            ledger_retry_secs,
            tracked_pools,
            wrapped_native_mint,
            fanout_channel,
            fanout_event,
            event_bus_capacity,
            http_timeout_secs,
        })
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Parses a comma-separated environment variable into a list, trimming
/// whitespace and dropping empty entries.
fn parse_env_list(key: &str) -> Vec<String> {
    split_list(&std::env::var(key).unwrap_or_default())
}

/// Splits a comma-separated string into trimmed, non-empty entries.
fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
