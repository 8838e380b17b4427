//! Supervised connection to a ledger node.
//!
//! The connection is a background recovery loop, not a request-scoped
//! resource: a detached task probes the node's JSON-RPC endpoint,
//! retries after a fixed delay while unreachable, and exposes current
//! connectivity through a watch channel. Callers never block on a
//! reconnect — [`LedgerConnection::ensure_connected`] only nudges the
//! loop and returns.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Notify, watch};

use crate::error::GatewayError;

/// Indivisible base units per whole native unit (drops per XRP).
const DROPS_PER_NATIVE: f64 = 1_000_000.0;

/// How often the loop re-probes a connection believed healthy.
const HEALTH_INTERVAL: Duration = Duration::from_secs(30);

/// Handle to the supervised ledger connection.
#[derive(Debug)]
pub struct LedgerConnection {
    status: watch::Receiver<bool>,
    nudge: Arc<Notify>,
    task: tokio::task::JoinHandle<()>,
}

impl LedgerConnection {
    /// Spawns the supervised reconnect loop against `endpoint`.
    ///
    /// `retry_delay` is the fixed pause between failed attempts;
    /// `timeout` bounds every probe call.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Internal`] if the HTTP client cannot be
    /// constructed.
    pub fn spawn(
        endpoint: String,
        retry_delay: Duration,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Internal(format!("ledger http client: {e}")))?;

        let (status_tx, status_rx) = watch::channel(false);
        let nudge = Arc::new(Notify::new());
        let task = tokio::spawn(run_loop(
            client,
            endpoint,
            retry_delay,
            status_tx,
            Arc::clone(&nudge),
        ));

        Ok(Self {
            status: status_rx,
            nudge,
            task,
        })
    }

    /// Returns the last observed connectivity state.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        *self.status.borrow()
    }

    /// Nudges the recovery loop when disconnected.
    ///
    /// Never blocks and never fails: a broken connection is repaired in
    /// the background, and the caller may incur a one-time reconnect
    /// latency on the node side instead.
    pub fn ensure_connected(&self) {
        if !self.is_connected() {
            self.nudge.notify_one();
        }
    }

    /// Converts a decimal native-asset amount to indivisible base units
    /// (1 XRP = 1 000 000 drops).
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidIntent`] for non-numeric,
    /// negative, or non-finite amounts.
    pub fn xrp_to_drops(&self, amount: &str) -> Result<u64, GatewayError> {
        let value: f64 = amount
            .trim()
            .parse()
            .map_err(|_| GatewayError::InvalidIntent(format!("amount: {amount}")))?;
        if !value.is_finite() || value < 0.0 {
            return Err(GatewayError::InvalidIntent(format!("amount: {amount}")));
        }
        let drops = (value * DROPS_PER_NATIVE).round();
        Ok(drops as u64)
    }

    /// Stops the background recovery loop.
    pub fn stop(&self) {
        self.task.abort();
    }
}

/// Background recovery loop: probe, mark status, retry on a fixed delay.
async fn run_loop(
    client: reqwest::Client,
    endpoint: String,
    retry_delay: Duration,
    status_tx: watch::Sender<bool>,
    nudge: Arc<Notify>,
) {
    loop {
        if !*status_tx.borrow() {
            match probe(&client, &endpoint).await {
                Ok(()) => {
                    let _ = status_tx.send(true);
                    tracing::info!(%endpoint, "ledger node connected");
                }
                Err(error) => {
                    tracing::warn!(%endpoint, %error, delay_secs = retry_delay.as_secs(),
                        "ledger probe failed; retrying");
                    tokio::time::sleep(retry_delay).await;
                }
            }
            continue;
        }

        // Connected: wait for a nudge or the periodic health check.
        tokio::select! {
            () = nudge.notified() => {}
            () = tokio::time::sleep(HEALTH_INTERVAL) => {}
        }
        if probe(&client, &endpoint).await.is_err() {
            let _ = status_tx.send(false);
            tracing::warn!(%endpoint, "ledger node connection lost");
        }
    }
}

/// One `server_info` probe against the node's JSON-RPC endpoint.
async fn probe(client: &reqwest::Client, endpoint: &str) -> Result<(), GatewayError> {
    let response = client
        .post(endpoint)
        .json(&serde_json::json!({"method": "server_info", "params": [{}]}))
        .send()
        .await
        .map_err(|e| GatewayError::ServiceUnavailable(format!("ledger node: {e}")))?;

    if response.status().is_success() {
        Ok(())
    } else {
        Err(GatewayError::ServiceUnavailable(format!(
            "ledger node returned {}",
            response.status()
        )))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn connection() -> LedgerConnection {
        let Ok(conn) = LedgerConnection::spawn(
            "http://127.0.0.1:1".to_string(),
            Duration::from_secs(60),
            Duration::from_millis(50),
        ) else {
            panic!("expected connection handle");
        };
        conn
    }

    #[tokio::test]
    async fn converts_whole_native_amounts_to_drops() {
        let conn = connection();
        let Ok(drops) = conn.xrp_to_drops("10") else {
            panic!("expected conversion");
        };
        assert_eq!(drops, 10_000_000);
        conn.stop();
    }

    #[tokio::test]
    async fn converts_fractional_amounts() {
        let conn = connection();
        let Ok(drops) = conn.xrp_to_drops("0.5") else {
            panic!("expected conversion");
        };
        assert_eq!(drops, 500_000);
        conn.stop();
    }

    #[tokio::test]
    async fn rejects_garbage_and_negative_amounts() {
        let conn = connection();
        assert!(conn.xrp_to_drops("ten").is_err());
        assert!(conn.xrp_to_drops("-1").is_err());
        conn.stop();
    }

    #[tokio::test]
    async fn starts_disconnected_and_ensure_does_not_block() {
        let conn = connection();
        assert!(!conn.is_connected());
        // Must return immediately even while the node is unreachable.
        conn.ensure_connected();
        assert!(!conn.is_connected());
        conn.stop();
    }
}
