//! Ledger network selection.

use serde::{Deserialize, Serialize};

/// Ledger network the gateway operates against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Network {
    /// Production network.
    Main,
    /// Test network.
    Test,
}

impl Network {
    /// Parses a network label, defaulting to [`Network::Main`] for
    /// anything that is not recognizably a test network.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.to_ascii_lowercase().as_str() {
            "test" | "testnet" => Self::Test,
            _ => Self::Main,
        }
    }

    /// Canonical lowercase label for this network.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Test => "test",
        }
    }

    /// Symbol of the network's native asset.
    #[must_use]
    pub const fn native_asset(self) -> &'static str {
        "XRP"
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        assert_eq!(Network::from_label("main"), Network::Main);
        assert_eq!(Network::from_label("TEST"), Network::Test);
        assert_eq!(Network::from_label("testnet"), Network::Test);
    }

    #[test]
    fn unknown_label_defaults_to_main() {
        assert_eq!(Network::from_label("devnet"), Network::Main);
    }
}
