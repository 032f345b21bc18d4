//! Supported assets and prediction horizons
//!
//! Both lists are fixed at compile time. The pickers only ever offer these
//! entries, so nothing outside them can reach the predictor.

use std::fmt;

/// A cryptocurrency the predictor can be asked about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Asset {
    /// Stable identifier (CoinGecko-style slug)
    pub id: &'static str,
    /// Human readable name
    pub name: &'static str,
    /// Ticker symbol
    pub symbol: &'static str,
}

/// Label used in pickers, e.g. `Bitcoin (BTC)`
impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.symbol)
    }
}

/// A prediction horizon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period {
    /// Short code, e.g. `24h`
    pub value: &'static str,
    /// Display label, e.g. `24 Hours`
    pub label: &'static str,
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

const fn asset(id: &'static str, name: &'static str, symbol: &'static str) -> Asset {
    Asset { id, name, symbol }
}

/// Top 20 assets, in picker order
pub static ASSETS: [Asset; 20] = [
    asset("bitcoin", "Bitcoin", "BTC"),
    asset("ethereum", "Ethereum", "ETH"),
    asset("binancecoin", "BNB", "BNB"),
    asset("solana", "Solana", "SOL"),
    asset("cardano", "Cardano", "ADA"),
    asset("polkadot", "Polkadot", "DOT"),
    asset("chainlink", "Chainlink", "LINK"),
    asset("litecoin", "Litecoin", "LTC"),
    asset("bitcoin-cash", "Bitcoin Cash", "BCH"),
    asset("stellar", "Stellar", "XLM"),
    asset("dogecoin", "Dogecoin", "DOGE"),
    asset("matic-network", "Polygon", "MATIC"),
    asset("avalanche-2", "Avalanche", "AVAX"),
    asset("uniswap", "Uniswap", "UNI"),
    asset("cosmos", "Cosmos", "ATOM"),
    asset("algorand", "Algorand", "ALGO"),
    asset("near", "NEAR Protocol", "NEAR"),
    asset("fantom", "Fantom", "FTM"),
    asset("sandbox", "The Sandbox", "SAND"),
    asset("decentraland", "Decentraland", "MANA"),
];

/// Prediction horizons, in picker order
pub static PERIODS: [Period; 4] = [
    Period { value: "1h", label: "1 Hour" },
    Period { value: "24h", label: "24 Hours" },
    Period { value: "7d", label: "7 Days" },
    Period { value: "30d", label: "30 Days" },
];

/// Look up an asset by id
#[cfg(test)]
pub fn find_asset(id: &str) -> Option<&'static Asset> {
    ASSETS.iter().find(|a| a.id == id)
}

/// Look up a period by its short code
#[cfg(test)]
pub fn find_period(value: &str) -> Option<&'static Period> {
    PERIODS.iter().find(|p| p.value == value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_asset_ids_are_unique() {
        let ids: HashSet<_> = ASSETS.iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), ASSETS.len());
        let symbols: HashSet<_> = ASSETS.iter().map(|a| a.symbol).collect();
        assert_eq!(symbols.len(), ASSETS.len());
    }

    #[test]
    fn test_asset_order() {
        assert_eq!(ASSETS[0].id, "bitcoin");
        assert_eq!(ASSETS[11].name, "Polygon");
        assert_eq!(ASSETS[19].symbol, "MANA");
    }

    #[test]
    fn test_period_table() {
        let values: Vec<_> = PERIODS.iter().map(|p| p.value).collect();
        assert_eq!(values, ["1h", "24h", "7d", "30d"]);
        assert_eq!(PERIODS[1].label, "24 Hours");
    }

    #[test]
    fn test_lookups() {
        assert_eq!(find_asset("near").map(|a| a.name), Some("NEAR Protocol"));
        assert!(find_asset("tether").is_none());
        assert_eq!(find_period("7d").map(|p| p.label), Some("7 Days"));
        assert!(find_period("1y").is_none());
    }

    #[test]
    fn test_asset_label() {
        let btc = find_asset("bitcoin").unwrap();
        assert_eq!(btc.to_string(), "Bitcoin (BTC)");
    }
}
