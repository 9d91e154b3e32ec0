/*
[INPUT]:  Asset metadata from the meta info query
[OUTPUT]: Asset index lookups and size/price rounding
[POS]:    Hyperliquid layer - asset metadata and tick rules
[UPDATE]: When Hyperliquid rounding rules or meta schema change
*/

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Default szDecimals used when an asset is missing from the map.
const DEFAULT_SZ_DECIMALS: u32 = 4;

/// Response of the `meta` info query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    pub universe: Vec<AssetInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetInfo {
    pub name: String,
    pub sz_decimals: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_leverage: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub only_isolated: Option<bool>,
}

/// Lookup table from the meta universe: asset name to index and szDecimals.
///
/// The asset index is the order wire's `a` field; it is the position of the
/// asset in the universe array.
#[derive(Debug, Clone, Default)]
pub struct AssetMap {
    assets: HashMap<String, AssetEntry>,
}

#[derive(Debug, Clone, Copy)]
struct AssetEntry {
    index: u32,
    sz_decimals: u32,
}

impl AssetMap {
    pub fn from_meta(meta: &Meta) -> Self {
        let assets = meta
            .universe
            .iter()
            .enumerate()
            .map(|(index, asset)| {
                (
                    asset.name.clone(),
                    AssetEntry {
                        index: index as u32,
                        sz_decimals: asset.sz_decimals,
                    },
                )
            })
            .collect();
        Self { assets }
    }

    /// Asset index for the order wire `a` field.
    pub fn index(&self, coin: &str) -> Option<u32> {
        self.assets.get(coin).map(|entry| entry.index)
    }

    pub fn sz_decimals(&self, coin: &str) -> Option<u32> {
        self.assets.get(coin).map(|entry| entry.sz_decimals)
    }

    pub fn contains(&self, coin: &str) -> bool {
        self.assets.contains_key(coin)
    }

    /// Round a size to the asset's szDecimals.
    pub fn round_size(&self, coin: &str, size: Decimal) -> Decimal {
        let sz_decimals = self.sz_decimals(coin).unwrap_or(DEFAULT_SZ_DECIMALS);
        round_size(size, sz_decimals)
    }

    /// Round a perp price according to the asset's szDecimals.
    pub fn round_price(&self, coin: &str, price: Decimal) -> Decimal {
        let sz_decimals = self.sz_decimals(coin).unwrap_or(DEFAULT_SZ_DECIMALS);
        round_price(price, sz_decimals, false)
    }
}

/// Round a size to the correct number of decimals for an asset.
pub fn round_size(size: Decimal, sz_decimals: u32) -> Decimal {
    size.round_dp(sz_decimals)
}

/// Round a price according to Hyperliquid tick rules.
///
/// Prices carry at most 5 significant figures and no more than
/// `MAX_DECIMALS - szDecimals` decimal places, where MAX_DECIMALS is 6 for
/// perps and 8 for spot. Prices above 100k round to integers.
pub fn round_price(price: Decimal, sz_decimals: u32, is_spot: bool) -> Decimal {
    let max_decimals: u32 = if is_spot { 8 } else { 6 };

    if price > Decimal::from(100_000u32) {
        return price.round();
    }

    let rounded = round_sig_figs(price, 5);
    rounded.round_dp(max_decimals.saturating_sub(sz_decimals))
}

fn round_sig_figs(value: Decimal, figs: u32) -> Decimal {
    if value.is_zero() {
        return value;
    }

    // position of the most significant digit relative to the decimal point
    let ten = Decimal::from(10u32);
    let mut magnitude: i32 = 0;
    let mut probe = value.abs();
    if probe >= Decimal::ONE {
        while probe >= ten {
            probe /= ten;
            magnitude += 1;
        }
    } else {
        while probe < Decimal::ONE {
            probe *= ten;
            magnitude -= 1;
        }
    }

    let dp = figs as i32 - 1 - magnitude;
    if dp >= 0 {
        value.round_dp(dp as u32)
    } else {
        let scale = Decimal::from(10u64.pow((-dp) as u32));
        (value / scale).round() * scale
    }
}
