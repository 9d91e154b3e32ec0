/*
[INPUT]:  HyperETH builder constants
[OUTPUT]: Builder address and maximum fee rate for approval
[POS]:    Hyperliquid layer - builder fee information
[UPDATE]: When the HyperETH builder address or fee changes
*/

use alloy::primitives::{Address, address};
use rust_decimal::Decimal;

/// The HyperETH builder address that routes trades.
pub const BUILDER_ADDRESS: Address = address!("43539fA237e2F20Dbdb9A783bd8d8B5E99cEa4c9");

/// Maximum builder fee, in basis points.
pub const BUILDER_FEE_BPS: u32 = 25;

/// Maximum fee rate in the percent-string format the approveBuilderFee
/// action expects, e.g. 25 bp -> "0.25%".
pub fn builder_max_fee_rate() -> String {
    let percent = Decimal::new(BUILDER_FEE_BPS as i64, 2).normalize();
    format!("{percent}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_max_fee_rate() {
        assert_eq!(builder_max_fee_rate(), "0.25%");
    }

    #[test]
    fn test_builder_address() {
        assert_eq!(
            format!("{BUILDER_ADDRESS:?}").to_lowercase(),
            "0x43539fa237e2f20dbdb9a783bd8d8b5e99cea4c9"
        );
    }
}
