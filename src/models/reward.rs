use rust_decimal::Decimal;
use serde::Deserialize;

/// One input row of the airdrop CSV.
///
/// The file must carry a header row naming both columns; rows missing a
/// field or carrying a non-numeric reward fail deserialization, which
/// aborts the run.
#[derive(Debug, Clone, Deserialize)]
pub struct RewardRow {
    pub account_id: String,
    pub reward: Decimal,
}
