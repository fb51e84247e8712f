use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Reward scaling errors
#[derive(Debug, Error)]
pub enum AmountError {
    #[error("Negative reward: {0}")]
    Negative(Decimal),
    #[error("Reward {reward} does not fit at {decimals} decimals")]
    Overflow { reward: Decimal, decimals: u32 },
}

/// Scale a display-unit reward to the token's smallest unit and render
/// it as a decimal-integer string.
///
/// `1.5` at 8 decimals becomes `"150000000"`. Midpoints round away
/// from zero. The arithmetic is exact decimal end to end; rewards are
/// never routed through binary floating point.
pub fn scale_reward(reward: Decimal, decimals: u32) -> Result<String, AmountError> {
    if reward.is_sign_negative() && !reward.is_zero() {
        return Err(AmountError::Negative(reward));
    }

    let factor = Decimal::from_scientific(&format!("1e{}", decimals))
        .map_err(|_| AmountError::Overflow { reward, decimals })?;

    let scaled = reward
        .checked_mul(factor)
        .ok_or(AmountError::Overflow { reward, decimals })?;

    let units = scaled.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    Ok(units.normalize().to_string())
}
