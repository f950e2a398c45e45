use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal scale for rupee amounts carrying paise (2 decimal places)
pub const PAISE_SCALE: u32 = 2;

/// Rounds an amount to the nearest whole rupee, half away from zero.
///
/// This is the rule applied to an invoice grand total; it matches the
/// half-up rounding billing counters expect (1180.50 becomes 1181, not the
/// 1180 banker's rounding would give).
pub fn round_to_rupee(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds an amount to paise precision, half away from zero.
///
/// Display-level helper only. The calculators keep intermediate values at
/// full precision so sum identities hold exactly.
pub fn round_to_paise(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(PAISE_SCALE, RoundingStrategy::MidpointAwayFromZero)
}
