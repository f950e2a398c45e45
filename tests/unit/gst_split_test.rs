/// Property-based tests for the CGST/SGST vs IGST split
///
/// The split is decided by the three-way jurisdiction equality and must
/// always sum back to the total exactly, with only one side populated.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use gstbill::{GstBreakup, GstSplitter, JurisdictionContext};

fn intra_ctx() -> JurisdictionContext {
    JurisdictionContext::new("Karnataka", "Karnataka", "Karnataka").unwrap()
}

fn inter_ctx() -> JurisdictionContext {
    JurisdictionContext::new("Karnataka", "Karnataka", "Maharashtra").unwrap()
}

proptest! {
    #[test]
    fn test_components_always_sum_to_total_exactly(
        total_paise in 0u64..10_000_000_000u64,
        intra in any::<bool>(),
    ) {
        let total_gst = Decimal::from(total_paise) / dec!(100);
        let ctx = if intra { intra_ctx() } else { inter_ctx() };

        let breakup = GstSplitter::new().split(total_gst, &ctx).unwrap();
        prop_assert_eq!(breakup.cgst + breakup.sgst + breakup.igst, total_gst);
    }

    #[test]
    fn test_exactly_one_side_is_populated(
        total_paise in 1u64..10_000_000_000u64,
        intra in any::<bool>(),
    ) {
        let total_gst = Decimal::from(total_paise) / dec!(100);
        let ctx = if intra { intra_ctx() } else { inter_ctx() };

        let breakup = GstSplitter::new().split(total_gst, &ctx).unwrap();
        if intra {
            prop_assert!(breakup.cgst > Decimal::ZERO);
            prop_assert_eq!(breakup.cgst, breakup.sgst);
            prop_assert_eq!(breakup.igst, Decimal::ZERO);
        } else {
            prop_assert_eq!(breakup.cgst, Decimal::ZERO);
            prop_assert_eq!(breakup.sgst, Decimal::ZERO);
            prop_assert_eq!(breakup.igst, total_gst);
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_intra_state_halves() {
        let breakup = GstSplitter::new().split(dec!(162), &intra_ctx()).unwrap();
        assert_eq!(breakup.cgst, dec!(81));
        assert_eq!(breakup.sgst, dec!(81));
        assert_eq!(breakup.igst, dec!(0));
    }

    #[test]
    fn test_place_of_supply_overrides_matching_counterparty() {
        // Supplier and counterparty match, but the declared place of supply
        // differs, so the transaction is inter-state.
        let breakup = GstSplitter::new().split(dec!(171), &inter_ctx()).unwrap();
        assert_eq!(breakup.igst, dec!(171));
        assert_eq!(breakup.cgst, dec!(0));
    }

    #[test]
    fn test_odd_paise_total_keeps_exact_halves() {
        let breakup = GstSplitter::new().split(dec!(0.01), &intra_ctx()).unwrap();
        assert_eq!(breakup.cgst, dec!(0.005));
        assert_eq!(breakup.sgst, dec!(0.005));
        assert_eq!(breakup.total(), dec!(0.01));
    }

    #[test]
    fn test_breakup_verify_accepts_split_output() {
        let breakup = GstBreakup::intra_state(dec!(99.37));
        assert!(breakup.verify(dec!(99.37)).is_ok());
    }
}
