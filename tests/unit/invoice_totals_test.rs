/// Tests for the aggregate totals fold: subtotal convention, GST totals,
/// grand-total rounding and the round-off field.

use rust_decimal_macros::dec;

use gstbill::{DiscountType, JurisdictionContext, LineItemInput, TotalsCalculator};

fn calculator() -> TotalsCalculator {
    TotalsCalculator::new(dec!(18)).unwrap()
}

fn intra_ctx() -> JurisdictionContext {
    JurisdictionContext::new("Karnataka", "Karnataka", "Karnataka").unwrap()
}

#[test]
fn test_zero_items_yield_zero_totals() {
    let totals = calculator().calculate_totals(&[], &intra_ctx()).unwrap();

    assert_eq!(totals.subtotal, dec!(0));
    assert_eq!(totals.total_discount, dec!(0));
    assert_eq!(totals.total_gst, dec!(0));
    assert_eq!(totals.gst.cgst, dec!(0));
    assert_eq!(totals.gst.sgst, dec!(0));
    assert_eq!(totals.gst.igst, dec!(0));
    assert_eq!(totals.grand_total, dec!(0));
    assert_eq!(totals.round_off, dec!(0));
    assert_eq!(totals.grand_total_in_words, "Zero Rupees Only");
}

#[test]
fn test_multi_item_totals_accumulate_in_order() {
    let items = vec![
        LineItemInput::new("prod-001", dec!(2), dec!(500))
            .unwrap()
            .with_discount(dec!(10), DiscountType::Percentage)
            .unwrap(),
        LineItemInput::new("prod-002", dec!(1), dec!(1000))
            .unwrap()
            .with_gst_rate(dec!(5))
            .unwrap(),
    ];

    let totals = calculator().calculate_totals(&items, &intra_ctx()).unwrap();

    // 900 taxable from the first line, 1000 from the second
    assert_eq!(totals.subtotal, dec!(1900));
    assert_eq!(totals.total_discount, dec!(100));
    // 162 + 50
    assert_eq!(totals.total_gst, dec!(212));
    assert_eq!(totals.lines.len(), 2);
    assert_eq!(totals.lines[0].product_ref, "prod-001");
    assert_eq!(totals.lines[1].gst_rate_percent, dec!(5));
}

#[test]
fn test_grand_total_rounds_down_and_reports_round_off() {
    // raw total 1180.40: one zero-rated line priced at 1180.40
    let items = vec![LineItemInput::new("prod-001", dec!(1), dec!(1180.40))
        .unwrap()
        .with_gst_rate(dec!(0))
        .unwrap()];

    let totals = calculator().calculate_totals(&items, &intra_ctx()).unwrap();
    assert_eq!(totals.raw_total(), dec!(1180.40));
    assert_eq!(totals.grand_total, dec!(1180));
    assert_eq!(totals.round_off, dec!(-0.40));
}

#[test]
fn test_grand_total_rounds_half_up() {
    let items = vec![LineItemInput::new("prod-001", dec!(1), dec!(1180.50))
        .unwrap()
        .with_gst_rate(dec!(0))
        .unwrap()];

    let totals = calculator().calculate_totals(&items, &intra_ctx()).unwrap();
    assert_eq!(totals.grand_total, dec!(1181));
    assert_eq!(totals.round_off, dec!(0.50));
}

#[test]
fn test_grand_total_in_words_drops_paise() {
    let items = vec![LineItemInput::new("prod-001", dec!(1), dec!(1062.20))
        .unwrap()
        .with_gst_rate(dec!(0))
        .unwrap()];

    let totals = calculator().calculate_totals(&items, &intra_ctx()).unwrap();
    assert_eq!(totals.grand_total, dec!(1062));
    assert_eq!(
        totals.grand_total_in_words,
        "One Thousand Sixty Two Rupees Only"
    );
}

#[test]
fn test_blank_jurisdiction_rejected() {
    let ctx = JurisdictionContext {
        supplier_state: "Karnataka".to_string(),
        counterparty_state: "Karnataka".to_string(),
        place_of_supply_state: "  ".to_string(),
    };

    let result = calculator().calculate_totals(&[], &ctx);
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("place_of_supply_state cannot be blank"));
}

#[test]
fn test_totals_serialize_with_flat_gst_fields() {
    let items = vec![LineItemInput::new("prod-001", dec!(2), dec!(500))
        .unwrap()
        .with_discount(dec!(10), DiscountType::Percentage)
        .unwrap()];

    let totals = calculator().calculate_totals(&items, &intra_ctx()).unwrap();
    let json = serde_json::to_value(&totals).unwrap();

    let decimal_field = |key: &str| {
        json[key]
            .as_str()
            .unwrap()
            .parse::<rust_decimal::Decimal>()
            .unwrap()
    };
    assert_eq!(decimal_field("cgst"), dec!(81));
    assert_eq!(decimal_field("sgst"), dec!(81));
    assert_eq!(decimal_field("igst"), dec!(0));
    assert_eq!(
        json["grand_total_in_words"],
        serde_json::json!("One Thousand Sixty Two Rupees Only")
    );
}
