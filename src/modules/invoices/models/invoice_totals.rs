// InvoiceTotals aggregate result
//
// The totals record a caller renders and persists. Every field is derived
// by the totals calculator from the line items and jurisdiction; nothing
// here is mutated after construction or kept across calls.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::modules::invoices::models::LineItemResult;
use crate::modules::taxes::GstBreakup;

/// Aggregate totals for one invoice/purchase document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    /// Sum of post-discount taxable amounts (the GST "taxable value"
    /// convention; `subtotal + total_discount` equals the pre-discount gross)
    pub subtotal: Decimal,

    /// Sum of per-line discount amounts
    pub total_discount: Decimal,

    /// Sum of per-line GST amounts
    pub total_gst: Decimal,

    /// CGST/SGST vs IGST split of `total_gst`
    #[serde(flatten)]
    pub gst: GstBreakup,

    /// `subtotal + total_gst` rounded to the whole rupee, half away from zero
    pub grand_total: Decimal,

    /// `grand_total − (subtotal + total_gst)`, signed, within ±0.5
    pub round_off: Decimal,

    /// Grand total in Indian-system words, e.g. "One Thousand Sixty Two
    /// Rupees Only" (paise are dropped)
    pub grand_total_in_words: String,

    /// Per-line derived amounts, in input order, for line-level display
    pub lines: Vec<LineItemResult>,
}

impl InvoiceTotals {
    /// The unrounded total the grand total was derived from
    pub fn raw_total(&self) -> Decimal {
        self.subtotal + self.total_gst
    }
}
