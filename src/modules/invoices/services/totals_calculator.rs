use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::core::rounding::round_to_rupee;
use crate::core::{AppError, Result};
use crate::modules::invoices::models::{
    validate_gst_rate, InvoiceTotals, LineItemInput, LineItemResult,
};
use crate::modules::invoices::services::amount_words::amount_in_words;
use crate::modules::taxes::models::JurisdictionContext;
use crate::modules::taxes::services::GstSplitter;

/// Calculator for invoice totals and the GST tax breakup
///
/// Folds an ordered list of line items and a jurisdiction context into an
/// `InvoiceTotals`. The fold is a pure computation: identical inputs always
/// produce identical outputs, and nothing is cached or mutated between
/// calls.
///
/// The default GST rate applied to items that carry none is supplied here by
/// the caller; the engine has no built-in rate.
pub struct TotalsCalculator {
    default_gst_rate: Decimal,
    splitter: GstSplitter,
}

impl TotalsCalculator {
    /// Create a calculator with the caller's default GST rate percent
    pub fn new(default_gst_rate: Decimal) -> Result<Self> {
        validate_gst_rate(default_gst_rate)?;
        Ok(Self {
            default_gst_rate,
            splitter: GstSplitter::new(),
        })
    }

    /// Compute the derived amounts for a single line item
    ///
    /// Validates the item, resolves its GST rate against the calculator
    /// default, and returns the amounts. Out-of-range inputs are rejected
    /// rather than carried through to a negative taxable amount.
    pub fn calculate_line(&self, item: &LineItemInput) -> Result<LineItemResult> {
        item.validate()?;
        let gst_rate = item.gst_rate_percent.unwrap_or(self.default_gst_rate);
        Ok(LineItemResult::compute(item, gst_rate))
    }

    /// Fold line items and the jurisdiction into invoice totals
    ///
    /// * `subtotal` is the sum of post-discount taxable amounts;
    ///   `total_discount` is reported separately, so
    ///   `subtotal + total_discount` equals the pre-discount gross.
    /// * The CGST/SGST vs IGST split follows the three-way intra-state test
    ///   on the jurisdiction.
    /// * Only the grand total is rounded (to the whole rupee, half away from
    ///   zero); `round_off` records the signed difference.
    ///
    /// An empty item list is a valid document and yields all-zero totals
    /// with "Zero Rupees Only".
    pub fn calculate_totals(
        &self,
        items: &[LineItemInput],
        ctx: &JurisdictionContext,
    ) -> Result<InvoiceTotals> {
        ctx.validate()?;

        debug!(
            item_count = items.len(),
            place_of_supply = %ctx.place_of_supply_state,
            "calculating invoice totals"
        );

        let mut lines = Vec::with_capacity(items.len());
        let mut subtotal = Decimal::ZERO;
        let mut total_discount = Decimal::ZERO;
        let mut total_gst = Decimal::ZERO;

        for item in items {
            let line = self.calculate_line(item)?;
            subtotal += line.taxable_amount;
            total_discount += line.discount_amount;
            total_gst += line.gst_amount;
            lines.push(line);
        }

        let gst = self.splitter.split(total_gst, ctx)?;

        let raw_total = subtotal + total_gst;
        let grand_total = round_to_rupee(raw_total);
        let round_off = grand_total - raw_total;

        if round_off.abs() > Decimal::new(5, 1) {
            warn!(
                "Round-off {} outside the half-rupee band for raw total {}",
                round_off, raw_total
            );
            return Err(AppError::calculation(format!(
                "Round-off {} exceeds half a rupee",
                round_off
            )));
        }

        let grand_total_in_words = amount_in_words(grand_total)?;

        Ok(InvoiceTotals {
            subtotal,
            total_discount,
            total_gst,
            gst,
            grand_total,
            round_off,
            grand_total_in_words,
            lines,
        })
    }
}
