use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::core::{AppError, Result};
use crate::modules::taxes::models::{GstBreakup, JurisdictionContext};

/// GstSplitter turns a GST total into its CGST/SGST vs IGST components
/// based on the jurisdiction triple.
pub struct GstSplitter;

impl GstSplitter {
    pub fn new() -> Self {
        Self
    }

    /// Split a GST total for the given jurisdiction
    ///
    /// Intra-state (supplier, counterparty and place of supply all equal):
    /// equal CGST and SGST halves. Anything else: the full amount as IGST.
    /// The returned breakup always sums back to `total_gst` exactly.
    pub fn split(&self, total_gst: Decimal, ctx: &JurisdictionContext) -> Result<GstBreakup> {
        ctx.validate()?;

        if total_gst < Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Total GST cannot be negative, got: {}",
                total_gst
            )));
        }

        let intra = ctx.is_intra_state();
        debug!(
            total_gst = %total_gst,
            place_of_supply = %ctx.place_of_supply_state,
            intra_state = intra,
            "splitting GST total"
        );

        let breakup = if intra {
            GstBreakup::intra_state(total_gst)
        } else {
            GstBreakup::inter_state(total_gst)
        };

        if let Err(e) = breakup.verify(total_gst) {
            warn!(
                "GST breakup failed consistency check for total {}: {}",
                total_gst, e
            );
            return Err(e);
        }

        Ok(breakup)
    }
}

impl Default for GstSplitter {
    fn default() -> Self {
        Self::new()
    }
}
