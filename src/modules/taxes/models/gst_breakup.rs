// GstBreakup: the CGST/SGST/IGST component split of a GST total

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// Component split of a GST amount.
///
/// Exactly one side is populated per computation: intra-state transactions
/// carry equal CGST and SGST halves, inter-state transactions carry the full
/// amount as IGST. Components are kept at full decimal precision (an odd
/// paise total splits into exact half-paise halves) so the components always
/// sum back to the total exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GstBreakup {
    /// Central GST (intra-state only)
    pub cgst: Decimal,
    /// State GST (intra-state only)
    pub sgst: Decimal,
    /// Integrated GST (inter-state only)
    pub igst: Decimal,
}

impl GstBreakup {
    /// Split a GST total for an intra-state transaction (CGST + SGST halves)
    pub fn intra_state(total_gst: Decimal) -> Self {
        let half = total_gst / Decimal::TWO;
        Self {
            cgst: half,
            sgst: half,
            igst: Decimal::ZERO,
        }
    }

    /// Split a GST total for an inter-state transaction (IGST only)
    pub fn inter_state(total_gst: Decimal) -> Self {
        Self {
            cgst: Decimal::ZERO,
            sgst: Decimal::ZERO,
            igst: total_gst,
        }
    }

    /// A breakup with every component zero
    pub fn zero() -> Self {
        Self {
            cgst: Decimal::ZERO,
            sgst: Decimal::ZERO,
            igst: Decimal::ZERO,
        }
    }

    /// Sum of all components
    pub fn total(&self) -> Decimal {
        self.cgst + self.sgst + self.igst
    }

    /// Check the breakup is internally consistent against its expected total
    ///
    /// Rejects a breakup whose components do not sum to `expected_total`,
    /// unequal CGST/SGST halves, or a mixed split carrying both CGST/SGST
    /// and IGST.
    pub fn verify(&self, expected_total: Decimal) -> Result<()> {
        if self.total() != expected_total {
            return Err(AppError::calculation(format!(
                "GST components ({}) do not sum to total GST ({})",
                self.total(),
                expected_total
            )));
        }
        if self.cgst != self.sgst {
            return Err(AppError::calculation(format!(
                "CGST ({}) and SGST ({}) must be equal halves",
                self.cgst, self.sgst
            )));
        }
        if self.igst != Decimal::ZERO
            && (self.cgst != Decimal::ZERO || self.sgst != Decimal::ZERO)
        {
            return Err(AppError::calculation(
                "Breakup mixes CGST/SGST with IGST".to_string(),
            ));
        }
        Ok(())
    }
}
