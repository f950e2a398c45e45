// JurisdictionContext: the state triple deciding the GST split
//
// Callers must pass the full triple explicitly; the engine holds no default
// place of supply.

use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// The jurisdiction triple for one computation, immutable once built
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JurisdictionContext {
    /// State the supplier is registered in
    pub supplier_state: String,

    /// Counterparty state: customer for sales, vendor for purchases
    pub counterparty_state: String,

    /// Declared place of supply; independently settable by the user and not
    /// always equal to the counterparty state
    pub place_of_supply_state: String,
}

impl JurisdictionContext {
    /// Create a jurisdiction context
    ///
    /// # Arguments
    /// * `supplier_state` - Supplier's state name (must not be blank)
    /// * `counterparty_state` - Customer/vendor state name
    /// * `place_of_supply_state` - Declared place of supply
    pub fn new(
        supplier_state: impl Into<String>,
        counterparty_state: impl Into<String>,
        place_of_supply_state: impl Into<String>,
    ) -> Result<Self> {
        let ctx = Self {
            supplier_state: supplier_state.into(),
            counterparty_state: counterparty_state.into(),
            place_of_supply_state: place_of_supply_state.into(),
        };
        ctx.validate()?;
        Ok(ctx)
    }

    /// Shorthand for the common case where the counterparty state and the
    /// place of supply coincide
    pub fn same_counterparty_and_supply(
        supplier_state: impl Into<String>,
        counterparty_state: impl Into<String>,
    ) -> Result<Self> {
        let counterparty = counterparty_state.into();
        Self::new(supplier_state, counterparty.clone(), counterparty)
    }

    /// Validate that no state name is blank
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("supplier_state", &self.supplier_state),
            ("counterparty_state", &self.counterparty_state),
            ("place_of_supply_state", &self.place_of_supply_state),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::validation(format!("{} cannot be blank", field)));
            }
        }
        Ok(())
    }

    /// Whether the transaction is intra-state for GST purposes.
    ///
    /// This is the three-way equality: supplier, counterparty AND declared
    /// place of supply must all match. A matching counterparty with a
    /// different place of supply is still inter-state.
    ///
    /// State names are free text from forms, so the comparison trims and
    /// ignores ASCII case.
    pub fn is_intra_state(&self) -> bool {
        states_equal(&self.supplier_state, &self.counterparty_state)
            && states_equal(&self.supplier_state, &self.place_of_supply_state)
    }
}

fn states_equal(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}
