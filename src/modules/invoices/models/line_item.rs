// LineItemInput / LineItemResult with per-line amount calculation
//
// A line item is one row of an invoice or purchase document. The input
// carries what the form captured (quantity, unit rate, discount, GST
// rate); the result carries the derived amounts. Results are computed fresh
// on every call and never mutated in place.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// How a line discount is expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    /// Percentage of the gross amount, 0..=100
    Percentage,
    /// Fixed currency amount
    Fixed,
}

impl std::fmt::Display for DiscountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiscountType::Percentage => write!(f, "percentage"),
            DiscountType::Fixed => write!(f, "fixed"),
        }
    }
}

impl std::str::FromStr for DiscountType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "percentage" => Ok(DiscountType::Percentage),
            "fixed" => Ok(DiscountType::Fixed),
            _ => Err(format!("Invalid discount type: {}", s)),
        }
    }
}

/// One row of an invoice/purchase document before tax computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItemInput {
    /// Opaque product reference; the caller resolves it to rate/description/
    /// HSN defaults before building the input. The engine never looks it up.
    pub product_ref: String,

    /// Description of the product or service, passed through untouched
    #[serde(default)]
    pub description: Option<String>,

    /// HSN classification code, passed through untouched
    #[serde(default)]
    pub hsn_code: Option<String>,

    /// Quantity of items (must be positive)
    pub quantity: Decimal,

    /// Price per unit (must be non-negative)
    pub unit_rate: Decimal,

    /// Discount value, interpreted per `discount_type`
    pub discount: Decimal,

    /// Whether `discount` is a percentage or a fixed amount
    pub discount_type: DiscountType,

    /// GST rate percent (e.g. 0, 5, 12, 18, 28). `None` falls back to the
    /// default rate the calculator was constructed with.
    #[serde(default)]
    pub gst_rate_percent: Option<Decimal>,
}

impl LineItemInput {
    /// Create a new line item with no discount and the calculator-default
    /// GST rate
    ///
    /// # Arguments
    /// * `product_ref` - Caller-side product reference (must not be blank)
    /// * `quantity` - Must be positive
    /// * `unit_rate` - Must be non-negative
    ///
    /// # Returns
    /// * `Result<Self>` - Validated line item or error
    pub fn new(
        product_ref: impl Into<String>,
        quantity: Decimal,
        unit_rate: Decimal,
    ) -> Result<Self> {
        let item = Self {
            product_ref: product_ref.into(),
            description: None,
            hsn_code: None,
            quantity,
            unit_rate,
            discount: Decimal::ZERO,
            discount_type: DiscountType::Fixed,
            gst_rate_percent: None,
        };
        item.validate()?;
        Ok(item)
    }

    /// Attach a discount to this line item
    pub fn with_discount(mut self, discount: Decimal, discount_type: DiscountType) -> Result<Self> {
        self.discount = discount;
        self.discount_type = discount_type;
        self.validate()?;
        Ok(self)
    }

    /// Set an explicit GST rate percent, overriding the calculator default
    pub fn with_gst_rate(mut self, gst_rate_percent: Decimal) -> Result<Self> {
        self.gst_rate_percent = Some(gst_rate_percent);
        self.validate()?;
        Ok(self)
    }

    /// Validate all fields of this line item
    ///
    /// Deserialized inputs bypass the constructor, so the calculator calls
    /// this again before computing. Out-of-range values are rejected rather
    /// than clamped or passed through to a negative taxable amount.
    pub fn validate(&self) -> Result<()> {
        Self::validate_product_ref(&self.product_ref)?;
        Self::validate_quantity(self.quantity)?;
        Self::validate_unit_rate(self.unit_rate)?;
        Self::validate_discount(self.discount, self.discount_type)?;
        if self.discount_type == DiscountType::Fixed && self.discount > self.quantity * self.unit_rate
        {
            return Err(AppError::validation(format!(
                "Fixed discount {} exceeds the gross amount {}",
                self.discount,
                self.quantity * self.unit_rate
            )));
        }
        if let Some(rate) = self.gst_rate_percent {
            validate_gst_rate(rate)?;
        }
        Ok(())
    }

    fn validate_product_ref(product_ref: &str) -> Result<()> {
        if product_ref.trim().is_empty() {
            return Err(AppError::validation("Product reference cannot be blank"));
        }
        Ok(())
    }

    fn validate_quantity(quantity: Decimal) -> Result<()> {
        if quantity <= Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Quantity must be positive, got: {}",
                quantity
            )));
        }
        Ok(())
    }

    fn validate_unit_rate(unit_rate: Decimal) -> Result<()> {
        if unit_rate < Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Unit rate must be non-negative, got: {}",
                unit_rate
            )));
        }
        Ok(())
    }

    fn validate_discount(discount: Decimal, discount_type: DiscountType) -> Result<()> {
        if discount < Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Discount must be non-negative, got: {}",
                discount
            )));
        }
        if discount_type == DiscountType::Percentage && discount > Decimal::ONE_HUNDRED {
            return Err(AppError::validation(format!(
                "Percentage discount cannot exceed 100, got: {}",
                discount
            )));
        }
        Ok(())
    }
}

/// Validate a GST rate percent (0..=100)
pub fn validate_gst_rate(gst_rate_percent: Decimal) -> Result<()> {
    if gst_rate_percent < Decimal::ZERO {
        return Err(AppError::validation(format!(
            "GST rate cannot be negative, got: {}",
            gst_rate_percent
        )));
    }
    if gst_rate_percent > Decimal::ONE_HUNDRED {
        return Err(AppError::validation(format!(
            "GST rate cannot exceed 100, got: {}",
            gst_rate_percent
        )));
    }
    Ok(())
}

/// Derived amounts for one line item
///
/// `line_total` is for line-level display only; the aggregate path re-sums
/// the taxable and GST components so rounding cannot drift between the two.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItemResult {
    pub product_ref: String,
    pub description: Option<String>,
    pub hsn_code: Option<String>,
    pub quantity: Decimal,
    pub unit_rate: Decimal,
    /// Resolved GST rate actually applied (input rate or calculator default)
    pub gst_rate_percent: Decimal,
    /// quantity × unit_rate
    pub gross_amount: Decimal,
    pub discount_amount: Decimal,
    /// gross_amount − discount_amount (the GST "taxable value")
    pub taxable_amount: Decimal,
    /// taxable_amount × gst_rate_percent / 100
    pub gst_amount: Decimal,
    /// taxable_amount + gst_amount
    pub line_total: Decimal,
}

impl LineItemResult {
    /// Compute the derived amounts for a line item
    ///
    /// Pure arithmetic: no rounding is applied here, so aggregate identities
    /// over the components hold exactly. `gst_rate_percent` must already be
    /// resolved (the calculator substitutes its default for `None`).
    pub fn compute(item: &LineItemInput, gst_rate_percent: Decimal) -> Self {
        let gross_amount = item.quantity * item.unit_rate;
        let discount_amount = match item.discount_type {
            DiscountType::Percentage => gross_amount * item.discount / Decimal::ONE_HUNDRED,
            DiscountType::Fixed => item.discount,
        };
        let taxable_amount = gross_amount - discount_amount;
        let gst_amount = taxable_amount * gst_rate_percent / Decimal::ONE_HUNDRED;
        let line_total = taxable_amount + gst_amount;

        Self {
            product_ref: item.product_ref.clone(),
            description: item.description.clone(),
            hsn_code: item.hsn_code.clone(),
            quantity: item.quantity,
            unit_rate: item.unit_rate,
            gst_rate_percent,
            gross_amount,
            discount_amount,
            taxable_amount,
            gst_amount,
            line_total,
        }
    }
}
