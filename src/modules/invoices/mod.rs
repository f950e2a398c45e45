// Invoices module

pub mod models;
pub mod services;

pub use models::{DiscountType, InvoiceTotals, LineItemInput, LineItemResult};
pub use services::{amount_in_words, to_words, TotalsCalculator};
