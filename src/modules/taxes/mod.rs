// Taxes module

pub mod models;
pub mod services;

pub use models::{state_code_for, GstBreakup, JurisdictionContext, STATE_CODES};
pub use services::GstSplitter;
