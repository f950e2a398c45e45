mod gst_breakup;
mod jurisdiction;
mod state_code;

pub use gst_breakup::GstBreakup;
pub use jurisdiction::JurisdictionContext;
pub use state_code::{state_code_for, STATE_CODES};
