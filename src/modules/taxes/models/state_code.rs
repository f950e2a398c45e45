// Indian state / union territory → two-digit GST state-code registry
//
// Static reference data (36 entries). Callers use it to resolve the
// place-of-supply state code on documents; the split computation itself
// compares state names and never consults this table.

use crate::core::{AppError, Result};

/// State/UT name with its two-digit GST state code
pub static STATE_CODES: &[(&str, &str)] = &[
    ("Jammu and Kashmir", "01"),
    ("Himachal Pradesh", "02"),
    ("Punjab", "03"),
    ("Chandigarh", "04"),
    ("Uttarakhand", "05"),
    ("Haryana", "06"),
    ("Delhi", "07"),
    ("Rajasthan", "08"),
    ("Uttar Pradesh", "09"),
    ("Bihar", "10"),
    ("Sikkim", "11"),
    ("Arunachal Pradesh", "12"),
    ("Nagaland", "13"),
    ("Manipur", "14"),
    ("Mizoram", "15"),
    ("Tripura", "16"),
    ("Meghalaya", "17"),
    ("Assam", "18"),
    ("West Bengal", "19"),
    ("Jharkhand", "20"),
    ("Odisha", "21"),
    ("Chhattisgarh", "22"),
    ("Madhya Pradesh", "23"),
    ("Gujarat", "24"),
    ("Dadra and Nagar Haveli and Daman and Diu", "26"),
    ("Maharashtra", "27"),
    ("Karnataka", "29"),
    ("Goa", "30"),
    ("Lakshadweep", "31"),
    ("Kerala", "32"),
    ("Tamil Nadu", "33"),
    ("Puducherry", "34"),
    ("Andaman and Nicobar Islands", "35"),
    ("Telangana", "36"),
    ("Andhra Pradesh", "37"),
    ("Ladakh", "38"),
];

/// Resolve a state/UT name to its two-digit GST state code.
///
/// Names arrive as free text from forms, so matching trims and ignores
/// ASCII case.
pub fn state_code_for(state_name: &str) -> Result<&'static str> {
    let wanted = state_name.trim();
    STATE_CODES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(wanted))
        .map(|(_, code)| *code)
        .ok_or_else(|| AppError::unknown_state(state_name))
}
