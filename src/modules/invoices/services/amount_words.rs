// Number-to-words conversion in the Indian numbering system
//
// Grouping runs ones/teens/tens, Hundred, Thousand, Lakh (10^5) and Crore
// (10^7) — not the international Million/Billion bands. "and" joins a
// Hundred group to its sub-hundred remainder only, matching how invoice
// amounts are conventionally written out.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::core::{AppError, Result};

const ONES: [&str; 20] = [
    "Zero",
    "One",
    "Two",
    "Three",
    "Four",
    "Five",
    "Six",
    "Seven",
    "Eight",
    "Nine",
    "Ten",
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];

const TENS: [&str; 10] = [
    "", "Ten", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Convert a non-negative integer to Indian-system English words.
///
/// `to_words(0)` is `"Zero"`; no currency suffix is included.
pub fn to_words(n: u64) -> String {
    match n {
        0..=19 => ONES[n as usize].to_string(),
        20..=99 => {
            let tens = TENS[(n / 10) as usize];
            match n % 10 {
                0 => tens.to_string(),
                rem => format!("{} {}", tens, ONES[rem as usize]),
            }
        }
        100..=999 => magnitude_group(n, 100, "Hundred"),
        1_000..=99_999 => magnitude_group(n, 1_000, "Thousand"),
        100_000..=9_999_999 => magnitude_group(n, 100_000, "Lakh"),
        _ => magnitude_group(n, 10_000_000, "Crore"),
    }
}

fn magnitude_group(n: u64, unit: u64, unit_name: &str) -> String {
    let head = to_words(n / unit);
    match n % unit {
        0 => format!("{} {}", head, unit_name),
        // Only the Hundred band takes the "and" joiner
        rem if unit == 100 => format!("{} {} and {}", head, unit_name, to_words(rem)),
        rem => format!("{} {} {}", head, unit_name, to_words(rem)),
    }
}

/// Render a rupee amount as words, e.g. "One Thousand Sixty Two Rupees Only".
///
/// Fractional paise are dropped; the amount must be non-negative and fit an
/// integer rupee count.
pub fn amount_in_words(amount: Decimal) -> Result<String> {
    if amount < Decimal::ZERO {
        return Err(AppError::calculation(format!(
            "Cannot render negative amount in words: {}",
            amount
        )));
    }
    let rupees = amount.trunc().to_u64().ok_or_else(|| {
        AppError::calculation(format!("Amount too large to render in words: {}", amount))
    })?;
    Ok(format!("{} Rupees Only", to_words(rupees)))
}
