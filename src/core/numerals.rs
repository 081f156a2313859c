//! Indian numeral formatting: 2-3-3 digit grouping and amount-in-words.

use rust_decimal::{Decimal, RoundingStrategy};

/// Format a number with Indian digit grouping and a fixed number of decimal
/// places. The integer part groups the last three digits together, then all
/// preceding digits in twos ("12,34,567"); `decimals == 0` produces no
/// decimal point at all. Rounding is half-up.
pub fn format_grouped(value: Decimal, decimals: u32) -> String {
    let rounded = value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    // Normalize the mantissa to exactly `decimals` fractional digits.
    let mut mantissa = rounded.mantissa().unsigned_abs();
    let mut scale = rounded.scale();
    while scale < decimals {
        mantissa *= 10;
        scale += 1;
    }

    let divisor = 10u128.pow(decimals);
    let int_part = mantissa / divisor;
    let frac_part = mantissa % divisor;

    let grouped = group_indian(&int_part.to_string());
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if decimals > 0 {
        out.push('.');
        out.push_str(&format!("{frac_part:0width$}", width = decimals as usize));
    }
    out
}

/// Insert commas per the Indian convention: last group of three, then
/// groups of two.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let bytes = head.as_bytes();
    let mut end = bytes.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

const ONES: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

const SCALES: [&str; 4] = ["", "Thousand", "Lakh", "Crore"];

/// Convert a non-negative integer to English words on the Indian scale
/// (Thousand, Lakh, Crore). Zero maps to "Zero Only"; every other result is
/// suffixed with " Only".
///
/// Magnitudes beyond Crore (10^9 and up) are silently dropped — there is no
/// scale word above Crore. Ordinary invoice amounts never reach this
/// ceiling.
pub fn amount_in_words(n: u64) -> String {
    if n == 0 {
        return "Zero Only".to_string();
    }

    // Indian grouping: the ones-chunk is three digits, every higher chunk
    // is two.
    let chunks = [
        n % 1000,
        (n / 1_000) % 100,
        (n / 100_000) % 100,
        (n / 10_000_000) % 100,
    ];

    let mut parts: Vec<String> = Vec::new();
    for idx in (0..chunks.len()).rev() {
        if chunks[idx] == 0 {
            continue;
        }
        let words = below_thousand(chunks[idx] as usize);
        if SCALES[idx].is_empty() {
            parts.push(words);
        } else {
            parts.push(format!("{} {}", words, SCALES[idx]));
        }
    }

    if parts.is_empty() {
        // Everything above the Crore chunk was dropped and nothing remains.
        return "Zero Only".to_string();
    }
    format!("{} Only", parts.join(" "))
}

fn below_thousand(n: usize) -> String {
    if n >= 100 {
        let rest = n % 100;
        if rest == 0 {
            format!("{} Hundred", ONES[n / 100])
        } else {
            format!("{} Hundred {}", ONES[n / 100], below_thousand(rest))
        }
    } else if n >= 20 {
        let rest = n % 10;
        if rest == 0 {
            TENS[n / 10].to_string()
        } else {
            format!("{} {}", TENS[n / 10], ONES[rest])
        }
    } else {
        ONES[n].to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn grouping_examples() {
        assert_eq!(format_grouped(dec!(1234567), 0), "12,34,567");
        assert_eq!(format_grouped(dec!(999), 0), "999");
        assert_eq!(format_grouped(dec!(1000), 2), "1,000.00");
        assert_eq!(format_grouped(dec!(123456789), 0), "12,34,56,789");
        assert_eq!(format_grouped(dec!(0), 2), "0.00");
    }

    #[test]
    fn grouping_rounds_half_up() {
        assert_eq!(format_grouped(dec!(2.345), 2), "2.35");
        assert_eq!(format_grouped(dec!(2.5), 0), "3");
    }

    #[test]
    fn grouping_handles_negatives() {
        assert_eq!(format_grouped(dec!(-1234567.5), 2), "-12,34,567.50");
    }

    #[test]
    fn words_fixed_points() {
        assert_eq!(amount_in_words(0), "Zero Only");
        assert_eq!(amount_in_words(100), "One Hundred Only");
        assert_eq!(amount_in_words(1500), "One Thousand Five Hundred Only");
        assert_eq!(amount_in_words(100_000), "One Lakh Only");
        assert_eq!(
            amount_in_words(1_234_567),
            "Twelve Lakh Thirty Four Thousand Five Hundred Sixty Seven Only"
        );
    }

    #[test]
    fn words_teens_and_tens() {
        assert_eq!(amount_in_words(19), "Nineteen Only");
        assert_eq!(amount_in_words(20), "Twenty Only");
        assert_eq!(amount_in_words(21), "Twenty One Only");
        assert_eq!(amount_in_words(805), "Eight Hundred Five Only");
    }

    #[test]
    fn words_crore_scale() {
        assert_eq!(amount_in_words(10_000_000), "One Crore Only");
        assert_eq!(
            amount_in_words(99_99_99_999),
            "Ninety Nine Crore Ninety Nine Lakh Ninety Nine Thousand Nine Hundred Ninety Nine Only"
        );
    }

    #[test]
    fn words_drop_beyond_crore() {
        // 1 Arab: the chunk above Crore has no scale word and is dropped.
        assert_eq!(amount_in_words(1_000_000_000), "Zero Only");
        assert_eq!(amount_in_words(1_000_000_001), "One Only");
    }
}
