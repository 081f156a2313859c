//! GST state code registry.
//!
//! Two-digit codes as allotted under the GST regime (the first two
//! characters of every GSTIN). Used for GSTIN validation and for deriving
//! a canonical place-of-supply token from a GSTIN.

/// Check whether `code` is a known 2-digit GST state code.
pub fn is_known_state_code(code: &str) -> bool {
    STATE_CODES.binary_search_by(|(c, _)| c.cmp(&code)).is_ok()
}

/// Look up the state name for a 2-digit GST state code.
pub fn state_name_for_code(code: &str) -> Option<&'static str> {
    STATE_CODES
        .binary_search_by(|(c, _)| c.cmp(&code))
        .ok()
        .map(|idx| STATE_CODES[idx].1)
}

/// The canonical "Name (Code)" place-of-supply token for a state code,
/// e.g. "27" → "Maharashtra (27)".
pub fn state_token(code: &str) -> Option<String> {
    state_name_for_code(code).map(|name| format!("{name} ({code})"))
}

/// GST state codes with state/UT names. Sorted by code for binary search.
/// Codes 25 and 28 predate the Daman & Diu merger and the Andhra Pradesh
/// bifurcation but still appear in older GSTINs.
static STATE_CODES: &[(&str, &str)] = &[
    ("01", "Jammu and Kashmir"),
    ("02", "Himachal Pradesh"),
    ("03", "Punjab"),
    ("04", "Chandigarh"),
    ("05", "Uttarakhand"),
    ("06", "Haryana"),
    ("07", "Delhi"),
    ("08", "Rajasthan"),
    ("09", "Uttar Pradesh"),
    ("10", "Bihar"),
    ("11", "Sikkim"),
    ("12", "Arunachal Pradesh"),
    ("13", "Nagaland"),
    ("14", "Manipur"),
    ("15", "Mizoram"),
    ("16", "Tripura"),
    ("17", "Meghalaya"),
    ("18", "Assam"),
    ("19", "West Bengal"),
    ("20", "Jharkhand"),
    ("21", "Odisha"),
    ("22", "Chhattisgarh"),
    ("23", "Madhya Pradesh"),
    ("24", "Gujarat"),
    ("25", "Daman and Diu"),
    ("26", "Dadra and Nagar Haveli and Daman and Diu"),
    ("27", "Maharashtra"),
    ("28", "Andhra Pradesh"),
    ("29", "Karnataka"),
    ("30", "Goa"),
    ("31", "Lakshadweep"),
    ("32", "Kerala"),
    ("33", "Tamil Nadu"),
    ("34", "Puducherry"),
    ("35", "Andaman and Nicobar Islands"),
    ("36", "Telangana"),
    ("37", "Andhra Pradesh"),
    ("38", "Ladakh"),
    ("97", "Other Territory"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes() {
        assert!(is_known_state_code("27"));
        assert!(is_known_state_code("01"));
        assert!(is_known_state_code("38"));
        assert!(is_known_state_code("97"));
    }

    #[test]
    fn unknown_codes() {
        assert!(!is_known_state_code("00"));
        assert!(!is_known_state_code("39"));
        assert!(!is_known_state_code(""));
        assert!(!is_known_state_code("7"));
    }

    #[test]
    fn tokens() {
        assert_eq!(state_token("27").as_deref(), Some("Maharashtra (27)"));
        assert_eq!(state_token("29").as_deref(), Some("Karnataka (29)"));
        assert_eq!(state_token("00"), None);
    }

    #[test]
    fn list_is_sorted() {
        for window in STATE_CODES.windows(2) {
            assert!(
                window[0].0 < window[1].0,
                "state codes not sorted: {} >= {}",
                window[0].0,
                window[1].0
            );
        }
    }
}
