//! GSTIN format and check-digit validation.
//!
//! A GSTIN is 15 characters: a 2-digit state code, the 10-character PAN of
//! the registrant, an entity code, the literal 'Z', and a mod-36 check
//! character. Validation sits at the editing boundary — the computation
//! core stores whatever the user typed and never rejects it.

use thiserror::Error;

use super::states;

/// A structurally valid GSTIN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gstin(String);

impl Gstin {
    /// The embedded 2-digit state code.
    pub fn state_code(&self) -> &str {
        &self.0[..2]
    }

    /// The registrant's PAN segment.
    pub fn pan(&self) -> &str {
        &self.0[2..12]
    }

    /// The canonical "Name (Code)" place-of-supply token for the embedded
    /// state code.
    pub fn place_of_supply(&self) -> String {
        // state_code was checked against the registry during validation.
        states::state_token(self.state_code()).unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Gstin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Why a GSTIN failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum GstinError {
    #[error("GSTIN must be exactly 15 characters, got {0}")]
    Length(usize),

    #[error("GSTIN must be uppercase alphanumeric")]
    Charset,

    #[error("unknown GST state code '{0}'")]
    UnknownStateCode(String),

    #[error("PAN segment must be 5 letters, 4 digits, 1 letter")]
    PanFormat,

    #[error("14th character must be 'Z'")]
    DefaultCharacter,

    #[error("check character mismatch: expected '{expected}', got '{actual}'")]
    CheckCharacter { expected: char, actual: char },
}

/// Validate a GSTIN: length, charset, state code, PAN shape, the fixed 'Z',
/// and the mod-36 check character.
pub fn validate_gstin(input: &str) -> Result<Gstin, GstinError> {
    let value = input.trim().to_ascii_uppercase();

    if value.len() != 15 {
        return Err(GstinError::Length(value.len()));
    }
    if !value.bytes().all(|b| b.is_ascii_digit() || b.is_ascii_uppercase()) {
        return Err(GstinError::Charset);
    }

    let state_code = &value[..2];
    if !state_code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(GstinError::UnknownStateCode(state_code.to_string()));
    }
    if !states::is_known_state_code(state_code) {
        return Err(GstinError::UnknownStateCode(state_code.to_string()));
    }

    let bytes = value.as_bytes();
    let pan_ok = bytes[2..7].iter().all(u8::is_ascii_uppercase)
        && bytes[7..11].iter().all(u8::is_ascii_digit)
        && bytes[11].is_ascii_uppercase();
    if !pan_ok {
        return Err(GstinError::PanFormat);
    }

    if bytes[13] != b'Z' {
        return Err(GstinError::DefaultCharacter);
    }

    let expected = check_character(&value[..14]);
    let actual = value.as_bytes()[14] as char;
    if expected != actual {
        return Err(GstinError::CheckCharacter { expected, actual });
    }

    Ok(Gstin(value))
}

/// Compute the mod-36 check character over the first 14 characters.
///
/// Each character maps to 0–35 (0-9, A-Z); alternating factors 1 and 2 are
/// applied left to right, each product contributes its base-36 digit sum,
/// and the check value is the complement of the running sum mod 36.
pub fn check_character(prefix: &str) -> char {
    const ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

    let mut sum: u32 = 0;
    for (i, b) in prefix.bytes().enumerate() {
        let value = if b.is_ascii_digit() {
            (b - b'0') as u32
        } else {
            (b - b'A') as u32 + 10
        };
        let factor = if i % 2 == 0 { 1 } else { 2 };
        let product = value * factor;
        sum += product / 36 + product % 36;
    }
    ALPHABET[((36 - sum % 36) % 36) as usize] as char
}
