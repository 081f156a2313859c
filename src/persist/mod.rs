//! Forward-compatible JSON draft records.
//!
//! The full editable state serializes to a flat record; every field carries
//! a serde default so records written by older versions — missing newer
//! fields — load with graceful defaults instead of failing. A failed load
//! returns an error value and leaves the caller's in-memory state alone.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{
    AdjustmentItem, BijakError, HomeState, InvoiceDetails, InvoiceState, LineItem, Party,
};

/// Flat, versionless record of the whole editable draft.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DraftRecord {
    #[serde(default)]
    pub invoice_number: String,
    #[serde(default)]
    pub issue_date: Option<NaiveDate>,
    #[serde(default)]
    pub place_of_supply: String,
    #[serde(default)]
    pub billed_to: Party,
    #[serde(default)]
    pub shipped_to: Party,
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(default)]
    pub pre_tax_adjustments: Vec<AdjustmentItem>,
    #[serde(default)]
    pub post_tax_adjustments: Vec<AdjustmentItem>,
    #[serde(default)]
    pub terms: String,
    #[serde(default)]
    pub home_state: HomeState,
}

impl From<&InvoiceState> for DraftRecord {
    fn from(state: &InvoiceState) -> Self {
        Self {
            invoice_number: state.details.number.clone(),
            issue_date: state.details.issue_date,
            place_of_supply: state.details.place_of_supply.clone(),
            billed_to: state.billed_to.clone(),
            shipped_to: state.shipped_to.clone(),
            items: state.items.clone(),
            pre_tax_adjustments: state.pre_tax_adjustments.clone(),
            post_tax_adjustments: state.post_tax_adjustments.clone(),
            terms: state.terms.clone(),
            home_state: state.home_state.clone(),
        }
    }
}

impl From<DraftRecord> for InvoiceState {
    fn from(record: DraftRecord) -> Self {
        Self {
            details: InvoiceDetails {
                number: record.invoice_number,
                issue_date: record.issue_date,
                place_of_supply: record.place_of_supply,
            },
            billed_to: record.billed_to,
            shipped_to: record.shipped_to,
            items: record.items,
            pre_tax_adjustments: record.pre_tax_adjustments,
            post_tax_adjustments: record.post_tax_adjustments,
            terms: record.terms,
            home_state: record.home_state,
        }
    }
}

/// Serialize the draft to a JSON record string.
pub fn save_draft(state: &InvoiceState) -> Result<String, BijakError> {
    serde_json::to_string(&DraftRecord::from(state))
        .map_err(|e| BijakError::Persistence(e.to_string()))
}

/// Load a draft from a JSON record string. Missing fields default; corrupt
/// input is an error, never a panic.
pub fn load_draft(json: &str) -> Result<InvoiceState, BijakError> {
    let record: DraftRecord =
        serde_json::from_str(json).map_err(|e| BijakError::Persistence(e.to_string()))?;
    Ok(record.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_loads_with_defaults() {
        let state = load_draft("{}").unwrap();
        assert!(state.items.is_empty());
        assert_eq!(state.details.number, "");
        assert_eq!(state.home_state, HomeState::default());
    }

    #[test]
    fn corrupt_record_is_an_error() {
        assert!(matches!(
            load_draft("not json"),
            Err(BijakError::Persistence(_))
        ));
    }
}
