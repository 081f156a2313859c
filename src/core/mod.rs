//! Core draft state, reducer, valuation, numerals, and GSTIN handling.
//!
//! The engine is deliberately pure: [`InvoiceState`] is an immutable
//! snapshot, [`InvoiceState::apply`] produces the next snapshot, and
//! [`derive`] computes the complete result bag from any snapshot.

mod builder;
mod compute;
mod edit;
mod error;
pub mod gstin;
mod numerals;
pub mod states;
mod types;

pub use builder::*;
pub use compute::*;
pub use edit::*;
pub use error::*;
pub use gstin::{Gstin, GstinError, validate_gstin};
pub use numerals::{amount_in_words, format_grouped};
pub use states::state_token;
pub use types::*;
