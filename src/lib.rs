//! # bijak
//!
//! Indian GST invoicing engine: editable draft state, line valuation with
//! CGST/SGST/IGST splits, pre-/post-tax adjustments with proportional tax
//! scaling, Indian numeral formatting and amount-in-words, draft
//! persistence, and print-ready text export.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//! The engine is a pure function over an immutable draft snapshot: edits go
//! through [`core::InvoiceState::apply`], and [`core::derive`] recomputes the
//! full result bag from the current snapshot.
//!
//! ## Quick Start
//!
//! ```rust
//! use bijak::core::*;
//! use rust_decimal_macros::dec;
//!
//! let home = HomeState::new("Maharashtra", "27");
//! let state = InvoiceState::new(home)
//!     .apply(Edit::Details(DetailsEdit::PlaceOfSupply("Maharashtra (27)".into())))
//!     .apply(Edit::AddItem { id: "1".into() })
//!     .apply(Edit::Item {
//!         id: "1".into(),
//!         edit: ItemEdit::Field(FieldEdit::Quantity(Some(dec!(2)))),
//!     })
//!     .apply(Edit::Item {
//!         id: "1".into(),
//!         edit: ItemEdit::Field(FieldEdit::Price(dec!(500))),
//!     })
//!     .apply(Edit::Item {
//!         id: "1".into(),
//!         edit: ItemEdit::Field(FieldEdit::CgstRate(dec!(9))),
//!     });
//!
//! let computed = derive(&state);
//! assert_eq!(computed.grand_total, dec!(1180.00));
//! assert_eq!(computed.amount_in_words, "One Thousand One Hundred Eighty Only");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Draft state, reducer, valuation, numerals, GSTIN |
//! | `persist` | Forward-compatible JSON draft records |
//! | `export` | Print-ready plain-text invoice rendering |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "persist")]
pub mod persist;

#[cfg(feature = "export")]
pub mod export;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
