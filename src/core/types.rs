use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// The complete editable draft — one immutable snapshot of everything the
/// user can touch. Edits go through [`InvoiceState::apply`](crate::core::Edit)
/// and produce a new snapshot; derived figures are never stored here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceState {
    /// Invoice number, issue date, place of supply.
    pub details: InvoiceDetails,
    /// Party the invoice is billed to.
    pub billed_to: Party,
    /// Party the goods are shipped to.
    pub shipped_to: Party,
    /// Billable rows, in display order.
    pub items: Vec<LineItem>,
    /// Adjustments applied to the item subtotal before tax.
    pub pre_tax_adjustments: Vec<AdjustmentItem>,
    /// Adjustments applied to the grand total after tax.
    pub post_tax_adjustments: Vec<AdjustmentItem>,
    /// Free-text terms and conditions.
    pub terms: String,
    /// The seller's fixed home jurisdiction, used for tax-mode resolution.
    pub home_state: HomeState,
}

impl InvoiceState {
    /// An empty draft for a seller registered in `home_state`.
    pub fn new(home_state: HomeState) -> Self {
        Self {
            details: InvoiceDetails::default(),
            billed_to: Party::default(),
            shipped_to: Party::default(),
            items: Vec::new(),
            pre_tax_adjustments: Vec::new(),
            post_tax_adjustments: Vec::new(),
            terms: String::new(),
            home_state,
        }
    }

    /// Resolve the tax mode for the current place of supply.
    pub fn tax_mode(&self) -> TaxMode {
        TaxMode::resolve(&self.details.place_of_supply, &self.home_state)
    }
}

/// Invoice header fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvoiceDetails {
    /// Invoice number (free text; numbering discipline is the host's concern).
    pub number: String,
    /// Issue date, unset on a fresh draft.
    pub issue_date: Option<NaiveDate>,
    /// Place of supply, canonically a "State Name (Code)" token.
    pub place_of_supply: String,
}

/// Billed-to / shipped-to party.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Party {
    pub name: String,
    pub address: String,
    /// 15-character GSTIN; validated at the editing boundary, stored as-is.
    pub gstin: String,
}

/// The seller's registered state — the pivot for intra- vs inter-state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeState {
    pub name: String,
    /// 2-digit GST state code.
    pub code: String,
}

impl HomeState {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }

    /// Canonical "Name (Code)" token, e.g. "Maharashtra (27)".
    pub fn token(&self) -> String {
        format!("{} ({})", self.name, self.code)
    }
}

impl Default for HomeState {
    fn default() -> Self {
        Self::new("Maharashtra", "27")
    }
}

/// Whether the supply is taxed as CGST+SGST or as IGST.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxMode {
    /// Place of supply is the seller's home state: CGST + SGST.
    IntraState,
    /// Any other (or unresolvable) place of supply: IGST.
    InterState,
}

impl TaxMode {
    /// Intra-state iff the place of supply contains the home state's exact
    /// "Name (Code)" token. Empty or malformed input fails the containment
    /// check and resolves to inter-state — a safe default, not an error.
    pub fn resolve(place_of_supply: &str, home: &HomeState) -> Self {
        if place_of_supply.contains(&home.token()) {
            Self::IntraState
        } else {
            Self::InterState
        }
    }

    pub fn is_intra_state(&self) -> bool {
        matches!(self, Self::IntraState)
    }
}

/// One billable row. The body is tagged: a plain priced row, or a group
/// header whose figures are the sum of its sub-items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    /// Caller-generated id, opaque and stable for the session.
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub body: LineBody,
}

impl LineItem {
    /// A fresh simple row with default fields.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            description: None,
            body: LineBody::Simple(ItemFields::default()),
        }
    }
}

/// Exactly one of the two shapes applies at any time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineBody {
    /// A directly priced row.
    Simple(ItemFields),
    /// A group header; its own price/qty/rates do not exist — totals are
    /// the sum of the sub-items.
    Group(Vec<SubItem>),
}

/// The priced fields of a simple row or sub-item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemFields {
    /// HSN/SAC classification code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hsn_sac: Option<String>,
    /// Nullable quantity: `None` computes as 1 and displays blank.
    pub quantity: Option<Decimal>,
    /// Unit label ("Nos", "Kg", ...), display only.
    pub unit: String,
    /// Non-negative unit price.
    pub price: Decimal,
    pub rates: TaxRates,
}

impl Default for ItemFields {
    fn default() -> Self {
        Self {
            hsn_sac: None,
            quantity: None,
            unit: String::new(),
            price: Decimal::ZERO,
            rates: TaxRates::default(),
        }
    }
}

/// A sub-item of a group — structurally a simple row without nesting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubItem {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub fields: ItemFields,
}

impl SubItem {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            description: None,
            fields: ItemFields::default(),
        }
    }
}

/// CGST/SGST vs IGST percentage rates, kept convertible in both directions.
///
/// Invariants: under intra-state editing `cgst == sgst` (every mutation path
/// writes both); across a mode switch `igst == cgst + sgst` and
/// `cgst == sgst == igst / 2`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxRates {
    pub cgst: Decimal,
    pub sgst: Decimal,
    pub igst: Decimal,
}

impl TaxRates {
    /// Rates for a total GST percentage, consistent in both representations
    /// (e.g. 18 → CGST 9, SGST 9, IGST 18).
    pub fn of_total(total: Decimal) -> Self {
        let half = total / dec!(2);
        Self {
            cgst: half,
            sgst: half,
            igst: total,
        }
    }

    /// Migrate stored rates when the resolved tax mode flips.
    ///
    /// Inter→intra halves IGST into equal CGST/SGST; intra→inter sums them
    /// back. Inter→intra→inter reproduces the original IGST exactly;
    /// intra→inter→intra reproduces CGST/SGST exactly when they were equal,
    /// which every edit path maintains.
    pub fn migrate(&mut self, to: TaxMode) {
        match to {
            TaxMode::IntraState => {
                let half = self.igst / dec!(2);
                self.cgst = half;
                self.sgst = half;
            }
            TaxMode::InterState => {
                self.igst = self.cgst + self.sgst;
            }
        }
    }
}

/// A named pre-tax or post-tax delta. The stored amount is a non-negative
/// magnitude; the sign comes from `operation`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjustmentItem {
    pub id: String,
    /// Free text, e.g. "Discount" or "Advance Paid".
    pub name: String,
    pub amount: Decimal,
    pub operation: Operation,
}

impl AdjustmentItem {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            amount: Decimal::ZERO,
            operation: Operation::Subtract,
        }
    }

    /// The signed delta this adjustment contributes to a running total.
    pub fn signed_amount(&self) -> Decimal {
        match self.operation {
            Operation::Add => self.amount,
            Operation::Subtract => -self.amount,
        }
    }
}

/// Whether an adjustment's amount is added or subtracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Add,
    Subtract,
}

/// Which running total an adjustment applies to. Pre-tax adjustments move
/// the taxable base (and therefore scale tax); post-tax adjustments only
/// move the amount due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentPhase {
    PreTax,
    PostTax,
}
