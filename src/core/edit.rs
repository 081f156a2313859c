use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::*;

/// One field-level edit to the draft. Ids for newly created rows are
/// caller-generated — the engine never invents identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Edit {
    Details(DetailsEdit),
    BilledTo(PartyEdit),
    ShippedTo(PartyEdit),
    AddItem { id: String },
    RemoveItem { id: String },
    Item { id: String, edit: ItemEdit },
    AddAdjustment { phase: AdjustmentPhase, id: String },
    RemoveAdjustment { phase: AdjustmentPhase, id: String },
    Adjustment {
        phase: AdjustmentPhase,
        id: String,
        edit: AdjustmentEdit,
    },
    SetTerms(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DetailsEdit {
    Number(String),
    IssueDate(Option<NaiveDate>),
    PlaceOfSupply(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PartyEdit {
    Name(String),
    Address(String),
    Gstin(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ItemEdit {
    Name(String),
    Description(Option<String>),
    /// Edits the priced fields of a simple row; ignored on a group header.
    Field(FieldEdit),
    /// Converts a simple row into a group with one fresh sub-item.
    AddSubItem { id: String },
    RemoveSubItem { id: String },
    SubItem { id: String, edit: SubItemEdit },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SubItemEdit {
    Name(String),
    Description(Option<String>),
    Field(FieldEdit),
}

/// Edits to the priced fields. Rate edits keep CGST and SGST in lockstep:
/// writing either writes both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum FieldEdit {
    HsnSac(Option<String>),
    Quantity(Option<Decimal>),
    Unit(String),
    Price(Decimal),
    CgstRate(Decimal),
    SgstRate(Decimal),
    IgstRate(Decimal),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AdjustmentEdit {
    Name(String),
    Amount(Decimal),
    Operation(Operation),
}

impl InvoiceState {
    /// Apply one edit and return the next snapshot.
    ///
    /// If the edit flips the resolved tax mode, rate migration runs once
    /// over every item and sub-item before the snapshot is returned, so the
    /// next valuation pass sees converted rates.
    pub fn apply(&self, edit: Edit) -> InvoiceState {
        let mode_before = self.tax_mode();
        let mut next = self.clone();

        match edit {
            Edit::Details(e) => apply_details(&mut next.details, e),
            Edit::BilledTo(e) => apply_party(&mut next.billed_to, e),
            Edit::ShippedTo(e) => apply_party(&mut next.shipped_to, e),
            Edit::AddItem { id } => next.items.push(LineItem::new(id)),
            Edit::RemoveItem { id } => next.items.retain(|i| i.id != id),
            Edit::Item { id, edit } => {
                if let Some(item) = next.items.iter_mut().find(|i| i.id == id) {
                    apply_item(item, edit);
                }
            }
            Edit::AddAdjustment { phase, id } => {
                adjustments_mut(&mut next, phase).push(AdjustmentItem::new(id));
            }
            Edit::RemoveAdjustment { phase, id } => {
                adjustments_mut(&mut next, phase).retain(|a| a.id != id);
            }
            Edit::Adjustment { phase, id, edit } => {
                if let Some(adj) = adjustments_mut(&mut next, phase)
                    .iter_mut()
                    .find(|a| a.id == id)
                {
                    apply_adjustment(adj, edit);
                }
            }
            Edit::SetTerms(terms) => next.terms = terms,
        }

        let mode_after = next.tax_mode();
        if mode_after != mode_before {
            migrate_rates(&mut next, mode_after);
        }
        next
    }
}

fn apply_details(details: &mut InvoiceDetails, edit: DetailsEdit) {
    match edit {
        DetailsEdit::Number(n) => details.number = n,
        DetailsEdit::IssueDate(d) => details.issue_date = d,
        DetailsEdit::PlaceOfSupply(p) => details.place_of_supply = p,
    }
}

fn apply_party(party: &mut Party, edit: PartyEdit) {
    match edit {
        PartyEdit::Name(n) => party.name = n,
        PartyEdit::Address(a) => party.address = a,
        PartyEdit::Gstin(g) => party.gstin = g,
    }
}

fn apply_item(item: &mut LineItem, edit: ItemEdit) {
    match edit {
        ItemEdit::Name(n) => item.name = n,
        ItemEdit::Description(d) => item.description = d,
        ItemEdit::Field(edit) => {
            if let LineBody::Simple(fields) = &mut item.body {
                apply_field(fields, edit);
            }
        }
        ItemEdit::AddSubItem { id } => match &mut item.body {
            LineBody::Group(subs) => subs.push(SubItem::new(id)),
            LineBody::Simple(_) => item.body = LineBody::Group(vec![SubItem::new(id)]),
        },
        ItemEdit::RemoveSubItem { id } => {
            if let LineBody::Group(subs) = &mut item.body {
                subs.retain(|s| s.id != id);
                // A group with zero sub-items is not a group.
                if subs.is_empty() {
                    item.body = LineBody::Simple(ItemFields::default());
                }
            }
        }
        ItemEdit::SubItem { id, edit } => {
            if let LineBody::Group(subs) = &mut item.body {
                if let Some(sub) = subs.iter_mut().find(|s| s.id == id) {
                    match edit {
                        SubItemEdit::Name(n) => sub.name = n,
                        SubItemEdit::Description(d) => sub.description = d,
                        SubItemEdit::Field(edit) => apply_field(&mut sub.fields, edit),
                    }
                }
            }
        }
    }
}

fn apply_field(fields: &mut ItemFields, edit: FieldEdit) {
    match edit {
        FieldEdit::HsnSac(h) => fields.hsn_sac = h,
        FieldEdit::Quantity(q) => fields.quantity = q,
        FieldEdit::Unit(u) => fields.unit = u,
        FieldEdit::Price(p) => fields.price = p,
        FieldEdit::CgstRate(r) | FieldEdit::SgstRate(r) => {
            fields.rates.cgst = r;
            fields.rates.sgst = r;
        }
        FieldEdit::IgstRate(r) => fields.rates.igst = r,
    }
}

fn apply_adjustment(adj: &mut AdjustmentItem, edit: AdjustmentEdit) {
    match edit {
        AdjustmentEdit::Name(n) => adj.name = n,
        AdjustmentEdit::Amount(a) => adj.amount = a,
        AdjustmentEdit::Operation(op) => adj.operation = op,
    }
}

fn adjustments_mut(state: &mut InvoiceState, phase: AdjustmentPhase) -> &mut Vec<AdjustmentItem> {
    match phase {
        AdjustmentPhase::PreTax => &mut state.pre_tax_adjustments,
        AdjustmentPhase::PostTax => &mut state.post_tax_adjustments,
    }
}

/// Convert stored rates on every item and sub-item for the new mode.
fn migrate_rates(state: &mut InvoiceState, to: TaxMode) {
    for item in &mut state.items {
        match &mut item.body {
            LineBody::Simple(fields) => fields.rates.migrate(to),
            LineBody::Group(subs) => {
                for sub in subs {
                    sub.fields.rates.migrate(to);
                }
            }
        }
    }
}
