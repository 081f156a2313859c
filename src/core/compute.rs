use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::numerals::{amount_in_words, format_grouped};
use super::types::*;

/// The complete derived result bag for one draft snapshot.
///
/// Every figure is a pure function of {items, adjustments, tax mode}; the
/// rendering and export surfaces consume these values verbatim and never
/// re-derive anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputedInvoice {
    pub tax_mode: TaxMode,
    pub lines: Vec<ComputedLine>,
    /// Raw sum of item amounts, before any adjustment.
    pub subtotal: Decimal,
    /// Subtotal after pre-tax adjustments.
    pub taxable_amount: Decimal,
    /// Aggregate CGST, scaled to the adjusted base.
    pub total_cgst: Decimal,
    pub total_sgst: Decimal,
    pub total_igst: Decimal,
    /// CGST+SGST under intra-state, IGST under inter-state.
    pub total_tax: Decimal,
    pub grand_total: Decimal,
    /// Grand total after post-tax adjustments.
    pub amount_due: Decimal,
    /// Amount due rounded half-up to a whole rupee.
    pub amount_due_rounded: i64,
    /// Amount due, grouped-digit formatted to two places.
    pub amount_due_display: String,
    /// The rounded amount due in Indian-scale English words.
    pub amount_in_words: String,
}

/// Per-line figures, with sub-lines when the item is a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputedLine {
    pub id: String,
    /// effective qty × price (or the sum over sub-items).
    pub amount: Decimal,
    pub cgst_amount: Decimal,
    pub sgst_amount: Decimal,
    pub igst_amount: Decimal,
    pub line_total: Decimal,
    pub display: LineDisplay,
    /// Non-empty iff the item is a group; the parent figures above are
    /// exactly the sums over these.
    pub sub_lines: Vec<ComputedLine>,
}

/// Display strings for one line, formatted to two decimal places with
/// Indian digit grouping. A null quantity renders blank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineDisplay {
    pub quantity: String,
    pub amount: String,
    pub cgst_amount: String,
    pub sgst_amount: String,
    pub igst_amount: String,
    pub line_total: String,
}

/// Derive the full result bag from a draft snapshot.
///
/// This is the only computation entry point; the host calls it after each
/// state update. It is total and synchronous — no caching, no partial
/// state, no hidden triggers.
pub fn derive(state: &InvoiceState) -> ComputedInvoice {
    let mode = state.tax_mode();

    let lines: Vec<ComputedLine> = state.items.iter().map(|i| compute_line(i, mode)).collect();

    let subtotal: Decimal = lines.iter().map(|l| l.amount).sum();
    let raw_cgst: Decimal = lines.iter().map(|l| l.cgst_amount).sum();
    let raw_sgst: Decimal = lines.iter().map(|l| l.sgst_amount).sum();
    let raw_igst: Decimal = lines.iter().map(|l| l.igst_amount).sum();

    let pre_tax_delta: Decimal = state
        .pre_tax_adjustments
        .iter()
        .map(AdjustmentItem::signed_amount)
        .sum();
    let taxable_amount = subtotal + pre_tax_delta;

    // Tax is assumed uniformly proportional to the item subtotal, so the
    // aggregate amounts are rescaled by adjusted/raw rather than re-derived
    // per item. Exact only when every line shares one effective rate.
    let scaling_factor = if subtotal.is_zero() {
        Decimal::ONE
    } else {
        taxable_amount / subtotal
    };
    let total_cgst = raw_cgst * scaling_factor;
    let total_sgst = raw_sgst * scaling_factor;
    let total_igst = raw_igst * scaling_factor;

    let total_tax = if mode.is_intra_state() {
        total_cgst + total_sgst
    } else {
        total_igst
    };
    let grand_total = taxable_amount + total_tax;

    let post_tax_delta: Decimal = state
        .post_tax_adjustments
        .iter()
        .map(AdjustmentItem::signed_amount)
        .sum();
    let amount_due = grand_total + post_tax_delta;

    let amount_due_rounded = amount_due
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(0);

    ComputedInvoice {
        tax_mode: mode,
        lines,
        subtotal,
        taxable_amount,
        total_cgst,
        total_sgst,
        total_igst,
        total_tax,
        grand_total,
        amount_due,
        amount_due_rounded,
        amount_due_display: format_grouped(amount_due, 2),
        amount_in_words: amount_in_words(amount_due_rounded.unsigned_abs()),
    }
}

fn compute_line(item: &LineItem, mode: TaxMode) -> ComputedLine {
    match &item.body {
        LineBody::Simple(fields) => compute_fields(&item.id, fields, mode),
        LineBody::Group(subs) => {
            let sub_lines: Vec<ComputedLine> = subs
                .iter()
                .map(|s| compute_fields(&s.id, &s.fields, mode))
                .collect();
            let amount: Decimal = sub_lines.iter().map(|l| l.amount).sum();
            let cgst_amount: Decimal = sub_lines.iter().map(|l| l.cgst_amount).sum();
            let sgst_amount: Decimal = sub_lines.iter().map(|l| l.sgst_amount).sum();
            let igst_amount: Decimal = sub_lines.iter().map(|l| l.igst_amount).sum();
            let line_total: Decimal = sub_lines.iter().map(|l| l.line_total).sum();
            ComputedLine {
                id: item.id.clone(),
                amount,
                cgst_amount,
                sgst_amount,
                igst_amount,
                line_total,
                display: display_for(None, amount, cgst_amount, sgst_amount, igst_amount, line_total),
                sub_lines,
            }
        }
    }
}

fn compute_fields(id: &str, fields: &ItemFields, mode: TaxMode) -> ComputedLine {
    let effective_qty = fields.quantity.unwrap_or(Decimal::ONE);
    let amount = effective_qty * fields.price;

    let (cgst_amount, sgst_amount, igst_amount) = if mode.is_intra_state() {
        (
            amount * fields.rates.cgst / dec!(100),
            amount * fields.rates.sgst / dec!(100),
            Decimal::ZERO,
        )
    } else {
        (
            Decimal::ZERO,
            Decimal::ZERO,
            amount * fields.rates.igst / dec!(100),
        )
    };
    let line_total = amount + cgst_amount + sgst_amount + igst_amount;

    ComputedLine {
        id: id.to_string(),
        amount,
        cgst_amount,
        sgst_amount,
        igst_amount,
        line_total,
        display: display_for(
            fields.quantity,
            amount,
            cgst_amount,
            sgst_amount,
            igst_amount,
            line_total,
        ),
        sub_lines: Vec::new(),
    }
}

fn display_for(
    quantity: Option<Decimal>,
    amount: Decimal,
    cgst: Decimal,
    sgst: Decimal,
    igst: Decimal,
    total: Decimal,
) -> LineDisplay {
    LineDisplay {
        quantity: quantity.map(|q| q.normalize().to_string()).unwrap_or_default(),
        amount: format_grouped(amount, 2),
        cgst_amount: format_grouped(cgst, 2),
        sgst_amount: format_grouped(sgst, 2),
        igst_amount: format_grouped(igst, 2),
        line_total: format_grouped(total, 2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DetailsEdit, Edit, FieldEdit, ItemEdit};

    fn intra_state() -> InvoiceState {
        InvoiceState::new(HomeState::new("Maharashtra", "27")).apply(Edit::Details(
            DetailsEdit::PlaceOfSupply("Maharashtra (27)".into()),
        ))
    }

    #[test]
    fn null_quantity_computes_as_one() {
        let state = intra_state()
            .apply(Edit::AddItem { id: "1".into() })
            .apply(Edit::Item {
                id: "1".into(),
                edit: ItemEdit::Field(FieldEdit::Price(dec!(250))),
            });
        let computed = derive(&state);
        assert_eq!(computed.lines[0].amount, dec!(250));
        assert_eq!(computed.lines[0].display.quantity, "");
    }

    #[test]
    fn empty_invoice_has_unit_scaling_factor() {
        let computed = derive(&intra_state());
        assert_eq!(computed.subtotal, Decimal::ZERO);
        assert_eq!(computed.total_tax, Decimal::ZERO);
        assert_eq!(computed.amount_due, Decimal::ZERO);
        assert_eq!(computed.amount_in_words, "Zero Only");
    }

    #[test]
    fn group_total_equals_sum_of_sub_lines() {
        let state = intra_state()
            .apply(Edit::AddItem { id: "g".into() })
            .apply(Edit::Item {
                id: "g".into(),
                edit: ItemEdit::AddSubItem { id: "g1".into() },
            })
            .apply(Edit::Item {
                id: "g".into(),
                edit: ItemEdit::SubItem {
                    id: "g1".into(),
                    edit: crate::core::SubItemEdit::Field(FieldEdit::Price(dec!(100))),
                },
            })
            .apply(Edit::Item {
                id: "g".into(),
                edit: ItemEdit::AddSubItem { id: "g2".into() },
            })
            .apply(Edit::Item {
                id: "g".into(),
                edit: ItemEdit::SubItem {
                    id: "g2".into(),
                    edit: crate::core::SubItemEdit::Field(FieldEdit::Price(dec!(40))),
                },
            });
        let computed = derive(&state);
        let group = &computed.lines[0];
        assert_eq!(group.sub_lines.len(), 2);
        assert_eq!(
            group.line_total,
            group.sub_lines.iter().map(|l| l.line_total).sum::<Decimal>()
        );
        assert_eq!(computed.subtotal, dec!(140));
    }
}
