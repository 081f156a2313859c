//! Print-ready plain-text rendering.
//!
//! Lays out the letterhead, party blocks, the items/sub-items table, and
//! the totals block. Every figure printed here is taken verbatim from the
//! [`ComputedInvoice`] — nothing is re-derived.

use serde::{Deserialize, Serialize};

use crate::core::{ComputedInvoice, ComputedLine, InvoiceState, ItemFields, LineBody, format_grouped};

/// Static company letterhead fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Letterhead {
    pub company_name: String,
    pub address: String,
    pub gstin: String,
    pub phone: String,
    pub email: String,
}

const WIDTH: usize = 92;

/// Render the invoice as a print-ready plain-text document.
///
/// `computed` must come from [`crate::core::derive`] on the same `state`;
/// line figures are matched to items positionally.
pub fn render_text(
    letterhead: &Letterhead,
    state: &InvoiceState,
    computed: &ComputedInvoice,
) -> String {
    let mut out = String::new();
    let rule = "=".repeat(WIDTH);
    let thin = "-".repeat(WIDTH);

    out.push_str(&center("TAX INVOICE"));
    out.push_str(&center(&letterhead.company_name));
    if !letterhead.address.is_empty() {
        out.push_str(&center(&letterhead.address));
    }
    if !letterhead.gstin.is_empty() {
        out.push_str(&center(&format!("GSTIN: {}", letterhead.gstin)));
    }
    if !letterhead.phone.is_empty() || !letterhead.email.is_empty() {
        out.push_str(&center(&format!(
            "{}  {}",
            letterhead.phone, letterhead.email
        )));
    }
    out.push_str(&rule);
    out.push('\n');

    out.push_str(&format!("Invoice No : {}\n", state.details.number));
    let issue_date = state
        .details
        .issue_date
        .map(|d| d.format("%d-%m-%Y").to_string())
        .unwrap_or_default();
    out.push_str(&format!("Date       : {issue_date}\n"));
    out.push_str(&format!(
        "Place of Supply : {}\n",
        state.details.place_of_supply
    ));
    out.push('\n');

    out.push_str("Billed To:\n");
    push_party(&mut out, state, true);
    out.push_str("Shipped To:\n");
    push_party(&mut out, state, false);

    out.push_str(&thin);
    out.push('\n');
    let intra = computed.tax_mode.is_intra_state();
    if intra {
        out.push_str(&format!(
            "{:<4}{:<28}{:<10}{:>6}{:>12}{:>10}{:>10}{:>12}\n",
            "#", "Item", "HSN/SAC", "Qty", "Amount", "CGST", "SGST", "Total"
        ));
    } else {
        out.push_str(&format!(
            "{:<4}{:<28}{:<10}{:>6}{:>12}{:>20}{:>12}\n",
            "#", "Item", "HSN/SAC", "Qty", "Amount", "IGST", "Total"
        ));
    }
    out.push_str(&thin);
    out.push('\n');

    for (idx, (item, line)) in state.items.iter().zip(&computed.lines).enumerate() {
        match &item.body {
            LineBody::Simple(fields) => {
                push_row(
                    &mut out,
                    &format!("{}", idx + 1),
                    &item.name,
                    Some(fields),
                    line,
                    intra,
                );
            }
            LineBody::Group(subs) => {
                push_row(&mut out, &format!("{}", idx + 1), &item.name, None, line, intra);
                for (sub, sub_line) in subs.iter().zip(&line.sub_lines) {
                    push_row(
                        &mut out,
                        "",
                        &format!("  - {}", sub.name),
                        Some(&sub.fields),
                        sub_line,
                        intra,
                    );
                }
            }
        }
    }

    out.push_str(&thin);
    out.push('\n');
    push_total(&mut out, "Subtotal", &format_grouped(computed.subtotal, 2));
    for adj in &state.pre_tax_adjustments {
        push_total(
            &mut out,
            &adj.name,
            &format_grouped(adj.signed_amount(), 2),
        );
    }
    push_total(
        &mut out,
        "Taxable Amount",
        &format_grouped(computed.taxable_amount, 2),
    );
    if intra {
        push_total(
            &mut out,
            "CGST",
            &format_grouped(computed.total_cgst, 2),
        );
        push_total(
            &mut out,
            "SGST",
            &format_grouped(computed.total_sgst, 2),
        );
    } else {
        push_total(
            &mut out,
            "IGST",
            &format_grouped(computed.total_igst, 2),
        );
    }
    push_total(
        &mut out,
        "Grand Total",
        &format_grouped(computed.grand_total, 2),
    );
    for adj in &state.post_tax_adjustments {
        push_total(
            &mut out,
            &adj.name,
            &format_grouped(adj.signed_amount(), 2),
        );
    }
    push_total(&mut out, "Amount Due", &computed.amount_due_display);
    out.push('\n');
    out.push_str(&format!("Amount in words: {}\n", computed.amount_in_words));

    if !state.terms.is_empty() {
        out.push('\n');
        out.push_str("Terms & Conditions:\n");
        out.push_str(&state.terms);
        out.push('\n');
    }

    out
}

fn center(text: &str) -> String {
    format!("{text:^WIDTH$}\n")
}

fn push_party(out: &mut String, state: &InvoiceState, billed: bool) {
    let party = if billed {
        &state.billed_to
    } else {
        &state.shipped_to
    };
    out.push_str(&format!("  {}\n", party.name));
    if !party.address.is_empty() {
        out.push_str(&format!("  {}\n", party.address));
    }
    if !party.gstin.is_empty() {
        out.push_str(&format!("  GSTIN: {}\n", party.gstin));
    }
    out.push('\n');
}

fn push_row(
    out: &mut String,
    index: &str,
    name: &str,
    fields: Option<&ItemFields>,
    line: &ComputedLine,
    intra: bool,
) {
    let hsn = fields
        .and_then(|f| f.hsn_sac.as_deref())
        .unwrap_or_default();
    let qty = &line.display.quantity;
    if intra {
        out.push_str(&format!(
            "{:<4}{:<28}{:<10}{:>6}{:>12}{:>10}{:>10}{:>12}\n",
            index,
            truncate(name, 27),
            hsn,
            qty,
            line.display.amount,
            line.display.cgst_amount,
            line.display.sgst_amount,
            line.display.line_total,
        ));
    } else {
        out.push_str(&format!(
            "{:<4}{:<28}{:<10}{:>6}{:>12}{:>20}{:>12}\n",
            index,
            truncate(name, 27),
            hsn,
            qty,
            line.display.amount,
            line.display.igst_amount,
            line.display.line_total,
        ));
    }
}

fn push_total(out: &mut String, label: &str, value: &str) {
    out.push_str(&format!("{:>76}{:>16}\n", label, value));
}

fn truncate(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
