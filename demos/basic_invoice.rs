//! Build a simple intra-state invoice and print the derived figures.
//!
//! Run with: `cargo run --example basic_invoice`

use bijak::core::*;
use rust_decimal_macros::dec;

fn main() {
    let state = DraftBuilder::new(HomeState::new("Maharashtra", "27"))
        .number("INV-2026-001")
        .place_of_supply("Maharashtra (27)")
        .billed_to(
            PartyBuilder::new("Acme Traders")
                .address("12 MG Road, Pune 411001")
                .gstin("27ABCDE1234F1Z5")
                .build(),
        )
        .add_item(
            LineItemBuilder::new("1", "Consulting")
                .hsn_sac("9983")
                .quantity(dec!(2))
                .unit("Nos")
                .price(dec!(500))
                .gst_total(dec!(18))
                .build(),
        )
        .add_adjustment(
            AdjustmentPhase::PreTax,
            AdjustmentBuilder::new("d1", "Discount")
                .amount(dec!(100))
                .build(),
        )
        .build()
        .expect("valid draft");

    let computed = derive(&state);

    println!("Subtotal       : {}", format_grouped(computed.subtotal, 2));
    println!("Taxable Amount : {}", format_grouped(computed.taxable_amount, 2));
    println!("CGST           : {}", format_grouped(computed.total_cgst, 2));
    println!("SGST           : {}", format_grouped(computed.total_sgst, 2));
    println!("Grand Total    : {}", format_grouped(computed.grand_total, 2));
    println!("Amount Due     : {}", computed.amount_due_display);
    println!("In words       : {}", computed.amount_in_words);
}
