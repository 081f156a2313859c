//! Build a grouped-item inter-state invoice and render the print layout.
//!
//! Run with: `cargo run --example grouped_invoice --features export`

use bijak::core::*;
use bijak::export::{Letterhead, render_text};
use rust_decimal_macros::dec;

fn main() {
    let state = DraftBuilder::new(HomeState::new("Maharashtra", "27"))
        .number("INV-2026-002")
        .place_of_supply("Karnataka (29)")
        .billed_to(
            PartyBuilder::new("Southern Mills Pvt Ltd")
                .address("4 Residency Road, Bengaluru 560025")
                .build(),
        )
        .add_item(
            LineItemBuilder::new("1", "AMC Package")
                .add_sub_item(
                    SubItemBuilder::new("1a", "Hardware")
                        .hsn_sac("8471")
                        .quantity(dec!(3))
                        .unit("Nos")
                        .price(dec!(1200))
                        .gst_total(dec!(18))
                        .build(),
                )
                .add_sub_item(
                    SubItemBuilder::new("1b", "Installation")
                        .hsn_sac("9987")
                        .price(dec!(2500))
                        .gst_total(dec!(18))
                        .build(),
                )
                .build(),
        )
        .add_adjustment(
            AdjustmentPhase::PostTax,
            AdjustmentBuilder::new("adv", "Advance Paid")
                .amount(dec!(1000))
                .build(),
        )
        .terms("Goods once sold will not be taken back.")
        .build()
        .expect("valid draft");

    let computed = derive(&state);

    let letterhead = Letterhead {
        company_name: "Deccan Engineering Works".into(),
        address: "Plot 7, MIDC Bhosari, Pune 411026".into(),
        gstin: "27ABCDE1234F1Z5".into(),
        phone: "+91 20 2712 0000".into(),
        email: "billing@deccanengg.example".into(),
    };

    print!("{}", render_text(&letterhead, &state, &computed));
}
