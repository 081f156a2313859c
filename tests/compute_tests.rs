use bijak::core::*;
use rust_decimal_macros::dec;

fn home() -> HomeState {
    HomeState::new("Maharashtra", "27")
}

fn intra_draft() -> InvoiceState {
    DraftBuilder::new(home())
        .number("INV-2026-001")
        .place_of_supply("Maharashtra (27)")
        .billed_to(
            PartyBuilder::new("Acme Traders")
                .address("12 MG Road, Pune")
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
        .build()
        .unwrap()
}

// --- Valuation ---

#[test]
fn intra_state_single_item() {
    let computed = derive(&intra_draft());

    assert_eq!(computed.tax_mode, TaxMode::IntraState);
    let line = &computed.lines[0];
    assert_eq!(line.amount, dec!(1000));
    assert_eq!(line.cgst_amount, dec!(90));
    assert_eq!(line.sgst_amount, dec!(90));
    assert_eq!(line.igst_amount, dec!(0));
    assert_eq!(line.line_total, dec!(1180));

    assert_eq!(computed.subtotal, dec!(1000));
    assert_eq!(computed.taxable_amount, dec!(1000));
    assert_eq!(computed.total_tax, dec!(180));
    assert_eq!(computed.grand_total, dec!(1180));
    assert_eq!(computed.amount_due, dec!(1180));
    assert_eq!(computed.amount_due_rounded, 1180);
    assert_eq!(computed.amount_due_display, "1,180.00");
    assert_eq!(
        computed.amount_in_words,
        "One Thousand One Hundred Eighty Only"
    );
}

#[test]
fn pre_tax_discount_scales_tax() {
    let state = intra_draft().apply(Edit::AddAdjustment {
        phase: AdjustmentPhase::PreTax,
        id: "d1".into(),
    });
    let state = state
        .apply(Edit::Adjustment {
            phase: AdjustmentPhase::PreTax,
            id: "d1".into(),
            edit: AdjustmentEdit::Name("Discount".into()),
        })
        .apply(Edit::Adjustment {
            phase: AdjustmentPhase::PreTax,
            id: "d1".into(),
            edit: AdjustmentEdit::Amount(dec!(100)),
        });

    let computed = derive(&state);
    assert_eq!(computed.taxable_amount, dec!(900));
    assert_eq!(computed.total_cgst, dec!(81));
    assert_eq!(computed.total_sgst, dec!(81));
    assert_eq!(computed.total_tax, dec!(162));
    assert_eq!(computed.grand_total, dec!(1062));
}

#[test]
fn post_tax_adjustment_never_touches_tax() {
    let state = intra_draft()
        .apply(Edit::AddAdjustment {
            phase: AdjustmentPhase::PostTax,
            id: "adv".into(),
        })
        .apply(Edit::Adjustment {
            phase: AdjustmentPhase::PostTax,
            id: "adv".into(),
            edit: AdjustmentEdit::Amount(dec!(500)),
        });

    let computed = derive(&state);
    assert_eq!(computed.total_tax, dec!(180));
    assert_eq!(computed.grand_total, dec!(1180));
    assert_eq!(computed.amount_due, dec!(680));
}

#[test]
fn switching_to_inter_state_recomputes_with_igst() {
    let state = intra_draft().apply(Edit::Details(DetailsEdit::PlaceOfSupply(
        "Karnataka (29)".into(),
    )));

    let computed = derive(&state);
    assert_eq!(computed.tax_mode, TaxMode::InterState);
    let line = &computed.lines[0];
    // igst = cgst + sgst = 18 after migration
    assert_eq!(line.igst_amount, dec!(180));
    assert_eq!(line.cgst_amount, dec!(0));
    assert_eq!(line.sgst_amount, dec!(0));
    assert_eq!(computed.total_tax, dec!(180));
    assert_eq!(computed.grand_total, dec!(1180));
}

#[test]
fn arithmetic_identities_hold_exactly() {
    let state = intra_draft()
        .apply(Edit::AddAdjustment {
            phase: AdjustmentPhase::PreTax,
            id: "p".into(),
        })
        .apply(Edit::Adjustment {
            phase: AdjustmentPhase::PreTax,
            id: "p".into(),
            edit: AdjustmentEdit::Amount(dec!(37.50)),
        })
        .apply(Edit::AddAdjustment {
            phase: AdjustmentPhase::PostTax,
            id: "q".into(),
        })
        .apply(Edit::Adjustment {
            phase: AdjustmentPhase::PostTax,
            id: "q".into(),
            edit: AdjustmentEdit::Operation(Operation::Add),
        })
        .apply(Edit::Adjustment {
            phase: AdjustmentPhase::PostTax,
            id: "q".into(),
            edit: AdjustmentEdit::Amount(dec!(12.25)),
        });

    let computed = derive(&state);
    assert_eq!(
        computed.grand_total,
        computed.taxable_amount + computed.total_tax
    );
    assert_eq!(computed.amount_due, computed.grand_total + dec!(12.25));
}

#[test]
fn recomputation_is_idempotent() {
    let state = intra_draft();
    assert_eq!(derive(&state), derive(&state));
}

// --- Groups ---

#[test]
fn grouped_item_sums_sub_items() {
    let state = DraftBuilder::new(home())
        .place_of_supply("Maharashtra (27)")
        .add_item(
            LineItemBuilder::new("1", "AMC Package")
                .add_sub_item(
                    SubItemBuilder::new("1a", "Hardware")
                        .quantity(dec!(3))
                        .price(dec!(200))
                        .gst_total(dec!(18))
                        .build(),
                )
                .add_sub_item(
                    SubItemBuilder::new("1b", "Labour")
                        .price(dec!(400))
                        .gst_total(dec!(18))
                        .build(),
                )
                .build(),
        )
        .build()
        .unwrap();

    let computed = derive(&state);
    let group = &computed.lines[0];
    // 3×200 + 1×400 (null qty computes as 1)
    assert_eq!(group.amount, dec!(1000));
    assert_eq!(group.cgst_amount, dec!(90));
    assert_eq!(group.line_total, dec!(1180));
    assert_eq!(group.sub_lines[1].amount, dec!(400));
    assert_eq!(computed.subtotal, dec!(1000));
}

#[test]
fn mixed_simple_and_grouped_items() {
    let state = DraftBuilder::new(home())
        .place_of_supply("Maharashtra (27)")
        .add_item(
            LineItemBuilder::new("1", "Widget")
                .price(dec!(600))
                .gst_total(dec!(18))
                .build(),
        )
        .add_item(
            LineItemBuilder::new("2", "Bundle")
                .add_sub_item(
                    SubItemBuilder::new("2a", "Part A")
                        .price(dec!(250))
                        .gst_total(dec!(18))
                        .build(),
                )
                .add_sub_item(
                    SubItemBuilder::new("2b", "Part B")
                        .price(dec!(150))
                        .gst_total(dec!(18))
                        .build(),
                )
                .build(),
        )
        .build()
        .unwrap();

    let computed = derive(&state);
    assert_eq!(computed.subtotal, dec!(1000));
    assert_eq!(computed.grand_total, dec!(1180));
}

// --- Migration ---

#[test]
fn double_mode_switch_restores_equal_rates() {
    let state = intra_draft()
        .apply(Edit::Details(DetailsEdit::PlaceOfSupply(
            "Karnataka (29)".into(),
        )))
        .apply(Edit::Details(DetailsEdit::PlaceOfSupply(
            "Maharashtra (27)".into(),
        )));

    let LineBody::Simple(fields) = &state.items[0].body else {
        panic!("expected simple body");
    };
    assert_eq!(fields.rates.cgst, dec!(9));
    assert_eq!(fields.rates.sgst, dec!(9));
}

// --- Builder ---

#[test]
fn builder_rejects_duplicate_item_ids() {
    let result = DraftBuilder::new(home())
        .add_item(LineItemBuilder::new("1", "A").build())
        .add_item(LineItemBuilder::new("1", "B").build())
        .build();
    assert!(matches!(result, Err(BijakError::Builder(_))));
}
