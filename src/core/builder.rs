use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::BijakError;
use super::types::*;

/// Builder for seeding a complete draft in one expression — tests, demos,
/// and hosts importing existing invoice data use this instead of replaying
/// individual edits.
///
/// ```
/// use bijak::core::*;
/// use rust_decimal_macros::dec;
///
/// let state = DraftBuilder::new(HomeState::new("Maharashtra", "27"))
///     .number("INV-2026-014")
///     .place_of_supply("Maharashtra (27)")
///     .billed_to(PartyBuilder::new("Acme Traders").build())
///     .add_item(
///         LineItemBuilder::new("1", "Consulting")
///             .quantity(dec!(2))
///             .price(dec!(500))
///             .gst_total(dec!(18))
///             .build(),
///     )
///     .build()
///     .unwrap();
///
/// assert_eq!(derive(&state).grand_total, dec!(1180));
/// ```
pub struct DraftBuilder {
    details: InvoiceDetails,
    billed_to: Party,
    shipped_to: Party,
    items: Vec<LineItem>,
    pre_tax_adjustments: Vec<AdjustmentItem>,
    post_tax_adjustments: Vec<AdjustmentItem>,
    terms: String,
    home_state: HomeState,
}

impl DraftBuilder {
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

    pub fn number(mut self, number: impl Into<String>) -> Self {
        self.details.number = number.into();
        self
    }

    pub fn issue_date(mut self, date: NaiveDate) -> Self {
        self.details.issue_date = Some(date);
        self
    }

    pub fn place_of_supply(mut self, pos: impl Into<String>) -> Self {
        self.details.place_of_supply = pos.into();
        self
    }

    pub fn billed_to(mut self, party: Party) -> Self {
        self.billed_to = party;
        self
    }

    pub fn shipped_to(mut self, party: Party) -> Self {
        self.shipped_to = party;
        self
    }

    pub fn add_item(mut self, item: LineItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn add_adjustment(mut self, phase: AdjustmentPhase, adjustment: AdjustmentItem) -> Self {
        match phase {
            AdjustmentPhase::PreTax => self.pre_tax_adjustments.push(adjustment),
            AdjustmentPhase::PostTax => self.post_tax_adjustments.push(adjustment),
        }
        self
    }

    pub fn terms(mut self, terms: impl Into<String>) -> Self {
        self.terms = terms.into();
        self
    }

    /// Build the draft. Item and adjustment ids must be unique; sub-item
    /// ids must be unique within their group.
    pub fn build(self) -> Result<InvoiceState, BijakError> {
        let mut seen = std::collections::HashSet::new();
        for item in &self.items {
            if !seen.insert(item.id.clone()) {
                return Err(BijakError::Builder(format!(
                    "duplicate item id '{}'",
                    item.id
                )));
            }
            if let LineBody::Group(subs) = &item.body {
                let mut sub_seen = std::collections::HashSet::new();
                for sub in subs {
                    if !sub_seen.insert(sub.id.clone()) {
                        return Err(BijakError::Builder(format!(
                            "duplicate sub-item id '{}' in item '{}'",
                            sub.id, item.id
                        )));
                    }
                }
            }
        }
        let mut adj_seen = std::collections::HashSet::new();
        for adj in self
            .pre_tax_adjustments
            .iter()
            .chain(&self.post_tax_adjustments)
        {
            if !adj_seen.insert(adj.id.clone()) {
                return Err(BijakError::Builder(format!(
                    "duplicate adjustment id '{}'",
                    adj.id
                )));
            }
        }

        Ok(InvoiceState {
            details: self.details,
            billed_to: self.billed_to,
            shipped_to: self.shipped_to,
            items: self.items,
            pre_tax_adjustments: self.pre_tax_adjustments,
            post_tax_adjustments: self.post_tax_adjustments,
            terms: self.terms,
            home_state: self.home_state,
        })
    }
}

/// Builder for a billed-to / shipped-to party.
pub struct PartyBuilder {
    name: String,
    address: String,
    gstin: String,
}

impl PartyBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: String::new(),
            gstin: String::new(),
        }
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn gstin(mut self, gstin: impl Into<String>) -> Self {
        self.gstin = gstin.into();
        self
    }

    pub fn build(self) -> Party {
        Party {
            name: self.name,
            address: self.address,
            gstin: self.gstin,
        }
    }
}

/// Builder for a simple line item.
pub struct LineItemBuilder {
    id: String,
    name: String,
    description: Option<String>,
    fields: ItemFields,
    sub_items: Vec<SubItem>,
}

impl LineItemBuilder {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            fields: ItemFields::default(),
            sub_items: Vec::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn hsn_sac(mut self, code: impl Into<String>) -> Self {
        self.fields.hsn_sac = Some(code.into());
        self
    }

    pub fn quantity(mut self, qty: Decimal) -> Self {
        self.fields.quantity = Some(qty);
        self
    }

    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.fields.unit = unit.into();
        self
    }

    pub fn price(mut self, price: Decimal) -> Self {
        self.fields.price = price;
        self
    }

    /// Set rates from a total GST percentage (split evenly for CGST/SGST,
    /// whole for IGST).
    pub fn gst_total(mut self, total: Decimal) -> Self {
        self.fields.rates = TaxRates::of_total(total);
        self
    }

    pub fn rates(mut self, rates: TaxRates) -> Self {
        self.fields.rates = rates;
        self
    }

    /// Add a sub-item, turning this item into a group. The item's own
    /// priced fields are discarded.
    pub fn add_sub_item(mut self, sub: SubItem) -> Self {
        self.sub_items.push(sub);
        self
    }

    pub fn build(self) -> LineItem {
        LineItem {
            id: self.id,
            name: self.name,
            description: self.description,
            body: if self.sub_items.is_empty() {
                LineBody::Simple(self.fields)
            } else {
                LineBody::Group(self.sub_items)
            },
        }
    }
}

/// Builder for a sub-item of a group.
pub struct SubItemBuilder {
    id: String,
    name: String,
    description: Option<String>,
    fields: ItemFields,
}

impl SubItemBuilder {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            fields: ItemFields::default(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn hsn_sac(mut self, code: impl Into<String>) -> Self {
        self.fields.hsn_sac = Some(code.into());
        self
    }

    pub fn quantity(mut self, qty: Decimal) -> Self {
        self.fields.quantity = Some(qty);
        self
    }

    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.fields.unit = unit.into();
        self
    }

    pub fn price(mut self, price: Decimal) -> Self {
        self.fields.price = price;
        self
    }

    pub fn gst_total(mut self, total: Decimal) -> Self {
        self.fields.rates = TaxRates::of_total(total);
        self
    }

    pub fn build(self) -> SubItem {
        SubItem {
            id: self.id,
            name: self.name,
            description: self.description,
            fields: self.fields,
        }
    }
}

/// Builder for a pre- or post-tax adjustment.
pub struct AdjustmentBuilder {
    id: String,
    name: String,
    amount: Decimal,
    operation: Operation,
}

impl AdjustmentBuilder {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            amount: Decimal::ZERO,
            operation: Operation::Subtract,
        }
    }

    pub fn amount(mut self, amount: Decimal) -> Self {
        self.amount = amount;
        self
    }

    pub fn operation(mut self, operation: Operation) -> Self {
        self.operation = operation;
        self
    }

    pub fn build(self) -> AdjustmentItem {
        AdjustmentItem {
            id: self.id,
            name: self.name,
            amount: self.amount,
            operation: self.operation,
        }
    }
}
