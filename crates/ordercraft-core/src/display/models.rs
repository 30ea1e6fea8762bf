//! Display implementations for domain models.
//!
//! Markdown output for the catalog, the order and the review summary,
//! separated from the model definitions.

use std::fmt;

use super::{AddOns, ContractDate, Money, Products};
use crate::{
    models::{
        AddOn, Address, Catalog, Order, OrderSummary, OrderUpdate, Plan, PriceInterval, Product,
        Stage,
    },
    pricing::OrderTotals,
};

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

impl fmt::Display for PriceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- **{}** (`{}`): {}/{}",
            self.name,
            self.id,
            Money(self.default_price),
            self.price_interval
        )
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (`{}`)", self.name, self.id)?;
        writeln!(f)?;
        for plan in &self.plans {
            writeln!(f, "{plan}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for AddOn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- **{}** (`{}`): {}", self.name, self.id, self.price_label)
    }
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Products")?;
        writeln!(f)?;
        write!(f, "{}", Products(self.list_products()))?;
        writeln!(f, "# Add-ons")?;
        writeln!(f)?;
        write!(f, "{}", AddOns(self.list_add_ons()))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.address_line1)?;
        if let Some(line2) = &self.address_line2 {
            write!(f, ", {line2}")?;
        }
        write!(f, ", {}, {} {}", self.city, self.state, self.zip_code)
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let customer = if self.customer_name.is_empty() {
            "Not set"
        } else {
            self.customer_name.as_str()
        };
        writeln!(f, "# Order")?;
        writeln!(f)?;
        writeln!(f, "- **Customer**: {customer}")?;
        if let Some(address) = &self.customer_address {
            writeln!(f, "- **Address**: {address}")?;
        }
        match &self.selected_plan_id {
            Some(plan_id) => writeln!(f, "- **Plan**: `{plan_id}` at {}", Money(self.plan_price()))?,
            None => writeln!(f, "- **Plan**: Not set")?,
        }
        writeln!(f, "- **Start**: {}", ContractDate::new(&self.start_date))?;
        writeln!(f, "- **Duration**: {} months", self.contract_period_in_months)?;
        writeln!(f, "- **End**: {}", ContractDate::new(&self.end_date))?;

        if !self.selected_add_ons.is_empty() {
            writeln!(f, "- **Add-ons**:")?;
            for selection in &self.selected_add_ons {
                writeln!(f, "  - `{}` x{}", selection.add_on_id, selection.quantity)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for OrderUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderUpdate::CustomerInfo {
                customer_name,
                customer_address,
            } => {
                write!(f, "Customer set to {customer_name}")?;
                if let Some(address) = customer_address {
                    write!(f, " ({address})")?;
                }
                writeln!(f)
            }
            OrderUpdate::ProductSelection {
                selected_plan_id,
                custom_plan_price,
            } => writeln!(
                f,
                "Plan set to `{selected_plan_id}` at {}",
                Money(*custom_plan_price)
            ),
            OrderUpdate::ContractTerms {
                start_date,
                contract_period_in_months,
                end_date,
            } => writeln!(
                f,
                "Contract runs {} to {} ({contract_period_in_months} months)",
                ContractDate(Some(start_date)),
                ContractDate(Some(end_date))
            ),
            OrderUpdate::AddOns { selected_add_ons } => {
                writeln!(f, "{} add-on(s) selected", selected_add_ons.len())
            }
        }
    }
}

impl fmt::Display for OrderTotals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.add_on_lines {
            writeln!(
                f,
                "- {} (x{}): {}/mo",
                line.name,
                line.quantity,
                Money(line.line_total)
            )?;
        }
        writeln!(f)?;
        writeln!(f, "**Total Monthly**: {}", Money(self.total))
    }
}

impl OrderSummary {
    fn fmt_review(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Order Summary")?;
        writeln!(f)?;

        writeln!(f, "## Customer Information")?;
        writeln!(f)?;
        writeln!(f, "{}", self.customer_name)?;
        if let Some(address) = &self.customer_address {
            writeln!(f)?;
            writeln!(f, "{address}")?;
        }
        writeln!(f)?;

        writeln!(f, "## Product & Plan")?;
        writeln!(f)?;
        if let Some(product) = &self.product_name {
            writeln!(f, "- {product}")?;
        }
        if let Some(plan) = &self.plan_name {
            writeln!(f, "- {plan}")?;
        }
        writeln!(f, "- {}/mo", Money(self.totals.plan_price))?;
        writeln!(f)?;

        writeln!(f, "## Contract Terms")?;
        writeln!(f)?;
        writeln!(f, "- Start: {}", ContractDate::new(&self.start_date))?;
        writeln!(f, "- Duration: {} months", self.contract_period_in_months)?;
        writeln!(f, "- End: {}", ContractDate::new(&self.end_date))?;
        writeln!(f)?;

        if !self.totals.add_on_lines.is_empty() {
            writeln!(f, "## Add-ons")?;
            writeln!(f)?;
        }
        write!(f, "{}", self.totals)
    }

    fn fmt_finalized(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Order Finalized Successfully!")?;
        writeln!(f)?;
        writeln!(f, "Your order has been submitted and will be processed shortly.")?;
        writeln!(f)?;
        writeln!(f, "- **Customer**: {}", self.customer_name)?;
        writeln!(
            f,
            "- **Plan**: {} - {}/mo",
            self.plan_name.as_deref().unwrap_or("Not set"),
            Money(self.totals.plan_price)
        )?;
        writeln!(f, "- **Contract Period**: {} months", self.contract_period_in_months)?;
        writeln!(f, "- **Total Monthly**: {}", Money(self.totals.total))
    }
}

impl fmt::Display for OrderSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.finalized {
            self.fmt_finalized(f)
        } else {
            self.fmt_review(f)
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::{
        models::AddOnSelection,
        pricing::order_totals,
    };

    fn create_test_order() -> Order {
        Order {
            customer_name: "Acme Corp".to_string(),
            customer_address: None,
            selected_plan_id: Some("crm-pro-advanced".to_string()),
            custom_plan_price: Some(79.0),
            start_date: Some(date(2024, 3, 1)),
            contract_period_in_months: 12,
            end_date: Some(date(2025, 2, 28)),
            selected_add_ons: vec![AddOnSelection::new("api-access", 2)],
        }
    }

    fn create_test_summary(finalized: bool) -> OrderSummary {
        let order = create_test_order();
        OrderSummary {
            customer_name: order.customer_name.clone(),
            customer_address: None,
            product_name: Some("CRM Professional".to_string()),
            plan_name: Some("Professional Advanced".to_string()),
            price_interval: Some(PriceInterval::Monthly),
            start_date: order.start_date,
            end_date: order.end_date,
            contract_period_in_months: 12,
            totals: order_totals(&order, &Catalog::builtin()),
            finalized,
        }
    }

    #[test]
    fn test_order_display() {
        let output = create_test_order().to_string();
        assert!(output.contains("- **Customer**: Acme Corp"));
        assert!(output.contains("- **Plan**: `crm-pro-advanced` at $79"));
        assert!(output.contains("- **End**: 2025-02-28"));
        assert!(output.contains("  - `api-access` x2"));
    }

    #[test]
    fn test_empty_order_display() {
        let output = Order::default().to_string();
        assert!(output.contains("- **Customer**: Not set"));
        assert!(output.contains("- **Start**: Not set"));
        assert!(output.contains("- **Duration**: 12 months"));
        assert!(!output.contains("Add-ons"));
    }

    #[test]
    fn test_review_summary_display() {
        let output = create_test_summary(false).to_string();
        assert!(output.contains("## Product & Plan"));
        assert!(output.contains("- API Access (x2): $50/mo"));
        assert!(output.contains("**Total Monthly**: $129"));
        assert!(!output.contains("Finalized"));
    }

    #[test]
    fn test_finalized_summary_display() {
        let output = create_test_summary(true).to_string();
        assert!(output.contains("Your order has been submitted and will be processed shortly."));
        assert!(output.contains("- **Plan**: Professional Advanced - $79/mo"));
        assert!(output.contains("- **Total Monthly**: $129"));
    }

    #[test]
    fn test_address_display() {
        let address = Address {
            address_line1: "1 Main St".to_string(),
            address_line2: Some("Suite 4".to_string()),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            zip_code: "62701".to_string(),
        };
        assert_eq!(address.to_string(), "1 Main St, Suite 4, Springfield, IL 62701");
    }

    #[test]
    fn test_update_display() {
        let update = OrderUpdate::ContractTerms {
            start_date: date(2024, 3, 1),
            contract_period_in_months: 12,
            end_date: date(2025, 2, 28),
        };
        assert_eq!(
            update.to_string(),
            "Contract runs 2024-03-01 to 2025-02-28 (12 months)\n"
        );
    }

    #[test]
    fn test_catalog_display() {
        let output = Catalog::builtin().to_string();
        assert!(output.starts_with("# Products"));
        assert!(output.contains("- **Basic Yearly** (`crm-basic-yearly`): $290/yr"));
        assert!(output.contains("# Add-ons"));
    }
}
