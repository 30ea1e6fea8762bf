//! Command handlers and their clap argument wrappers
//!
//! The CLI side of the parameter wrapper pattern: clap structures describe
//! the flags, and `From` impls turn them into the core stage inputs.
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Session
//! ```
//!
//! Validation is left entirely to the core. A missing `--customer` becomes
//! an empty customer name, which the customer-info stage then rejects with
//! the same field error an interactive user would see.

use anyhow::{Context, Result, bail};
use clap::Args;
use jiff::civil::Date;
use log::{debug, info};
use ordercraft_core::{
    Session, WizardError,
    display::{FieldErrors, StageProgress},
    params::{
        AddOnQuantity, AddOnsInput, AddressInput, ContractTermsInput, CustomerInfoInput,
        ProductSelectionInput, StageInput,
    },
    pricing::contract_end_date,
};

use crate::renderer::TerminalRenderer;

/// Run the whole wizard from flags
///
/// Each group of flags feeds one stage. Stages are submitted in order and the
/// first stage that fails validation stops the run with its field errors.
#[derive(Args, Debug, Clone, Default)]
pub struct QuoteArgs {
    /// Customer account name
    #[arg(long)]
    pub customer: Option<String>,
    /// Record the customer's address on the order
    #[arg(long)]
    pub pre_populate: bool,
    /// Street address (with --pre-populate)
    #[arg(long)]
    pub address_line1: Option<String>,
    /// Suite, floor, etc. (with --pre-populate)
    #[arg(long)]
    pub address_line2: Option<String>,
    /// City (with --pre-populate)
    #[arg(long)]
    pub city: Option<String>,
    /// State (with --pre-populate)
    #[arg(long)]
    pub state: Option<String>,
    /// Zip code (with --pre-populate)
    #[arg(long)]
    pub zip_code: Option<String>,

    /// Product line id
    #[arg(long)]
    pub product: Option<String>,
    /// Plan id within the product line
    #[arg(long)]
    pub plan: Option<String>,
    /// Price override for the plan
    #[arg(long)]
    pub price: Option<f64>,

    /// Contract start date (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<String>,
    /// Contract period: 6, 12, 24, 36 or custom
    #[arg(long, default_value = "12")]
    pub period: String,
    /// Number of months when --period is custom
    #[arg(long, allow_negative_numbers = true)]
    pub custom_months: Option<i64>,

    /// Add-on as id or id=quantity; repeat or separate with commas
    #[arg(long = "add-on", value_delimiter = ',', value_parser = parse_add_on)]
    pub add_ons: Vec<AddOnQuantity>,

    /// Show the finalized confirmation instead of the editable review
    #[arg(long)]
    pub finalize: bool,
}

fn parse_add_on(raw: &str) -> std::result::Result<AddOnQuantity, String> {
    let (add_on_id, quantity) = match raw.split_once('=') {
        Some((id, quantity)) => {
            let quantity = quantity
                .trim()
                .parse::<i64>()
                .map_err(|_| format!("invalid quantity in '{raw}'"))?;
            (id, quantity)
        }
        None => (raw, 1),
    };
    Ok(AddOnQuantity {
        add_on_id: add_on_id.trim().to_string(),
        quantity,
    })
}

impl From<&QuoteArgs> for CustomerInfoInput {
    fn from(val: &QuoteArgs) -> Self {
        let address = val.pre_populate.then(|| AddressInput {
            address_line1: val.address_line1.clone().unwrap_or_default(),
            address_line2: val.address_line2.clone(),
            city: val.city.clone().unwrap_or_default(),
            state: val.state.clone().unwrap_or_default(),
            zip_code: val.zip_code.clone().unwrap_or_default(),
        });
        CustomerInfoInput {
            customer_name: val.customer.clone().unwrap_or_default(),
            pre_populate: val.pre_populate,
            address,
        }
    }
}

impl From<&QuoteArgs> for ProductSelectionInput {
    fn from(val: &QuoteArgs) -> Self {
        ProductSelectionInput {
            product_line_id: val.product.clone().unwrap_or_default(),
            selected_plan_id: val.plan.clone().unwrap_or_default(),
            custom_price: val.price,
        }
    }
}

impl From<&QuoteArgs> for ContractTermsInput {
    fn from(val: &QuoteArgs) -> Self {
        ContractTermsInput {
            start_date: val.start_date.clone().unwrap_or_default(),
            contract_period: val.period.clone(),
            custom_duration: val.custom_months,
        }
    }
}

impl From<&QuoteArgs> for AddOnsInput {
    fn from(val: &QuoteArgs) -> Self {
        AddOnsInput {
            selected_add_ons: val.add_ons.clone(),
        }
    }
}

impl QuoteArgs {
    /// Stage inputs in submission order.
    pub fn stage_inputs(&self) -> [StageInput; 4] {
        [
            StageInput::CustomerInfo(self.into()),
            StageInput::ProductSelection(self.into()),
            StageInput::ContractTerms(self.into()),
            StageInput::AddOns(self.into()),
        ]
    }
}

/// Compute the last day of a contract
///
/// Adds the months to the start date, clamping to the end of a shorter
/// month, and subtracts one day.
#[derive(Args, Debug)]
pub struct EndDateArgs {
    /// Contract start date (YYYY-MM-DD)
    pub start: String,
    /// Contract length in months
    pub months: u32,
}

/// Command handlers bound to one session and one renderer.
pub struct Cli {
    session: Session,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(session: Session, renderer: TerminalRenderer) -> Self {
        Self { session, renderer }
    }

    pub fn show_catalog(&self) {
        self.renderer.render(&self.session.catalog().to_string());
    }

    /// Submits every stage built from `args` and renders the review.
    pub fn quote(mut self, args: &QuoteArgs) -> Result<()> {
        for (n, input) in (1..).zip(args.stage_inputs()) {
            let stage = input.stage();
            match self.session.submit_stage(n, input) {
                Ok(update) => debug!("stage {n}: {}", update.to_string().trim_end()),
                Err(WizardError::Validation(errors)) => {
                    self.renderer.render_error(&format!(
                        "# {}\n\n{}\n{}",
                        stage.title(),
                        StageProgress::new(stage),
                        FieldErrors(&errors)
                    ));
                    bail!("{} failed validation", stage.title());
                }
                Err(e) => return Err(e).context("Failed to submit stage"),
            }
        }

        let summary = if args.finalize {
            self.session.finalize().context("Failed to finalize order")?
        } else {
            self.session.summary()
        };
        info!("quote for '{}' at {}", summary.customer_name, summary.totals.total);
        self.renderer.render(&summary.to_string());
        Ok(())
    }

    pub fn end_date(&self, args: &EndDateArgs) -> Result<()> {
        let start: Date = args
            .start
            .trim()
            .parse()
            .with_context(|| format!("Invalid start date '{}'", args.start))?;
        let Some(end) = contract_end_date(start, args.months) else {
            bail!("Contract length must be between 1 month and the end of the calendar");
        };
        self.renderer.render(&format!(
            "Contract starting {start} for {} months ends on **{end}**\n",
            args.months
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_on() {
        let plain = parse_add_on("api-access").unwrap();
        assert_eq!(plain.add_on_id, "api-access");
        assert_eq!(plain.quantity, 1);

        let counted = parse_add_on("extra-storage=3").unwrap();
        assert_eq!(counted.add_on_id, "extra-storage");
        assert_eq!(counted.quantity, 3);

        assert!(parse_add_on("extra-storage=lots").is_err());
    }

    #[test]
    fn test_address_only_with_pre_populate() {
        let args = QuoteArgs {
            customer: Some("Acme Corp".to_string()),
            city: Some("Springfield".to_string()),
            ..Default::default()
        };
        assert!(CustomerInfoInput::from(&args).address.is_none());

        let args = QuoteArgs {
            pre_populate: true,
            ..args
        };
        let input = CustomerInfoInput::from(&args);
        assert_eq!(input.address.unwrap().city, "Springfield");
    }

    #[test]
    fn test_stage_inputs_in_order() {
        let inputs = QuoteArgs::default().stage_inputs();
        let numbers: Vec<_> = inputs.iter().map(|i| i.stage().number()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }
}
