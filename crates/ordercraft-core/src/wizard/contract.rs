//! Stage 3: contract start date, period and derived end date.

use jiff::civil::Date;

use crate::{
    error::{Result, ValidationErrors, WizardError},
    models::OrderUpdate,
    params::ContractTermsInput,
    pricing::contract_end_date,
};

/// Contract periods offered besides "custom".
pub const STANDARD_PERIODS: [u32; 4] = [6, 12, 24, 36];

/// Marker value selecting a custom duration.
pub const CUSTOM_PERIOD: &str = "custom";

/// Resolves the period selector to a month count.
///
/// Returns the field name and message of the failing rule on error.
pub fn resolve_contract_months(
    contract_period: &str,
    custom_duration: Option<i64>,
) -> std::result::Result<u32, (&'static str, String)> {
    let period = contract_period.trim();
    if period.is_empty() {
        return Err(("contractPeriod", "Contract period is required".to_string()));
    }
    if period.eq_ignore_ascii_case(CUSTOM_PERIOD) {
        return match custom_duration {
            Some(months) if months >= 1 => u32::try_from(months)
                .map_err(|_| ("customDuration", "Custom duration is too large".to_string())),
            _ => Err((
                "customDuration",
                "Custom duration must be at least 1 month".to_string(),
            )),
        };
    }
    match period.parse::<u32>() {
        Ok(months) if STANDARD_PERIODS.contains(&months) => Ok(months),
        _ => Err((
            "contractPeriod",
            format!("Unsupported contract period '{period}'"),
        )),
    }
}

fn parse_start_date(raw: &str) -> std::result::Result<Date, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("Start date is required".to_string());
    }
    raw.parse::<Date>()
        .map_err(|_| "Please enter a valid date".to_string())
}

/// Validates the contract-terms form and derives the end date.
pub fn validate_contract_terms(input: &ContractTermsInput) -> Result<OrderUpdate> {
    let mut errors = ValidationErrors::new();

    let start_date = parse_start_date(&input.start_date)
        .map_err(|message| errors.push("startDate", message))
        .ok();

    let months = resolve_contract_months(&input.contract_period, input.custom_duration)
        .map_err(|(field, message)| errors.push(field, message))
        .ok();

    let end_date = match (start_date, months) {
        (Some(start), Some(months)) => {
            let end = contract_end_date(start, months);
            if end.is_none() {
                errors.push(
                    "contractPeriod",
                    "Contract would end outside the supported calendar range",
                );
            }
            end
        }
        _ => None,
    };

    match (start_date, months, end_date) {
        (Some(start_date), Some(contract_period_in_months), Some(end_date)) => {
            errors.into_result(OrderUpdate::ContractTerms {
                start_date,
                contract_period_in_months,
                end_date,
            })
        }
        _ => Err(WizardError::Validation(errors)),
    }
}

/// End date for live display while the form is being edited.
///
/// Never fails: incomplete or invalid input simply has no end date yet.
pub fn preview_end_date(input: &ContractTermsInput) -> Option<Date> {
    let start = parse_start_date(&input.start_date).ok()?;
    let months = resolve_contract_months(&input.contract_period, input.custom_duration).ok()?;
    contract_end_date(start, months)
}
