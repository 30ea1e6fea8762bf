//! Stage 1: customer information.

use crate::{
    error::{Result, ValidationErrors},
    models::{Address, OrderUpdate},
    params::{AddressInput, CustomerInfoInput},
};

/// Validates the customer-info form.
///
/// The address is only kept when `pre_populate` is set; otherwise whatever
/// address fields were filled in are dropped.
pub fn validate_customer_info(input: &CustomerInfoInput) -> Result<OrderUpdate> {
    let mut errors = ValidationErrors::new();

    let customer_name = input.customer_name.trim();
    if customer_name.is_empty() {
        errors.push("customerName", "Customer account is required");
    }

    let customer_address = if input.pre_populate {
        validate_address(input.address.as_ref(), &mut errors)
    } else {
        None
    };

    errors.into_result(OrderUpdate::CustomerInfo {
        customer_name: customer_name.to_string(),
        customer_address,
    })
}

fn validate_address(input: Option<&AddressInput>, errors: &mut ValidationErrors) -> Option<Address> {
    let empty = AddressInput::default();
    let input = input.unwrap_or(&empty);

    let required = [
        ("address.addressLine1", &input.address_line1, "Address line 1 is required"),
        ("address.city", &input.city, "City is required"),
        ("address.state", &input.state, "State is required"),
        ("address.zipCode", &input.zip_code, "Zip code is required"),
    ];
    let before = errors.len();
    for (field, value, message) in required {
        if value.trim().is_empty() {
            errors.push(field, message);
        }
    }
    if errors.len() > before {
        return None;
    }

    Some(Address {
        address_line1: input.address_line1.trim().to_string(),
        address_line2: input
            .address_line2
            .as_deref()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string),
        city: input.city.trim().to_string(),
        state: input.state.trim().to_string(),
        zip_code: input.zip_code.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_address() -> AddressInput {
        AddressInput {
            address_line1: "1 Main St".to_string(),
            address_line2: Some("Suite 4".to_string()),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            zip_code: "62701".to_string(),
        }
    }

    #[test]
    fn test_address_discarded_without_pre_populate() {
        let input = CustomerInfoInput {
            customer_name: "Acme Corp".to_string(),
            pre_populate: false,
            address: Some(AddressInput {
                city: "Springfield".to_string(),
                ..Default::default()
            }),
        };
        let update = validate_customer_info(&input).unwrap();
        assert_eq!(
            update,
            OrderUpdate::CustomerInfo {
                customer_name: "Acme Corp".to_string(),
                customer_address: None,
            }
        );
    }

    #[test]
    fn test_blank_name_rejected() {
        let input = CustomerInfoInput {
            customer_name: "   ".to_string(),
            ..Default::default()
        };
        let err = validate_customer_info(&input).unwrap_err();
        assert_eq!(err.validation_errors().unwrap().fields(), vec!["customerName"]);
    }

    #[test]
    fn test_pre_populate_keeps_address() {
        let input = CustomerInfoInput {
            customer_name: " Acme Corp ".to_string(),
            pre_populate: true,
            address: Some(full_address()),
        };
        let OrderUpdate::CustomerInfo {
            customer_name,
            customer_address,
        } = validate_customer_info(&input).unwrap()
        else {
            panic!("expected a customer info update");
        };
        assert_eq!(customer_name, "Acme Corp");
        let address = customer_address.expect("address kept");
        assert_eq!(address.address_line2.as_deref(), Some("Suite 4"));
        assert_eq!(address.zip_code, "62701");
    }

    #[test]
    fn test_blank_address_line2_is_dropped() {
        let input = CustomerInfoInput {
            customer_name: "Acme Corp".to_string(),
            pre_populate: true,
            address: Some(AddressInput {
                address_line2: Some("  ".to_string()),
                ..full_address()
            }),
        };
        let OrderUpdate::CustomerInfo {
            customer_address, ..
        } = validate_customer_info(&input).unwrap()
        else {
            panic!("expected a customer info update");
        };
        assert_eq!(customer_address.unwrap().address_line2, None);
    }

    #[test]
    fn test_missing_address_reports_every_required_field() {
        let input = CustomerInfoInput {
            customer_name: String::new(),
            pre_populate: true,
            address: None,
        };
        let err = validate_customer_info(&input).unwrap_err();
        assert_eq!(
            err.validation_errors().unwrap().fields(),
            vec![
                "customerName",
                "address.addressLine1",
                "address.city",
                "address.state",
                "address.zipCode",
            ]
        );
    }

    #[test]
    fn test_partial_address_reports_only_missing_fields() {
        let input = CustomerInfoInput {
            customer_name: "Acme Corp".to_string(),
            pre_populate: true,
            address: Some(AddressInput {
                zip_code: String::new(),
                state: String::new(),
                ..full_address()
            }),
        };
        let err = validate_customer_info(&input).unwrap_err();
        assert_eq!(
            err.validation_errors().unwrap().fields(),
            vec!["address.state", "address.zipCode"]
        );
    }
}
