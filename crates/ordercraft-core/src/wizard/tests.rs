#[cfg(test)]
mod session_tests {
    use jiff::civil::date;

    use crate::{
        error::WizardError,
        models::{AddOnSelection, Stage},
        params::{
            AddOnQuantity, AddOnsInput, AddressInput, ContractTermsInput, CustomerInfoInput,
            ProductSelectionInput, StageInput,
        },
        wizard::Session,
    };

    fn customer(name: &str) -> StageInput {
        StageInput::CustomerInfo(CustomerInfoInput {
            customer_name: name.to_string(),
            pre_populate: false,
            address: None,
        })
    }

    fn product(product: &str, plan: &str) -> StageInput {
        StageInput::ProductSelection(ProductSelectionInput {
            product_line_id: product.to_string(),
            selected_plan_id: plan.to_string(),
            custom_price: None,
        })
    }

    fn contract(start: &str, period: &str) -> StageInput {
        StageInput::ContractTerms(ContractTermsInput {
            start_date: start.to_string(),
            contract_period: period.to_string(),
            custom_duration: None,
        })
    }

    /// Walks the first three stages of the Acme Corp order.
    fn create_session_at_review() -> Session {
        let mut session = Session::builtin();
        session.submit_stage(1, customer("Acme Corp")).unwrap();
        session
            .submit_stage(2, product("crm-pro", "crm-pro-advanced"))
            .unwrap();
        session.submit_stage(3, contract("2024-03-01", "12")).unwrap();
        session
    }

    #[test]
    fn test_full_order_flow() {
        let mut session = create_session_at_review();
        assert_eq!(session.current_stage(), Stage::ReviewFinalize);

        let order = session.order();
        assert_eq!(order.customer_name, "Acme Corp");
        assert!(order.customer_address.is_none());
        assert_eq!(order.selected_plan_id.as_deref(), Some("crm-pro-advanced"));
        assert_eq!(order.custom_plan_price, Some(79.0));
        assert_eq!(order.start_date, Some(date(2024, 3, 1)));
        assert_eq!(order.contract_period_in_months, 12);
        assert_eq!(order.end_date, Some(date(2025, 2, 28)));

        session.check_add_on("api-access").unwrap();
        let selected = session.set_add_on_quantity("api-access", "2").unwrap();
        assert_eq!(selected, [AddOnSelection::new("api-access", 2)]);
        assert_eq!(session.totals().total, 129.0);

        let summary = session.finalize().unwrap();
        assert!(summary.finalized);
        assert_eq!(summary.product_name.as_deref(), Some("CRM Professional"));
        assert_eq!(summary.plan_name.as_deref(), Some("Professional Advanced"));
        assert_eq!(summary.totals.total, 129.0);
        assert_eq!(session.current_stage(), Stage::ReviewFinalize);
    }

    #[test]
    fn test_failed_submit_changes_nothing() {
        let mut session = Session::builtin();
        let before = session.order().clone();

        let err = session
            .submit_stage(
                1,
                StageInput::CustomerInfo(CustomerInfoInput {
                    customer_name: "  ".to_string(),
                    pre_populate: true,
                    address: Some(AddressInput::default()),
                }),
            )
            .unwrap_err();

        let fields = err.validation_errors().unwrap().fields();
        assert_eq!(
            fields,
            vec![
                "customerName",
                "address.addressLine1",
                "address.city",
                "address.state",
                "address.zipCode",
            ]
        );
        assert_eq!(session.order(), &before);
        assert_eq!(session.current_stage(), Stage::CustomerInfo);
    }

    #[test]
    fn test_resubmission_is_idempotent() {
        let mut session = Session::builtin();
        session.submit_stage(1, customer("Acme Corp")).unwrap();
        let once = session.order().clone();
        session.go_to(1).unwrap();
        session.submit_stage(1, customer("Acme Corp")).unwrap();
        assert_eq!(session.order(), &once);
        assert_eq!(session.current_stage(), Stage::ProductSelection);
    }

    #[test]
    fn test_submit_out_of_range_and_mismatch() {
        let mut session = Session::builtin();

        let err = session.submit_stage(5, customer("Acme Corp")).unwrap_err();
        assert!(matches!(err, WizardError::OutOfRange { requested: 5 }));

        let err = session.submit_stage(2, customer("Acme Corp")).unwrap_err();
        assert!(matches!(
            err,
            WizardError::StageMismatch {
                stage: Stage::ProductSelection,
                input: Stage::CustomerInfo,
            }
        ));
        assert!(session.order().customer_name.is_empty());
        assert_eq!(session.current_stage(), Stage::CustomerInfo);
    }

    #[test]
    fn test_navigation_is_clamped() {
        let mut session = Session::builtin();
        assert_eq!(session.retreat(), Stage::CustomerInfo);
        for _ in 0..6 {
            session.advance();
        }
        assert_eq!(session.current_stage(), Stage::ReviewFinalize);

        assert!(matches!(
            session.go_to(0),
            Err(WizardError::OutOfRange { requested: 0 })
        ));
        assert_eq!(session.current_stage(), Stage::ReviewFinalize);
        assert_eq!(session.go_to(2).unwrap(), Stage::ProductSelection);
    }

    #[test]
    fn test_last_stage_submit_stays_on_review() {
        let mut session = create_session_at_review();
        session
            .submit_stage(
                4,
                StageInput::AddOns(AddOnsInput {
                    selected_add_ons: vec![AddOnQuantity {
                        add_on_id: "extra-storage".to_string(),
                        quantity: 3,
                    }],
                }),
            )
            .unwrap();
        assert_eq!(session.current_stage(), Stage::ReviewFinalize);
        assert_eq!(session.order().add_on_quantity("extra-storage"), Some(3));
        assert_eq!(session.totals().total, 79.0 + 30.0);
    }

    #[test]
    fn test_review_reseeds_on_reentry() {
        let mut session = create_session_at_review();
        session.check_add_on("api-access").unwrap();
        session.set_add_on_quantity("api-access", "2").unwrap();
        session.finalize().unwrap();

        session.retreat();
        session.advance();
        assert_eq!(session.current_stage(), Stage::ReviewFinalize);
        assert!(!session.is_finalized());
        assert!(session.add_on_selector().is_checked("api-access"));
        assert_eq!(session.add_on_selector().quantity("api-access"), Some(2));
    }

    #[test]
    fn test_finalize_requires_review_stage() {
        let mut session = Session::builtin();
        let err = session.finalize().unwrap_err();
        assert!(matches!(
            err,
            WizardError::InactiveStage {
                required: Stage::ReviewFinalize,
                current: Stage::CustomerInfo,
            }
        ));
        assert!(session.back_to_review().is_err());
    }

    #[test]
    fn test_finalized_review_rejects_add_on_edits() {
        let mut session = Session::builtin();
        session.go_to(4).unwrap();
        session.check_add_on("api-access").unwrap();
        session.finalize().unwrap();
        let before = session.order().clone();

        assert!(matches!(
            session.check_add_on("priority-support"),
            Err(WizardError::Finalized)
        ));
        assert!(session.uncheck_add_on("api-access").is_err());
        assert!(session.set_add_on_quantity("api-access", "7").is_err());
        let err = session
            .submit_stage(
                4,
                StageInput::AddOns(AddOnsInput {
                    selected_add_ons: vec![AddOnQuantity {
                        add_on_id: "priority-support".to_string(),
                        quantity: 1,
                    }],
                }),
            )
            .unwrap_err();
        assert!(matches!(err, WizardError::Finalized));

        assert_eq!(session.order(), &before);
        assert_eq!(session.totals().total, 25.0);
        assert!(session.is_finalized());

        session.back_to_review().unwrap();
        session.set_add_on_quantity("api-access", "7").unwrap();
        assert_eq!(session.totals().total, 175.0);
    }

    #[test]
    fn test_leaving_review_clears_finalized() {
        let mut session = create_session_at_review();
        session.finalize().unwrap();
        session.go_to(1).unwrap();
        assert!(!session.is_finalized());
        session.check_add_on("api-access").unwrap();
        assert_eq!(session.order().add_on_quantity("api-access"), Some(1));
    }

    #[test]
    fn test_back_to_review_reopens_editing() {
        let mut session = create_session_at_review();
        session.finalize().unwrap();
        assert!(session.is_finalized());
        let summary = session.back_to_review().unwrap();
        assert!(!summary.finalized);
        assert!(!session.is_finalized());
    }

    #[test]
    fn test_uncheck_drops_add_on_from_order() {
        let mut session = create_session_at_review();
        session.check_add_on("priority-support").unwrap();
        session.check_add_on("api-access").unwrap();
        let selected = session.uncheck_add_on("priority-support").unwrap();
        assert_eq!(selected, [AddOnSelection::new("api-access", 1)]);
        assert_eq!(session.totals().total, 79.0 + 25.0);
    }

    #[test]
    fn test_live_price_edit_flows_into_submit() {
        let mut session = Session::builtin();
        session.go_to(2).unwrap();
        session.select_product("crm-pro").unwrap();
        assert_eq!(session.select_plan("crm-pro-monthly").unwrap(), 79.0);
        assert_eq!(session.set_plan_price("crm-pro-monthly", "49.5"), Some(49.5));
        assert_eq!(session.set_plan_price("crm-pro-monthly", "abc"), Some(49.5));
        assert_eq!(session.effective_price("crm-pro-monthly"), Some(49.5));
        assert_eq!(session.effective_price("crm-pro-advanced"), Some(79.0));

        session
            .submit_stage(2, product("crm-pro", "crm-pro-monthly"))
            .unwrap();
        assert_eq!(session.order().custom_plan_price, Some(49.5));
    }

    #[test]
    fn test_switching_product_clears_overrides() {
        let mut session = Session::builtin();
        session.select_product("crm-pro").unwrap();
        session.set_plan_price("crm-pro-monthly", "10");
        session.select_product("crm-basic").unwrap();
        session.select_product("crm-pro").unwrap();
        assert_eq!(session.effective_price("crm-pro-monthly"), Some(79.0));
        assert!(session.plan_selector().selected_plan_id().is_none());
    }

    #[test]
    fn test_preview_end_date() {
        let session = Session::builtin();
        let input = ContractTermsInput {
            start_date: "2024-01-31".to_string(),
            contract_period: "custom".to_string(),
            custom_duration: Some(1),
        };
        assert_eq!(session.preview_end_date(&input), Some(date(2024, 2, 28)));

        let incomplete = ContractTermsInput {
            start_date: "2024-01-31".to_string(),
            contract_period: "custom".to_string(),
            custom_duration: None,
        };
        assert_eq!(session.preview_end_date(&incomplete), None);
    }

    #[test]
    fn test_reset_discards_everything() {
        let mut session = create_session_at_review();
        session.check_add_on("api-access").unwrap();
        session.reset();
        assert_eq!(session.current_stage(), Stage::CustomerInfo);
        assert_eq!(session.order(), &crate::models::Order::default());
        assert!(session.plan_selector().product_line_id().is_none());
        assert!(!session.add_on_selector().is_checked("api-access"));
    }
}
