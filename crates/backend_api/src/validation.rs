use models::{Decision, DecisionType, FieldError, OnboardingRequest, SimulationRequest};

fn decision_type_from_tag(tag: &str) -> Option<DecisionType> {
    match tag {
        "BUY_CAR" => Some(DecisionType::BuyCar),
        "MOVE_CITY" => Some(DecisionType::MoveCity),
        "CHANGE_JOB" => Some(DecisionType::ChangeJob),
        "BUY_GADGET" => Some(DecisionType::BuyGadget),
        "INCREASE_RENT" => Some(DecisionType::IncreaseRent),
        _ => None,
    }
}

/// Field-level validation of the onboarding payload. Rent is optional
/// (0 for owners); everything else is required and non-negative.
pub fn validate_onboarding(request: &OnboardingRequest) -> Vec<FieldError> {
    let mut errors = Vec::new();

    match request.monthly_salary {
        None => errors.push(FieldError::new(
            "monthlySalary",
            "Monthly salary is required and must be a number",
        )),
        Some(v) if v < 0.0 => errors.push(FieldError::new(
            "monthlySalary",
            "Monthly salary cannot be negative",
        )),
        _ => {}
    }

    if let Some(rent) = request.rent {
        if rent < 0.0 {
            errors.push(FieldError::new("rent", "Rent cannot be negative"));
        }
    }

    match request.monthly_expenses {
        None => errors.push(FieldError::new(
            "monthlyExpenses",
            "Monthly expenses is required and must be a number",
        )),
        Some(v) if v < 0.0 => errors.push(FieldError::new(
            "monthlyExpenses",
            "Monthly expenses cannot be negative",
        )),
        _ => {}
    }

    match request.current_savings {
        None => errors.push(FieldError::new(
            "currentSavings",
            "Current savings is required and must be a number",
        )),
        Some(v) if v < 0.0 => errors.push(FieldError::new(
            "currentSavings",
            "Current savings cannot be negative",
        )),
        _ => {}
    }

    match request.debts {
        None => errors.push(FieldError::new(
            "debts",
            "Debts is required and must be a number",
        )),
        Some(v) if v < 0.0 => errors.push(FieldError::new("debts", "Debts cannot be negative")),
        _ => {}
    }

    // Sanity check across fields: figures where spending outruns income
    // by more than half the salary are almost certainly a typo.
    if let (Some(salary), Some(expenses), Some(debts)) = (
        request.monthly_salary,
        request.monthly_expenses,
        request.debts,
    ) {
        let leftover = salary - request.rent.unwrap_or(0.0) - expenses - debts;
        if leftover < -salary * 0.5 {
            errors.push(FieldError::new(
                "overall",
                "Your expenses exceed income by more than 50%. Please review your figures.",
            ));
        }
    }

    errors
}

/// Turn the flat wire payload into a typed decision, or report what is
/// wrong with it field by field. The engines only ever see the typed
/// form.
pub fn parse_simulation_request(
    request: &SimulationRequest,
) -> std::result::Result<Decision, Vec<FieldError>> {
    let Some(tag) = request
        .decision_type
        .as_deref()
        .and_then(decision_type_from_tag)
    else {
        return Err(vec![FieldError::new("decisionType", "Invalid decision type")]);
    };

    let mut errors = Vec::new();

    let decision = match tag {
        DecisionType::BuyCar => {
            match request.cost {
                Some(cost) if cost >= 0.0 => {
                    if let Some(emi) = request.emi {
                        if emi < 0.0 {
                            errors.push(FieldError::new("emi", "EMI must be a positive number"));
                        }
                    }
                    Some(Decision::BuyCar {
                        cost,
                        emi: request.emi,
                    })
                }
                _ => {
                    errors.push(FieldError::new("cost", "Cost must be a positive number"));
                    None
                }
            }
        }
        DecisionType::BuyGadget => match request.cost {
            Some(cost) if cost >= 0.0 => Some(Decision::BuyGadget { cost }),
            _ => {
                errors.push(FieldError::new("cost", "Cost must be a positive number"));
                None
            }
        },
        DecisionType::MoveCity => match request.rent_change {
            Some(rent_change) => Some(Decision::MoveCity {
                rent_change,
                cost: request.cost,
            }),
            None => {
                errors.push(FieldError::new("rentChange", "Rent change must be a number"));
                None
            }
        },
        DecisionType::ChangeJob => match request.salary_change {
            Some(salary_change) => Some(Decision::ChangeJob { salary_change }),
            None => {
                errors.push(FieldError::new(
                    "salaryChange",
                    "Salary change must be a number",
                ));
                None
            }
        },
        DecisionType::IncreaseRent => match request.rent_change {
            Some(rent_change) => Some(Decision::IncreaseRent { rent_change }),
            None => {
                errors.push(FieldError::new("rentChange", "Rent change must be a number"));
                None
            }
        },
    };

    match decision {
        Some(decision) if errors.is_empty() => Ok(decision),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn onboarding(
        salary: Option<f64>,
        rent: Option<f64>,
        expenses: Option<f64>,
        savings: Option<f64>,
        debts: Option<f64>,
    ) -> OnboardingRequest {
        OnboardingRequest {
            user_id: Some("u1".to_string()),
            monthly_salary: salary,
            rent,
            monthly_expenses: expenses,
            current_savings: savings,
            debts,
            city: None,
        }
    }

    #[test]
    fn complete_onboarding_payload_passes() {
        let request = onboarding(
            Some(30_000.0),
            Some(10_000.0),
            Some(15_000.0),
            Some(50_000.0),
            Some(2_000.0),
        );
        assert!(validate_onboarding(&request).is_empty());
    }

    #[test]
    fn rent_is_optional_but_other_fields_are_required() {
        let errors = validate_onboarding(&onboarding(
            Some(30_000.0),
            None,
            Some(15_000.0),
            Some(50_000.0),
            Some(2_000.0),
        ));
        assert!(errors.is_empty());

        let errors = validate_onboarding(&onboarding(
            None,
            None,
            None,
            Some(50_000.0),
            Some(2_000.0),
        ));
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["monthlySalary", "monthlyExpenses"]);
    }

    #[test]
    fn negative_amounts_are_rejected_per_field() {
        let errors = validate_onboarding(&onboarding(
            Some(30_000.0),
            Some(-2.0),
            Some(15_000.0),
            Some(-3.0),
            Some(2_000.0),
        ));
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["rent", "currentSavings"]);

        // A negative salary also trips the cross-field overspend check,
        // since any negative leftover beats -salary * 0.5.
        let errors = validate_onboarding(&onboarding(
            Some(-1.0),
            None,
            Some(0.0),
            Some(0.0),
            Some(0.0),
        ));
        assert!(errors.iter().any(|e| e.field == "monthlySalary"));
        assert!(errors.iter().any(|e| e.field == "overall"));
    }

    #[test]
    fn overspending_by_more_than_half_the_salary_is_flagged() {
        // leftover = 10000 - 9000 - 5000 - 2000 = -6000 < -5000
        let errors = validate_onboarding(&onboarding(
            Some(10_000.0),
            Some(9_000.0),
            Some(5_000.0),
            Some(0.0),
            Some(2_000.0),
        ));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "overall");

        // Exactly -50% is allowed.
        let errors = validate_onboarding(&onboarding(
            Some(10_000.0),
            Some(8_000.0),
            Some(5_000.0),
            Some(0.0),
            Some(2_000.0),
        ));
        assert!(errors.is_empty());
    }

    fn simulation(tag: Option<&str>) -> SimulationRequest {
        SimulationRequest {
            user_id: Some("u1".to_string()),
            decision_type: tag.map(str::to_string),
            ..SimulationRequest::default()
        }
    }

    #[test]
    fn unknown_or_missing_decision_tag_is_a_single_field_error() {
        for request in [simulation(None), simulation(Some("WIN_LOTTERY"))] {
            let errors = parse_simulation_request(&request).unwrap_err();
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].field, "decisionType");
        }
    }

    #[test]
    fn buy_car_requires_cost_and_checks_emi_sign() {
        let mut request = simulation(Some("BUY_CAR"));
        let errors = parse_simulation_request(&request).unwrap_err();
        assert_eq!(errors[0].field, "cost");

        request.cost = Some(100_000.0);
        request.emi = Some(-1.0);
        let errors = parse_simulation_request(&request).unwrap_err();
        assert_eq!(errors[0].field, "emi");

        request.emi = Some(5_000.0);
        let decision = parse_simulation_request(&request).unwrap();
        assert!(matches!(
            decision,
            Decision::BuyCar { cost, emi: Some(emi) } if cost == 100_000.0 && emi == 5_000.0
        ));
    }

    #[test]
    fn move_city_requires_rent_change_and_keeps_optional_cost() {
        let mut request = simulation(Some("MOVE_CITY"));
        let errors = parse_simulation_request(&request).unwrap_err();
        assert_eq!(errors[0].field, "rentChange");

        request.rent_change = Some(-3_000.0);
        request.cost = Some(15_000.0);
        let decision = parse_simulation_request(&request).unwrap();
        assert!(matches!(
            decision,
            Decision::MoveCity { rent_change, cost: Some(cost) }
                if rent_change == -3_000.0 && cost == 15_000.0
        ));
    }

    #[test]
    fn change_job_accepts_signed_salary_change() {
        let mut request = simulation(Some("CHANGE_JOB"));
        request.salary_change = Some(-4_000.0);
        let decision = parse_simulation_request(&request).unwrap();
        assert!(matches!(
            decision,
            Decision::ChangeJob { salary_change } if salary_change == -4_000.0
        ));
    }
}
