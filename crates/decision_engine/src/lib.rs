use chrono::NaiveDate;
use metrics_engine::dashboard_metrics;
use models::{Decision, DecisionType, FinancialProfile, ImpactSummary, SimulationResult};

fn decision_label(decision: DecisionType) -> &'static str {
    match decision {
        DecisionType::BuyCar => "Buying a car",
        DecisionType::BuyGadget => "Buying a gadget",
        DecisionType::MoveCity => "Moving to a new city",
        DecisionType::ChangeJob => "Changing your job",
        DecisionType::IncreaseRent => "Increasing rent",
    }
}

/// Apply a decision's effect to a copy of the profile. Savings are
/// clamped back to 0 afterwards regardless of the decision; negative
/// savings are not representable downstream.
pub fn apply_decision(profile: &FinancialProfile, decision: &Decision) -> FinancialProfile {
    let mut next = profile.clone();

    match decision {
        Decision::BuyCar { cost, emi } => {
            next.current_savings -= cost;
            if let Some(emi) = emi {
                next.debts += emi;
            }
        }
        Decision::BuyGadget { cost } => {
            next.current_savings -= cost;
        }
        Decision::MoveCity { rent_change, cost } => {
            next.rent += rent_change;
            if let Some(cost) = cost {
                next.current_savings -= cost;
            }
        }
        Decision::ChangeJob { salary_change } => {
            next.monthly_salary += salary_change;
        }
        Decision::IncreaseRent { rent_change } => {
            next.rent += rent_change;
        }
    }

    next.current_savings = next.current_savings.max(0.0);
    next
}

/// Compute metrics before and after a decision and diff the four scalar
/// metrics. Pure given the profile, decision and reference date.
pub fn simulate_decision(
    profile: &FinancialProfile,
    decision: &Decision,
    as_of: NaiveDate,
) -> SimulationResult {
    let original_metrics = dashboard_metrics(profile, as_of);
    let new_profile = apply_decision(profile, decision);
    let new_metrics = dashboard_metrics(&new_profile, as_of);

    let impact = ImpactSummary {
        monthly_leftover_change: new_metrics.monthly_leftover - original_metrics.monthly_leftover,
        savings_rate_change: new_metrics.savings_rate - original_metrics.savings_rate,
        stress_score_change: new_metrics.stress_score - original_metrics.stress_score,
        freedom_years_change: new_metrics.freedom_years - original_metrics.freedom_years,
    };

    let decision_type = decision.decision_type();
    let recommendation = build_recommendation(decision_type, &impact, new_metrics.stress_score);

    SimulationResult {
        original_metrics,
        new_metrics,
        decision: decision_type,
        impact,
        recommendation,
    }
}

// First matching rule wins; stress rules outrank leftover rules, so keep
// this evaluation order.
fn build_recommendation(
    decision: DecisionType,
    impact: &ImpactSummary,
    new_stress_score: f64,
) -> String {
    let name = decision_label(decision);

    if impact.stress_score_change > 20.0 {
        return format!(
            "{name} will significantly increase your financial stress ({new_stress_score:.0}/100). \
             Consider waiting or finding alternatives."
        );
    }

    if impact.stress_score_change > 10.0 {
        return format!(
            "{name} will moderately impact your stress level. Make sure you have an emergency fund."
        );
    }

    if impact.monthly_leftover_change < -5_000.0 {
        return format!(
            "{name} will severely reduce your monthly savings. This could delay financial \
             independence by years."
        );
    }

    if impact.monthly_leftover_change < 0.0 {
        return format!(
            "{name} will reduce your monthly savings, but your financial situation remains stable."
        );
    }

    if impact.monthly_leftover_change > 0.0 {
        return format!(
            "{name} will actually improve your financial position! Your monthly leftover will \
             increase."
        );
    }

    format!("{name} is financially neutral. You can proceed if it aligns with your goals.")
}
