use chrono::{Months, NaiveDate};
use models::{DashboardMetrics, FinancialProfile, MonthlyProjection};

/// Number of months covered by the dashboard balance projection.
pub const PROJECTION_MONTHS: u32 = 12;

/// Serialized stand-in for a horizon that is never reached.
pub const UNREACHABLE_YEARS: f64 = 999.0;

// 4% rule: financially independent once savings hit 25x annual expenses.
const FI_TARGET_MULTIPLIER: f64 = 25.0;

/// Years until financial independence. The 999 sentinel only exists in
/// serialized metrics; internally the unreachable case is its own variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FreedomHorizon {
    Years(f64),
    Unreachable,
}

impl FreedomHorizon {
    /// Value used in serialized metrics: years rounded to 1 decimal, or
    /// the 999 sentinel.
    pub fn display_years(&self) -> f64 {
        match self {
            FreedomHorizon::Years(years) => round1(*years),
            FreedomHorizon::Unreachable => UNREACHABLE_YEARS,
        }
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Monthly amount left after rent, expenses and debt service. May be
/// negative.
pub fn monthly_leftover(salary: f64, rent: f64, expenses: f64, debts: f64) -> f64 {
    salary - rent - expenses - debts
}

/// Leftover as a percentage of gross salary. Zero salary yields 0.
pub fn savings_rate(salary: f64, leftover: f64) -> f64 {
    if salary == 0.0 {
        return 0.0;
    }
    leftover / salary * 100.0
}

/// Heuristic 0-100 stress indicator. Up to 50 points from the
/// debt-to-income ratio (treated as 1 when salary is zero), plus 50 when
/// the leftover is negative or 30 when it is under 10% of salary.
pub fn stress_score(salary: f64, leftover: f64, debts: f64) -> f64 {
    let debt_to_income = if salary > 0.0 { debts / salary } else { 1.0 };
    let leftover_ratio = if leftover > 0.0 { leftover / salary } else { 0.0 };

    let mut stress = (debt_to_income * 50.0).min(50.0);
    if leftover < 0.0 {
        stress += 50.0;
    } else if leftover_ratio < 0.1 {
        stress += 30.0;
    }

    stress.clamp(0.0, 100.0)
}

/// Years of saving at the current leftover until savings reach 25x annual
/// expenses. The target-already-met check runs before the non-positive
/// leftover check, so a met target never reports as unreachable.
pub fn freedom_horizon(
    current_savings: f64,
    monthly_leftover: f64,
    monthly_expenses: f64,
) -> FreedomHorizon {
    let target_savings = monthly_expenses * 12.0 * FI_TARGET_MULTIPLIER;

    if current_savings >= target_savings {
        return FreedomHorizon::Years(0.0);
    }
    if monthly_leftover <= 0.0 {
        return FreedomHorizon::Unreachable;
    }

    let annual_leftover = monthly_leftover * 12.0;
    let years_needed = (target_savings - current_savings) / annual_leftover;
    FreedomHorizon::Years(years_needed.max(0.0))
}

/// Eager fixed-length balance projection. Point i (1-indexed) carries
/// `initial_balance + i * monthly_leftover` rounded to 2 decimals and an
/// ISO date i calendar months after `from`.
pub fn project_balance(
    initial_balance: f64,
    monthly_leftover: f64,
    months: u32,
    from: NaiveDate,
) -> Vec<MonthlyProjection> {
    let mut projections = Vec::with_capacity(months as usize);
    let mut balance = initial_balance;

    for i in 1..=months {
        balance += monthly_leftover;
        let date = from.checked_add_months(Months::new(i)).unwrap_or(from);
        projections.push(MonthlyProjection {
            month: i,
            balance: round2(balance),
            date: date.format("%Y-%m-%d").to_string(),
        });
    }

    projections
}

/// Compose the full dashboard metrics for a profile. Pure given the
/// profile and the reference date; callers pass today's date.
pub fn dashboard_metrics(profile: &FinancialProfile, as_of: NaiveDate) -> DashboardMetrics {
    let leftover = monthly_leftover(
        profile.monthly_salary,
        profile.rent,
        profile.monthly_expenses,
        profile.debts,
    );

    DashboardMetrics {
        monthly_leftover: leftover,
        savings_rate: savings_rate(profile.monthly_salary, leftover),
        stress_score: stress_score(profile.monthly_salary, leftover, profile.debts),
        freedom_years: freedom_horizon(profile.current_savings, leftover, profile.monthly_expenses)
            .display_years(),
        projected_balance: project_balance(
            profile.current_savings,
            leftover,
            PROJECTION_MONTHS,
            as_of,
        ),
    }
}
