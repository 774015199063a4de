pub mod planner;

use models::{DashboardMetrics, Insight, InsightStatus};

// Serialized metrics carry 999 for an unreachable independence horizon.
const UNREACHABLE_YEARS: f64 = 999.0;

fn insight(
    status: InsightStatus,
    message: impl Into<String>,
    suggestion: impl Into<String>,
) -> Insight {
    Insight {
        status,
        message: message.into(),
        suggestion: suggestion.into(),
    }
}

/// Threshold rules over computed metrics. Four independent rule groups
/// evaluated in a fixed order (stress, savings rate, leftover, freedom
/// years); each appends at most one insight. A stress score in [30, 50)
/// deliberately matches no stress rule.
pub fn generate_insights(metrics: &DashboardMetrics) -> Vec<Insight> {
    let mut insights = Vec::new();

    if metrics.stress_score >= 70.0 {
        insights.push(insight(
            InsightStatus::Critical,
            "Your financial stress level is critically high",
            "Consider negotiating a salary increase, reducing expenses, or seeking financial \
             counseling.",
        ));
    } else if metrics.stress_score >= 50.0 {
        insights.push(insight(
            InsightStatus::Warning,
            "Your financial stress level is elevated",
            "Focus on building an emergency fund or increasing your savings rate.",
        ));
    } else if metrics.stress_score < 30.0 {
        insights.push(insight(
            InsightStatus::Stable,
            "Your financial health is strong",
            "You have room to take calculated risks or invest in your future.",
        ));
    }

    if metrics.savings_rate < 10.0 {
        insights.push(insight(
            InsightStatus::Warning,
            "Your savings rate is below 10%",
            "Try to reduce discretionary spending or increase income to improve your savings rate.",
        ));
    } else if metrics.savings_rate >= 30.0 {
        insights.push(insight(
            InsightStatus::Stable,
            "Excellent savings rate! You are saving 30% or more",
            "Consider diversifying your savings into investments for long-term wealth building.",
        ));
    }

    if metrics.monthly_leftover < 0.0 {
        insights.push(insight(
            InsightStatus::Critical,
            "You are spending more than you earn",
            "Create a budget immediately and identify areas to cut expenses or increase income.",
        ));
    } else if metrics.monthly_leftover < 5_000.0 {
        insights.push(insight(
            InsightStatus::Warning,
            "Your monthly leftover is tight",
            "Build an emergency fund with 3-6 months of expenses before making major decisions.",
        ));
    }

    if metrics.freedom_years < 10.0 && metrics.freedom_years != UNREACHABLE_YEARS {
        insights.push(insight(
            InsightStatus::Stable,
            format!(
                "You could achieve financial independence in about {} years",
                metrics.freedom_years
            ),
            "Keep up your current savings rate and maintain discipline to reach this goal.",
        ));
    } else if metrics.freedom_years >= 50.0 {
        insights.push(insight(
            InsightStatus::Warning,
            format!(
                "At your current pace, financial independence is {} years away",
                metrics.freedom_years
            ),
            "Consider increasing income or decreasing expenses to accelerate your timeline.",
        ));
    }

    insights
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(
        monthly_leftover: f64,
        savings_rate: f64,
        stress_score: f64,
        freedom_years: f64,
    ) -> DashboardMetrics {
        DashboardMetrics {
            monthly_leftover,
            savings_rate,
            stress_score,
            freedom_years,
            projected_balance: Vec::new(),
        }
    }

    #[test]
    fn stress_seventy_is_already_critical() {
        let insights = generate_insights(&metrics(10_000.0, 20.0, 70.0, 20.0));
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].status, InsightStatus::Critical);
        assert!(insights[0].message.contains("critically high"));
    }

    #[test]
    fn stress_fifty_is_already_a_warning() {
        let insights = generate_insights(&metrics(10_000.0, 20.0, 50.0, 20.0));
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].status, InsightStatus::Warning);
        assert!(insights[0].message.contains("elevated"));
    }

    #[test]
    fn stress_band_thirty_to_fifty_emits_nothing() {
        // 30 is not < 30 and not >= 50: the ladder has a real gap here.
        for score in [30.0, 42.0, 49.9] {
            let insights = generate_insights(&metrics(10_000.0, 20.0, score, 20.0));
            assert!(
                insights.iter().all(|i| !i.message.contains("stress")),
                "unexpected stress insight at score {score}"
            );
        }
    }

    #[test]
    fn low_stress_reports_stable_health() {
        let insights = generate_insights(&metrics(10_000.0, 20.0, 10.0, 20.0));
        assert_eq!(insights[0].status, InsightStatus::Stable);
        assert!(insights[0].message.contains("strong"));
    }

    #[test]
    fn savings_rate_rules_cover_both_tails() {
        let low = generate_insights(&metrics(10_000.0, 5.0, 40.0, 20.0));
        assert!(low.iter().any(|i| i.message.contains("below 10%")));

        let high = generate_insights(&metrics(10_000.0, 35.0, 40.0, 20.0));
        assert!(high.iter().any(|i| i.message.contains("30% or more")));

        let mid = generate_insights(&metrics(10_000.0, 20.0, 40.0, 20.0));
        assert!(mid.iter().all(|i| !i.message.contains("savings rate")));
    }

    #[test]
    fn negative_leftover_is_critical_and_small_leftover_warns() {
        let negative = generate_insights(&metrics(-500.0, 20.0, 40.0, 20.0));
        assert!(negative
            .iter()
            .any(|i| i.status == InsightStatus::Critical
                && i.message.contains("more than you earn")));

        let tight = generate_insights(&metrics(3_000.0, 20.0, 40.0, 20.0));
        assert!(tight.iter().any(|i| i.message.contains("tight")));
    }

    #[test]
    fn freedom_years_rules_skip_the_sentinel() {
        let near = generate_insights(&metrics(10_000.0, 20.0, 40.0, 7.5));
        assert!(near.iter().any(|i| i.message.contains("about 7.5 years")));

        let far = generate_insights(&metrics(10_000.0, 20.0, 40.0, 60.0));
        assert!(far.iter().any(|i| i.message.contains("60 years away")));

        // 999 means unreachable, which is neither "close" nor a timeline.
        let unreachable = generate_insights(&metrics(10_000.0, 20.0, 40.0, 999.0));
        assert!(unreachable
            .iter()
            .all(|i| !i.message.contains("financial independence in about")));
        assert!(unreachable.iter().any(|i| i.message.contains("years away")));
    }

    #[test]
    fn groups_append_in_stress_savings_leftover_freedom_order() {
        // Trip every group at once and check ordering.
        let insights = generate_insights(&metrics(-6_000.0, 5.0, 80.0, 60.0));
        assert_eq!(insights.len(), 4);
        assert!(insights[0].message.contains("stress"));
        assert!(insights[1].message.contains("savings rate"));
        assert!(insights[2].message.contains("more than you earn"));
        assert!(insights[3].message.contains("years away"));
    }
}
