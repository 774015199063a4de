use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Financial profile captured at onboarding. All currency fields are
// monthly amounts in the user's currency and must stay >= 0; decision
// simulation clamps current_savings back to 0 after applying effects.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialProfile {
	pub id: String,
	pub monthly_salary: f64,
	pub rent: f64,
	pub monthly_expenses: f64,
	pub current_savings: f64,
	pub debts: f64,
	#[serde(default)]
	pub city: Option<String>,
	pub created_at: DateTime<Utc>,
	pub updated_at: DateTime<Utc>,
}

// Derived per request, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
	pub monthly_leftover: f64,
	pub savings_rate: f64,
	pub stress_score: f64,
	// Rounded to 1 decimal; 999 means "never reached at current pace".
	pub freedom_years: f64,
	pub projected_balance: Vec<MonthlyProjection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyProjection {
	pub month: u32,
	pub balance: f64,
	pub date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DecisionType {
	BuyCar,
	MoveCity,
	ChangeJob,
	BuyGadget,
	IncreaseRent,
}

// Typed decision with only the fields its effect reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "decisionType")]
pub enum Decision {
	#[serde(rename = "BUY_CAR", rename_all = "camelCase")]
	BuyCar {
		cost: f64,
		#[serde(default)]
		emi: Option<f64>,
	},
	#[serde(rename = "BUY_GADGET", rename_all = "camelCase")]
	BuyGadget { cost: f64 },
	#[serde(rename = "MOVE_CITY", rename_all = "camelCase")]
	MoveCity {
		rent_change: f64,
		#[serde(default)]
		cost: Option<f64>,
	},
	#[serde(rename = "CHANGE_JOB", rename_all = "camelCase")]
	ChangeJob { salary_change: f64 },
	#[serde(rename = "INCREASE_RENT", rename_all = "camelCase")]
	IncreaseRent { rent_change: f64 },
}

impl Decision {
	pub fn decision_type(&self) -> DecisionType {
		match self {
			Decision::BuyCar { .. } => DecisionType::BuyCar,
			Decision::BuyGadget { .. } => DecisionType::BuyGadget,
			Decision::MoveCity { .. } => DecisionType::MoveCity,
			Decision::ChangeJob { .. } => DecisionType::ChangeJob,
			Decision::IncreaseRent { .. } => DecisionType::IncreaseRent,
		}
	}
}

// Flat wire form of a simulation request. Field presence depends on the
// decision tag, so everything is optional here and the API layer turns it
// into a Decision, collecting field-level errors.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SimulationRequest {
	pub user_id: Option<String>,
	pub decision_type: Option<String>,
	pub cost: Option<f64>,
	pub emi: Option<f64>,
	// Accepted for wire compatibility; EMI duration does not change the
	// monthly effect.
	pub duration: Option<u32>,
	pub salary_change: Option<f64>,
	pub rent_change: Option<f64>,
}

// Wire form of the onboarding submission. Everything optional so the
// validation layer can report missing fields one by one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OnboardingRequest {
	pub user_id: Option<String>,
	pub monthly_salary: Option<f64>,
	pub rent: Option<f64>,
	pub monthly_expenses: Option<f64>,
	pub current_savings: Option<f64>,
	pub debts: Option<f64>,
	pub city: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactSummary {
	pub monthly_leftover_change: f64,
	pub savings_rate_change: f64,
	pub stress_score_change: f64,
	pub freedom_years_change: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
	pub original_metrics: DashboardMetrics,
	pub new_metrics: DashboardMetrics,
	pub decision: DecisionType,
	pub impact: ImpactSummary,
	pub recommendation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightStatus {
	Stable,
	Warning,
	Critical,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insight {
	pub status: InsightStatus,
	pub message: String,
	pub suggestion: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldError {
	pub field: String,
	pub message: String,
}

impl FieldError {
	pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
		Self {
			field: field.into(),
			message: message.into(),
		}
	}
}

// Account record held by the user store. Never serialized to the wire as
// a whole; responses carry a UserSummary instead.
#[derive(Debug, Clone)]
pub struct UserAccount {
	pub id: String,
	pub email: String,
	pub password: String,
	pub name: String,
	pub financial_profile: Option<FinancialProfile>,
	pub has_completed_onboarding: bool,
	pub created_at: DateTime<Utc>,
	pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
	pub id: String,
	pub email: String,
	pub name: String,
	pub has_completed_onboarding: bool,
}

impl UserAccount {
	pub fn summary(&self) -> UserSummary {
		UserSummary {
			id: self.id.clone(),
			email: self.email.clone(),
			name: self.name.clone(),
			has_completed_onboarding: self.has_completed_onboarding,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn decision_tags_use_screaming_snake_case() {
		let json = serde_json::to_string(&DecisionType::BuyCar).unwrap();
		assert_eq!(json, "\"BUY_CAR\"");
		let back: DecisionType = serde_json::from_str("\"MOVE_CITY\"").unwrap();
		assert_eq!(back, DecisionType::MoveCity);
	}

	#[test]
	fn typed_decision_parses_tagged_json() {
		let decision: Decision =
			serde_json::from_str(r#"{"decisionType":"BUY_CAR","cost":100000,"emi":5000}"#).unwrap();
		match decision {
			Decision::BuyCar { cost, emi } => {
				assert_eq!(cost, 100000.0);
				assert_eq!(emi, Some(5000.0));
			}
			other => panic!("unexpected decision: {other:?}"),
		}
	}

	#[test]
	fn simulation_request_accepts_partial_payloads() {
		let req: SimulationRequest = serde_json::from_str(
			r#"{"userId":"u1","decisionType":"CHANGE_JOB","salaryChange":-4000}"#,
		)
		.unwrap();
		assert_eq!(req.user_id.as_deref(), Some("u1"));
		assert_eq!(req.decision_type.as_deref(), Some("CHANGE_JOB"));
		assert_eq!(req.salary_change, Some(-4000.0));
		assert!(req.cost.is_none());
	}

	#[test]
	fn insight_status_serializes_lowercase() {
		assert_eq!(
			serde_json::to_string(&InsightStatus::Critical).unwrap(),
			"\"critical\""
		);
	}
}
