use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{Local, Utc};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use decision_engine::simulate_decision;
use insights::{generate_insights, planner};
use metrics_engine::dashboard_metrics;
use models::{FinancialProfile, OnboardingRequest, SimulationRequest};

use crate::{auth, error::ApiError, repository::UserRepository, validation, Result};

pub type RepositoryState = Arc<dyn UserRepository>;

#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PlannerRequest {
    pub message: String,
}

fn require_user_id(user_id: Option<String>, message: &str) -> Result<String> {
    user_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::BadRequest(message.to_string()))
}

/// GET /health
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": "fintwin-api"
    }))
}

/// POST /api/signup
pub async fn signup(
    State(repo): State<RepositoryState>,
    Json(payload): Json<SignupRequest>,
) -> Result<impl IntoResponse> {
    if let Some(message) = auth::validate_signup_data(
        &payload.name,
        &payload.email,
        &payload.password,
        &payload.confirm_password,
    ) {
        return Err(ApiError::BadRequest(message));
    }

    let user = repo
        .create_account(&payload.name, &payload.email, &payload.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Account created successfully. Please complete your profile.",
            "userId": user.id.clone(),
            "user": user.summary(),
        })),
    ))
}

/// POST /api/login
pub async fn login(
    State(repo): State<RepositoryState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse> {
    if !auth::validate_credentials(&payload.email, &payload.password) {
        return Err(ApiError::BadRequest(
            "Invalid email or password format".to_string(),
        ));
    }

    let user = repo.authenticate(&payload.email, &payload.password).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Login successful",
        "userId": user.id.clone(),
        "user": user.summary(),
    })))
}

/// POST /api/onboarding
/// Validates the financial fields and fully overwrites any previous
/// profile for the user.
pub async fn submit_onboarding(
    State(repo): State<RepositoryState>,
    Json(payload): Json<OnboardingRequest>,
) -> Result<impl IntoResponse> {
    let user_id = require_user_id(payload.user_id.clone(), "User ID is required")?;

    // 404 before validation so an unknown user is not told to fix fields.
    repo.fetch_user(&user_id).await?;

    let errors = validation::validate_onboarding(&payload);
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    let now = Utc::now();
    let profile = FinancialProfile {
        id: user_id.clone(),
        monthly_salary: payload.monthly_salary.unwrap_or(0.0),
        rent: payload.rent.unwrap_or(0.0),
        monthly_expenses: payload.monthly_expenses.unwrap_or(0.0),
        current_savings: payload.current_savings.unwrap_or(0.0),
        debts: payload.debts.unwrap_or(0.0),
        city: Some(
            payload
                .city
                .filter(|city| !city.is_empty())
                .unwrap_or_else(|| "Not specified".to_string()),
        ),
        created_at: now,
        updated_at: now,
    };

    let user = repo.save_profile(&user_id, profile).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Financial profile created successfully",
            "userId": user.id.clone(),
            "user": user.summary(),
        })),
    ))
}

/// GET /api/onboarding?userId=
pub async fn get_onboarding(
    State(repo): State<RepositoryState>,
    Query(query): Query<UserIdQuery>,
) -> Result<impl IntoResponse> {
    let user_id = require_user_id(query.user_id, "User ID is required")?;
    let user = repo.fetch_user(&user_id).await?;

    Ok(Json(json!({
        "success": true,
        "user": {
            "id": user.id,
            "email": user.email,
            "name": user.name,
            "hasCompletedOnboarding": user.has_completed_onboarding,
            "financialData": user.financial_profile,
        },
    })))
}

/// GET /api/dashboard?userId=
/// Metrics are recomputed on every call; nothing derived is stored.
pub async fn get_dashboard(
    State(repo): State<RepositoryState>,
    Query(query): Query<UserIdQuery>,
) -> Result<impl IntoResponse> {
    let user_id = require_user_id(query.user_id, "userId parameter is required")?;
    let user = repo.fetch_user(&user_id).await?;
    let profile = user.financial_profile.ok_or(ApiError::ProfileNotFound)?;

    let metrics = dashboard_metrics(&profile, Local::now().date_naive());

    Ok(Json(json!({
        "success": true,
        "data": {
            "user": {
                "id": user.id,
                "email": user.email,
                "name": user.name,
                "city": profile.city.clone(),
            },
            "userData": profile,
            "metrics": metrics,
        },
    })))
}

/// POST /api/simulate
pub async fn simulate(
    State(repo): State<RepositoryState>,
    Json(payload): Json<SimulationRequest>,
) -> Result<impl IntoResponse> {
    let user_id = require_user_id(payload.user_id.clone(), "userId is required")?;

    let decision =
        validation::parse_simulation_request(&payload).map_err(ApiError::Validation)?;

    let profile = repo.fetch_profile(&user_id).await?;
    let result = simulate_decision(&profile, &decision, Local::now().date_naive());

    Ok(Json(json!({
        "success": true,
        "data": result,
    })))
}

/// GET /api/insights?userId=
pub async fn get_insights(
    State(repo): State<RepositoryState>,
    Query(query): Query<UserIdQuery>,
) -> Result<impl IntoResponse> {
    let user_id = require_user_id(query.user_id, "userId parameter is required")?;
    let profile = repo.fetch_profile(&user_id).await?;

    let metrics = dashboard_metrics(&profile, Local::now().date_naive());
    let insights = generate_insights(&metrics);

    Ok(Json(json!({
        "success": true,
        "data": {
            "insights": insights,
            "metrics": metrics,
        },
    })))
}

/// POST /api/planner
pub async fn planner_chat(Json(payload): Json<PlannerRequest>) -> impl IntoResponse {
    Json(json!({
        "success": true,
        "data": {
            "reply": planner::reply(&payload.message),
        },
    }))
}
