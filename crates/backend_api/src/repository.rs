use async_trait::async_trait;
use chrono::Utc;
use models::{FinancialProfile, UserAccount};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{ApiError, Result};

/// Repository trait for user accounts and their financial profiles.
/// The calculation crates never see this; swapping in a database-backed
/// implementation must not touch them.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_account(&self, name: &str, email: &str, password: &str)
        -> Result<UserAccount>;
    async fn authenticate(&self, email: &str, password: &str) -> Result<UserAccount>;
    async fn fetch_user(&self, user_id: &str) -> Result<UserAccount>;
    async fn save_profile(&self, user_id: &str, profile: FinancialProfile)
        -> Result<UserAccount>;
    async fn fetch_profile(&self, user_id: &str) -> Result<FinancialProfile>;
}

#[derive(Default)]
struct StoreState {
    users: HashMap<String, UserAccount>,
    // email (lowercased) -> user id
    by_email: HashMap<String, String>,
}

/// In-memory implementation. One lock around both maps so account
/// creation stays atomic with the email index.
#[derive(Default)]
pub struct InMemoryUserRepository {
    state: RwLock<StoreState>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create_account(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<UserAccount> {
        let normalized_email = email.to_lowercase();
        let mut state = self.state.write().await;

        if state.by_email.contains_key(&normalized_email) {
            return Err(ApiError::EmailTaken);
        }

        let now = Utc::now();
        let account = UserAccount {
            id: Uuid::new_v4().to_string(),
            email: normalized_email.clone(),
            password: password.to_string(),
            name: name.to_string(),
            financial_profile: None,
            has_completed_onboarding: false,
            created_at: now,
            updated_at: now,
        };

        state.by_email.insert(normalized_email, account.id.clone());
        state.users.insert(account.id.clone(), account.clone());

        tracing::info!(user_id = %account.id, email = %account.email, "account created");
        Ok(account)
    }

    async fn authenticate(&self, email: &str, password: &str) -> Result<UserAccount> {
        let normalized_email = email.to_lowercase();
        let state = self.state.read().await;

        let user = state
            .by_email
            .get(&normalized_email)
            .and_then(|id| state.users.get(id));

        match user {
            Some(user) if user.password == password => {
                tracing::info!(user_id = %user.id, "login successful");
                Ok(user.clone())
            }
            _ => {
                tracing::warn!(email = %normalized_email, "login failed");
                Err(ApiError::InvalidCredentials)
            }
        }
    }

    async fn fetch_user(&self, user_id: &str) -> Result<UserAccount> {
        let state = self.state.read().await;
        state
            .users
            .get(user_id)
            .cloned()
            .ok_or(ApiError::UserNotFound)
    }

    async fn save_profile(
        &self,
        user_id: &str,
        mut profile: FinancialProfile,
    ) -> Result<UserAccount> {
        let mut state = self.state.write().await;
        let user = state
            .users
            .get_mut(user_id)
            .ok_or(ApiError::UserNotFound)?;

        let now = Utc::now();
        profile.id = user_id.to_string();
        profile.updated_at = now;

        // Re-onboarding fully overwrites the previous profile.
        user.financial_profile = Some(profile);
        user.has_completed_onboarding = true;
        user.updated_at = now;

        tracing::info!(user_id = %user.id, "financial profile saved");
        Ok(user.clone())
    }

    async fn fetch_profile(&self, user_id: &str) -> Result<FinancialProfile> {
        let user = self.fetch_user(user_id).await?;
        user.financial_profile.ok_or(ApiError::ProfileNotFound)
    }
}
