pub mod auth;
pub mod error;
pub mod handlers;
pub mod repository;
pub mod router;
pub mod server;
pub mod validation;

pub use error::{ApiError, Result};
pub use repository::{InMemoryUserRepository, UserRepository};
pub use router::create_router;
pub use server::run_server;
