//! Type-safe Rust client for the GlobalIdentity identity and authorization API.
//!
//! This crate provides a high-level interface to a GlobalIdentity host:
//! user authentication, token validation and renewal, role checks,
//! application validation, password recovery, and user management queries.
//!
//! # Features
//!
//! - Type-safe API client with builder pattern
//! - Authentication support (Bearer token for management endpoints)
//! - Authorization operations (authenticate, validate/renew token, role and
//!   application checks, password recovery)
//! - Management operations (fetch user, list users, list user roles)
//! - Uniform error handling, including service-level `OperationReport`
//!   rejections
//!
//! # Example
//!
//! ```no_run
//! use globalidentity_client::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a client
//! let client = Client::new("https://identity.example.com", "my-application-key")?;
//!
//! // Authenticate a user (default 15 minute token)
//! let auth = client.authenticate_user("user@example.com", "hunter2", None).await?;
//! println!("authenticated: {}", auth.key);
//!
//! // Check roles
//! let is_admin = client.is_user_in_roles(&auth.key, &["ADMIN"]).await?;
//!
//! // Renew the token before it expires
//! let token = client.renew_token(&auth.token).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Authentication
//!
//! Authorization endpoints only need the application key passed to
//! [`Client::new`]. Management endpoints additionally require an API key,
//! sent as a Bearer token:
//!
//! ```no_run
//! # use globalidentity_client::Client;
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new("https://identity.example.com", "my-application-key")?
//!     .with_api_key(std::env::var("GLOBALIDENTITY_API_KEY")?);
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! All operations return `Result<T, ClientError>`. A 2xx response in which
//! the service itself reports failure surfaces as [`ClientError::Rejected`]
//! with the `OperationReport` messages:
//!
//! ```no_run
//! # use globalidentity_client::{Client, ClientError};
//! # async fn example() -> Result<(), ClientError> {
//! # let client = Client::new("https://identity.example.com", "app-key")?;
//! match client.authenticate_user("user@example.com", "wrong", None).await {
//!     Ok(auth) => println!("token: {}", auth.token),
//!     Err(ClientError::Rejected { report }) => println!("login refused: {:?}", report),
//!     Err(e) => println!("error: {}", e),
//! }
//! # Ok(())
//! # }
//! ```

mod authorization;
mod client;
mod error;
mod management;
mod response;
mod types;

// Re-export the main types
pub use client::Client;
pub use error::{ClientError, Result};
pub use response::ServiceResponse;
pub use types::{Authorization, Role, User};
