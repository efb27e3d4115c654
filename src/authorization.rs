//! Authorization operations: authentication, token lifecycle, role and
//! application checks, password recovery.

use crate::client::Client;
use crate::error::{ClientError, Result};
use crate::response::ServiceResponse;
use crate::types::Authorization;
use serde::{Deserialize, Serialize};

/// Token lifetime requested when the caller does not specify one.
const DEFAULT_TOKEN_EXPIRATION_MINUTES: u32 = 15;

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct AuthenticateRequest<'a> {
    application_key: &'a str,
    token_expiration_in_minutes: u32,
    email: &'a str,
    password: &'a str,
}

/// Response from authenticating a user.
///
/// Unlike the other endpoints, the `OperationReport` entries here are
/// `{Field, Message}` objects describing field-level login failures.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AuthenticateResponse {
    #[serde(default)]
    authentication_token: String,
    #[serde(default)]
    user_key: String,
    success: bool,
    #[serde(default)]
    operation_report: Vec<LoginReportEntry>,
}

#[derive(Debug, Deserialize)]
struct LoginReportEntry {
    // The wire object also carries a "Field" key; only the message is kept.
    #[serde(rename = "Message")]
    message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct TokenRequest<'a> {
    application_key: &'a str,
    token: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RenewTokenResponse {
    #[serde(default)]
    new_token: String,
    #[serde(flatten)]
    envelope: ServiceResponse,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct IsUserInRolesRequest<'a> {
    application_key: &'a str,
    user_key: &'a str,
    role_collection: &'a [&'a str],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct ValidateApplicationRequest<'a> {
    application_key: &'a str,
    client_application_key: &'a str,
    raw_data: &'a str,
    encrypted_data: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct RecoverPasswordRequest<'a> {
    application_key: &'a str,
    email: &'a str,
}

impl Client {
    /// Authenticate a user with email and password.
    ///
    /// # Arguments
    ///
    /// * `email` - User's email address
    /// * `password` - User's password
    /// * `expiration_in_minutes` - Requested token lifetime (defaults to 15)
    ///
    /// # Returns
    ///
    /// Returns the authentication token and user key.
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials are rejected or the request fails.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use globalidentity_client::Client;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = Client::new("https://identity.example.com", "app-key")?;
    /// let auth = client.authenticate_user("user@example.com", "hunter2", None).await?;
    /// println!("user {} token {}", auth.key, auth.token);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn authenticate_user(
        &self,
        email: &str,
        password: &str,
        expiration_in_minutes: Option<u32>,
    ) -> Result<Authorization> {
        let request = AuthenticateRequest {
            application_key: self.application_key(),
            token_expiration_in_minutes: expiration_in_minutes
                .unwrap_or(DEFAULT_TOKEN_EXPIRATION_MINUTES),
            email,
            password,
        };

        let response = self.post("api/authorization/authenticate", &request).await?;
        let auth_response: AuthenticateResponse = self.handle_response(response).await?;

        if !auth_response.success {
            return Err(ClientError::Rejected {
                report: auth_response
                    .operation_report
                    .into_iter()
                    .map(|entry| entry.message)
                    .collect(),
            });
        }

        Ok(Authorization {
            token: auth_response.authentication_token,
            key: auth_response.user_key,
        })
    }

    /// Validate an authentication token.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Rejected`] if the service reports the token as
    /// invalid, or another error if the request fails.
    pub async fn validate_token(&self, token: &str) -> Result<bool> {
        let request = TokenRequest {
            application_key: self.application_key(),
            token,
        };

        let response = self.post("api/authorization/validateToken", &request).await?;
        let envelope: ServiceResponse = self.handle_response(response).await?;
        envelope.validate()?;

        Ok(true)
    }

    /// Renew an authentication token.
    ///
    /// # Returns
    ///
    /// Returns the replacement token.
    ///
    /// # Errors
    ///
    /// Returns an error if the token cannot be renewed or the request fails.
    pub async fn renew_token(&self, token: &str) -> Result<String> {
        let request = TokenRequest {
            application_key: self.application_key(),
            token,
        };

        let response = self.post("api/authorization/renewtoken", &request).await?;
        let renew_response: RenewTokenResponse = self.handle_response(response).await?;
        renew_response.envelope.validate()?;

        Ok(renew_response.new_token)
    }

    /// Check whether a user holds all of the given roles.
    ///
    /// # Arguments
    ///
    /// * `user_key` - Key identifying the user
    /// * `roles` - Role names to check
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Rejected`] if the service reports the check as
    /// failed, or another error if the request fails.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use globalidentity_client::Client;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = Client::new("https://identity.example.com", "app-key")?;
    /// let in_roles = client.is_user_in_roles("user-key", &["ADMIN", "AUDITOR"]).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn is_user_in_roles(&self, user_key: &str, roles: &[&str]) -> Result<bool> {
        let request = IsUserInRolesRequest {
            application_key: self.application_key(),
            user_key,
            role_collection: roles,
        };

        let response = self.post("api/authorization/isuserinroles", &request).await?;
        let envelope: ServiceResponse = self.handle_response(response).await?;
        envelope.validate()?;

        Ok(true)
    }

    /// Validate a client application against this application.
    ///
    /// # Arguments
    ///
    /// * `client_application_key` - Key of the calling application
    /// * `raw_data` - Challenge data in the clear
    /// * `encrypted_data` - Challenge data encrypted with the client secret
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Rejected`] if the service rejects the
    /// application, or another error if the request fails.
    pub async fn validate_application(
        &self,
        client_application_key: &str,
        raw_data: &str,
        encrypted_data: &str,
    ) -> Result<bool> {
        let request = ValidateApplicationRequest {
            application_key: self.application_key(),
            client_application_key,
            raw_data,
            encrypted_data,
        };

        let response = self
            .post("api/authorization/validateapplication", &request)
            .await?;
        let envelope: ServiceResponse = self.handle_response(response).await?;
        envelope.validate()?;

        Ok(true)
    }

    /// Start password recovery for a user.
    ///
    /// Any `OperationReport` message is treated as a failure here, even when
    /// the service flags the operation as successful.
    ///
    /// # Returns
    ///
    /// Returns whether the service accepted the recovery request.
    ///
    /// # Errors
    ///
    /// Returns an error if the service reported messages or the request
    /// failed.
    pub async fn recover_password(&self, email: &str) -> Result<bool> {
        let request = RecoverPasswordRequest {
            application_key: self.application_key(),
            email,
        };

        let response = self
            .post("api/authorization/recoverPassword", &request)
            .await?;
        let envelope: ServiceResponse = self.handle_response(response).await?;

        if !envelope.operation_report.is_empty() {
            return Err(ClientError::Rejected {
                report: envelope.operation_report,
            });
        }

        Ok(envelope.success)
    }
}
