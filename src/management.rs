//! User management operations.
//!
//! These endpoints require an API key, set with
//! [`Client::with_api_key`](crate::Client::with_api_key).

use crate::client::Client;
use crate::error::Result;
use crate::response::ServiceResponse;
use crate::types::{Role, User};
use serde::Deserialize;

/// Response from listing a user's roles.
#[derive(Debug, Deserialize)]
struct RolesResponse {
    #[serde(default)]
    roles: Vec<RoleItem>,
    #[serde(flatten)]
    envelope: ServiceResponse,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RoleItem {
    #[serde(default)]
    role_name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    active: bool,
}

/// Response from fetching a single user.
#[derive(Debug, Deserialize)]
struct UserResponse {
    #[serde(default)]
    user: UserItem,
    #[serde(flatten)]
    envelope: ServiceResponse,
}

/// Response from listing users.
#[derive(Debug, Deserialize)]
struct UsersResponse {
    #[serde(default)]
    users: Vec<UserItem>,
    #[serde(flatten)]
    envelope: ServiceResponse,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserItem {
    #[serde(default)]
    user_key: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    comment: String,
    #[serde(default)]
    active: bool,
    #[serde(default)]
    locked_out: bool,
    #[serde(default)]
    roles: Vec<String>,
}

impl From<UserItem> for User {
    fn from(item: UserItem) -> Self {
        User {
            user_key: item.user_key,
            name: item.name,
            email: item.email,
            comment: item.comment,
            active: item.active,
            locked_out: item.locked_out,
            roles: item.roles,
        }
    }
}

impl Client {
    /// List the roles granted to a user.
    ///
    /// # Arguments
    ///
    /// * `email` - User's email address
    ///
    /// # Returns
    ///
    /// Returns a vector of role information.
    ///
    /// # Errors
    ///
    /// Returns an error if the user is not found or the request fails.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use globalidentity_client::Client;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = Client::new("https://identity.example.com", "app-key")?
    /// #     .with_api_key("api-key");
    /// let roles = client.user_roles("user@example.com").await?;
    /// for role in roles {
    ///     println!("{}: {}", role.name, role.description);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn user_roles(&self, email: &str) -> Result<Vec<Role>> {
        let path = format!(
            "api/management/{}/users/{}/roles",
            urlencoding::encode(self.application_key()),
            urlencoding::encode(email)
        );

        let response = self.get(&path).await?;
        let roles_response: RolesResponse = self.handle_response(response).await?;
        roles_response.envelope.validate()?;

        Ok(roles_response
            .roles
            .into_iter()
            .map(|r| Role {
                name: r.role_name,
                description: r.description,
                active: r.active,
            })
            .collect())
    }

    /// Fetch a single user by email.
    ///
    /// # Arguments
    ///
    /// * `email` - User's email address
    /// * `include_roles` - Whether to populate the user's role names
    ///
    /// # Errors
    ///
    /// Returns an error if the user is not found or the request fails.
    pub async fn user(&self, email: &str, include_roles: bool) -> Result<User> {
        let path = format!(
            "api/management/{}/users/{}?includeRoles={}",
            urlencoding::encode(self.application_key()),
            urlencoding::encode(email),
            include_roles
        );

        let response = self.get(&path).await?;
        let user_response: UserResponse = self.handle_response(response).await?;
        user_response.envelope.validate()?;

        Ok(user_response.user.into())
    }

    /// List users registered in the application, one page at a time.
    ///
    /// # Arguments
    ///
    /// * `page` - 1-based page number
    /// * `limit` - Maximum number of users per page
    /// * `include_roles` - Whether to populate each user's role names
    ///
    /// # Returns
    ///
    /// Returns the users on the requested page.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_users(&self, page: u32, limit: u32, include_roles: bool) -> Result<Vec<User>> {
        let path = format!(
            "api/management/{}/users?page={}&limit={}&includeRoles={}",
            urlencoding::encode(self.application_key()),
            page,
            limit,
            include_roles
        );

        let response = self.get(&path).await?;
        let users_response: UsersResponse = self.handle_response(response).await?;
        users_response.envelope.validate()?;

        Ok(users_response.users.into_iter().map(User::from).collect())
    }
}
