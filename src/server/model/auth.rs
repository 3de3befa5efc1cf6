//! Bearer token authentication.
//!
//! Tokens are HS256 JWTs issued by the identity service with `{ id, exp }` claims. The
//! [`AuthUser`] extractor verifies the token and loads the user it names; handlers then
//! check the user's role with [`AuthUser::authorize`].

use std::str::FromStr;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, Error},
    model::app::AppState,
};

/// Claims carried by a bearer token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Id of the `app_user` row
    pub id: i32,
    /// Expiry as seconds since the epoch
    pub exp: usize,
}

/// User roles, as stored in `app_user.role`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    SuperAdmin,
    Admin,
    Division,
    Parliament,
    Assembly,
    Block,
    Booth,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::SuperAdmin => "SuperAdmin",
            Role::Admin => "Admin",
            Role::Division => "Division",
            Role::Parliament => "Parliament",
            Role::Assembly => "Assembly",
            Role::Block => "Block",
            Role::Booth => "Booth",
        }
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SuperAdmin" => Ok(Role::SuperAdmin),
            "Admin" => Ok(Role::Admin),
            "Division" => Ok(Role::Division),
            "Parliament" => Ok(Role::Parliament),
            "Assembly" => Ok(Role::Assembly),
            "Block" => Ok(Role::Block),
            "Booth" => Ok(Role::Booth),
            _ => Err(()),
        }
    }
}

/// The active user a request's bearer token belongs to.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub id: i32,
    pub username: String,
    /// Role as stored; unknown roles are never authorized
    pub role: String,
}

impl AuthUser {
    /// Succeeds when the user's role is one of `allowed`. `SuperAdmin` is always allowed.
    pub fn authorize(&self, allowed: &[Role]) -> Result<(), AuthError> {
        match self.role.parse::<Role>() {
            Ok(Role::SuperAdmin) => Ok(()),
            Ok(role) if allowed.contains(&role) => Ok(()),
            _ => Err(AuthError::Forbidden(self.role.clone())),
        }
    }

    /// Role check applied to every write endpoint.
    pub fn require_admin(&self) -> Result<(), AuthError> {
        self.authorize(&[Role::Admin])
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Error> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::MissingToken)?;

        let claims = decode::<Claims>(
            token,
            &DecodingKey::from_secret(state.jwt_secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .map_err(AuthError::from)?
        .claims;

        let user = UserRepository::new(&state.db)
            .find_by_id(claims.id)
            .await?
            .ok_or(AuthError::UserNotFound(claims.id))?;

        if !user.is_active {
            return Err(AuthError::UserInactive(user.id).into());
        }

        Ok(Self::from(user))
    }
}

impl From<entity::app_user::Model> for AuthUser {
    fn from(user: entity::app_user::Model) -> Self {
        Self {
            id: user.id,
            username: user.username,
            role: user.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_role(role: &str) -> AuthUser {
        AuthUser {
            id: 1,
            username: "user".to_string(),
            role: role.to_string(),
        }
    }

    /// Expect admins to pass the admin check
    #[test]
    fn admin_is_authorized() {
        assert!(user_with_role("Admin").require_admin().is_ok());
    }

    /// Expect super admins to bypass every role check
    #[test]
    fn super_admin_bypasses_role_checks() {
        let user = user_with_role("SuperAdmin");

        assert!(user.require_admin().is_ok());
        assert!(user.authorize(&[]).is_ok());
    }

    /// Expect other roles to be forbidden with their role in the message
    #[test]
    fn other_roles_are_forbidden() {
        let err = user_with_role("Booth").require_admin().unwrap_err();

        assert_eq!(
            err.to_string(),
            "User role Booth is not authorized to access this route"
        );
    }

    /// Expect unknown roles to be forbidden
    #[test]
    fn unknown_role_is_forbidden() {
        assert!(user_with_role("Intern").authorize(&[Role::Admin]).is_err());
    }

    #[test]
    fn role_strings_round_trip() {
        for role in [Role::SuperAdmin, Role::Admin, Role::Block, Role::Booth] {
            assert_eq!(role.as_str().parse::<Role>(), Ok(role));
        }
    }
}
