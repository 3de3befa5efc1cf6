//! Signed JWT fixtures.
//!
//! Tokens carry the `{ id, exp }` claims the server's `AuthUser` extractor expects and are
//! signed with the context's JWT secret.

use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::json;

use crate::{constant::TEST_TOKEN_TTL_SECONDS, error::TestError, TestContext};

impl TestContext {
    pub fn auth<'a>(&'a self) -> AuthFixtures<'a> {
        AuthFixtures { setup: self }
    }
}

pub struct AuthFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> AuthFixtures<'a> {
    /// Signed token for `user_id`, valid for [`TEST_TOKEN_TTL_SECONDS`].
    pub fn token(&self, user_id: i32) -> Result<String, TestError> {
        let exp = Utc::now().timestamp() + TEST_TOKEN_TTL_SECONDS;
        self.sign(user_id, exp, &self.setup.jwt_secret)
    }

    /// `Authorization` header value carrying a valid token for `user_id`.
    pub fn bearer(&self, user_id: i32) -> Result<String, TestError> {
        Ok(format!("Bearer {}", self.token(user_id)?))
    }

    /// Token for `user_id` that expired an hour ago.
    pub fn expired_token(&self, user_id: i32) -> Result<String, TestError> {
        let exp = Utc::now().timestamp() - 3600;
        self.sign(user_id, exp, &self.setup.jwt_secret)
    }

    /// Token for `user_id` signed with a secret the server does not know.
    pub fn foreign_token(&self, user_id: i32) -> Result<String, TestError> {
        let exp = Utc::now().timestamp() + TEST_TOKEN_TTL_SECONDS;
        self.sign(user_id, exp, "not_the_server_secret")
    }

    fn sign(&self, user_id: i32, exp: i64, secret: &str) -> Result<String, TestError> {
        let claims = json!({ "id": user_id, "exp": exp });

        Ok(encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )?)
    }
}
