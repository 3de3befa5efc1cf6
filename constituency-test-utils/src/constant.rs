//! Constant values used when configuring the test environment.

/// Secret used to sign and verify JWTs in tests. Not a real credential.
pub static TEST_JWT_SECRET: &str = "constituency_test_jwt_secret";

/// Lifetime of tokens issued by the auth fixtures, in seconds.
pub static TEST_TOKEN_TTL_SECONDS: i64 = 900;

/// Role string for the most privileged user role.
pub static ROLE_SUPER_ADMIN: &str = "SuperAdmin";

/// Role string for administrators, the role required for writes.
pub static ROLE_ADMIN: &str = "Admin";

/// Role string for booth-level operators, which may only read.
pub static ROLE_BOOTH: &str = "Booth";
