use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// HS256 secret bearer tokens are verified with
    pub jwt_secret: String,
}

impl AppState {
    pub fn new(db: DatabaseConnection, jwt_secret: impl Into<String>) -> Self {
        Self {
            db,
            jwt_secret: jwt_secret.into(),
        }
    }
}

impl From<(DatabaseConnection, String)> for AppState {
    fn from((db, jwt_secret): (DatabaseConnection, String)) -> Self {
        Self::new(db, jwt_secret)
    }
}
