use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::server::{
    config::Config, error::AppError, service::auth::token::JwtKeys, state::AppState,
};

/// Opens the SQLite database from `DATABASE_URL` and applies pending migrations.
///
/// SQL statement logging is turned off; request spans come from the router's trace layer.
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with an up-to-date schema
/// - `Err(AppError::DbErr)` - Connection or migration failed
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Connects the database and derives the token keys from `JWT_SECRET`.
pub async fn build_state(config: &Config) -> Result<AppState, AppError> {
    let db = connect_to_database(config).await?;

    Ok(AppState::new(db, JwtKeys::new(&config.jwt_secret)))
}
