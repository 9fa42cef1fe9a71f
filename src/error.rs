use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid value for {var}: {value:?} is not a port number")]
    Configuration { var: &'static str, value: String },
    #[error("postgres connection failed")]
    Connect(#[from] tokio_postgres::Error),
    #[error("migration run failed")]
    Migration(#[from] refinery::Error),
}
