use anyhow::Result;

use mycelium_migrations::{conf::Conf, migrate};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let conf = Conf::from_env()?;
    if conf.uses_default_credentials() {
        log::warn!("using default postgres/postgres credentials, fine for local dev only");
    }

    let report = migrate::run(&conf).await?;
    log::info!("done, {} migration(s) applied", report.applied_migrations().len());

    Ok(())
}
