//! Runs the embedded migrations against the configured database.
//!
//! Refinery owns the bookkeeping: its history table records applied
//! versions and checksums, pending scripts run in version order, and a
//! failing script aborts the run.

use refinery::Report;

use crate::conf::Conf;
use crate::db;
use crate::error::Error;

mod embedded {
    use refinery::embed_migrations;
    embed_migrations!("migrations");
}

pub async fn run(conf: &Conf) -> Result<Report, Error> {
    let mut client = db::connect(conf).await?;

    log::info!(
        "running migrations against {}:{}/{}",
        conf.host,
        conf.port,
        conf.database
    );
    let report = embedded::migrations::runner().run_async(&mut client).await?;

    for migration in report.applied_migrations() {
        log::info!("applied {}", migration);
    }

    Ok(report)
}
