//! Migration runs against a live postgres.
//!
//! Ignored by default. Point the PG_* variables at a scratch database and
//! run with `cargo test -- --ignored`.

use mycelium_migrations::{conf::Conf, migrate};

#[tokio::test]
#[ignore = "requires a running postgres"]
async fn second_run_applies_nothing() {
    let conf = Conf::from_env().unwrap();

    migrate::run(&conf).await.unwrap();
    let second = migrate::run(&conf).await.unwrap();

    assert!(second.applied_migrations().is_empty());
}
