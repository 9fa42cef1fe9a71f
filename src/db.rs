use tokio_postgres::{Client, NoTls};

use crate::conf::Conf;

pub fn pg_config(conf: &Conf) -> tokio_postgres::Config {
    let mut config = tokio_postgres::Config::new();
    config
        .host(&conf.host)
        .port(conf.port)
        .user(&conf.user)
        .password(&conf.password)
        .dbname(&conf.database);
    config
}

pub async fn connect(conf: &Conf) -> Result<Client, tokio_postgres::Error> {
    let (client, connection) = pg_config(conf).connect(NoTls).await?;

    // The connection object drives the socket; run it until the client drops.
    tokio::spawn(async move {
        if let Err(err) = connection.await {
            log::error!("postgres connection error: {}", err);
        }
    });

    Ok(client)
}
