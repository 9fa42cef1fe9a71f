pub mod conf;
pub mod db;
pub mod error;
pub mod migrate;
