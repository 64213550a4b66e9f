//! HTTP front end for the bulk vault client.

pub mod config;
pub mod error;
pub mod gateway;
pub mod routes;

pub use config::Config;
pub use error::{ApiError, Result};
pub use gateway::{RpcGateway, VaultGateway};
pub use routes::router;
