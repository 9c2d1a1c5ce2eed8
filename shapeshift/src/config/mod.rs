//! Server configuration.
//!
//! - [`Config`]: the YAML file as a whole
//! - [`ServerConfig`]: bind address and upload limit
//! - [`CorsConfig`]: which browser origins may call the API

mod cors;
mod main;
mod server;

pub use cors::CorsConfig;
pub use main::Config;
pub use server::ServerConfig;
