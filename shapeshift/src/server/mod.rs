//! HTTP front end: an upload form and a multipart conversion endpoint.

mod convert_server;
mod cors;
mod filename;
mod handlers;
mod routes;

pub use convert_server::*;
pub use filename::{output_filename, sanitize_stem};
