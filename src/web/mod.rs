//! Web interface module
//!
//! Exposes the measure store as a small JSON API over HTTP.

mod handlers;
mod server;

pub use handlers::WELCOME_TEXT;
pub use server::{build_router, run_web_server, serve};
