//! HTTP adapter: JSON endpoints wrapping the auth and scoring modules.

pub mod handlers;
pub mod router;

pub use router::{UdaanState, udaan_router};
