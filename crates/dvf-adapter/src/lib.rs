/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public DeversiFi adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;
pub mod ws;

// Re-export commonly used types from auth
pub use auth::EcdsaSigner;

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    DvfClient,
    DvfError,
    Result,
};

// Re-export all types
pub use types::*;

// Re-export websocket endpoint resolution
pub use ws::socket_endpoint;
