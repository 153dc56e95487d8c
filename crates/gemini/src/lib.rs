//! Client for the upstream generative-language API.
//!
//! Turns trip planning parameters into a list of untyped destination
//! candidates:
//!
//! 1. resolve the API key ([`credentials`]) before any network I/O,
//! 2. build the prompt and request body ([`request`]),
//! 3. POST it with a bounded timeout ([`client`]),
//! 4. unwrap the provider envelope and parse the JSON array it carries
//!    ([`envelope`]).
//!
//! No retries are performed; one failed attempt is one failed request.

pub mod client;
pub mod config;
pub mod credentials;
pub mod envelope;
pub mod error;
pub mod request;

pub use client::GeminiClient;
pub use config::GeminiConfig;
pub use error::{MalformedResponse, UpstreamError};
