// Adapters layer: concrete transports for the remote NLP service.

pub mod http;

pub use http::HttpTransport;
