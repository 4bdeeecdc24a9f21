//! Campaign networking: the service seam, its HTTP implementation and the
//! fetcher that runs requests for the UI loop.

pub mod error;
pub mod fetcher;
pub mod http;
pub mod request;
pub mod service;
