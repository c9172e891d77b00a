//! HTTP driver for the review assignment service.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod client;
mod errors;
mod service;

pub use errors::HttpError;
pub use service::HttpApiService;
