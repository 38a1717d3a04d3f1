//! HTTP client shared by external service adapters

mod client;

pub use client::{HttpClient, HttpClientBuilder};
