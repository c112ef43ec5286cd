//! HTTP plumbing for the appointments backend.

mod client;

pub use client::{HttpClient, HttpClientBuilder};
