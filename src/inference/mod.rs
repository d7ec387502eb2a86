mod client;

pub use client::{HttpInferenceClient, InferenceClient};
