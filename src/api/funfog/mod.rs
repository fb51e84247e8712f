pub mod client;
pub mod models;

pub use client::FunfogClient;
pub use models::{ApiError, TransferOutcome, TransferRequest};
