pub mod error;
pub mod reconciler;
pub mod services;
pub mod session;
pub mod staging;
pub mod upload_client;
