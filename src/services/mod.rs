mod error;
mod http_optimizer;

pub use error::TransportError;
pub use http_optimizer::HttpOptimizerService;
