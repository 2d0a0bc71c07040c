mod optimizer_service;

pub use optimizer_service::OptimizerService;
