pub mod aggregation_service;
pub mod analysis_service;
pub mod currency_service;
