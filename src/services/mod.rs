pub mod aggregate;
pub mod composite;
pub mod export;
pub mod latest;
pub mod normalize;
pub mod refresh;
pub mod report_service;
pub mod scoring;
pub mod trend;
