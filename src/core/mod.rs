pub mod aqi;
pub mod dispatch;
pub mod engine;
pub mod error;
pub mod pollution;
pub mod report;
pub mod types;
