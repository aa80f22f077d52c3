pub mod analytics;
pub mod holding;
pub mod portfolio;
pub mod price;
pub mod settings;
