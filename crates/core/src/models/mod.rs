pub mod asset;
pub mod chart;
pub mod price;
pub mod protocol;
pub mod settings;
pub mod snapshot;
