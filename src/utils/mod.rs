pub mod config;
pub mod error;
pub mod generator;
pub mod series;
pub mod table;
pub mod yaml;
