pub mod api;
pub mod config;
pub mod correlator;
pub mod engine;
pub mod entities;
pub mod error;
pub mod external;
pub mod host;
pub mod registry;
