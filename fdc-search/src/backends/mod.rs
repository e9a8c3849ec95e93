//! Concrete [`crate::backend::FoodSearchBackend`] implementations.

pub mod fdc;

pub use fdc::FdcClient;
