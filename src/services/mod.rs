pub mod distribute_service;

pub use distribute_service::{DistributeError, Distributor};
