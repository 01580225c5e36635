pub mod carrier_service;
pub mod order_query;
pub mod order_service;

pub use carrier_service::*;
pub use order_service::*;
