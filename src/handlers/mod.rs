pub mod carrier;
pub mod geo;
pub mod order;

pub use carrier::carrier_config;
pub use geo::geo_config;
pub use order::order_config;
