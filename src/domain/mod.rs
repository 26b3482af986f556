pub mod payment;
pub mod ports;
pub mod shipping;
