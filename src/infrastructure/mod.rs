pub mod id;
pub mod providers;
pub mod shipping;
