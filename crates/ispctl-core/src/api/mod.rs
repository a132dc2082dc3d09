pub mod account;
pub mod auth;
pub mod customers;
pub mod hotspot;
pub mod payments;
pub mod plans;
pub mod pppoe;
pub mod routers;
pub mod sms;
pub mod stats;
