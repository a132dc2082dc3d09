pub(crate) mod account;
pub(crate) mod auth;
pub(crate) mod customers;
pub(crate) mod hotspot;
pub(crate) mod invoices;
pub(crate) mod payments;
pub(crate) mod plans;
pub(crate) mod pppoe;
pub(crate) mod routers;
pub(crate) mod shared;
pub(crate) mod sms;
pub(crate) mod system;
