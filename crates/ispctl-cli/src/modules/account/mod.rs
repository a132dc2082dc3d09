mod actions;
pub(crate) mod args;
mod http;

pub(crate) use actions::handle_account;
