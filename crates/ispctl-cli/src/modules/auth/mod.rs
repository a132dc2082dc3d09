mod actions;
pub(crate) mod args;
pub(crate) mod session;
pub(crate) mod store;

pub(crate) use actions::{
    handle_login_command, handle_logout_command, handle_register_command, handle_status,
    handle_whoami,
};
