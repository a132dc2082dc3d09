pub(crate) mod args;
mod format_table;

pub(crate) use format_table::{cell, money_cell, number_cell, print_table};
