pub mod format;
pub mod layout;
pub mod screen;
pub mod unit_interval;
