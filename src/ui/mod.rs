//! Screen-space UI: menus and their navigation

pub mod menu;

pub use menu::{Button, Menu, MenuAction, MenuResponse};
