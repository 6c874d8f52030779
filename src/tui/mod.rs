//! Terminal front-end: menu and table scenes over a [`crate::game::Run`].

pub mod app;
pub mod controller;
mod ui;
