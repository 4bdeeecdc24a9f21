//! The campaign listing screen: its data, its view and its controller.

pub mod controller;
pub mod model;
pub mod view;
