pub mod action;
pub mod dialog;
pub mod event;
pub mod handler;
pub mod state;
