//! Contact model and the controller the UI talks to.

pub mod contact;
pub mod controller;
pub mod error;
