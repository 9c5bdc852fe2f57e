//! Petals Magazine - GUI Library
//!
//! Core application types for the Petals desktop reader, built with
//! Iced 0.14.0 using the Elm architecture.

pub mod app;
pub mod component;
pub mod constants;
pub mod message;
pub mod state;
pub mod theme;
pub mod view;
