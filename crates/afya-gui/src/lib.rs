//! Afya - GUI Library
//!
//! Core application types and modules for the Afya desktop client: a
//! community board for drug availability with a searchable feed, a drug
//! catalog, and an asynchronous post-composition flow.
//!
//! Built with Iced 0.14.0 using the Elm architecture (State, Message,
//! Update, View).

pub mod app;
pub mod component;
pub mod error;
pub mod handler;
pub mod message;
pub mod service;
pub mod state;
pub mod theme;
pub mod view;

pub use app::App;
