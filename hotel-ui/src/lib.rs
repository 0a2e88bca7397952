//! Hotel UI - terminal client for the CQRS Hotel demo
//!
//! Locations are resolved by a small path router to pages, which render from
//! a reducer-driven state store. The shell ties it together.

pub mod app;
pub mod config;
pub mod forms;
pub mod logger;
pub mod pages;
pub mod router;
pub mod routes;
pub mod shell;
pub mod store;

pub use app::{App, AppError};
pub use config::Args;
pub use pages::Page;
pub use router::{PathPattern, Route, RouteContext, RouteError, Router, match_uri};
pub use store::{Action, AppState, Store};
