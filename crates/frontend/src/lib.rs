//! Playforge storefront web client.
//!
//! The interesting part of this crate is the authentication/session core:
//! [`storage`] owns the persistent slots, [`auth`] builds the token store,
//! API-backed auth service, session context and route guard on top of them,
//! and [`routes`] wires guarded views into the router. Everything else
//! (theme, sound preference, pages) is presentational plumbing around it.

pub mod app;
pub mod auth;
pub mod components;
pub mod config;
pub mod pages;
pub mod prefs;
pub mod routes;
pub mod storage;
pub mod theme;

pub use app::App;
pub use auth::context::{use_current_user, use_is_authenticated, use_session, SessionHandle};
pub use auth::guard::RouteGuard;
pub use auth::service::AuthService;
pub use auth::token::TokenStore;
pub use config::StoreConfig;
pub use routes::Route;
pub use storage::StorageBackend;
pub use theme::{Theme, ThemeProvider};
