//! Authentication module

pub mod context;
pub mod guard;
pub mod profile;
pub mod service;
pub mod token;

// Re-export commonly used items
pub use context::{
    use_current_user, use_is_authenticated, use_session, Session, SessionHandle, SessionProvider,
};
pub use guard::RouteGuard;
pub use profile::ProfileCache;
pub use service::AuthService;
pub use token::TokenStore;
