//! Route guard for views that require a session.
//!
//! The presence check runs on every render, so a token cleared elsewhere in
//! this tab is honored on the next guarded navigation. There is deliberately
//! no memoization and no storage-change listener.

use yew::prelude::*;
use yew_router::prelude::*;

use super::service::AuthService;
use crate::components::Spinner;
use crate::routes::{LoginRedirectQuery, Route};

/// Route guard props
#[derive(Properties, PartialEq)]
pub struct RouteGuardProps {
    /// Injected explicitly so tests can substitute a memory-backed service
    pub auth: AuthService,
    pub children: Children,
}

/// Wraps a protected view; unauthenticated visitors are sent to the login
/// page with the originally requested path carried in the `redirect` query
#[function_component(RouteGuard)]
pub fn route_guard(props: &RouteGuardProps) -> Html {
    let navigator = use_navigator().expect("RouteGuard must be rendered under a Router");
    let location = use_location();

    // Fresh presence check on every render, not just at mount
    let authenticated = props.auth.is_authenticated();

    {
        let requested = location
            .as_ref()
            .map(|l| l.path().to_string())
            .unwrap_or_else(|| "/".to_string());
        use_effect(move || {
            if !authenticated {
                let query = LoginRedirectQuery {
                    redirect: Some(requested),
                };
                let _ = navigator.push_with_query(&Route::Login, &query);
            }
            || ()
        });
    }

    if authenticated {
        html! { <>{ props.children.clone() }</> }
    } else {
        html! { <Spinner text={Some("Redirecting to login...".to_string())} /> }
    }
}
