//! Application routes

use serde::{Deserialize, Serialize};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::{AuthService, RouteGuard};
use crate::pages::{AccountPage, HomePage, LibraryPage, LoginPage, SignupPage};

/// Storefront routes
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/auth/login")]
    Login,
    #[at("/auth/signup")]
    Signup,
    #[at("/account")]
    Account,
    #[at("/library")]
    Library,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Query carried to the login page by guarded views; the login page reads it
/// back and navigates there after a successful login
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct LoginRedirectQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

/// Route switch; Account and Library are session-gated
pub fn switch(route: Route, auth: AuthService) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Signup => html! { <SignupPage /> },
        Route::Account => html! {
            <RouteGuard auth={auth}>
                <AccountPage />
            </RouteGuard>
        },
        Route::Library => html! {
            <RouteGuard auth={auth}>
                <LibraryPage />
            </RouteGuard>
        },
        Route::NotFound => html! {
            <div class="text-center p-10">
                <h1 class="text-2xl font-bold">{"404"}</h1>
                <p class="text-gray-600 dark:text-gray-400">{"This page does not exist."}</p>
            </div>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_route_matches_auth_namespace() {
        assert_eq!(Route::recognize("/auth/login"), Some(Route::Login));
        assert_eq!(Route::recognize("/auth/signup"), Some(Route::Signup));
    }

    #[test]
    fn guarded_paths_resolve() {
        assert_eq!(Route::recognize("/account"), Some(Route::Account));
        assert_eq!(Route::recognize("/library"), Some(Route::Library));
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert_eq!(Route::recognize("/no-such-page"), Some(Route::NotFound));
    }

    // Both sides of the redirect contract depend on the requested path
    // surviving the query string intact
    #[test]
    fn redirect_query_percent_encodes_the_path() {
        let query = LoginRedirectQuery {
            redirect: Some("/account".to_string()),
        };
        let encoded = serde_urlencoded::to_string(&query).unwrap();
        assert_eq!(encoded, "redirect=%2Faccount");

        let decoded: LoginRedirectQuery = serde_urlencoded::from_str(&encoded).unwrap();
        assert_eq!(decoded.redirect.as_deref(), Some("/account"));
    }

    #[test]
    fn redirect_query_is_omitted_when_empty() {
        let query = LoginRedirectQuery { redirect: None };
        assert_eq!(serde_urlencoded::to_string(&query).unwrap(), "");

        let decoded: LoginRedirectQuery = serde_urlencoded::from_str("").unwrap();
        assert_eq!(decoded.redirect, None);
    }
}
