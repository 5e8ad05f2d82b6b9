//! Application root

use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::{AuthService, SessionProvider};
use crate::routes::{switch, Route};
use crate::theme::ThemeProvider;

#[function_component(App)]
pub fn app() -> Html {
    // One service instance per tab; the storage backend is probed once here
    let auth = use_memo((), |_| {
        AuthService::new().expect("failed to construct auth service")
    });
    let auth = (*auth).clone();

    let render = {
        let auth = auth.clone();
        Callback::from(move |route: Route| switch(route, auth.clone()))
    };

    html! {
        <BrowserRouter>
            <ThemeProvider>
                <SessionProvider auth={auth}>
                    <Switch<Route> render={render} />
                </SessionProvider>
            </ThemeProvider>
        </BrowserRouter>
    }
}
