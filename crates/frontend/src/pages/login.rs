//! Login page.
//!
//! Honors the guard's redirect contract: after a successful login the
//! `redirect` query parameter, when present, decides where to go next.

use playforge_http::types::{LoginRequest, UserProfile};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::use_session;
use crate::components::{Spinner, SpinnerSize};
use crate::routes::{LoginRedirectQuery, Route};

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let session = use_session();
    let navigator = use_navigator().expect("LoginPage must be rendered under a Router");
    let location = use_location();

    let identifier = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| Option::<String>::None);
    let is_submitting = use_state(|| false);

    let redirect_target = location
        .as_ref()
        .and_then(|l| l.query::<LoginRedirectQuery>().ok())
        .and_then(|q| q.redirect);

    let on_identifier_input = {
        let identifier = identifier.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            identifier.set(input.value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let session = session.clone();
        let navigator = navigator.clone();
        let identifier = identifier.clone();
        let password = password.clone();
        let error = error.clone();
        let is_submitting = is_submitting.clone();
        let redirect_target = redirect_target.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let session = session.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let is_submitting = is_submitting.clone();
            let redirect_target = redirect_target.clone();
            let request = LoginRequest {
                username_or_email: (*identifier).clone(),
                password: (*password).clone(),
            };

            is_submitting.set(true);
            error.set(None);

            wasm_bindgen_futures::spawn_local(async move {
                match session.auth().login(request).await {
                    Ok(response) => {
                        session.login(UserProfile::from(&response));
                        navigate_after_login(&navigator, redirect_target.as_deref());
                    }
                    Err(e) => {
                        error.set(Some(e.message()));
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    html! {
        <div class="max-w-md mx-auto mt-16 p-8 rounded-xl bg-white dark:bg-gray-900 shadow">
            <h1 class="text-2xl font-bold mb-6">{"Sign in"}</h1>

            if let Some(message) = (*error).clone() {
                <div class="mb-4 p-3 rounded bg-red-50 dark:bg-red-900/30 text-red-700 dark:text-red-300 text-sm">
                    {message}
                </div>
            }

            <form onsubmit={on_submit}>
                <label class="block mb-4">
                    <span class="text-sm text-gray-600 dark:text-gray-400">{"Username or email"}</span>
                    <input
                        type="text"
                        class="mt-1 w-full rounded border-gray-300 dark:bg-gray-800"
                        value={(*identifier).clone()}
                        oninput={on_identifier_input}
                        disabled={*is_submitting}
                    />
                </label>
                <label class="block mb-6">
                    <span class="text-sm text-gray-600 dark:text-gray-400">{"Password"}</span>
                    <input
                        type="password"
                        class="mt-1 w-full rounded border-gray-300 dark:bg-gray-800"
                        value={(*password).clone()}
                        oninput={on_password_input}
                        disabled={*is_submitting}
                    />
                </label>

                if *is_submitting {
                    <Spinner size={SpinnerSize::Small} text={Some("Signing in...".to_string())} />
                } else {
                    <button
                        type="submit"
                        class="w-full py-2 rounded bg-indigo-600 hover:bg-indigo-700 text-white font-medium"
                    >
                        {"Sign in"}
                    </button>
                }
            </form>

            <p class="mt-6 text-sm text-gray-600 dark:text-gray-400">
                {"New here? "}
                <Link<Route> to={Route::Signup} classes="text-indigo-600 dark:text-indigo-400">
                    {"Create an account"}
                </Link<Route>>
            </p>
        </div>
    }
}

/// Go back to the originally requested path, or home when none was carried
fn navigate_after_login(navigator: &Navigator, redirect: Option<&str>) {
    if let Some(path) = redirect {
        if let Some(route) = Route::recognize(path) {
            navigator.push(&route);
            return;
        }
    }
    navigator.push(&Route::Home);
}
