//! Signup page

use playforge_http::types::{SignupRequest, UserProfile};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::use_session;
use crate::components::{Spinner, SpinnerSize};
use crate::routes::Route;

#[function_component(SignupPage)]
pub fn signup_page() -> Html {
    let session = use_session();
    let navigator = use_navigator().expect("SignupPage must be rendered under a Router");

    let username = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| Option::<String>::None);
    let is_submitting = use_state(|| false);

    let on_username_input = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
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
        let username = username.clone();
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let is_submitting = is_submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let session = session.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let is_submitting = is_submitting.clone();
            let request = SignupRequest {
                username: (*username).clone(),
                email: (*email).clone(),
                password: (*password).clone(),
                country: None,
            };

            is_submitting.set(true);
            error.set(None);

            wasm_bindgen_futures::spawn_local(async move {
                match session.auth().signup(request).await {
                    Ok(response) => {
                        session.login(UserProfile::from(&response));
                        navigator.push(&Route::Home);
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
            <h1 class="text-2xl font-bold mb-6">{"Create your account"}</h1>

            if let Some(message) = (*error).clone() {
                <div class="mb-4 p-3 rounded bg-red-50 dark:bg-red-900/30 text-red-700 dark:text-red-300 text-sm">
                    {message}
                </div>
            }

            <form onsubmit={on_submit}>
                <label class="block mb-4">
                    <span class="text-sm text-gray-600 dark:text-gray-400">{"Username"}</span>
                    <input
                        type="text"
                        class="mt-1 w-full rounded border-gray-300 dark:bg-gray-800"
                        value={(*username).clone()}
                        oninput={on_username_input}
                        disabled={*is_submitting}
                    />
                </label>
                <label class="block mb-4">
                    <span class="text-sm text-gray-600 dark:text-gray-400">{"Email"}</span>
                    <input
                        type="email"
                        class="mt-1 w-full rounded border-gray-300 dark:bg-gray-800"
                        value={(*email).clone()}
                        oninput={on_email_input}
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
                    <Spinner size={SpinnerSize::Small} text={Some("Creating account...".to_string())} />
                } else {
                    <button
                        type="submit"
                        class="w-full py-2 rounded bg-indigo-600 hover:bg-indigo-700 text-white font-medium"
                    >
                        {"Sign up"}
                    </button>
                }
            </form>

            <p class="mt-6 text-sm text-gray-600 dark:text-gray-400">
                {"Already have an account? "}
                <Link<Route> to={Route::Login} classes="text-indigo-600 dark:text-indigo-400">
                    {"Sign in"}
                </Link<Route>>
            </p>
        </div>
    }
}
