//! Landing page

use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::use_is_authenticated;
use crate::components::ThemeToggle;
use crate::routes::Route;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let is_authenticated = use_is_authenticated();

    html! {
        <div class="max-w-3xl mx-auto mt-16 p-8">
            <div class="flex items-center justify-between mb-10">
                <h1 class="text-3xl font-bold">{"Playforge"}</h1>
                <div class="flex items-center gap-3">
                    <ThemeToggle />
                    if is_authenticated {
                        <Link<Route> to={Route::Account} classes="text-indigo-600 dark:text-indigo-400">
                            {"Account"}
                        </Link<Route>>
                    } else {
                        <Link<Route> to={Route::Login} classes="text-indigo-600 dark:text-indigo-400">
                            {"Sign in"}
                        </Link<Route>>
                    }
                </div>
            </div>

            <p class="text-lg text-gray-600 dark:text-gray-400 mb-8">
                {"Your digital game marketplace."}
            </p>

            <Link<Route>
                to={Route::Library}
                classes="inline-block px-5 py-2 rounded bg-indigo-600 hover:bg-indigo-700 text-white font-medium"
            >
                {"Go to your library"}
            </Link<Route>>
        </div>
    }
}
