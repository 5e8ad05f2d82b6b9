//! Account page (session-gated)

use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::use_session;
use crate::prefs;
use crate::routes::Route;

#[function_component(AccountPage)]
pub fn account_page() -> Html {
    let session = use_session();
    let navigator = use_navigator().expect("AccountPage must be rendered under a Router");
    let sound = use_state(prefs::sound_enabled);

    let on_logout = {
        let session = session.clone();
        Callback::from(move |_| {
            // Optimistic: local state drops immediately, the server call is
            // fire-and-forget
            session.logout();
            navigator.push(&Route::Home);
        })
    };

    let on_sound_toggle = {
        let sound = sound.clone();
        Callback::from(move |_| {
            let enabled = !*sound;
            prefs::set_sound_enabled(enabled);
            sound.set(enabled);
        })
    };

    html! {
        <div class="max-w-lg mx-auto mt-16 p-8 rounded-xl bg-white dark:bg-gray-900 shadow">
            <h1 class="text-2xl font-bold mb-6">{"Your account"}</h1>

            {match session.current_user() {
                Some(user) => html! {
                    <dl class="space-y-2 mb-8">
                        <div>
                            <dt class="text-sm text-gray-500">{"Username"}</dt>
                            <dd>{user.username}</dd>
                        </div>
                        <div>
                            <dt class="text-sm text-gray-500">{"Email"}</dt>
                            <dd>{user.email}</dd>
                        </div>
                        <div>
                            <dt class="text-sm text-gray-500">{"Role"}</dt>
                            <dd>{user.role}</dd>
                        </div>
                    </dl>
                },
                // Token present but profile cache was empty
                None => html! {
                    <p class="mb-8 text-gray-600 dark:text-gray-400">
                        {"Signed in."}
                    </p>
                },
            }}

            <label class="flex items-center gap-2 mb-8 text-sm">
                <input type="checkbox" checked={*sound} onchange={on_sound_toggle} />
                {"UI sounds"}
            </label>

            <button
                class="px-4 py-2 rounded bg-gray-200 dark:bg-gray-800 hover:bg-gray-300 dark:hover:bg-gray-700"
                onclick={on_logout}
            >
                {"Sign out"}
            </button>
        </div>
    }
}
