//! Library page (session-gated)

use yew::prelude::*;

use crate::auth::use_current_user;

#[function_component(LibraryPage)]
pub fn library_page() -> Html {
    let user = use_current_user();

    let greeting = match user {
        Some(user) => format!("{}'s library", user.username),
        None => "Your library".to_string(),
    };

    html! {
        <div class="max-w-3xl mx-auto mt-16 p-8">
            <h1 class="text-2xl font-bold mb-6">{greeting}</h1>
            <p class="text-gray-600 dark:text-gray-400">
                {"Games you own will show up here."}
            </p>
        </div>
    }
}
