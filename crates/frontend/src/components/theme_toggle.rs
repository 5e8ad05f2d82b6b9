//! Light/dark toggle button

use yew::prelude::*;

use crate::theme::{use_theme, ThemeAction};

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme = use_theme();

    let on_click = {
        let theme = theme.clone();
        Callback::from(move |_| {
            theme.dispatch(ThemeAction::Toggle);
        })
    };

    let label = if theme.theme.resolved_dark() {
        "☀"
    } else {
        "🌙"
    };

    html! {
        <button
            class="p-2 rounded-lg hover:bg-gray-100 dark:hover:bg-gray-800"
            onclick={on_click}
            title="Toggle theme"
        >
            {label}
        </button>
    }
}
