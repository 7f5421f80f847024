use leptos::prelude::*;

#[component]
pub fn SoundOffIcon(
    #[prop(optional, default = "w-full h-full".to_string())] classes: String,
) -> impl IntoView {
    view! {
        <svg class=classes viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
            <path d="M11 5 6 9H2v6h4l5 4V5Z" fill="currentColor" />
            <path
                d="m23 9-6 6M17 9l6 6"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
            />
        </svg>
    }
}
