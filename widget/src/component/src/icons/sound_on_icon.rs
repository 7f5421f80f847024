use leptos::prelude::*;

#[component]
pub fn SoundOnIcon(
    #[prop(optional, default = "w-full h-full".to_string())] classes: String,
) -> impl IntoView {
    view! {
        <svg class=classes viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
            <path d="M11 5 6 9H2v6h4l5 4V5Z" fill="currentColor" />
            <path
                d="M15.5 8.5a5 5 0 0 1 0 7M19 5a10 10 0 0 1 0 14"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
            />
        </svg>
    }
}
