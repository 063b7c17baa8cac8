use yew::prelude::*;

/// Full-screen overlay shown while the page boots; the app unmounts it
/// after the configured loading delay.
#[function_component(Loader)]
pub fn loader() -> Html {
    html! {
        <div class="loader" aria-hidden="true">
            <div class="loader-mark">{"Aurea"}</div>
            <div class="loader-spinner"></div>
            <style>
                {r#"
    .loader {
        position: fixed;
        inset: 0;
        z-index: 100;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        gap: 1.5rem;
        background: #151210;
    }
    .loader-mark {
        font-size: 1.6rem;
        letter-spacing: 0.35em;
        text-transform: uppercase;
        color: #d8b98a;
    }
    .loader-spinner {
        width: 36px;
        height: 36px;
        border-radius: 50%;
        border: 3px solid rgba(216, 185, 138, 0.25);
        border-top-color: #d8b98a;
        animation: loader-spin 0.9s linear infinite;
    }
    @keyframes loader-spin {
        to { transform: rotate(360deg); }
    }
                "#}
            </style>
        </div>
    }
}
