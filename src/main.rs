mod analytics;
mod components;
mod config;
mod gallery;
mod interactions;
mod pages;

use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::loader::Loader;
use crate::gallery::Gallery;
use crate::interactions::TouchGuard;
use crate::pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Landing /> },
        Route::NotFound => html! {
            <main class="not-found">
                <h1>{"Page not found"}</h1>
                <a href="/">{"Back to the studio"}</a>
            </main>
        },
    }
}

#[function_component(App)]
fn app() -> Html {
    let loading = use_state(|| true);

    // Page boot: usage tracking and the touch guards start immediately; the
    // gallery and card polish wait for the loading overlay to clear, so the
    // first thing the visitor interacts with is the finished page.
    {
        let loading = loading.clone();
        use_effect_with_deps(
            move |_| {
                let config = config::get();
                TouchGuard::install();
                analytics::init(&config);

                let timeout = Timeout::new(config.loading_duration_ms, move || {
                    loading.set(false);
                    let _ = Gallery::mount(".image-gallery", &config);
                    interactions::init_cards();
                });
                timeout.forget();
                || ()
            },
            (),
        );
    }

    html! {
        <BrowserRouter>
            if *loading {
                <Loader />
            }
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    gloo_console::log!("Aurea Studio - page booting");
    yew::Renderer::<App>::new().render();
}
