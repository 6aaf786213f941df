use log::info;
use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;
use yew_router::prelude::*;

mod composer;
mod config;
mod router;
mod components {
    pub mod curriculum;
    pub mod footer;
    pub mod header;
    pub mod outcomes;
}
mod pages {
    pub mod home;
    pub mod not_found;
}
mod sections {
    pub mod about;
    pub mod aix;
    pub mod autonomous_car;
    pub mod hero;
    pub mod multi_sorter;
    pub mod programs;
    pub mod student_exchange;
}

use pages::{home::Home, not_found::NotFound};
use router::NavigationHandle;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    // One browser-backed source for the app's lifetime.
    let navigation = use_memo(|_| NavigationHandle::browser(), ());

    html! {
        <BrowserRouter>
            <Global css={css!(
                r#"
                html, body {
                    margin: 0;
                    padding: 0;
                    background: #1a1a1a;
                    color: #ffffff;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    overflow-x: hidden;
                }

                * {
                    box-sizing: border-box;
                }

                .program-section {
                    padding: 6rem 2rem;
                    border-top: 1px solid rgba(30, 144, 255, 0.1);
                }

                .program-section:nth-of-type(even) {
                    background: rgba(30, 144, 255, 0.03);
                }

                .program-section__inner {
                    max-width: 1100px;
                    margin: 0 auto;
                }

                .program-section__eyebrow {
                    color: #7EB2FF;
                    letter-spacing: 0.15em;
                    text-transform: uppercase;
                    font-size: 0.85rem;
                    margin: 0 0 0.75rem;
                }

                .program-section h2 {
                    font-size: 2.5rem;
                    margin: 0 0 1.5rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .program-section__lead {
                    color: #999;
                    font-size: 1.15rem;
                    line-height: 1.8;
                    max-width: 760px;
                }

                @media (max-width: 768px) {
                    .program-section {
                        padding: 4rem 1.25rem;
                    }

                    .program-section h2 {
                        font-size: 2rem;
                    }
                }
                "#
            )} />
            <ContextProvider<NavigationHandle> context={(*navigation).clone()}>
                <Switch<Route> render={switch} />
            </ContextProvider<NavigationHandle>>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
