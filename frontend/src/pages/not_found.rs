use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <h1>{"404"}</h1>
            <p>{"This page doesn't exist. Everything we teach lives on the home page."}</p>
            <Link<Route> to={Route::Home} classes="not-found-page__back">
                {"Go to BrainAI Academy"}
            </Link<Route>>
            <style>
                {r#"
                .not-found-page {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 2rem;
                }

                .not-found-page h1 {
                    font-size: 6rem;
                    margin: 0;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .not-found-page p {
                    color: #999;
                    font-size: 1.2rem;
                    margin: 1rem 0 2rem;
                }

                .not-found-page__back {
                    color: #7EB2FF;
                    text-decoration: none;
                    border: 1px solid rgba(126, 178, 255, 0.4);
                    border-radius: 8px;
                    padding: 0.75rem 1.5rem;
                }
                "#}
            </style>
        </div>
    }
}
