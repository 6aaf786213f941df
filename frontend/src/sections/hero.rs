use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config;

const ROTATING_WORDS: [&str; 4] = ["Drive", "Sort", "Create", "Explore"];

#[derive(Default, PartialEq)]
struct Headline {
    index: usize,
}

impl Headline {
    fn word(&self) -> &'static str {
        ROTATING_WORDS[self.index]
    }
}

impl Reducible for Headline {
    type Action = ();

    fn reduce(self: Rc<Self>, _: ()) -> Rc<Self> {
        Rc::new(Self {
            index: (self.index + 1) % ROTATING_WORDS.len(),
        })
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let headline = use_reducer(Headline::default);

    {
        let dispatcher = headline.dispatcher();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(config::HEADLINE_ROTATION_MS, move || {
                    dispatcher.dispatch(());
                });
                move || drop(interval)
            },
            (),
        );
    }

    html! {
        <section class="hero">
            <div class="hero__background"></div>
            <div class="hero__content">
                <p class="hero__eyebrow">{"BrainAI Academy"}</p>
                <h1 class="hero__title">
                    {"Teach machines to "}
                    <span class="hero__word" key={headline.index}>{headline.word()}</span>
                </h1>
                <p class="hero__subtitle">
                    {"Project-based AI programs for high school and university students. Build real robots, train real models, and ship them onto real hardware."}
                </p>
                <div class="hero__actions">
                    <a href="#programs" class="hero__cta">
                        <span>{"Explore programs"}</span>
                        <i class="arrow">{"→"}</i>
                    </a>
                    <a href="#student-exchange" class="hero__secondary">{"Student exchange"}</a>
                </div>
            </div>
            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 8rem 2rem 4rem;
                    overflow: hidden;
                }

                .hero__background {
                    position: absolute;
                    inset: 0;
                    background: radial-gradient(circle at 30% 20%, rgba(30, 144, 255, 0.25), transparent 55%),
                                radial-gradient(circle at 80% 70%, rgba(65, 105, 225, 0.2), transparent 50%);
                    z-index: -1;
                }

                .hero__content {
                    max-width: 820px;
                    text-align: center;
                }

                .hero__eyebrow {
                    color: #7EB2FF;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    font-size: 0.9rem;
                    margin-bottom: 1.5rem;
                }

                .hero__title {
                    font-size: 4.2rem;
                    line-height: 1.1;
                    margin: 0 0 2rem;
                    color: #ffffff;
                }

                .hero__word {
                    display: inline-block;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                    animation: heroWordIn 0.5s forwards;
                }

                @keyframes heroWordIn {
                    from {
                        opacity: 0;
                        transform: translateY(20px);
                    }
                    to {
                        opacity: 1;
                        transform: translateY(0);
                    }
                }

                .hero__subtitle {
                    color: #999;
                    font-size: 1.25rem;
                    line-height: 1.6;
                    margin-bottom: 2.5rem;
                }

                .hero__actions {
                    display: flex;
                    gap: 1.5rem;
                    justify-content: center;
                    flex-wrap: wrap;
                }

                .hero__cta {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 1rem 2rem;
                    background: linear-gradient(45deg, #1E90FF, #4169E1);
                    color: white;
                    text-decoration: none;
                    border-radius: 8px;
                    font-size: 1.1rem;
                    transition: all 0.3s ease;
                }

                .hero__cta:hover {
                    transform: translateY(-2px);
                    box-shadow: 0 4px 20px rgba(30, 144, 255, 0.3);
                }

                .hero__cta .arrow {
                    transition: transform 0.3s ease;
                }

                .hero__cta:hover .arrow {
                    transform: translateX(5px);
                }

                .hero__secondary {
                    padding: 1rem 2rem;
                    color: #7EB2FF;
                    text-decoration: none;
                    border: 1px solid rgba(126, 178, 255, 0.4);
                    border-radius: 8px;
                    transition: border-color 0.3s ease;
                }

                .hero__secondary:hover {
                    border-color: #7EB2FF;
                }

                @media (max-width: 768px) {
                    .hero__title {
                        font-size: 2.8rem;
                    }

                    .hero__subtitle {
                        font-size: 1rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}

pub fn view() -> Html {
    html! { <Hero /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headline_wraps_after_last_word() {
        let mut headline = Rc::new(Headline::default());
        for _ in 0..ROTATING_WORDS.len() {
            headline = headline.reduce(());
        }
        assert_eq!(headline.word(), ROTATING_WORDS[0]);
    }
}
