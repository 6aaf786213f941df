use web_sys::MouseEvent;
use yew::prelude::*;
use yew::{Children, Properties};

use crate::components::outcomes::{Outcome, Outcomes};

struct Destination {
    flag: &'static str,
    city: &'static str,
    host: &'static str,
}

struct ItineraryDay {
    days: &'static str,
    activity: &'static str,
}

const DESTINATIONS: [Destination; 6] = [
    Destination { flag: "🇫🇮", city: "Helsinki", host: "University robotics lab and an AI start-up visit" },
    Destination { flag: "🇩🇪", city: "Munich", host: "Autonomous driving research group" },
    Destination { flag: "🇯🇵", city: "Tokyo", host: "Joint workshop with a partner high school" },
    Destination { flag: "🇺🇸", city: "Boston", host: "University makerspace and demo evening" },
    Destination { flag: "🇸🇬", city: "Singapore", host: "Smart-city and logistics automation tour" },
    Destination { flag: "🇨🇦", city: "Toronto", host: "Machine learning institute open lab" },
];

const ITINERARY: [ItineraryDay; 4] = [
    ItineraryDay { days: "Days 1-3", activity: "Campus and lab visits, meet your host team" },
    ItineraryDay { days: "Days 4-9", activity: "Joint hackathon with local students on a shared AI problem" },
    ItineraryDay { days: "Days 10-12", activity: "Industry visits and cultural programme" },
    ItineraryDay { days: "Days 13-14", activity: "Final showcase where every team presents its project" },
];

static OUTCOMES: [Outcome; 1] = [Outcome {
    quote: "Presenting our car to engineers who build the real thing was terrifying and amazing. They asked about our data cleaning first.",
    name: "Yuna S.",
    cohort: "Student Exchange, Munich",
}];

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(StudentExchange)]
pub fn student_exchange() -> Html {
    html! {
        <section class="program-section student-exchange">
            <div class="program-section__inner">
                <p class="program-section__eyebrow">{"Program 04"}</p>
                <h2>{"Student Exchange"}</h2>
                <p class="program-section__lead">
                    {"Two weeks abroad with the project you built. Graduates of our programs travel to partner universities and labs, team up with local students, and present their work on an international stage."}
                </p>

                <div class="exchange__destinations">
                    { for DESTINATIONS.iter().map(|destination| html! {
                        <div class="exchange__destination">
                            <span class="exchange__flag">{destination.flag}</span>
                            <div>
                                <h3>{destination.city}</h3>
                                <p>{destination.host}</p>
                            </div>
                        </div>
                    }) }
                </div>

                <div class="exchange__itinerary">
                    <h3>{"A typical exchange"}</h3>
                    { for ITINERARY.iter().map(|day| html! {
                        <div class="exchange__day">
                            <span>{day.days}</span>
                            <p>{day.activity}</p>
                        </div>
                    }) }
                </div>

                <div class="exchange__faq">
                    <h3>{"Questions from parents"}</h3>
                    <FaqItem question="Who can apply?">
                        <p>{"Students who completed at least one BrainAI Academy program and presented at its demo day. Applications open every spring."}</p>
                    </FaqItem>
                    <FaqItem question="Is there supervision?">
                        <p>{"Yes. Every group travels with two BrainAI instructors, and students stay in university guest housing or with vetted host families."}</p>
                    </FaqItem>
                    <FaqItem question="Do I need to speak the local language?">
                        <p>{"No. All workshops and presentations are held in English, and we run a short presentation-skills session before departure."}</p>
                    </FaqItem>
                    <FaqItem question="Are scholarships available?">
                        <p>{"Partner schools fund a number of places each year. Ask your school's program coordinator or contact us directly."}</p>
                    </FaqItem>
                </div>

                <Outcomes heading="From the road" items={&OUTCOMES[..]} />
            </div>
            <style>
                {r#"
                .exchange__destinations {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 1rem;
                    margin-top: 2.5rem;
                }

                .exchange__destination {
                    display: flex;
                    gap: 1rem;
                    align-items: flex-start;
                    padding: 1.5rem;
                    border: 1px solid rgba(30, 144, 255, 0.15);
                    border-radius: 12px;
                }

                .exchange__flag {
                    font-size: 2rem;
                }

                .exchange__destination h3 {
                    margin: 0 0 0.25rem;
                    color: #ffffff;
                }

                .exchange__destination p {
                    margin: 0;
                    color: #999;
                }

                .exchange__itinerary,
                .exchange__faq {
                    margin-top: 3rem;
                }

                .exchange__itinerary h3,
                .exchange__faq h3 {
                    font-size: 1.6rem;
                    color: #ffffff;
                    margin-bottom: 1.5rem;
                }

                .exchange__day {
                    display: flex;
                    gap: 2rem;
                    padding: 1rem 0;
                    border-bottom: 1px solid rgba(30, 144, 255, 0.1);
                }

                .exchange__day span {
                    color: #7EB2FF;
                    min-width: 7rem;
                    font-weight: 600;
                }

                .exchange__day p {
                    margin: 0;
                    color: #ccc;
                }

                .faq-item {
                    background: rgba(26, 26, 26, 0.85);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 12px;
                    margin-bottom: 1rem;
                    overflow: hidden;
                    transition: all 0.3s ease;
                }

                .faq-item:hover {
                    border-color: rgba(30, 144, 255, 0.3);
                }

                .faq-question {
                    width: 100%;
                    padding: 1.5rem;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.1rem;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .faq-question:hover {
                    color: #7EB2FF;
                }

                .toggle-icon {
                    font-size: 1.5rem;
                    color: #7EB2FF;
                }

                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.5s ease;
                    padding: 0 1.5rem;
                }

                .faq-item.open .faq-answer {
                    max-height: 400px;
                    padding-bottom: 1.5rem;
                }

                .faq-answer p {
                    color: #999;
                    line-height: 1.7;
                    margin: 0;
                }
                "#}
            </style>
        </section>
    }
}

pub fn view() -> Html {
    html! { <StudentExchange /> }
}
