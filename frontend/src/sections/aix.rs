use yew::prelude::*;

use crate::components::curriculum::{Curriculum, CurriculumStep};
use crate::components::outcomes::{Outcome, Outcomes};

struct Track {
    x: &'static str,
    example: &'static str,
}

const TRACKS: [Track; 6] = [
    Track { x: "Music", example: "A melody generator trained on folk songs from your own region" },
    Track { x: "Biology", example: "Counting plankton in microscope photos with an image classifier" },
    Track { x: "Sport", example: "Pose estimation that scores a basketball free-throw technique" },
    Track { x: "Art", example: "Style transfer that repaints the school building as a woodblock print" },
    Track { x: "Environment", example: "Predicting classroom CO2 levels from cheap sensor data" },
    Track { x: "Language", example: "A chatbot that answers questions about your town's history" },
];

static STEPS: [CurriculumStep; 5] = [
    CurriculumStep {
        title: "Python and data foundations",
        detail: "Notebooks, NumPy, and plotting. Students load, clean, and visualise a small dataset from their chosen field.",
        deliverable: None,
    },
    CurriculumStep {
        title: "Machine learning basics",
        detail: "Regression, classification, train and validation splits, and why accuracy alone can lie.",
        deliverable: Some("A baseline model on the team's own data"),
    },
    CurriculumStep {
        title: "Neural networks",
        detail: "From a single neuron to convolutional networks, trained with TensorFlow on the team's problem.",
        deliverable: None,
    },
    CurriculumStep {
        title: "Project sprint",
        detail: "Teams iterate on their model with weekly mentor reviews, collecting more data where the model struggles.",
        deliverable: Some("A working prototype and an error analysis"),
    },
    CurriculumStep {
        title: "Demo day",
        detail: "Teams present to parents, teachers, and invited researchers. The best projects are entered into national student AI competitions.",
        deliverable: Some("A public demo and a two-page project report"),
    },
];

static OUTCOMES: [Outcome; 2] = [
    Outcome {
        quote: "I thought AI was for computer people. Now I use it in the lab every week to count cells.",
        name: "Jiwoo K.",
        cohort: "AI+X, Biology track",
    },
    Outcome {
        quote: "Our free-throw scorer was wrong half the time until we filmed 300 more shots. That taught me more than any lecture.",
        name: "Daniel P.",
        cohort: "AI+X, Sport track",
    },
];

#[function_component(Aix)]
pub fn aix() -> Html {
    html! {
        <section class="program-section aix">
            <div class="program-section__inner">
                <p class="program-section__eyebrow">{"Program 01"}</p>
                <h2>{"AI+X Project"}</h2>
                <p class="program-section__lead">
                    {"AI is a tool, X is what you care about. In twelve weeks teams apply machine learning to a question from another subject and present what they found."}
                </p>

                <div class="aix__tracks">
                    { for TRACKS.iter().map(|track| html! {
                        <div class="aix__track">
                            <h3>{format!("AI + {}", track.x)}</h3>
                            <p>{track.example}</p>
                        </div>
                    }) }
                </div>

                <Curriculum heading="Twelve weeks, five stages" steps={&STEPS[..]} />
                <Outcomes items={&OUTCOMES[..]} />
            </div>
            <style>
                {r#"
                .aix__tracks {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 1rem;
                    margin-top: 2.5rem;
                }

                .aix__track {
                    padding: 1.5rem;
                    border: 1px solid rgba(30, 144, 255, 0.15);
                    border-radius: 12px;
                    background: rgba(30, 144, 255, 0.05);
                }

                .aix__track h3 {
                    margin: 0 0 0.5rem;
                    color: #7EB2FF;
                }

                .aix__track p {
                    margin: 0;
                    color: #999;
                    line-height: 1.6;
                }
                "#}
            </style>
        </section>
    }
}

pub fn view() -> Html {
    html! { <Aix /> }
}
