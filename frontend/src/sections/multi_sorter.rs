use yew::prelude::*;

use crate::components::curriculum::{Curriculum, CurriculumStep};
use crate::components::outcomes::{Outcome, Outcomes};

struct Rule {
    label: &'static str,
    value: &'static str,
}

const RULES: [Rule; 4] = [
    Rule { label: "Objects", value: "30 mixed items: blocks, bottle caps, and fruit" },
    Rule { label: "Classes", value: "Sorted by colour, shape, and material" },
    Rule { label: "Time limit", value: "3 minutes per run" },
    Rule { label: "Scoring", value: "Correct bins minus misplaced items, speed as tiebreaker" },
];

static STEPS: [CurriculumStep; 5] = [
    CurriculumStep {
        title: "Build the sorter",
        detail: "Assemble the conveyor belt, servo gates, and camera mount from the kit, and wire them to the controller board.",
        deliverable: Some("A belt that moves items past the camera"),
    },
    CurriculumStep {
        title: "See with a camera",
        detail: "Capture frames with OpenCV, crop the region of interest, and try hand-written colour thresholds to see where they break.",
        deliverable: None,
    },
    CurriculumStep {
        title: "Collect and label",
        detail: "Run every object past the camera under different lighting and label the frames into classes.",
        deliverable: Some("A labelled dataset of at least 1,500 images"),
    },
    CurriculumStep {
        title: "Train a classifier",
        detail: "Fine-tune a small convolutional network and measure its confusion matrix on objects it has never seen.",
        deliverable: None,
    },
    CurriculumStep {
        title: "Close the loop",
        detail: "Connect predictions to the servo gates, tune the timing, and compete in the final challenge.",
        deliverable: Some("A timed run in the Multi-Sorter Challenge final"),
    },
];

static OUTCOMES: [Outcome; 2] = [
    Outcome {
        quote: "Our model was 98% accurate on the laptop and sorted half the apples into the wrong bin. Fixing the lighting fixed everything.",
        name: "Minseo L.",
        cohort: "Multi-Sorter, spring cohort",
    },
    Outcome {
        quote: "It was the first time code I wrote moved something in the real world.",
        name: "Ethan R.",
        cohort: "Multi-Sorter, summer camp",
    },
];

#[function_component(MultiSorter)]
pub fn multi_sorter() -> Html {
    html! {
        <section class="program-section multi-sorter">
            <div class="program-section__inner">
                <p class="program-section__eyebrow">{"Program 02"}</p>
                <h2>{"Multi-Sorter Challenge"}</h2>
                <p class="program-section__lead">
                    {"Vision, machine learning, and mechanics in one robot. Teams build a conveyor sorter, teach it to recognise objects, and compete on speed and accuracy."}
                </p>

                <dl class="multi-sorter__rules">
                    { for RULES.iter().map(|rule| html! {
                        <>
                            <dt>{rule.label}</dt>
                            <dd>{rule.value}</dd>
                        </>
                    }) }
                </dl>

                <Curriculum heading="From kit to competition" steps={&STEPS[..]} />
                <Outcomes items={&OUTCOMES[..]} />
            </div>
            <style>
                {r#"
                .multi-sorter__rules {
                    display: grid;
                    grid-template-columns: max-content 1fr;
                    gap: 0.75rem 2rem;
                    margin: 2.5rem 0 0;
                    padding: 2rem;
                    border: 1px solid rgba(30, 144, 255, 0.15);
                    border-radius: 12px;
                }

                .multi-sorter__rules dt {
                    color: #7EB2FF;
                    font-weight: 600;
                }

                .multi-sorter__rules dd {
                    margin: 0;
                    color: #ccc;
                }
                "#}
            </style>
        </section>
    }
}

pub fn view() -> Html {
    html! { <MultiSorter /> }
}
