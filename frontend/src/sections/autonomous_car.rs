use yew::prelude::*;

use crate::components::curriculum::{Curriculum, CurriculumStep};
use crate::components::outcomes::{Outcome, Outcomes};
use crate::config;

struct KitPart {
    name: &'static str,
    role: &'static str,
}

const KIT: [KitPart; 5] = [
    KitPart { name: "BrainAI Car chassis", role: "Steering servo and drive motor on a 1:10 frame" },
    KitPart { name: "Onboard computer", role: "Runs the camera loop and OpenVINO inference" },
    KitPart { name: "Wide-angle camera", role: "Front-facing lane camera" },
    KitPart { name: "Motor controller", role: "Takes steering and speed commands over serial" },
    KitPart { name: "PS4 controller", role: "Manual driving and recording control" },
];

/// The data-to-deployment pipeline students run, in order.
static PIPELINE: [CurriculumStep; 9] = [
    CurriculumStep {
        title: "Drive with a controller",
        detail: "Map the PS4 sticks and triggers to steering and throttle and get comfortable driving the car around the track.",
        deliverable: None,
    },
    CurriculumStep {
        title: "Collect driving data",
        detail: "Press R1 to start recording. Every camera frame is saved with the steering angle you were using at that moment. L1 throws away the last ten frames after a mistake.",
        deliverable: Some("Several laps of frames with matching steering labels"),
    },
    CurriculumStep {
        title: "Review and clean",
        detail: "Play the recording back frame by frame with the steering overlay and delete the bad samples where the car left the lane.",
        deliverable: None,
    },
    CurriculumStep {
        title: "Merge sessions",
        detail: "Combine recordings from every team member into one dataset with consistent image and annotation folders.",
        deliverable: None,
    },
    CurriculumStep {
        title: "Split the dataset",
        detail: "Shuffle and split the merged data 70:30 into training and validation sets.",
        deliverable: Some("A train and validation dataset"),
    },
    CurriculumStep {
        title: "Train with transfer learning",
        detail: "Start from a pretrained MobileNet and train a new head that predicts steering from the road image. Small datasets go a long way.",
        deliverable: None,
    },
    CurriculumStep {
        title: "Fine-tune",
        detail: "Unfreeze the top MobileNet layers and keep training on newly collected laps so the model specialises in your track.",
        deliverable: Some("A lane model that beats the team's baseline on validation"),
    },
    CurriculumStep {
        title: "Optimise for the car",
        detail: "Convert the TensorFlow model to OpenVINO IR so it runs in real time on the onboard computer.",
        deliverable: None,
    },
    CurriculumStep {
        title: "Drive autonomously",
        detail: "Deploy the model: the car reads the camera, predicts a steering angle each frame, and follows the lane on its own.",
        deliverable: Some("A full autonomous lap on race day"),
    },
];

static OUTCOMES: [Outcome; 2] = [
    Outcome {
        quote: "Watching the car take a corner by itself with a model we trained on our own laps was the best moment of the year.",
        name: "Seoyeon C.",
        cohort: "BrainAI Car, autumn cohort",
    },
    Outcome {
        quote: "I learned that bad data beats any clever model. We deleted a third of our frames and the car finally stayed in the lane.",
        name: "Hyunwoo J.",
        cohort: "BrainAI Car, winter camp",
    },
];

#[function_component(AutonomousCar)]
pub fn autonomous_car() -> Html {
    html! {
        <section class="program-section autonomous-car">
            <div class="program-section__inner">
                <p class="program-section__eyebrow">{"Program 03"}</p>
                <h2>{"BrainAI Car: Autonomous Driving"}</h2>
                <p class="program-section__lead">
                    {"Students build the whole self-driving loop on a model car: drive it, record their own lane data, train a neural network, and hand the wheel to the model."}
                </p>

                <div class="autonomous-car__kit">
                    <img src={config::asset("brainai_car.png")} alt="BrainAI Car on the lane track" />
                    <h3>{"What's in the kit"}</h3>
                    <ul>
                        { for KIT.iter().map(|part| html! {
                            <li>
                                <strong>{part.name}</strong>
                                <span>{part.role}</span>
                            </li>
                        }) }
                    </ul>
                </div>

                <Curriculum heading="From joystick to autopilot" steps={&PIPELINE[..]} />
                <Outcomes items={&OUTCOMES[..]} />
            </div>
            <style>
                {r#"
                .autonomous-car__kit {
                    margin-top: 2.5rem;
                    padding: 2rem;
                    background: rgba(30, 144, 255, 0.05);
                    border-radius: 16px;
                }

                .autonomous-car__kit img {
                    width: 100%;
                    height: auto;
                    border-radius: 12px;
                    margin-bottom: 1.5rem;
                }

                .autonomous-car__kit h3 {
                    margin: 0 0 1rem;
                    color: #ffffff;
                }

                .autonomous-car__kit ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    display: grid;
                    gap: 0.75rem;
                }

                .autonomous-car__kit li {
                    display: flex;
                    justify-content: space-between;
                    gap: 1rem;
                    color: #999;
                    border-bottom: 1px solid rgba(30, 144, 255, 0.1);
                    padding-bottom: 0.75rem;
                }

                .autonomous-car__kit strong {
                    color: #ccc;
                }

                @media (max-width: 768px) {
                    .autonomous-car__kit li {
                        flex-direction: column;
                        gap: 0.25rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}

pub fn view() -> Html {
    html! { <AutonomousCar /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_ends_with_deployment() {
        let last = PIPELINE.last().map(|step| step.title);
        assert_eq!(last, Some("Drive autonomously"));
        assert!(PIPELINE.iter().any(|step| step.detail.contains("70:30")));
    }
}
