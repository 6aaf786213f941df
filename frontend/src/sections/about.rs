use yew::prelude::*;

use crate::config;

struct Stat {
    value: &'static str,
    label: &'static str,
}

struct Pillar {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const STATS: [Stat; 4] = [
    Stat { value: "1,200+", label: "students taught" },
    Stat { value: "38", label: "partner schools" },
    Stat { value: "4", label: "flagship programs" },
    Stat { value: "6", label: "exchange countries" },
];

const PILLARS: [Pillar; 3] = [
    Pillar {
        icon: "🛠️",
        title: "Build first",
        description: "Every concept is introduced through something students assemble, wire, and run themselves. Theory follows the moment it is needed.",
    },
    Pillar {
        icon: "🧠",
        title: "Real models, real data",
        description: "Students collect their own datasets, train neural networks on them, and learn why a model fails before they learn why it works.",
    },
    Pillar {
        icon: "🌏",
        title: "Beyond the classroom",
        description: "Projects end in public demos, competitions, and exchange visits, so students present their work to people who were not in the room.",
    },
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section class="about">
            <div class="about__inner">
                <div class="about__intro">
                    <h2>{"About BrainAI Academy"}</h2>
                    <p>
                        {"We are a team of engineers and teachers who believe AI is learned with your hands. Since our first robotics club we have run project-based programs where students design, train, and deploy AI systems on physical hardware."}
                    </p>
                    <p>
                        {"Our programs run as semester courses in partner schools, as intensive holiday camps, and as international exchanges with universities abroad."}
                    </p>
                </div>

                <div class="about__image">
                    <img src={config::asset("classroom.jpg")} alt="Students testing a sorting robot in class" />
                </div>

                <div class="about__stats">
                    { for STATS.iter().map(|stat| html! {
                        <div class="about__stat">
                            <span class="about__stat-value">{stat.value}</span>
                            <span class="about__stat-label">{stat.label}</span>
                        </div>
                    }) }
                </div>

                <div class="about__pillars">
                    { for PILLARS.iter().map(|pillar| html! {
                        <div class="about__pillar">
                            <span class="about__pillar-icon">{pillar.icon}</span>
                            <h3>{pillar.title}</h3>
                            <p>{pillar.description}</p>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .about {
                    padding: 6rem 2rem;
                    background: rgba(26, 26, 26, 0.85);
                    border-top: 1px solid rgba(30, 144, 255, 0.1);
                }

                .about__inner {
                    max-width: 1100px;
                    margin: 0 auto;
                }

                .about__intro {
                    max-width: 720px;
                }

                .about__intro h2 {
                    font-size: 2.5rem;
                    margin-bottom: 1.5rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .about__intro p {
                    color: #999;
                    font-size: 1.1rem;
                    line-height: 1.8;
                    margin-bottom: 1.25rem;
                }

                .about__image img {
                    width: 100%;
                    height: auto;
                    margin-top: 2.5rem;
                    border-radius: 16px;
                }

                .about__stats {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                    margin: 3.5rem 0;
                }

                .about__stat {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    padding: 1.5rem;
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 12px;
                }

                .about__stat-value {
                    font-size: 2.2rem;
                    font-weight: 700;
                    color: #7EB2FF;
                }

                .about__stat-label {
                    color: #999;
                    margin-top: 0.25rem;
                }

                .about__pillars {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 2rem;
                }

                .about__pillar {
                    padding: 2rem;
                    background: rgba(30, 144, 255, 0.05);
                    border-radius: 16px;
                }

                .about__pillar-icon {
                    font-size: 2rem;
                }

                .about__pillar h3 {
                    color: #ffffff;
                    margin: 1rem 0 0.75rem;
                }

                .about__pillar p {
                    color: #999;
                    line-height: 1.7;
                    margin: 0;
                }

                @media (max-width: 768px) {
                    .about__stats {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                "#}
            </style>
        </section>
    }
}

pub fn view() -> Html {
    html! { <About /> }
}
