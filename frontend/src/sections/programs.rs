use yew::prelude::*;

#[derive(Debug)]
pub(crate) struct ProgramCard {
    pub fragment: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub audience: &'static str,
    pub duration: &'static str,
    pub summary: &'static str,
}

pub(crate) const PROGRAM_CARDS: [ProgramCard; 4] = [
    ProgramCard {
        fragment: "#aix",
        icon: "🧩",
        title: "AI+X Project",
        audience: "High school, grades 10-12",
        duration: "12 weeks",
        summary: "Pair AI with the subject you already love. Teams pick an X (music, biology, sport, art) and build an AI project that answers a real question in it.",
    },
    ProgramCard {
        fragment: "#multi-sorter",
        icon: "🤖",
        title: "Multi-Sorter Challenge",
        audience: "High school and first-year university",
        duration: "8 weeks",
        summary: "Build a camera-guided conveyor robot that recognises objects and sorts them into bins, then race other teams for speed and accuracy.",
    },
    ProgramCard {
        fragment: "#autonomous-car",
        icon: "🚗",
        title: "BrainAI Car",
        audience: "High school, grades 11-12",
        duration: "10 weeks",
        summary: "Drive a model car with a game controller, record your own lane data, train a MobileNet lane model, and let the car drive itself.",
    },
    ProgramCard {
        fragment: "#student-exchange",
        icon: "✈️",
        title: "Student Exchange",
        audience: "Program graduates",
        duration: "2 weeks",
        summary: "Take your project abroad. Visit partner universities and research labs, and present your work alongside international students.",
    },
];

#[function_component(Programs)]
pub fn programs() -> Html {
    html! {
        <section class="programs">
            <div class="programs__inner">
                <h2>{"Our Programs"}</h2>
                <p class="programs__lead">
                    {"Four tracks, one idea: you learn AI by making something that works. Start anywhere; most students take two."}
                </p>
                <div class="programs__grid">
                    { for PROGRAM_CARDS.iter().map(|card| html! {
                        <a class="program-card" href={card.fragment}>
                            <span class="program-card__icon">{card.icon}</span>
                            <h3>{card.title}</h3>
                            <p class="program-card__summary">{card.summary}</p>
                            <dl class="program-card__meta">
                                <dt>{"For"}</dt>
                                <dd>{card.audience}</dd>
                                <dt>{"Length"}</dt>
                                <dd>{card.duration}</dd>
                            </dl>
                            <span class="program-card__more">{"Learn more →"}</span>
                        </a>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .programs {
                    padding: 6rem 2rem;
                }

                .programs__inner {
                    max-width: 1200px;
                    margin: 0 auto;
                }

                .programs h2 {
                    font-size: 2.5rem;
                    margin-bottom: 1rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .programs__lead {
                    color: #999;
                    font-size: 1.15rem;
                    max-width: 640px;
                    margin-bottom: 3rem;
                }

                .programs__grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
                    gap: 1.5rem;
                }

                .program-card {
                    display: flex;
                    flex-direction: column;
                    padding: 2rem;
                    background: rgba(26, 26, 26, 0.85);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 16px;
                    text-decoration: none;
                    color: inherit;
                    transition: all 0.3s ease;
                }

                .program-card:hover {
                    transform: translateY(-4px);
                    border-color: rgba(30, 144, 255, 0.4);
                    box-shadow: 0 4px 20px rgba(30, 144, 255, 0.15);
                }

                .program-card__icon {
                    font-size: 2.2rem;
                }

                .program-card h3 {
                    color: #ffffff;
                    margin: 1rem 0 0.75rem;
                }

                .program-card__summary {
                    color: #999;
                    line-height: 1.6;
                    flex: 1;
                }

                .program-card__meta {
                    display: grid;
                    grid-template-columns: auto 1fr;
                    gap: 0.25rem 1rem;
                    margin: 1.5rem 0;
                    font-size: 0.9rem;
                }

                .program-card__meta dt {
                    color: #666;
                }

                .program-card__meta dd {
                    margin: 0;
                    color: #ccc;
                }

                .program-card__more {
                    color: #7EB2FF;
                }
                "#}
            </style>
        </section>
    }
}

pub fn view() -> Html {
    html! { <Programs /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_link_to_program_sections() {
        let fragments: Vec<_> = PROGRAM_CARDS.iter().map(|card| card.fragment).collect();
        assert_eq!(
            fragments,
            vec!["#aix", "#multi-sorter", "#autonomous-car", "#student-exchange"]
        );
    }
}
