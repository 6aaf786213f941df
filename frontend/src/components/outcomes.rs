use yew::prelude::*;

/// A quote from a past participant.
#[derive(Clone, Debug, PartialEq)]
pub struct Outcome {
    pub quote: &'static str,
    pub name: &'static str,
    pub cohort: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct OutcomesProps {
    #[prop_or(AttrValue::Static("What students took away"))]
    pub heading: AttrValue,
    pub items: &'static [Outcome],
}

#[function_component(Outcomes)]
pub fn outcomes(props: &OutcomesProps) -> Html {
    html! {
        <div class="outcomes">
            <h3 class="outcomes__heading">{props.heading.clone()}</h3>
            <div class="outcomes__grid">
                { for props.items.iter().map(|outcome| html! {
                    <figure class="outcome-card">
                        <blockquote>{format!("\u{201c}{}\u{201d}", outcome.quote)}</blockquote>
                        <figcaption>
                            <span class="outcome-card__name">{outcome.name}</span>
                            <span class="outcome-card__cohort">{outcome.cohort}</span>
                        </figcaption>
                    </figure>
                }) }
            </div>
            <style>
                {r#"
                .outcomes {
                    margin-top: 3rem;
                }

                .outcomes__heading {
                    font-size: 1.6rem;
                    margin-bottom: 1.5rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .outcomes__grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 1.5rem;
                }

                .outcome-card {
                    margin: 0;
                    padding: 1.75rem;
                    background: rgba(30, 144, 255, 0.05);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 16px;
                }

                .outcome-card blockquote {
                    margin: 0 0 1.25rem;
                    color: #ddd;
                    font-style: italic;
                    line-height: 1.7;
                }

                .outcome-card figcaption {
                    display: flex;
                    flex-direction: column;
                    gap: 0.25rem;
                }

                .outcome-card__name {
                    color: #ffffff;
                    font-weight: 600;
                }

                .outcome-card__cohort {
                    color: #7EB2FF;
                    font-size: 0.9rem;
                }
                "#}
            </style>
        </div>
    }
}
