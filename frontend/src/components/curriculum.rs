use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct CurriculumStep {
    pub title: &'static str,
    pub detail: &'static str,
    /// Hands-on deliverable for the step, if any.
    pub deliverable: Option<&'static str>,
}

#[derive(Properties, PartialEq)]
pub struct CurriculumProps {
    pub heading: AttrValue,
    pub steps: &'static [CurriculumStep],
}

#[function_component(Curriculum)]
pub fn curriculum(props: &CurriculumProps) -> Html {
    html! {
        <div class="curriculum">
            <h3 class="curriculum__heading">{props.heading.clone()}</h3>
            <ol class="curriculum__steps">
                { for props.steps.iter().enumerate().map(|(i, step)| html! {
                    <li class="curriculum__step">
                        <span class="curriculum__index">{format!("{:02}", i + 1)}</span>
                        <div class="curriculum__body">
                            <h4>{step.title}</h4>
                            <p>{step.detail}</p>
                            {
                                if let Some(deliverable) = step.deliverable {
                                    html! { <p class="curriculum__deliverable">{"Deliverable: "}{deliverable}</p> }
                                } else {
                                    html! {}
                                }
                            }
                        </div>
                    </li>
                }) }
            </ol>
            <style>
                {r#"
                .curriculum {
                    margin: 3rem 0;
                }

                .curriculum__heading {
                    font-size: 1.6rem;
                    margin-bottom: 1.5rem;
                    color: #ffffff;
                }

                .curriculum__steps {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    display: grid;
                    gap: 1rem;
                }

                .curriculum__step {
                    display: flex;
                    gap: 1.5rem;
                    padding: 1.25rem 1.5rem;
                    background: rgba(26, 26, 26, 0.85);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 12px;
                    transition: border-color 0.3s ease;
                }

                .curriculum__step:hover {
                    border-color: rgba(30, 144, 255, 0.3);
                }

                .curriculum__index {
                    font-size: 1.4rem;
                    font-weight: 700;
                    color: #7EB2FF;
                    min-width: 2.5rem;
                }

                .curriculum__body h4 {
                    margin: 0 0 0.5rem;
                    font-size: 1.15rem;
                    color: #ffffff;
                }

                .curriculum__body p {
                    margin: 0;
                    color: #999;
                    line-height: 1.6;
                }

                .curriculum__deliverable {
                    margin-top: 0.5rem !important;
                    color: #7EB2FF !important;
                    font-size: 0.95rem;
                }
                "#}
            </style>
        </div>
    }
}
