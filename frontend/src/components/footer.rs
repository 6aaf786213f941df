use chrono::Datelike;
use stylist::yew::styled_component;
use yew::prelude::*;

use crate::config;

pub fn contact_href(subject: &str) -> String {
    format!(
        "mailto:{}?subject={}",
        config::CONTACT_EMAIL,
        urlencoding::encode(subject)
    )
}

#[styled_component]
pub fn Footer() -> Html {
    let year = chrono::Local::now().year();
    let style = css!(
        r#"
        padding: 3rem 2rem;
        border-top: 1px solid rgba(30, 144, 255, 0.1);
        color: #666;
        text-align: center;
        font-size: 0.9rem;

        .footer-contact {
            color: #7EB2FF;
            text-decoration: none;
        }

        p {
            margin: 0.5rem 0;
        }
        "#
    );

    html! {
        <footer class={style}>
            <p>{"BrainAI Academy. Hands-on AI education for the next generation of builders."}</p>
            <p>
                {"Questions about a program? "}
                <a class="footer-contact" href={contact_href("Program inquiry")}>{config::CONTACT_EMAIL}</a>
            </p>
            <p>{format!("© {} BrainAI Academy. All rights reserved.", year)}</p>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_subject_is_percent_encoded() {
        assert_eq!(
            contact_href("Program inquiry"),
            "mailto:hello@brainai.academy?subject=Program%20inquiry"
        );
    }
}
