use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::composer::{ComposedContent, SectionEntry, SectionRegistry};
use crate::router::{use_view_router, NavigationHandle};
use crate::sections::{about, aix, autonomous_car, hero, multi_sorter, programs, student_exchange};

static SECTIONS: [SectionEntry; 6] = [
    SectionEntry {
        key: "#about",
        label: "About",
        view: about::view,
    },
    SectionEntry {
        key: "#programs",
        label: "Programs",
        view: programs::view,
    },
    SectionEntry {
        key: "#aix",
        label: "AI+X",
        view: aix::view,
    },
    SectionEntry {
        key: "#multi-sorter",
        label: "Multi-Sorter",
        view: multi_sorter::view,
    },
    SectionEntry {
        key: "#autonomous-car",
        label: "BrainAI Car",
        view: autonomous_car::view,
    },
    SectionEntry {
        key: "#student-exchange",
        label: "Exchange",
        view: student_exchange::view,
    },
];

pub static REGISTRY: SectionRegistry = SectionRegistry::new(
    SectionEntry {
        key: "#hero",
        label: "Home",
        view: hero::view,
    },
    &SECTIONS,
);

#[function_component(Home)]
pub fn home() -> Html {
    let fallback = use_memo(|_| NavigationHandle::browser(), ());
    let navigation = use_context::<NavigationHandle>().unwrap_or_else(|| (*fallback).clone());
    let state = use_view_router(&navigation);

    html! {
        <>
            <Header state={state.clone()} registry={REGISTRY} />
            <ComposedContent {state} registry={REGISTRY} />
            <Footer />
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::header::nav_links;
    use crate::sections::programs::PROGRAM_CARDS;

    #[test]
    fn registry_keys_follow_page_order() {
        let keys: Vec<_> = REGISTRY.entries().iter().map(|entry| entry.key).collect();
        assert_eq!(
            keys,
            vec![
                "#about",
                "#programs",
                "#aix",
                "#multi-sorter",
                "#autonomous-car",
                "#student-exchange",
            ]
        );
        assert_eq!(REGISTRY.lead().key, "#hero");
    }

    #[test]
    fn header_links_cover_home_and_every_section() {
        let hrefs: Vec<_> = nav_links(&REGISTRY).iter().map(|link| link.href).collect();
        assert_eq!(hrefs[0], "#home");
        assert!(hrefs[1..]
            .iter()
            .zip(REGISTRY.entries())
            .all(|(href, entry)| *href == entry.key));
        assert_eq!(hrefs.len(), REGISTRY.entries().len() + 1);
    }

    #[test]
    fn program_cards_point_at_registered_sections() {
        for card in PROGRAM_CARDS.iter() {
            assert!(REGISTRY.contains(card.fragment), "{} not registered", card.title);
        }
    }
}
