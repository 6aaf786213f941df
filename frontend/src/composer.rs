//! Decides which sections are mounted and which of them are shown for a
//! given navigation state.

use log::{debug, warn};
use yew::prelude::*;

use crate::router::NavigationState;

pub type SectionView = fn() -> Html;

#[derive(Clone, Copy)]
pub struct SectionEntry {
    /// Fragment selecting this section, e.g. `#aix`.
    pub key: &'static str,
    /// Text used for the header link.
    pub label: &'static str,
    pub view: SectionView,
}

/// Ordered single-page sections plus the lead block shown only on the home
/// view. Entry order is the home concatenation order.
#[derive(Clone, Copy)]
pub struct SectionRegistry {
    lead: SectionEntry,
    entries: &'static [SectionEntry],
}

impl SectionRegistry {
    pub const fn new(lead: SectionEntry, entries: &'static [SectionEntry]) -> Self {
        Self { lead, entries }
    }

    pub fn lead(&self) -> &SectionEntry {
        &self.lead
    }

    pub fn entries(&self) -> &'static [SectionEntry] {
        self.entries
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|entry| entry.key == key)
    }
}

impl PartialEq for SectionRegistry {
    fn eq(&self, other: &Self) -> bool {
        self.lead.key == other.lead.key && std::ptr::eq(self.entries, other.entries)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// Every section visible, concatenated.
    Home,
    /// One section (or none) visible, the rest mounted but hidden.
    SinglePage,
}

impl Layout {
    fn class(self) -> &'static str {
        match self {
            Layout::Home => "layout-home",
            Layout::SinglePage => "layout-single",
        }
    }
}

#[derive(Clone, Copy)]
pub struct Slot {
    pub key: &'static str,
    pub view: SectionView,
    pub visible: bool,
}

pub struct RenderOutput {
    pub layout: Layout,
    pub slots: Vec<Slot>,
    /// Set when the state is neither a home alias nor a registry key.
    pub unmatched: bool,
}

impl RenderOutput {
    pub fn mounted_keys(&self) -> Vec<&'static str> {
        self.slots.iter().map(|slot| slot.key).collect()
    }

    pub fn visible_keys(&self) -> Vec<&'static str> {
        self.slots
            .iter()
            .filter(|slot| slot.visible)
            .map(|slot| slot.key)
            .collect()
    }
}

pub fn compose(state: &NavigationState, registry: &SectionRegistry) -> RenderOutput {
    if state.is_home() {
        let lead = registry.lead();
        let slots = std::iter::once(Slot {
            key: lead.key,
            view: lead.view,
            visible: true,
        })
        .chain(registry.entries().iter().map(|entry| Slot {
            key: entry.key,
            view: entry.view,
            visible: true,
        }))
        .collect();

        return RenderOutput {
            layout: Layout::Home,
            slots,
            unmatched: false,
        };
    }

    let slots = registry
        .entries()
        .iter()
        .map(|entry| Slot {
            key: entry.key,
            view: entry.view,
            visible: entry.key == state.fragment(),
        })
        .collect();

    RenderOutput {
        layout: Layout::SinglePage,
        slots,
        unmatched: !registry.contains(state.fragment()),
    }
}

#[derive(Properties, PartialEq)]
pub struct ComposedContentProps {
    pub state: NavigationState,
    pub registry: SectionRegistry,
}

/// Slots render as a keyed list so a section keeps its component instance
/// while its visibility toggles.
#[function_component(ComposedContent)]
pub fn composed_content(props: &ComposedContentProps) -> Html {
    let output = compose(&props.state, &props.registry);
    if output.unmatched {
        warn!("No section registered for {}", props.state);
    }
    debug!(
        "Composed {:?} layout: mounted {:?}, visible {:?}",
        output.layout,
        output.mounted_keys(),
        output.visible_keys()
    );

    html! {
        <main class={classes!("content", output.layout.class())}>
            { for output.slots.iter().map(|slot| html! {
                <div
                    key={slot.key}
                    data-section={slot.key}
                    class={classes!("section-slot", if slot.visible { "is-visible" } else { "is-hidden" })}
                    hidden={!slot.visible}
                >
                    { (slot.view)() }
                </div>
            }) }
            if output.unmatched {
                <section class="unknown-fragment">
                    <h2>{"We couldn't find that page"}</h2>
                    <p>{format!("Nothing lives at {} yet.", props.state)}</p>
                    <a href="#home" class="unknown-fragment__back">{"Back to the start"}</a>
                </section>
            }
            <style>
                {r#"
                .content {
                    min-height: 100vh;
                }

                .layout-single {
                    padding-top: 74px;
                }

                .section-slot[hidden] {
                    display: none;
                }

                .unknown-fragment {
                    max-width: 640px;
                    margin: 0 auto;
                    padding: 8rem 2rem;
                    text-align: center;
                    color: #cfd8ff;
                }

                .unknown-fragment h2 {
                    font-size: 2.2rem;
                    margin-bottom: 1rem;
                }

                .unknown-fragment__back {
                    display: inline-block;
                    margin-top: 2rem;
                    color: #7EB2FF;
                    text-decoration: none;
                    border-bottom: 1px solid rgba(126, 178, 255, 0.4);
                }
                "#}
            </style>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    fn block(name: &'static str) -> Html {
        html! { <p class="stub">{name}</p> }
    }

    fn hero() -> Html {
        block("hero")
    }
    fn about() -> Html {
        block("about")
    }
    fn programs() -> Html {
        block("programs")
    }
    fn aix() -> Html {
        block("aix")
    }
    fn multi_sorter() -> Html {
        block("multi-sorter")
    }
    fn autonomous_car() -> Html {
        block("autonomous-car")
    }
    fn student_exchange() -> Html {
        block("student-exchange")
    }

    const fn entry(key: &'static str, view: SectionView) -> SectionEntry {
        SectionEntry {
            key,
            label: key,
            view,
        }
    }

    static ENTRIES: [SectionEntry; 6] = [
        entry("#about", about),
        entry("#programs", programs),
        entry("#aix", aix),
        entry("#multi-sorter", multi_sorter),
        entry("#autonomous-car", autonomous_car),
        entry("#student-exchange", student_exchange),
    ];

    static REGISTRY: SectionRegistry = SectionRegistry::new(entry("#hero", hero), &ENTRIES);

    const SINGLE_PAGE_KEYS: [&str; 6] = [
        "#about",
        "#programs",
        "#aix",
        "#multi-sorter",
        "#autonomous-car",
        "#student-exchange",
    ];

    fn render(fragment: &str) -> RenderOutput {
        compose(&NavigationState::from_fragment(fragment), &REGISTRY)
    }

    #[test]
    fn home_aliases_show_everything_in_order() {
        for fragment in ["#home", "#hero", ""] {
            let output = render(fragment);
            assert_eq!(output.layout, Layout::Home);
            assert!(!output.unmatched);
            assert_eq!(
                output.visible_keys(),
                vec![
                    "#hero",
                    "#about",
                    "#programs",
                    "#aix",
                    "#multi-sorter",
                    "#autonomous-car",
                    "#student-exchange",
                ]
            );
        }
    }

    #[test]
    fn registry_key_shows_exactly_that_section() {
        for key in SINGLE_PAGE_KEYS {
            let output = render(key);
            assert_eq!(output.layout, Layout::SinglePage);
            assert_eq!(output.mounted_keys(), SINGLE_PAGE_KEYS.to_vec());
            assert_eq!(output.visible_keys(), vec![key]);
            assert!(!output.unmatched);
        }
    }

    #[test]
    fn unknown_fragment_hides_every_section() {
        let output = render("#unknown-page");
        assert_eq!(output.layout, Layout::SinglePage);
        assert_eq!(output.mounted_keys().len(), 6);
        assert!(output.visible_keys().is_empty());
        assert!(output.unmatched);
    }

    #[test]
    fn hero_key_is_not_a_single_page_entry() {
        assert!(!REGISTRY.contains("#hero"));
        assert!(!REGISTRY.contains("#home"));
        assert_eq!(REGISTRY.lead().key, "#hero");
    }

    #[test]
    fn navigation_sequence_never_shows_two_sections() {
        let mut last = Vec::new();
        for fragment in ["#about", "#programs", "#about"] {
            last = render(fragment).visible_keys();
            assert_eq!(last.len(), 1);
        }
        assert_eq!(last, vec!["#about"]);
    }

    #[test]
    fn composing_twice_gives_the_same_visible_set() {
        assert_eq!(render("#aix").visible_keys(), render("#aix").visible_keys());
    }

    async fn render_html(fragment: &'static str) -> String {
        ServerRenderer::<ComposedContent>::with_props(move || ComposedContentProps {
            state: NavigationState::from_fragment(fragment),
            registry: REGISTRY,
        })
        .render()
        .await
    }

    #[tokio::test]
    async fn home_markup_keeps_section_order() {
        let html = render_html("").await;
        assert_eq!(html.matches("is-visible").count(), 7);
        assert!(!html.contains("is-hidden"));

        let positions: Vec<usize> = [
            "hero",
            "about",
            "programs",
            "aix",
            "multi-sorter",
            "autonomous-car",
            "student-exchange",
        ]
        .iter()
        .map(|name| {
            html.find(&format!(">{}</p>", name))
                .unwrap_or_else(|| panic!("{} missing from markup", name))
        })
        .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[tokio::test]
    async fn single_page_markup_mounts_hidden_sections() {
        let html = render_html("#aix").await;
        assert_eq!(html.matches("is-visible").count(), 1);
        assert_eq!(html.matches("is-hidden").count(), 5);
        assert_eq!(html.matches("class=\"stub\"").count(), 6);
        assert!(!html.contains("Nothing lives at"));
    }

    #[tokio::test]
    async fn unknown_fragment_markup_shows_notice() {
        let html = render_html("#unknown-page").await;
        assert_eq!(html.matches("is-visible").count(), 0);
        assert_eq!(html.matches("is-hidden").count(), 6);
        assert!(html.contains("Nothing lives at #unknown-page yet."));
    }
}
