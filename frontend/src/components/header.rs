use stylist::yew::styled_component;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::use_window_scroll;

use crate::composer::SectionRegistry;
use crate::config;
use crate::router::NavigationState;

#[derive(Clone, Debug, PartialEq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

/// Home link first, then one link per registry entry.
pub fn nav_links(registry: &SectionRegistry) -> Vec<NavLink> {
    std::iter::once(NavLink {
        href: config::DEFAULT_FRAGMENT,
        label: "Home",
    })
    .chain(registry.entries().iter().map(|entry| NavLink {
        href: entry.key,
        label: entry.label,
    }))
    .collect()
}

fn is_active(link: &NavLink, state: &NavigationState) -> bool {
    if link.href == config::DEFAULT_FRAGMENT {
        state.is_home()
    } else {
        link.href == state.fragment()
    }
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub state: NavigationState,
    pub registry: SectionRegistry,
}

#[styled_component]
pub fn Header(props: &HeaderProps) -> Html {
    let menu_open = use_state(|| false);
    let scroll = use_window_scroll();
    let is_scrolled = scroll.1 > config::HEADER_SCROLL_THRESHOLD;

    let style = css!(
        r#"
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 100;
        background: transparent;
        transition: background 0.3s ease, box-shadow 0.3s ease;

        &.scrolled {
            background: rgba(26, 26, 26, 0.95);
            box-shadow: 0 2px 20px rgba(0, 0, 0, 0.4);
            backdrop-filter: blur(10px);
        }

        .nav-content {
            max-width: 1200px;
            margin: 0 auto;
            padding: 1.25rem 2rem;
            display: flex;
            align-items: center;
            justify-content: space-between;
        }

        .nav-logo {
            color: #ffffff;
            font-size: 1.4rem;
            font-weight: 700;
            text-decoration: none;
        }

        .nav-right {
            display: flex;
            gap: 1.5rem;
        }

        .nav-link {
            color: #ccc;
            text-decoration: none;
            font-size: 0.95rem;
            transition: color 0.3s ease;
        }

        .nav-link:hover,
        .nav-link.active {
            color: #7EB2FF;
        }

        .burger-menu {
            display: none;
            flex-direction: column;
            gap: 5px;
            background: none;
            border: none;
            cursor: pointer;
        }

        .burger-menu span {
            width: 24px;
            height: 2px;
            background: #ffffff;
        }

        @media (max-width: 900px) {
            .burger-menu {
                display: flex;
            }

            .nav-right {
                display: none;
                position: absolute;
                top: 100%;
                left: 0;
                right: 0;
                flex-direction: column;
                padding: 1.5rem 2rem;
                background: rgba(26, 26, 26, 0.98);
            }

            .nav-right.mobile-menu-open {
                display: flex;
            }
        }
        "#
    );

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Links keep their default action so the fragment changes.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!(style, is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <a href={config::DEFAULT_FRAGMENT} class="nav-logo" onclick={close_menu.clone()}>
                    {"BrainAI Academy"}
                </a>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for nav_links(&props.registry).into_iter().map(|link| html! {
                        <a
                            href={link.href}
                            class={classes!("nav-link", is_active(&link, &props.state).then(|| "active"))}
                            onclick={close_menu.clone()}
                        >
                            {link.label}
                        </a>
                    }) }
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_link_is_active_for_both_aliases() {
        let home = NavLink {
            href: "#home",
            label: "Home",
        };
        assert!(is_active(&home, &NavigationState::from_fragment("#hero")));
        assert!(is_active(&home, &NavigationState::from_fragment("")));
        assert!(!is_active(&home, &NavigationState::from_fragment("#aix")));
    }

    #[test]
    fn section_link_is_active_only_for_its_fragment() {
        let aix = NavLink {
            href: "#aix",
            label: "AI+X",
        };
        assert!(is_active(&aix, &NavigationState::from_fragment("#aix")));
        assert!(!is_active(&aix, &NavigationState::from_fragment("#unknown-page")));
    }
}
