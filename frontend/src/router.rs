//! Fragment-driven view routing.
//!
//! The browser location is reached only through [`NavigationSource`] and
//! [`Viewport`], so the router itself never touches a global and can be
//! driven from an in-memory source in tests.

use std::fmt;
use std::rc::Rc;

use log::{debug, error};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config;

/// The fragment currently in effect. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationState(String);

impl NavigationState {
    /// Normalizes a browser-reported fragment. Only the empty string is
    /// rewritten; unknown fragments pass through untouched.
    pub fn from_fragment(fragment: &str) -> Self {
        if fragment.is_empty() {
            Self(config::DEFAULT_FRAGMENT.to_string())
        } else {
            Self(fragment.to_string())
        }
    }

    pub fn fragment(&self) -> &str {
        &self.0
    }

    pub fn is_home(&self) -> bool {
        config::HOME_ALIASES.contains(&self.0.as_str())
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self(config::DEFAULT_FRAGMENT.to_string())
    }
}

impl fmt::Display for NavigationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Handle to a registered fragment-change listener.
///
/// Cancelling runs the teardown at most once; dropping cancels.
pub struct Subscription {
    teardown: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(teardown: impl FnOnce() + 'static) -> Self {
        Self {
            teardown: Some(Box::new(teardown)),
        }
    }

    /// A subscription with nothing to tear down.
    pub fn inert() -> Self {
        Self { teardown: None }
    }

    pub fn is_active(&self) -> bool {
        self.teardown.is_some()
    }

    pub fn cancel(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

pub trait NavigationSource {
    /// Raw fragment as reported by the location, `""` when absent.
    fn current_fragment(&self) -> String;

    fn subscribe(&self, on_change: Callback<String>) -> Subscription;
}

pub trait Viewport {
    fn scroll_to_origin(&self);
}

/// `window.location` and `window` scrolling.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserLocation;

impl NavigationSource for BrowserLocation {
    fn current_fragment(&self) -> String {
        web_sys::window()
            .and_then(|window| window.location().hash().ok())
            .unwrap_or_default()
    }

    fn subscribe(&self, on_change: Callback<String>) -> Subscription {
        let Some(window) = web_sys::window() else {
            error!("No window available, fragment changes will not be tracked");
            return Subscription::inert();
        };

        let listener = Closure::<dyn Fn()>::new(move || {
            let fragment = BrowserLocation.current_fragment();
            on_change.emit(fragment);
        });

        if let Err(err) = window
            .add_event_listener_with_callback("hashchange", listener.as_ref().unchecked_ref())
        {
            error!("Failed to register hashchange listener: {:?}", err);
            return Subscription::inert();
        }

        Subscription::new(move || {
            if let Err(err) = window
                .remove_event_listener_with_callback("hashchange", listener.as_ref().unchecked_ref())
            {
                error!("Failed to remove hashchange listener: {:?}", err);
            }
        })
    }
}

impl Viewport for BrowserLocation {
    fn scroll_to_origin(&self) {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}

/// Injected navigation plumbing, passed to components as a prop.
#[derive(Clone)]
pub struct NavigationHandle {
    source: Rc<dyn NavigationSource>,
    viewport: Rc<dyn Viewport>,
}

impl NavigationHandle {
    pub fn new<T>(inner: T) -> Self
    where
        T: NavigationSource + Viewport + 'static,
    {
        let inner = Rc::new(inner);
        Self {
            source: inner.clone(),
            viewport: inner,
        }
    }

    pub fn browser() -> Self {
        Self::new(BrowserLocation)
    }

    pub fn source(&self) -> Rc<dyn NavigationSource> {
        self.source.clone()
    }

    pub fn viewport(&self) -> Rc<dyn Viewport> {
        self.viewport.clone()
    }
}

impl PartialEq for NavigationHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::as_ptr(&self.source) as *const () == Rc::as_ptr(&other.source) as *const ()
    }
}

pub struct ViewRouter {
    state: NavigationState,
}

impl ViewRouter {
    pub fn new(source: &dyn NavigationSource) -> Self {
        let state = NavigationState::from_fragment(&source.current_fragment());
        debug!("Initial navigation state: {}", state);
        Self { state }
    }

    pub fn current(&self) -> &NavigationState {
        &self.state
    }

    /// Applies a fragment-change event. Every change returns the page to the
    /// top, including a change to the fragment already in effect.
    pub fn on_fragment_change(&mut self, fragment: &str, viewport: &dyn Viewport) -> &NavigationState {
        let next = NavigationState::from_fragment(fragment);
        if next != self.state {
            debug!("Navigating from {} to {}", self.state, next);
            self.state = next;
        }
        viewport.scroll_to_origin();
        &self.state
    }
}

/// Tracks the navigation state for the calling component and re-renders it
/// whenever the fragment changes. The listener is removed on unmount.
#[hook]
pub fn use_view_router(handle: &NavigationHandle) -> NavigationState {
    let router = {
        let source = handle.source();
        use_mut_ref(move || ViewRouter::new(source.as_ref()))
    };
    let state = {
        let router = router.clone();
        use_state_eq(move || router.borrow().current().clone())
    };

    {
        let state = state.clone();
        use_effect_with_deps(
            move |handle: &NavigationHandle| {
                let viewport = handle.viewport();
                let mut subscription = handle.source().subscribe(Callback::from(
                    move |fragment: String| {
                        let next = router
                            .borrow_mut()
                            .on_fragment_change(&fragment, viewport.as_ref())
                            .clone();
                        state.set(next);
                    },
                ));
                if subscription.is_active() {
                    debug!("Listening for fragment changes");
                }
                move || subscription.cancel()
            },
            handle.clone(),
        );
    }

    (*state).clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    type Listeners = Rc<RefCell<Vec<(usize, Callback<String>)>>>;

    /// In-memory location that records listeners and scroll calls.
    #[derive(Default)]
    struct MemoryLocation {
        fragment: RefCell<String>,
        listeners: Listeners,
        next_id: Cell<usize>,
        scrolls: Cell<usize>,
    }

    impl MemoryLocation {
        fn at(fragment: &str) -> Self {
            let location = Self::default();
            *location.fragment.borrow_mut() = fragment.to_string();
            location
        }

        fn navigate(&self, fragment: &str) {
            *self.fragment.borrow_mut() = fragment.to_string();
            let listeners: Vec<_> = self
                .listeners
                .borrow()
                .iter()
                .map(|(_, cb)| cb.clone())
                .collect();
            for listener in listeners {
                listener.emit(fragment.to_string());
            }
        }

        fn listener_count(&self) -> usize {
            self.listeners.borrow().len()
        }

        fn scrolls(&self) -> usize {
            self.scrolls.get()
        }
    }

    impl NavigationSource for MemoryLocation {
        fn current_fragment(&self) -> String {
            self.fragment.borrow().clone()
        }

        fn subscribe(&self, on_change: Callback<String>) -> Subscription {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.listeners.borrow_mut().push((id, on_change));
            let listeners = self.listeners.clone();
            Subscription::new(move || {
                listeners.borrow_mut().retain(|(other, _)| *other != id);
            })
        }
    }

    impl Viewport for MemoryLocation {
        fn scroll_to_origin(&self) {
            self.scrolls.set(self.scrolls.get() + 1);
        }
    }

    /// Wires a router to a memory location the same way `use_view_router`
    /// wires it to the browser.
    fn attach(location: &Rc<MemoryLocation>) -> (Rc<RefCell<ViewRouter>>, Subscription) {
        let router = Rc::new(RefCell::new(ViewRouter::new(location.as_ref())));
        let subscription = {
            let router = router.clone();
            let viewport = location.clone();
            location.subscribe(Callback::from(move |fragment: String| {
                router
                    .borrow_mut()
                    .on_fragment_change(&fragment, viewport.as_ref());
            }))
        };
        (router, subscription)
    }

    #[test]
    fn empty_fragment_defaults_to_home() {
        let router = ViewRouter::new(&MemoryLocation::at(""));
        assert_eq!(router.current().fragment(), "#home");
        assert!(router.current().is_home());
    }

    #[test]
    fn initial_fragment_is_taken_from_the_source() {
        let router = ViewRouter::new(&MemoryLocation::at("#aix"));
        assert_eq!(router.current().fragment(), "#aix");
        assert!(!router.current().is_home());
    }

    #[test]
    fn hero_is_a_home_alias() {
        assert!(NavigationState::from_fragment("#hero").is_home());
        assert!(NavigationState::default().is_home());
    }

    #[test]
    fn unknown_fragments_pass_through() {
        let state = NavigationState::from_fragment("#unknown-page");
        assert_eq!(state.fragment(), "#unknown-page");
        assert_eq!(state.to_string(), "#unknown-page");
    }

    #[test]
    fn fragment_change_updates_state_and_scrolls_to_top() {
        let location = Rc::new(MemoryLocation::at(""));
        let (router, _subscription) = attach(&location);

        location.navigate("#aix");

        assert_eq!(router.borrow().current().fragment(), "#aix");
        assert_eq!(location.scrolls(), 1);
    }

    #[test]
    fn cleared_fragment_falls_back_to_home() {
        let location = Rc::new(MemoryLocation::at("#programs"));
        let (router, _subscription) = attach(&location);

        location.navigate("");

        assert_eq!(router.borrow().current(), &NavigationState::default());
    }

    #[test]
    fn repeated_fragment_is_idempotent() {
        let location = Rc::new(MemoryLocation::at(""));
        let (router, _subscription) = attach(&location);

        location.navigate("#about");
        let once = router.borrow().current().clone();
        location.navigate("#about");

        assert_eq!(router.borrow().current(), &once);
    }

    #[test]
    fn about_programs_about_ends_on_about() {
        let location = Rc::new(MemoryLocation::at(""));
        let (router, _subscription) = attach(&location);

        for fragment in ["#about", "#programs", "#about"] {
            location.navigate(fragment);
            assert_eq!(router.borrow().current().fragment(), fragment);
        }
        assert_eq!(location.scrolls(), 3);
    }

    #[test]
    fn cancel_removes_the_listener_once() {
        let location = Rc::new(MemoryLocation::at(""));
        let (router, mut subscription) = attach(&location);
        assert_eq!(location.listener_count(), 1);

        subscription.cancel();
        subscription.cancel();
        assert!(!subscription.is_active());
        assert_eq!(location.listener_count(), 0);

        location.navigate("#aix");
        assert!(router.borrow().current().is_home());
        assert_eq!(location.scrolls(), 0);
    }

    #[test]
    fn dropping_the_subscription_unsubscribes() {
        let location = Rc::new(MemoryLocation::at(""));
        let (_router, subscription) = attach(&location);
        drop(subscription);
        assert_eq!(location.listener_count(), 0);
    }

    #[test]
    fn inert_subscription_cancels_without_effect() {
        let mut subscription = Subscription::inert();
        assert!(!subscription.is_active());
        subscription.cancel();
    }

    #[test]
    fn handles_compare_by_identity() {
        let handle = NavigationHandle::new(MemoryLocation::at(""));
        let other = NavigationHandle::new(MemoryLocation::at(""));
        assert!(handle == handle.clone());
        assert!(handle != other);
    }
}
