use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_router::prelude::*;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;

use crate::common::assets;
use crate::components::footer::Footer;
use crate::Route;

// the bar picks up its shadow once the page moves under it
const SCROLL_ELEVATION_PX: f64 = 20.0;

pub fn elevated(offset: f64) -> bool {
    offset > SCROLL_ELEVATION_PX
}

// highlighting is exact: /products/<slug> does not light up "Our Products"
pub fn is_active(current: &Route, target: &Route) -> bool {
    current == target
}

#[derive(Clone, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: Route,
}

pub fn nav_links() -> Vec<NavLink> {
    vec![
        NavLink { label: "Home", target: Route::Home {} },
        NavLink { label: "About Us", target: Route::About {} },
        NavLink { label: "Our Products", target: Route::Products {} },
        NavLink { label: "Quality Policy", target: Route::QualityPolicy {} },
        NavLink { label: "Applications", target: Route::Applications {} },
        NavLink { label: "Contact", target: Route::Contact {} },
    ]
}

struct ScrollWatch {
    callback: Closure<dyn FnMut()>,
}

impl ScrollWatch {
    fn attach(mut scrolled: Signal<bool>) -> Option<ScrollWatch> {
        let window = web_sys::window()?;

        let callback = Closure::<dyn FnMut()>::new(move || {
            if let Some(window) = web_sys::window() {
                if let Ok(offset) = window.scroll_y() {
                    scrolled.set(elevated(offset));
                }
            }
        });

        window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .ok()?;

        Some(ScrollWatch { callback })
    }
}

impl Drop for ScrollWatch {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "scroll",
                self.callback.as_ref().unchecked_ref(),
            );
        }
    }
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[derive(Clone, PartialEq, Props)]
struct NavBarButtonProps {
    link: NavLink,
}

#[component]
fn NavBarButton(props: NavBarButtonProps) -> Element {
    let current: Route = use_route();
    let NavLink { label, target } = props.link;

    rsx! {
        li { class: "nav-item",
            Link {
                class: if is_active(&current, &target) { "nav-link active" } else { "nav-link" },
                to: target,
                "{label}"
            }
        }
    }
}

#[component]
fn NavBar() -> Element {
    let current: Route = use_route();

    let mut menu_open = use_signal(|| false);
    let scrolled = use_signal(|| false);

    let watch: Rc<RefCell<Option<ScrollWatch>>> = use_hook(|| Rc::new(RefCell::new(None)));
    use_effect({
        let watch = watch.clone();
        move || {
            *watch.borrow_mut() = ScrollWatch::attach(scrolled);
        }
    });
    use_drop(move || {
        watch.borrow_mut().take();
    });

    // every navigation starts at the top with the mobile menu shut
    use_effect(use_reactive(&current, move |_route| {
        scroll_to_top();
        menu_open.set(false);
    }));

    rsx! {
        nav { class: if scrolled() { "navbar scrolled" } else { "navbar" },
            div { class: "navbar-container",
                Link { class: "navbar-logo", to: Route::Home {},
                    img {
                        src: assets::LOGO_IMG,
                        alt: "SJ Polyzen Industries",
                        class: "logo-img",
                    }
                    span { class: "logo-text", "SJ Polyzen Industries" }
                }

                ul { class: if menu_open() { "nav-menu active" } else { "nav-menu" },
                    for link in nav_links() {
                        NavBarButton { link }
                    }
                }

                button {
                    class: "menu-icon",
                    aria_label: "Toggle menu",
                    onclick: move |_| {
                        let open = menu_open();
                        menu_open.set(!open);
                    },
                    if menu_open() { "✕" } else { "☰" }
                }
            }
        }
    }
}

#[component]
pub fn Shell() -> Element {
    rsx! {
        NavBar {}
        main { class: "main-content", Outlet::<Route> {} }
        Footer {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elevation_trips_past_twenty_pixels() {
        assert!(!elevated(0.0));
        assert!(!elevated(20.0));
        assert!(elevated(20.5));
        assert!(elevated(400.0));
    }

    #[test]
    fn active_match_is_exact() {
        let products = Route::Products {};
        assert!(is_active(&Route::Products {}, &products));

        let detail = Route::ProductDetail {
            product_id: String::from("black-ppcp-granules"),
        };
        assert!(!is_active(&detail, &products));
        assert!(!is_active(&Route::Home {}, &products));
    }

    #[test]
    fn one_link_per_top_level_page() {
        let links = nav_links();
        assert_eq!(links.len(), 6);
        assert_eq!(links[0].target, Route::Home {});
        assert_eq!(links.last().map(|link| link.target.clone()), Some(Route::Contact {}));
    }
}
