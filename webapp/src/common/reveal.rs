use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

// class pair wired to the transition rules in common/style
const REVEAL_SELECTOR: &str = ".fade-in";
const VISIBLE_CLASS: &str = "visible";

// fire once a tenth of the element clears the shrunk viewport bottom
const REVEAL_THRESHOLD: f64 = 0.1;
const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

type RevealCallback = Closure<dyn FnMut(Vec<IntersectionObserverEntry>, IntersectionObserver)>;

// one watcher per mounted page; every element flagged fade-in is observed
// until its first intersection, then marked visible for good
pub struct RevealWatch {
    observer: IntersectionObserver,
    // dropped together with the observer, never earlier
    _callback: RevealCallback,
}

impl RevealWatch {
    fn attach(stagger_ms: Option<u32>) -> Option<RevealWatch> {
        let document = web_sys::window()?.document()?;

        let callback: RevealCallback = Closure::new(
            move |entries: Vec<IntersectionObserverEntry>, observer: IntersectionObserver| {
                for (index, entry) in entries.into_iter().enumerate() {
                    if !entry.is_intersecting() {
                        continue;
                    }

                    let target = entry.target();
                    observer.unobserve(&target);

                    match stagger_ms {
                        Some(step) => {
                            Timeout::new(step * index as u32, move || {
                                let _ = target.class_list().add_1(VISIBLE_CLASS);
                            })
                            .forget();
                        }
                        None => {
                            let _ = target.class_list().add_1(VISIBLE_CLASS);
                        }
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        options.set_root_margin(REVEAL_ROOT_MARGIN);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .ok()?;

        let nodes = document.query_selector_all(REVEAL_SELECTOR).ok()?;
        for index in 0..nodes.length() {
            if let Some(node) = nodes.item(index) {
                if let Ok(element) = node.dyn_into::<Element>() {
                    observer.observe(&element);
                }
            }
        }

        Some(RevealWatch {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub fn use_reveal() {
    use_reveal_inner(None)
}

pub fn use_reveal_staggered(step_ms: u32) {
    use_reveal_inner(Some(step_ms))
}

fn use_reveal_inner(stagger_ms: Option<u32>) {
    let watch: Rc<RefCell<Option<RevealWatch>>> = use_hook(|| Rc::new(RefCell::new(None)));

    // collect after the first render so every flagged node exists
    use_effect({
        let watch = watch.clone();
        move || {
            *watch.borrow_mut() = RevealWatch::attach(stagger_ms);
        }
    });

    use_drop(move || {
        watch.borrow_mut().take();
    });
}
