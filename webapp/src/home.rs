use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::catalog;
use crate::common::reveal::use_reveal;
use crate::Route;

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[Faq] = &[
    Faq {
        question: "When was SJ Polyzen established?",
        answer: "SJ Polyzen Industries was established in 2015, bringing over 8 years of \
            manufacturing excellence to the polypropylene industry.",
    },
    Faq {
        question: "Where is the company located?",
        answer: "We are located at 399 LIG Mukharjee Nagar, Dewar, Madhya Pradesh, 455001, India.",
    },
    Faq {
        question: "What products do you manufacture?",
        answer: "We specialize in polypropylene multifilament yarns and bag closing threads \
            for various industrial applications.",
    },
    Faq {
        question: "Do you provide customized solutions?",
        answer: "Yes, we offer customized yarn specifications based on client requirements \
            including color, denier, and tensile strength.",
    },
    Faq {
        question: "What is your delivery time?",
        answer: "Standard delivery time is 7-10 business days, depending on order volume \
            and location.",
    },
];

// one open slot at most; clicking the open entry collapses it
pub fn toggle(active: Option<usize>, index: usize) -> Option<usize> {
    if active == Some(index) { None } else { Some(index) }
}

#[component]
pub fn Home() -> Element {
    use_reveal();

    let mut active_faq = use_signal(|| None::<usize>);

    rsx! {
        div { class: "home-page",
            section { class: "hero-section",
                div { class: "hero-background" }
                div { class: "hero-content",
                    h1 { class: "hero-title", "Welcome to SJ Polyzen Industries" }
                    p { class: "hero-slogan",
                        "Weaving Excellence, Delivering Quality - Your Trusted Partner in "
                        "Polypropylene Solutions"
                    }
                    a { class: "btn btn-primary hero-cta", href: "#products-preview",
                        "Explore Our Products"
                    }
                }
                div { class: "scroll-indicator", "▾" }
            }

            section { class: "section who-we-are",
                div { class: "container",
                    h2 { class: "section-title fade-in", "Who We Are" }
                    div { class: "two-column-layout",
                        div { class: "image-column fade-in",
                            div { class: "placeholder-image",
                                span { "Company Image" }
                            }
                        }
                        div { class: "content-column fade-in",
                            p {
                                "SJ Polyzen Industries is a leading manufacturer of high-quality "
                                "polypropylene multifilament yarns and bag closing threads, based "
                                "in Dewar, Madhya Pradesh. With years of expertise in the textile "
                                "industry, we pride ourselves on delivering products that meet "
                                "international quality standards while maintaining competitive "
                                "pricing."
                            }
                            p {
                                "Our state-of-the-art manufacturing facility is equipped with "
                                "advanced machinery and operated by skilled professionals who "
                                "ensure every product meets stringent quality benchmarks. We serve "
                                "diverse industries including agriculture, packaging, construction, "
                                "and fishing, providing customized solutions that cater to specific "
                                "client requirements."
                            }
                        }
                    }
                }
            }

            section { id: "products-preview", class: "section products-preview",
                div { class: "container",
                    h2 { class: "section-title fade-in", "Our Products" }

                    div { class: "products-grid fade-in",
                        for product in catalog::PRODUCTS {
                            div { class: "product-card",
                                div { class: "product-image",
                                    span { "{product.name}" }
                                }
                                div { class: "product-info",
                                    h3 { "{product.name}" }
                                    p { "{product.summary}" }
                                    Link {
                                        class: "btn btn-secondary",
                                        to: Route::ProductDetail {
                                            product_id: String::from(product.id),
                                        },
                                        "View More"
                                    }
                                }
                            }
                        }
                    }

                    div { class: "text-center mt-4",
                        Link { class: "btn btn-primary", to: Route::Products {},
                            "View All Products"
                        }
                    }
                }
            }

            section { class: "section quality-commitment",
                div { class: "container",
                    div { class: "quality-banner fade-in",
                        div { class: "quality-image-overlay",
                            div { class: "quality-content",
                                h2 { "Our Commitment to Quality" }
                                ul { class: "quality-points",
                                    li { "✓ ISO 9001:2015 certified quality management" }
                                    li { "✓ Rigorous testing of every batch before dispatch" }
                                    li { "✓ Virgin-grade raw materials from certified suppliers" }
                                }
                                Link { class: "btn btn-primary", to: Route::QualityPolicy {},
                                    "Read Our Complete Quality Policy"
                                }
                            }
                        }
                    }
                }
            }

            section { class: "section contact-brief",
                div { class: "container",
                    div { class: "contact-brief-content fade-in",
                        h2 { class: "section-title", "Get In Touch" }
                        p { class: "section-subtitle",
                            "Have questions about our products or services? We're here to help! "
                            "Contact us today and let's discuss how we can meet your requirements."
                        }

                        div { class: "contact-info-grid",
                            div { class: "contact-info-item",
                                div { class: "info-icon", "📧" }
                                h4 { "Email" }
                                p { "sjpolyzen@gmail.com" }
                            }
                            div { class: "contact-info-item",
                                div { class: "info-icon", "📞" }
                                h4 { "Phone" }
                                p { "+91 8719824566" }
                                p { "+91 9628517463" }
                            }
                        }

                        div { class: "text-center mt-4",
                            Link { class: "btn btn-primary", to: Route::Contact {}, "Contact Us" }
                        }
                    }
                }
            }

            section { class: "section faq-section",
                div { class: "container",
                    h2 { class: "section-title fade-in", "Frequently Asked Questions" }

                    div { class: "faq-container fade-in",
                        for (index, faq) in FAQS.iter().enumerate() {
                            div {
                                class: if active_faq() == Some(index) { "faq-item active" } else { "faq-item" },
                                button {
                                    class: "faq-question",
                                    aria_expanded: active_faq() == Some(index),
                                    onclick: move |_| {
                                        let next = toggle(active_faq(), index);
                                        active_faq.set(next);
                                    },
                                    span { "{faq.question}" }
                                    span { class: "faq-icon",
                                        if active_faq() == Some(index) { "▲" } else { "▼" }
                                    }
                                }
                                div { class: "faq-answer",
                                    p { "{faq.answer}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selecting_twice_collapses() {
        let opened = toggle(None, 2);
        assert_eq!(opened, Some(2));
        assert_eq!(toggle(opened, 2), None);
    }

    #[test]
    fn at_most_one_entry_open() {
        let opened = toggle(None, 0);
        assert_eq!(toggle(opened, 3), Some(3));
        assert_eq!(toggle(Some(3), 1), Some(1));
    }

    #[test]
    fn five_entries_in_source_order() {
        assert_eq!(FAQS.len(), 5);
        assert!(FAQS[0].question.starts_with("When was SJ Polyzen"));
        assert!(FAQS[4].question.starts_with("What is your delivery"));
    }
}
