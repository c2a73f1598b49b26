use dioxus::prelude::*;

use crate::common::reveal::use_reveal_staggered;

// cascade step between neighbouring cards as they come into view
const REVEAL_STAGGER_MS: u32 = 100;

pub struct Application {
    pub name: &'static str,
    pub description: &'static str,
}

pub const APPLICATIONS: &[Application] = &[
    Application {
        name: "Crates & Pallets",
        description: "Durable injection-moulded crates and pallets for logistics, storage, \
            and industrial handling.",
    },
    Application {
        name: "Dustbins & Waste Management Products",
        description: "Injection-moulded bins and containers designed for municipal, \
            commercial, and industrial use.",
    },
    Application {
        name: "Chairs & Furniture Components",
        description: "Chair bases, legs, wheels, and structural components requiring good \
            impact strength and durability.",
    },
    Application {
        name: "Household Utility Products",
        description: "Buckets, tubs, containers, and general household moulded items for \
            daily use.",
    },
    Application {
        name: "Industrial Injection Moulded Parts",
        description: "General-purpose industrial components where consistent processing and \
            cost efficiency are critical.",
    },
    Application {
        name: "Storage Boxes & Containers",
        description: "Injection-moulded storage solutions used in homes, warehouses, and \
            factories.",
    },
    Application {
        name: "Automotive Non-Critical Components",
        description: "Non-load bearing and interior plastic parts where recycled PPCP is \
            suitable (selective use).",
    },
    Application {
        name: "Custom Injection Moulded Applications",
        description: "Application-specific moulded products developed in consultation with \
            customer requirements.",
    },
];

#[component]
pub fn Applications() -> Element {
    use_reveal_staggered(REVEAL_STAGGER_MS);

    rsx! {
        div { class: "applications-page",
            section { class: "applications-header",
                div { class: "container",
                    h1 { class: "page-title", "Applications of Our Products" }
                    p { class: "page-subtitle",
                        "Supporting Everyday Injection Moulding Applications"
                    }
                }
            }

            section { class: "section applications-section",
                div { class: "container",
                    div { class: "applications-grid",
                        for app in APPLICATIONS {
                            div { class: "application-item fade-in",
                                div { class: "application-image",
                                    div { class: "image-placeholder",
                                        span { "{app.name}" }
                                    }
                                }
                                div { class: "application-info",
                                    h3 { "{app.name}" }
                                    p { "{app.description}" }
                                }
                            }
                        }
                    }

                    div { class: "applications-info-section fade-in",
                        h2 { "Custom Solutions for Injection Moulding" }
                        p {
                            "Our recycled PPCP granules are tailored to meet the practical "
                            "needs of injection moulders, with flexibility in grade, "
                            "appearance, and supply."
                        }
                        div { class: "info-features",
                            div { class: "feature-box",
                                span { class: "feature-icon", "🎨" }
                                h4 { "Colour Options" }
                                p {
                                    "Black and select application-specific colours available "
                                    "on trial approval."
                                }
                            }
                            div { class: "feature-box",
                                span { class: "feature-icon", "⚙️" }
                                h4 { "Application-Focused Grades" }
                                p {
                                    "Material tuned for flow behaviour, impact performance, "
                                    "and stable processing."
                                }
                            }
                            div { class: "feature-box",
                                span { class: "feature-icon", "📦" }
                                h4 { "Flexible Supply" }
                                p {
                                    "Packaging and order quantities adjusted to suit "
                                    "production requirements."
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
