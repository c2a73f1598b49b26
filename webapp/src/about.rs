use dioxus::prelude::*;

use crate::common::{assets, reveal::use_reveal};

#[component]
pub fn About() -> Element {
    use_reveal();

    rsx! {
        div { class: "about-page",
            section { class: "about-header",
                div { class: "container",
                    h1 { class: "page-title", "About SJ Polyzen Industries" }
                    p { class: "page-subtitle",
                        "Building Excellence in Polypropylene Manufacturing Since 2015"
                    }
                }
            }

            section { class: "section about-content",
                div { class: "container",
                    div { class: "content-block fade-in",
                        p { class: "large-text",
                            "Founded with a vision to revolutionize the polypropylene yarn "
                            "industry in central India, SJ Polyzen Industries has grown from a "
                            "small-scale unit to a recognized name in manufacturing excellence. "
                            "Our journey began with a commitment to quality, innovation, and "
                            "customer satisfaction - principles that continue to guide us today."
                        }
                    }

                    div { class: "content-block fade-in",
                        p { class: "large-text",
                            "Located in the industrial heartland of Dewar, Madhya Pradesh, our "
                            "facility spans over 50,000 square feet and houses cutting-edge "
                            "extrusion and spinning machinery. We employ over 100 skilled workers "
                            "and technicians who bring craftsmanship and precision to every "
                            "product. Our strategic location allows us to efficiently serve "
                            "clients across India while maintaining cost-effective operations."
                        }
                    }

                    div { class: "about-image-container fade-in",
                        img {
                            src: assets::COMPANY_IMG,
                            alt: "Factory & Team",
                            class: "about-image",
                        }
                    }
                }
            }

            section { class: "section mission-vision-section",
                div { class: "container",
                    div { class: "mission-vision-grid",
                        div { class: "mission-vision-card mission-card fade-in",
                            div { class: "card-icon", "🎯" }
                            h2 { "Our Mission" }
                            ul { class: "mission-vision-list",
                                li {
                                    "To manufacture world-class polypropylene products that "
                                    "exceed customer expectations"
                                }
                                li {
                                    "To maintain sustainable and environmentally responsible "
                                    "manufacturing practices"
                                }
                                li {
                                    "To continuously innovate and improve our product range "
                                    "and processes"
                                }
                            }
                        }

                        div { class: "mission-vision-card vision-card fade-in",
                            div { class: "card-icon", "👁" }
                            h2 { "Our Vision" }
                            ul { class: "mission-vision-list",
                                li {
                                    "To become the most trusted polypropylene manufacturer in "
                                    "India by 2030"
                                }
                                li {
                                    "To expand our product portfolio and serve new markets "
                                    "globally"
                                }
                                li {
                                    "To set industry benchmarks for quality, innovation, and "
                                    "customer service"
                                }
                            }
                        }
                    }
                }
            }

            section { class: "section stats-section",
                div { class: "container",
                    div { class: "stats-grid fade-in",
                        div { class: "stat-card",
                            div { class: "stat-number", "2015" }
                            div { class: "stat-label", "Established" }
                        }
                        div { class: "stat-card",
                            div { class: "stat-number", "50,000+" }
                            div { class: "stat-label", "Sq. Ft. Facility" }
                        }
                        div { class: "stat-card",
                            div { class: "stat-number", "100+" }
                            div { class: "stat-label", "Skilled Workers" }
                        }
                        div { class: "stat-card",
                            div { class: "stat-number", "1000+" }
                            div { class: "stat-label", "Happy Clients" }
                        }
                    }
                }
            }
        }
    }
}
