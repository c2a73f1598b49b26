#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

mod catalog;
mod common;

mod components;
use components::navigation::Shell;

mod home;
use home::Home;

mod about;
use about::About;

mod products;
use products::{ProductDetail, Products};

mod applications;
use applications::Applications;

mod quality;
use quality::QualityPolicy;

mod policies;
use policies::{PrivacyPolicy, TermsConditions};

mod contact;
use contact::Contact;

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    launch(App);
}

#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/about")]
        About {},
        #[route("/products")]
        Products {},
        #[route("/products/:product_id")]
        ProductDetail { product_id: String },
        #[route("/quality")]
        QualityPolicy {},
        #[route("/privacy")]
        PrivacyPolicy {},
        #[route("/terms")]
        TermsConditions {},
        #[route("/applications")]
        Applications {},
        #[route("/contact")]
        Contact {},
}

#[component]
pub fn App() -> Element {
    rsx! {
        style { "{common::style::SITE_STYLES}" }
        Router::<Route> { config: RouterConfig::default }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn every_site_path_resolves_to_its_page() {
        assert_eq!(Route::from_str("/").ok(), Some(Route::Home {}));
        assert_eq!(Route::from_str("/about").ok(), Some(Route::About {}));
        assert_eq!(Route::from_str("/products").ok(), Some(Route::Products {}));
        assert_eq!(
            Route::from_str("/products/black-ppcp-granules").ok(),
            Some(Route::ProductDetail {
                product_id: String::from("black-ppcp-granules"),
            })
        );
        assert_eq!(Route::from_str("/quality").ok(), Some(Route::QualityPolicy {}));
        assert_eq!(Route::from_str("/privacy").ok(), Some(Route::PrivacyPolicy {}));
        assert_eq!(Route::from_str("/terms").ok(), Some(Route::TermsConditions {}));
        assert_eq!(
            Route::from_str("/applications").ok(),
            Some(Route::Applications {})
        );
        assert_eq!(Route::from_str("/contact").ok(), Some(Route::Contact {}));
    }

    #[test]
    fn unknown_paths_do_not_resolve() {
        assert!(Route::from_str("/warehouse").is_err());
    }

    #[test]
    fn routes_print_their_paths() {
        assert_eq!(Route::Home {}.to_string(), "/");
        assert_eq!(Route::Products {}.to_string(), "/products");
        assert_eq!(
            Route::ProductDetail {
                product_id: String::from("premium-ppcp-granules"),
            }
            .to_string(),
            "/products/premium-ppcp-granules"
        );
    }
}
