use dioxus::prelude::*;

use ui::{ApiStatusBanner, AuthProvider, LocationProvider, WardenProvider};
use views::{Dashboard, Login, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Login {},
    #[route("/register")]
    Register {},
    #[layout(RequireAuth)]
        #[route("/dashboard")]
        Dashboard {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            LocationProvider {
                WardenProvider {
                    ApiStatusBanner {}
                    Router::<Route> {}
                }
            }
        }
    }
}

/// Gate for the dashboard subtree: visitors without the session flag are
/// bounced to the login screen before anything guarded mounts.
#[component]
fn RequireAuth() -> Element {
    let auth = ui::use_auth();
    let nav = use_navigator();

    if !auth.authenticated() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    rsx! {
        Outlet::<Route> {}
    }
}
