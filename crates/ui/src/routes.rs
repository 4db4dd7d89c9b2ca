use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::TrackerView;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", TrackerView)] Tracker {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        main { class: "container",
            header { class: "masthead",
                h1 { "10 Week AI Project" }
                p { class: "subtitle", "Track your progress through the program" }
            }
            Outlet::<Route> {}
        }
    }
}
