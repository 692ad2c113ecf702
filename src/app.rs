use dioxus::{logger::tracing, prelude::*};

use crate::router::Route;

#[component]
pub fn App() -> Element {
    use_hook(|| tracing::debug!("mounting router"));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        Router::<Route> {}
    }
}
