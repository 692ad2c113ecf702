use dioxus::prelude::*;

use crate::{layouts::page, router::Route, styles::HOME};

#[component]
pub fn HomePage() -> Element {
    rsx! {
        page::Root {
            page::Body {
                class: HOME.body,
                h1 {
                    class: HOME.title,
                    "Hello world!"
                }
                p {
                    class: HOME.description,
                    Link { to: Route::Forbidden {}, "/forbidden" }
                }
            }
            page::Footer { class: HOME.footer }
        }
    }
}
