//! Page shell shared by every page: a root column holding a body and a footer.

use dioxus::prelude::*;

#[component]
pub fn Root(#[props(into, default)] class: String, children: Element) -> Element {
    let class = if class.is_empty() {
        String::from("page")
    } else {
        format!("page {class}")
    };

    rsx! {
        div {
            class: "{class}",
            {children}
        }
    }
}

#[component]
pub fn Body(#[props(into, default)] class: String, children: Element) -> Element {
    rsx! {
        main {
            class: "{class}",
            {children}
        }
    }
}

/// Footer region. Rendered even when there is nothing to put in it.
#[component]
pub fn Footer(
    #[props(into, default)] class: String,
    #[props(default = VNode::empty())] children: Element,
) -> Element {
    rsx! {
        footer {
            class: "{class}",
            {children}
        }
    }
}
