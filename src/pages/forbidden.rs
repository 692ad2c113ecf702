use dioxus::prelude::*;

use crate::{
    layouts::page,
    styles::{FORBIDDEN, StyleName},
};

pub const TITLE: &str = "Không có quyền truy cập!";
pub const DESCRIPTION: &str =
    "Bạn không có quyền truy cập trang này, hãy kiểm tra lại hoặc liên hệ quản trị viên để được hỗ trợ!";

/// Static 403 notice. Takes no props.
#[component]
pub fn ForbiddenPage() -> Element {
    rsx! {
        page::Root {
            page::Body {
                class: FORBIDDEN.class(StyleName::Body),
                h1 {
                    class: FORBIDDEN.class(StyleName::Title),
                    "{TITLE}"
                }
                p {
                    class: FORBIDDEN.class(StyleName::Description),
                    "{DESCRIPTION}"
                }
            }
            page::Footer { class: FORBIDDEN.class(StyleName::Footer) }
        }
    }
}
