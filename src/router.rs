use dioxus::prelude::*;

use crate::pages::{forbidden::ForbiddenPage, home::HomePage};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/", HomePage)]
    Home {},

    #[route("/forbidden", ForbiddenPage)]
    Forbidden {},
}
