use crate::components::{AppView, Icon, IconName};
use dioxus::prelude::*;

#[component]
pub fn NotFoundView(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    tracing::warn!(path = %path, "no route matches");

    rsx! {
        section { class: "not-found",
            h1 { "Page not found" }
            p { "Nothing lives at /{path}." }
            Link { class: "back-link", to: AppView::LibraryView {},
                Icon { name: IconName::Back, class: "icon" }
                "Back to the library"
            }
        }
    }
}
