use crate::components::{view_label, AppView, Icon, IconName};
use dioxus::prelude::*;

#[component]
pub fn AppShell() -> Element {
    let view = use_route::<AppView>();
    let on_album = matches!(view, AppView::AlbumDetailView { .. });

    rsx! {
        div { class: "app-container",
            header { class: "navbar",
                if on_album {
                    Link {
                        class: "navbar-back",
                        to: AppView::LibraryView {},
                        Icon { name: IconName::Back, class: "icon" }
                    }
                }
                Link { class: "logo", to: AppView::LibraryView {},
                    Icon { name: IconName::Music, class: "icon" }
                    "Album Player"
                }
                span { class: "navbar-label", "{view_label(&view)}" }
            }
            main { class: "page-shell", Outlet::<AppView> {} }
        }
    }
}
