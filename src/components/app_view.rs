//! Defines the application routes.

use crate::components::views::{AlbumDetailView, LibraryView, NotFoundView};
use crate::components::AppShell;
use dioxus::prelude::*;

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum AppView {
    #[layout(AppShell)]
        #[route("/")]
        LibraryView {},
        #[route("/album/:slug")]
        AlbumDetailView { slug: String },
    #[end_layout]
    #[route("/:..segments")]
    NotFoundView { segments: Vec<String> },
}

pub fn view_label(view: &AppView) -> &'static str {
    match view {
        AppView::LibraryView {} => "Library",
        AppView::AlbumDetailView { .. } => "Album",
        AppView::NotFoundView { .. } => "Not found",
    }
}
