use crate::catalog::{albums, Album};
use crate::components::{AppView, Icon, IconName};
use dioxus::prelude::*;

/// Albums whose title or artist contains the query, ignoring case.
fn filter_albums<'a>(albums: &'a [Album], query: &str) -> Vec<&'a Album> {
    let query = query.trim().to_lowercase();
    albums
        .iter()
        .filter(|album| {
            query.is_empty()
                || album.title.to_lowercase().contains(&query)
                || album.artist.to_lowercase().contains(&query)
        })
        .collect()
}

#[component]
pub fn LibraryView() -> Element {
    let mut search_query = use_signal(String::new);
    let query = search_query();
    let visible = filter_albums(albums(), &query);

    rsx! {
        section { class: "library",
            header { class: "page-header",
                h1 { class: "page-title", "Albums" }
                input {
                    class: "library-search",
                    placeholder: "Search albums",
                    value: search_query,
                    oninput: move |e| search_query.set(e.value()),
                }
            }
            if visible.is_empty() {
                p { class: "library-empty", "No albums match \"{query}\"" }
            }
            div { class: "album-covers",
                for album in visible.iter() {
                    Link {
                        key: "{album.slug}",
                        class: "album-cover",
                        to: AppView::AlbumDetailView {
                            slug: album.slug.clone(),
                        },
                        if album.album_cover.is_empty() {
                            Icon { name: IconName::Album, class: "album-cover-placeholder" }
                        } else {
                            img { src: "{album.album_cover}", alt: "{album.title}" }
                        }
                        div { class: "album-info",
                            div { class: "album-title", "{album.title}" }
                            div { class: "album-artist", "{album.artist}" }
                            div { class: "album-song-count", "{album.song_count_label()}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::parse_catalog;

    fn sample() -> Vec<Album> {
        parse_catalog(
            r#"[
                {"title": "The Colors", "artist": "Pablo Picasso"},
                {"title": "The Telephone", "artist": "Guglielmo Marconi"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn empty_query_keeps_every_album() {
        let albums = sample();
        assert_eq!(filter_albums(&albums, "  ").len(), 2);
    }

    #[test]
    fn query_matches_title_or_artist() {
        let albums = sample();
        let by_title = filter_albums(&albums, "colors");
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].slug, "the-colors");

        let by_artist = filter_albums(&albums, "MARCONI");
        assert_eq!(by_artist[0].title, "The Telephone");

        assert!(filter_albums(&albums, "jazz").is_empty());
    }
}
