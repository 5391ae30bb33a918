mod album_detail;
mod album_song_row;
mod albums;
mod not_found;

pub use album_detail::AlbumDetailView;
pub use albums::LibraryView;
pub use not_found::NotFoundView;
