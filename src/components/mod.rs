//! The components module contains all shared components for our app.

mod app;
mod app_view;
pub mod audio_manager;
mod icons;
mod player;
pub mod views;

pub use app::*;
pub use app_view::*;
pub use icons::*;
pub use player::*;
// Views are accessed via views::ViewName
