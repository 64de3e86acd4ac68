//! Resource Screens
//!
//! One module per backend resource; each instantiates a `ListController`
//! and composes the shared components around its own field schema.

mod favorites;
mod investments;
mod movies;
mod notes;
mod passwords;
mod series;
mod websites;
mod worklog;

pub use favorites::FavoritesPage;
pub use investments::InvestmentsPage;
pub use movies::MoviesPage;
pub use notes::NotesPage;
pub use passwords::PasswordsPage;
pub use series::SeriesPage;
pub use websites::WebsitesPage;
pub use worklog::WorkLogPage;
