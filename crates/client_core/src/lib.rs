//! Client-side core of the user directory: loading users and their posts,
//! and the page-lifetime state built on top of them.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod expansion;
pub mod loader;
pub mod page;
pub mod store;

pub use aggregate::attach_posts;
pub use config::{load_settings, Settings};
pub use error::LoadError;
pub use expansion::ExpansionState;
pub use loader::{load_directory, DirectorySource, HttpDirectorySource};
pub use page::{UserCard, UsersPage};
pub use store::UserStore;
