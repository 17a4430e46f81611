// ABOUTME: Data models for the workspace database and window configuration

pub mod window;
pub mod workspace;

pub use window::{Configuration, Window};
pub use workspace::{Database, Workspace};
