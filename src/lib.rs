pub mod config;
pub mod error;
pub mod path;
pub mod shell_exec;
pub mod styling;
pub mod vcs;

pub use error::FindError;
pub use vcs::{RepositoryRoot, Separator, VcsDescriptor};
