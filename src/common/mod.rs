pub mod paths;

pub use paths::ProjectLayout;
