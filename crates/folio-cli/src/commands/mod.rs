//! Command implementations.

pub mod listings;
pub mod optimize;
pub mod screen;

pub use listings::ListingsArgs;
pub use optimize::OptimizeArgs;
pub use screen::ScreenArgs;
