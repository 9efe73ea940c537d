mod document;
mod file_info;
mod front_matter;
mod slug;
mod sorting;
mod taxonomy;

pub use document::*;
pub use file_info::*;
pub use front_matter::*;
pub use slug::*;
pub use sorting::*;
pub use taxonomy::*;
