mod checker;
mod converter;
mod fix;
mod visibility;

pub use checker::{LineSeparatorCheck, SeparatorState};
pub use converter::{FsLineSeparatorConverter, LineSeparatorConverter, normalize_separators};
pub use fix::ConvertSeparatorsFix;
pub use visibility::{DefaultVisibilityPolicy, FileVisibilityPolicy};
