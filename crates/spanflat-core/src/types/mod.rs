pub mod document;
pub mod record;
pub mod split;

pub use document::{EntitySpan, SourceDocument};
pub use record::{FlatEntity, FlatRecord};
pub use split::Split;
