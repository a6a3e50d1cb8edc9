mod bookmark;
mod highlight;
mod image;
mod item;
mod query;
mod ranking;
mod window;

pub use bookmark::Bookmark;
pub use highlight::{highlight, MatchSpan};
pub use image::{ImageEntry, IMAGE_EXTENSION};
pub use item::{Action, ActionCommand, Item};
pub use query::{ParsedQuery, Scope, SCOPE_SENTINEL};
pub use ranking::{rank, RankOptions, RankedResult, Ranking};
pub use window::{WindowRecord, NO_WORKSPACE};
