pub mod extract;
pub mod fetcher;
pub mod render;

pub use crate::domain::model::{AppIdea, FetchOutcome, GenerationRequest, IdeaSource};
pub use crate::domain::ports::{ConfigProvider, ContentGenerator};
pub use crate::utils::error::Result;
