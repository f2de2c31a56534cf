pub mod error;
pub mod export;
pub mod models;
pub mod store;

pub use error::{DrillError, DrillResult};
pub use models::{
    BatchMode, Catalog, DrillSession, MemoryState, QualityScore, Question, QuestionId,
    StateCollection, advance, normalize, select_batch,
};
pub use store::{SqliteStore, StateStore};
