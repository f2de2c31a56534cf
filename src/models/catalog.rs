//! Catalog is an ordered, immutable set of practice questions.
//!
//! The scheduler never mutates a catalog; it only needs its length and an
//! indexed lookup when the host renders a question.
use super::{Question, QuestionId};
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub name: String,
    pub questions: Vec<Question>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            name: "My Catalog".to_string(),
            questions: Vec::new(),
        }
    }
}

impl Catalog {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.questions.get(id as usize)
    }

    /// Maximum score attainable across the whole catalog.
    pub fn total_points(&self) -> f64 {
        self.questions.iter().map(|q| q.total_points).sum()
    }
}
