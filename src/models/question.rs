//! Question is an open-ended prompt self-marked against a list of marking points.
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub total_points: f64,
    pub marking_points: Vec<String>,
}
