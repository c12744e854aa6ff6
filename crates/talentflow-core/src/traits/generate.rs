// SPDX-FileCopyrightText: 2026 TalentFlow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Question generation trait for assessment builders.

use async_trait::async_trait;

use crate::error::TalentError;
use crate::types::Question;

/// Source of generated assessment questions.
///
/// Assessment builders can delegate question drafting to an external model.
/// The data layer only consumes the returned [`Question`] values (typically
/// by feeding them through the question replacement operation); no concrete
/// generator ships with the workspace.
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    /// Produces a question list for the given prompt.
    async fn generate_questions(&self, prompt: &str) -> Result<Vec<Question>, TalentError>;
}
