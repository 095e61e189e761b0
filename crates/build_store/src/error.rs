//! Build store error types.

use thiserror::Error;

/// Errors that can occur during build store operations.
#[derive(Debug, Error)]
pub enum BuildStoreError {
    /// The draft has no hero selected, so it cannot be saved.
    #[error("A build needs a hero before it can be saved")]
    MissingHero,

    /// The draft already holds the maximum number of skill links.
    #[error("A build holds at most {max} skill links")]
    SkillSlotsFull { max: usize },

    /// A skill link index was outside the current sequence.
    #[error("Skill link index {index} is out of range for {len} links")]
    SkillIndexOutOfRange { index: usize, len: usize },

    /// A skill link carried more support skills than allowed.
    #[error("A skill link holds at most {max} support skills")]
    TooManySupportSkills { max: usize },

    /// The same support skill appeared twice within one link.
    #[error("Support skill is already linked: {skill_id}")]
    DuplicateSupportSkill { skill_id: String },

    /// Storage error.
    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BuildStoreError {
    /// Creates a skill index out of range error.
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::SkillIndexOutOfRange { index, len }
    }

    /// Creates a duplicate support skill error.
    pub fn duplicate_support(skill_id: impl Into<String>) -> Self {
        Self::DuplicateSupportSkill {
            skill_id: skill_id.into(),
        }
    }
}

/// Result type for build store operations.
pub type BuildStoreResult<T> = Result<T, BuildStoreError>;
