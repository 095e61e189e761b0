//! The in-progress build and its conversion to a completed one.

use std::collections::BTreeMap;

use chrono::Utc;
use entities::{Build, Equipment, EquipmentSlot, SkillLink};
use uuid::Uuid;

use crate::{BuildStoreError, BuildStoreResult};

/// Name given to a freshly created draft.
pub const NEW_BUILD_NAME: &str = "New Build";

/// Fallback name applied when a draft is saved with an empty name.
pub const UNNAMED_BUILD_NAME: &str = "Unnamed Build";

/// A build under edit. Unlike [`Build`], the hero may still be unselected
/// and no author or timestamps exist yet; those are supplied at save time.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildDraft {
    /// Identifier the saved build will keep.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Selected hero, if any.
    pub hero_id: Option<String>,
    /// Selected hero trait, cleared whenever the hero changes.
    pub trait_id: Option<String>,
    /// Allocated talent identifiers.
    pub talents: Vec<String>,
    /// Skill links.
    pub skills: Vec<SkillLink>,
    /// Equipped items keyed by slot.
    pub equipment: BTreeMap<EquipmentSlot, Equipment>,
    /// Whether the build will be shared publicly.
    pub is_public: bool,
    /// Like counter carried over from a loaded build.
    pub likes: u32,
    /// View counter carried over from a loaded build.
    pub views: u32,
    /// Display tags.
    pub tags: Vec<String>,
    /// Optional long-form guide text.
    pub guide: Option<String>,
}

impl BuildDraft {
    /// Creates a fresh draft with a new identifier and empty collections.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: NEW_BUILD_NAME.to_string(),
            description: String::new(),
            hero_id: None,
            trait_id: None,
            talents: Vec::new(),
            skills: Vec::new(),
            equipment: BTreeMap::new(),
            is_public: false,
            likes: 0,
            views: 0,
            tags: Vec::new(),
            guide: None,
        }
    }

    /// Materializes the draft into a completed build.
    ///
    /// Fails with [`BuildStoreError::MissingHero`] when no hero is selected.
    /// An empty name becomes [`UNNAMED_BUILD_NAME`]. Both timestamps are set
    /// to now; preserving `created_at` across updates is the store's upsert
    /// duty.
    pub fn finalize(&self, author_id: Uuid, author_name: &str) -> BuildStoreResult<Build> {
        let hero_id = self
            .hero_id
            .as_deref()
            .filter(|h| !h.is_empty())
            .ok_or(BuildStoreError::MissingHero)?;

        let name = if self.name.is_empty() {
            UNNAMED_BUILD_NAME.to_string()
        } else {
            self.name.clone()
        };

        let now = Utc::now();
        Ok(Build {
            id: self.id,
            name,
            description: self.description.clone(),
            hero_id: hero_id.to_string(),
            trait_id: self.trait_id.clone(),
            talents: self.talents.clone(),
            skills: self.skills.clone(),
            equipment: self.equipment.clone(),
            author_id,
            author_name: author_name.to_string(),
            created_at: now,
            updated_at: now,
            is_public: self.is_public,
            likes: self.likes,
            views: self.views,
            tags: self.tags.clone(),
            guide: self.guide.clone(),
        })
    }
}

impl Default for BuildDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&Build> for BuildDraft {
    /// Copies a saved build (keeping its id) into draft shape for editing.
    fn from(build: &Build) -> Self {
        Self {
            id: build.id,
            name: build.name.clone(),
            description: build.description.clone(),
            hero_id: Some(build.hero_id.clone()),
            trait_id: build.trait_id.clone(),
            talents: build.talents.clone(),
            skills: build.skills.clone(),
            equipment: build.equipment.clone(),
            is_public: build.is_public,
            likes: build.likes,
            views: build.views,
            tags: build.tags.clone(),
            guide: build.guide.clone(),
        }
    }
}
