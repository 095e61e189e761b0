//! Build-related entity definitions.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Equipment, EquipmentSlot};

/// Maximum number of skill links a build may hold.
pub const MAX_SKILL_LINKS: usize = 6;

/// Maximum number of support skills within one link.
pub const MAX_SUPPORT_SKILLS: usize = 5;

/// One active skill together with its linked supports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillLink {
    /// Identifier of the main (active) skill.
    pub main_skill: String,
    /// Identifiers of linked support skills, up to [`MAX_SUPPORT_SKILLS`].
    pub support_skills: Vec<String>,
}

impl SkillLink {
    /// Creates a new skill link with no supports.
    pub fn new(main_skill: impl Into<String>) -> Self {
        Self {
            main_skill: main_skill.into(),
            support_skills: Vec::new(),
        }
    }

    /// Sets the support skill identifiers.
    pub fn with_supports(mut self, supports: &[&str]) -> Self {
        self.support_skills = supports.iter().map(|s| s.to_string()).collect();
        self
    }
}

/// A completed character build, owned by its author once saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Build {
    /// Unique identifier, generated at draft creation and immutable.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Selected hero's identifier.
    pub hero_id: String,
    /// Selected hero trait, cleared whenever the hero changes.
    pub trait_id: Option<String>,
    /// Allocated talent identifiers (unique membership).
    pub talents: Vec<String>,
    /// Skill links, up to [`MAX_SKILL_LINKS`].
    pub skills: Vec<SkillLink>,
    /// Equipped items, at most one per slot. An empty slot is absent.
    pub equipment: BTreeMap<EquipmentSlot, Equipment>,
    /// Author identifier, snapshotted at first save.
    pub author_id: Uuid,
    /// Author display name, snapshotted at first save.
    pub author_name: String,
    /// When this build was first saved.
    pub created_at: DateTime<Utc>,
    /// When this build was last saved.
    pub updated_at: DateTime<Utc>,
    /// Whether the build is shared publicly.
    pub is_public: bool,
    /// Like counter, display-only.
    pub likes: u32,
    /// View counter, display-only.
    pub views: u32,
    /// Display tags, insertion order preserved.
    pub tags: Vec<String>,
    /// Optional long-form guide text.
    pub guide: Option<String>,
}
