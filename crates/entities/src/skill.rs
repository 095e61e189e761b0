//! Skill-related entity definitions.

use serde::{Deserialize, Serialize};

/// Category of a skill gem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillType {
    /// Directly usable skill.
    Active,
    /// Modifies a linked active skill.
    Support,
    /// Always-on effect.
    Passive,
    /// Triggers linked skills on a condition.
    TriggerMedium,
    /// High-tier support variant.
    NobleSupport,
    /// Highest-tier support variant.
    MagnificentSupport,
}

impl SkillType {
    /// Converts the skill type to a string for storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Support => "support",
            Self::Passive => "passive",
            Self::TriggerMedium => "trigger_medium",
            Self::NobleSupport => "noble_support",
            Self::MagnificentSupport => "magnificent_support",
        }
    }

    /// Parses a skill type from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "active" => Some(Self::Active),
            "support" => Some(Self::Support),
            "passive" => Some(Self::Passive),
            "trigger_medium" => Some(Self::TriggerMedium),
            "noble_support" => Some(Self::NobleSupport),
            "magnificent_support" => Some(Self::MagnificentSupport),
            _ => None,
        }
    }

    /// Returns true for the support-family types that can back a main skill.
    pub fn is_support(&self) -> bool {
        matches!(
            self,
            Self::Support | Self::NobleSupport | Self::MagnificentSupport
        )
    }
}

/// A skill gem from the static catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Skill category.
    pub skill_type: SkillType,
    /// What the skill does.
    pub description: String,
    /// Searchable tags (e.g. "melee", "fire").
    pub tags: Vec<String>,
    /// Mana cost per use, for active skills.
    pub mana_cost: Option<u32>,
    /// Cooldown in seconds, when the skill has one.
    pub cooldown: Option<u32>,
}

impl Skill {
    /// Creates a new skill.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        skill_type: SkillType,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            skill_type,
            description: description.into(),
            tags: Vec::new(),
            mana_cost: None,
            cooldown: None,
        }
    }

    /// Sets the searchable tags.
    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    /// Sets the mana cost.
    pub fn with_mana_cost(mut self, mana_cost: u32) -> Self {
        self.mana_cost = Some(mana_cost);
        self
    }

    /// Sets the cooldown in seconds.
    pub fn with_cooldown(mut self, cooldown: u32) -> Self {
        self.cooldown = Some(cooldown);
        self
    }
}
