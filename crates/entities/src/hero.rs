//! Hero-related entity definitions.

use serde::{Deserialize, Serialize};

/// Talent tree archetype a hero draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TalentArchetype {
    /// Raw physical power and durability.
    GodOfMight,
    /// Precision, projectiles, and mobility.
    GoddessOfHunting,
    /// Elemental and arcane magic.
    GoddessOfKnowledge,
    /// Explosives and battlefield aggression.
    GodOfWar,
    /// Speed, stealth, and control.
    GoddessOfTrickery,
    /// Constructs and deployables.
    GodOfMachines,
}

impl TalentArchetype {
    /// Converts the archetype to a string for storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GodOfMight => "god_of_might",
            Self::GoddessOfHunting => "goddess_of_hunting",
            Self::GoddessOfKnowledge => "goddess_of_knowledge",
            Self::GodOfWar => "god_of_war",
            Self::GoddessOfTrickery => "goddess_of_trickery",
            Self::GodOfMachines => "god_of_machines",
        }
    }

    /// Parses an archetype from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "god_of_might" => Some(Self::GodOfMight),
            "goddess_of_hunting" => Some(Self::GoddessOfHunting),
            "goddess_of_knowledge" => Some(Self::GoddessOfKnowledge),
            "god_of_war" => Some(Self::GodOfWar),
            "goddess_of_trickery" => Some(Self::GoddessOfTrickery),
            "god_of_machines" => Some(Self::GodOfMachines),
            _ => None,
        }
    }
}

/// A playable hero from the static catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Class title shown alongside the name.
    pub class_name: String,
    /// Talent archetype this hero uses.
    pub archetype: TalentArchetype,
    /// Flavor and playstyle description.
    pub description: String,
}

impl Hero {
    /// Creates a new hero.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        class_name: impl Into<String>,
        archetype: TalentArchetype,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            class_name: class_name.into(),
            archetype,
            description: description.into(),
        }
    }
}

/// A selectable specialization belonging to one hero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroTrait {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// What the trait changes about the hero.
    pub description: String,
    /// Owning hero's identifier.
    pub hero_id: String,
}

impl HeroTrait {
    /// Creates a new hero trait.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        hero_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            hero_id: hero_id.into(),
        }
    }
}
