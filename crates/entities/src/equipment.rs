//! Equipment-related entity definitions.

use serde::{Deserialize, Serialize};

/// A gear slot on a character. Each build holds at most one item per slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentSlot {
    /// Head armor.
    Helmet,
    /// Chest armor.
    Chest,
    /// Hand armor.
    Gloves,
    /// Foot armor.
    Boots,
    /// Primary weapon.
    MainHand,
    /// Shield or secondary weapon.
    OffHand,
    /// Neck accessory.
    Amulet,
    /// First ring slot.
    Ring1,
    /// Second ring slot.
    Ring2,
    /// Waist accessory.
    Belt,
    /// Spirit companion binding.
    SpiritRing,
    /// Vorax mechanical attachment.
    VoraxLimb,
}

impl EquipmentSlot {
    /// Converts the slot to a string for storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Helmet => "helmet",
            Self::Chest => "chest",
            Self::Gloves => "gloves",
            Self::Boots => "boots",
            Self::MainHand => "main_hand",
            Self::OffHand => "off_hand",
            Self::Amulet => "amulet",
            Self::Ring1 => "ring1",
            Self::Ring2 => "ring2",
            Self::Belt => "belt",
            Self::SpiritRing => "spirit_ring",
            Self::VoraxLimb => "vorax_limb",
        }
    }

    /// Parses a slot from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "helmet" => Some(Self::Helmet),
            "chest" => Some(Self::Chest),
            "gloves" => Some(Self::Gloves),
            "boots" => Some(Self::Boots),
            "main_hand" => Some(Self::MainHand),
            "off_hand" => Some(Self::OffHand),
            "amulet" => Some(Self::Amulet),
            "ring1" => Some(Self::Ring1),
            "ring2" => Some(Self::Ring2),
            "belt" => Some(Self::Belt),
            "spirit_ring" => Some(Self::SpiritRing),
            "vorax_limb" => Some(Self::VoraxLimb),
            _ => None,
        }
    }

    /// Returns the human-readable slot name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Helmet => "Helmet",
            Self::Chest => "Chest Armor",
            Self::Gloves => "Gloves",
            Self::Boots => "Boots",
            Self::MainHand => "Main Hand",
            Self::OffHand => "Off Hand",
            Self::Amulet => "Amulet",
            Self::Ring1 => "Ring 1",
            Self::Ring2 => "Ring 2",
            Self::Belt => "Belt",
            Self::SpiritRing => "Spirit Ring",
            Self::VoraxLimb => "Vorax Limb",
        }
    }

    /// Returns all slots in display order.
    pub fn all() -> [EquipmentSlot; 12] {
        [
            Self::Helmet,
            Self::Chest,
            Self::Gloves,
            Self::Boots,
            Self::MainHand,
            Self::OffHand,
            Self::Amulet,
            Self::Ring1,
            Self::Ring2,
            Self::Belt,
            Self::SpiritRing,
            Self::VoraxLimb,
        ]
    }
}

/// Rarity tier of an equipment item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentRarity {
    /// Plain base item.
    #[default]
    Normal,
    /// Item with minor bonus affixes.
    Magic,
    /// Item with several strong affixes.
    Rare,
    /// Fixed-design item with build-defining stats.
    Legendary,
    /// One-of-a-kind item.
    Unique,
}

impl EquipmentRarity {
    /// Converts the rarity to a string for storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Magic => "magic",
            Self::Rare => "rare",
            Self::Legendary => "legendary",
            Self::Unique => "unique",
        }
    }

    /// Parses a rarity from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "normal" => Some(Self::Normal),
            "magic" => Some(Self::Magic),
            "rare" => Some(Self::Rare),
            "legendary" => Some(Self::Legendary),
            "unique" => Some(Self::Unique),
            _ => None,
        }
    }
}

/// How a stat modifier combines with the base value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierKind {
    /// Added directly to the stat.
    Flat,
    /// Additive percentage increase.
    Percent,
    /// Multiplicative scaling.
    Multiplier,
}

/// A single stat bonus carried by an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatModifier {
    /// Stat identifier (e.g. "armor", "attack_speed").
    pub stat: String,
    /// Magnitude of the bonus.
    pub value: f64,
    /// How the bonus applies.
    pub kind: ModifierKind,
}

impl StatModifier {
    /// Creates a new stat modifier.
    pub fn new(stat: impl Into<String>, value: f64, kind: ModifierKind) -> Self {
        Self {
            stat: stat.into(),
            value,
            kind,
        }
    }
}

/// Attribute requirements to equip an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Requirements {
    /// Minimum character level.
    pub level: Option<u32>,
    /// Minimum strength.
    pub strength: Option<u32>,
    /// Minimum dexterity.
    pub dexterity: Option<u32>,
    /// Minimum intelligence.
    pub intelligence: Option<u32>,
}

impl Requirements {
    /// Requirements gated on level only.
    pub fn level(level: u32) -> Self {
        Self {
            level: Some(level),
            ..Self::default()
        }
    }

    /// Returns true when no requirement is set.
    pub fn is_empty(&self) -> bool {
        self.level.is_none()
            && self.strength.is_none()
            && self.dexterity.is_none()
            && self.intelligence.is_none()
    }
}

/// An equippable item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Slot this item occupies.
    pub slot: EquipmentSlot,
    /// Rarity tier.
    pub rarity: EquipmentRarity,
    /// Base item type name.
    pub base_type: String,
    /// Stat bonuses.
    pub stats: Vec<StatModifier>,
    /// Attribute requirements.
    pub requirements: Requirements,
}

impl Equipment {
    /// Creates a new equipment item.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        slot: EquipmentSlot,
        rarity: EquipmentRarity,
        base_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slot,
            rarity,
            base_type: base_type.into(),
            stats: Vec::new(),
            requirements: Requirements::default(),
        }
    }

    /// Adds a stat modifier to this item.
    pub fn with_stat(mut self, stat: impl Into<String>, value: f64, kind: ModifierKind) -> Self {
        self.stats.push(StatModifier::new(stat, value, kind));
        self
    }

    /// Sets the attribute requirements.
    pub fn with_requirements(mut self, requirements: Requirements) -> Self {
        self.requirements = requirements;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_round_trip() {
        for slot in EquipmentSlot::all() {
            assert_eq!(EquipmentSlot::parse(slot.as_str()), Some(slot));
        }
        assert_eq!(EquipmentSlot::parse("backpack"), None);
    }

    #[test]
    fn test_slot_serde_matches_as_str() {
        let json = serde_json::to_string(&EquipmentSlot::SpiritRing).unwrap();
        assert_eq!(json, "\"spirit_ring\"");
        let slot: EquipmentSlot = serde_json::from_str("\"vorax_limb\"").unwrap();
        assert_eq!(slot, EquipmentSlot::VoraxLimb);
    }

    #[test]
    fn test_equipment_builder() {
        let item = Equipment::new(
            "iron-helmet",
            "Iron Helmet",
            EquipmentSlot::Helmet,
            EquipmentRarity::Normal,
            "Iron Helmet",
        )
        .with_stat("armor", 50.0, ModifierKind::Flat)
        .with_requirements(Requirements::level(20));

        assert_eq!(item.stats.len(), 1);
        assert_eq!(item.stats[0].stat, "armor");
        assert_eq!(item.requirements.level, Some(20));
        assert!(item.requirements.strength.is_none());
    }

    #[test]
    fn test_requirements_is_empty() {
        assert!(Requirements::default().is_empty());
        assert!(!Requirements::level(10).is_empty());
    }
}
