//! Equipment reference table.

use std::sync::LazyLock;

use entities::{Equipment, EquipmentRarity, EquipmentSlot, ModifierKind, Requirements};

static EQUIPMENT: LazyLock<Vec<Equipment>> = LazyLock::new(|| {
    vec![
        // Helmets
        Equipment::new(
            "iron-helmet",
            "Iron Helmet",
            EquipmentSlot::Helmet,
            EquipmentRarity::Normal,
            "Iron Helmet",
        )
        .with_stat("armor", 50.0, ModifierKind::Flat),
        Equipment::new(
            "steel-helmet",
            "Steel Helmet",
            EquipmentSlot::Helmet,
            EquipmentRarity::Normal,
            "Steel Helmet",
        )
        .with_stat("armor", 80.0, ModifierKind::Flat)
        .with_requirements(Requirements::level(20)),
        Equipment::new(
            "mage-hood",
            "Mage Hood",
            EquipmentSlot::Helmet,
            EquipmentRarity::Normal,
            "Cloth Hood",
        )
        .with_stat("energy_shield", 40.0, ModifierKind::Flat)
        .with_stat("mana", 20.0, ModifierKind::Flat),
        // Chest armor
        Equipment::new(
            "iron-plate",
            "Iron Plate",
            EquipmentSlot::Chest,
            EquipmentRarity::Normal,
            "Iron Plate",
        )
        .with_stat("armor", 100.0, ModifierKind::Flat),
        Equipment::new(
            "steel-plate",
            "Steel Plate",
            EquipmentSlot::Chest,
            EquipmentRarity::Normal,
            "Steel Plate",
        )
        .with_stat("armor", 180.0, ModifierKind::Flat)
        .with_requirements(Requirements {
            level: Some(30),
            strength: Some(80),
            ..Requirements::default()
        }),
        Equipment::new(
            "leather-vest",
            "Leather Vest",
            EquipmentSlot::Chest,
            EquipmentRarity::Normal,
            "Leather Vest",
        )
        .with_stat("armor", 60.0, ModifierKind::Flat)
        .with_stat("evasion", 40.0, ModifierKind::Flat),
        Equipment::new(
            "mage-robe",
            "Mage Robe",
            EquipmentSlot::Chest,
            EquipmentRarity::Normal,
            "Silk Robe",
        )
        .with_stat("energy_shield", 80.0, ModifierKind::Flat)
        .with_stat("mana", 40.0, ModifierKind::Flat),
        // Gloves
        Equipment::new(
            "iron-gauntlets",
            "Iron Gauntlets",
            EquipmentSlot::Gloves,
            EquipmentRarity::Normal,
            "Iron Gauntlets",
        )
        .with_stat("armor", 30.0, ModifierKind::Flat),
        Equipment::new(
            "leather-gloves",
            "Leather Gloves",
            EquipmentSlot::Gloves,
            EquipmentRarity::Normal,
            "Leather Gloves",
        )
        .with_stat("armor", 20.0, ModifierKind::Flat)
        .with_stat("attack_speed", 5.0, ModifierKind::Percent),
        // Boots
        Equipment::new(
            "iron-boots",
            "Iron Boots",
            EquipmentSlot::Boots,
            EquipmentRarity::Normal,
            "Iron Boots",
        )
        .with_stat("armor", 40.0, ModifierKind::Flat)
        .with_stat("movement_speed", 10.0, ModifierKind::Percent),
        Equipment::new(
            "leather-boots",
            "Leather Boots",
            EquipmentSlot::Boots,
            EquipmentRarity::Normal,
            "Leather Boots",
        )
        .with_stat("armor", 25.0, ModifierKind::Flat)
        .with_stat("movement_speed", 20.0, ModifierKind::Percent),
        // One-handed weapons
        Equipment::new(
            "iron-sword",
            "Iron Sword",
            EquipmentSlot::MainHand,
            EquipmentRarity::Normal,
            "Iron Sword",
        )
        .with_stat("physical_damage", 25.0, ModifierKind::Flat)
        .with_stat("attack_speed", 1.4, ModifierKind::Flat),
        Equipment::new(
            "steel-sword",
            "Steel Sword",
            EquipmentSlot::MainHand,
            EquipmentRarity::Normal,
            "Steel Sword",
        )
        .with_stat("physical_damage", 45.0, ModifierKind::Flat)
        .with_stat("attack_speed", 1.5, ModifierKind::Flat)
        .with_requirements(Requirements {
            level: Some(25),
            strength: Some(50),
            ..Requirements::default()
        }),
        Equipment::new(
            "iron-axe",
            "Iron Axe",
            EquipmentSlot::MainHand,
            EquipmentRarity::Normal,
            "Iron Axe",
        )
        .with_stat("physical_damage", 35.0, ModifierKind::Flat)
        .with_stat("attack_speed", 1.2, ModifierKind::Flat),
        Equipment::new(
            "mage-wand",
            "Mage Wand",
            EquipmentSlot::MainHand,
            EquipmentRarity::Normal,
            "Wooden Wand",
        )
        .with_stat("spell_damage", 20.0, ModifierKind::Percent)
        .with_stat("mana", 30.0, ModifierKind::Flat),
        Equipment::new(
            "crystal-wand",
            "Crystal Wand",
            EquipmentSlot::MainHand,
            EquipmentRarity::Normal,
            "Crystal Wand",
        )
        .with_stat("spell_damage", 35.0, ModifierKind::Percent)
        .with_stat("critical_chance", 8.0, ModifierKind::Flat)
        .with_requirements(Requirements {
            level: Some(30),
            intelligence: Some(80),
            ..Requirements::default()
        }),
        // Bows
        Equipment::new(
            "short-bow",
            "Short Bow",
            EquipmentSlot::MainHand,
            EquipmentRarity::Normal,
            "Short Bow",
        )
        .with_stat("physical_damage", 20.0, ModifierKind::Flat)
        .with_stat("attack_speed", 1.6, ModifierKind::Flat),
        Equipment::new(
            "long-bow",
            "Long Bow",
            EquipmentSlot::MainHand,
            EquipmentRarity::Normal,
            "Long Bow",
        )
        .with_stat("physical_damage", 40.0, ModifierKind::Flat)
        .with_stat("attack_speed", 1.3, ModifierKind::Flat)
        .with_requirements(Requirements {
            level: Some(25),
            dexterity: Some(60),
            ..Requirements::default()
        }),
        // Shields
        Equipment::new(
            "iron-shield",
            "Iron Shield",
            EquipmentSlot::OffHand,
            EquipmentRarity::Normal,
            "Iron Shield",
        )
        .with_stat("armor", 80.0, ModifierKind::Flat)
        .with_stat("block_chance", 20.0, ModifierKind::Flat),
        Equipment::new(
            "tower-shield",
            "Tower Shield",
            EquipmentSlot::OffHand,
            EquipmentRarity::Normal,
            "Tower Shield",
        )
        .with_stat("armor", 150.0, ModifierKind::Flat)
        .with_stat("block_chance", 30.0, ModifierKind::Flat)
        .with_requirements(Requirements {
            level: Some(30),
            strength: Some(100),
            ..Requirements::default()
        }),
        // Accessories
        Equipment::new(
            "gold-amulet",
            "Gold Amulet",
            EquipmentSlot::Amulet,
            EquipmentRarity::Normal,
            "Gold Amulet",
        )
        .with_stat("all_attributes", 10.0, ModifierKind::Flat),
        Equipment::new(
            "iron-ring",
            "Iron Ring",
            EquipmentSlot::Ring1,
            EquipmentRarity::Normal,
            "Iron Ring",
        )
        .with_stat("physical_damage", 5.0, ModifierKind::Flat),
        Equipment::new(
            "gold-ring",
            "Gold Ring",
            EquipmentSlot::Ring1,
            EquipmentRarity::Normal,
            "Gold Ring",
        )
        .with_stat("elemental_damage", 10.0, ModifierKind::Percent),
        Equipment::new(
            "leather-belt",
            "Leather Belt",
            EquipmentSlot::Belt,
            EquipmentRarity::Normal,
            "Leather Belt",
        )
        .with_stat("life", 30.0, ModifierKind::Flat),
        Equipment::new(
            "heavy-belt",
            "Heavy Belt",
            EquipmentSlot::Belt,
            EquipmentRarity::Normal,
            "Heavy Belt",
        )
        .with_stat("life", 50.0, ModifierKind::Flat)
        .with_stat("strength", 15.0, ModifierKind::Flat),
        // Spirit ring
        Equipment::new(
            "spirit-ring-basic",
            "Basic Spirit Ring",
            EquipmentSlot::SpiritRing,
            EquipmentRarity::Normal,
            "Spirit Ring",
        )
        .with_stat("spirit_power", 20.0, ModifierKind::Flat)
        .with_stat("mana_regen", 5.0, ModifierKind::Percent),
        // Vorax limb
        Equipment::new(
            "vorax-limb-basic",
            "Basic Vorax Limb",
            EquipmentSlot::VoraxLimb,
            EquipmentRarity::Normal,
            "Vorax Limb",
        )
        .with_stat("vorax_power", 10.0, ModifierKind::Flat)
        .with_stat("damage", 5.0, ModifierKind::Percent),
        // Legendary items
        Equipment::new(
            "crown-of-flames",
            "Crown of Flames",
            EquipmentSlot::Helmet,
            EquipmentRarity::Legendary,
            "Royal Crown",
        )
        .with_stat("armor", 120.0, ModifierKind::Flat)
        .with_stat("fire_damage", 30.0, ModifierKind::Percent)
        .with_stat("fire_resistance", 40.0, ModifierKind::Flat)
        .with_requirements(Requirements::level(50)),
        Equipment::new(
            "frostbite-gauntlets",
            "Frostbite Gauntlets",
            EquipmentSlot::Gloves,
            EquipmentRarity::Legendary,
            "Eternal Gauntlets",
        )
        .with_stat("armor", 80.0, ModifierKind::Flat)
        .with_stat("cold_damage", 25.0, ModifierKind::Percent)
        .with_stat("freeze_chance", 15.0, ModifierKind::Flat)
        .with_requirements(Requirements::level(45)),
        Equipment::new(
            "boots-of-haste",
            "Boots of Haste",
            EquipmentSlot::Boots,
            EquipmentRarity::Legendary,
            "Swift Boots",
        )
        .with_stat("armor", 60.0, ModifierKind::Flat)
        .with_stat("movement_speed", 35.0, ModifierKind::Percent)
        .with_stat("attack_speed", 15.0, ModifierKind::Percent)
        .with_requirements(Requirements::level(40)),
        Equipment::new(
            "sword-of-fury",
            "Sword of Fury",
            EquipmentSlot::MainHand,
            EquipmentRarity::Legendary,
            "Berserker Blade",
        )
        .with_stat("physical_damage", 150.0, ModifierKind::Flat)
        .with_stat("attack_speed", 1.8, ModifierKind::Flat)
        .with_stat("critical_chance", 10.0, ModifierKind::Flat)
        .with_stat("life_leech", 5.0, ModifierKind::Percent)
        .with_requirements(Requirements {
            level: Some(60),
            strength: Some(150),
            ..Requirements::default()
        }),
    ]
});

/// Returns every item, base pieces first, then legendaries.
pub fn equipment() -> &'static [Equipment] {
    &EQUIPMENT
}

/// Looks up an item by identifier.
pub fn equipment_by_id(id: &str) -> Option<&'static Equipment> {
    EQUIPMENT.iter().find(|e| e.id == id)
}

/// Returns the items that fit one slot.
pub fn equipment_by_slot(slot: EquipmentSlot) -> Vec<&'static Equipment> {
    EQUIPMENT.iter().filter(|e| e.slot == slot).collect()
}

/// Returns the items of one rarity tier.
pub fn equipment_by_rarity(rarity: EquipmentRarity) -> Vec<&'static Equipment> {
    EQUIPMENT.iter().filter(|e| e.rarity == rarity).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_size() {
        assert_eq!(equipment().len(), 31);
        assert_eq!(equipment_by_rarity(EquipmentRarity::Legendary).len(), 4);
    }

    #[test]
    fn test_equipment_lookup() {
        let sword = equipment_by_id("sword-of-fury").unwrap();
        assert_eq!(sword.slot, EquipmentSlot::MainHand);
        assert_eq!(sword.rarity, EquipmentRarity::Legendary);
        assert_eq!(sword.requirements.strength, Some(150));
        assert!(equipment_by_id("unknown").is_none());
    }

    #[test]
    fn test_slot_filter() {
        let helmets = equipment_by_slot(EquipmentSlot::Helmet);
        assert_eq!(helmets.len(), 4);
        assert!(helmets.iter().all(|e| e.slot == EquipmentSlot::Helmet));

        // Exactly one item fits the vorax limb slot.
        assert_eq!(equipment_by_slot(EquipmentSlot::VoraxLimb).len(), 1);
    }
}
