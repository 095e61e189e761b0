//! Hero and hero trait reference tables.

use std::sync::LazyLock;

use entities::{Hero, HeroTrait, TalentArchetype};

static HERO_TRAITS: LazyLock<Vec<HeroTrait>> = LazyLock::new(|| {
    vec![
        // Rehan
        HeroTrait::new(
            "rehan-anger",
            "Anger",
            "Rage-fueled burst damage with high DPS potential",
            "rehan",
        ),
        HeroTrait::new(
            "rehan-seething",
            "Seething Silhouette",
            "Shadow-based melee combat with enhanced sustain",
            "rehan",
        ),
        // Carino
        HeroTrait::new(
            "carino-lethal",
            "Lethal Flash",
            "All shots return and deal double damage with Evil Ouroboros",
            "carino",
        ),
        HeroTrait::new(
            "carino-ranger",
            "Ranger of Glory",
            "Traditional ranged combat with enhanced mobility",
            "carino",
        ),
        HeroTrait::new(
            "carino-zealot",
            "Zealot of War",
            "Aggressive ranged playstyle with war-themed abilities",
            "carino",
        ),
        // Gemma
        HeroTrait::new(
            "gemma-icefire",
            "Ice-Fire Fusion",
            "Combines frost and fire magic for devastating combos",
            "gemma",
        ),
        HeroTrait::new(
            "gemma-flame",
            "Flame of Pleasure",
            "Pure fire magic specialization with high burst damage",
            "gemma",
        ),
        HeroTrait::new(
            "gemma-frost",
            "Frost Heart",
            "Cold-focused spellcaster with crowd control",
            "gemma",
        ),
        // Moto
        HeroTrait::new(
            "moto-order",
            "Order Calling",
            "Summons mechanical minions to fight alongside you",
            "moto",
        ),
        HeroTrait::new(
            "moto-charge",
            "Charge Calling",
            "Aggressive summoner with offensive tech devices",
            "moto",
        ),
        // Erika
        HeroTrait::new(
            "erika-lightning",
            "Lightning Shadow",
            "Fast-paced lightning-infused assassination",
            "erika",
        ),
        HeroTrait::new(
            "erika-blade",
            "Blade of Destruction",
            "Melee assassin with devastating critical strikes",
            "erika",
        ),
        // Youga
        HeroTrait::new(
            "youga-illusion",
            "Illusion",
            "Creates shadow clones for AoE damage and control",
            "youga",
        ),
        HeroTrait::new(
            "youga-elapse",
            "Elapse",
            "Time manipulation for strategic combat advantages",
            "youga",
        ),
        // Thea
        HeroTrait::new(
            "thea-wisdom",
            "Wisdom of the Gods",
            "Divine knowledge granting powerful buffs",
            "thea",
        ),
        HeroTrait::new(
            "thea-incarnation",
            "Incarnation of the Gods",
            "Channel divine power for devastating attacks",
            "thea",
        ),
        // Iris
        HeroTrait::new(
            "iris-vigilant",
            "Vigilant Breeze",
            "Balanced damage and tankiness with wind abilities",
            "iris",
        ),
        HeroTrait::new(
            "iris-storm",
            "Storm Caller",
            "Pure wind magic with high mobility",
            "iris",
        ),
        // Bing
        HeroTrait::new(
            "bing-explosive",
            "Explosive Expert",
            "Bomb and explosive-based combat",
            "bing",
        ),
        HeroTrait::new(
            "bing-demolition",
            "Demolition Master",
            "Massive area destruction capabilities",
            "bing",
        ),
        // Rosa
        HeroTrait::new(
            "rosa-guardian",
            "Guardian",
            "High defense and team support abilities",
            "rosa",
        ),
        HeroTrait::new(
            "rosa-protector",
            "Divine Protector",
            "Ultimate defensive capabilities with healing",
            "rosa",
        ),
        // Selena
        HeroTrait::new(
            "selena-bubble",
            "Bubble Master",
            "Battlefield control through bubble mechanics",
            "selena",
        ),
        HeroTrait::new(
            "selena-ocean",
            "Ocean Depths",
            "Water-based magic with drowning effects",
            "selena",
        ),
    ]
});

static HEROES: LazyLock<Vec<Hero>> = LazyLock::new(|| {
    vec![
        Hero::new(
            "rehan",
            "Rehan",
            "Berserker",
            TalentArchetype::GodOfMight,
            "A powerful melee warrior who excels at close-range combat. Rehan can take \
             massive damage while dealing devastating blows to enemies. His rage-fueled \
             abilities scale with damage taken.",
        ),
        Hero::new(
            "carino",
            "Carino",
            "Divineshot",
            TalentArchetype::GoddessOfHunting,
            "A ranged specialist who wields various projectile weapons with deadly \
             precision. Carino relies on mobility and positioning to stay alive while \
             dealing consistent damage from afar.",
        ),
        Hero::new(
            "gemma",
            "Gemma",
            "Frostfire",
            TalentArchetype::GoddessOfKnowledge,
            "A mage who commands both fire and frost magic. While not as durable as other \
             heroes, Gemma compensates with incredible mobility and devastating elemental \
             damage.",
        ),
        Hero::new(
            "moto",
            "Moto",
            "Commander",
            TalentArchetype::GodOfMachines,
            "A technological summoner who commands mechanical devices and drones in \
             battle. Moto can adapt to any situation by switching between offensive and \
             defensive deployables.",
        ),
        Hero::new(
            "erika",
            "Erika",
            "Assassin",
            TalentArchetype::GoddessOfTrickery,
            "The fastest hero in the game. Erika trades durability for incredible speed \
             and burst damage. Perfect for players who enjoy high-risk, high-reward \
             playstyles.",
        ),
        Hero::new(
            "youga",
            "Youga",
            "Spacetime Witness",
            TalentArchetype::GoddessOfKnowledge,
            "A master of spacetime manipulation who creates shadow clones and controls \
             the battlefield. Youga excels at AoE damage and crowd control.",
        ),
        Hero::new(
            "thea",
            "Thea",
            "Divine Caster",
            TalentArchetype::GoddessOfKnowledge,
            "A divine spellcaster who channels the power of the gods. Thea provides \
             powerful buffs and devastating holy magic.",
        ),
        Hero::new(
            "iris",
            "Iris",
            "Wind Walker",
            TalentArchetype::GoddessOfHunting,
            "A balanced hero combining wind magic with solid defenses. Iris is great for \
             players who want damage and tankiness without heavy micromanagement.",
        ),
        Hero::new(
            "bing",
            "Bing",
            "Demolisher",
            TalentArchetype::GodOfWar,
            "An explosive expert with high agility and devastating bomb abilities. Bing \
             excels at clearing large groups of enemies with area damage.",
        ),
        Hero::new(
            "rosa",
            "Rosa",
            "Guardian",
            TalentArchetype::GodOfMight,
            "The tankiest hero with high defense and survivability. Rosa is perfect for \
             new players and excels at supporting teammates in co-op.",
        ),
        Hero::new(
            "selena",
            "Selena",
            "Tidecaller",
            TalentArchetype::GoddessOfTrickery,
            "A water mage who controls the battlefield with bubbles and tidal forces. \
             Selena provides excellent crowd control and zone denial.",
        ),
    ]
});

/// Returns every hero in display order.
pub fn heroes() -> &'static [Hero] {
    &HEROES
}

/// Looks up a hero by identifier.
pub fn hero_by_id(id: &str) -> Option<&'static Hero> {
    HEROES.iter().find(|h| h.id == id)
}

/// Looks up a hero trait by identifier.
pub fn trait_by_id(id: &str) -> Option<&'static HeroTrait> {
    HERO_TRAITS.iter().find(|t| t.id == id)
}

/// Returns the traits belonging to one hero.
pub fn hero_traits(hero_id: &str) -> Vec<&'static HeroTrait> {
    HERO_TRAITS.iter().filter(|t| t.hero_id == hero_id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_size() {
        assert_eq!(heroes().len(), 11);
        assert_eq!(HERO_TRAITS.len(), 24);
    }

    #[test]
    fn test_hero_lookup() {
        let rehan = hero_by_id("rehan").unwrap();
        assert_eq!(rehan.class_name, "Berserker");
        assert_eq!(rehan.archetype, TalentArchetype::GodOfMight);
        assert!(hero_by_id("unknown").is_none());
    }

    #[test]
    fn test_hero_traits_filter() {
        let carino_traits = hero_traits("carino");
        assert_eq!(carino_traits.len(), 3);
        assert!(carino_traits.iter().all(|t| t.hero_id == "carino"));

        assert_eq!(hero_traits("unknown").len(), 0);
    }

    #[test]
    fn test_every_trait_references_a_hero() {
        for t in HERO_TRAITS.iter() {
            assert!(
                hero_by_id(&t.hero_id).is_some(),
                "trait {} references missing hero {}",
                t.id,
                t.hero_id
            );
        }
    }
}
