//! Skill reference table.

use std::sync::LazyLock;

use entities::{Skill, SkillType};

static SKILLS: LazyLock<Vec<Skill>> = LazyLock::new(|| {
    vec![
        // Active skills - melee
        Skill::new(
            "whirlwind",
            "Whirlwind",
            SkillType::Active,
            "Spin rapidly, dealing physical damage to all nearby enemies.",
        )
        .with_tags(&["melee", "aoe", "physical", "channeling"])
        .with_mana_cost(15),
        Skill::new(
            "leap-slam",
            "Leap Slam",
            SkillType::Active,
            "Leap through the air and slam down, dealing damage in an area.",
        )
        .with_tags(&["melee", "aoe", "physical", "movement"])
        .with_mana_cost(12)
        .with_cooldown(2),
        Skill::new(
            "ground-slam",
            "Ground Slam",
            SkillType::Active,
            "Slam the ground, creating a shockwave that damages enemies in a cone.",
        )
        .with_tags(&["melee", "aoe", "physical"])
        .with_mana_cost(10),
        Skill::new(
            "cleave",
            "Cleave",
            SkillType::Active,
            "Swing your weapon in a wide arc, hitting multiple enemies.",
        )
        .with_tags(&["melee", "aoe", "physical"])
        .with_mana_cost(8),
        Skill::new(
            "heavy-strike",
            "Heavy Strike",
            SkillType::Active,
            "A powerful single-target melee attack with high damage.",
        )
        .with_tags(&["melee", "single-target", "physical"])
        .with_mana_cost(6),
        // Active skills - ranged
        Skill::new(
            "arrow-rain",
            "Arrow Rain",
            SkillType::Active,
            "Fire a volley of arrows into the sky, raining down on enemies.",
        )
        .with_tags(&["ranged", "aoe", "physical", "projectile"])
        .with_mana_cost(20)
        .with_cooldown(4),
        Skill::new(
            "piercing-shot",
            "Piercing Shot",
            SkillType::Active,
            "Fire an arrow that pierces through multiple enemies.",
        )
        .with_tags(&["ranged", "projectile", "physical", "pierce"])
        .with_mana_cost(10),
        Skill::new(
            "split-arrow",
            "Split Arrow",
            SkillType::Active,
            "Fire multiple arrows that spread out in a cone.",
        )
        .with_tags(&["ranged", "aoe", "physical", "projectile"])
        .with_mana_cost(12),
        Skill::new(
            "explosive-arrow",
            "Explosive Arrow",
            SkillType::Active,
            "Fire an arrow that explodes on impact, dealing area damage.",
        )
        .with_tags(&["ranged", "aoe", "fire", "projectile"])
        .with_mana_cost(15),
        // Active skills - fire magic
        Skill::new(
            "fireball",
            "Fireball",
            SkillType::Active,
            "Launch a ball of fire that explodes on impact.",
        )
        .with_tags(&["spell", "aoe", "fire", "projectile"])
        .with_mana_cost(12),
        Skill::new(
            "flame-burst",
            "Flame Burst",
            SkillType::Active,
            "Create an explosion of fire around you.",
        )
        .with_tags(&["spell", "aoe", "fire"])
        .with_mana_cost(18)
        .with_cooldown(3),
        Skill::new(
            "meteor",
            "Meteor",
            SkillType::Active,
            "Call down a meteor from the sky, dealing massive fire damage.",
        )
        .with_tags(&["spell", "aoe", "fire"])
        .with_mana_cost(35)
        .with_cooldown(8),
        Skill::new(
            "flame-wave",
            "Flame Wave",
            SkillType::Active,
            "Send a wave of fire across the ground.",
        )
        .with_tags(&["spell", "aoe", "fire"])
        .with_mana_cost(14),
        // Active skills - cold magic
        Skill::new(
            "ice-bolt",
            "Ice Bolt",
            SkillType::Active,
            "Fire a bolt of ice that chills enemies.",
        )
        .with_tags(&["spell", "single-target", "cold", "projectile"])
        .with_mana_cost(8),
        Skill::new(
            "frost-nova",
            "Frost Nova",
            SkillType::Active,
            "Create an explosion of frost around you, freezing nearby enemies.",
        )
        .with_tags(&["spell", "aoe", "cold"])
        .with_mana_cost(20)
        .with_cooldown(4),
        Skill::new(
            "blizzard",
            "Blizzard",
            SkillType::Active,
            "Summon a blizzard that deals cold damage over time.",
        )
        .with_tags(&["spell", "aoe", "cold", "dot"])
        .with_mana_cost(25)
        .with_cooldown(6),
        Skill::new(
            "ice-spear",
            "Ice Spear",
            SkillType::Active,
            "Launch a spear of ice that shatters on impact.",
        )
        .with_tags(&["spell", "aoe", "cold", "projectile"])
        .with_mana_cost(15),
        // Active skills - lightning
        Skill::new(
            "lightning-bolt",
            "Lightning Bolt",
            SkillType::Active,
            "Strike enemies with a bolt of lightning.",
        )
        .with_tags(&["spell", "single-target", "lightning"])
        .with_mana_cost(10),
        Skill::new(
            "chain-lightning",
            "Chain Lightning",
            SkillType::Active,
            "Lightning that bounces between multiple enemies.",
        )
        .with_tags(&["spell", "chain", "lightning"])
        .with_mana_cost(16),
        Skill::new(
            "thunder-call",
            "Thunder Call",
            SkillType::Active,
            "Call down lightning strikes in an area.",
        )
        .with_tags(&["spell", "aoe", "lightning"])
        .with_mana_cost(28)
        .with_cooldown(5),
        // Active skills - summoning
        Skill::new(
            "summon-skeleton",
            "Summon Skeleton",
            SkillType::Active,
            "Summon skeleton warriors to fight for you.",
        )
        .with_tags(&["minion", "summon"])
        .with_mana_cost(20),
        Skill::new(
            "summon-golem",
            "Summon Golem",
            SkillType::Active,
            "Summon a powerful golem to tank and deal damage.",
        )
        .with_tags(&["minion", "summon"])
        .with_mana_cost(35)
        .with_cooldown(30),
        Skill::new(
            "deploy-turret",
            "Deploy Turret",
            SkillType::Active,
            "Deploy an automated turret that attacks nearby enemies.",
        )
        .with_tags(&["minion", "mechanical", "summon"])
        .with_mana_cost(25)
        .with_cooldown(10),
        Skill::new(
            "deploy-drone",
            "Deploy Drone",
            SkillType::Active,
            "Deploy a drone that follows you and attacks enemies.",
        )
        .with_tags(&["minion", "mechanical", "summon"])
        .with_mana_cost(18),
        // Active skills - movement and utility
        Skill::new(
            "dash",
            "Dash",
            SkillType::Active,
            "Quickly dash in a direction, passing through enemies.",
        )
        .with_tags(&["movement", "utility"])
        .with_mana_cost(5)
        .with_cooldown(3),
        Skill::new(
            "blink",
            "Blink",
            SkillType::Active,
            "Teleport to a target location.",
        )
        .with_tags(&["movement", "utility", "spell"])
        .with_mana_cost(10)
        .with_cooldown(5),
        Skill::new(
            "shadow-step",
            "Shadow Step",
            SkillType::Active,
            "Become invisible briefly and move to a new location.",
        )
        .with_tags(&["movement", "utility", "stealth"])
        .with_mana_cost(15)
        .with_cooldown(8),
        // Support skills
        Skill::new(
            "added-fire-damage",
            "Added Fire Damage",
            SkillType::Support,
            "Adds fire damage to linked skills.",
        )
        .with_tags(&["damage", "fire"]),
        Skill::new(
            "added-cold-damage",
            "Added Cold Damage",
            SkillType::Support,
            "Adds cold damage to linked skills.",
        )
        .with_tags(&["damage", "cold"]),
        Skill::new(
            "added-lightning-damage",
            "Added Lightning Damage",
            SkillType::Support,
            "Adds lightning damage to linked skills.",
        )
        .with_tags(&["damage", "lightning"]),
        Skill::new(
            "increased-area",
            "Increased Area of Effect",
            SkillType::Support,
            "Increases the area of effect of linked skills.",
        )
        .with_tags(&["aoe", "utility"]),
        Skill::new(
            "faster-casting",
            "Faster Casting",
            SkillType::Support,
            "Increases the cast speed of linked spells.",
        )
        .with_tags(&["speed", "spell"]),
        Skill::new(
            "faster-attacks",
            "Faster Attacks",
            SkillType::Support,
            "Increases the attack speed of linked attacks.",
        )
        .with_tags(&["speed", "attack"]),
        Skill::new(
            "multiple-projectiles",
            "Multiple Projectiles",
            SkillType::Support,
            "Linked skills fire additional projectiles.",
        )
        .with_tags(&["projectile"]),
        Skill::new(
            "chain",
            "Chain",
            SkillType::Support,
            "Linked projectiles chain to additional targets.",
        )
        .with_tags(&["projectile", "chain"]),
        Skill::new(
            "pierce",
            "Pierce",
            SkillType::Support,
            "Linked projectiles pierce through enemies.",
        )
        .with_tags(&["projectile", "pierce"]),
        Skill::new(
            "critical-damage",
            "Critical Damage",
            SkillType::Support,
            "Increases critical strike damage of linked skills.",
        )
        .with_tags(&["critical", "damage"]),
        Skill::new(
            "life-leech",
            "Life Leech",
            SkillType::Support,
            "Linked skills leech life from enemies.",
        )
        .with_tags(&["leech", "life"]),
        Skill::new(
            "mana-leech",
            "Mana Leech",
            SkillType::Support,
            "Linked skills leech mana from enemies.",
        )
        .with_tags(&["leech", "mana"]),
        // Passive skills
        Skill::new(
            "iron-will",
            "Iron Will",
            SkillType::Passive,
            "Increases your armor and physical damage reduction.",
        )
        .with_tags(&["defense", "armor"]),
        Skill::new(
            "blood-rage",
            "Blood Rage",
            SkillType::Passive,
            "Gain attack speed and life leech, but lose life over time.",
        )
        .with_tags(&["attack", "leech", "buff"]),
        Skill::new(
            "aura-of-fire",
            "Aura of Fire",
            SkillType::Passive,
            "Nearby allies deal additional fire damage.",
        )
        .with_tags(&["aura", "fire", "buff"]),
        Skill::new(
            "aura-of-cold",
            "Aura of Cold",
            SkillType::Passive,
            "Nearby enemies are chilled and take increased cold damage.",
        )
        .with_tags(&["aura", "cold", "debuff"]),
        Skill::new(
            "fortify",
            "Fortify",
            SkillType::Passive,
            "Gain a defensive buff that reduces damage taken.",
        )
        .with_tags(&["defense", "buff"]),
        Skill::new(
            "elemental-overload",
            "Elemental Overload",
            SkillType::Passive,
            "Critical strikes grant a large elemental damage bonus.",
        )
        .with_tags(&["critical", "elemental", "buff"]),
        // Trigger medium skills
        Skill::new(
            "cast-on-crit",
            "Cast on Critical Strike",
            SkillType::TriggerMedium,
            "Linked spells trigger when you critically strike.",
        )
        .with_tags(&["trigger", "critical", "spell"]),
        Skill::new(
            "cast-on-damage",
            "Cast when Damage Taken",
            SkillType::TriggerMedium,
            "Linked spells trigger when you take a certain amount of damage.",
        )
        .with_tags(&["trigger", "defense", "spell"]),
        Skill::new(
            "cast-on-kill",
            "Cast on Kill",
            SkillType::TriggerMedium,
            "Linked spells trigger when you kill an enemy.",
        )
        .with_tags(&["trigger", "kill", "spell"]),
    ]
});

/// Returns every skill in display order.
pub fn skills() -> &'static [Skill] {
    &SKILLS
}

/// Looks up a skill by identifier.
pub fn skill_by_id(id: &str) -> Option<&'static Skill> {
    SKILLS.iter().find(|s| s.id == id)
}

/// Returns the skills of one category.
pub fn skills_by_type(skill_type: SkillType) -> Vec<&'static Skill> {
    SKILLS.iter().filter(|s| s.skill_type == skill_type).collect()
}

/// Case-insensitive search over skill names, descriptions, and tags.
pub fn search_skills(query: &str) -> Vec<&'static Skill> {
    let query = query.to_lowercase();
    SKILLS
        .iter()
        .filter(|s| {
            s.name.to_lowercase().contains(&query)
                || s.description.to_lowercase().contains(&query)
                || s.tags.iter().any(|t| t.to_lowercase().contains(&query))
        })
        .collect()
}
