//! Build store: draft mutations and the persisted saved-build collection.

use std::sync::Arc;

use entities::{Build, Equipment, EquipmentSlot, SkillLink, MAX_SKILL_LINKS, MAX_SUPPORT_SKILLS};
use storage::KeyValueStorage;
use tracing::{info, warn};
use uuid::Uuid;

use crate::{BuildDraft, BuildStoreError, BuildStoreResult};

/// Storage key holding the serialized saved-build collection.
pub const SAVED_BUILDS_KEY: &str = "emberforge-builds";

/// Owns one mutable [`BuildDraft`], the persisted collection of saved
/// builds, and a read-only cache of community builds.
///
/// Every mutation of the saved collection is written through to storage in
/// full; a failed write is logged and swallowed so an editing session never
/// dies on a persistence hiccup. Reads at open are integrity-relevant and do
/// propagate.
pub struct BuildStore {
    storage: Arc<dyn KeyValueStorage>,
    draft: Option<BuildDraft>,
    saved: Vec<Build>,
    community: Vec<Build>,
}

impl BuildStore {
    /// Opens the store, eagerly reading the saved collection. An absent key
    /// yields an empty collection; unreadable or corrupt data is an error.
    pub fn open(storage: Arc<dyn KeyValueStorage>) -> BuildStoreResult<Self> {
        let saved: Vec<Build> = match storage.get(SAVED_BUILDS_KEY)? {
            Some(raw) => serde_json::from_str(&raw)?,
            None => Vec::new(),
        };
        info!(builds = saved.len(), "opened build store");
        Ok(Self {
            storage,
            draft: None,
            saved,
            community: Vec::new(),
        })
    }

    // ========== Draft Operations ==========

    /// Replaces the current draft with a fresh one, discarding any unsaved
    /// work. Confirming intent is the caller's concern.
    pub fn create_draft(&mut self) -> &BuildDraft {
        self.draft.insert(BuildDraft::new())
    }

    /// Sets the hero and unconditionally clears the selected trait: a trait
    /// never outlives its hero selection.
    pub fn set_hero(&mut self, hero_id: impl Into<String>) {
        if let Some(draft) = self.draft.as_mut() {
            draft.hero_id = Some(hero_id.into());
            draft.trait_id = None;
        }
    }

    /// Selects a trait for the current hero.
    pub fn set_trait(&mut self, trait_id: impl Into<String>) {
        if let Some(draft) = self.draft.as_mut() {
            draft.trait_id = Some(trait_id.into());
        }
    }

    /// Sets the draft's name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        if let Some(draft) = self.draft.as_mut() {
            draft.name = name.into();
        }
    }

    /// Sets the draft's description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        if let Some(draft) = self.draft.as_mut() {
            draft.description = description.into();
        }
    }

    /// Sets the draft's guide text.
    pub fn set_guide(&mut self, guide: impl Into<String>) {
        if let Some(draft) = self.draft.as_mut() {
            draft.guide = Some(guide.into());
        }
    }

    /// Replaces the draft's tags.
    pub fn set_tags(&mut self, tags: Vec<String>) {
        if let Some(draft) = self.draft.as_mut() {
            draft.tags = tags;
        }
    }

    /// Flips the draft's public visibility.
    pub fn toggle_public(&mut self) {
        if let Some(draft) = self.draft.as_mut() {
            draft.is_public = !draft.is_public;
        }
    }

    /// Allocates a talent. Adding an already-allocated talent is a no-op.
    pub fn add_talent(&mut self, talent_id: impl Into<String>) {
        if let Some(draft) = self.draft.as_mut() {
            let talent_id = talent_id.into();
            if !draft.talents.contains(&talent_id) {
                draft.talents.push(talent_id);
            }
        }
    }

    /// Deallocates a talent. Removing an absent talent is a no-op.
    pub fn remove_talent(&mut self, talent_id: &str) {
        if let Some(draft) = self.draft.as_mut() {
            draft.talents.retain(|t| t != talent_id);
        }
    }

    /// Appends a skill link. Fails once the draft holds
    /// [`MAX_SKILL_LINKS`] links or when the link itself is invalid.
    pub fn add_skill_link(&mut self, link: SkillLink) -> BuildStoreResult<()> {
        let Some(draft) = self.draft.as_mut() else {
            return Ok(());
        };
        if draft.skills.len() >= MAX_SKILL_LINKS {
            return Err(BuildStoreError::SkillSlotsFull {
                max: MAX_SKILL_LINKS,
            });
        }
        validate_link(&link)?;
        draft.skills.push(link);
        Ok(())
    }

    /// Removes the skill link at `index`. An out-of-range index is a no-op.
    pub fn remove_skill_link(&mut self, index: usize) {
        if let Some(draft) = self.draft.as_mut() {
            if index < draft.skills.len() {
                draft.skills.remove(index);
            }
        }
    }

    /// Replaces the skill link at `index`. An out-of-range index is
    /// rejected: a targeted update with a bad index is caller error.
    pub fn update_skill_link(&mut self, index: usize, link: SkillLink) -> BuildStoreResult<()> {
        let Some(draft) = self.draft.as_mut() else {
            return Ok(());
        };
        if index >= draft.skills.len() {
            return Err(BuildStoreError::index_out_of_range(
                index,
                draft.skills.len(),
            ));
        }
        validate_link(&link)?;
        draft.skills[index] = link;
        Ok(())
    }

    /// Sets or clears one equipment slot. Passing `None` removes the slot
    /// key entirely, so the equipped slot count is the map length.
    pub fn set_equipment(&mut self, slot: EquipmentSlot, equipment: Option<Equipment>) {
        if let Some(draft) = self.draft.as_mut() {
            match equipment {
                Some(item) => {
                    draft.equipment.insert(slot, item);
                }
                None => {
                    draft.equipment.remove(&slot);
                }
            }
        }
    }

    /// Discards the draft without saving.
    pub fn clear_draft(&mut self) {
        self.draft = None;
    }

    // ========== Saved Collection Operations ==========

    /// Saves the draft under the given author, upserting by id: an existing
    /// entry is replaced in place with its original `created_at` preserved,
    /// a new entry is appended. The draft is then set to the saved value so
    /// the editing state matches what was persisted.
    ///
    /// Fails with [`BuildStoreError::MissingHero`] when there is no draft or
    /// the draft has no hero; the saved collection is untouched on failure.
    pub fn save(&mut self, author_id: Uuid, author_name: &str) -> BuildStoreResult<Build> {
        let draft = self.draft.as_ref().ok_or(BuildStoreError::MissingHero)?;
        let mut build = draft.finalize(author_id, author_name)?;

        if let Some(existing) = self.saved.iter_mut().find(|b| b.id == build.id) {
            build.created_at = existing.created_at;
            *existing = build.clone();
        } else {
            self.saved.push(build.clone());
        }

        self.draft = Some(BuildDraft::from(&build));
        self.persist();
        Ok(build)
    }

    /// Copies a build into the draft for editing, so later saves update
    /// rather than insert. Looks in the saved collection first, then the
    /// community cache. Returns `None` (draft untouched) when not found.
    pub fn load(&mut self, build_id: Uuid) -> Option<&BuildDraft> {
        let build = self
            .saved
            .iter()
            .find(|b| b.id == build_id)
            .or_else(|| self.community.iter().find(|b| b.id == build_id))?;
        let draft = BuildDraft::from(build);
        Some(self.draft.insert(draft))
    }

    /// Removes a build from the saved collection, clearing the draft if it
    /// was the one being edited. Returns whether anything was removed.
    pub fn delete(&mut self, build_id: Uuid) -> bool {
        let before = self.saved.len();
        self.saved.retain(|b| b.id != build_id);
        let removed = self.saved.len() != before;

        if self.draft.as_ref().is_some_and(|d| d.id == build_id) {
            self.draft = None;
        }
        if removed {
            self.persist();
        }
        removed
    }

    /// Copies a saved build into a new draft with a fresh id and a
    /// `" (Copy)"` name suffix. The next save inserts with fresh
    /// timestamps. Returns `None` when the id is not in the saved
    /// collection.
    pub fn duplicate(&mut self, build_id: Uuid) -> Option<&BuildDraft> {
        let source = self.saved.iter().find(|b| b.id == build_id)?;
        let mut draft = BuildDraft::from(source);
        draft.id = Uuid::new_v4();
        draft.name = format!("{} (Copy)", source.name);
        Some(self.draft.insert(draft))
    }

    // ========== Accessors ==========

    /// Returns the draft being edited, if any.
    pub fn draft(&self) -> Option<&BuildDraft> {
        self.draft.as_ref()
    }

    /// Returns the saved collection in insertion order.
    pub fn saved_builds(&self) -> &[Build] {
        &self.saved
    }

    /// Returns the community-build cache.
    pub fn community_builds(&self) -> &[Build] {
        &self.community
    }

    /// Replaces the community-build cache. The cache is never persisted.
    pub fn set_community_builds(&mut self, builds: Vec<Build>) {
        self.community = builds;
    }

    /// Looks up a build by id in the saved collection, then the community
    /// cache.
    pub fn find(&self, build_id: Uuid) -> Option<&Build> {
        self.saved
            .iter()
            .find(|b| b.id == build_id)
            .or_else(|| self.community.iter().find(|b| b.id == build_id))
    }

    fn persist(&self) {
        let result = serde_json::to_string(&self.saved)
            .map_err(BuildStoreError::from)
            .and_then(|raw| {
                self.storage
                    .set(SAVED_BUILDS_KEY, &raw)
                    .map_err(BuildStoreError::from)
            });
        if let Err(e) = result {
            warn!(error = %e, "failed to persist saved builds");
        }
    }
}

fn validate_link(link: &SkillLink) -> BuildStoreResult<()> {
    if link.support_skills.len() > MAX_SUPPORT_SKILLS {
        return Err(BuildStoreError::TooManySupportSkills {
            max: MAX_SUPPORT_SKILLS,
        });
    }
    for (i, skill_id) in link.support_skills.iter().enumerate() {
        if link.support_skills[..i].contains(skill_id) {
            return Err(BuildStoreError::duplicate_support(skill_id.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::MemoryStorage;

    fn open_store() -> BuildStore {
        BuildStore::open(Arc::new(MemoryStorage::new())).unwrap()
    }

    fn author() -> Uuid {
        Uuid::new_v4()
    }

    #[test]
    fn test_set_hero_clears_trait() {
        let mut store = open_store();
        store.create_draft();

        store.set_hero("rehan");
        store.set_trait("rehan-anger");
        assert_eq!(
            store.draft().unwrap().trait_id.as_deref(),
            Some("rehan-anger")
        );

        store.set_hero("gemma");
        assert!(store.draft().unwrap().trait_id.is_none());

        // Even re-selecting the same hero clears the trait.
        store.set_trait("gemma-frost");
        store.set_hero("gemma");
        assert!(store.draft().unwrap().trait_id.is_none());
    }

    #[test]
    fn test_save_without_hero_fails() {
        let mut store = open_store();
        store.create_draft();

        let result = store.save(author(), "tester");
        assert!(matches!(result, Err(BuildStoreError::MissingHero)));
        assert!(store.saved_builds().is_empty());
    }

    #[test]
    fn test_save_without_draft_fails() {
        let mut store = open_store();
        let result = store.save(author(), "tester");
        assert!(matches!(result, Err(BuildStoreError::MissingHero)));
    }

    #[test]
    fn test_save_inserts_then_updates_in_place() {
        let mut store = open_store();
        store.create_draft();
        store.set_hero("rehan");
        store.set_name("Whirlwind");

        let first = store.save(author(), "tester").unwrap();
        assert_eq!(store.saved_builds().len(), 1);

        std::thread::sleep(std::time::Duration::from_millis(2));
        store.set_name("Whirlwind v2");
        let second = store.save(author(), "tester").unwrap();

        assert_eq!(store.saved_builds().len(), 1);
        assert_eq!(second.id, first.id);
        assert_eq!(second.created_at, first.created_at);
        assert!(second.updated_at > first.updated_at);
        assert_eq!(store.saved_builds()[0].name, "Whirlwind v2");
    }

    #[test]
    fn test_save_sets_draft_to_saved_value() {
        let mut store = open_store();
        store.create_draft();
        store.set_hero("rehan");
        store.set_name("");

        let build = store.save(author(), "tester").unwrap();
        assert_eq!(build.name, crate::UNNAMED_BUILD_NAME);
        // The draft now mirrors what was persisted, fallback name included.
        assert_eq!(store.draft().unwrap().name, crate::UNNAMED_BUILD_NAME);
        assert_eq!(store.draft().unwrap().id, build.id);
    }

    #[test]
    fn test_persistence_round_trip() {
        let storage = Arc::new(MemoryStorage::new());

        let mut store = BuildStore::open(storage.clone()).unwrap();
        store.create_draft();
        store.set_hero("erika");
        store.set_name("Flicker");
        store.save(author(), "tester").unwrap();
        drop(store);

        let reopened = BuildStore::open(storage).unwrap();
        assert_eq!(reopened.saved_builds().len(), 1);
        assert_eq!(reopened.saved_builds()[0].name, "Flicker");
        assert!(reopened.draft().is_none());
    }

    #[test]
    fn test_open_with_corrupt_data_errors() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(SAVED_BUILDS_KEY, "not json").unwrap();

        let result = BuildStore::open(storage);
        assert!(matches!(result, Err(BuildStoreError::Serialization(_))));
    }

    #[test]
    fn test_file_backed_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Arc::new(storage::FileStorage::new(dir.path()));

        let mut store = BuildStore::open(storage.clone()).unwrap();
        store.create_draft();
        store.set_hero("iris");
        store.set_name("Stormchaser");
        store.add_skill_link(SkillLink::new("arrow-rain")).unwrap();
        let build = store.save(author(), "tester").unwrap();
        drop(store);

        let reopened = BuildStore::open(storage).unwrap();
        assert_eq!(reopened.saved_builds().len(), 1);
        assert_eq!(reopened.saved_builds()[0].id, build.id);
        assert_eq!(reopened.saved_builds()[0].skills[0].main_skill, "arrow-rain");
    }

    #[test]
    fn test_skill_link_cap() {
        let mut store = open_store();
        store.create_draft();

        for i in 0..MAX_SKILL_LINKS {
            store
                .add_skill_link(SkillLink::new(format!("skill-{i}")))
                .unwrap();
        }
        let result = store.add_skill_link(SkillLink::new("one-too-many"));
        assert!(matches!(
            result,
            Err(BuildStoreError::SkillSlotsFull { max: MAX_SKILL_LINKS })
        ));
        assert_eq!(store.draft().unwrap().skills.len(), MAX_SKILL_LINKS);
    }

    #[test]
    fn test_remove_skill_link() {
        let mut store = open_store();
        store.create_draft();
        store.add_skill_link(SkillLink::new("whirlwind")).unwrap();

        // Out of range leaves the sequence unchanged.
        store.remove_skill_link(5);
        assert_eq!(store.draft().unwrap().skills.len(), 1);

        store.remove_skill_link(0);
        assert!(store.draft().unwrap().skills.is_empty());
    }

    #[test]
    fn test_update_skill_link_bounds() {
        let mut store = open_store();
        store.create_draft();
        store.add_skill_link(SkillLink::new("fireball")).unwrap();

        let result = store.update_skill_link(1, SkillLink::new("meteor"));
        assert!(matches!(
            result,
            Err(BuildStoreError::SkillIndexOutOfRange { index: 1, len: 1 })
        ));

        store
            .update_skill_link(0, SkillLink::new("meteor"))
            .unwrap();
        assert_eq!(store.draft().unwrap().skills[0].main_skill, "meteor");
    }

    #[test]
    fn test_support_skill_validation() {
        let mut store = open_store();
        store.create_draft();

        let too_many = SkillLink::new("fireball")
            .with_supports(&["a", "b", "c", "d", "e", "f"]);
        assert!(matches!(
            store.add_skill_link(too_many),
            Err(BuildStoreError::TooManySupportSkills { max: MAX_SUPPORT_SKILLS })
        ));

        let duplicated = SkillLink::new("fireball").with_supports(&["chain", "chain"]);
        assert!(matches!(
            store.add_skill_link(duplicated),
            Err(BuildStoreError::DuplicateSupportSkill { .. })
        ));

        let valid = SkillLink::new("fireball")
            .with_supports(&["chain", "pierce", "faster-casting"]);
        store.add_skill_link(valid).unwrap();
        assert_eq!(store.draft().unwrap().skills.len(), 1);
    }

    #[test]
    fn test_duplicate_creates_copy_draft() {
        let mut store = open_store();
        store.create_draft();
        store.set_hero("rosa");
        store.set_name("Bulwark");
        let original = store.save(author(), "tester").unwrap();

        std::thread::sleep(std::time::Duration::from_millis(2));
        let copy_id = store.duplicate(original.id).unwrap().id;
        assert_ne!(copy_id, original.id);
        assert_eq!(store.draft().unwrap().name, "Bulwark (Copy)");

        let copy = store.save(author(), "tester").unwrap();
        assert_eq!(store.saved_builds().len(), 2);
        assert_eq!(copy.name, "Bulwark (Copy)");
        assert!(copy.created_at > original.created_at);
        assert!(copy.updated_at > original.updated_at);
    }

    #[test]
    fn test_duplicate_unknown_id_is_none() {
        let mut store = open_store();
        assert!(store.duplicate(Uuid::new_v4()).is_none());
        assert!(store.draft().is_none());
    }

    #[test]
    fn test_delete_clears_matching_draft() {
        let mut store = open_store();
        store.create_draft();
        store.set_hero("bing");
        let build = store.save(author(), "tester").unwrap();

        assert!(store.delete(build.id));
        assert!(store.saved_builds().is_empty());
        assert!(store.draft().is_none());

        // Deleting an unknown id removes nothing.
        assert!(!store.delete(build.id));
    }

    #[test]
    fn test_delete_keeps_unrelated_draft() {
        let mut store = open_store();
        store.create_draft();
        store.set_hero("bing");
        let build = store.save(author(), "tester").unwrap();

        store.create_draft();
        let draft_id = store.draft().unwrap().id;
        assert!(store.delete(build.id));
        assert_eq!(store.draft().unwrap().id, draft_id);
    }

    #[test]
    fn test_load_checks_saved_then_community() {
        let mut store = open_store();
        store.create_draft();
        store.set_hero("selena");
        let saved = store.save(author(), "tester").unwrap();

        let mut community_draft = BuildDraft::new();
        community_draft.hero_id = Some("thea".to_string());
        let community = community_draft.finalize(author(), "someone-else").unwrap();
        store.set_community_builds(vec![community.clone()]);

        store.load(saved.id).unwrap();
        assert_eq!(store.draft().unwrap().id, saved.id);

        store.load(community.id).unwrap();
        assert_eq!(store.draft().unwrap().id, community.id);
        assert_eq!(store.draft().unwrap().hero_id.as_deref(), Some("thea"));

        // Unknown id leaves the draft untouched.
        assert!(store.load(Uuid::new_v4()).is_none());
        assert_eq!(store.draft().unwrap().id, community.id);
    }

    #[test]
    fn test_loaded_community_build_saves_into_collection() {
        let mut store = open_store();
        let mut community_draft = BuildDraft::new();
        community_draft.hero_id = Some("moto".to_string());
        community_draft.name = "Drone Swarm".to_string();
        let community = community_draft.finalize(author(), "someone-else").unwrap();
        store.set_community_builds(vec![community.clone()]);

        store.load(community.id).unwrap();
        store.save(author(), "me").unwrap();

        // Saving a loaded community build lands it in the local collection.
        assert_eq!(store.saved_builds().len(), 1);
        assert_eq!(store.saved_builds()[0].id, community.id);
        assert_eq!(store.community_builds().len(), 1);
    }

    #[test]
    fn test_talent_membership() {
        let mut store = open_store();
        store.create_draft();

        store.add_talent("iron-will");
        store.add_talent("iron-will");
        assert_eq!(store.draft().unwrap().talents.len(), 1);

        store.remove_talent("iron-will");
        store.remove_talent("iron-will");
        assert!(store.draft().unwrap().talents.is_empty());
    }

    #[test]
    fn test_set_equipment_none_removes_slot() {
        let mut store = open_store();
        store.create_draft();

        let sword = Equipment::new(
            "iron-sword",
            "Iron Sword",
            EquipmentSlot::MainHand,
            entities::EquipmentRarity::Normal,
            "Iron Sword",
        );
        store.set_equipment(EquipmentSlot::MainHand, Some(sword));
        assert_eq!(store.draft().unwrap().equipment.len(), 1);

        store.set_equipment(EquipmentSlot::MainHand, None);
        // The slot key is gone entirely, not left as an empty placeholder.
        assert!(store.draft().unwrap().equipment.is_empty());

        // Clearing an already-empty slot is a no-op.
        store.set_equipment(EquipmentSlot::Helmet, None);
        assert!(store.draft().unwrap().equipment.is_empty());
    }

    #[test]
    fn test_toggle_public() {
        let mut store = open_store();
        store.create_draft();

        assert!(!store.draft().unwrap().is_public);
        store.toggle_public();
        assert!(store.draft().unwrap().is_public);
        store.toggle_public();
        assert!(!store.draft().unwrap().is_public);
    }

    #[test]
    fn test_setters_without_draft_are_noops() {
        let mut store = open_store();

        store.set_hero("rehan");
        store.set_trait("rehan-anger");
        store.set_name("ghost");
        store.add_talent("iron-will");
        store.add_skill_link(SkillLink::new("whirlwind")).unwrap();
        store.update_skill_link(0, SkillLink::new("cleave")).unwrap();
        store.remove_skill_link(0);
        store.toggle_public();

        assert!(store.draft().is_none());
        assert!(store.saved_builds().is_empty());
    }
}
