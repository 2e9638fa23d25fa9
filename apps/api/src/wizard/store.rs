use tracing::debug;

use crate::models::{
    Entry, EntryField, PersonalField, ResumeDocument, ScalarField, Section,
};
use crate::wizard::steps::WizardStep;

/// Single source of truth for one editing session: the document and the
/// active wizard step.
///
/// Every operation is total. Mutations return `true` when the document or
/// step actually changed; a `false` return guarantees nothing was touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormStateStore {
    document: ResumeDocument,
    step: WizardStep,
}

impl FormStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn document(&self) -> &ResumeDocument {
        &self.document
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Jumps to any step; out-of-range values clamp to the first or last step.
    pub fn set_step(&mut self, n: i64) -> bool {
        self.go_to(WizardStep::clamped(n))
    }

    pub fn next_step(&mut self) -> bool {
        self.go_to(self.step.next())
    }

    pub fn previous_step(&mut self) -> bool {
        self.go_to(self.step.previous())
    }

    fn go_to(&mut self, step: WizardStep) -> bool {
        if self.step == step {
            return false;
        }
        debug!("Wizard step {} -> {}", self.step.number(), step.number());
        self.step = step;
        true
    }

    pub fn set_personal_field(&mut self, field: PersonalField, value: impl Into<String>) -> bool {
        replace(field.slot(&mut self.document.personal), value.into())
    }

    pub fn set_scalar_field(&mut self, field: ScalarField, value: impl Into<String>) -> bool {
        replace(field.slot(&mut self.document), value.into())
    }

    /// Appends `entry` to the end of the list it belongs to.
    pub fn add_entry(&mut self, entry: Entry) -> bool {
        let section = entry.section();
        match entry {
            Entry::Experience(e) => self.document.experience.push(e),
            Entry::Education(e) => self.document.education.push(e),
        }
        debug!(
            "Added {section} entry, now {}",
            self.entry_count(section)
        );
        true
    }

    /// Replaces one field of the entry at `index`. Out-of-range indices are ignored.
    pub fn update_entry(&mut self, field: EntryField, index: usize, value: impl Into<String>) -> bool {
        let slot = match field {
            EntryField::Experience(f) => self.document.experience.get_mut(index).map(|e| f.slot(e)),
            EntryField::Education(f) => self.document.education.get_mut(index).map(|e| f.slot(e)),
        };
        match slot {
            Some(slot) => replace(slot, value.into()),
            None => {
                debug!(
                    "Ignoring update of {} entry {index}: out of range",
                    field.section()
                );
                false
            }
        }
    }

    /// Removes the entry at `index`; later entries shift down by one.
    /// Out-of-range indices are ignored.
    pub fn remove_entry(&mut self, section: Section, index: usize) -> bool {
        if index >= self.entry_count(section) {
            debug!("Ignoring removal of {section} entry {index}: out of range");
            return false;
        }
        match section {
            Section::Experience => {
                self.document.experience.remove(index);
            }
            Section::Education => {
                self.document.education.remove(index);
            }
        }
        debug!("Removed {section} entry {index}");
        true
    }

    pub fn entry_count(&self, section: Section) -> usize {
        match section {
            Section::Experience => self.document.experience.len(),
            Section::Education => self.document.education.len(),
        }
    }
}

fn replace(slot: &mut String, value: String) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        EducationEntry, EducationField, ExperienceEntry, ExperienceField,
    };

    fn job(title: &str) -> Entry {
        Entry::Experience(ExperienceEntry {
            title: title.to_string(),
            ..Default::default()
        })
    }

    fn titles(store: &FormStateStore) -> Vec<String> {
        store
            .document()
            .experience
            .iter()
            .map(|e| e.title.clone())
            .collect()
    }

    #[test]
    fn test_new_store_is_empty_at_step_one() {
        let store = FormStateStore::new();
        assert_eq!(store.step(), WizardStep::Personal);
        assert_eq!(store.document(), &ResumeDocument::default());
    }

    #[test]
    fn test_set_step_clamps() {
        let mut store = FormStateStore::new();
        assert!(store.set_step(99));
        assert_eq!(store.step().number(), 5);
        assert!(store.set_step(0));
        assert_eq!(store.step().number(), 1);
        assert!(store.set_step(3));
        assert_eq!(store.step(), WizardStep::Experience);
    }

    #[test]
    fn test_any_step_reachable_directly() {
        let mut store = FormStateStore::new();
        store.set_step(5);
        assert_eq!(store.step(), WizardStep::Skills);
        store.set_step(2);
        assert_eq!(store.step(), WizardStep::Summary);
    }

    #[test]
    fn test_next_and_previous_are_noops_at_ends() {
        let mut store = FormStateStore::new();
        assert!(!store.previous_step());
        assert_eq!(store.step().number(), 1);
        store.set_step(5);
        assert!(!store.next_step());
        assert_eq!(store.step().number(), 5);
        assert!(store.previous_step());
        assert_eq!(store.step().number(), 4);
    }

    #[test]
    fn test_step_changes_leave_document_alone() {
        let mut store = FormStateStore::new();
        store.set_personal_field(PersonalField::Email, "a@b.com");
        let before = store.document().clone();
        store.set_step(4);
        store.next_step();
        assert_eq!(store.document(), &before);
    }

    #[test]
    fn test_set_personal_field_accepts_anything() {
        let mut store = FormStateStore::new();
        assert!(store.set_personal_field(PersonalField::Email, "not an email"));
        assert_eq!(store.document().personal.email, "not an email");
        assert!(store.set_personal_field(PersonalField::Email, ""));
        assert_eq!(store.document().personal.email, "");
    }

    #[test]
    fn test_set_personal_field_touches_only_target() {
        let mut store = FormStateStore::new();
        store.set_personal_field(PersonalField::FullName, "Ada Lovelace");
        let mut expected = ResumeDocument::default();
        expected.personal.full_name = "Ada Lovelace".to_string();
        assert_eq!(store.document(), &expected);
    }

    #[test]
    fn test_setting_same_value_reports_no_change() {
        let mut store = FormStateStore::new();
        assert!(store.set_scalar_field(ScalarField::Skills, "Rust"));
        assert!(!store.set_scalar_field(ScalarField::Skills, "Rust"));
    }

    #[test]
    fn test_set_scalar_fields() {
        let mut store = FormStateStore::new();
        store.set_scalar_field(ScalarField::Summary, "Builder of things.");
        store.set_scalar_field(ScalarField::Skills, "React, Go");
        assert_eq!(store.document().summary, "Builder of things.");
        assert_eq!(store.document().skills, "React, Go");
    }

    #[test]
    fn test_add_entry_appends_in_order() {
        let mut store = FormStateStore::new();
        store.add_entry(job("first"));
        store.add_entry(job("second"));
        store.add_entry(Section::Education.blank_entry());
        assert_eq!(titles(&store), vec!["first", "second"]);
        assert_eq!(store.entry_count(Section::Education), 1);
        assert_eq!(store.document().education[0], EducationEntry::default());
    }

    #[test]
    fn test_update_entry_in_range() {
        let mut store = FormStateStore::new();
        store.add_entry(Section::Experience.blank_entry());
        store.add_entry(Section::Experience.blank_entry());
        assert!(store.update_entry(EntryField::Experience(ExperienceField::Company), 1, "Acme"));
        assert_eq!(store.document().experience[0].company, "");
        assert_eq!(store.document().experience[1].company, "Acme");
    }

    #[test]
    fn test_update_entry_out_of_range_is_noop() {
        let mut store = FormStateStore::new();
        store.add_entry(job("only"));
        let before = store.clone();
        assert!(!store.update_entry(EntryField::Experience(ExperienceField::Title), 1, "x"));
        assert!(!store.update_entry(EntryField::Education(EducationField::School), 0, "x"));
        assert!(!store.update_entry(EntryField::Experience(ExperienceField::Title), usize::MAX, "x"));
        assert_eq!(store, before);
    }

    #[test]
    fn test_remove_entry_shifts_down() {
        let mut store = FormStateStore::new();
        for t in ["a", "b", "c"] {
            store.add_entry(job(t));
        }
        assert!(store.remove_entry(Section::Experience, 1));
        assert_eq!(titles(&store), vec!["a", "c"]);
    }

    #[test]
    fn test_remove_entry_invalid_index_is_noop() {
        let mut store = FormStateStore::new();
        store.add_entry(job("a"));
        let before = store.clone();
        assert!(!store.remove_entry(Section::Experience, 1));
        assert!(!store.remove_entry(Section::Education, 0));
        assert_eq!(store, before);
    }

    #[test]
    fn test_add_remove_sequences_keep_count_and_order() {
        // Deterministic pseudo-random walk over add/remove operations,
        // checked against a plain Vec model.
        let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
        let mut next = move || {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            seed
        };

        let mut store = FormStateStore::new();
        let mut model: Vec<String> = Vec::new();
        let mut adds = 0usize;
        let mut removes = 0usize;

        for i in 0..500 {
            if next() % 3 != 0 {
                let title = format!("job-{i}");
                store.add_entry(job(&title));
                model.push(title);
                adds += 1;
            } else {
                let index = (next() % 8) as usize;
                let removed = store.remove_entry(Section::Experience, index);
                assert_eq!(removed, index < model.len());
                if removed {
                    model.remove(index);
                    removes += 1;
                }
            }
            assert_eq!(store.entry_count(Section::Experience), adds - removes);
            assert_eq!(titles(&store), model);
        }
    }
}
