pub mod resume;

pub use resume::{
    EducationEntry, EducationField, Entry, EntryField, ExperienceEntry, ExperienceField,
    PersonalField, PersonalInfo, ResumeDocument, ScalarField, Section,
};
