use serde::{Deserialize, Serialize};

/// Contact and headline fields shown in the resume header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: String,
    pub job_title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
    pub linkedin: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub start: String,
    pub end: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub school: String,
    pub degree: String,
    pub year: String,
}

/// The resume being edited in one session.
///
/// Every field is always present; strings default to empty and both entry
/// lists default to empty. Entry order is presentation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeDocument {
    pub personal: PersonalInfo,
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    /// Comma-delimited, kept exactly as typed.
    pub skills: String,
}

/// A caller-supplied record appended to one of the entry lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "section", content = "entry", rename_all = "snake_case")]
pub enum Entry {
    Experience(ExperienceEntry),
    Education(EducationEntry),
}

impl Entry {
    pub fn section(&self) -> Section {
        match self {
            Entry::Experience(_) => Section::Experience,
            Entry::Education(_) => Section::Education,
        }
    }
}

/// The two repeatable sections of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Experience,
    Education,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Experience => "experience",
            Section::Education => "education",
        }
    }

    /// The empty record the form appends when the user clicks "add".
    pub fn blank_entry(&self) -> Entry {
        match self {
            Section::Experience => Entry::Experience(ExperienceEntry::default()),
            Section::Education => Entry::Education(EducationEntry::default()),
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PersonalField {
    FullName,
    JobTitle,
    Email,
    Phone,
    Location,
    Website,
    Linkedin,
}

impl PersonalField {
    pub fn slot<'a>(&self, personal: &'a mut PersonalInfo) -> &'a mut String {
        match self {
            PersonalField::FullName => &mut personal.full_name,
            PersonalField::JobTitle => &mut personal.job_title,
            PersonalField::Email => &mut personal.email,
            PersonalField::Phone => &mut personal.phone,
            PersonalField::Location => &mut personal.location,
            PersonalField::Website => &mut personal.website,
            PersonalField::Linkedin => &mut personal.linkedin,
        }
    }
}

/// Free-text fields replaced wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarField {
    Summary,
    Skills,
}

impl ScalarField {
    pub fn slot<'a>(&self, doc: &'a mut ResumeDocument) -> &'a mut String {
        match self {
            ScalarField::Summary => &mut doc.summary,
            ScalarField::Skills => &mut doc.skills,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceField {
    Title,
    Company,
    Start,
    End,
    Description,
}

impl ExperienceField {
    pub fn slot<'a>(&self, entry: &'a mut ExperienceEntry) -> &'a mut String {
        match self {
            ExperienceField::Title => &mut entry.title,
            ExperienceField::Company => &mut entry.company,
            ExperienceField::Start => &mut entry.start,
            ExperienceField::End => &mut entry.end,
            ExperienceField::Description => &mut entry.description,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationField {
    School,
    Degree,
    Year,
}

impl EducationField {
    pub fn slot<'a>(&self, entry: &'a mut EducationEntry) -> &'a mut String {
        match self {
            EducationField::School => &mut entry.school,
            EducationField::Degree => &mut entry.degree,
            EducationField::Year => &mut entry.year,
        }
    }
}

/// A field inside an entry. The section is implied by the variant, so a field
/// can never address the wrong list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    Experience(ExperienceField),
    Education(EducationField),
}

impl EntryField {
    pub fn section(&self) -> Section {
        match self {
            EntryField::Experience(_) => Section::Experience,
            EntryField::Education(_) => Section::Education,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_document_is_fully_empty() {
        let doc = ResumeDocument::default();
        assert_eq!(doc.personal, PersonalInfo::default());
        assert!(doc.personal.full_name.is_empty());
        assert!(doc.summary.is_empty());
        assert!(doc.skills.is_empty());
        assert!(doc.experience.is_empty());
        assert!(doc.education.is_empty());
    }

    #[test]
    fn test_partial_json_fills_missing_fields() {
        let doc: ResumeDocument =
            serde_json::from_str(r#"{"personal":{"fullName":"Ada"}}"#).unwrap();
        assert_eq!(doc.personal.full_name, "Ada");
        assert_eq!(doc.personal.job_title, "");
        assert!(doc.experience.is_empty());
    }

    #[test]
    fn test_personal_uses_camel_case_names() {
        let json = serde_json::to_value(PersonalInfo::default()).unwrap();
        assert!(json.get("fullName").is_some());
        assert!(json.get("jobTitle").is_some());
        assert!(json.get("full_name").is_none());
    }

    #[test]
    fn test_entry_wire_shape() {
        let entry: Entry =
            serde_json::from_str(r#"{"section":"education","entry":{"school":"MIT"}}"#).unwrap();
        assert_eq!(entry.section(), Section::Education);
        match entry {
            Entry::Education(e) => {
                assert_eq!(e.school, "MIT");
                assert_eq!(e.year, "");
            }
            Entry::Experience(_) => panic!("expected education entry"),
        }
    }

    #[test]
    fn test_section_names() {
        let parse = |s: &str| serde_json::from_value::<Section>(serde_json::json!(s));
        assert_eq!(parse("experience").unwrap(), Section::Experience);
        assert_eq!(parse("education").unwrap(), Section::Education);
        assert!(parse("Qualification").is_err());
    }

    #[test]
    fn test_blank_entry_matches_section() {
        assert_eq!(Section::Experience.blank_entry().section(), Section::Experience);
        assert_eq!(Section::Education.blank_entry().section(), Section::Education);
    }

    #[test]
    fn test_field_names_parse() {
        let f: PersonalField = serde_json::from_str(r#""linkedin""#).unwrap();
        assert_eq!(f, PersonalField::Linkedin);
        let f: PersonalField = serde_json::from_str(r#""fullName""#).unwrap();
        assert_eq!(f, PersonalField::FullName);
        assert!(serde_json::from_str::<ScalarField>(r#""Description""#).is_err());
    }

    #[test]
    fn test_entry_field_section() {
        assert_eq!(
            EntryField::Experience(ExperienceField::End).section(),
            Section::Experience
        );
        assert_eq!(
            EntryField::Education(EducationField::Year).section(),
            Section::Education
        );
    }
}
