//! Preview rendering: a pure mapping from `ResumeDocument` to the read-only
//! `FormattedDocument` shown on screen and handed to the print page.

use serde::Serialize;

use crate::models::{EducationEntry, ExperienceEntry, PersonalInfo, ResumeDocument};

pub const NAME_PLACEHOLDER: &str = "YOUR NAME";
pub const TITLE_PLACEHOLDER: &str = "Professional Title";
/// Joins contact items and skills.
pub const SEPARATOR: &str = " • ";
/// Joins start and end dates (en dash).
pub const DATE_SEPARATOR: &str = " \u{2013} ";

pub const SUMMARY_HEADING: &str = "Professional Profile";
pub const EXPERIENCE_HEADING: &str = "Professional Experience";
pub const EDUCATION_HEADING: &str = "Education";
pub const SKILLS_HEADING: &str = "Key Skills";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub name: Option<String>,
    pub title: Option<String>,
    /// `name`, or the placeholder when absent.
    pub display_name: String,
    /// `title`, or the placeholder when absent.
    pub display_title: String,
    /// Non-empty contact items in display order: location, phone, email, linkedin.
    pub contact: Vec<String>,
    pub contact_line: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceItem {
    pub company: String,
    /// Shown twice in the layout: beside the company and again above the dates.
    pub title: String,
    pub dates: String,
    /// Line breaks are significant.
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationItem {
    pub school: String,
    pub degree: String,
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsBlock {
    /// Trimmed comma-separated pieces; empty pieces are kept.
    pub pieces: Vec<String>,
    pub line: String,
}

/// The rendered resume. `None` blocks are omitted from every output format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedDocument {
    pub header: Header,
    pub summary: Option<String>,
    pub experience: Option<Vec<ExperienceItem>>,
    pub education: Option<Vec<EducationItem>>,
    pub skills: Option<SkillsBlock>,
}

/// Renders a document. Total over all inputs; the empty document yields the
/// placeholder-only layout.
pub fn render(doc: &ResumeDocument) -> FormattedDocument {
    FormattedDocument {
        header: render_header(&doc.personal),
        summary: present(&doc.summary).map(str::to_string),
        experience: non_empty_list(&doc.experience, render_experience),
        education: non_empty_list(&doc.education, render_education),
        skills: present(&doc.skills).map(render_skills),
    }
}

fn render_header(personal: &PersonalInfo) -> Header {
    let name = present(&personal.full_name).map(str::to_string);
    let title = present(&personal.job_title).map(str::to_string);
    let contact = contact_items(personal);
    Header {
        display_name: name.clone().unwrap_or_else(|| NAME_PLACEHOLDER.to_string()),
        display_title: title.clone().unwrap_or_else(|| TITLE_PLACEHOLDER.to_string()),
        contact_line: contact.join(SEPARATOR),
        name,
        title,
        contact,
    }
}

/// Website is collected by the form but not part of the contact line.
fn contact_items(personal: &PersonalInfo) -> Vec<String> {
    [
        &personal.location,
        &personal.phone,
        &personal.email,
        &personal.linkedin,
    ]
    .into_iter()
    .filter_map(|s| present(s))
    .map(str::to_string)
    .collect()
}

fn render_experience(entry: &ExperienceEntry) -> ExperienceItem {
    ExperienceItem {
        company: entry.company.clone(),
        title: entry.title.clone(),
        dates: format!("{}{}{}", entry.start, DATE_SEPARATOR, entry.end),
        description: entry.description.clone(),
    }
}

fn render_education(entry: &EducationEntry) -> EducationItem {
    EducationItem {
        school: entry.school.clone(),
        degree: entry.degree.clone(),
        year: entry.year.clone(),
    }
}

/// Splits on commas and trims each piece. "A,,B" yields three pieces.
pub fn split_skills(skills: &str) -> Vec<String> {
    skills
        .split(',')
        .map(|s| s.trim_matches(is_trimmable).to_string())
        .collect()
}

/// The characters a browser's `String.prototype.trim` strips: Unicode space
/// separators, tab/VT/FF, the BOM and line terminators. Unlike `char::is_whitespace`
/// this includes U+FEFF and excludes U+0085.
fn is_trimmable(c: char) -> bool {
    matches!(
        c,
        '\t' | '\u{b}'
            | '\u{c}'
            | ' '
            | '\u{a0}'
            | '\u{feff}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\n'
            | '\r'
            | '\u{2028}'
            | '\u{2029}'
    )
}

fn render_skills(skills: &str) -> SkillsBlock {
    let pieces = split_skills(skills);
    SkillsBlock {
        line: pieces.join(SEPARATOR),
        pieces,
    }
}

fn present(s: &str) -> Option<&str> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

fn non_empty_list<T, U>(items: &[T], f: impl Fn(&T) -> U) -> Option<Vec<U>> {
    if items.is_empty() {
        None
    } else {
        Some(items.iter().map(f).collect())
    }
}
