use crate::render::preview::{
    FormattedDocument, EDUCATION_HEADING, EXPERIENCE_HEADING, SEPARATOR, SKILLS_HEADING,
    SUMMARY_HEADING,
};

impl FormattedDocument {
    /// Plain-text rendition of the preview.
    ///
    /// Descriptions keep their line breaks; every other field has whitespace
    /// runs collapsed to a single space.
    pub fn to_plain_text(&self) -> String {
        let mut lines: Vec<String> = vec![
            collapse(&self.header.display_name).to_uppercase(),
            collapse(&self.header.display_title),
        ];
        let contact: Vec<String> = self.header.contact.iter().map(|c| collapse(c)).collect();
        if !contact.is_empty() {
            lines.push(contact.join(SEPARATOR));
        }

        if let Some(summary) = &self.summary {
            push_heading(&mut lines, SUMMARY_HEADING);
            lines.push(collapse(summary));
        }

        if let Some(items) = &self.experience {
            push_heading(&mut lines, EXPERIENCE_HEADING);
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    lines.push(String::new());
                }
                let title = collapse(&item.title);
                lines.push(format!("{} | {title}", collapse(&item.company)));
                lines.push(format!("{title} | {}", collapse(&item.dates)));
                lines.extend(pre_line(&item.description).into_iter().map(|l| format!("  {l}")));
            }
        }

        if let Some(items) = &self.education {
            push_heading(&mut lines, EDUCATION_HEADING);
            for item in items {
                lines.push(format!("{} | {}", collapse(&item.school), collapse(&item.year)));
                lines.push(format!("  {}", collapse(&item.degree)));
            }
        }

        if let Some(skills) = &self.skills {
            push_heading(&mut lines, SKILLS_HEADING);
            let pieces: Vec<String> = skills.pieces.iter().map(|p| collapse(p)).collect();
            lines.push(pieces.join(SEPARATOR));
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

fn push_heading(lines: &mut Vec<String>, heading: &str) {
    lines.push(String::new());
    lines.push(heading.to_uppercase());
}

/// Whitespace that CSS collapses: space, tab and line breaks. NBSP and other
/// Unicode spaces are content and survive.
fn is_collapsible(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Collapses every collapsible whitespace run (newlines included) to one space and trims.
pub fn collapse(s: &str) -> String {
    s.split(is_collapsible)
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// `white-space: pre-line`: line breaks survive, other whitespace collapses.
pub fn pre_line(s: &str) -> Vec<String> {
    if s.is_empty() {
        return Vec::new();
    }
    s.lines().map(collapse).collect()
}
