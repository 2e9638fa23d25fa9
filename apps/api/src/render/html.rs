use std::fmt::Write;

use crate::render::preview::{
    EducationItem, ExperienceItem, FormattedDocument, Header, SkillsBlock, EDUCATION_HEADING,
    EXPERIENCE_HEADING, SKILLS_HEADING, SUMMARY_HEADING,
};

/// Element id of the preview root; the print stylesheet keys off it.
pub const PREVIEW_ELEMENT_ID: &str = "resume-preview";

impl FormattedDocument {
    /// Renders the preview subtree. All user text is escaped.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, r#"<div id="{PREVIEW_ELEMENT_ID}" class="resume">"#);
        write_header(&mut out, &self.header);
        if let Some(summary) = &self.summary {
            open_section(&mut out, "summary", SUMMARY_HEADING);
            let _ = writeln!(out, r#"<p class="resume-summary">{}</p>"#, escape(summary));
            close_section(&mut out);
        }
        if let Some(items) = &self.experience {
            open_section(&mut out, "experience", EXPERIENCE_HEADING);
            items.iter().for_each(|item| write_experience(&mut out, item));
            close_section(&mut out);
        }
        if let Some(items) = &self.education {
            open_section(&mut out, "education", EDUCATION_HEADING);
            items.iter().for_each(|item| write_education(&mut out, item));
            close_section(&mut out);
        }
        if let Some(skills) = &self.skills {
            open_section(&mut out, "skills", SKILLS_HEADING);
            write_skills(&mut out, skills);
            close_section(&mut out);
        }
        out.push_str("</div>\n");
        out
    }
}

fn write_header(out: &mut String, header: &Header) {
    out.push_str(r#"<header class="resume-header">"#);
    out.push('\n');
    let _ = writeln!(out, r#"<h1 class="resume-name">{}</h1>"#, escape(&header.display_name));
    let _ = writeln!(out, r#"<p class="resume-title">{}</p>"#, escape(&header.display_title));
    out.push_str(r#"<div class="resume-contact">"#);
    for (i, item) in header.contact.iter().enumerate() {
        if i > 0 {
            out.push_str(r#"<span class="sep">•</span>"#);
        }
        let _ = write!(out, "<span>{}</span>", escape(item));
    }
    out.push_str("</div>\n</header>\n");
}

fn open_section(out: &mut String, kind: &str, heading: &str) {
    let _ = writeln!(out, r#"<section class="resume-section resume-{kind}">"#);
    let _ = writeln!(out, "<h3>{heading}</h3>");
}

fn close_section(out: &mut String) {
    out.push_str("</section>\n");
}

fn write_experience(out: &mut String, item: &ExperienceItem) {
    let title = escape(&item.title);
    out.push_str("<div class=\"resume-item\">\n");
    let _ = writeln!(
        out,
        r#"<div class="row"><h4>{}</h4><span class="label">{title}</span></div>"#,
        escape(&item.company)
    );
    let _ = writeln!(
        out,
        r#"<div class="row"><span class="role">{title}</span><span class="dates">{}</span></div>"#,
        escape(&item.dates)
    );
    let _ = writeln!(out, r#"<p class="pre-line">{}</p>"#, escape(&item.description));
    out.push_str("</div>\n");
}

fn write_education(out: &mut String, item: &EducationItem) {
    let _ = writeln!(
        out,
        r#"<div class="resume-item row"><div><h4>{}</h4><p class="degree">{}</p></div><span class="year">{}</span></div>"#,
        escape(&item.school),
        escape(&item.degree),
        escape(&item.year)
    );
}

fn write_skills(out: &mut String, skills: &SkillsBlock) {
    let _ = writeln!(out, r#"<div class="resume-skills">{}</div>"#, escape(&skills.line));
}

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
