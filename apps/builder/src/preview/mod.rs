//! Preview rendering: a pure function from a document snapshot to a layout.
//!
//! Section visibility:
//! - Objective: shown when `objective` is non-blank.
//! - Repeating sections: shown when the first item's identifying field
//!   (`title`, or `institution` for education) is non-blank; items inside a
//!   shown section are filtered by the same check.
//! - Skills: always shown.

pub mod handlers;
pub mod text;

use std::fmt;

use serde::Serialize;

use crate::models::resume::{RecordItem, ResumeDocument, Section};
use text::{bullet_lines, display_github, display_linkedin, is_blank, join_present};

const NAME_PLACEHOLDER: &str = "Your Name";

// ────────────────────────────────────────────────────────────────────────────
// Layout
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewLayout {
    pub header: HeaderBlock,
    pub sections: Vec<PreviewSection>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderBlock {
    pub name: String,
    /// email, phone, location
    pub contact: Vec<String>,
    /// LinkedIn and GitHub, prefixes stripped
    pub links: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub subtitle: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectEntry {
    pub title: String,
    pub bullets: Vec<String>,
    pub technology: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EducationEntry {
    pub institution: String,
    pub date: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillLine {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CertificationEntry {
    pub heading: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PreviewSection {
    Objective { text: String },
    Internships { entries: Vec<ExperienceEntry> },
    Projects { entries: Vec<ProjectEntry> },
    Education { entries: Vec<EducationEntry> },
    Skills { lines: Vec<SkillLine> },
    Certifications { entries: Vec<CertificationEntry> },
}

impl PreviewSection {
    pub fn heading(&self) -> &'static str {
        match self {
            PreviewSection::Objective { .. } => "Objective",
            PreviewSection::Internships { .. } => Section::InternshipExperience.heading(),
            PreviewSection::Projects { .. } => Section::AcademicProjects.heading(),
            PreviewSection::Education { .. } => Section::Education.heading(),
            PreviewSection::Skills { .. } => "Skills",
            PreviewSection::Certifications { .. } => Section::Certifications.heading(),
        }
    }
}

#[cfg(test)]
impl PreviewLayout {
    pub fn headings(&self) -> Vec<&'static str> {
        self.sections.iter().map(PreviewSection::heading).collect()
    }

    pub fn has_section(&self, heading: &str) -> bool {
        self.sections.iter().any(|s| s.heading() == heading)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Rendering
// ────────────────────────────────────────────────────────────────────────────

pub fn render(document: &ResumeDocument) -> PreviewLayout {
    let header = HeaderBlock {
        name: if is_blank(&document.name) {
            NAME_PLACEHOLDER.to_string()
        } else {
            document.name.clone()
        },
        contact: vec![
            document.email.clone(),
            document.phone.clone(),
            document.location.clone(),
        ],
        links: vec![
            display_linkedin(&document.linkedin).to_string(),
            display_github(&document.github).to_string(),
        ],
    };

    let mut sections = Vec::new();

    if !is_blank(&document.objective) {
        sections.push(PreviewSection::Objective {
            text: document.objective.clone(),
        });
    }

    if let Some(items) = visible_records(&document.internship_experience) {
        sections.push(PreviewSection::Internships {
            entries: items
                .map(|item| ExperienceEntry {
                    title: item.title.clone(),
                    subtitle: item.subtitle.clone(),
                    bullets: bullet_lines(&item.description),
                })
                .collect(),
        });
    }

    if let Some(items) = visible_records(&document.academic_projects) {
        sections.push(PreviewSection::Projects {
            entries: items
                .map(|item| ProjectEntry {
                    title: item.title.clone(),
                    bullets: bullet_lines(&item.description),
                    technology: item.subtitle.clone(),
                })
                .collect(),
        });
    }

    let education_shown = document
        .education
        .first()
        .is_some_and(|first| !is_blank(&first.institution));
    if education_shown {
        sections.push(PreviewSection::Education {
            entries: document
                .education
                .iter()
                .filter(|item| !is_blank(&item.institution))
                .map(|item| EducationEntry {
                    institution: item.institution.clone(),
                    date: item.date.clone(),
                    detail: join_present(&[item.degree.as_str(), item.gpa.as_str()], " - "),
                })
                .collect(),
        });
    }

    let skills = &document.skills;
    sections.push(PreviewSection::Skills {
        lines: vec![
            SkillLine {
                label: "Programming Languages",
                value: skills.programming.clone(),
            },
            SkillLine {
                label: "Database Management",
                value: skills.software.clone(),
            },
            SkillLine {
                label: "Tools/Platforms",
                value: skills.tools.clone(),
            },
            SkillLine {
                label: "Soft Skills",
                value: skills.soft_skills.clone(),
            },
        ],
    });

    if let Some(items) = visible_records(&document.certifications) {
        sections.push(PreviewSection::Certifications {
            entries: items
                .map(|item| CertificationEntry {
                    heading: if is_blank(&item.date) {
                        item.title.clone()
                    } else {
                        format!("{} ({})", item.title, item.date)
                    },
                    bullets: bullet_lines(&item.description),
                })
                .collect(),
        });
    }

    PreviewLayout { header, sections }
}

/// Titled items of a record section, or `None` when the first item is untitled.
fn visible_records(items: &[RecordItem]) -> Option<impl Iterator<Item = &RecordItem>> {
    let first = items.first()?;
    if is_blank(&first.title) {
        return None;
    }
    Some(items.iter().filter(|item| !is_blank(&item.title)))
}

// ────────────────────────────────────────────────────────────────────────────
// Plain-text output
// ────────────────────────────────────────────────────────────────────────────

impl fmt::Display for PreviewLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header.name.to_uppercase())?;
        for line in self.header.contact.iter().chain(&self.header.links) {
            if !is_blank(line) {
                writeln!(f, "{line}")?;
            }
        }

        for section in &self.sections {
            writeln!(f)?;
            writeln!(f, "{}", section.heading().to_uppercase())?;
            match section {
                PreviewSection::Objective { text } => writeln!(f, "{text}")?,
                PreviewSection::Internships { entries } => {
                    for entry in entries {
                        writeln!(f, "{}", join_present(&[entry.title.as_str(), entry.subtitle.as_str()], " | "))?;
                        write_bullets(f, &entry.bullets)?;
                    }
                }
                PreviewSection::Projects { entries } => {
                    for entry in entries {
                        writeln!(f, "{}", entry.title)?;
                        write_bullets(f, &entry.bullets)?;
                        writeln!(f, "Technology Used: {}", entry.technology)?;
                    }
                }
                PreviewSection::Education { entries } => {
                    for entry in entries {
                        writeln!(f, "{}", join_present(&[entry.institution.as_str(), entry.date.as_str()], " | "))?;
                        if !entry.detail.is_empty() {
                            writeln!(f, "{}", entry.detail)?;
                        }
                    }
                }
                PreviewSection::Skills { lines } => {
                    for line in lines {
                        writeln!(f, "{}: {}", line.label, line.value)?;
                    }
                }
                PreviewSection::Certifications { entries } => {
                    for entry in entries {
                        writeln!(f, "{}", entry.heading)?;
                        write_bullets(f, &entry.bullets)?;
                    }
                }
            }
        }
        Ok(())
    }
}

fn write_bullets(f: &mut fmt::Formatter<'_>, bullets: &[String]) -> fmt::Result {
    for bullet in bullets {
        writeln!(f, "  • {bullet}")?;
    }
    Ok(())
}
