//! Pure document transitions. Every function takes the previous snapshot by
//! reference and returns a fresh one; the input is never touched.

use thiserror::Error;

use crate::models::resume::{
    EducationItem, ItemField, RecordItem, ResumeDocument, ScalarField, Section, SectionItemsMut,
};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Unknown field '{field}'")]
    UnknownField { field: String },

    #[error("Unknown section '{section}'")]
    UnknownSection { section: String },

    #[error("Index {index} is out of range for {section} (length {len})")]
    InvalidIndex {
        section: Section,
        index: usize,
        len: usize,
    },
}

impl FormError {
    pub fn unknown_field(field: impl Into<String>) -> Self {
        FormError::UnknownField {
            field: field.into(),
        }
    }
}

/// Sets a top-level text field. Skill keys are routed into `skills`.
pub fn update_scalar_field(
    document: &ResumeDocument,
    field: ScalarField,
    value: impl Into<String>,
) -> ResumeDocument {
    let mut next = document.clone();
    let value = value.into();
    let slot = match field {
        ScalarField::Name => &mut next.name,
        ScalarField::Location => &mut next.location,
        ScalarField::Email => &mut next.email,
        ScalarField::Phone => &mut next.phone,
        ScalarField::Linkedin => &mut next.linkedin,
        ScalarField::Github => &mut next.github,
        ScalarField::Objective => &mut next.objective,
        ScalarField::Programming => &mut next.skills.programming,
        ScalarField::Software => &mut next.skills.software,
        ScalarField::Tools => &mut next.skills.tools,
        ScalarField::SoftSkills => &mut next.skills.soft_skills,
    };
    *slot = value;
    next
}

/// Replaces one field on the item at `index` within `section`.
pub fn update_array_field(
    document: &ResumeDocument,
    section: Section,
    index: usize,
    field: ItemField,
    value: impl Into<String>,
) -> Result<ResumeDocument, FormError> {
    let len = document.section_len(section);
    if index >= len {
        return Err(FormError::InvalidIndex {
            section,
            index,
            len,
        });
    }

    let mut next = document.clone();
    let slot = match (next.section_mut(section), field) {
        (SectionItemsMut::Records(items), ItemField::Record(f)) => items[index].field_mut(f),
        (SectionItemsMut::Education(items), ItemField::Education(f)) => items[index].field_mut(f),
        (_, field) => return Err(FormError::unknown_field(field.key())),
    };
    *slot = value.into();
    Ok(next)
}

/// Appends one blank item shaped for `section`.
pub fn add_item(document: &ResumeDocument, section: Section) -> ResumeDocument {
    let mut next = document.clone();
    match next.section_mut(section) {
        SectionItemsMut::Records(items) => items.push(RecordItem::default()),
        SectionItemsMut::Education(items) => items.push(EducationItem::default()),
    }
    next
}

/// Removes the item at `index`. A one-item section is returned unchanged,
/// whatever the index.
pub fn remove_item(
    document: &ResumeDocument,
    section: Section,
    index: usize,
) -> Result<ResumeDocument, FormError> {
    let len = document.section_len(section);
    if len <= 1 {
        return Ok(document.clone());
    }
    if index >= len {
        return Err(FormError::InvalidIndex {
            section,
            index,
            len,
        });
    }

    let mut next = document.clone();
    match next.section_mut(section) {
        SectionItemsMut::Records(items) => {
            items.remove(index);
        }
        SectionItemsMut::Education(items) => {
            items.remove(index);
        }
    }
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{EducationField, RecordField};

    fn titled(title: &str) -> RecordItem {
        RecordItem {
            title: title.to_string(),
            ..RecordItem::default()
        }
    }

    fn with_projects(titles: &[&str]) -> ResumeDocument {
        ResumeDocument {
            academic_projects: titles.iter().map(|t| titled(t)).collect(),
            ..ResumeDocument::default()
        }
    }

    #[test]
    fn test_update_scalar_field_changes_only_that_field() {
        let doc = with_projects(&["A", "B"]);
        let next = update_scalar_field(&doc, ScalarField::Email, "a@b.c");

        assert_eq!(next.email, "a@b.c");
        let restored = ResumeDocument {
            email: doc.email.clone(),
            ..next.clone()
        };
        assert_eq!(restored, doc);
        // previous snapshot untouched
        assert!(doc.email.is_empty());
    }

    #[test]
    fn test_update_scalar_field_routes_skill_keys_into_skills() {
        let doc = ResumeDocument::default();
        let next = update_scalar_field(&doc, ScalarField::SoftSkills, "Patience");

        assert_eq!(next.skills.soft_skills, "Patience");
        assert!(next.name.is_empty());
        assert_eq!(
            ResumeDocument {
                skills: doc.skills.clone(),
                ..next
            },
            doc
        );
    }

    #[test]
    fn test_every_scalar_field_is_addressable() {
        let doc = ResumeDocument::default();
        for field in ScalarField::ALL {
            let next = update_scalar_field(&doc, field, "x");
            assert_ne!(next, doc, "{} did not change the document", field.key());
        }
    }

    #[test]
    fn test_update_array_field_touches_one_item() {
        let doc = with_projects(&["A", "B", "C"]);
        let next = update_array_field(
            &doc,
            Section::AcademicProjects,
            1,
            ItemField::Record(RecordField::Description),
            "• Did things",
        )
        .unwrap();

        assert_eq!(next.academic_projects[1].description, "• Did things");
        assert_eq!(next.academic_projects[0], doc.academic_projects[0]);
        assert_eq!(next.academic_projects[2], doc.academic_projects[2]);
        assert_eq!(next.internship_experience, doc.internship_experience);
    }

    #[test]
    fn test_update_array_field_on_education() {
        let doc = ResumeDocument::default();
        let next = update_array_field(
            &doc,
            Section::Education,
            0,
            ItemField::Education(EducationField::Gpa),
            "3.9",
        )
        .unwrap();
        assert_eq!(next.education[0].gpa, "3.9");
    }

    #[test]
    fn test_update_array_field_out_of_range() {
        let doc = ResumeDocument::default();
        let err = update_array_field(
            &doc,
            Section::Certifications,
            1,
            ItemField::Record(RecordField::Title),
            "x",
        )
        .unwrap_err();
        assert_eq!(
            err,
            FormError::InvalidIndex {
                section: Section::Certifications,
                index: 1,
                len: 1
            }
        );
    }

    #[test]
    fn test_update_array_field_rejects_mismatched_shape() {
        let doc = ResumeDocument::default();
        let err = update_array_field(
            &doc,
            Section::Education,
            0,
            ItemField::Record(RecordField::Title),
            "x",
        )
        .unwrap_err();
        assert_eq!(err, FormError::unknown_field("title"));
    }

    #[test]
    fn test_add_item_appends_blank_of_matching_shape() {
        let doc = with_projects(&["A"]);
        let next = add_item(&doc, Section::AcademicProjects);
        assert_eq!(next.academic_projects.len(), 2);
        assert_eq!(next.academic_projects[0], doc.academic_projects[0]);
        assert_eq!(next.academic_projects[1], RecordItem::default());

        let next = add_item(&doc, Section::Education);
        assert_eq!(next.education.len(), 2);
        assert_eq!(next.education[1], EducationItem::default());
    }

    #[test]
    fn test_remove_item_preserves_relative_order() {
        let doc = with_projects(&["A", "B", "C", "D"]);
        let next = remove_item(&doc, Section::AcademicProjects, 1).unwrap();
        let titles: Vec<&str> = next
            .academic_projects
            .iter()
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(titles, vec!["A", "C", "D"]);
        assert_eq!(doc.academic_projects.len(), 4);
    }

    #[test]
    fn test_remove_last_remaining_item_is_noop() {
        let doc = with_projects(&["Only"]);
        let next = remove_item(&doc, Section::AcademicProjects, 0).unwrap();
        assert_eq!(next, doc);
        // index is not checked once the section is at its minimum
        let next = remove_item(&doc, Section::AcademicProjects, 7).unwrap();
        assert_eq!(next, doc);
    }

    #[test]
    fn test_remove_item_out_of_range() {
        let doc = with_projects(&["A", "B"]);
        let err = remove_item(&doc, Section::AcademicProjects, 2).unwrap_err();
        assert!(matches!(err, FormError::InvalidIndex { index: 2, len: 2, .. }));
    }
}
