use serde::{Deserialize, Serialize};

/// One entry in an experience-like section (internships, projects, certifications).
/// `description` is free text, one bullet per line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordItem {
    pub title: String,
    pub subtitle: String,
    pub date: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationItem {
    pub institution: String,
    pub degree: String,
    pub gpa: String,
    pub date: String,
}

/// Fixed-shape skills block. Four independent text fields, not a collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillSet {
    pub programming: String,
    pub software: String,
    pub tools: String,
    pub soft_skills: String,
}

/// The root résumé document. Serialized field names and order are the wire
/// format expected by the PDF webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDocument {
    pub name: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
    pub objective: String,
    pub internship_experience: Vec<RecordItem>,
    pub academic_projects: Vec<RecordItem>,
    pub education: Vec<EducationItem>,
    pub skills: SkillSet,
    pub certifications: Vec<RecordItem>,
}

impl Default for ResumeDocument {
    /// All fields blank, every repeating section holding exactly one blank item.
    fn default() -> Self {
        Self {
            name: String::new(),
            location: String::new(),
            email: String::new(),
            phone: String::new(),
            linkedin: String::new(),
            github: String::new(),
            objective: String::new(),
            internship_experience: vec![RecordItem::default()],
            academic_projects: vec![RecordItem::default()],
            education: vec![EducationItem::default()],
            skills: SkillSet::default(),
            certifications: vec![RecordItem::default()],
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Section selector
// ────────────────────────────────────────────────────────────────────────────

/// The four repeating sections. Addressing is by section + positional index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    InternshipExperience,
    AcademicProjects,
    Education,
    Certifications,
}

/// Item shape carried by a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemShape {
    Record,
    Education,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::InternshipExperience,
        Section::AcademicProjects,
        Section::Education,
        Section::Certifications,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "internshipExperience" => Some(Section::InternshipExperience),
            "academicProjects" => Some(Section::AcademicProjects),
            "education" => Some(Section::Education),
            "certifications" => Some(Section::Certifications),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Section::InternshipExperience => "internshipExperience",
            Section::AcademicProjects => "academicProjects",
            Section::Education => "education",
            Section::Certifications => "certifications",
        }
    }

    /// Human-readable heading used by the form and the preview.
    pub fn heading(&self) -> &'static str {
        match self {
            Section::InternshipExperience => "Internship Experience",
            Section::AcademicProjects => "Academic Projects",
            Section::Education => "Education",
            Section::Certifications => "Certifications",
        }
    }

    pub fn shape(&self) -> ItemShape {
        match self {
            Section::Education => ItemShape::Education,
            Section::InternshipExperience | Section::AcademicProjects | Section::Certifications => {
                ItemShape::Record
            }
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Borrowed view of a section's items, tagged by item shape.
#[derive(Debug, Clone, Copy)]
pub enum SectionItems<'a> {
    Records(&'a [RecordItem]),
    Education(&'a [EducationItem]),
}

impl SectionItems<'_> {
    pub fn len(&self) -> usize {
        match self {
            SectionItems::Records(items) => items.len(),
            SectionItems::Education(items) => items.len(),
        }
    }
}

/// Mutable counterpart of [`SectionItems`].
#[derive(Debug)]
pub enum SectionItemsMut<'a> {
    Records(&'a mut Vec<RecordItem>),
    Education(&'a mut Vec<EducationItem>),
}

impl ResumeDocument {
    pub fn section(&self, section: Section) -> SectionItems<'_> {
        match section {
            Section::InternshipExperience => SectionItems::Records(&self.internship_experience),
            Section::AcademicProjects => SectionItems::Records(&self.academic_projects),
            Section::Education => SectionItems::Education(&self.education),
            Section::Certifications => SectionItems::Records(&self.certifications),
        }
    }

    pub fn section_mut(&mut self, section: Section) -> SectionItemsMut<'_> {
        match section {
            Section::InternshipExperience => {
                SectionItemsMut::Records(&mut self.internship_experience)
            }
            Section::AcademicProjects => SectionItemsMut::Records(&mut self.academic_projects),
            Section::Education => SectionItemsMut::Education(&mut self.education),
            Section::Certifications => SectionItemsMut::Records(&mut self.certifications),
        }
    }

    pub fn section_len(&self, section: Section) -> usize {
        self.section(section).len()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Field keys
// ────────────────────────────────────────────────────────────────────────────

/// Top-level text fields plus the four skill sub-fields, which the form
/// addresses as if they were top-level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarField {
    Name,
    Location,
    Email,
    Phone,
    Linkedin,
    Github,
    Objective,
    Programming,
    Software,
    Tools,
    SoftSkills,
}

impl ScalarField {
    pub const ALL: [ScalarField; 11] = [
        ScalarField::Name,
        ScalarField::Location,
        ScalarField::Email,
        ScalarField::Phone,
        ScalarField::Linkedin,
        ScalarField::Github,
        ScalarField::Objective,
        ScalarField::Programming,
        ScalarField::Software,
        ScalarField::Tools,
        ScalarField::SoftSkills,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    pub fn key(&self) -> &'static str {
        match self {
            ScalarField::Name => "name",
            ScalarField::Location => "location",
            ScalarField::Email => "email",
            ScalarField::Phone => "phone",
            ScalarField::Linkedin => "linkedin",
            ScalarField::Github => "github",
            ScalarField::Objective => "objective",
            ScalarField::Programming => "programming",
            ScalarField::Software => "software",
            ScalarField::Tools => "tools",
            ScalarField::SoftSkills => "softSkills",
        }
    }

}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordField {
    Title,
    Subtitle,
    Date,
    Description,
}

impl RecordField {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "title" => Some(RecordField::Title),
            "subtitle" => Some(RecordField::Subtitle),
            "date" => Some(RecordField::Date),
            "description" => Some(RecordField::Description),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            RecordField::Title => "title",
            RecordField::Subtitle => "subtitle",
            RecordField::Date => "date",
            RecordField::Description => "description",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EducationField {
    Institution,
    Degree,
    Gpa,
    Date,
}

impl EducationField {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "institution" => Some(EducationField::Institution),
            "degree" => Some(EducationField::Degree),
            "gpa" => Some(EducationField::Gpa),
            "date" => Some(EducationField::Date),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            EducationField::Institution => "institution",
            EducationField::Degree => "degree",
            EducationField::Gpa => "gpa",
            EducationField::Date => "date",
        }
    }
}

/// A field key on a section item, tagged by the item shape it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemField {
    Record(RecordField),
    Education(EducationField),
}

impl ItemField {
    /// Resolves `key` against the item shape of `section`. `"gpa"` is only
    /// valid for education, `"title"` only for record sections.
    pub fn for_section(section: Section, key: &str) -> Option<Self> {
        match section.shape() {
            ItemShape::Record => RecordField::from_key(key).map(ItemField::Record),
            ItemShape::Education => EducationField::from_key(key).map(ItemField::Education),
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            ItemField::Record(f) => f.key(),
            ItemField::Education(f) => f.key(),
        }
    }
}

impl RecordItem {
    pub fn field_mut(&mut self, field: RecordField) -> &mut String {
        match field {
            RecordField::Title => &mut self.title,
            RecordField::Subtitle => &mut self.subtitle,
            RecordField::Date => &mut self.date,
            RecordField::Description => &mut self.description,
        }
    }
}

impl EducationItem {
    pub fn field_mut(&mut self, field: EducationField) -> &mut String {
        match field {
            EducationField::Institution => &mut self.institution,
            EducationField::Degree => &mut self.degree,
            EducationField::Gpa => &mut self.gpa,
            EducationField::Date => &mut self.date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> ResumeDocument {
        ResumeDocument {
            name: "Ada Lovelace".to_string(),
            location: "London, UK".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+44 1234".to_string(),
            linkedin: "https://www.linkedin.com/in/ada".to_string(),
            github: "https://github.com/ada".to_string(),
            objective: "Build engines".to_string(),
            internship_experience: vec![RecordItem {
                title: "Analyst".to_string(),
                subtitle: "Babbage & Co".to_string(),
                date: "1842".to_string(),
                description: "• Wrote notes\n• Found bugs".to_string(),
            }],
            academic_projects: vec![RecordItem::default(), RecordItem::default()],
            education: vec![EducationItem {
                institution: "Home".to_string(),
                degree: "Mathematics".to_string(),
                gpa: "4.0".to_string(),
                date: "1830-1835".to_string(),
            }],
            skills: SkillSet {
                programming: "Notes G".to_string(),
                software: String::new(),
                tools: "Difference engine".to_string(),
                soft_skills: "Poetry".to_string(),
            },
            certifications: vec![RecordItem::default()],
        }
    }

    #[test]
    fn test_default_document_has_one_blank_item_per_section() {
        let doc = ResumeDocument::default();
        for section in Section::ALL {
            assert_eq!(doc.section_len(section), 1, "{section}");
        }
        assert_eq!(doc.education[0], EducationItem::default());
        assert_eq!(doc.skills, SkillSet::default());
        assert!(doc.name.is_empty());
    }

    #[test]
    fn test_wire_field_names_and_order() {
        let value = serde_json::to_value(ResumeDocument::default()).unwrap();
        let mut keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        let mut expected = vec![
            "name",
            "location",
            "email",
            "phone",
            "linkedin",
            "github",
            "objective",
            "internshipExperience",
            "academicProjects",
            "education",
            "skills",
            "certifications",
        ];
        expected.sort_unstable();
        assert_eq!(keys, expected);

        let text = serde_json::to_string(&ResumeDocument::default()).unwrap();
        assert!(text.starts_with(r#"{"name":"","location":"","email":"#));
        assert!(text.contains(r#""skills":{"programming":"","software":"","tools":"","softSkills":""}"#));
    }

    #[test]
    fn test_round_trip_preserves_document() {
        let doc = sample();
        let wire = serde_json::to_string(&doc).unwrap();
        let parsed: ResumeDocument = serde_json::from_str(&wire).unwrap();
        assert_eq!(parsed, doc);
    }

    #[test]
    fn test_parses_wire_payload() {
        let payload = json!({
            "name": "A", "location": "", "email": "", "phone": "",
            "linkedin": "", "github": "", "objective": "",
            "internshipExperience": [{"title": "T", "subtitle": "", "date": "", "description": ""}],
            "academicProjects": [{"title": "", "subtitle": "", "date": "", "description": ""}],
            "education": [{"institution": "MIT", "degree": "", "gpa": "", "date": ""}],
            "skills": {"programming": "Rust", "software": "", "tools": "", "softSkills": "Calm"},
            "certifications": [{"title": "", "subtitle": "", "date": "", "description": ""}]
        });
        let doc: ResumeDocument = serde_json::from_value(payload).unwrap();
        assert_eq!(doc.internship_experience[0].title, "T");
        assert_eq!(doc.education[0].institution, "MIT");
        assert_eq!(doc.skills.soft_skills, "Calm");
    }

    #[test]
    fn test_section_keys_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_key(section.key()), Some(section));
        }
        assert_eq!(Section::from_key("skills"), None);
        assert_eq!(Section::Education.shape(), ItemShape::Education);
        assert_eq!(Section::Certifications.shape(), ItemShape::Record);
    }

    #[test]
    fn test_scalar_field_keys() {
        for field in ScalarField::ALL {
            assert_eq!(ScalarField::from_key(field.key()), Some(field));
        }
        assert_eq!(ScalarField::from_key("soft_skills"), None);
        assert_eq!(ScalarField::from_key("communication"), None);
    }

    #[test]
    fn test_item_field_resolution_depends_on_shape() {
        assert_eq!(
            ItemField::for_section(Section::Education, "gpa"),
            Some(ItemField::Education(EducationField::Gpa))
        );
        assert_eq!(ItemField::for_section(Section::Certifications, "gpa"), None);
        assert_eq!(ItemField::for_section(Section::Education, "title"), None);
        assert_eq!(
            ItemField::for_section(Section::AcademicProjects, "date"),
            Some(ItemField::Record(RecordField::Date))
        );
    }
}
