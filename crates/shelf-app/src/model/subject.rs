use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Academic subject a resource is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    ComputerScience,
    Mathematics,
    Physics,
    Chemistry,
    Biology,
    History,
    Literature,
    Psychology,
    Business,
    Engineering,
    Medicine,
    Law,
    Arts,
    Other,
}

/// Subjects the generated collections cycle through, in index order.
pub const LISTING_SUBJECTS: [Subject; 7] = [
    Subject::ComputerScience,
    Subject::Mathematics,
    Subject::Physics,
    Subject::History,
    Subject::Literature,
    Subject::Psychology,
    Subject::Business,
];

impl Subject {
    /// Every subject the upload form offers, in display order.
    pub const ALL: [Subject; 14] = [
        Subject::ComputerScience,
        Subject::Mathematics,
        Subject::Physics,
        Subject::Chemistry,
        Subject::Biology,
        Subject::History,
        Subject::Literature,
        Subject::Psychology,
        Subject::Business,
        Subject::Engineering,
        Subject::Medicine,
        Subject::Law,
        Subject::Arts,
        Subject::Other,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Subject::ComputerScience => "Computer Science",
            Subject::Mathematics => "Mathematics",
            Subject::Physics => "Physics",
            Subject::Chemistry => "Chemistry",
            Subject::Biology => "Biology",
            Subject::History => "History",
            Subject::Literature => "Literature",
            Subject::Psychology => "Psychology",
            Subject::Business => "Business",
            Subject::Engineering => "Engineering",
            Subject::Medicine => "Medicine",
            Subject::Law => "Law",
            Subject::Arts => "Arts",
            Subject::Other => "Other",
        }
    }
}

impl Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Subject {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Subject::ALL
            .into_iter()
            .find(|subject| subject.name() == s)
            .ok_or_else(|| format!("unknown subject: {s}"))
    }
}

/// File format tag carried by notes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    #[default]
    Pdf,
    Doc,
    Docx,
    Ppt,
    Pptx,
    Txt,
}

/// Formats the note generator cycles through. PPTX is accepted on upload only.
pub const GENERATED_DOCUMENT_TYPES: [DocumentType; 5] = [
    DocumentType::Pdf,
    DocumentType::Doc,
    DocumentType::Docx,
    DocumentType::Ppt,
    DocumentType::Txt,
];

impl DocumentType {
    pub const ALL: [DocumentType; 6] = [
        DocumentType::Pdf,
        DocumentType::Doc,
        DocumentType::Docx,
        DocumentType::Ppt,
        DocumentType::Pptx,
        DocumentType::Txt,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            DocumentType::Pdf => "PDF",
            DocumentType::Doc => "DOC",
            DocumentType::Docx => "DOCX",
            DocumentType::Ppt => "PPT",
            DocumentType::Pptx => "PPTX",
            DocumentType::Txt => "TXT",
        }
    }
}

impl Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_names_round_trip() {
        for subject in Subject::ALL {
            assert_eq!(subject.name().parse::<Subject>(), Ok(subject));
        }
        assert!("Alchemy".parse::<Subject>().is_err());
    }

    #[test]
    fn test_listing_subjects_are_a_subset() {
        assert!(LISTING_SUBJECTS.iter().all(|s| Subject::ALL.contains(s)));
        assert_eq!(LISTING_SUBJECTS[1], Subject::Mathematics);
    }
}
