/// Category of a community deck.
///
/// Known subjects get their own variant; anything else is kept verbatim in
/// `Other` so the displayed and searched text never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subject {
    Chemistry,
    History,
    ComputerScience,
    Other(String),
}

impl Subject {
    pub fn parse(label: &str) -> Self {
        match label {
            "Chemistry" => Subject::Chemistry,
            "History" => Subject::History,
            "Computer Science" => Subject::ComputerScience,
            other => Subject::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Subject::Chemistry => "Chemistry",
            Subject::History => "History",
            Subject::ComputerScience => "Computer Science",
            Subject::Other(label) => label.as_str(),
        }
    }
}
