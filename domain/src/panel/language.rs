//! Target languages offered by the Coding Assistant panel.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    Python,
    JavaScript,
    Java,
    Cpp,
    Go,
    Ruby,
    Swift,
    Php,
    CSharp,
    Other,
}

impl Language {
    /// All languages in dropdown order
    pub const ALL: [Language; 10] = [
        Language::Python,
        Language::JavaScript,
        Language::Java,
        Language::Cpp,
        Language::Go,
        Language::Ruby,
        Language::Swift,
        Language::Php,
        Language::CSharp,
        Language::Other,
    ];

    /// Name as shown in the dropdown and interpolated into prompts
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Python => "Python",
            Language::JavaScript => "JavaScript",
            Language::Java => "Java",
            Language::Cpp => "C++",
            Language::Go => "Go",
            Language::Ruby => "Ruby",
            Language::Swift => "Swift",
            Language::Php => "PHP",
            Language::CSharp => "C#",
            Language::Other => "Other",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for Language {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let language = match lower.as_str() {
            "python" | "py" => Language::Python,
            "javascript" | "js" => Language::JavaScript,
            "java" => Language::Java,
            "c++" | "cpp" => Language::Cpp,
            "go" | "golang" => Language::Go,
            "ruby" | "rb" => Language::Ruby,
            "swift" => Language::Swift,
            "php" => Language::Php,
            "c#" | "csharp" | "cs" => Language::CSharp,
            "other" => Language::Other,
            _ => return Err(DomainError::UnknownLanguage(s.trim().to_string())),
        };
        Ok(language)
    }
}
