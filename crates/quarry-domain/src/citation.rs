//! Citation artifacts

use serde::{Deserialize, Serialize};

/// Supported citation formats
///
/// Both formats currently render the same literal template; the tag is
/// preserved so a real CSL renderer can dispatch on it later.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CitationFormat {
    /// APA style
    #[default]
    #[serde(rename = "APA")]
    Apa,
    /// Citation Style Language
    #[serde(rename = "CSL")]
    Csl,
}

impl CitationFormat {
    /// Get the format tag as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            CitationFormat::Apa => "APA",
            CitationFormat::Csl => "CSL",
        }
    }

    /// Parse a format tag from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "APA" => Some(CitationFormat::Apa),
            "CSL" => Some(CitationFormat::Csl),
            _ => None,
        }
    }
}

impl std::str::FromStr for CitationFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid citation format: {}", s))
    }
}

/// A rendered citation tied to one dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Citation {
    /// Citation identifier ("cite-<dataset id>")
    pub id: String,

    /// The cited dataset
    pub dataset_id: String,

    /// Requested format tag
    pub format: CitationFormat,

    /// The rendered citation string
    pub text: String,

    /// When the citation was rendered (RFC 3339)
    pub generated_at: String,
}
