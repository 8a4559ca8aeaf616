use std::fmt;

use serde::{Deserialize, Serialize};

/// A question captured by the intake handler and handed to the worker.
///
/// This is the JSON payload that crosses the async invocation boundary.
/// Every field defaults to an empty string so partial payloads still parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub response_url: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub correlation_id: String,
}

/// Where a retrieved passage came from.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceLocation {
    S3 { uri: String },
    /// Web, Confluence, SharePoint and Salesforce sources all resolve to a URL.
    Url { url: String },
    /// A typed location without a URI (custom documents, SQL, Kendra, ...).
    Other { kind: String },
    Unknown,
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceLocation::S3 { uri } => write!(f, "{uri}"),
            SourceLocation::Url { url } => write!(f, "{url}"),
            SourceLocation::Other { kind } => write!(f, "{kind}"),
            SourceLocation::Unknown => write!(f, "Unknown source"),
        }
    }
}

/// Relevance score as reported by the knowledge base.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PassageScore {
    Known(f64),
    Unknown,
}

impl fmt::Display for PassageScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PassageScore::Known(score) => write!(f, "{score}"),
            PassageScore::Unknown => write!(f, "N/A"),
        }
    }
}

impl From<Option<f64>> for PassageScore {
    fn from(score: Option<f64>) -> Self {
        score.map_or(PassageScore::Unknown, PassageScore::Known)
    }
}

/// One knowledge base hit, numbered from 1 in retrieval order.
#[derive(Debug, Clone, PartialEq)]
pub struct RetrievedPassage {
    pub index: usize,
    pub content: String,
    pub source: SourceLocation,
    pub score: PassageScore,
}
