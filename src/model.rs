// Core structs: CatalogItem, ParsedQuery, Route, MatchResult, UserReply
use serde::Deserialize;
use thiserror::Error;

/// One purchasable tire SKU. The brand/model/size combination may repeat
/// across rows (several stock entries for the same product line); only `id`
/// is unique.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogItem {
    pub id: u32,
    pub brand: String,
    pub model: String,
    pub size: String,
    pub price: f64,
    pub rating: f64,
    pub stock: u32,
    pub image_url: String,
    pub product_url: String,
    #[serde(default)]
    pub vehicle_make: String,
    #[serde(default)]
    pub vehicle_model: String,
}

/// Structured fields extracted from one utterance. Derived once per request,
/// never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct ParsedQuery {
    pub raw_text: String,
    /// Lowercased (brand, model) pair found verbatim in the text.
    pub matched_full_name: Option<(String, String)>,
    pub candidate_brand: Option<String>,
    pub candidate_model: Option<String>,
    pub vehicle_make: Option<String>,
    pub vehicle_model: Option<String>,
    pub size_token: Option<String>,
}

/// The classifier's verdict on which matching strategy applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    FullName {
        brand: String,
        model: String,
    },
    Brand {
        brand: String,
        model_fragment: String,
        size: Option<String>,
    },
    Vehicle {
        make: String,
        model: String,
        size: Option<String>,
    },
    NoStructuredMatch,
}

/// Items matched for one route, in catalog order, plus the criteria echoed
/// back in replies. Empty is valid and distinct from "nothing to search".
#[derive(Debug, Clone)]
pub struct MatchResult<'a> {
    pub items: Vec<&'a CatalogItem>,
    pub criteria: String,
}

/// One rendered catalog hit, markup-independent.
#[derive(Debug, Clone, PartialEq)]
pub struct TireCard {
    pub brand: String,
    pub model: String,
    pub size: String,
    /// Two-decimal dollar amount, e.g. "$129.99".
    pub price: String,
    pub rating: f64,
    pub stock: u32,
    pub image_url: String,
    pub product_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserReply {
    pub summary: String,
    pub cards: Vec<TireCard>,
}

/// Single chat turn handed to the generator collaborator.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: "system".into(), content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: "user".into(), content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: "assistant".into(), content: content.into() }
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog file unreadable: {0}")]
    Unreadable(#[from] std::io::Error),
    #[error("catalog file malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("generator API error: {0}")]
    ApiError(String),
    #[error("generator timed out")]
    Timeout,
    #[error("generator returned no completion")]
    EmptyCompletion,
}
