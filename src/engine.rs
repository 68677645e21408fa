// The interpretation pipeline: normalize -> classify -> resolve -> format.
// Every entry point (chat, recommendations, image lookup) goes through the
// same catalog primitives instead of re-implementing the branching.
use crate::catalog::CatalogStore;
use crate::classifier::classify;
use crate::formatter::format;
use crate::model::{CatalogItem, MatchResult, UserReply};
use crate::normalizer::parse_query;
use crate::resolver::{resolve, Resolution};
use std::collections::HashSet;
use tracing::info;

/// Caller-owned conversation state. The engine never remembers anything
/// between calls; whatever should carry across turns comes back in here.
#[derive(Debug, Clone, Default)]
pub struct ConversationContext {
    /// Canonical model name of the last tire the user resolved, for
    /// follow-ups like "show me the tires".
    pub last_resolved_model: Option<String>,
}

/// Verdict for one utterance. `Defer` tells the caller to consult the
/// external generator; the engine itself has no free-text answer.
#[derive(Debug)]
pub enum Outcome {
    Reply {
        reply: UserReply,
        /// Model name the caller should store as `last_resolved_model`,
        /// when this turn resolved one.
        resolved_model: Option<String>,
    },
    Defer,
}

/// Optional filters for the recommendation entry point. An exact tire model
/// takes precedence over a vehicle pair; with no filters the whole catalog
/// comes back.
#[derive(Debug, Clone, Default)]
pub struct RecommendFilter {
    pub tire_model: Option<String>,
    pub vehicle_make: Option<String>,
    pub vehicle_model: Option<String>,
}

/// Catalog listing entry: id, display name, price.
#[derive(Debug, Clone, serde::Serialize)]
pub struct TireSummary {
    pub id: u32,
    pub name: String,
    pub price: f64,
}

pub struct Engine {
    catalog: CatalogStore,
    known_brands: HashSet<String>,
}

impl Engine {
    pub fn new(catalog: CatalogStore, known_brands: &[String]) -> Self {
        Self {
            catalog,
            known_brands: known_brands.iter().map(|b| b.to_lowercase()).collect(),
        }
    }

    /// Interprets one utterance against the catalog. Synchronous and
    /// deterministic for a given catalog snapshot and context.
    pub fn interpret(&self, utterance: &str, ctx: &ConversationContext) -> Outcome {
        let lowered = utterance.to_lowercase();

        // Continuation turn: "show me the tires" refers back to whatever
        // model the previous turn resolved.
        if lowered.contains("show me the tires") {
            if let Some(model) = &ctx.last_resolved_model {
                info!("continuation turn for model: {}", model);
                let result = MatchResult {
                    items: self.catalog.find_by_model(model),
                    criteria: model.clone(),
                };
                return Outcome::Reply {
                    reply: format(&result),
                    resolved_model: Some(model.clone()),
                };
            }
        }

        let query = parse_query(utterance, &self.catalog, &self.known_brands);
        let route = classify(&query);
        info!("classified route: {:?}", route);

        match resolve(&route, &self.catalog) {
            Resolution::Matched(result) => {
                let resolved_model = result.items.first().map(|t| t.model.clone());
                Outcome::Reply {
                    reply: format(&result),
                    resolved_model,
                }
            }
            Resolution::Defer => Outcome::Defer,
        }
    }

    /// Recommendation lookup. Always answers, even with no filters.
    pub fn recommend(&self, filter: &RecommendFilter) -> Vec<&CatalogItem> {
        if let Some(model) = &filter.tire_model {
            return self.catalog.find_by_model(model);
        }
        if let (Some(make), Some(model)) = (&filter.vehicle_make, &filter.vehicle_model) {
            return self.catalog.find_by_vehicle(make, model);
        }
        self.catalog.all().iter().collect()
    }

    /// First catalog image matching the given optional filters.
    pub fn find_image(
        &self,
        brand: Option<&str>,
        size: Option<&str>,
        model: Option<&str>,
    ) -> Option<&str> {
        self.catalog
            .all()
            .iter()
            .find(|t| {
                brand.is_none_or(|b| t.brand.eq_ignore_ascii_case(b))
                    && size.is_none_or(|s| t.size.eq_ignore_ascii_case(s))
                    && model.is_none_or(|m| t.model.eq_ignore_ascii_case(m))
            })
            .map(|t| t.image_url.as_str())
    }

    /// Flat listing of the whole catalog.
    pub fn list_tires(&self) -> Vec<TireSummary> {
        self.catalog
            .all()
            .iter()
            .map(|t| TireSummary {
                id: t.id,
                name: format!("{} {} {}", t.brand, t.model, t.size),
                price: t.price,
            })
            .collect()
    }
}
