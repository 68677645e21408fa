// Extracts structured fields from a raw utterance: catalog full-name hits,
// "tires for" fitment clauses, and size tokens.
use crate::catalog::CatalogStore;
use crate::model::ParsedQuery;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Canonical tire size, e.g. 225/65R17. Anything size-like that fails this
/// pattern is simply not a size filter.
static SIZE_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{3}/\d{2}[rR]\d{2}").unwrap());

/// Derives a `ParsedQuery` from one utterance. Best effort: fields that do
/// not apply stay `None`, and the classifier decides which ones are active.
pub fn parse_query(
    utterance: &str,
    catalog: &CatalogStore,
    known_brands: &HashSet<String>,
) -> ParsedQuery {
    let lowered = utterance.to_lowercase();
    let mut query = ParsedQuery {
        raw_text: utterance.trim().to_string(),
        ..ParsedQuery::default()
    };

    query.matched_full_name = find_full_name(&lowered, catalog);

    if lowered.contains("tires for") {
        parse_fitment_clause(&lowered, known_brands, &mut query);
    }

    query
}

/// Scans the catalog for a "<brand> <model>" string (or a bare model name)
/// contained verbatim in the utterance. First hit in catalog order wins.
fn find_full_name(lowered: &str, catalog: &CatalogStore) -> Option<(String, String)> {
    for tire in catalog.all() {
        let brand = tire.brand.to_lowercase();
        let model = tire.model.to_lowercase();
        let full = format!("{brand} {model}");
        if lowered.contains(&full) || lowered.contains(&model) {
            return Some((brand, model));
        }
    }
    None
}

/// Splits the text after the first "for " into brand-or-make plus model,
/// stripping out a size token when one is present.
fn parse_fitment_clause(lowered: &str, known_brands: &HashSet<String>, query: &mut ParsedQuery) {
    let Some((_, clause)) = lowered.split_once("for ") else {
        return;
    };

    let mut clause = clause.trim().to_string();
    if let Some(m) = SIZE_TOKEN.find(&clause) {
        query.size_token = Some(m.as_str().to_string());
        let range = m.range();
        clause.replace_range(range, "");
    }

    let mut tokens = clause.split_whitespace();
    let head = tokens.next().unwrap_or("").to_string();
    // Multi-word models stay one joined string; a clause with fewer than two
    // tokens yields an empty model, which matches nothing downstream.
    let rest = tokens.collect::<Vec<_>>().join(" ");

    if known_brands.contains(&head) {
        query.candidate_brand = Some(head);
        query.candidate_model = Some(rest);
    } else {
        query.vehicle_make = Some(head);
        query.vehicle_model = Some(rest);
    }
}
