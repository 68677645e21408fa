// Maps a parsed query onto exactly one matching route.
use crate::model::{ParsedQuery, Route};

/// Total classification: every query gets exactly one route. A literal
/// catalog name in the text beats the more ambiguous fitment reading, a
/// known-brand fitment clause beats the vehicle reading, and anything
/// without structure defers to the external generator.
pub fn classify(query: &ParsedQuery) -> Route {
    if let Some((brand, model)) = &query.matched_full_name {
        return Route::FullName {
            brand: brand.clone(),
            model: model.clone(),
        };
    }

    if let (Some(brand), Some(fragment)) = (&query.candidate_brand, &query.candidate_model) {
        return Route::Brand {
            brand: brand.clone(),
            model_fragment: fragment.clone(),
            size: query.size_token.clone(),
        };
    }

    if let (Some(make), Some(model)) = (&query.vehicle_make, &query.vehicle_model) {
        return Route::Vehicle {
            make: make.clone(),
            model: model.clone(),
            size: query.size_token.clone(),
        };
    }

    Route::NoStructuredMatch
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_wins_over_fitment_clause() {
        let query = ParsedQuery {
            raw_text: "I have a michelin defender t+h, tires for nissan pathfinder".into(),
            matched_full_name: Some(("michelin".into(), "defender t+h".into())),
            vehicle_make: Some("nissan".into()),
            vehicle_model: Some("pathfinder".into()),
            ..ParsedQuery::default()
        };
        assert_eq!(
            classify(&query),
            Route::FullName {
                brand: "michelin".into(),
                model: "defender t+h".into()
            }
        );
    }

    #[test]
    fn brand_fields_produce_brand_route_with_size() {
        let query = ParsedQuery {
            candidate_brand: Some("michelin".into()),
            candidate_model: Some("defender".into()),
            size_token: Some("225/65r17".into()),
            ..ParsedQuery::default()
        };
        assert_eq!(
            classify(&query),
            Route::Brand {
                brand: "michelin".into(),
                model_fragment: "defender".into(),
                size: Some("225/65r17".into())
            }
        );
    }

    #[test]
    fn vehicle_fields_produce_vehicle_route() {
        let query = ParsedQuery {
            vehicle_make: Some("nissan".into()),
            vehicle_model: Some("pathfinder".into()),
            ..ParsedQuery::default()
        };
        assert_eq!(
            classify(&query),
            Route::Vehicle {
                make: "nissan".into(),
                model: "pathfinder".into(),
                size: None
            }
        );
    }

    #[test]
    fn empty_query_has_no_structured_match() {
        assert_eq!(classify(&ParsedQuery::default()), Route::NoStructuredMatch);
    }
}
