// Turns a route into catalog matches with fixed precedence and fallback.
use crate::catalog::CatalogStore;
use crate::model::{MatchResult, Route};

/// Outcome of resolving one route. `Defer` means the classifier found
/// nothing to search and the caller must escalate to the generator; it is
/// not the same as an empty match list.
#[derive(Debug)]
pub enum Resolution<'a> {
    Matched(MatchResult<'a>),
    Defer,
}

/// Deterministic, side-effect-free: the same route against the same catalog
/// snapshot always yields the same items in the same order.
pub fn resolve<'a>(route: &Route, catalog: &'a CatalogStore) -> Resolution<'a> {
    match route {
        // Full-name hits carry no size filter; the literal catalog name is
        // already as specific as the text gets.
        Route::FullName { brand, model } => Resolution::Matched(MatchResult {
            items: catalog.find_exact(brand, model),
            criteria: format!("{brand} {model}"),
        }),
        Route::Brand {
            brand,
            model_fragment,
            size,
        } => {
            let mut items = catalog.find_by_brand_model_substring(brand, model_fragment);
            if let Some(size) = size {
                items = CatalogStore::filter_by_size(items, size);
            }
            Resolution::Matched(MatchResult {
                items,
                criteria: describe(&format!("{brand} {model_fragment}"), size.as_deref()),
            })
        }
        Route::Vehicle { make, model, size } => {
            // Rows with an unknown vehicle store empty strings, so an empty
            // fitment clause must not fall through to the equality match.
            let mut items = if make.is_empty() && model.is_empty() {
                Vec::new()
            } else {
                catalog.find_by_vehicle(make, model)
            };
            if let Some(size) = size {
                items = CatalogStore::filter_by_size(items, size);
            }
            Resolution::Matched(MatchResult {
                items,
                criteria: describe(&format!("{make} {model}"), size.as_deref()),
            })
        }
        Route::NoStructuredMatch => Resolution::Defer,
    }
}

fn describe(base: &str, size: Option<&str>) -> String {
    match size {
        Some(size) => format!("{} ({})", base.trim(), size.to_uppercase()),
        None => base.trim().to_string(),
    }
}
