// Renders resolved matches into a user-facing reply. No re-interpretation:
// the resolver already decided what matched.
use crate::model::{MatchResult, TireCard, UserReply};

pub fn format(result: &MatchResult<'_>) -> UserReply {
    if result.items.is_empty() {
        let summary = if result.criteria.is_empty() {
            "No tires found.".to_string()
        } else {
            format!("No tires found for {}.", result.criteria)
        };
        return UserReply {
            summary,
            cards: Vec::new(),
        };
    }

    let cards = result
        .items
        .iter()
        .map(|tire| TireCard {
            brand: tire.brand.clone(),
            model: tire.model.clone(),
            size: tire.size.clone(),
            price: format!("${:.2}", tire.price),
            rating: tire.rating,
            stock: tire.stock,
            image_url: tire.image_url.clone(),
            product_url: tire.product_url.clone(),
        })
        .collect();

    UserReply {
        summary: format!(
            "Found {} matching tires for {}:",
            result.items.len(),
            result.criteria
        ),
        cards,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::item;
    use crate::model::MatchResult;

    #[test]
    fn non_empty_result_gets_count_prefix_and_cards_in_order() {
        let first = item(1, "Michelin", "Defender T+H", "225/65R17", 129.99, "Nissan", "Pathfinder");
        let second = item(4, "Bridgestone", "Turanza QuietTrack", "225/65R17", 154.0, "Nissan", "Pathfinder");
        let result = MatchResult {
            items: vec![&first, &second],
            criteria: "nissan pathfinder".into(),
        };

        let reply = format(&result);
        assert_eq!(reply.summary, "Found 2 matching tires for nissan pathfinder:");
        assert_eq!(reply.cards.len(), 2);
        assert_eq!(reply.cards[0].brand, "Michelin");
        assert_eq!(reply.cards[0].price, "$129.99");
        assert_eq!(reply.cards[1].price, "$154.00");
        assert_eq!(reply.cards[1].product_url, "https://tires.example/p/4");
    }

    #[test]
    fn empty_result_with_empty_criteria_drops_the_echo() {
        let result = MatchResult {
            items: Vec::new(),
            criteria: String::new(),
        };
        assert_eq!(format(&result).summary, "No tires found.");
    }

    #[test]
    fn empty_result_echoes_the_criteria() {
        let result = MatchResult {
            items: Vec::new(),
            criteria: "acme unicorn (999/99R99)".into(),
        };
        let reply = format(&result);
        assert_eq!(reply.summary, "No tires found for acme unicorn (999/99R99).");
        assert!(reply.cards.is_empty());
    }
}
