//! Client-side search over the authoritative list.

use crate::models::FoodItem;

/// Case-insensitive substring match on name, description and calories.
pub fn matches(item: &FoodItem, query: &str) -> bool {
    let needle = query.to_lowercase();
    [&item.name, &item.description, &item.calories]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Items matching `query`, in their original order. An empty query keeps everything.
pub fn filter(items: &[FoodItem], query: &str) -> Vec<FoodItem> {
    if query.is_empty() {
        return items.to_vec();
    }
    items.iter().filter(|item| matches(item, query)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64, name: &str, description: &str, calories: &str) -> FoodItem {
        FoodItem {
            id,
            name: name.to_string(),
            description: description.to_string(),
            price: "1.00".to_string(),
            calories: calories.to_string(),
        }
    }

    fn sample() -> Vec<FoodItem> {
        vec![
            item(1, "Pizza", "Queso y tomate", "500"),
            item(2, "Ensalada", "Lechuga fresca", "120"),
            item(3, "Hamburguesa", "Carne", "800"),
        ]
    }

    #[test]
    fn test_description_only_match_is_case_insensitive() {
        let found = filter(&sample(), "LECHUGA");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 2);
    }

    #[test]
    fn test_matches_calories_and_name() {
        let ids: Vec<_> = filter(&sample(), "800").iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3]);
        let ids: Vec<_> = filter(&sample(), "piz").iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_price_is_not_searched() {
        assert!(filter(&sample(), "1.00").is_empty());
    }

    #[test]
    fn test_empty_query_keeps_all() {
        assert_eq!(filter(&sample(), "").len(), 3);
    }

    #[test]
    fn test_scenario_que_then_xyz() {
        let items = vec![item(1, "Pizza", "Queso", "500")];
        assert_eq!(filter(&items, "que").len(), 1);
        assert!(filter(&items, "xyz").is_empty());
        assert_eq!(items.len(), 1);
    }
}
