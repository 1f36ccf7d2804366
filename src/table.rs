//! Table Sorting and Pagination
//!
//! Applied to the filtered view before rendering.

use std::cmp::Ordering;

use crate::models::FoodItem;

/// Sortable data columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Id,
    Name,
    Description,
    Price,
    Calories,
}

/// Column headers in display order: (column, label, right aligned)
pub const COLUMNS: &[(Column, &str, bool)] = &[
    (Column::Id, "ID Comida", false),
    (Column::Name, "Nombre", false),
    (Column::Description, "Descripción", false),
    (Column::Price, "Precio", true),
    (Column::Calories, "Calorías", false),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub column: Column,
    pub direction: SortDirection,
}

impl SortOrder {
    /// Order after clicking `column`: same column flips direction, a new column starts ascending.
    pub fn after_click(current: Option<SortOrder>, column: Column) -> SortOrder {
        match current {
            Some(order) if order.column == column => SortOrder {
                column,
                direction: match order.direction {
                    SortDirection::Ascending => SortDirection::Descending,
                    SortDirection::Descending => SortDirection::Ascending,
                },
            },
            _ => SortOrder {
                column,
                direction: SortDirection::Ascending,
            },
        }
    }
}

/// Compare as numbers when both sides parse, otherwise as text.
fn numeric_or_text(a: &str, b: &str) -> Ordering {
    match (a.trim().parse::<f64>(), b.trim().parse::<f64>()) {
        (Ok(x), Ok(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => a.cmp(b),
    }
}

fn compare(a: &FoodItem, b: &FoodItem, column: Column) -> Ordering {
    match column {
        Column::Id => a.id.cmp(&b.id),
        Column::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        Column::Description => a.description.to_lowercase().cmp(&b.description.to_lowercase()),
        Column::Price => numeric_or_text(&a.price, &b.price),
        Column::Calories => numeric_or_text(&a.calories, &b.calories),
    }
}

/// Stable sort in place
pub fn sort(items: &mut [FoodItem], order: SortOrder) {
    items.sort_by(|a, b| {
        let ordering = compare(a, b, order.column);
        match order.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

/// Number of pages, never less than one
pub fn page_count(total: usize, page_size: usize) -> usize {
    let size = page_size.max(1);
    total.div_ceil(size).max(1)
}

/// Keep `page` (zero-based) inside the available pages
pub fn clamp_page(page: usize, total: usize, page_size: usize) -> usize {
    page.min(page_count(total, page_size) - 1)
}

/// Rows shown on `page` (zero-based)
pub fn page_slice(items: &[FoodItem], page: usize, page_size: usize) -> &[FoodItem] {
    let size = page_size.max(1);
    let page = clamp_page(page, items.len(), size);
    let start = page * size;
    let end = (start + size).min(items.len());
    &items[start.min(end)..end]
}

/// The rows the table renders: `filtered` sorted by `order`, then cut to `page`.
pub fn visible_rows(
    filtered: &[FoodItem],
    order: Option<SortOrder>,
    page: usize,
    page_size: usize,
) -> Vec<FoodItem> {
    let mut rows = filtered.to_vec();
    if let Some(order) = order {
        sort(&mut rows, order);
    }
    page_slice(&rows, page, page_size).to_vec()
}
