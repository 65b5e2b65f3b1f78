//! SQL builder helpers for listing queries.

use common::{
    catalog::{SortDirection, SortField},
    listing_const::{DEFAULT_PAGE_SIZE, FIRST_PAGE, MAX_PAGE_SIZE},
    listing_filter::ListingFilter,
};

pub const SQL_LISTING_TABLE: &'static str = "vehicle_posts";


pub fn build_sql_where_clause(filter: &ListingFilter) -> String {
    let mut terms = vec!["WHERE is_published = 1".to_string()];

    if let Some(brand_id) = &filter.brand_id {
        terms.push(format!("brand_id = {}", format_sql_query::QuotedData(brand_id)));
    }
    if let Some(model_id) = &filter.model_id {
        terms.push(format!("model_id = {}", format_sql_query::QuotedData(model_id)));
    }
    if let Some(version_id) = &filter.version_id {
        terms.push(format!("version_id = {}", format_sql_query::QuotedData(version_id)));
    }

    if let Some(vehicle_type) = filter.vehicle_type {
        terms.push(format!("vehicle_type = {}", format_sql_query::QuotedData(vehicle_type.as_str())));
    }
    if let Some(condition) = filter.condition {
        terms.push(format!("condition = {}", format_sql_query::QuotedData(condition.as_str())));
    }
    if let Some(currency) = filter.currency {
        terms.push(format!("currency = {}", format_sql_query::QuotedData(currency.as_str())));
    }

    // range bounds go out exactly as received; an inverted range simply
    // matches nothing
    if let Some(min_price) = filter.min_price {
        terms.push(format!("price >= {min_price}"));
    }
    if let Some(max_price) = filter.max_price {
        terms.push(format!("price <= {max_price}"));
    }
    if let Some(min_year) = filter.min_year {
        terms.push(format!("year >= {min_year}"));
    }
    if let Some(max_year) = filter.max_year {
        terms.push(format!("year <= {max_year}"));
    }
    if let Some(min_mileage) = filter.min_mileage {
        terms.push(format!("mileage >= {min_mileage}"));
    }
    if let Some(max_mileage) = filter.max_mileage {
        terms.push(format!("mileage <= {max_mileage}"));
    }

    if let Some(search) = &filter.search {
        // escape LIKE wildcards so user text matches literally
        let needle = search
            .trim()
            .replace('\\', "\\\\")
            .replace('%', "\\%")
            .replace('_', "\\_");
        if !needle.is_empty() {
            let pattern = format!("%{needle}%");
            terms.push(format!(
                "(title ILIKE {pattern} OR description ILIKE {pattern})",
                pattern = format_sql_query::QuotedData(&pattern)
            ));
        }
    }

    terms.join("\n        AND ")
}


pub fn build_sql_order_clause(filter: &ListingFilter) -> String {
    // sort columns come from a fixed map, never from client text
    let column = match filter.order_by {
        SortField::PublishedAt => "published_at",
        SortField::Price => "price",
        SortField::Year => "year",
        SortField::Mileage => "mileage",
    };
    let direction = match filter.order {
        SortDirection::Ascending => "ASC",
        SortDirection::Descending => "DESC",
    };
    // listing_id tiebreak keeps pagination stable across equal sort keys
    format!("ORDER BY {column} {direction}, listing_id ASC")
}


/// Clamped `(limit, offset)` for the request's page window. Out-of-range
/// client values fall back to defaults instead of erroring.
pub fn page_window(filter: &ListingFilter) -> (u64, u64) {
    let limit = if filter.limit == 0 {
        DEFAULT_PAGE_SIZE
    } else {
        filter.limit.min(MAX_PAGE_SIZE)
    };
    let page = filter.page.max(FIRST_PAGE);
    (limit, (page - 1) * limit)
}


#[cfg(test)]
mod tests {
    use super::*;
    use common::catalog::{Currency, SortDirection, SortField, VehicleType};
    use common::listing_filter::FilterUpdate;

    #[test]
    fn unfiltered_where_clause_only_gates_publication() {
        let clause = build_sql_where_clause(&ListingFilter::default());
        assert_eq!(clause, "WHERE is_published = 1");
    }

    #[test]
    fn identity_and_range_terms_are_combined_with_and() {
        let mut filter = ListingFilter::default();
        filter.apply(FilterUpdate::Brand(Some("ford".into())));
        filter.apply(FilterUpdate::PriceRange(Some(5_000_000), Some(10_000_000)));
        filter.apply(FilterUpdate::Currency(Some(Currency::Ars)));

        let clause = build_sql_where_clause(&filter);
        assert!(clause.contains("brand_id = 'ford'"));
        assert!(clause.contains("price >= 5000000"));
        assert!(clause.contains("price <= 10000000"));
        assert!(clause.contains("currency = 'AR$'"));
        assert_eq!(clause.matches("AND").count(), 4);
    }

    #[test]
    fn absent_fields_produce_no_terms() {
        let mut filter = ListingFilter::default();
        filter.apply(FilterUpdate::VehicleType(Some(VehicleType::Pickup)));
        let clause = build_sql_where_clause(&filter);
        assert!(!clause.contains("brand_id"));
        assert!(!clause.contains("price"));
        assert!(!clause.contains("ILIKE"));
        assert!(clause.contains("vehicle_type = 'pickup'"));
    }

    #[test]
    fn search_text_is_quoted_and_wildcards_are_escaped() {
        let mut filter = ListingFilter::default();
        filter.apply(FilterUpdate::Search(Some("100% o'riginal_part".into())));
        let clause = build_sql_where_clause(&filter);
        // the single quote is doubled by the quoting layer, the LIKE
        // wildcards by ours
        assert!(clause.contains("title ILIKE '%100\\% o''riginal\\_part%'"));
        assert!(clause.contains("description ILIKE"));
    }

    #[test]
    fn inverted_range_is_emitted_verbatim() {
        let mut filter = ListingFilter::default();
        filter.apply(FilterUpdate::YearRange(Some(2020), Some(2010)));
        let clause = build_sql_where_clause(&filter);
        assert!(clause.contains("year >= 2020"));
        assert!(clause.contains("year <= 2010"));
    }

    #[test]
    fn order_clause_uses_the_mapped_column_and_a_stable_tiebreak() {
        let mut filter = ListingFilter::default();
        assert_eq!(
            build_sql_order_clause(&filter),
            "ORDER BY published_at DESC, listing_id ASC"
        );
        filter.apply(FilterUpdate::Sort(SortField::Price, SortDirection::Ascending));
        assert_eq!(
            build_sql_order_clause(&filter),
            "ORDER BY price ASC, listing_id ASC"
        );
    }

    #[test]
    fn page_window_defaults_and_clamps() {
        let mut filter = ListingFilter::default();
        assert_eq!(page_window(&filter), (20, 0));

        filter.page = 3;
        filter.limit = 50;
        assert_eq!(page_window(&filter), (50, 100));

        filter.page = 0;
        assert_eq!(page_window(&filter), (50, 0));

        filter.limit = 0;
        assert_eq!(page_window(&filter), (20, 0));

        filter.limit = 100_000;
        filter.page = 2;
        assert_eq!(page_window(&filter), (100, 100));
    }
}
