//! Public course catalogue: filtered, sorted and paged.

use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Select,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use models::course;
use crate::errors::ServiceError;
use crate::pagination::{page_count, PageResult, Pagination};

/// Listing criteria. Each field takes effect only when present and non-empty;
/// the sort fields act as flags, their content is ignored.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CourseFrontQuery {
    #[serde(default)]
    pub subject_parent_id: Option<String>,
    #[serde(default)]
    pub subject_id: Option<String>,
    #[serde(default)]
    pub buy_count_sort: Option<String>,
    #[serde(default)]
    pub gmt_create_sort: Option<String>,
    #[serde(default)]
    pub price_sort: Option<String>,
}

/// Only `None` and `""` are skipped; whitespace counts as a value.
fn non_empty(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.is_empty())
}

fn parse_id(field: &str, raw: &str) -> Result<Uuid, ServiceError> {
    Uuid::parse_str(raw).map_err(|e| ServiceError::Validation(format!("{field}: {e}")))
}

/// Build the listing query. Filters first, then orderings in fixed precedence:
/// sales, creation date, price. All orderings are descending and combine.
pub fn build_front_query(query: &CourseFrontQuery) -> Result<Select<course::Entity>, ServiceError> {
    let mut select = course::Entity::find();

    if let Some(raw) = non_empty(&query.subject_parent_id) {
        select = select.filter(course::Column::SubjectParentId.eq(parse_id("subject_parent_id", raw)?));
    }
    if let Some(raw) = non_empty(&query.subject_id) {
        select = select.filter(course::Column::SubjectId.eq(parse_id("subject_id", raw)?));
    }
    if non_empty(&query.buy_count_sort).is_some() {
        select = select.order_by_desc(course::Column::BuyCount);
    }
    if non_empty(&query.gmt_create_sort).is_some() {
        select = select.order_by_desc(course::Column::CreatedAt);
    }
    if non_empty(&query.price_sort).is_some() {
        select = select.order_by_desc(course::Column::Price);
    }
    Ok(select)
}

/// One page of courses matching `query`.
pub async fn list_front_courses(
    db: &DatabaseConnection,
    page: Pagination,
    query: &CourseFrontQuery,
) -> Result<PageResult<course::Model>, ServiceError> {
    let (page_idx, per_page) = page.normalize();
    let select = build_front_query(query)?;

    let total = select.clone().count(db).await?;
    // rejects a zero page size before the paginator sees it
    page_count(total, per_page)?;
    let records = select.paginate(db, per_page).fetch_page(page_idx).await?;
    debug!(total, page = page_idx + 1, per_page, returned = records.len(), "front_courses_listed");

    PageResult::new(records, page_idx + 1, per_page, total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbBackend, QueryTrait};
    use std::collections::BTreeMap;
    use crate::test_support::{course_row, get_db, mock};

    fn sql(query: &CourseFrontQuery) -> String {
        build_front_query(query).unwrap().build(DbBackend::Postgres).to_string()
    }

    fn flag() -> Option<String> {
        Some("1".into())
    }

    #[test]
    fn no_criteria_is_an_unfiltered_unordered_select() {
        let s = sql(&CourseFrontQuery::default());
        assert!(!s.contains("WHERE"), "{s}");
        assert!(!s.contains("ORDER BY"), "{s}");
    }

    #[test]
    fn empty_strings_are_ignored() {
        let q = CourseFrontQuery {
            subject_parent_id: Some(String::new()),
            subject_id: Some(String::new()),
            buy_count_sort: Some(String::new()),
            gmt_create_sort: None,
            price_sort: Some(String::new()),
        };
        let s = sql(&q);
        assert!(!s.contains("WHERE"), "{s}");
        assert!(!s.contains("ORDER BY"), "{s}");
    }

    #[test]
    fn whitespace_sort_flag_still_orders() {
        let q = CourseFrontQuery { price_sort: Some(" ".into()), ..Default::default() };
        let s = sql(&q);
        assert!(s.ends_with("ORDER BY \"edu_course\".\"price\" DESC"), "{s}");
    }

    #[test]
    fn whitespace_filter_is_applied_and_rejected_as_id() {
        let q = CourseFrontQuery { subject_id: Some(" ".into()), ..Default::default() };
        assert!(matches!(build_front_query(&q), Err(ServiceError::Validation(_))));
    }

    #[test]
    fn parent_filter_with_price_sort() {
        let parent = Uuid::new_v4();
        let q = CourseFrontQuery {
            subject_parent_id: Some(parent.to_string()),
            price_sort: flag(),
            ..Default::default()
        };
        let s = sql(&q);
        assert!(s.contains(&format!("\"subject_parent_id\" = '{parent}'")), "{s}");
        assert!(s.ends_with("ORDER BY \"edu_course\".\"price\" DESC"), "{s}");
    }

    #[test]
    fn all_sort_flags_combine_in_fixed_precedence() {
        let q = CourseFrontQuery {
            buy_count_sort: flag(),
            gmt_create_sort: flag(),
            price_sort: flag(),
            ..Default::default()
        };
        let s = sql(&q);
        let order = s.split("ORDER BY").nth(1).unwrap();
        let buy = order.find("buy_count").unwrap();
        let created = order.find("created_at").unwrap();
        let price = order.find("price").unwrap();
        assert!(buy < created && created < price, "{s}");
    }

    #[test]
    fn malformed_subject_id_is_validation_error() {
        let q = CourseFrontQuery { subject_id: Some("not-a-uuid".into()), ..Default::default() };
        assert!(matches!(build_front_query(&q), Err(ServiceError::Validation(_))));
    }

    fn count_row(n: i64) -> BTreeMap<&'static str, sea_orm::Value> {
        BTreeMap::from([("num_items", sea_orm::Value::BigInt(Some(n)))])
    }

    #[tokio::test]
    async fn page_size_zero_is_arithmetic_error() {
        let db = mock().append_query_results([[count_row(3)]]).into_connection();
        let err = list_front_courses(&db, Pagination { page: 1, per_page: 0 }, &CourseFrontQuery::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Arithmetic(_)));
    }

    #[tokio::test]
    async fn page_metadata_follows_total() -> Result<(), anyhow::Error> {
        let db = mock()
            .append_query_results([[count_row(5)]])
            .append_query_results([vec![course_row(Uuid::new_v4()), course_row(Uuid::new_v4())]])
            .into_connection();
        let page = list_front_courses(&db, Pagination { page: 2, per_page: 2 }, &CourseFrontQuery::default()).await?;
        assert_eq!(page.records.len(), 2);
        assert_eq!(page.current, 2);
        assert_eq!(page.pages, 3);
        assert_eq!(page.total, 5);
        assert!(page.has_next);
        assert!(page.has_previous);
        Ok(())
    }

    #[tokio::test]
    async fn front_listing_live() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await else { return Ok(()) };
        let page = list_front_courses(&db, Pagination { page: 1, per_page: 8 }, &CourseFrontQuery::default()).await?;
        assert!(page.records.len() as u64 <= page.size);
        assert!(page.current >= 1);
        Ok(())
    }
}
