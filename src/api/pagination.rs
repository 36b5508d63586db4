use serde::{Deserialize, Deserializer, Serialize};

/// Hard ceiling on page size, whatever the caller asks for.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Query parameters shared by every list endpoint. Values are parsed
/// leniently: absent, non-numeric, or non-positive input falls back to the
/// defaults instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub limit: Option<i64>,
}

impl ListQuery {
    pub fn page(&self) -> i64 {
        self.page.filter(|p| *p >= 1).unwrap_or(1)
    }

    pub fn limit(&self, default: i64) -> i64 {
        self.limit
            .filter(|l| *l >= 1)
            .unwrap_or(default)
            .min(MAX_PAGE_SIZE)
    }

    pub fn offset(&self, default_limit: i64) -> i64 {
        (self.page() - 1) * self.limit(default_limit)
    }
}

/// Query strings arrive as text; anything that does not parse as an
/// integer is treated as absent.
pub(crate) fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| value.parse().ok()))
}

/// Page metadata returned beside every list.
#[derive(Debug, Clone, Serialize)]
pub struct Pagination {
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub pages: i64,
}

impl Pagination {
    pub fn new(total: i64, page: i64, limit: i64) -> Self {
        let pages = if limit > 0 {
            (total + limit - 1) / limit
        } else {
            0
        };

        Self {
            total,
            page,
            limit,
            pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_apply_when_absent() {
        let query: ListQuery = serde_json::from_value(json!({})).unwrap();

        assert_eq!(query.page(), 1);
        assert_eq!(query.limit(10), 10);
        assert_eq!(query.offset(10), 0);
    }

    #[test]
    fn non_numeric_input_falls_back_to_defaults() {
        let query: ListQuery =
            serde_json::from_value(json!({"page": "abc", "limit": "lots"})).unwrap();

        assert_eq!(query.page(), 1);
        assert_eq!(query.limit(10), 10);
    }

    #[test]
    fn explicit_values_are_honored() {
        let query: ListQuery = serde_json::from_value(json!({"page": "2", "limit": "5"})).unwrap();

        assert_eq!(query.page(), 2);
        assert_eq!(query.limit(10), 5);
        assert_eq!(query.offset(10), 5);
    }

    #[test]
    fn non_positive_values_fall_back_and_limit_is_capped() {
        let query: ListQuery = serde_json::from_value(json!({"page": "0", "limit": "-3"})).unwrap();
        assert_eq!(query.page(), 1);
        assert_eq!(query.limit(10), 10);

        let query: ListQuery = serde_json::from_value(json!({"limit": "5000"})).unwrap();
        assert_eq!(query.limit(10), MAX_PAGE_SIZE);
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(Pagination::new(12, 2, 5).pages, 3);
        assert_eq!(Pagination::new(10, 1, 5).pages, 2);
        assert_eq!(Pagination::new(0, 1, 10).pages, 0);
    }
}
