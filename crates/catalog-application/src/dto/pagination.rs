//! Paginated listing output

use serde::Serialize;

use catalog_domain::search::SearchResult;

/// One page of outputs plus pager numbers
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationOutput<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub current_page: usize,
    pub last_page: usize,
    pub per_page: usize,
}

impl<T> PaginationOutput<T> {
    /// Map a domain search result item by item
    pub fn from_search_result<E>(result: SearchResult<E>, map: impl FnMut(E) -> T) -> Self {
        let result = result.map(map);
        Self {
            items: result.items,
            total: result.total,
            current_page: result.current_page,
            last_page: result.last_page,
            per_page: result.per_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_search_result() {
        let result = SearchResult::new(vec![1, 2], 4, 1, 2);
        let output = PaginationOutput::from_search_result(result, |n| n.to_string());

        assert_eq!(
            output,
            PaginationOutput {
                items: vec!["1".to_string(), "2".to_string()],
                total: 4,
                current_page: 1,
                last_page: 2,
                per_page: 2,
            }
        );
    }
}
