//! 페이지네이션 DTO

use serde::{Deserialize, Serialize};

/// 페이지네이션 쿼리 파라미터
///
/// `?page=2&limit=20` 형태로 전달되며, 생략 시 1페이지/10건이 기본값입니다.
#[derive(Debug, Clone, Deserialize)]
pub struct PageQuery {
    /// 페이지 번호 (1부터 시작)
    pub page: Option<i64>,
    /// 페이지당 항목 수
    pub limit: Option<i64>,
}

impl PageQuery {
    /// 정규화된 페이지 번호 (최소 1)
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    /// 정규화된 페이지 크기 (1-100 범위)
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(10).clamp(1, 100)
    }

    /// 건너뛸 도큐먼트 수
    pub fn skip(&self) -> u64 {
        ((self.page() - 1) * self.limit()) as u64
    }
}

/// 페이지네이션된 목록 응답
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T: Serialize> {
    /// 현재 페이지의 항목들
    pub docs: Vec<T>,
    /// 전체 항목 수
    pub total_docs: i64,
    /// 현재 페이지 번호
    pub page: i64,
    /// 페이지당 항목 수
    pub limit: i64,
    /// 전체 페이지 수
    pub total_pages: i64,
}

impl<T: Serialize> Paginated<T> {
    /// 목록과 전체 건수로 페이지 응답을 구성합니다.
    pub fn new(docs: Vec<T>, total_docs: i64, page: i64, limit: i64) -> Self {
        let total_pages = if total_docs == 0 {
            0
        } else {
            (total_docs + limit - 1) / limit
        };

        Self {
            docs,
            total_docs,
            page,
            limit,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_query_defaults() {
        let query = PageQuery {
            page: None,
            limit: None,
        };

        assert_eq!(query.page(), 1);
        assert_eq!(query.limit(), 10);
        assert_eq!(query.skip(), 0);
    }

    #[test]
    fn test_page_query_clamps_out_of_range_values() {
        let query = PageQuery {
            page: Some(0),
            limit: Some(1000),
        };

        assert_eq!(query.page(), 1);
        assert_eq!(query.limit(), 100);
    }

    #[test]
    fn test_paginated_total_pages_rounds_up() {
        let paginated = Paginated::new(vec![1, 2, 3], 25, 1, 10);
        assert_eq!(paginated.total_pages, 3);

        let empty: Paginated<i32> = Paginated::new(vec![], 0, 1, 10);
        assert_eq!(empty.total_pages, 0);
    }

    #[test]
    fn test_paginated_serializes_camel_case() {
        let paginated = Paginated::new(vec!["a"], 1, 1, 10);
        let json = serde_json::to_value(&paginated).unwrap();

        assert_eq!(json["totalDocs"], 1);
        assert_eq!(json["totalPages"], 1);
    }
}
