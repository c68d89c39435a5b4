use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct PaginationParams {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    10
}

impl PaginationParams {
    pub fn validate(&self) -> Result<(), String> {
        if self.page < 1 {
            return Err("page must be >= 1".to_string());
        }
        if self.limit < 1 || self.limit > 100 {
            return Err("limit must be between 1 and 100".to_string());
        }
        Ok(())
    }

    pub fn offset(&self) -> i64 {
        i64::from((self.page - 1) * self.limit)
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginationMeta {
    pub total: i64,
    pub page: u32,
    pub limit: u32,
    pub pages: u32,
}

impl PaginationMeta {
    pub fn new(page: u32, limit: u32, total: i64) -> Self {
        let pages = ((total as f64) / (limit as f64)).ceil() as u32;
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

    #[test]
    fn test_pages_round_up() {
        let meta = PaginationMeta::new(1, 10, 11);
        assert_eq!(meta.pages, 2);
    }

    #[test]
    fn test_pages_exact_fit() {
        let meta = PaginationMeta::new(2, 10, 20);
        assert_eq!(meta.pages, 2);
    }

    #[test]
    fn test_pages_empty() {
        let meta = PaginationMeta::new(1, 10, 0);
        assert_eq!(meta.pages, 0);
    }

    #[test]
    fn test_offset_skips_prior_pages() {
        let params = PaginationParams { page: 3, limit: 25 };
        assert_eq!(params.offset(), 50);
    }

    #[test]
    fn test_limit_out_of_range_rejected() {
        let params = PaginationParams {
            page: 1,
            limit: 101,
        };
        assert!(params.validate().is_err());
    }
}
