use crate::{Error, ErrorContext, Result};

pub const MAX_PER_PAGE: u32 = 1000;
pub const DEFAULT_PER_PAGE: u32 = 20;

/// Page selection for list endpoints. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl Pagination {
    pub fn new(page: u32, per_page: u32) -> Result<Self> {
        let p = Self { page, per_page };
        p.validate()?;
        Ok(p)
    }

    pub fn validate(&self) -> Result<()> {
        if self.page == 0 {
            return Err(Error::validation_with_context(
                "page numbers start at 1",
                ErrorContext::new().with_field_path("pagination.page"),
            ));
        }
        if self.per_page == 0 || self.per_page > MAX_PER_PAGE {
            return Err(Error::validation_with_context(
                "per_page out of range",
                ErrorContext::new()
                    .with_field_path("pagination.per_page")
                    .with_details(format!("expected 1..={}, got {}", MAX_PER_PAGE, self.per_page)),
            ));
        }
        Ok(())
    }

    pub fn next(&self) -> Self {
        Self {
            page: self.page.saturating_add(1),
            per_page: self.per_page,
        }
    }

    pub(crate) fn query(&self) -> Vec<(String, String)> {
        vec![
            ("page".to_string(), self.page.to_string()),
            ("per_page".to_string(), self.per_page.to_string()),
        ]
    }
}
