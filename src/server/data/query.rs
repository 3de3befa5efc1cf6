//! Query building shared by every list endpoint.
//!
//! A list request is a conjunction of equality filters plus an optional search term matched
//! case-insensitively as a literal substring against a set of columns, returned one page at a
//! time.

use sea_orm::{
    sea_query::{Expr, ExprTrait, Func, LikeExpr},
    ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, Select,
};

use crate::{
    model::api::{PageMeta, PageResponse},
    server::error::validation::ValidationError,
};

pub static DEFAULT_PAGE_LIMIT: u64 = 10;
pub static MAX_PAGE_LIMIT: u64 = 100;

/// Validated page number and size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    /// Page number, starting at 1
    pub page: u64,
    pub limit: u64,
}

impl PageRequest {
    /// Applies defaults (page 1, limit 10) and clamps the limit to 100.
    ///
    /// # Returns
    /// - `Err(ValidationError::Field)` - page or limit is below 1
    pub fn new(page: Option<u64>, limit: Option<u64>) -> Result<Self, ValidationError> {
        let page = page.unwrap_or(1);
        let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT);

        if page < 1 {
            return Err(ValidationError::field("page", "Page must be at least 1"));
        }
        if limit < 1 {
            return Err(ValidationError::field("limit", "Limit must be at least 1"));
        }

        Ok(Self {
            page,
            limit: Ord::min(limit, MAX_PAGE_LIMIT),
        })
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.limit
    }

    /// Number of pages needed for `total` records.
    pub fn pages(&self, total: u64) -> u64 {
        total.div_ceil(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

/// One page of records together with the size of the whole result set.
#[derive(Debug)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub request: PageRequest,
}

impl<T> Page<T> {
    pub fn meta(&self) -> PageMeta {
        PageMeta {
            page: self.request.page,
            limit: self.request.limit,
            pages: self.request.pages(self.total),
            total: self.total,
            count: self.items.len() as u64,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            request: self.request,
        }
    }

    /// Replaces the items, e.g. with their populated DTOs, keeping the counts.
    pub fn with_items<U>(self, items: Vec<U>) -> Page<U> {
        Page {
            items,
            total: self.total,
            request: self.request,
        }
    }

    pub fn into_response(self) -> PageResponse<T> {
        let meta = self.meta();

        PageResponse {
            success: true,
            data: self.items,
            meta,
        }
    }
}

/// Runs `select` for one page.
///
/// Issues a count over the full filter followed by the offset/limit query.
pub async fn fetch_page<'db, C, E>(
    db: &'db C,
    select: Select<E>,
    page: PageRequest,
) -> Result<Page<E::Model>, DbErr>
where
    C: ConnectionTrait,
    E: EntityTrait,
    E::Model: Sync + 'db,
{
    let paginator = select.paginate(db, page.limit);
    let total = paginator.num_items().await?;
    let items = paginator.fetch_page(page.page - 1).await?;

    Ok(Page {
        items,
        total,
        request: page,
    })
}

/// Disjunction of `LOWER(column) LIKE '%term%'` over `columns`.
///
/// The term is lower-cased and its LIKE wildcards are escaped so it always matches literally.
/// Returns `None` for a missing or blank term.
pub fn search_condition<C>(columns: &[C], term: Option<&str>) -> Option<Condition>
where
    C: ColumnTrait,
{
    let term = term.map(str::trim).filter(|t| !t.is_empty())?;
    let pattern = format!("%{}%", escape_like(&term.to_lowercase()));

    let condition = columns.iter().fold(Condition::any(), |condition, column| {
        condition.add(
            Expr::expr(Func::lower(Expr::col(*column)))
                .like(LikeExpr::new(pattern.clone()).escape('\\')),
        )
    });

    Some(condition)
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    mod page_request {
        use super::*;

        /// Expect page 1 and limit 10 when neither is given
        #[test]
        fn applies_defaults() {
            assert_eq!(
                PageRequest::new(None, None),
                Ok(PageRequest { page: 1, limit: 10 })
            );
        }

        /// Expect limits above 100 to be clamped
        #[test]
        fn clamps_limit() {
            assert_eq!(PageRequest::new(Some(2), Some(500)).unwrap().limit, 100);
        }

        /// Expect a validation error for page 0 and limit 0
        #[test]
        fn rejects_zero() {
            assert!(PageRequest::new(Some(0), None).is_err());
            assert!(PageRequest::new(None, Some(0)).is_err());
        }

        #[test]
        fn computes_offset_and_pages() {
            let request = PageRequest::new(Some(3), Some(4)).unwrap();

            assert_eq!(request.offset(), 8);
            assert_eq!(request.pages(9), 3);
            assert_eq!(request.pages(8), 2);
            assert_eq!(request.pages(0), 0);
        }
    }

    mod search_condition {
        use super::*;

        #[test]
        fn escapes_like_wildcards() {
            assert_eq!(escape_like(r"50%_a\b"), r"50\%\_a\\b");
        }

        /// Expect no condition for a blank term
        #[test]
        fn ignores_blank_term() {
            let columns = [entity::state::Column::Name];

            assert!(search_condition(&columns, None).is_none());
            assert!(search_condition(&columns, Some("   ")).is_none());
            assert!(search_condition(&columns, Some("north")).is_some());
        }
    }
}
