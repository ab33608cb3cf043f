//! Page navigation window for paginated listings.

use crate::domain::entities::Pagination;
use serde::Serialize;

/// Pages shown on each side of the current page.
const WINDOW_RADIUS: u32 = 2;

/// One control of the page navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageLink {
    Previous { page: u32 },
    Page { page: u32, current: bool },
    Ellipsis,
    Next { page: u32 },
}

/// Builds the navigation controls for `pagination`.
///
/// Layout: `Previous?, 1, …?, current-2 ..= current+2, …?, last, Next?`.
/// The first and last page are always reachable; an ellipsis is only
/// inserted when it hides at least one page. Returns an empty list when
/// there is a single page.
pub fn page_window(pagination: &Pagination) -> Vec<PageLink> {
    let total = pagination.total_pages;
    if total <= 1 {
        return Vec::new();
    }

    let current = pagination.current_page.clamp(1, total);
    let start = current.saturating_sub(WINDOW_RADIUS).max(1);
    let end = current.saturating_add(WINDOW_RADIUS).min(total);

    let mut links = Vec::new();

    if pagination.has_previous && current > 1 {
        links.push(PageLink::Previous { page: current - 1 });
    }

    if start > 1 {
        links.push(PageLink::Page {
            page: 1,
            current: false,
        });
        if start > 2 {
            links.push(PageLink::Ellipsis);
        }
    }

    for page in start..=end {
        links.push(PageLink::Page {
            page,
            current: page == current,
        });
    }

    if end < total {
        if end < total - 1 {
            links.push(PageLink::Ellipsis);
        }
        links.push(PageLink::Page {
            page: total,
            current: false,
        });
    }

    if pagination.has_next && current < total {
        links.push(PageLink::Next { page: current + 1 });
    }

    links
}
