use serde::Serialize;

/// Returns the page following `page` when results remain beyond it.
pub fn next_page(page: u32, per_page: u32, total_count: u64) -> Option<u32> {
    if u64::from(page) * u64::from(per_page) < total_count {
        page.checked_add(1)
    } else {
        None
    }
}

/// One page of results for infinite scrolling.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub next_page: Option<u32>,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: u32, per_page: u32, total_count: u64) -> Self {
        let current_page = if current_page == 0 { 1 } else { current_page };

        Self {
            items,
            page: current_page,
            next_page: next_page(current_page, per_page, total_count),
        }
    }

    /// Last item on the page, used as the scroll anchor.
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            next_page: None,
        }
    }
}
