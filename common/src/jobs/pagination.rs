/// Rows shown while the list is collapsed.
pub const PAGE_SIZE: usize = 5;

/// Toggle shown under the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerControl {
    ViewMore,
    ViewLess,
}

impl PagerControl {
    pub fn label(&self) -> &'static str {
        match self {
            PagerControl::ViewMore => "View More",
            PagerControl::ViewLess => "View Less",
        }
    }
}

/// Client-side slice of an already ordered list. There is no server paging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    show_all: bool,
}

impl Pagination {
    pub fn show_all(&self) -> bool {
        self.show_all
    }

    pub fn toggle(&mut self) {
        self.show_all = !self.show_all;
    }

    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        if self.show_all {
            items
        } else {
            &items[..items.len().min(PAGE_SIZE)]
        }
    }

    /// "View More" only when rows are hidden; "View Less" whenever expanded.
    pub fn control(&self, total: usize) -> Option<PagerControl> {
        if self.show_all {
            Some(PagerControl::ViewLess)
        } else if total > PAGE_SIZE {
            Some(PagerControl::ViewMore)
        } else {
            None
        }
    }
}
