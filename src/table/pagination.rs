use std::ops::Range;

/// Rows per page used when the host does not configure one.
pub const DEFAULT_PAGE_SIZE: usize = 8;

/// Entry in the page selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
	Page(usize),
	Ellipsis,
}

/// Page bookkeeping for a table. Pages are 1-indexed and a page size of zero
/// disables paging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
	page: usize,
	page_size: usize,
	total_rows: usize,
}

impl Pagination {
	#[must_use]
	pub fn new(page_size: usize) -> Self {
		Self {
			page: 1,
			page_size,
			total_rows: 0,
		}
	}

	#[must_use]
	pub fn page(&self) -> usize {
		self.page
	}

	#[must_use]
	pub fn page_size(&self) -> usize {
		self.page_size
	}

	#[must_use]
	pub fn is_enabled(&self) -> bool {
		self.page_size > 0
	}

	/// `ceil(total_rows / page_size)`, or 1 when paging is disabled.
	#[must_use]
	pub fn total_pages(&self) -> usize {
		if self.is_enabled() {
			self.total_rows.div_ceil(self.page_size)
		} else {
			1
		}
	}

	fn last_page(&self) -> usize {
		self.total_pages().max(1)
	}

	/// Record the current dataset size and pull the page back into range.
	pub fn set_total_rows(&mut self, total_rows: usize) {
		self.total_rows = total_rows;
		self.clamp();
	}

	pub fn set_page_size(&mut self, page_size: usize) {
		self.page_size = page_size;
		self.clamp();
	}

	pub fn clamp(&mut self) {
		self.page = self.page.clamp(1, self.last_page());
	}

	/// Jump to `page`, clamped into range. Returns whether the page changed.
	pub fn go_to(&mut self, page: usize) -> bool {
		let target = page.clamp(1, self.last_page());
		let changed = target != self.page;
		self.page = target;
		changed
	}

	#[must_use]
	pub fn has_previous(&self) -> bool {
		self.page > 1
	}

	#[must_use]
	pub fn has_next(&self) -> bool {
		self.page < self.last_page()
	}

	pub fn next(&mut self) -> bool {
		self.has_next() && self.go_to(self.page + 1)
	}

	pub fn previous(&mut self) -> bool {
		self.has_previous() && self.go_to(self.page - 1)
	}

	/// Indices into the full dataset shown on the current page.
	#[must_use]
	pub fn page_range(&self) -> Range<usize> {
		if !self.is_enabled() {
			return 0..self.total_rows;
		}
		let start = (self.page - 1)
			.saturating_mul(self.page_size)
			.min(self.total_rows);
		let end = start.saturating_add(self.page_size).min(self.total_rows);
		start..end
	}

	/// Whether the page selector should be drawn at all.
	#[must_use]
	pub fn shows_controls(&self) -> bool {
		self.is_enabled() && self.total_pages() > 1
	}

	/// Page selector entries: first page, last page and the neighbours of the
	/// current page. A single hidden page keeps its number; longer hidden runs
	/// collapse into one ellipsis.
	#[must_use]
	pub fn items(&self) -> Vec<PageItem> {
		let total = self.total_pages();
		let anchored = |page: usize| page == 1 || page == total || self.page.abs_diff(page) <= 1;
		let mut items = Vec::new();
		let mut skipped = false;
		for page in 1..=total {
			let visible = anchored(page) || (anchored(page - 1) && anchored(page + 1));
			if visible {
				items.push(PageItem::Page(page));
				skipped = false;
			} else if !skipped {
				items.push(PageItem::Ellipsis);
				skipped = true;
			}
		}
		items
	}
}

impl Default for Pagination {
	fn default() -> Self {
		Self::new(DEFAULT_PAGE_SIZE)
	}
}
