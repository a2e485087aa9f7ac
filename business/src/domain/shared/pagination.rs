pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Zero-based offset pagination request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    /// Builds a request, clamping the size to `1..=MAX_PAGE_SIZE`.
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size: size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page) * i64::from(self.size)
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        let size = u64::from(request.size);
        let total_pages = total_elements.div_ceil(size);
        Self {
            items,
            page: request.page,
            size: request.size,
            total_elements,
            total_pages: u32::try_from(total_pages).unwrap_or(u32::MAX),
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_clamp_page_size() {
        assert_eq!(PageRequest::new(0, 0).size, 1);
        assert_eq!(PageRequest::new(0, 500).size, MAX_PAGE_SIZE);
    }

    #[test]
    fn should_compute_offset_from_page_and_size() {
        let request = PageRequest::new(3, 10);
        assert_eq!(request.offset(), 30);
        assert_eq!(request.limit(), 10);
    }

    #[test]
    fn should_round_total_pages_up() {
        let page = Page::new(vec![1, 2], &PageRequest::new(0, 10), 21);
        assert_eq!(page.total_pages, 3);

        let empty: Page<i32> = Page::new(vec![], &PageRequest::new(0, 10), 0);
        assert_eq!(empty.total_pages, 0);
    }
}
