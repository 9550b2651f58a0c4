use crate::domain::errors::FieldViolation;

/// A validated zero-based page index and a positive page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    size: usize,
}

impl PageRequest {
    /// Rejects a negative page index and a page size below one.
    pub fn new(page: i64, size: i64) -> Result<Self, Vec<FieldViolation>> {
        let mut violations = Vec::new();
        if page < 0 {
            violations.push(FieldViolation::new("page", "Page index must not be negative"));
        }
        if size <= 0 {
            violations.push(FieldViolation::new("size", "Page size must be greater than zero"));
        }
        if !violations.is_empty() {
            return Err(violations);
        }

        Ok(Self {
            page: usize::try_from(page).unwrap_or(usize::MAX),
            size: usize::try_from(size).unwrap_or(usize::MAX),
        })
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

/// One slice of an ordered sequence plus the numbers needed to page through it.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub size: usize,
    /// Records considered before slicing.
    pub total_count: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_count: self.total_count,
            total_pages: self.total_pages,
        }
    }
}

/// Slices `[page * size, min(page * size + size, total))`. A start past the
/// end yields an empty page that still carries the real total.
pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> Page<T> {
    let total_count = items.len();
    let from = request.page.saturating_mul(request.size);
    let to = from.saturating_add(request.size).min(total_count);
    let total_pages = total_count.div_ceil(request.size);

    let slice = if from >= total_count {
        Vec::new()
    } else {
        items.into_iter().skip(from).take(to - from).collect()
    };

    Page {
        items: slice,
        page: request.page,
        size: request.size,
        total_count,
        total_pages,
    }
}
