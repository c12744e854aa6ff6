// SPDX-FileCopyrightText: 2026 TalentFlow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! List pagination shared by the job and candidate listings.

/// One page of a filtered listing, plus the figures the envelope reports.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSlice<T> {
    pub items: Vec<T>,
    /// The page actually served, after clamping.
    pub page: u32,
    pub page_size: u32,
    /// Size of the filtered set before slicing.
    pub total: usize,
    pub total_pages: u32,
}

/// Slices a filtered set into the requested 1-indexed page.
///
/// `total_pages` is `ceil(total / page_size)`; the requested page is
/// clamped into `[1, total_pages]`, with an empty set still reporting
/// page 1. A zero `page_size` is treated as 1 so the arithmetic stays
/// defined; callers substitute their configured default before getting
/// here.
pub fn paginate<T>(items: Vec<T>, requested_page: u32, page_size: u32) -> PageSlice<T> {
    let page_size = page_size.max(1);
    let total = items.len();
    let total_pages = (total as u32).div_ceil(page_size);
    let page = requested_page.clamp(1, total_pages.max(1));
    let start = (page as usize - 1) * page_size as usize;
    let items: Vec<T> = items
        .into_iter()
        .skip(start)
        .take(page_size as usize)
        .collect();
    PageSlice {
        items,
        page,
        page_size,
        total,
        total_pages,
    }
}
