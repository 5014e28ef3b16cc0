// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use semval::prelude::*;
use thiserror::Error;

use crate::{FIRST_INDEX, FIRST_PAGE, PageNumber, PagesWidth, RecordCount, RecordIndex};

///////////////////////////////////////////////////////////////////////
// PageSize
///////////////////////////////////////////////////////////////////////

/// Maximum number of records shown per page.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, derive_more::Display)]
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct PageSize(u64);

impl PageSize {
    pub const MIN: Self = Self(1);
    pub const DEFAULT: Self = Self(10);
    pub const MAX: Self = Self(u64::MAX);

    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        let Self(value) = self;
        value
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        <Self as IsValid>::is_valid(self)
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Copy, Clone, Debug)]
pub enum PageSizeInvalidity {
    Min(PageSize),
}

impl Validate for PageSize {
    type Invalidity = PageSizeInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        ValidationContext::new()
            .invalidate_if(*self < Self::MIN, Self::Invalidity::Min(Self::MIN))
            .into()
    }
}

///////////////////////////////////////////////////////////////////////
// PageRequest
///////////////////////////////////////////////////////////////////////

/// Caller-supplied pagination parameters.
///
/// The defaults request the first page with [`PageSize::DEFAULT`] records
/// and an unbounded page-link window.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageRequest {
    /// Requested 1-based page number.
    ///
    /// Out-of-range values are tolerated and snapped into
    /// `[FIRST_PAGE, last_page]` during computation.
    pub page: PageNumber,

    /// Requested page size.
    ///
    /// Sizes below [`PageSize::MIN`] are coerced to [`PageSize::MIN`]
    /// during computation.
    pub per_page: PageSize,

    /// Number of page links on each side of the current page.
    ///
    /// `None` leaves the page-link range unbounded, i.e. spanning all
    /// pages from the first to the last.
    pub pages_width: Option<PagesWidth>,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: FIRST_PAGE,
            per_page: PageSize::DEFAULT,
            pages_width: None,
        }
    }
}

#[derive(Copy, Clone, Debug)]
pub enum PageRequestInvalidity {
    Page,
    PerPage(PageSizeInvalidity),
}

impl Validate for PageRequest {
    type Invalidity = PageRequestInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        ValidationContext::new()
            .invalidate_if(self.page < FIRST_PAGE, Self::Invalidity::Page)
            .validate_with(&self.per_page, Self::Invalidity::PerPage)
            .into()
    }
}

///////////////////////////////////////////////////////////////////////
// Paginator
///////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum Error {
    #[error("negative record count: {0}")]
    NegativeRecordCount(i64),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Pagination metadata computed from a total record count and a
/// [`PageRequest`].
///
/// Immutable after construction. Recomputing with different parameters
/// yields a new value, so a `Paginator` handed out to other readers is
/// never mutated behind their backs.
///
/// The requested page is snapped into `[FIRST_PAGE, last_page]` for all
/// derived indices. Only [`previous_page`] and [`next_page`] reflect the
/// raw request: they are advisory neighbors that may lie outside the
/// valid page range and must not be used as indices without their own
/// bounds check.
///
/// [`previous_page`]: Self::previous_page
/// [`next_page`]: Self::next_page
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Paginator {
    total: RecordCount,
    per_page: PageSize,
    current_page: PageNumber,
    last_page: PageNumber,
    previous_page: PageNumber,
    next_page: PageNumber,
    starting_page: PageNumber,
    ending_page: PageNumber,
    start_index: RecordIndex,
    end_index: RecordIndex,
    pages_width: Option<PagesWidth>,
}

impl Paginator {
    /// Compute the pagination metadata for `total` records.
    ///
    /// Pure and total: out-of-range parameters are coerced, never
    /// rejected.
    #[must_use]
    pub fn new(total: RecordCount, request: PageRequest) -> Self {
        let PageRequest {
            page,
            per_page,
            pages_width,
        } = request;
        let per_page = per_page.max(PageSize::MIN);
        let last_page = if total == 0 {
            FIRST_PAGE
        } else {
            total.div_ceil(per_page.value())
        };
        // Advisory neighbors of the raw requested page, unclamped apart
        // from the saturation at 0.
        let previous_page = page.saturating_sub(1);
        let next_page = page.saturating_add(1);
        let current_page = page.clamp(FIRST_PAGE, last_page);
        // Re-clamped independently of the line above: this value drives
        // slicing.
        let start_page = current_page.clamp(FIRST_PAGE, last_page);
        let start_index = (start_page - 1).saturating_mul(per_page.value());
        let end_index = if total == 0 {
            FIRST_INDEX
        } else {
            start_index
                .saturating_add(per_page.value() - 1)
                .min(total - 1)
        };
        let (starting_page, ending_page) = match pages_width {
            Some(width) => (
                current_page.saturating_sub(width).max(FIRST_PAGE),
                current_page.saturating_add(width).min(last_page),
            ),
            None => (FIRST_PAGE, last_page),
        };
        Self {
            total,
            per_page,
            current_page,
            last_page,
            previous_page,
            next_page,
            starting_page,
            ending_page,
            start_index,
            end_index,
            pages_width,
        }
    }

    /// Fallible variant of [`Paginator::new`] for record counts from
    /// signed sources, e.g. an SQL `COUNT(*)`.
    pub fn try_new(total: i64, request: PageRequest) -> Result<Self> {
        let total =
            RecordCount::try_from(total).map_err(|_| Error::NegativeRecordCount(total))?;
        Ok(Self::new(total, request))
    }

    #[must_use]
    pub const fn total(&self) -> RecordCount {
        self.total
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// The page size after coercion, i.e. at least [`PageSize::MIN`].
    #[must_use]
    pub const fn per_page(&self) -> PageSize {
        self.per_page
    }

    /// The requested page, snapped into `[first_page, last_page]`.
    #[must_use]
    pub const fn current_page(&self) -> PageNumber {
        self.current_page
    }

    #[must_use]
    pub const fn first_page(&self) -> PageNumber {
        FIRST_PAGE
    }

    /// Highest valid page number, at least [`FIRST_PAGE`] even when
    /// there are no records.
    #[must_use]
    pub const fn last_page(&self) -> PageNumber {
        self.last_page
    }

    /// Page before the raw requested page, saturating at 0.
    ///
    /// Advisory only, may lie below [`first_page`](Self::first_page).
    #[must_use]
    pub const fn previous_page(&self) -> PageNumber {
        self.previous_page
    }

    /// Page after the raw requested page.
    ///
    /// Advisory only, may lie above [`last_page`](Self::last_page).
    #[must_use]
    pub const fn next_page(&self) -> PageNumber {
        self.next_page
    }

    #[must_use]
    pub const fn first_index(&self) -> RecordIndex {
        FIRST_INDEX
    }

    /// Index of the last record, `None` when there are no records.
    #[must_use]
    pub const fn last_index(&self) -> Option<RecordIndex> {
        self.total.checked_sub(1)
    }

    /// Index of the first record on the current page.
    #[must_use]
    pub const fn start_index(&self) -> RecordIndex {
        self.start_index
    }

    /// Index of the last record on the current page, clamped to the last
    /// record overall.
    ///
    /// 0 when there are no records, which is indistinguishable from a
    /// single-record page by this field alone. Check
    /// [`is_empty`](Self::is_empty) first.
    #[must_use]
    pub const fn end_index(&self) -> RecordIndex {
        self.end_index
    }

    /// First page of the page-link window.
    #[must_use]
    pub const fn starting_page(&self) -> PageNumber {
        self.starting_page
    }

    /// Last page of the page-link window.
    #[must_use]
    pub const fn ending_page(&self) -> PageNumber {
        self.ending_page
    }

    #[must_use]
    pub const fn pages_width(&self) -> Option<PagesWidth> {
        self.pages_width
    }

    /// The page-link window as an inclusive page range.
    #[must_use]
    pub fn page_window(&self) -> std::ops::RangeInclusive<PageNumber> {
        self.starting_page..=self.ending_page
    }

    /// On-demand page-link window start for callers that did not supply
    /// `pages_width` up front.
    #[must_use]
    pub const fn windowed_start_page(&self, width: PagesWidth) -> PageNumber {
        let page = self.current_page.saturating_sub(width);
        if page < FIRST_PAGE { FIRST_PAGE } else { page }
    }

    /// On-demand page-link window end for callers that did not supply
    /// `pages_width` up front.
    #[must_use]
    pub const fn windowed_end_page(&self, width: PagesWidth) -> PageNumber {
        let page = self.current_page.saturating_add(width);
        if page > self.last_page {
            self.last_page
        } else {
            page
        }
    }

    /// The records of the current page as a sub-slice of `rows`.
    ///
    /// Shorter than [`per_page`](Self::per_page) when `rows` ends early,
    /// empty when it ends at or before
    /// [`start_index`](Self::start_index).
    #[must_use]
    pub fn slice_rows<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        bounded_slice(rows, self.start_index, self.per_page.value())
    }
}

///////////////////////////////////////////////////////////////////////
// Slicing
///////////////////////////////////////////////////////////////////////

/// Sub-slice of up to `count` elements of `rows` starting at `start`.
///
/// Bounds are truncated to the length of `rows`, never out of bounds.
#[must_use]
pub fn bounded_slice<T>(rows: &[T], start: RecordIndex, count: u64) -> &[T] {
    let len = rows.len();
    let start = usize::try_from(start).map_or(len, |start| start.min(len));
    let count = usize::try_from(count).unwrap_or(usize::MAX);
    let end = start.saturating_add(count).min(len);
    &rows[start..end]
}
