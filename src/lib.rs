// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Split large record sets into pages.
//!
//! Pure pagination arithmetic over a known total record count: derive the
//! last/previous/next page, the zero-based record index range of the
//! current page, and an optional windowed page-link range, then slice an
//! in-memory sequence accordingly.
//!
//! Parsing page parameters from untrusted input (query strings, form
//! fields) into integers is the caller's responsibility.

pub mod paginator;
pub use self::paginator::{Error, PageRequest, PageSize, Paginator, Result, bounded_slice};

/// Total number of records being paginated.
pub type RecordCount = u64;

/// Zero-based index into the paginated records.
pub type RecordIndex = u64;

/// 1-based page number.
pub type PageNumber = u64;

/// Number of page links to show on each side of the current page.
pub type PagesWidth = u64;

/// Page numbering starts at 1.
pub const FIRST_PAGE: PageNumber = 1;

/// Record indexing starts at 0.
pub const FIRST_INDEX: RecordIndex = 0;
