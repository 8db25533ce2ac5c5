//! This modules defines where a snapshot sits in the API's paginated list.

use serde::Serialize;

use crate::api::ResponseMeta;

/// The page details of a snapshot, derived from the API's `meta` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// The one-based page number of the snapshot.
    pub current_page: u64,
    /// The number of pages needed to list every transaction.
    pub total_pages: u64,
    /// The one-based position of the first transaction on the page, zero if there are none.
    pub showing_from: u64,
    /// The one-based position of the last transaction on the page.
    pub showing_to: u64,
    /// The number of transactions across all pages.
    pub total: u64,
    /// The offset of the next page, if there is one.
    pub next_offset: Option<u64>,
    /// The offset of the previous page, if there is one.
    pub previous_offset: Option<u64>,
}

impl PageInfo {
    /// Calculates the page details for `meta`.
    ///
    /// A zero `limit` is treated as a single page holding everything.
    pub fn from_meta(meta: &ResponseMeta) -> Self {
        let ResponseMeta {
            total,
            limit,
            offset,
        } = *meta;

        if limit == 0 {
            return Self {
                current_page: 1,
                total_pages: 1,
                showing_from: if total == 0 { 0 } else { 1 },
                showing_to: total,
                total,
                next_offset: None,
                previous_offset: None,
            };
        }

        let showing_to = offset.saturating_add(limit).min(total);

        Self {
            current_page: (offset / limit).saturating_add(1),
            total_pages: total.div_ceil(limit),
            showing_from: if offset < total { offset + 1 } else { 0 },
            showing_to,
            total,
            next_offset: offset.checked_add(limit).filter(|next| *next < total),
            previous_offset: (offset > 0).then(|| offset.saturating_sub(limit)),
        }
    }
}
