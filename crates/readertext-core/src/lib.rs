//! readertext-core: normalize and reflow layout-extracted page text.
//!
//! Takes the noisy per-page line stream a layout extractor produces
//! (running headers and footers, hard line-wraps, hyphenation breaks,
//! indented code, lists, headings) and turns it into clean plain text for
//! linear reading.
//!
//! # Pipeline
//!
//! raw lines → [`normalize_unicode`] → [`strip_headers_footers`] →
//! [`collapse_blank_runs`] (loose) → [`reflow_lines`] → [`format_pages`].
//! [`process_page`] runs the per-page stages; [`process_document`] maps
//! them over a [`PageSource`] page range.
//!
//! Every stage is a pure function from an input sequence to a new output
//! sequence: no shared state and no failure modes. Heuristics degrade into
//! plain paragraphs, they never error.

pub mod blanks;
pub mod classify;
pub mod dehyphenate;
pub mod document;
pub mod headers;
pub mod normalize;
pub mod page;
pub mod reflow;
pub mod source;

pub use blanks::{collapse_blank_runs, is_blank};
pub use classify::{is_code_like, is_heading_like, is_list_like, looks_like_header_or_footer};
pub use dehyphenate::dehyphenate_join;
pub use document::{AssembleOptions, format_pages, page_marker, process_document};
pub use headers::strip_headers_footers;
pub use normalize::{UnicodeForm, normalize_unicode};
pub use page::{PageOptions, PageText, process_page};
pub use source::PageSource;
