//! Transient UI state of the page, kept free of any rendering code so the
//! transitions can be exercised without a browser.

pub mod scroll;
pub mod palette;
pub mod submission;
pub mod theme;
pub mod toast;
