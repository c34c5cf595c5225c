//! This module serves as a container for the UI components that make up the
//! site chrome.
//!
//! Each sub-module within `components` defines a specific UI element or template,
//! such as the navigation bar, the search form, icons or error pages.

pub mod error_template;
pub mod icons;
pub mod navigation;
pub mod search_form;
