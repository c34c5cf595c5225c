//! This module defines the `error_template` component, shown beneath the
//! navigation bar when a route cannot be served.
//!
//! It includes an `AppError` enum for application-level errors and a component
//! that lists them, setting the matching HTTP status code on the server.

use http::status::StatusCode;
use leptos::{
    html::{a, div, h1, main},
    prelude::*,
};
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Page Not Found")]
    NotFound,
}

impl AppError {
    /// Returns the HTTP status code associated with the error.
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// Renders an error page for the collected `AppError`s.
///
/// `outside_errors` carries errors raised while rendering on the server;
/// `errors` is the reactive error set of a client-side error boundary. One of
/// the two must be present.
pub fn component(
    outside_errors: Option<Errors>,
    errors: Option<RwSignal<Errors>>,
) -> impl IntoView {
    let errors = outside_errors.map_or_else(
        || errors.unwrap_or_else(|| panic!("No Errors found and we expected errors!")),
        |e| RwSignal::new(e),
    );
    let errors: Vec<AppError> = errors
        .get_untracked()
        .into_iter()
        .filter_map(|(_k, v)| v.downcast_ref::<AppError>().cloned())
        .collect();

    #[cfg(feature = "ssr")]
    {
        use leptos_axum::ResponseOptions;
        if let (Some(response), Some(first)) = (use_context::<ResponseOptions>(), errors.first()) {
            tracing::debug!(status = %first.status_code(), "rendering error page");
            response.set_status(first.status_code());
        }
    }

    main().class("page page-error").child((
        h1().class("page-heading").child(if errors.len() > 1 { "Errors" } else { "Error" }),
        For(
            ForProps::builder()
                .each(move || errors.clone().into_iter().enumerate())
                .key(|(index, _error)| *index)
                .children(|(_, error)| {
                    div()
                        .class("page-error-entry")
                        .child(format!("{}| {error}", error.status_code().as_u16()))
                })
                .build(),
        ),
        a().href("/").class("nav-item").child("Back to the homepage"),
    ))
}
