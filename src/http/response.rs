//! Response construction.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
};
use maud::Markup;

/// Name of the page that produced a response, read back by the request
/// metrics middleware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageName(pub &'static str);

/// Rendered HTML with a status code.
pub fn page(status: StatusCode, name: &'static str, markup: Markup) -> Response {
    let mut response = (status, Html(markup.into_string())).into_response();
    response.extensions_mut().insert(PageName(name));
    response
}

/// `303 See Other` to `location`.
pub fn see_other(location: &str) -> Response {
    Redirect::to(location).into_response()
}

/// A plain-text or XML document with an explicit content type.
pub fn document(content_type: &'static str, body: String) -> Response {
    (
        [(header::CONTENT_TYPE, HeaderValue::from_static(content_type))],
        body,
    )
        .into_response()
}
