use crate::error::ApiError;
use crate::routes::books::FilterParams;
use crate::routes::AppState;
use crate::services::books_api::BookFilters;
use crate::templates::SEARCH_PAGE;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use minijinja::context;
use tracing::{error, warn};

/// HTML search form. The catalog is only queried once the form has been
/// submitted, i.e. when at least one field is present in the query string.
pub async fn search_page(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Response {
    let submitted =
        params.author.is_some() || params.min_year.is_some() || params.max_year.is_some();

    let author = params.author.clone().unwrap_or_default();
    let min_year = params.min_year.clone().unwrap_or_default();
    let max_year = params.max_year.clone().unwrap_or_default();

    let (books, error_message) = if submitted {
        match state.books_api.fetch_books(&BookFilters::from(params)).await {
            Ok(books) => (books, None),
            Err(e) => {
                warn!("Search page query failed: {}", e);
                (Vec::new(), Some(ApiError::from(e).page_message()))
            }
        }
    } else {
        (Vec::new(), None)
    };

    let rendered = state.templates.get_template(SEARCH_PAGE).and_then(|template| {
        template.render(context! {
            author => author,
            min_year => min_year,
            max_year => max_year,
            searched => submitted,
            books => books,
            error => error_message,
        })
    });

    match rendered {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("Failed to render search page: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
        }
    }
}
