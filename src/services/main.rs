use crate::dto::api::ShowsQuery;
use crate::dto::main::{ShowsPageData, ShowsPageQuery};
use crate::pagination::{Paginated, SHOWS_PER_PAGE};
use crate::repository::ShowReader;
use crate::services::{ServiceResult, api, non_blank};

/// Loads one page of upcoming shows for the browsing page, applying the
/// page's filters and translating its 1-based page number into an offset.
pub fn load_shows_page<R>(repo: &R, params: ShowsPageQuery) -> ServiceResult<ShowsPageData>
where
    R: ShowReader + ?Sized,
{
    let page = params.page.unwrap_or(1).max(1);
    let offset = (page as i64 - 1) * SHOWS_PER_PAGE;

    let search_query = non_blank(params.q);
    let city = non_blank(params.city);
    let date = non_blank(params.date);

    let shows = api::list_shows(
        repo,
        ShowsQuery {
            limit: Some(SHOWS_PER_PAGE),
            offset: Some(offset),
            city: city.clone(),
            date: date.clone(),
            comedian: search_query.clone(),
        },
    )?;

    Ok(ShowsPageData {
        shows: Paginated::new(shows, page, SHOWS_PER_PAGE as usize),
        search_query,
        city,
        date,
    })
}
