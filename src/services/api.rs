use chrono::NaiveDate;

use crate::domain::show::ShowWithDetails;
use crate::domain::venue::Venue;
use crate::dto::api::{ShowsQuery, VenuesQuery};
use crate::pagination::DEFAULT_PAGE_SIZE;
use crate::repository::{ShowListQuery, ShowReader, VenueListQuery, VenueReader};
use crate::services::{ServiceError, ServiceResult, non_blank};

/// Returns one page of upcoming shows matching the supplied filters, ordered
/// by show date ascending.
pub fn list_shows<R>(repo: &R, params: ShowsQuery) -> ServiceResult<Vec<ShowWithDetails>>
where
    R: ShowReader + ?Sized,
{
    let limit = params.limit.unwrap_or(DEFAULT_PAGE_SIZE).max(0);
    let offset = params.offset.unwrap_or(0).max(0);

    let mut query = ShowListQuery::new().paginate(limit, offset);

    if let Some(city) = non_blank(params.city) {
        query = query.city(city);
    }

    if let Some(date) = non_blank(params.date) {
        let day = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
            .map_err(|_| ServiceError::Validation(format!("invalid date filter: {date}")))?;
        query = query.on_date(day);
    }

    let mut shows = repo.list_shows(query)?;

    // Applied after the page is fetched: a filtered page can come back with
    // fewer rows than `limit` even when more matches exist beyond it, and the
    // envelope count reflects the filtered page.
    if let Some(comedian) = non_blank(params.comedian) {
        shows.retain(|show| show.has_performer_named(&comedian));
    }

    Ok(shows)
}

/// Returns one page of venues matching the supplied filters, ordered by name
/// ascending.
pub fn list_venues<R>(repo: &R, params: VenuesQuery) -> ServiceResult<Vec<Venue>>
where
    R: VenueReader + ?Sized,
{
    let limit = params.limit.unwrap_or(DEFAULT_PAGE_SIZE).max(0);
    let offset = params.offset.unwrap_or(0).max(0);

    let mut query = VenueListQuery::new().paginate(limit, offset);

    if let Some(city) = non_blank(params.city) {
        query = query.city(city);
    }

    if let Some(search) = non_blank(params.search) {
        query = query.search(search);
    }

    repo.list_venues(query).map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeDelta, Utc};

    use super::*;
    use crate::domain::comedian::Comedian;
    use crate::domain::show::{
        PerformerRole, PerformerWithComedian, Show, ShowPerformer, ShowStatus,
    };
    use crate::domain::venue::Venue as DomainVenue;
    use crate::repository::mock::MockRepository;

    fn sample_venue() -> DomainVenue {
        let now = Utc::now().naive_utc();
        DomainVenue {
            id: 1,
            name: "Laugh Factory".to_string(),
            description: None,
            address: None,
            city: Some("Los Angeles".to_string()),
            state: None,
            zip_code: None,
            country: "USA".to_string(),
            phone: None,
            website: None,
            capacity: None,
            image_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn sample_show(id: i32, title: &str, performer_names: &[&str]) -> ShowWithDetails {
        let now = Utc::now().naive_utc();
        let performers = performer_names
            .iter()
            .enumerate()
            .map(|(i, name)| PerformerWithComedian {
                performer: ShowPerformer {
                    id: i as i32 + 1,
                    show_id: id,
                    comedian_id: i as i32 + 1,
                    role: PerformerRole::Performer,
                    order_index: i as i32,
                    created_at: now,
                },
                comedian: Comedian {
                    id: i as i32 + 1,
                    name: name.to_string(),
                    bio: None,
                    image_url: None,
                    website: None,
                    instagram: None,
                    twitter: None,
                    youtube: None,
                    created_at: now,
                    updated_at: now,
                },
            })
            .collect();

        ShowWithDetails {
            show: Show {
                id,
                title: title.to_string(),
                description: None,
                venue_id: 1,
                show_date: now + TimeDelta::days(1),
                doors_open: None,
                show_time: None,
                ticket_price_min: None,
                ticket_price_max: None,
                ticket_url: None,
                age_restriction: None,
                status: ShowStatus::Upcoming,
                image_url: None,
                created_at: now,
                updated_at: now,
            },
            venue: sample_venue(),
            performers,
        }
    }

    #[test]
    fn applies_default_pagination() {
        let mut repo = MockRepository::new();
        repo.expect_list_shows()
            .withf(|query| {
                query
                    .pagination
                    .is_some_and(|p| p.limit == 10 && p.offset == 0)
                    && query.city.is_none()
                    && query.on_date.is_none()
            })
            .returning(|_| Ok(vec![]));

        let shows = list_shows(&repo, ShowsQuery::default()).unwrap();
        assert!(shows.is_empty());
    }

    #[test]
    fn blank_filters_are_ignored() {
        let mut repo = MockRepository::new();
        repo.expect_list_shows()
            .withf(|query| query.city.is_none() && query.on_date.is_none())
            .returning(|_| Ok(vec![]));

        let params = ShowsQuery {
            city: Some("   ".to_string()),
            date: Some("".to_string()),
            comedian: Some(" ".to_string()),
            ..Default::default()
        };
        list_shows(&repo, params).unwrap();
    }

    #[test]
    fn comedian_filter_matches_substring_case_insensitively() {
        let mut repo = MockRepository::new();
        repo.expect_list_shows().returning(|_| {
            Ok(vec![
                sample_show(1, "Headline Night", &["Jerry Seinfeld", "Newcomer"]),
                sample_show(2, "Open Mic", &["Ali Wong"]),
            ])
        });

        let params = ShowsQuery {
            comedian: Some("SEINFELD".to_string()),
            ..Default::default()
        };
        let shows = list_shows(&repo, params).unwrap();
        assert_eq!(shows.len(), 1);
        assert_eq!(shows[0].show.title, "Headline Night");
    }

    #[test]
    fn comedian_filter_can_shrink_a_full_page() {
        let mut repo = MockRepository::new();
        repo.expect_list_shows().returning(|_| {
            Ok(vec![
                sample_show(1, "A", &["Ali Wong"]),
                sample_show(2, "B", &["Bill Burr"]),
            ])
        });

        let params = ShowsQuery {
            limit: Some(2),
            comedian: Some("wong".to_string()),
            ..Default::default()
        };
        let shows = list_shows(&repo, params).unwrap();
        // Fewer rows than the requested limit even though the underlying page
        // was full.
        assert_eq!(shows.len(), 1);
    }

    #[test]
    fn unparseable_date_is_a_validation_error() {
        let repo = MockRepository::new();
        let params = ShowsQuery {
            date: Some("next friday".to_string()),
            ..Default::default()
        };
        let err = list_shows(&repo, params).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[test]
    fn parses_date_filter() {
        let mut repo = MockRepository::new();
        repo.expect_list_shows()
            .withf(|query| {
                query.on_date
                    == Some(chrono::NaiveDate::from_ymd_opt(2026, 9, 4).expect("valid date"))
            })
            .returning(|_| Ok(vec![]));

        let params = ShowsQuery {
            date: Some("2026-09-04".to_string()),
            ..Default::default()
        };
        list_shows(&repo, params).unwrap();
    }

    #[test]
    fn venue_filters_are_forwarded_trimmed() {
        let mut repo = MockRepository::new();
        repo.expect_list_venues()
            .withf(|query| {
                query.city.as_deref() == Some("Boston")
                    && query.search.as_deref() == Some("Comedy")
                    && query
                        .pagination
                        .is_some_and(|p| p.limit == 5 && p.offset == 10)
            })
            .returning(|_| Ok(vec![]));

        let params = VenuesQuery {
            limit: Some(5),
            offset: Some(10),
            city: Some(" Boston ".to_string()),
            search: Some("Comedy".to_string()),
        };
        list_venues(&repo, params).unwrap();
    }
}
