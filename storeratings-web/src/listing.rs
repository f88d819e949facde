//! Filtering, sorting, and fetch-ordering helpers for the collection screens.

use shared::models::{SortDirection, StoreListItem};
use std::cell::Cell;
use std::cmp::Ordering;
use std::rc::Rc;
use std::str::FromStr;
use strum::EnumIter;

/// Columns the stores screen can re-sort by without a server round-trip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter)]
pub enum StoreSortField {
    #[default]
    Name,
    Address,
    AverageRating,
}

impl StoreSortField {
    /// Option value used by the sort select.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Address => "address",
            Self::AverageRating => "averageRating",
        }
    }

    /// Label shown in the sort select.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Address => "Address",
            Self::AverageRating => "Overall Rating",
        }
    }
}

impl FromStr for StoreSortField {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "name" => Ok(Self::Name),
            "address" => Ok(Self::Address),
            "averageRating" => Ok(Self::AverageRating),
            _ => Err("unknown sort field"),
        }
    }
}

/// Comparator sort over an already-fetched list. Equal keys keep no
/// particular order.
pub fn sort_stores(stores: &mut [StoreListItem], field: StoreSortField, direction: SortDirection) {
    stores.sort_unstable_by(|a, b| {
        let ordering = match field {
            StoreSortField::Name => a.name.cmp(&b.name),
            StoreSortField::Address => a.address.cmp(&b.address),
            StoreSortField::AverageRating => a
                .average_rating
                .partial_cmp(&b.average_rating)
                .unwrap_or(Ordering::Equal),
        };
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

/// Build query pairs for a filtered, sorted list request: non-empty filters
/// only, then the always-required `sortBy` and `sortDir` keys.
#[must_use]
pub fn build_list_query(
    filters: &[(&str, &str)],
    sort_by: &str,
    direction: SortDirection,
) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = filters
        .iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
        .collect();
    pairs.push(("sortBy".to_string(), sort_by.to_string()));
    pairs.push(("sortDir".to_string(), direction.as_str().to_string()));
    pairs
}

/// Which endpoint a rating submission must use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingEndpoint {
    /// `POST /stores/rate`: the user has not rated this store before.
    Create,
    /// `POST /stores/update-rating`: overwrite the prior rating.
    Update,
}

/// Pick the endpoint from the locally known prior rating, if any.
#[must_use]
pub fn rating_endpoint(previous: Option<u8>) -> RatingEndpoint {
    if previous.is_some() {
        RatingEndpoint::Update
    } else {
        RatingEndpoint::Create
    }
}

/// Monotonic tag source letting a screen ignore responses from fetches it
/// has since superseded. Clones share the same counter.
#[derive(Debug, Clone, Default)]
pub struct RequestSequence(Rc<Cell<u64>>);

impl RequestSequence {
    /// Start a new fetch, invalidating every earlier tag.
    pub fn begin(&self) -> u64 {
        let next = self.0.get() + 1;
        self.0.set(next);
        next
    }

    /// Whether `tag` still identifies the most recent fetch.
    #[must_use]
    pub fn is_current(&self, tag: u64) -> bool {
        self.0.get() == tag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(id: i64, name: &str, average: f64) -> StoreListItem {
        StoreListItem {
            id,
            name: name.to_string(),
            email: None,
            address: None,
            average_rating: average,
            total_ratings: 1,
        }
    }

    #[test]
    fn sort_by_name_ascending_then_descending() {
        let mut stores = vec![store(1, "B", 3.0), store(2, "A", 4.0)];

        sort_stores(&mut stores, StoreSortField::Name, SortDirection::Ascending);
        assert_eq!(stores[0].name, "A");
        assert_eq!(stores[1].name, "B");

        sort_stores(&mut stores, StoreSortField::Name, SortDirection::Descending);
        assert_eq!(stores[0].name, "B");
        assert_eq!(stores[1].name, "A");
    }

    #[test]
    fn sort_is_symmetric_for_distinct_keys() {
        let original = vec![store(1, "Cedar", 2.0), store(2, "Aspen", 5.0)];
        let mut stores = original.clone();

        sort_stores(&mut stores, StoreSortField::Name, SortDirection::Ascending);
        sort_stores(&mut stores, StoreSortField::Name, SortDirection::Descending);
        sort_stores(&mut stores, StoreSortField::Name, SortDirection::Ascending);
        sort_stores(&mut stores, StoreSortField::Name, SortDirection::Descending);
        assert_eq!(stores[0].name, original[0].name);
        assert_eq!(stores[1].name, original[1].name);
    }

    #[test]
    fn sort_by_average_rating() {
        let mut stores = vec![store(1, "B", 1.5), store(2, "A", 4.75), store(3, "C", 3.0)];
        sort_stores(
            &mut stores,
            StoreSortField::AverageRating,
            SortDirection::Descending,
        );
        assert_eq!(stores[0].id, 2);
        assert_eq!(stores[2].id, 1);
    }

    #[test]
    fn build_list_query_drops_empty_filters() {
        let query = build_list_query(
            &[("name", "grocery"), ("email", ""), ("address", "   ")],
            "name",
            SortDirection::Ascending,
        );

        assert_eq!(
            query,
            vec![
                ("name".to_string(), "grocery".to_string()),
                ("sortBy".to_string(), "name".to_string()),
                ("sortDir".to_string(), "ASC".to_string()),
            ]
        );
    }

    #[test]
    fn build_list_query_always_carries_sort_keys() {
        let query = build_list_query(&[], "email", SortDirection::Descending);
        assert_eq!(
            query,
            vec![
                ("sortBy".to_string(), "email".to_string()),
                ("sortDir".to_string(), "DESC".to_string()),
            ]
        );
    }

    #[test]
    fn first_rating_creates_repeat_rating_updates() {
        assert_eq!(rating_endpoint(None), RatingEndpoint::Create);
        assert_eq!(rating_endpoint(Some(3)), RatingEndpoint::Update);
    }

    #[test]
    fn stale_tags_are_not_current() {
        let sequence = RequestSequence::default();
        let first = sequence.begin();
        assert!(sequence.is_current(first));

        let second = sequence.begin();
        assert!(!sequence.is_current(first));
        assert!(sequence.is_current(second));
    }

    #[test]
    fn clones_share_the_counter() {
        let sequence = RequestSequence::default();
        let tag = sequence.begin();
        let clone = sequence.clone();
        assert!(clone.is_current(tag));
        clone.begin();
        assert!(!sequence.is_current(tag));
    }

    #[test]
    fn store_sort_field_roundtrip() {
        for field in [
            StoreSortField::Name,
            StoreSortField::Address,
            StoreSortField::AverageRating,
        ] {
            assert_eq!(StoreSortField::from_str(field.as_str()).unwrap(), field);
        }
        assert!(StoreSortField::from_str("rating").is_err());
    }
}
