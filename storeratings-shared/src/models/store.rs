use serde::{Deserialize, Serialize};

/// A store row in the browse listing and the admin store table.
///
/// Aggregate numbers are computed and owned by the server; the client only
/// renders them. `average_rating` is zero while `total_ratings` is zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoreListItem {
    /// Unique identifier for the store.
    pub id: i64,

    /// Display name of the store.
    pub name: String,

    /// Contact email, if the store has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Postal address, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Mean of all submitted ratings, 0-5.
    pub average_rating: f64,

    /// How many ratings the average is built from.
    pub total_ratings: u32,
}

/// One of the caller's own ratings, from `GET /stores/my-ratings`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MyRating {
    /// Store the rating belongs to.
    pub store_id: i64,

    /// The submitted star value, 1-5.
    pub rating: u8,
}

/// Payload for `POST /stores/rate` and `POST /stores/update-rating`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RatingRequest {
    /// Store being rated.
    pub store_id: i64,

    /// Star value to record, 1-5.
    pub rating: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_list_item_uses_camel_case_wire_names() {
        let json = r#"{
            "id": 4,
            "name": "Corner Grocery",
            "address": "88 Elm Avenue",
            "averageRating": 4.25,
            "totalRatings": 12
        }"#;

        let store: StoreListItem = serde_json::from_str(json).unwrap();
        assert_eq!(store.name, "Corner Grocery");
        assert_eq!(store.email, None);
        assert!((store.average_rating - 4.25).abs() < f64::EPSILON);
        assert_eq!(store.total_ratings, 12);

        let serialized = serde_json::to_string(&store).unwrap();
        assert!(serialized.contains("\"averageRating\""));
        assert!(serialized.contains("\"totalRatings\""));
    }

    #[test]
    fn unrated_store_reports_zero_average() {
        let json = r#"{"id":1,"name":"New Shop","averageRating":0,"totalRatings":0}"#;
        let store: StoreListItem = serde_json::from_str(json).unwrap();
        assert_eq!(store.total_ratings, 0);
        assert!(store.average_rating.abs() < f64::EPSILON);
    }

    #[test]
    fn rating_request_wire_shape() {
        let request = RatingRequest {
            store_id: 9,
            rating: 5,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"storeId":9,"rating":5}"#);
    }

    #[test]
    fn my_rating_deserializes() {
        let entries: Vec<MyRating> =
            serde_json::from_str(r#"[{"storeId":2,"rating":3},{"storeId":5,"rating":4}]"#).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].store_id, 2);
        assert_eq!(entries[1].rating, 4);
    }
}
