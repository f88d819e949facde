use serde::{Deserialize, Serialize};

/// Response of `GET /owner/dashboard`: every store assigned to the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OwnerDashboard {
    /// Aggregates for each owned store.
    pub stores: Vec<OwnerStoreSummary>,
}

/// Aggregate ratings for one owned store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OwnerStoreSummary {
    /// Unique identifier for the store.
    pub store_id: i64,

    /// Display name of the store.
    pub store_name: String,

    /// Mean of all submitted ratings, 0-5.
    pub average_rating: f64,

    /// How many ratings the average is built from.
    pub count: u32,

    /// The individual ratings behind the aggregate.
    pub ratings: Vec<CustomerRating>,
}

/// One customer's rating of an owned store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRating {
    /// Id of the customer who rated.
    pub user_id: i64,

    /// Name of the customer.
    pub name: String,

    /// Email of the customer.
    pub email: String,

    /// The star value they submitted, 1-5.
    pub rating: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_dashboard_roundtrip() {
        let json = r#"{
            "stores": [{
                "storeId": 3,
                "storeName": "Pier Coffee",
                "averageRating": 4.5,
                "count": 2,
                "ratings": [
                    {"userId": 8, "name": "Kit Moran", "email": "kit@example.com", "rating": 5},
                    {"userId": 9, "name": "Lee Chao", "email": "lee@example.com", "rating": 4}
                ]
            }]
        }"#;

        let dashboard: OwnerDashboard = serde_json::from_str(json).unwrap();
        assert_eq!(dashboard.stores.len(), 1);
        let store = &dashboard.stores[0];
        assert_eq!(store.store_name, "Pier Coffee");
        assert_eq!(store.count, 2);
        assert_eq!(store.ratings[1].rating, 4);
    }

    #[test]
    fn empty_dashboard_deserializes() {
        let dashboard: OwnerDashboard = serde_json::from_str(r#"{"stores":[]}"#).unwrap();
        assert!(dashboard.stores.is_empty());
    }
}
