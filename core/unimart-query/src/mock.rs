//! Sample listings for demos, local development and tests.
//!
//! The catalogue is fixed so that query results are reproducible. It
//! deliberately includes one soft-deleted listing, one with no recorded
//! views and one with no location.

use chrono::{DateTime, TimeZone, Utc};
use unimart_model::Listing;

fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 9, day, hour, 0, 0)
        .single()
        .unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn listing(
    id: &str,
    title: &str,
    price: f64,
    category: &str,
    location: Option<&str>,
    seller: (&str, &str),
    posted_time: DateTime<Utc>,
    views: u64,
) -> Listing {
    let mut l = Listing::new(id, title, price, seller.0, seller.1, posted_time);
    l.category = Some(category.to_string());
    l.location = location.map(str::to_string);
    l.views = views;
    l
}

/// Returns the sample catalogue, oldest listing first.
pub fn mock_listings() -> Vec<Listing> {
    let alice = ("Alice Chen", "user-alice");
    let bob = ("Bob Singh", "user-bob");
    let carol = ("Carol Diaz", "user-carol");

    let mut listings = vec![
        listing("1", "MAT137 Calculus Textbook", 45.0, "Textbooks", Some("Robarts Library"), alice, at(1, 9), 128),
        listing("2", "IKEA Desk Lamp", 12.5, "Furniture", Some("New College Residence"), bob, at(2, 11), 37),
        listing("3", "TI-84 Graphing Calculator", 60.0, "Electronics", Some("Bahen Centre"), carol, at(3, 15), 212),
        listing("4", "Mini Fridge", 80.0, "Appliances", Some("Chestnut Residence"), alice, at(4, 10), 0),
        listing("5", "Road Bike", 150.0, "Sports", Some("St. George Campus"), bob, at(5, 17), 95),
        listing("6", "Organic Chemistry Model Kit", 25.0, "School Supplies", None, carol, at(6, 8), 14),
        listing("7", "Winter Jacket", 40.0, "Clothing", Some("Robarts Library"), alice, at(7, 13), 56),
        listing("8", "Used Laptop Stand", 18.0, "Electronics", Some("Gerstein Library"), bob, at(8, 12), 300),
    ];

    listings[3].description = Some("Compact fridge, fits under a residence desk.".to_string());
    listings[0].description = Some("Lightly highlighted, includes solutions manual.".to_string());
    // listed but pulled by the seller
    listings[7].deleted = true;

    listings
}
