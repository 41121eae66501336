//! The catalog of canned analytical queries.
//!
//! Every entry is a parameterless SELECT executed verbatim; results are
//! rendered as-is. Slugs are stable and addressable over HTTP.

/// A single catalog entry.
#[derive(Debug, Clone, Copy)]
pub struct Report {
    /// Stable identifier used in URLs.
    pub slug: &'static str,
    /// Human-readable title.
    pub title: &'static str,
    /// The SQL statement to run.
    pub sql: &'static str,
}

/// The full catalog, in dashboard display order.
pub const CATALOG: [Report; 16] = [
    Report {
        slug: "providers-by-city",
        title: "Providers by City",
        sql: "SELECT city, COUNT(*) AS total_providers FROM providers \
              GROUP BY city ORDER BY total_providers DESC",
    },
    Report {
        slug: "receivers-by-city",
        title: "Receivers by City",
        sql: "SELECT city, COUNT(*) AS total_receivers FROM receivers \
              GROUP BY city ORDER BY total_receivers DESC",
    },
    Report {
        slug: "provider-contact-directory",
        title: "Provider Contact Directory",
        sql: "SELECT city, name, contact FROM providers ORDER BY city ASC, name ASC",
    },
    Report {
        slug: "top-contributing-provider-kinds",
        title: "Most Contributing Provider Kinds",
        sql: "SELECT p.kind, SUM(l.quantity) AS total_quantity \
              FROM providers p JOIN listings l ON p.id = l.provider_id \
              GROUP BY p.kind ORDER BY total_quantity DESC",
    },
    Report {
        slug: "top-receivers-by-quantity",
        title: "Top Receivers by Food Claimed",
        sql: "SELECT r.name, SUM(l.quantity) AS total_quantity_claimed \
              FROM receivers r \
              JOIN claims c ON r.id = c.receiver_id \
              JOIN listings l ON c.listing_id = l.id \
              GROUP BY r.name ORDER BY total_quantity_claimed DESC LIMIT 10",
    },
    Report {
        slug: "total-quantity-available",
        title: "Total Quantity of Food Available",
        sql: "SELECT SUM(quantity) AS total_available FROM listings",
    },
    Report {
        slug: "top-listing-city",
        title: "City with the Most Listings",
        sql: "SELECT location, COUNT(*) AS listing_count FROM listings \
              GROUP BY location ORDER BY listing_count DESC LIMIT 1",
    },
    Report {
        slug: "food-type-counts",
        title: "Most Commonly Available Food Types",
        sql: "SELECT food_type, COUNT(*) AS listing_count FROM listings \
              GROUP BY food_type ORDER BY listing_count DESC",
    },
    Report {
        slug: "claims-per-food-item",
        title: "Claims per Food Item",
        sql: "SELECT l.food_name, COUNT(c.id) AS total_claims \
              FROM listings l JOIN claims c ON l.id = c.listing_id \
              GROUP BY l.food_name ORDER BY total_claims DESC LIMIT 10",
    },
    Report {
        slug: "top-provider-by-completed-claims",
        title: "Provider with Most Completed Claims",
        sql: "SELECT p.name, COUNT(c.id) AS completed_claims \
              FROM providers p \
              JOIN listings l ON p.id = l.provider_id \
              JOIN claims c ON l.id = c.listing_id \
              WHERE c.status = 'Completed' \
              GROUP BY p.name ORDER BY completed_claims DESC LIMIT 1",
    },
    Report {
        slug: "claim-status-distribution",
        title: "Claims by Status (Percentage)",
        sql: "SELECT status, COUNT(*) * 100.0 / (SELECT COUNT(*) FROM claims) AS percentage \
              FROM claims GROUP BY status",
    },
    Report {
        slug: "average-quantity-claimed-per-receiver",
        title: "Average Quantity Claimed per Receiver",
        sql: "SELECT AVG(t.total_quantity) AS average_per_receiver FROM ( \
              SELECT SUM(l.quantity) AS total_quantity \
              FROM claims c JOIN listings l ON c.listing_id = l.id \
              GROUP BY c.receiver_id) t",
    },
    Report {
        slug: "most-claimed-meal-type",
        title: "Most Claimed Meal Type",
        sql: "SELECT l.meal_type, COUNT(c.id) AS claim_count \
              FROM listings l JOIN claims c ON l.id = c.listing_id \
              GROUP BY l.meal_type ORDER BY claim_count DESC LIMIT 1",
    },
    Report {
        slug: "total-donated-per-provider",
        title: "Total Food Donated by Each Provider",
        sql: "SELECT p.name, SUM(l.quantity) AS total_donated \
              FROM providers p JOIN listings l ON p.id = l.provider_id \
              GROUP BY p.name ORDER BY total_donated DESC",
    },
    Report {
        slug: "top-cities-by-claims",
        title: "Top 5 Cities by Number of Claims",
        sql: "SELECT r.city, COUNT(c.id) AS total_claims \
              FROM claims c JOIN receivers r ON c.receiver_id = r.id \
              GROUP BY r.city ORDER BY total_claims DESC LIMIT 5",
    },
    Report {
        slug: "average-quantity-per-food-type",
        title: "Average Quantity per Food Type",
        sql: "SELECT food_type, AVG(quantity) AS average_quantity FROM listings \
              GROUP BY food_type ORDER BY average_quantity DESC",
    },
];

/// Look up a catalog entry by slug.
pub fn find(slug: &str) -> Option<&'static Report> {
    CATALOG.iter().find(|report| report.slug == slug)
}
