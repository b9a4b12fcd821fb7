/// A rentable property shown on the listing page.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub id: u32,
    pub title: &'static str,
    pub location: &'static str,
    /// Whole currency units per night.
    pub price: u32,
    /// 0.0 ..= 5.0
    pub rating: f32,
    pub image: &'static str,
}

/// Everything the page consumes, built once at startup and handed to the
/// page as a prop instead of read from module globals.
#[derive(Debug, Clone, PartialEq)]
pub struct UiConfig {
    pub api_base_url: &'static str,
    pub currency_symbol: &'static str,
    pub pagination_limit: usize,
    pub property_types: &'static [&'static str],
    pub listings: Vec<Listing>,
}

impl UiConfig {
    /// Placeholder data for development; no backend is wired up yet.
    pub fn sample() -> Self {
        Self {
            api_base_url: "https://api.example.com",
            currency_symbol: "$",
            pagination_limit: 20,
            property_types: &[
                "Apartment",
                "House",
                "Unique space",
                "Bed and breakfast",
                "Boutique hotel",
            ],
            listings: vec![
                Listing {
                    id: 1,
                    title: "Cozy apartment in downtown",
                    location: "New York, NY",
                    price: 120,
                    rating: 4.8,
                    image: "/assets/64f7c1f4b80255b1d9de659574de3ad943cdc204.png",
                },
                Listing {
                    id: 2,
                    title: "Modern loft with city view",
                    location: "San Francisco, CA",
                    price: 200,
                    rating: 4.9,
                    image: "/assets/c811f30edfff8de9c9b079139dd9782018c7e7c0.jpg",
                },
            ],
        }
    }

    /// Listings endpoint for a future API layer.
    pub fn listings_endpoint(&self) -> String {
        format!("{}/listings", self.api_base_url)
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self::sample()
    }
}
