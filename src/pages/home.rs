use yew::prelude::*;

use crate::components::button::Button;
use crate::components::card::Card;
use crate::config::UiConfig;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    #[prop_or_default]
    pub config: UiConfig,
}

/// Listing page: a header plus one card per sample listing, rendered in
/// source order and keyed by listing id.
#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    // The document title is head-owned; set it once on mount.
    use_effect_with((), move |_| {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            doc.set_title("ALX Listing App");
        }
        || ()
    });

    html! {
        <div class="container">
            <main>
                <h1 class="page-title">{ "Welcome to ALX Listing App" }</h1>

                <div class="listing-grid">
                    { for props.config.listings.iter().map(|listing| html! {
                        <Card key={listing.id}>
                            <div class="image-frame">
                                <div class="image-placeholder">
                                    <p>{ "Listing Image Placeholder" }</p>
                                </div>
                            </div>
                            <div class="card-body">
                                <h2 class="listing-title">{ listing.title }</h2>
                                <p class="listing-location">{ listing.location }</p>
                                <p class="listing-price">
                                    { format!("{}{} / night", props.config.currency_symbol, listing.price) }
                                </p>
                                <div class="card-actions">
                                    <Button>{ "View Details" }</Button>
                                </div>
                            </div>
                        </Card>
                    }) }
                </div>
            </main>
        </div>
    }
}
