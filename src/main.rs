use alx_listing_app::config::UiConfig;
use alx_listing_app::pages::home::{Home, HomeProps};

fn main() {
    let props = HomeProps {
        config: UiConfig::sample(),
    };
    yew::Renderer::<Home>::with_props(props).render();
}
