use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CardProps {
    pub children: Html,
}

/// Container with rounded corners, a drop shadow and clipped overflow.
/// Children render verbatim; the card has no other visual opinion.
#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    html! {
        <div class="card">
            { props.children.clone() }
        </div>
    }
}
