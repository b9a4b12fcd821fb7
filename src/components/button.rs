use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Outline => "btn-outline",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            ButtonSize::Small => "btn-sm",
            ButtonSize::Medium => "btn-md",
            ButtonSize::Large => "btn-lg",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    pub children: Html,
    #[prop_or_default]
    pub on_click: Option<Callback<()>>,
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub size: ButtonSize,
    #[prop_or_default]
    pub disabled: bool,
}

// A disabled control must never reach the callback, even if the DOM
// event fires anyway.
fn emit_activation(disabled: bool, on_click: &Option<Callback<()>>) {
    if disabled {
        return;
    }
    if let Some(cb) = on_click {
        cb.emit(());
    }
}

/// Clickable control styled by variant and size.
#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let onclick = {
        let on_click = props.on_click.clone();
        let disabled = props.disabled;
        Callback::from(move |_: MouseEvent| emit_activation(disabled, &on_click))
    };

    let class = classes!(
        "btn",
        props.variant.class(),
        props.size.class(),
        props.disabled.then_some("btn-disabled"),
    );

    html! {
        <button class={class} onclick={onclick} disabled={props.disabled}>
            { props.children.clone() }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    fn counting_callback() -> (Rc<Cell<u32>>, Option<Callback<()>>) {
        let count = Rc::new(Cell::new(0u32));
        let cb = {
            let count = count.clone();
            Callback::from(move |_| count.set(count.get() + 1))
        };
        (count, Some(cb))
    }

    #[test]
    fn variant_classes_are_exhaustive_and_distinct() {
        let pairs = [
            (ButtonVariant::Primary, "btn-primary"),
            (ButtonVariant::Secondary, "btn-secondary"),
            (ButtonVariant::Outline, "btn-outline"),
        ];
        for (variant, expected) in pairs {
            assert_eq!(variant.class(), expected);
        }
    }

    #[test]
    fn size_classes_are_exhaustive_and_distinct() {
        let pairs = [
            (ButtonSize::Small, "btn-sm"),
            (ButtonSize::Medium, "btn-md"),
            (ButtonSize::Large, "btn-lg"),
        ];
        for (size, expected) in pairs {
            assert_eq!(size.class(), expected);
        }
    }

    #[test]
    fn defaults_are_primary_and_medium() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
        assert_eq!(ButtonSize::default(), ButtonSize::Medium);
    }

    #[test]
    fn disabled_control_never_reaches_the_callback() {
        let (count, cb) = counting_callback();
        for _ in 0..5 {
            emit_activation(true, &cb);
        }
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn enabled_control_fires_once_per_activation() {
        let (count, cb) = counting_callback();
        emit_activation(false, &cb);
        assert_eq!(count.get(), 1);
        emit_activation(false, &cb);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn activation_without_a_callback_is_a_no_op() {
        emit_activation(false, &None);
    }
}
