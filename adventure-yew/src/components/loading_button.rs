use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingButtonProps {
    pub loading: bool,
    #[prop_or(AttrValue::from("Find an Adventure!"))]
    pub label: AttrValue,
    #[prop_or(AttrValue::from("Finding..."))]
    pub loading_label: AttrValue,
}

/// Submit button that disables itself and shows a spinner while loading
#[function_component(LoadingButton)]
pub fn loading_button(props: &LoadingButtonProps) -> Html {
    let label = if props.loading {
        &props.loading_label
    } else {
        &props.label
    };

    html! {
        <button
            type="submit"
            class="adventure-btn adventure-btn--primary"
            disabled={props.loading}
        >
            if props.loading {
                <span class="adventure-spinner" role="status" aria-hidden="true"></span>
            }
            {" "}{label.clone()}
        </button>
    }
}
