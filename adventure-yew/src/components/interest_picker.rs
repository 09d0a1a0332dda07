use adventure_core::{Catalog, Category};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct InterestPickerProps {
    pub selected: Vec<Category>,
    pub on_toggle: Callback<Category>,
}

/// One checkbox per catalog category
#[function_component(InterestPicker)]
pub fn interest_picker(props: &InterestPickerProps) -> Html {
    html! {
        <fieldset class="adventure-interests">
            <legend class="adventure-interests__legend">{"Interests"}</legend>
            {for Catalog::builtin().categories().map(|category| {
                let id = format!("interest-{}", category.label().to_lowercase());
                let checked = props.selected.contains(&category);
                let onchange = {
                    let on_toggle = props.on_toggle.clone();
                    Callback::from(move |_: Event| on_toggle.emit(category))
                };

                html! {
                    <label class="adventure-interests__item">
                        <input
                            type="checkbox"
                            class="adventure-interests__checkbox"
                            id={id}
                            value={category.label()}
                            {checked}
                            {onchange}
                        />
                        {category.label()}
                    </label>
                }
            })}
        </fieldset>
    }
}
