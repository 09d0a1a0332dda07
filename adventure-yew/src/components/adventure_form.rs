use super::{InterestPicker, LoadingButton};
use crate::model::{AdventureQuery, TIME_OPTIONS};
use adventure_core::Category;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AdventureFormProps {
    pub loading: bool,
    pub on_submit: Callback<AdventureQuery>,
}

/// Location, time and interest inputs
#[function_component(AdventureForm)]
pub fn adventure_form(props: &AdventureFormProps) -> Html {
    let query = use_state(AdventureQuery::default);

    let on_location = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut next = (*query).clone();
            next.location = input.value();
            query.set(next);
        })
    };

    let on_time = {
        let query = query.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*query).clone();
            next.time = select.value();
            query.set(next);
        })
    };

    let on_toggle = {
        let query = query.clone();
        Callback::from(move |category: Category| {
            let mut next = (*query).clone();
            next.toggle_interest(category);
            query.set(next);
        })
    };

    let onsubmit = {
        let query = query.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit((*query).clone());
        })
    };

    html! {
        <form class="adventure-form" {onsubmit}>
            <label class="adventure-form__label">
                {"Where are you?"}
                <input
                    class="adventure-form__input"
                    id="location"
                    type="text"
                    placeholder="City or neighborhood"
                    required={true}
                    value={query.location.clone()}
                    oninput={on_location}
                />
            </label>

            <label class="adventure-form__label">
                {"When?"}
                <select class="adventure-form__select" id="time" onchange={on_time}>
                    {for TIME_OPTIONS.iter().map(|(value, label)| html! {
                        <option value={*value} selected={query.time == *value}>{*label}</option>
                    })}
                </select>
            </label>

            <InterestPicker selected={query.interests.clone()} {on_toggle} />

            <LoadingButton loading={props.loading} />
        </form>
    }
}
