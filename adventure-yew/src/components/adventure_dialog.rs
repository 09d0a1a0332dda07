use crate::model::DialogContent;
use adventure_core::{ActivityResult, ERROR_IMAGE_URL, FALLBACK_IMAGE_URL};
use yew::prelude::*;

const DEFAULT_TITLE: &str = "Your Next Adventure!";
const ERROR_TITLE: &str = "Oh No!";

#[derive(Properties, PartialEq)]
pub struct AdventureDialogProps {
    pub content: DialogContent,
    pub on_close: Callback<()>,
}

fn title(content: &DialogContent) -> &str {
    match content {
        DialogContent::Adventure(adventure) if !adventure.name.is_empty() => &adventure.name,
        DialogContent::Adventure(_) => DEFAULT_TITLE,
        DialogContent::Error(_) => ERROR_TITLE,
    }
}

#[derive(Properties, PartialEq)]
struct AdventureBodyProps {
    adventure: ActivityResult,
}

#[function_component(AdventureBody)]
fn adventure_body(props: &AdventureBodyProps) -> Html {
    let adventure = &props.adventure;
    let image_failed = use_state(|| false);

    let src = if *image_failed {
        FALLBACK_IMAGE_URL.to_string()
    } else {
        adventure.image_url()
    };

    let onerror = {
        let image_failed = image_failed.clone();
        Callback::from(move |_: Event| image_failed.set(true))
    };

    let description = if adventure.description.is_empty() {
        "A fantastic place to explore!"
    } else {
        adventure.description.as_str()
    };

    let address = if adventure.address.is_empty() {
        "Not available"
    } else {
        adventure.address.as_str()
    };

    html! {
        <div class="adventure-dialog__body">
            <img class="adventure-dialog__image" {src} alt={adventure.name.clone()} {onerror} />
            <p class="adventure-dialog__description">{description}</p>
            <hr />
            <p class="adventure-dialog__address">
                <strong>{"📍 Address:"}</strong>{" "}{address}
            </p>
            if let Some(website) = &adventure.website {
                <a
                    class="adventure-btn adventure-btn--info"
                    href={website.clone()}
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    {"Visit Website"}
                </a>
            }
        </div>
    }
}

/// Modal showing a generated adventure or an error message
#[function_component(AdventureDialog)]
pub fn adventure_dialog(props: &AdventureDialogProps) -> Html {
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let body = match &props.content {
        DialogContent::Adventure(adventure) => html! {
            <AdventureBody adventure={adventure.clone()} />
        },
        DialogContent::Error(message) => html! {
            <div class="adventure-dialog__body">
                <img class="adventure-dialog__image" src={ERROR_IMAGE_URL} alt="Error" />
                <p class="adventure-dialog__description">{message}</p>
            </div>
        },
    };

    html! {
        <div class="adventure-dialog" role="dialog" aria-modal="true" aria-labelledby="adventure-dialog-title">
            <div class="adventure-dialog__content">
                <header class="adventure-dialog__header">
                    <h2 class="adventure-dialog__title" id="adventure-dialog-title">
                        {title(&props.content)}
                    </h2>
                    <button class="adventure-dialog__close" aria-label="Close" onclick={on_close.clone()}>
                        {"×"}
                    </button>
                </header>
                {body}
                <footer class="adventure-dialog__footer">
                    <button class="adventure-btn" onclick={on_close}>{"Close"}</button>
                </footer>
            </div>
        </div>
    }
}
