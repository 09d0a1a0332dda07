use crate::components::{AdventureDialog, AdventureForm};
use crate::config::AppConfig;
use crate::hooks::use_adventure;
use crate::service_worker;
use yew::prelude::*;

#[derive(Properties, PartialEq, Default)]
pub struct AppProps {
    #[prop_or_default]
    pub config: AppConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let adventure = use_adventure(props.config.simulated_delay_ms);

    {
        let path = props.config.service_worker_path.clone();
        use_effect_with((), move |_| {
            service_worker::register_on_load(path);
            || ()
        });
    }

    let on_close = {
        let dismiss = adventure.dismiss.clone();
        Callback::from(move |_: ()| dismiss.emit(()))
    };

    html! {
        <div class="app">
            <header class="app__header">
                <h1 class="app__title">{"🧭 Local Adventure Generator"}</h1>
                <p class="app__subtitle">{"Find something fun to do with the family nearby."}</p>
            </header>

            <main class="app__main">
                <AdventureForm
                    loading={adventure.state.is_loading()}
                    on_submit={adventure.generate.clone()}
                />
            </main>

            if let Some(content) = adventure.state.dialog() {
                <AdventureDialog content={content.clone()} {on_close} />
            }
        </div>
    }
}
