use crate::model::{AdventureQuery, DialogContent, FALLBACK_ERROR_MESSAGE};
use adventure_core::{ActivityResult, SelectionError};
use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Generation workflow state
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AdventureState {
    #[default]
    Idle,
    Loading,
    Showing(DialogContent),
}

impl AdventureState {
    pub fn is_loading(&self) -> bool {
        matches!(self, AdventureState::Loading)
    }

    pub fn dialog(&self) -> Option<&DialogContent> {
        match self {
            AdventureState::Showing(content) => Some(content),
            _ => None,
        }
    }

    /// Next state after `action`
    ///
    /// A submit while loading stays loading; a resolve arriving after
    /// dismiss is dropped.
    pub fn apply(&self, action: AdventureAction) -> AdventureState {
        match (self, action) {
            (_, AdventureAction::Submit) => AdventureState::Loading,
            (AdventureState::Loading, AdventureAction::Resolve(content)) => {
                AdventureState::Showing(content)
            }
            (current, AdventureAction::Resolve(_)) => current.clone(),
            (_, AdventureAction::Dismiss) => AdventureState::Idle,
        }
    }
}

/// Transitions of the generation workflow
#[derive(Debug, Clone, PartialEq)]
pub enum AdventureAction {
    Submit,
    Resolve(DialogContent),
    Dismiss,
}

/// Map a generation outcome to what the dialog shows
pub fn dialog_content(outcome: Result<ActivityResult, SelectionError>) -> DialogContent {
    match outcome {
        Ok(adventure) => {
            tracing::info!("Found adventure: {}", adventure.name);
            DialogContent::Adventure(adventure)
        }
        Err(err) => {
            tracing::error!("Error generating adventure: {}", err);
            DialogContent::Error(FALLBACK_ERROR_MESSAGE.to_string())
        }
    }
}

/// Handle returned by [`use_adventure`]
#[derive(Clone, PartialEq)]
pub struct UseAdventureHandle {
    pub state: AdventureState,
    /// Start a generation; ignored while one is in flight
    pub generate: Callback<AdventureQuery>,
    /// Close the dialog and cancel any pending generation
    pub dismiss: Callback<()>,
}

/// Drives form submission: generate, wait `delay_ms`, then show the dialog
///
/// The pending timer is owned by the component. Dropping it on dismiss or
/// unmount cancels the delayed result.
#[hook]
pub fn use_adventure(delay_ms: u32) -> UseAdventureHandle {
    let state = use_state(AdventureState::default);
    let pending = use_mut_ref(|| None::<Timeout>);

    {
        let pending = pending.clone();
        use_effect_with((), move |_| {
            move || {
                pending.borrow_mut().take();
            }
        });
    }

    let generate = {
        let state = state.clone();
        let pending = pending.clone();
        Callback::from(move |query: AdventureQuery| {
            if state.is_loading() {
                return;
            }
            state.set(state.apply(AdventureAction::Submit));

            let outcome = query.generate();
            let resolving = state.clone();
            let timer = Timeout::new(delay_ms, move || {
                let content = dialog_content(outcome);
                resolving.set(AdventureState::Loading.apply(AdventureAction::Resolve(content)));
            });
            *pending.borrow_mut() = Some(timer);
        })
    };

    let dismiss = {
        let state = state.clone();
        let pending = pending.clone();
        Callback::from(move |_: ()| {
            pending.borrow_mut().take();
            state.set(state.apply(AdventureAction::Dismiss));
        })
    };

    UseAdventureHandle {
        state: (*state).clone(),
        generate,
        dismiss,
    }
}
