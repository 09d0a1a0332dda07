#![cfg(target_arch = "wasm32")]

use adventure_core::Category;
use adventure_yew::AdventureQuery;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn generate_in_browser() {
    let query = AdventureQuery {
        location: "Springfield".to_string(),
        time: "morning".to_string(),
        interests: vec![Category::Outdoors, Category::Creative],
    };

    let adventure = query.generate().unwrap();
    assert!(adventure.address.ends_with(", Springfield"));
    assert!(adventure.website.is_some());
}

#[wasm_bindgen_test]
async fn dropped_timer_never_resolves() {
    use adventure_yew::{AdventureAction, AdventureState, DialogContent};
    use gloo_timers::{callback::Timeout, future::TimeoutFuture};
    use std::cell::RefCell;
    use std::rc::Rc;

    let state = Rc::new(RefCell::new(
        AdventureState::default().apply(AdventureAction::Submit),
    ));

    let pending = {
        let state = state.clone();
        Timeout::new(10, move || {
            let resolved = state
                .borrow()
                .apply(AdventureAction::Resolve(DialogContent::Error("late".to_string())));
            *state.borrow_mut() = resolved;
        })
    };
    drop(pending);

    TimeoutFuture::new(50).await;
    assert!(state.borrow().is_loading());
}
