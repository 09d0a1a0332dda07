mod use_adventure;

pub use use_adventure::{
    dialog_content, use_adventure, AdventureAction, AdventureState, UseAdventureHandle,
};
