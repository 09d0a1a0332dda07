//! Activity content shipped with the crate

pub(crate) mod builtin;
