mod catalog_steps;
mod selection_steps;
