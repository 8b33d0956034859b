pub mod descriptor;
pub mod escape;
pub mod full_path;
pub mod nth_child;
pub mod optimized;
pub mod selector_model;
