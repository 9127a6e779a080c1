//! Form rendering for the citation form view

mod citation_form;
mod field_renderer;

pub use citation_form::*;
