pub mod constants;
pub mod form_state;
pub mod types;
