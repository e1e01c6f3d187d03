pub mod debouncer;
pub mod state;
