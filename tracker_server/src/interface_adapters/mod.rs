// Interface adapters: HTTP protocol, handlers and shared state.

pub mod handlers;
pub mod protocol;
pub mod routes;
pub mod state;
