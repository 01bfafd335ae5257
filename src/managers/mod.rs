// sharemarks state managers
// Managers handle stateful operations over the injected store.

pub mod bookmark_manager;
