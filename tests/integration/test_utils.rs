//! Shared fixtures for integration tests

use context_graph::context::SubjectContext;
use context_graph::{Concept, ConceptId, ContextGraph, DictionaryItem, MemoryId};
use std::ffi::OsString;
use std::sync::Mutex;
use tempfile::TempDir;

pub const MEMORY: MemoryId = MemoryId(100);

pub fn concept() -> Concept {
    Concept::new(ConceptId(1), MEMORY)
}

pub fn graph() -> ContextGraph {
    ContextGraph::new(MEMORY)
}

pub fn subject(name: &str) -> SubjectContext {
    SubjectContext::new(DictionaryItem::new(name))
}

static CONFIG_ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Run `f` with the user config home pointed at `config_home` and every
/// `CONTEXT_GRAPH_*` variable cleared. The previous environment is restored
/// afterwards.
pub fn with_isolated_config_env<F, R>(config_home: &TempDir, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = CONFIG_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

    let saved: Vec<(OsString, OsString)> = std::env::vars_os()
        .filter(|(key, _)| {
            key == "XDG_CONFIG_HOME"
                || key.to_str().is_some_and(|k| k.starts_with("CONTEXT_GRAPH"))
        })
        .collect();
    for (key, _) in &saved {
        std::env::remove_var(key);
    }
    std::env::set_var("XDG_CONFIG_HOME", config_home.path());

    let result = f();

    let touched: Vec<OsString> = std::env::vars_os()
        .map(|(key, _)| key)
        .filter(|key| {
            key == "XDG_CONFIG_HOME"
                || key.to_str().is_some_and(|k| k.starts_with("CONTEXT_GRAPH"))
        })
        .collect();
    for key in touched {
        std::env::remove_var(key);
    }
    for (key, value) in saved {
        std::env::set_var(key, value);
    }
    result
}
