/// Result alias used by binaries and the REPL plumbing.
pub type Result<T> = anyhow::Result<T>;
