use anyhow::Context as _;

/// Context for failed reads
pub fn query_context(entity: &str) -> String {
    format!("Failed to query {}", entity)
}

/// Context for failed writes
pub fn write_context(operation: &str, entity: &str) -> String {
    format!("Failed to {} {}", operation, entity)
}

/// Error for a lookup that matched nothing
pub fn not_found(entity: &str, key: &str) -> anyhow::Error {
    anyhow::anyhow!("No {} found for: {}", entity, key)
}

/// Wrap result with query context
pub fn with_query_context<T, E>(result: Result<T, E>, entity: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(query_context(entity))
}

/// Wrap result with write context
pub fn with_write_context<T, E>(result: Result<T, E>, operation: &str, entity: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(write_context(operation, entity))
}
