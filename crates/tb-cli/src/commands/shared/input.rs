use anyhow::Context;

/// Return `raw` itself, or the contents of the file it names when it starts
/// with `@`.
pub fn value_or_from_path(raw: &str) -> anyhow::Result<String> {
    match raw.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read definition from '{path}'")),
        None => Ok(raw.to_string()),
    }
}
