use indexmap::IndexMap;

/// An insertion-ordered set of response headers with unique names.
///
/// Replacing an existing header keeps its original position, so merging
/// overrides into a base set never reorders the base headers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    headers: IndexMap<String, String>,
}

impl HeaderMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Headers every response starts from.
    pub fn defaults() -> Self {
        let mut headers = Self::new();
        headers.insert("Server", "CrudeServer");
        headers.insert("Content-Type", "text/html");
        headers
    }

    /// Adds a header, or replaces the value of one with the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|v| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.headers.contains_key(name)
    }

    /// Returns a copy of `self` with every header of `overrides` applied.
    pub fn merged(&self, overrides: &HeaderMap) -> HeaderMap {
        let mut merged = self.clone();
        for (name, value) in overrides.iter() {
            merged.insert(name, value);
        }
        merged
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_keeps_position() {
        let mut overrides = HeaderMap::new();
        overrides.insert("Content-Type", "image/png");
        overrides.insert("Allow", "OPTIONS, GET");

        let merged = HeaderMap::defaults().merged(&overrides);
        let names: Vec<&str> = merged.iter().map(|(k, _)| k).collect();

        assert_eq!(names, ["Server", "Content-Type", "Allow"]);
        assert_eq!(merged.get("Content-Type"), Some("image/png"));
        assert!(!merged.contains("Content-Length"));
    }
}
