//! Name and path patterns accepted by the queries.

/// Function name pattern.
///
/// `*` matches everything, a trailing `*` is a case-sensitive prefix match,
/// anything else matches the whole name ignoring case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamePattern {
    Any,
    Prefix(String),
    Exact(String),
}

impl NamePattern {
    pub fn parse(pattern: &str) -> Self {
        if pattern == "*" {
            return NamePattern::Any;
        }
        match pattern.strip_suffix('*') {
            Some(prefix) => NamePattern::Prefix(prefix.to_string()),
            None => NamePattern::Exact(pattern.to_lowercase()),
        }
    }

    pub fn matches(&self, name: &str) -> bool {
        match self {
            NamePattern::Any => true,
            NamePattern::Prefix(prefix) => name.starts_with(prefix.as_str()),
            NamePattern::Exact(lowered) => name.to_lowercase() == *lowered,
        }
    }
}

/// Import path pattern: `*`, `prefix/*`, or an exact path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathPattern {
    Any,
    Prefix(String),
    Exact(String),
}

impl PathPattern {
    pub fn parse(pattern: &str) -> Self {
        if pattern == "*" {
            return PathPattern::Any;
        }
        match pattern.strip_suffix('*') {
            Some(prefix) => PathPattern::Prefix(prefix.to_string()),
            None => PathPattern::Exact(pattern.to_string()),
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        match self {
            PathPattern::Any => true,
            PathPattern::Prefix(prefix) => path.starts_with(prefix.as_str()),
            PathPattern::Exact(exact) => path == exact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("*", "anything", true)]
    #[case("foo*", "fooBar", true)]
    #[case("foo*", "FooBar", false)]
    #[case("foo", "FOO", true)]
    #[case("foo", "fooBar", false)]
    fn test_name_pattern(#[case] pattern: &str, #[case] name: &str, #[case] expected: bool) {
        assert_eq!(NamePattern::parse(pattern).matches(name), expected);
    }

    #[rstest]
    #[case("*", "fmt", true)]
    #[case("net/*", "net/http", true)]
    #[case("net/*", "net", false)]
    #[case("net/*", "network/x", false)]
    #[case("os", "os", true)]
    #[case("os", "os/exec", false)]
    fn test_path_pattern(#[case] pattern: &str, #[case] path: &str, #[case] expected: bool) {
        assert_eq!(PathPattern::parse(pattern).matches(path), expected);
    }
}
