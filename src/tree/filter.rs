//! Fixed denylist of noise entries

use glob::Pattern;

/// Names and patterns that never appear in a rendered tree.
pub const DENYLIST_PATTERNS: &[&str] = &["node_modules", ".git", "out", "*.class"];

/// Entry filter built from [`DENYLIST_PATTERNS`].
///
/// Matching is against the bare entry name, never the full path, so the
/// traversal root itself is not subject to the denylist.
#[derive(Debug, Clone)]
pub struct Denylist {
    patterns: Vec<Pattern>,
}

impl Denylist {
    pub fn new() -> Self {
        let patterns = DENYLIST_PATTERNS
            .iter()
            .filter_map(|p| Pattern::new(p).ok())
            .collect();
        Self { patterns }
    }

    /// Check if an entry with this name is excluded from output and recursion.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(name))
    }
}

impl Default for Denylist {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_all_patterns_compile() {
        assert_eq!(Denylist::new().patterns.len(), DENYLIST_PATTERNS.len());
    }

    #[rstest]
    #[case("node_modules", true)]
    #[case(".git", true)]
    #[case("out", true)]
    #[case("Main.class", true)]
    #[case(".class", true)]
    #[case("node_modules_backup", false)]
    #[case(".github", false)]
    #[case(".gitignore", false)]
    #[case("output", false)]
    #[case("OUT", false)]
    #[case("Main.classic", false)]
    #[case("Main.java", false)]
    #[case("src", false)]
    fn test_is_excluded(#[case] name: &str, #[case] excluded: bool) {
        assert_eq!(Denylist::new().is_excluded(name), excluded, "{name}");
    }
}
