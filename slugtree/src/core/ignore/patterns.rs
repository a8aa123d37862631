// src/core/ignore/patterns.rs
use anyhow::{Context as _, Result, anyhow, bail};
use glob::{MatchOptions, Pattern};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

#[derive(Debug)]
struct Rule {
    glob: Pattern,
    /// `!pattern`: re-includes what an earlier rule excluded.
    negated: bool,
    /// `pattern/`: only matches directories.
    dir_only: bool,
}

/// Gitignore-style patterns read from a `.slugtreeignore` file.
///
/// Paths are matched relative to the tree root with `/` separators. The last
/// rule matching a path decides; a path no rule mentions inherits the
/// decision of its closest ancestor directory.
#[derive(Debug, Default)]
pub struct IgnorePatterns {
    rules: Vec<Rule>,
}

impl IgnorePatterns {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Adds one line of an ignore file.
    ///
    /// Supported forms:
    /// - blank lines and `#` comments (skipped)
    /// - `!pattern` negation
    /// - `dir/` directory-only patterns
    /// - `/pattern` anchored at the root
    /// - `**` globstars and `*.{md,txt}` alternative groups
    ///
    /// A pattern without a slash matches at any depth.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern has unbalanced braces or invalid glob
    /// syntax.
    pub fn add_line(&mut self, line: &str) -> Result<()> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }

        let (body, negated) = line
            .strip_prefix('!')
            .map_or((line, false), |rest| (rest, true));
        let (body, dir_only) = body
            .strip_suffix('/')
            .map_or((body, false), |rest| (rest, true));
        let (body, anchored) = body
            .strip_prefix('/')
            .map_or((body, false), |rest| (rest, true));
        if body.is_empty() {
            return Ok(());
        }

        for expanded in expand_braces(body)? {
            let glob = if anchored || expanded.contains('/') {
                expanded
            } else {
                format!("**/{expanded}")
            };
            let compiled = Pattern::new(&glob)
                .with_context(|| format!("Invalid ignore pattern: {line}"))?;
            self.rules.push(Rule {
                glob: compiled,
                negated,
                dir_only,
            });
        }
        Ok(())
    }

    /// Returns `true` if `relative` (a root-relative, `/`-separated path)
    /// is excluded. `is_dir` tells whether the last component is a directory.
    #[must_use]
    pub fn matches(&self, relative: &str, is_dir: bool) -> bool {
        if self.rules.is_empty() {
            return false;
        }

        let relative = relative.trim_matches('/');
        let mut ignored = false;
        let mut prefix_end: usize = 0;

        // Ancestors are directories; their verdict carries down unless a
        // rule speaks about the deeper path.
        for (index, component) in relative.split('/').enumerate() {
            if index > 0 {
                prefix_end = prefix_end.saturating_add(1);
            }
            prefix_end = prefix_end.saturating_add(component.len());
            let prefix = relative.get(..prefix_end).unwrap_or(relative);
            let prefix_is_dir = is_dir || prefix_end < relative.len();

            if let Some(verdict) = self.verdict(prefix, prefix_is_dir) {
                ignored = verdict;
            }
        }
        ignored
    }

    fn verdict(&self, path: &str, is_dir: bool) -> Option<bool> {
        self.rules
            .iter()
            .rev()
            .find(|rule| (is_dir || !rule.dir_only) && rule.glob.matches_with(path, MATCH_OPTIONS))
            .map(|rule| !rule.negated)
    }
}

/// Expands `{a,b}` groups into one pattern per alternative.
fn expand_braces(pattern: &str) -> Result<Vec<String>> {
    let Some((prefix, rest)) = pattern.split_once('{') else {
        if pattern.contains('}') {
            bail!("Invalid ignore pattern: unmatched '}}' in {pattern}");
        }
        return Ok(vec![pattern.to_owned()]);
    };
    if prefix.contains('}') {
        bail!("Invalid ignore pattern: unmatched '}}' in {pattern}");
    }
    let (alternatives, suffix) = rest
        .split_once('}')
        .ok_or_else(|| anyhow!("Invalid ignore pattern: unmatched '{{' in {pattern}"))?;

    let tails = expand_braces(suffix)?;
    let mut expanded = Vec::new();
    for alternative in alternatives.split(',').map(str::trim) {
        for tail in &tails {
            expanded.push(format!("{prefix}{alternative}{tail}"));
        }
    }
    Ok(expanded)
}
