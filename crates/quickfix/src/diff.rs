//! Single-hunk unified diff for previewing fixes.

use std::path::Path;

use colored::Colorize;

/// Unchanged lines shown around the change.
const CONTEXT_LINES: usize = 3;

/// The changed region of a file, as line indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Hunk {
    /// First line shown (context included).
    start: usize,
    /// First changed line.
    changed: usize,
    /// Lines after the change shared by both versions.
    suffix: usize,
}

/// Locate the region between the common prefix and suffix of two files.
pub(crate) fn diff_hunk(before: &[&str], after: &[&str]) -> Option<Hunk> {
    let changed = before
        .iter()
        .zip(after)
        .take_while(|(a, b)| a == b)
        .count();
    if changed == before.len() && changed == after.len() {
        return None;
    }
    let suffix = before[changed..]
        .iter()
        .rev()
        .zip(after[changed..].iter().rev())
        .take_while(|(a, b)| a == b)
        .count();
    Some(Hunk {
        start: changed.saturating_sub(CONTEXT_LINES),
        changed,
        suffix,
    })
}

/// Print the difference between `original` and `fixed`.
pub(crate) fn print_diff(path: &Path, original: &str, fixed: &str) {
    let before: Vec<&str> = original.lines().collect();
    let after: Vec<&str> = fixed.lines().collect();
    let Some(hunk) = diff_hunk(&before, &after) else {
        return;
    };
    let removed_end = before.len() - hunk.suffix;
    let added_end = after.len() - hunk.suffix;
    let trailing = hunk.suffix.min(CONTEXT_LINES);

    println!("--- a/{}", path.display());
    println!("+++ b/{}", path.display());
    println!(
        "@@ -{},{} +{},{} @@",
        hunk.start + 1,
        removed_end + trailing - hunk.start,
        hunk.start + 1,
        added_end + trailing - hunk.start
    );
    for line in &before[hunk.start..hunk.changed] {
        println!(" {line}");
    }
    for line in &before[hunk.changed..removed_end] {
        println!("{}", format!("-{line}").red());
    }
    for line in &after[hunk.changed..added_end] {
        println!("{}", format!("+{line}").green());
    }
    for line in &before[removed_end..removed_end + trailing] {
        println!(" {line}");
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_identical_files() {
        assert_eq!(diff_hunk(&["a", "b"], &["a", "b"]), None);
    }

    #[test]
    fn test_change_in_the_middle() {
        let before = ["1", "2", "3", "4", "var x = 1;", "6", "7"];
        let after = ["1", "2", "3", "4", "let x = 1;", "6", "7"];
        assert_eq!(
            diff_hunk(&before, &after),
            Some(Hunk {
                start: 1,
                changed: 4,
                suffix: 2
            })
        );
    }

    #[test]
    fn test_inserted_line() {
        let before = ["var x = 1;"];
        let after = ["// deno-lint-ignore no-var", "var x = 1;"];
        assert_eq!(
            diff_hunk(&before, &after),
            Some(Hunk {
                start: 0,
                changed: 0,
                suffix: 1
            })
        );
    }
}
