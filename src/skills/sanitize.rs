use std::sync::LazyLock;

use regex::Regex;

/// Longest label we ever produce.
const MAX_NAME_LEN: usize = 255;

/// Substituted when nothing survives sanitization.
pub const UNNAMED_SKILL: &str = "unnamed-skill";

static DISALLOWED_RUN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^a-z0-9._]+").expect("disallowed character regex must compile")
});

/// Turn an arbitrary directory name into a safe display label.
///
/// The result only contains `[a-z0-9._-]`, never starts or ends with `.` or
/// `-`, is at most 255 characters long and is never empty.
pub fn sanitize_name(name: &str) -> String {
    let lowered = name.to_lowercase();
    let replaced = DISALLOWED_RUN_RE.replace_all(&lowered, "-");
    let trimmed = trim_dots_and_hyphens(&replaced);

    // Only ASCII survives the replacement, so byte and char lengths agree.
    let truncated = &trimmed[..trimmed.len().min(MAX_NAME_LEN)];
    let truncated = trim_dots_and_hyphens(truncated);

    if truncated.is_empty() {
        UNNAMED_SKILL.to_string()
    } else {
        truncated.to_string()
    }
}

fn trim_dots_and_hyphens(value: &str) -> &str {
    value.trim_matches(|ch| ch == '.' || ch == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_well_formed(label: &str) {
        assert!(!label.is_empty());
        assert!(label.len() <= MAX_NAME_LEN);
        assert!(label
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || "._-".contains(ch)));
        assert!(!label.starts_with(['.', '-']), "{label}");
        assert!(!label.ends_with(['.', '-']), "{label}");
    }

    #[test]
    fn path_traversal_collapses_to_final_segment() {
        assert_eq!(sanitize_name("../../etc"), "etc");
    }

    #[test]
    fn whitespace_only_falls_back_to_placeholder() {
        assert_eq!(sanitize_name("   "), UNNAMED_SKILL);
        assert_eq!(sanitize_name(""), UNNAMED_SKILL);
        assert_eq!(sanitize_name("..."), UNNAMED_SKILL);
    }

    #[test]
    fn punctuation_runs_become_one_hyphen_and_are_trimmed() {
        assert_eq!(sanitize_name("MyAgent!!"), "myagent");
        assert_eq!(sanitize_name("Hello   World"), "hello-world");
        assert_eq!(sanitize_name("a/b\\c"), "a-b-c");
    }

    #[test]
    fn hidden_directory_names_lose_their_leading_dot() {
        assert_eq!(sanitize_name(".claude"), "claude");
        assert_eq!(sanitize_name(".codeium"), "codeium");
    }

    #[test]
    fn dots_and_underscores_inside_are_kept() {
        assert_eq!(sanitize_name("my_skill.v2"), "my_skill.v2");
    }

    #[test]
    fn non_ascii_is_replaced() {
        let label = sanitize_name("Café Ünïcode");
        assert_well_formed(&label);
        assert_eq!(label, "caf-n-code");
    }

    #[test]
    fn long_names_are_truncated_without_trailing_separator() {
        let label = sanitize_name(&"a".repeat(300));
        assert_eq!(label.len(), MAX_NAME_LEN);

        let tricky = format!("{}-{}", "b".repeat(254), "c".repeat(10));
        let label = sanitize_name(&tricky);
        assert_well_formed(&label);
        assert_eq!(label, "b".repeat(254));
    }

    #[test]
    fn assorted_inputs_are_well_formed() {
        for input in [
            "-lead",
            "trail.",
            "..hidden..",
            "UPPER_case-9",
            "tab\tand\nnewline",
            "emoji 🚀 name",
            "/",
        ] {
            assert_well_formed(&sanitize_name(input));
        }
    }
}
