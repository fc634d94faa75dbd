//! Human-readable names for daemon model tags.

/// Variant suffixes dropped before anything else.
const STRIPPED_SUFFIXES: &[&str] = &["-instruct", "-chat"];

/// Applied in order, each to the output of the previous one. Order matters
/// where patterns overlap.
const FAMILY_REPLACEMENTS: &[(&str, &str)] = &[
    ("llama3.2", "Llama 3.2"),
    ("llama3.1", "Llama 3.1"),
    ("codellama", "Code Llama"),
    ("mistral", "Mistral"),
    ("gemma", "Gemma"),
    ("phi", "Phi"),
    ("qwen", "Qwen"),
    ("neural-chat", "Neural Chat"),
    ("orca-mini", "Orca Mini"),
];

/// Checked against the raw name in this order; the first hit wins. A tag
/// only counts when it isn't the tail of a longer number (`13b` is not `3b`).
const SIZE_TAGS: &[&str] = &["3b", "7b", "8b", "13b", "14b", "34b", "70b", "72b"];

/// Formats a raw daemon model name for display, e.g.
/// `llama3.1-8b-instruct` becomes `Llama 3.1 (8B)`.
pub fn format_display_name(model_name: &str) -> String {
    let mut name = model_name.to_string();
    for suffix in STRIPPED_SUFFIXES {
        name = name.replace(suffix, "");
    }

    for (pattern, replacement) in FAMILY_REPLACEMENTS {
        name = name.replace(pattern, replacement);
    }

    // Size is looked up on the untouched name, not the rewritten one.
    if let Some(size) = find_size_tag(model_name) {
        name = format!("{} ({})", without_size_segments(&name), size.to_uppercase());
    }

    name
}

fn find_size_tag(model_name: &str) -> Option<&'static str> {
    SIZE_TAGS.iter().copied().find(|tag| {
        model_name
            .match_indices(tag)
            .any(|(i, _)| !model_name[..i].ends_with(|c: char| c.is_ascii_digit()))
    })
}

/// Drops `-` / `:` delimited segments that are exactly a size tag, so the
/// size shows up once, in the suffix.
fn without_size_segments(name: &str) -> String {
    let mut kept = String::with_capacity(name.len());
    let mut separator = "";
    let mut pushed_any = false;
    let mut rest = name;
    loop {
        let (segment, tail) = match rest.find(['-', ':']) {
            Some(i) => (&rest[..i], Some((&rest[i..=i], &rest[i + 1..]))),
            None => (rest, None),
        };

        if !SIZE_TAGS.contains(&segment) {
            if pushed_any {
                kept.push_str(separator);
            }
            kept.push_str(segment);
            pushed_any = true;
        }

        match tail {
            Some((sep, remainder)) => {
                separator = sep;
                rest = remainder;
            }
            None => break,
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instruct_suffix_removed_before_family() {
        assert_eq!(format_display_name("llama3.2-instruct"), "Llama 3.2");
    }

    #[test]
    fn test_size_tag_appended() {
        assert_eq!(format_display_name("llama3.1-8b"), "Llama 3.1 (8B)");
        assert_eq!(format_display_name("gemma:7b"), "Gemma (7B)");
    }

    #[test]
    fn test_only_first_size_tag_in_list_order() {
        assert_eq!(format_display_name("mistral-7b-13b"), "Mistral (7B)");
        assert_eq!(format_display_name("codellama-13b"), "Code Llama (13B)");
        assert_eq!(format_display_name("qwen-72b-7b"), "Qwen (7B)");
    }

    #[test]
    fn test_unknown_family_only_strips_suffixes() {
        assert_eq!(format_display_name("unknown-model-instruct"), "unknown-model");
        assert_eq!(format_display_name("starcoder2"), "starcoder2");
    }

    #[test]
    fn test_chat_suffix_stripped_inside_neural_chat() {
        // "-chat" goes first, so the neural-chat rule never matches
        assert_eq!(format_display_name("neural-chat"), "neural");
        assert_eq!(format_display_name("neural-chat-7b"), "neural (7B)");
    }

    #[test]
    fn test_every_family_rule() {
        assert_eq!(format_display_name("codellama"), "Code Llama");
        assert_eq!(format_display_name("mistral"), "Mistral");
        assert_eq!(format_display_name("gemma"), "Gemma");
        assert_eq!(format_display_name("phi"), "Phi");
        assert_eq!(format_display_name("orca-mini"), "Orca Mini");
        assert_eq!(format_display_name("qwen-14b-chat"), "Qwen (14B)");
    }

    #[test]
    fn test_size_checked_against_raw_name() {
        assert_eq!(format_display_name("codellama-34b-instruct"), "Code Llama (34B)");
        assert_eq!(format_display_name("llama3.1:70b-instruct-q4_0"), "Llama 3.1-q4_0 (70B)");
    }

    #[test]
    fn test_size_tag_not_matched_inside_longer_number() {
        assert_eq!(find_size_tag("llama2-13b"), Some("13b"));
        assert_eq!(find_size_tag("mixtral-8x7b"), Some("7b"));
        assert_eq!(find_size_tag("llama3.1-405b"), None);
    }

    #[test]
    fn test_leading_separator_kept() {
        assert_eq!(format_display_name("-x-7b"), "-x (7B)");
        assert_eq!(format_display_name(":x:7b"), ":x (7B)");
        assert_eq!(format_display_name("7b-x"), "x (7B)");
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(format_display_name("Mistral"), "Mistral");
        assert_eq!(format_display_name("LLAMA3.1-8B"), "LLAMA3.1-8B");
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(format_display_name(""), "");
    }
}
