use chrono::{DateTime, FixedOffset, Utc};

/// Display offset for rendered dates (UTC+8).
const DISPLAY_OFFSET_SECS: i32 = 8 * 3600;

/// Date format used on listing pages.
const DTF_YMD: &str = "%Y-%m-%d";

/// File extension of `name`, lowercased and including the leading dot.
/// Returns `None` when the name contains no `.` at all; a name ending in
/// `.` yields `Some(".")`.
pub fn extension(name: &str) -> Option<String> {
    let name = name.to_lowercase();
    name.rfind('.').map(|i| name[i..].to_string())
}

/// Whether `items` holds an element equal to `value`, scanning in order.
pub fn contains<T: PartialEq>(items: &[T], value: &T) -> bool {
    items.iter().any(|item| item == value)
}

/// Split a comma-separated field value into its elements.
///
/// Only the emptiness check trims; the split runs on the original string,
/// so elements keep their surrounding spaces. Callers that want trimmed
/// elements trim per element themselves.
pub fn split_comma_list(s: &str) -> Vec<String> {
    if s.trim().is_empty() {
        return Vec::new();
    }

    s.split(',').map(String::from).collect()
}

/// Generate a friendly slug from the given string.
pub fn slugify(s: &str) -> String {
    let slug = deunicode::deunicode_with_tofu(s.trim(), "-")
        .to_lowercase()
        .replace(' ', "-")
        .replace('[', "-")
        .replace(']', "-")
        .replace('"', "-")
        .replace('/', "-")
        .replace('?', "-")
        .replace('&', "-")
        .replace('.', "-")
        .replace('#', "++++")
        .replace("---", "-")
        .replace("--", "-");

    slug
}

/// Format a datetime as Y-M-D in the site display offset.
pub fn dt_ymd(dt: DateTime<Utc>) -> String {
    let offset = FixedOffset::east_opt(DISPLAY_OFFSET_SECS).unwrap();
    dt.with_timezone(&offset).format(DTF_YMD).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn extension_of_names_without_dot_is_none() {
        assert_eq!(extension(""), None);
        assert_eq!(extension("file"), None);
    }

    #[test]
    fn extension_is_lowercased_from_last_dot() {
        assert_eq!(extension("file.TXT"), Some(".txt".to_string()));
        assert_eq!(extension("a.b.c"), Some(".c".to_string()));
    }

    #[test]
    fn extension_of_name_ending_in_dot_is_bare_dot() {
        assert_eq!(extension("noext."), Some(".".to_string()));
    }

    #[test]
    fn contains_scans_in_order() {
        let empty: [i32; 0] = [];
        assert!(!contains(&empty, &7));
        assert!(contains(&[1, 2, 3], &2));
        assert!(!contains(&[1, 2, 3], &4));
        assert!(contains(&["a", "b"], &"a"));
        assert!(!contains(&["1"], &"2"));
    }

    #[test]
    fn split_comma_list_of_blank_input_is_empty() {
        assert_eq!(split_comma_list(""), Vec::<String>::new());
        assert_eq!(split_comma_list("   "), Vec::<String>::new());
    }

    #[test]
    fn split_comma_list_splits_without_trimming_elements() {
        assert_eq!(split_comma_list("a,b,c"), vec!["a", "b", "c"]);
        assert_eq!(split_comma_list(" a, b ,c"), vec![" a", " b ", "c"]);
    }

    #[test]
    fn slugify_hyphenates_and_lowercases() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("  Rust Web  "), "rust-web");
        assert_eq!(slugify("v1.2 notes"), "v1-2-notes");
    }

    #[test]
    fn slugify_keeps_hash_marker() {
        assert_eq!(slugify("C# Guide"), "c++++-guide");
    }

    #[test]
    fn slugify_transliterates_accents() {
        assert_eq!(slugify("Crème Brûlée"), "creme-brulee");
    }

    #[test]
    fn dt_ymd_renders_in_display_offset() {
        let dt = Utc.with_ymd_and_hms(2020, 1, 1, 20, 0, 0).unwrap();
        assert_eq!(dt_ymd(dt), "2020-01-02");

        let dt = Utc.with_ymd_and_hms(2020, 1, 1, 8, 0, 0).unwrap();
        assert_eq!(dt_ymd(dt), "2020-01-01");
    }
}
