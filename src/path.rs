use std::ffi::{OsStr, OsString};
use std::path::{is_separator, Path, PathBuf, MAIN_SEPARATOR_STR};

/// Append a single directory entry `name` to `parent`.
///
/// Inserts exactly one separator unless `parent` already ends with one.
/// Nothing else is normalized: `..` and repeated separators inside `parent`
/// are kept as-is. `name` must not contain a separator.
pub fn join(parent: &Path, name: &OsStr) -> PathBuf {
    let parent = parent.as_os_str();
    let mut joined = OsString::with_capacity(parent.len() + name.len() + 1);
    joined.push(parent);
    if !ends_with_separator(parent) {
        joined.push(MAIN_SEPARATOR_STR);
    }
    joined.push(name);
    PathBuf::from(joined)
}

/// `true` only for the two reserved names `.` and `..`.
///
/// Hidden entries such as `.git` or `..hidden` are ordinary names.
pub fn is_self_or_parent(name: &OsStr) -> bool {
    name == "." || name == ".."
}

fn ends_with_separator(s: &OsStr) -> bool {
    s.as_encoded_bytes().last().is_some_and(|&b| is_separator(b as char))
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn inserts_one_separator() {
        assert_eq!(join(Path::new("src"), OsStr::new("a")), PathBuf::from("src/a"));
    }

    #[test]
    fn keeps_existing_trailing_separator() {
        assert_eq!(join(Path::new("src/"), OsStr::new("a")), PathBuf::from("src/a"));
        assert_eq!(join(Path::new("/"), OsStr::new("etc")), PathBuf::from("/etc"));
    }

    #[test]
    fn does_not_normalize_parent() {
        let joined = join(Path::new("a//b/../c"), OsStr::new("d"));
        assert_eq!(joined.as_os_str(), "a//b/../c/d");
    }

    #[test]
    fn only_dot_and_dotdot_are_reserved() {
        assert!(is_self_or_parent(OsStr::new(".")));
        assert!(is_self_or_parent(OsStr::new("..")));
        assert!(!is_self_or_parent(OsStr::new("..hidden")));
        assert!(!is_self_or_parent(OsStr::new(".git")));
        assert!(!is_self_or_parent(OsStr::new("...")));
    }
}
