//! Link extraction from HTML pages

use lazy_static::lazy_static;
use regex::Regex;
use std::path::{Component, Path, PathBuf};

lazy_static! {
    static ref ANCHOR_HREF_RE: Regex =
        Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).unwrap();
}

/// Extract outbound link targets from page content.
///
/// Targets are resolved against the directory of `source_path` so they can
/// be compared with corpus-relative page ids. Absolute URLs and in-page
/// fragments are skipped. Duplicates are kept; the corpus collapses them.
pub fn extract_links(content: &str, source_path: &str) -> Vec<String> {
    ANCHOR_HREF_RE
        .captures_iter(content)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str())
        .filter(|target| !is_external(target) && !target.starts_with('#') && !target.is_empty())
        .map(|target| normalize_path(target, source_path))
        .collect()
}

fn is_external(target: &str) -> bool {
    target.starts_with("http://") || target.starts_with("https://") || target.starts_with("mailto:")
}

/// Resolve a relative link target to a corpus-relative path
fn normalize_path(target: &str, source_path: &str) -> String {
    let source_dir = Path::new(source_path).parent().unwrap_or(Path::new(""));

    let target_path = Path::new(target);
    let resolved = if target_path.is_relative() {
        source_dir.join(target_path)
    } else {
        target_path.to_path_buf()
    };

    normalize_pathbuf(&resolved).to_string_lossy().to_string()
}

fn normalize_pathbuf(path: &Path) -> PathBuf {
    let mut components = Vec::new();

    for component in path.components() {
        match component {
            Component::ParentDir => {
                components.pop();
            }
            Component::CurDir => {}
            _ => components.push(component.as_os_str()),
        }
    }

    components.iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_anchor_links() {
        let content = r#"<html><body>
            <a href="2.html">Two</a>
            <a class="nav" href="3.html">Three</a>
            <a
               href="4.html">Four</a>
        </body></html>"#;
        let links = extract_links(content, "1.html");
        assert_eq!(links, vec!["2.html", "3.html", "4.html"]);
    }

    #[test]
    fn test_skips_external_and_fragments() {
        let content = r##"<a href="https://example.com">x</a> <a href="#top">y</a> <a href="ok.html">z</a>"##;
        assert_eq!(extract_links(content, "page.html"), vec!["ok.html"]);
    }

    #[test]
    fn test_ignores_non_anchor_hrefs() {
        let content = r#"<link href="style.css"> <a name="x">no href</a>"#;
        assert!(extract_links(content, "page.html").is_empty());
    }

    #[test]
    fn test_resolves_relative_to_source_dir() {
        let content = r#"<a href="../index.html">up</a> <a href="./sibling.html">side</a>"#;
        let links = extract_links(content, "guide/intro.html");
        assert_eq!(links, vec!["index.html", "guide/sibling.html"]);
    }
}
