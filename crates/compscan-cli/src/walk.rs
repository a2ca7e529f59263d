//! Source-file discovery for `compscan scan`.
//!
//! Walks with the `ignore` crate: `.gitignore` and the configured custom
//! ignore file (`.compscanignore` by default) are honored in every directory,
//! `.git/` is always skipped, and test/spec/story files are skipped unless
//! disabled. Entries come back sorted by file name so output order is stable.

use std::path::{Path, PathBuf};

use compscan_config::ScanConfig;
use ignore::WalkBuilder;

const TEST_DIRS: &[&str] = &["__tests__", "__mocks__", "node_modules"];

const TEST_FILE_MARKERS: &[&str] = &[".test.", ".spec.", ".stories."];

/// Directory names that only hold tests, mocks, or vendored packages.
#[must_use]
pub fn is_test_dir(dir_name: &str) -> bool {
    TEST_DIRS.contains(&dir_name)
}

/// `Button.test.tsx`, `form.spec.jsx`, `Card.stories.tsx` and friends.
/// Case-insensitive.
#[must_use]
pub fn is_test_file(file_name: &str) -> bool {
    let name = file_name.to_lowercase();
    TEST_FILE_MARKERS.iter().any(|marker| name.contains(marker))
}

/// Build a walker over `root` (a directory or a single file).
pub fn build_walker(root: &Path, ignore_file: &str, skip_tests: bool) -> ignore::Walk {
    let mut builder = WalkBuilder::new(root);

    // Hidden files stay visible; .gitignore still prunes build output.
    builder.hidden(false);
    builder.require_git(false);
    builder.add_custom_ignore_filename(ignore_file);
    builder.sort_by_file_name(|a, b| a.cmp(b));

    builder.filter_entry(move |entry| {
        let file_name = entry.file_name().to_string_lossy();
        let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
        if is_dir && file_name == ".git" {
            return false;
        }
        if !skip_tests {
            return true;
        }
        if is_dir {
            !is_test_dir(&file_name)
        } else {
            !is_test_file(&file_name)
        }
    });

    builder.build()
}

/// Every file under `root` whose extension the scan configuration accepts.
///
/// Unreadable directory entries are logged and skipped.
#[must_use]
pub fn collect_source_files(root: &Path, config: &ScanConfig) -> Vec<PathBuf> {
    build_walker(root, &config.ignore_file, config.skip_tests)
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(error) => {
                tracing::warn!(%error, "skipping unreadable entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
        .map(ignore::DirEntry::into_path)
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| config.accepts_extension(ext))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;

    fn create_fixture(dir: &Path) {
        let dirs = [
            "src/components",
            "src/components/__tests__",
            "src/__mocks__",
            "node_modules/react",
            "build",
            ".storybook",
            ".git/objects",
        ];
        for d in &dirs {
            fs::create_dir_all(dir.join(d)).expect("mkdir should succeed");
        }

        let files = [
            ("src/App.tsx", "export const App = () => <main />;"),
            ("src/components/Button.tsx", "export const Button = () => <button />;"),
            ("src/components/Button.test.tsx", "test('x', () => {});"),
            ("src/components/Button.stories.tsx", "export default {};"),
            ("src/components/Card.jsx", "export const Card = () => <a />;"),
            ("src/components/__tests__/Card.tsx", "it('x', () => {});"),
            ("src/__mocks__/api.tsx", "export const api = {};"),
            ("src/util.ts", "export const x = 1;"),
            ("node_modules/react/index.tsx", "export {};"),
            ("build/App.tsx", "compiled"),
            (".storybook/preview.tsx", "export const p = {};"),
            (".git/objects/blob.tsx", "binary"),
            (".gitignore", "build/\n"),
        ];
        for (path, content) in &files {
            fs::write(dir.join(path), content).expect("write should succeed");
        }
    }

    fn relative(root: &Path, files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|p| {
                p.strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn test_name_predicates() {
        assert!(is_test_file("Button.test.tsx"));
        assert!(is_test_file("form.SPEC.jsx"));
        assert!(is_test_file("Card.stories.tsx"));
        assert!(!is_test_file("Contest.tsx"));
        assert!(is_test_dir("__tests__"));
        assert!(is_test_dir("node_modules"));
        assert!(!is_test_dir("tests-utils"));
    }

    #[test]
    fn default_scan_skips_tests_ignored_and_foreign_files() {
        let tmp = tempfile::tempdir().unwrap();
        create_fixture(tmp.path());

        let files = collect_source_files(tmp.path(), &ScanConfig::default());
        assert_eq!(
            relative(tmp.path(), &files),
            vec![
                ".storybook/preview.tsx",
                "src/App.tsx",
                "src/components/Button.tsx",
                "src/components/Card.jsx",
            ]
        );
    }

    #[test]
    fn disabling_skip_tests_keeps_test_files() {
        let tmp = tempfile::tempdir().unwrap();
        create_fixture(tmp.path());

        let config = ScanConfig {
            skip_tests: false,
            ..ScanConfig::default()
        };
        let files = relative(tmp.path(), &collect_source_files(tmp.path(), &config));
        assert!(files.contains(&"src/components/Button.test.tsx".to_string()));
        assert!(files.contains(&"src/components/__tests__/Card.tsx".to_string()));
        assert!(files.contains(&"node_modules/react/index.tsx".to_string()));
        assert!(!files.iter().any(|f| f.starts_with("build/")));
        assert!(!files.iter().any(|f| f.starts_with(".git/")));
    }

    #[test]
    fn custom_ignore_file_is_honored() {
        let tmp = tempfile::tempdir().unwrap();
        create_fixture(tmp.path());
        fs::write(tmp.path().join(".compscanignore"), ".storybook/\nCard.jsx\n")
            .expect("write ignore file");

        let files = relative(
            tmp.path(),
            &collect_source_files(tmp.path(), &ScanConfig::default()),
        );
        assert_eq!(files, vec!["src/App.tsx", "src/components/Button.tsx"]);
    }

    #[test]
    fn extension_list_narrows_results() {
        let tmp = tempfile::tempdir().unwrap();
        create_fixture(tmp.path());

        let config = ScanConfig {
            extensions: vec!["jsx".to_string()],
            ..ScanConfig::default()
        };
        let files = relative(tmp.path(), &collect_source_files(tmp.path(), &config));
        assert_eq!(files, vec!["src/components/Card.jsx"]);
    }

    #[test]
    fn single_file_root_is_returned() {
        let tmp = tempfile::tempdir().unwrap();
        create_fixture(tmp.path());

        let file = tmp.path().join("src/App.tsx");
        let files = collect_source_files(&file, &ScanConfig::default());
        assert_eq!(files, vec![file]);
    }
}
