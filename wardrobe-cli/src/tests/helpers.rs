//! Test helpers for writing wardrobe files into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Three garments that always combine into a neutral outfit.
pub(super) const NEUTRAL_WARDROBE: &str = r#"[
    {"id": "shirt", "category": "top", "color": "white", "style": "casual"},
    {"id": "jeans", "category": "bottom", "color": "navy", "style": "casual",
     "occasions": ["weekend"]},
    {"id": "sneakers", "category": "shoes", "color": "white", "style": "sport"}
]"#;

/// Create a temporary workspace rooted at a UTF-8 path.
pub(super) fn utf8_workspace() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test file");
}
