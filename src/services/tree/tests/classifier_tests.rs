use crate::services::tree::classifier::{classify, extension_of, is_visible, FileCategory};
use crate::services::tree::types::TreeNode;

#[test]
fn test_category_table() {
    assert_eq!(classify("App.tsx"), FileCategory::Script);
    assert_eq!(classify("theme.scss"), FileCategory::Style);
    assert_eq!(classify("index.html"), FileCategory::Markup);
    assert_eq!(classify("Cargo.toml"), FileCategory::Config);
    assert_eq!(classify("README.md"), FileCategory::Doc);
    assert_eq!(classify("main.rs"), FileCategory::Source);
    assert_eq!(classify("build.gradle"), FileCategory::Source);
    assert_eq!(classify("schema.prisma"), FileCategory::Data);
    assert_eq!(classify("archive.tar.gz"), FileCategory::Default);
}

#[test]
fn test_classification_is_case_insensitive() {
    assert_eq!(classify("Main.JS"), FileCategory::Script);
    assert_eq!(classify("main.js"), FileCategory::Script);
    assert_eq!(classify("SETUP.PY"), FileCategory::Source);
}

#[test]
fn test_only_final_extension_counts() {
    // `config` is checked before `data`, and only `json` is looked at.
    assert_eq!(classify("archive.sql.json"), FileCategory::Config);
    assert_eq!(classify("notes.json.sql"), FileCategory::Data);
}

#[test]
fn test_dotfiles_and_bare_names() {
    assert_eq!(extension_of(".env"), "env");
    assert_eq!(classify(".env"), FileCategory::Config);
    assert_eq!(extension_of("Makefile"), "makefile");
    assert_eq!(classify("Makefile"), FileCategory::Default);
}

#[test]
fn test_images_hidden_directories_never() {
    assert!(!is_visible(&TreeNode::file("logo.PNG")));
    assert!(!is_visible(&TreeNode::file("icon.svg")));
    assert!(!is_visible(&TreeNode::file("scan.tiff")));
    assert!(is_visible(&TreeNode::file("logo.png.txt")));
    assert!(is_visible(&TreeNode::directory("images.png", vec![])));
}
