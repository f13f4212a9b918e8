use indent_tree::{Address, ChildMode, IndentStyle, IndentTree};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn test_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("outline.txt");

    let tree = IndentTree::new()
        .append_child(Address::ROOT, "a")
        .append_child(Address(1), "b");
    tree.save(&path).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "a\n  b\n");

    let loaded = IndentTree::load(&path).unwrap();
    assert_eq!(loaded, tree);
    assert_eq!(loaded.children_of(Address(1), ChildMode::Direct), vec![Address(2)]);
}

#[test]
fn test_save_empty_tree() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.txt");

    IndentTree::new().save(&path).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    assert!(IndentTree::load(&path).unwrap().is_empty());
}

#[test]
fn test_load_with_style() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tabs.txt");
    std::fs::write(&path, "a\n\tb\n").unwrap();

    let tree = IndentTree::load_with_style(&path, IndentStyle::tabs()).unwrap();

    assert_eq!(tree.style(), IndentStyle::tabs());
    assert_eq!(tree.parent_of(Address(2)), Address(1));
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.txt");

    let error = IndentTree::load(&path).unwrap_err();
    assert!(error.to_string().contains("Failed to read tree"));
}
