use anyhow::Result;
use indent_tree::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    // An outline with one nested section
    let style = IndentStyle::default();
    let tree = IndentTree::from_text_strict(
        "project\n  src\n    lib.rs\n    main.rs\n  docs\n    guide.md",
        style,
    )?;

    println!("Original outline:");
    print_tree(&tree);

    // Copy `src` (with everything below it) under `docs`
    let src = Address(2);
    let docs = tree
        .children(Address(1), ChildMode::Direct)
        .find(|&child| tree.label(child) == "docs")
        .unwrap_or(Address::ROOT);
    let subtree = tree.read_node(src, ReadMode::WithDescendants);
    println!("\nDedented subtree of {}:\n{}", tree.label(src), subtree);

    let tree = tree.append_child(docs, &subtree);
    println!("\nAfter grafting under {}:", tree.label(docs));
    print_tree(&tree);

    // Structure is still consistent after the graft
    tree.validate()?;
    for address in tree.children_of(docs, ChildMode::Direct) {
        println!(
            "  child of docs: {} (line {}, parent {})",
            tree.label(address),
            address,
            tree.parent_of(address)
        );
    }

    Ok(())
}

fn print_tree(tree: &IndentTree) {
    for visit in tree.walk() {
        println!(
            "{:indent$}{}. {}{}",
            "",
            visit.sibling_index,
            visit.label,
            if visit.is_leaf { "" } else { "/" },
            indent = (visit.depth - 1) * 4
        );
    }
}
