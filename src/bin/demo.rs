//! Demonstration driver: builds a small tree, prints its in-order traversal, clones the
//! subtree rooted at a searched-for value, and prints the tree one line per level.

use linked_bst::linked::Tree;

fn main() {
    let mut tree = Tree::new();
    for value in [123, 65, 78, 126, 125, 234] {
        tree.insert(value);
    }

    println!("Inorder: {}", join(&tree.inorder()));
    println!();

    let subtree = tree.find(&126).expect("the demo inserted 126").deep_clone();
    println!("Inorder: {}", join(&subtree.inorder()));
    println!();

    for (depth, level) in tree.levels().iter().enumerate() {
        println!("Level {} nodes: {}", depth + 1, join(level));
    }
}

fn join(values: &[&i32]) -> String {
    values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
