//! Ordering properties of every strategy over generated trees

use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};

use dirwalk::Strategy as WalkStrategy;
use dirwalk::test_utils::TestTree;
use dirwalk::{Entry, TreeWalker, WalkerConfig};
use proptest::prelude::*;

/// Each element is a chain of directories with an optional file at its end.
/// Directories are named `dN` and files `fN`, so the two never collide.
type Layout = Vec<(Vec<u8>, Option<u8>)>;

fn layout() -> impl Strategy<Value = Layout> {
    prop::collection::vec(
        (
            prop::collection::vec(0u8..3, 0..4),
            prop::option::of(0u8..3),
        ),
        0..12,
    )
}

/// Create the layout on disk and return every path relative to the root,
/// the root itself being the empty path.
fn build(layout: &Layout) -> (TestTree, BTreeSet<PathBuf>) {
    let tree = TestTree::new();
    let mut expected = BTreeSet::from([PathBuf::new()]);

    for (dirs, file) in layout {
        let mut rel = PathBuf::new();
        for d in dirs {
            rel.push(format!("d{d}"));
            expected.insert(rel.clone());
        }
        tree.add_dir(&rel.to_string_lossy());
        if let Some(f) = file {
            let file_rel = rel.join(format!("f{f}"));
            tree.add_file(&file_rel.to_string_lossy(), "");
            expected.insert(file_rel);
        }
    }

    (tree, expected)
}

fn walk(root: &Path, strategy: WalkStrategy) -> Vec<Entry> {
    let mut entries: Vec<Entry> = Vec::new();
    TreeWalker::new(WalkerConfig::with_strategy(strategy))
        .walk(root, &mut entries)
        .expect("walk should succeed");
    entries
}

fn relative(root: &Path, entries: &[Entry]) -> Vec<PathBuf> {
    entries
        .iter()
        .map(|e| e.path.strip_prefix(root).unwrap().to_path_buf())
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn every_strategy_visits_each_entry_once(layout in layout()) {
        let (tree, expected) = build(&layout);

        for strategy in [WalkStrategy::Recursive, WalkStrategy::Stack, WalkStrategy::Queue] {
            let visited = relative(tree.path(), &walk(tree.path(), strategy));
            let unique: BTreeSet<PathBuf> = visited.iter().cloned().collect();
            prop_assert_eq!(unique.len(), visited.len(), "{:?} repeated an entry", strategy);
            prop_assert_eq!(&unique, &expected);
        }
    }

    #[test]
    fn stack_output_equals_recursive_output(layout in layout()) {
        let (tree, _) = build(&layout);

        let recursive = walk(tree.path(), WalkStrategy::Recursive);
        let stack = walk(tree.path(), WalkStrategy::Stack);
        prop_assert_eq!(recursive, stack);
    }

    #[test]
    fn depth_first_visits_parent_before_descendants(layout in layout()) {
        let (tree, _) = build(&layout);

        let visited = relative(tree.path(), &walk(tree.path(), WalkStrategy::Recursive));
        let position: HashMap<&Path, usize> = visited
            .iter()
            .enumerate()
            .map(|(i, p)| (p.as_path(), i))
            .collect();

        prop_assert_eq!(position[Path::new("")], 0);
        for (i, path) in visited.iter().enumerate() {
            if let Some(parent) = path.parent() {
                prop_assert!(position[parent] < i, "{:?} before its parent", path);
            }
        }
    }

    #[test]
    fn queue_visits_level_by_level(layout in layout()) {
        let (tree, _) = build(&layout);

        let entries = walk(tree.path(), WalkStrategy::Queue);
        for pair in entries.windows(2) {
            prop_assert!(pair[0].depth <= pair[1].depth);
        }
    }
}
