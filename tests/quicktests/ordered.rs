use ordered_tree::{EmptyTreeError, Tree};

use std::collections::{BTreeSet, HashSet};

/// Builds a tree from `xs` in order, returning it with the distinct values sorted.
fn build<T>(xs: &[T]) -> (Tree<T>, Vec<T>)
where
    T: Ord + Clone,
{
    let tree = xs.iter().cloned().collect();
    let distinct = xs.iter().cloned().collect::<BTreeSet<_>>().into_iter().collect();
    (tree, distinct)
}

quickcheck::quickcheck! {
    fn inorder_is_sorted_and_distinct(xs: Vec<i16>) -> bool {
        let (tree, distinct) = build(&xs);

        tree.inorder_traversal().into_iter().eq(distinct.iter())
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let (tree, _) = build(&xs);

        xs.iter().all(|x| tree.search(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let (tree, _) = build(&xs);
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.search(x))
    }
}

quickcheck::quickcheck! {
    fn duplicate_inserts_change_nothing(xs: Vec<u8>) -> bool {
        let (mut tree, _) = build(&xs);
        let count = tree.count_nodes().ok();
        let preorder = tree.preorder().copied().collect::<Vec<_>>();

        let none_added = xs.iter().all(|x| !tree.insert(*x));

        none_added
            && tree.count_nodes().ok() == count
            && tree.preorder().copied().collect::<Vec<_>>() == preorder
    }
}

quickcheck::quickcheck! {
    fn height_is_bounded(xs: Vec<i32>) -> bool {
        let (tree, distinct) = build(&xs);
        let n = distinct.len();
        if n == 0 {
            return tree.height() == -1;
        }

        // ceil(log2(n + 1)) - 1 is the height of the most compact tree holding n values.
        let lowest = (usize::BITS - n.leading_zeros()) as isize - 1;
        let highest = n as isize - 1;
        (lowest..=highest).contains(&tree.height())
    }
}

quickcheck::quickcheck! {
    fn traversals_visit_every_node(xs: Vec<i32>) -> bool {
        let (tree, _) = build(&xs);
        let Ok(count) = tree.count_nodes() else {
            return xs.is_empty();
        };

        tree.inorder_traversal().len() == count
            && tree.preorder_traversal().len() == count
            && tree.postorder_traversal().len() == count
    }
}

quickcheck::quickcheck! {
    fn min_and_max_bracket_inorder(xs: Vec<String>) -> bool {
        let (tree, _) = build(&xs);
        let inorder = tree.inorder_traversal();

        match (inorder.first(), inorder.last()) {
            (Some(first), Some(last)) => {
                tree.find_min() == Ok(*first) && tree.find_max() == Ok(*last)
            }
            _ => tree.find_min() == Err(EmptyTreeError) && tree.find_max() == Err(EmptyTreeError),
        }
    }
}

quickcheck::quickcheck! {
    fn preorder_rebuilds_same_shape(xs: Vec<i16>) -> bool {
        let (tree, _) = build(&xs);
        let rebuilt: Tree<i16> = tree.preorder().copied().collect();

        rebuilt.render() == tree.render() && rebuilt.postorder().eq(tree.postorder())
    }
}
