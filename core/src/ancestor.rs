use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

/// Find the earliest ancestor of `starting_node` in a parent→child edge list.
///
/// "Earliest" means maximally distant: the reachable ancestor the most
/// generations back, with depth ties broken toward the smaller vertex ID.
/// Returns `None` when the starting node has no ancestors at all.
///
/// The reversed adjacency map (child → parents) is built fresh from the
/// edge list on every call and discarded afterwards. Input is assumed
/// acyclic; cycles are not guarded against.
pub fn earliest_ancestor<V>(edges: &[(V, V)], starting_node: V) -> Option<V>
where
    V: Clone + Eq + Hash + Ord + Debug,
{
    let parents = reversed_adjacency(edges);

    // Best candidate so far as (vertex, depth): deeper wins, then smaller ID.
    let mut best = (starting_node.clone(), 0usize);

    // Deepest depth each vertex has been expanded at. A vertex is expanded
    // again when reached on a strictly deeper path, so a diamond-shaped
    // pedigree still reports the true most-distant root.
    let mut deepest: HashMap<V, usize> = HashMap::new();
    deepest.insert(starting_node.clone(), 0);
    let mut stack: Vec<(V, usize)> = vec![(starting_node.clone(), 0)];

    while let Some((current, depth)) = stack.pop() {
        match parents.get(&current) {
            // No recorded parents: a root candidate.
            None => {
                if depth > best.1 || (depth == best.1 && current < best.0) {
                    best = (current, depth);
                }
            }
            Some(ancestors) => {
                for ancestor in ancestors {
                    let next = depth + 1;
                    if deepest.get(ancestor).map_or(true, |&seen| next > seen) {
                        deepest.insert(ancestor.clone(), next);
                        stack.push((ancestor.clone(), next));
                    }
                }
            }
        }
    }

    if best.0 == starting_node {
        None
    } else {
        Some(best.0)
    }
}

fn reversed_adjacency<V>(edges: &[(V, V)]) -> HashMap<V, HashSet<V>>
where
    V: Clone + Eq + Hash,
{
    let mut map: HashMap<V, HashSet<V>> = HashMap::new();
    for (ancestor, child) in edges {
        map.entry(child.clone()).or_default().insert(ancestor.clone());
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pedigree() -> Vec<(i64, i64)> {
        vec![
            (1, 3),
            (2, 3),
            (3, 6),
            (5, 6),
            (5, 7),
            (4, 5),
            (4, 8),
            (8, 9),
            (11, 8),
            (10, 8),
        ]
    }

    #[test]
    fn test_earliest_ancestor_known_pedigree() {
        assert_eq!(earliest_ancestor(&pedigree(), 9), Some(4));
        // from 6 the depth-2 candidates are 1, 2 and 4; the tie goes to 1
        assert_eq!(earliest_ancestor(&pedigree(), 6), Some(1));
        assert_eq!(earliest_ancestor(&pedigree(), 7), Some(4));
        assert_eq!(earliest_ancestor(&pedigree(), 8), Some(4));
        assert_eq!(earliest_ancestor(&pedigree(), 3), Some(1));
        assert_eq!(earliest_ancestor(&pedigree(), 5), Some(4));
    }

    #[test]
    fn test_no_ancestors_is_none() {
        assert_eq!(earliest_ancestor(&pedigree(), 1), None);
        assert_eq!(earliest_ancestor(&pedigree(), 4), None);
        assert_eq!(earliest_ancestor(&pedigree(), 11), None);
    }

    #[test]
    fn test_empty_edge_list_is_none() {
        let edges: Vec<(i64, i64)> = Vec::new();
        assert_eq!(earliest_ancestor(&edges, 1), None);
    }

    #[test]
    fn test_tie_break_prefers_smaller_id() {
        let edges = vec![(11, 8), (10, 8), (4, 8)];
        assert_eq!(earliest_ancestor(&edges, 8), Some(4));
    }

    #[test]
    fn test_single_parent_chain() {
        let edges = vec![(1, 2), (2, 3), (3, 4)];
        assert_eq!(earliest_ancestor(&edges, 4), Some(1));
        assert_eq!(earliest_ancestor(&edges, 2), Some(1));
    }

    #[test]
    fn test_deeper_route_beats_direct_parent() {
        // 9 is both a direct parent of 1 and three generations back via
        // 1 ← 2 ← 3 ← 9; the depth-3 route must win over root 8 at depth 2.
        let edges = vec![(9, 1), (2, 1), (3, 2), (9, 3), (4, 1), (8, 4)];
        assert_eq!(earliest_ancestor(&edges, 1), Some(9));
    }

    #[test]
    fn test_string_ids_tie_break_lexicographic() {
        let edges = vec![
            ("beta".to_string(), "kid".to_string()),
            ("alpha".to_string(), "kid".to_string()),
        ];
        assert_eq!(
            earliest_ancestor(&edges, "kid".to_string()),
            Some("alpha".to_string())
        );
    }
}
