use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;

/// Depth-first traversal: visit every vertex reachable from `start`,
/// returning vertices in emission order.
///
/// Stack-based. Duplicates may sit in the stack — visitation is decided at
/// pop time, so each vertex is expanded at most once. Neighbor sets are
/// unordered, so any valid depth-first order may be produced.
///
/// Errors with `UnknownVertex` if `start` is not registered.
pub fn dft<V>(graph: &Graph<V>, start: &V) -> GraphResult<Vec<V>, V>
where
    V: Clone + Eq + Hash + Debug,
{
    ensure_start(graph, start)?;

    let mut visited: HashSet<V> = HashSet::new();
    let mut order = Vec::new();
    let mut stack = vec![start.clone()];

    while let Some(current) = stack.pop() {
        if visited.contains(&current) {
            continue;
        }
        let neighbors = graph.neighbors(&current)?;
        visited.insert(current.clone());
        order.push(current);
        for neighbor in neighbors {
            stack.push(neighbor.clone());
        }
    }

    Ok(order)
}

/// Breadth-first traversal: the FIFO analog of [`dft`], emitting vertices in
/// non-decreasing distance from `start`.
pub fn bft<V>(graph: &Graph<V>, start: &V) -> GraphResult<Vec<V>, V>
where
    V: Clone + Eq + Hash + Debug,
{
    ensure_start(graph, start)?;

    let mut visited: HashSet<V> = HashSet::new();
    let mut order = Vec::new();
    let mut queue: VecDeque<V> = VecDeque::new();
    queue.push_back(start.clone());

    while let Some(current) = queue.pop_front() {
        if visited.contains(&current) {
            continue;
        }
        let neighbors = graph.neighbors(&current)?;
        visited.insert(current.clone());
        order.push(current);
        for neighbor in neighbors {
            queue.push_back(neighbor.clone());
        }
    }

    Ok(order)
}

/// Depth-first search: return the first discovered path from `start` to
/// `goal`, or `None` if the goal is unreachable.
///
/// Stack entries carry the path so far, so reaching the goal yields the
/// walk that got there rather than a bare boolean. The path is not
/// guaranteed shortest — use [`bfs`] for that.
pub fn dfs<V>(graph: &Graph<V>, start: &V, goal: &V) -> GraphResult<Option<Vec<V>>, V>
where
    V: Clone + Eq + Hash + Debug,
{
    ensure_start(graph, start)?;

    let mut visited: HashSet<V> = HashSet::new();
    let mut stack: Vec<(V, Vec<V>)> = vec![(start.clone(), vec![start.clone()])];

    while let Some((current, path)) = stack.pop() {
        if current == *goal {
            return Ok(Some(path));
        }
        if !visited.insert(current.clone()) {
            continue;
        }
        for neighbor in graph.neighbors(&current)? {
            let mut next = path.clone();
            next.push(neighbor.clone());
            stack.push((neighbor.clone(), next));
        }
    }

    Ok(None)
}

/// Breadth-first search: return a shortest path (by edge count) from `start`
/// to `goal`, or `None` if the goal is unreachable.
///
/// Tracks a parent pointer per discovered vertex instead of cloning path
/// vectors into the queue; the path is reconstructed once the goal is seen.
/// Because exploration proceeds in non-decreasing path length, the first
/// path to reach the goal is shortest.
pub fn bfs<V>(graph: &Graph<V>, start: &V, goal: &V) -> GraphResult<Option<Vec<V>>, V>
where
    V: Clone + Eq + Hash + Debug,
{
    ensure_start(graph, start)?;

    if start == goal {
        return Ok(Some(vec![start.clone()]));
    }

    // parent maps discovered vertex → the vertex it was first reached from;
    // the start vertex is its own parent.
    let mut parent: HashMap<V, V> = HashMap::new();
    parent.insert(start.clone(), start.clone());
    let mut queue: VecDeque<V> = VecDeque::new();
    queue.push_back(start.clone());

    while let Some(current) = queue.pop_front() {
        for neighbor in graph.neighbors(&current)? {
            if !parent.contains_key(neighbor) {
                parent.insert(neighbor.clone(), current.clone());
                if neighbor == goal {
                    return Ok(Some(reconstruct_path(&parent, start, goal)));
                }
                queue.push_back(neighbor.clone());
            }
        }
    }

    Ok(None)
}

/// Breadth-first sweep recording one shortest path per reachable vertex.
///
/// The result maps every vertex reachable from `start` — `start` included,
/// as the single-element path — to a shortest path from `start` to it.
/// Unreachable vertices are absent, never mapped to an empty path.
pub fn all_shortest_paths<V>(graph: &Graph<V>, start: &V) -> GraphResult<HashMap<V, Vec<V>>, V>
where
    V: Clone + Eq + Hash + Debug,
{
    ensure_start(graph, start)?;

    let mut parent: HashMap<V, V> = HashMap::new();
    parent.insert(start.clone(), start.clone());
    let mut queue: VecDeque<V> = VecDeque::new();
    queue.push_back(start.clone());

    while let Some(current) = queue.pop_front() {
        for neighbor in graph.neighbors(&current)? {
            if !parent.contains_key(neighbor) {
                parent.insert(neighbor.clone(), current.clone());
                queue.push_back(neighbor.clone());
            }
        }
    }

    // Reconstruct lazily by walking parent pointers back to the start.
    let mut paths = HashMap::with_capacity(parent.len());
    for vertex in parent.keys() {
        paths.insert(vertex.clone(), reconstruct_path(&parent, start, vertex));
    }

    Ok(paths)
}

/// Walk parent pointers from `end` back to `start`, yielding the forward path.
fn reconstruct_path<V>(parent: &HashMap<V, V>, start: &V, end: &V) -> Vec<V>
where
    V: Clone + Eq + Hash,
{
    let mut path = vec![end.clone()];
    let mut current = end.clone();
    while current != *start {
        let prev = parent[&current].clone();
        path.push(prev.clone());
        current = prev;
    }
    path.reverse();
    path
}

/// Recursive counterpart of [`dft`]: same visited-once contract, expressed
/// as self-referential descent with an externally threaded visited set.
///
/// Recursion depth is bounded by the longest simple path from `start`; for
/// graphs deeper than the platform stack allows, use the iterative [`dft`].
pub fn dft_recursive<V>(graph: &Graph<V>, start: &V) -> GraphResult<Vec<V>, V>
where
    V: Clone + Eq + Hash + Debug,
{
    ensure_start(graph, start)?;

    let mut visited: HashSet<V> = HashSet::new();
    let mut order = Vec::new();
    dft_descend(graph, start, &mut visited, &mut order)?;
    Ok(order)
}

fn dft_descend<V>(
    graph: &Graph<V>,
    current: &V,
    visited: &mut HashSet<V>,
    order: &mut Vec<V>,
) -> GraphResult<(), V>
where
    V: Clone + Eq + Hash + Debug,
{
    visited.insert(current.clone());
    order.push(current.clone());
    for neighbor in graph.neighbors(current)? {
        if !visited.contains(neighbor) {
            dft_descend(graph, neighbor, visited, order)?;
        }
    }
    Ok(())
}

/// Recursive counterpart of [`dfs`]: carries the path as the call argument.
///
/// Base cases: the goal is reached (return the path) or no unvisited
/// neighbors remain (return `None` for the caller to keep searching).
/// The same stack-depth constraint as [`dft_recursive`] applies.
pub fn dfs_recursive<V>(graph: &Graph<V>, start: &V, goal: &V) -> GraphResult<Option<Vec<V>>, V>
where
    V: Clone + Eq + Hash + Debug,
{
    ensure_start(graph, start)?;

    let mut visited: HashSet<V> = HashSet::new();
    dfs_descend(graph, start.clone(), vec![start.clone()], goal, &mut visited)
}

fn dfs_descend<V>(
    graph: &Graph<V>,
    current: V,
    path: Vec<V>,
    goal: &V,
    visited: &mut HashSet<V>,
) -> GraphResult<Option<Vec<V>>, V>
where
    V: Clone + Eq + Hash + Debug,
{
    if current == *goal {
        return Ok(Some(path));
    }
    visited.insert(current.clone());
    for neighbor in graph.neighbors(&current)? {
        if !visited.contains(neighbor) {
            let mut next = path.clone();
            next.push(neighbor.clone());
            if let Some(found) = dfs_descend(graph, neighbor.clone(), next, goal, visited)? {
                return Ok(Some(found));
            }
        }
    }
    Ok(None)
}

fn ensure_start<V>(graph: &Graph<V>, start: &V) -> GraphResult<(), V>
where
    V: Clone + Eq + Hash + Debug,
{
    if graph.contains(start) {
        Ok(())
    } else {
        Err(GraphError::UnknownVertex(start.clone()))
    }
}
