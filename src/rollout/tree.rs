use super::node::Node;
use super::RolloutError;
use log::trace;
use rand::Rng;

/// Builds a perfect tree with `max_depth` levels below the root.
///
/// Every node closer to the root than `max_depth` has exactly `fanout`
/// children; nodes at `max_depth` are terminal. Names encode the branch
/// path, so the output is fully determined by the two arguments.
pub fn build_tree(max_depth: usize, fanout: usize) -> Result<Node, RolloutError> {
    if fanout < 1 {
        return Err(RolloutError::InvalidConfiguration(format!(
            "fanout must be at least 1, got {}",
            fanout
        )));
    }
    Ok(generate(max_depth, 0, String::new(), fanout))
}

fn generate(max_depth: usize, cur_depth: usize, name: String, fanout: usize) -> Node {
    let mut node = Node::new(name);
    if cur_depth >= max_depth {
        return node;
    }
    for i in 0..fanout {
        let child_name = if node.name.is_empty() {
            i.to_string()
        } else {
            format!("{}.{}", node.name, i)
        };
        node.children
            .push(generate(max_depth, cur_depth + 1, child_name, fanout));
    }
    node
}

/// Assigns a static value to every terminal node from its horizontal
/// position.
///
/// Terminal nodes are taken left to right; each receives
/// `value_fn(h_index / terminal_count)`, a ratio in `[0, 1)`. Only terminal
/// nodes are touched. Fails on trees wider than binary, where the h-index
/// encoding is undefined.
pub fn assign_terminal_values<F>(tree: &mut Node, value_fn: F) -> Result<(), RolloutError>
where
    F: Fn(f64) -> f64,
{
    let widest = max_fanout(tree);
    if widest > 2 {
        return Err(RolloutError::UnsupportedFanout(widest));
    }
    let terminal_count = count_terminals(tree);
    apply_terminal_values(tree, terminal_count, &value_fn);
    Ok(())
}

fn max_fanout(node: &Node) -> usize {
    node.children
        .iter()
        .map(max_fanout)
        .max()
        .unwrap_or(0)
        .max(node.children.len())
}

fn count_terminals(node: &Node) -> usize {
    if node.is_terminal() {
        return 1;
    }
    node.children.iter().map(count_terminals).sum()
}

fn apply_terminal_values<F>(node: &mut Node, terminal_count: usize, value_fn: &F)
where
    F: Fn(f64) -> f64,
{
    if node.is_terminal() {
        node.accumulated_value = value_fn(node.h_index() as f64 / terminal_count as f64);
        return;
    }
    for child in node.children.iter_mut() {
        apply_terminal_values(child, terminal_count, value_fn);
    }
}

/// One simulated rollout: a uniform random walk from the root of `tree` to a
/// terminal node, with the terminal's value propagated back up the walked
/// path.
///
/// Operates on a fresh deep copy and returns it; the argument keeps its
/// statistics, so callers can hold on to every snapshot. Every node on the
/// path gains a visit and `last_traversed`; non-terminal path nodes also add
/// the reached terminal's value to their accumulated value. The terminal
/// keeps its static value. A terminal root is a valid walk of length one.
pub fn traverse_random<R: Rng>(tree: &Node, rng: &mut R) -> Node {
    let mut copy = tree.clone();
    reset_last_traversed(&mut copy);

    let mut path: Vec<usize> = Vec::new();
    let final_value = {
        let mut cur = &copy;
        while !cur.is_terminal() {
            // Randomly select a child
            let pick = (rng.gen::<f64>() * cur.children.len() as f64) as usize;
            path.push(pick);
            cur = &cur.children[pick];
        }
        trace!(
            "rollout reached {:?} with value {}",
            cur.name,
            cur.accumulated_value
        );
        cur.accumulated_value
    };

    let mut cur = &mut copy;
    for pick in path {
        cur.last_traversed = true;
        cur.visit_count += 1;
        cur.accumulated_value += final_value;
        cur = &mut cur.children[pick];
    }
    cur.last_traversed = true;
    cur.visit_count += 1;

    copy
}

fn reset_last_traversed(node: &mut Node) {
    node.last_traversed = false;
    for child in node.children.iter_mut() {
        reset_last_traversed(child);
    }
}
