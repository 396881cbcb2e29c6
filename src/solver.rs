//! The four state-space search strategies over sliding-tile puzzles.
//!
//! Every strategy shares one expansion primitive: candidate moves are tried
//! in the fixed left, right, up, down order, and a candidate equal to the
//! expanded node's immediate parent is discarded. That single-ancestor check
//! is the *only* revisit guard anywhere in the module. The informed and
//! uniform-cost strategies also keep a closed list of expanded grids, but it
//! is recorded and never consulted, so reaching the same state along two
//! different paths re-explores it. Node-visit counts therefore measure the
//! raw, undeduplicated traversal each discipline produces, which is the
//! quantity the comparison drivers report.
//!
//! Counting convention, uniform across strategies: `nodes_visited` is the
//! number of nodes *expanded* (nodes whose children were generated). The
//! goal test runs once on the root before any expansion and on every
//! candidate child at generation time, so a start one slide from the goal
//! reports exactly one visited node and a root equal to the goal reports
//! zero.
use crate::engine::{Direction, GoalPositions, Grid, Position, DIRECTIONS};
use crate::heuristics::heuristic;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet, VecDeque};
use std::rc::Rc;

/// One explored state: a grid, its blank, its depth from the root, and a
/// back-reference to the node that generated it.
///
/// Children are produced on demand and never stored; the parent link exists
/// so expansion can compare candidates against the immediate ancestor, not
/// for traversal. Depth doubles as path cost because every slide costs 1.
#[derive(Debug)]
pub struct SearchNode {
    grid: Grid,
    blank: Position,
    depth: u32,
    parent: Option<Rc<SearchNode>>,
}

impl SearchNode {
    /// Wraps an initial state as a parentless root node.
    pub fn root(grid: Grid, blank: Position) -> Rc<Self> {
        debug_assert_eq!(grid.value_at(blank.0, blank.1), 0);
        Rc::new(SearchNode {
            grid,
            blank,
            depth: 0,
            parent: None,
        })
    }

    /// Returns this node's grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns this node's depth, which equals its path cost from the root.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Produces the child one slide away in `direction`, or `None` when the
    /// move leaves the board or merely undoes the move that generated this
    /// node (the parent-pruning rule).
    fn child_in(self: &Rc<Self>, direction: Direction) -> Option<Rc<SearchNode>> {
        let (grid, blank) = self.grid.slide(self.blank, direction)?;
        if let Some(parent) = &self.parent {
            if grid == parent.grid {
                return None;
            }
        }
        Some(Rc::new(SearchNode {
            grid,
            blank,
            depth: self.depth + 1,
            parent: Some(Rc::clone(self)),
        }))
    }

    /// Generates all surviving children in the fixed candidate order.
    fn expand(self: &Rc<Self>) -> Vec<Rc<SearchNode>> {
        DIRECTIONS
            .iter()
            .filter_map(|&direction| self.child_in(direction))
            .collect()
    }
}

/// What a strategy reports back: whether the goal was reached and how many
/// nodes it expanded on the way.
///
/// A `solved == false` outcome is a normal result (depth cap reached or
/// frontier exhausted), not an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Whether the goal grid was reached.
    pub solved: bool,
    /// Number of nodes expanded before the search ended.
    pub nodes_visited: u64,
}

/// Frontier entry for the best-first and A* min-queues.
///
/// `BinaryHeap` is a max-heap and makes no ordering promise for equal keys,
/// so the comparison is inverted and a monotone sequence number breaks ties
/// in favor of the earlier-enqueued entry.
struct PrioritizedNode {
    priority: u32,
    sequence: u64,
    node: Rc<SearchNode>,
}

impl PartialEq for PrioritizedNode {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.sequence == other.sequence
    }
}

impl Eq for PrioritizedNode {}

impl Ord for PrioritizedNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for PrioritizedNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Depth-limited depth-first search.
///
/// Children are tried left, right, up, down at every node, short-circuiting
/// as soon as any branch reaches the goal. A node whose depth equals
/// `depth_limit` is never expanded, so the branch dies there without
/// success. The recursion is modelled as an explicit stack of
/// (node, direction-cursor) frames, which keeps deep limits off the call
/// stack while preserving the recursive try-order exactly.
///
/// Incomplete past the limit and not optimal: the first solution found wins,
/// however long its path.
pub fn depth_first_search(root: Rc<SearchNode>, goal: &Grid, depth_limit: u32) -> SearchOutcome {
    if *root.grid() == *goal {
        return SearchOutcome {
            solved: true,
            nodes_visited: 0,
        };
    }
    if depth_limit == 0 {
        return SearchOutcome {
            solved: false,
            nodes_visited: 0,
        };
    }

    struct Frame {
        node: Rc<SearchNode>,
        next_direction: usize,
    }

    let mut nodes_visited = 1u64;
    let mut stack = vec![Frame {
        node: root,
        next_direction: 0,
    }];

    while !stack.is_empty() {
        let top = stack.len() - 1;
        if stack[top].next_direction == DIRECTIONS.len() {
            stack.pop();
            continue;
        }
        let direction = DIRECTIONS[stack[top].next_direction];
        stack[top].next_direction += 1;

        let node = Rc::clone(&stack[top].node);
        if let Some(child) = node.child_in(direction) {
            if *child.grid() == *goal {
                return SearchOutcome {
                    solved: true,
                    nodes_visited,
                };
            }
            if child.depth() < depth_limit {
                nodes_visited += 1;
                stack.push(Frame {
                    node: child,
                    next_direction: 0,
                });
            }
        }
    }

    SearchOutcome {
        solved: false,
        nodes_visited,
    }
}

/// Uniform-cost search.
///
/// Every slide costs 1, so a FIFO frontier already dequeues nodes in
/// nondecreasing path-cost order and the strategy behaves as breadth-first
/// search. Unbounded; optimal when it succeeds. The closed list records
/// every expanded grid but is not consulted (see the module docs).
pub fn uniform_cost_search(root: Rc<SearchNode>, goal: &Grid) -> SearchOutcome {
    if *root.grid() == *goal {
        return SearchOutcome {
            solved: true,
            nodes_visited: 0,
        };
    }

    let mut closed: HashSet<Grid> = HashSet::new();
    let mut frontier: VecDeque<Rc<SearchNode>> = VecDeque::new();
    frontier.push_back(root);
    let mut nodes_visited = 0u64;

    while let Some(node) = frontier.pop_front() {
        nodes_visited += 1;
        closed.insert(node.grid().clone());
        for child in node.expand() {
            if *child.grid() == *goal {
                return SearchOutcome {
                    solved: true,
                    nodes_visited,
                };
            }
            frontier.push_back(child);
        }
    }

    SearchOutcome {
        solved: false,
        nodes_visited,
    }
}

/// Greedy best-first search.
///
/// The frontier is keyed by the heuristic value alone; path cost never
/// enters the priority, so the strategy chases whatever looks closest and
/// is not optimal. Children whose depth would exceed `depth_limit` are not
/// generated at all -- a goal lying just past the cap goes unseen, which
/// makes the strategy incomplete under a tight cap.
pub fn best_first_search(
    root: Rc<SearchNode>,
    goal: &Grid,
    goal_positions: &GoalPositions,
    depth_limit: u32,
) -> SearchOutcome {
    if *root.grid() == *goal {
        return SearchOutcome {
            solved: true,
            nodes_visited: 0,
        };
    }

    let mut closed: HashSet<Grid> = HashSet::new();
    let mut frontier: BinaryHeap<PrioritizedNode> = BinaryHeap::new();
    let mut sequence = 0u64;
    frontier.push(PrioritizedNode {
        priority: heuristic(root.grid(), goal, goal_positions),
        sequence,
        node: root,
    });
    let mut nodes_visited = 0u64;

    while let Some(PrioritizedNode { node, .. }) = frontier.pop() {
        nodes_visited += 1;
        closed.insert(node.grid().clone());
        for child in node.expand() {
            if child.depth() > depth_limit {
                continue;
            }
            if *child.grid() == *goal {
                return SearchOutcome {
                    solved: true,
                    nodes_visited,
                };
            }
            sequence += 1;
            frontier.push(PrioritizedNode {
                priority: heuristic(child.grid(), goal, goal_positions),
                sequence,
                node: child,
            });
        }
    }

    SearchOutcome {
        solved: false,
        nodes_visited,
    }
}

/// A* search.
///
/// The frontier is keyed by heuristic value plus path cost (depth).
/// Unbounded, and optimal as long as the heuristic never overestimates the
/// true remaining cost. Shares the recorded-but-unconsulted closed list and
/// parent-only pruning of the other strategies.
pub fn a_star_search(
    root: Rc<SearchNode>,
    goal: &Grid,
    goal_positions: &GoalPositions,
) -> SearchOutcome {
    if *root.grid() == *goal {
        return SearchOutcome {
            solved: true,
            nodes_visited: 0,
        };
    }

    let mut closed: HashSet<Grid> = HashSet::new();
    let mut frontier: BinaryHeap<PrioritizedNode> = BinaryHeap::new();
    let mut sequence = 0u64;
    frontier.push(PrioritizedNode {
        priority: heuristic(root.grid(), goal, goal_positions),
        sequence,
        node: root,
    });
    let mut nodes_visited = 0u64;

    while let Some(PrioritizedNode { node, .. }) = frontier.pop() {
        nodes_visited += 1;
        closed.insert(node.grid().clone());
        for child in node.expand() {
            if *child.grid() == *goal {
                return SearchOutcome {
                    solved: true,
                    nodes_visited,
                };
            }
            sequence += 1;
            frontier.push(PrioritizedNode {
                priority: heuristic(child.grid(), goal, goal_positions) + child.depth(),
                sequence,
                node: child,
            });
        }
    }

    SearchOutcome {
        solved: false,
        nodes_visited,
    }
}
