use crate::problem::Problem;

/// Handle into a [`SearchTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
pub struct SearchNode<S, A> {
    pub state: S,
    pub parent: Option<NodeId>,
    pub action: Option<A>, // None only for the root
    pub path_cost: f64,
    pub depth: usize,
}

/// Arena holding every node one search invocation has created.
///
/// A node's parent always has a smaller handle than the node itself, so the
/// parent links form a tree rooted at handle 0.
#[derive(Debug)]
pub struct SearchTree<S, A> {
    nodes: Vec<SearchNode<S, A>>,
}

impl<S, A: Clone> SearchTree<S, A> {
    pub fn new(root: S) -> Self {
        SearchTree {
            nodes: vec![SearchNode {
                state: root,
                parent: None,
                action: None,
                path_cost: 0.0,
                depth: 0,
            }],
        }
    }

    /// Start a tree at the problem's initial state.
    pub fn from_problem<P>(problem: &P) -> Self
    where
        P: Problem<State = S, Action = A>,
        S: Clone,
    {
        Self::new(problem.initial_state().clone())
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn push_child(&mut self, parent: NodeId, action: A, state: S, step_cost: f64) -> NodeId {
        let (path_cost, depth) = {
            let parent_node = &self.nodes[parent.0];
            (parent_node.path_cost + step_cost, parent_node.depth + 1)
        };
        self.nodes.push(SearchNode {
            state,
            parent: Some(parent),
            action: Some(action),
            path_cost,
            depth,
        });
        NodeId(self.nodes.len() - 1)
    }

    pub fn get(&self, id: NodeId) -> &SearchNode<S, A> {
        &self.nodes[id.0]
    }

    pub fn state(&self, id: NodeId) -> &S {
        &self.nodes[id.0].state
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drop every node created after `id`. The root is never released.
    pub fn truncate_after(&mut self, id: NodeId) {
        self.nodes.truncate(id.0 + 1);
    }

    /// Actions leading from the root to `id`, in execution order.
    pub fn solution(&self, id: NodeId) -> Vec<A> {
        let mut actions = Vec::with_capacity(self.nodes[id.0].depth);
        let mut current = id;
        while let Some(parent) = self.nodes[current.0].parent {
            if let Some(action) = &self.nodes[current.0].action {
                actions.push(action.clone());
            }
            current = parent;
        }
        actions.reverse();
        actions
    }
}
