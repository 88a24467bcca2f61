//! Solution trees.
//!
//! A [`SolutionTree`] records the explored states that lead to a solution.
//! Every leaf is a solved state and every inner node has at least one
//! child, so following the first child from the root always ends at a
//! solution.
//!
//! Nodes live in an arena owned by the tree. Children are listed by id in
//! the order the search found them; the parent id is a plain back-reference
//! used to rebuild paths.
//!
//! Two trees are equal when their roots hold equal states and their
//! children can be paired off into equal subtrees, in any order.

/// Index of a node within its tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct Node<P> {
    state: P,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Explored states leading from an initial state to solutions
#[derive(Debug, Clone)]
pub struct SolutionTree<P> {
    nodes: Vec<Node<P>>,
    root: NodeId,
}

/// Bottom-up construction of a [`SolutionTree`]: children are added before
/// the node that owns them.
#[derive(Debug)]
pub(crate) struct TreeBuilder<P> {
    nodes: Vec<Node<P>>,
}

impl<P> TreeBuilder<P> {
    pub(crate) fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Add a solved state
    pub(crate) fn leaf(&mut self, state: P) -> NodeId {
        self.branch(state, Vec::new())
    }

    /// Add a state owning already-built `children`
    pub(crate) fn branch(&mut self, state: P, children: Vec<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        for child in &children {
            self.nodes[child.0].parent = Some(id);
        }
        self.nodes.push(Node {
            state,
            parent: None,
            children,
        });
        id
    }

    pub(crate) fn finish(self, root: NodeId) -> SolutionTree<P> {
        SolutionTree {
            nodes: self.nodes,
            root,
        }
    }
}

impl<P> SolutionTree<P> {
    /// A tree holding one already-solved state
    pub fn single(state: P) -> Self {
        let mut builder = TreeBuilder::new();
        let root = builder.leaf(state);
        builder.finish(root)
    }

    /// A tree that is a single path, first state at the root.
    ///
    /// Returns `None` for an empty path.
    pub fn chain(path: Vec<P>) -> Option<Self> {
        let mut builder = TreeBuilder::new();
        let mut below: Option<NodeId> = None;
        for state in path.into_iter().rev() {
            let children = below.into_iter().collect();
            below = Some(builder.branch(state, children));
        }
        below.map(|root| builder.finish(root))
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn state(&self, id: NodeId) -> &P {
        &self.nodes[id.0].state
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.nodes[id.0].children.is_empty()
    }

    /// Number of nodes in the tree
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges on the longest root-to-leaf path
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self.root, 0)];
        while let Some((id, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(self.children(id).iter().map(|&child| (child, depth + 1)));
        }
        deepest
    }

    /// All nodes with their states, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &P)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId(i), &node.state))
    }

    /// Leaf reached by taking the first child at every level
    pub fn solution_leaf(&self) -> NodeId {
        let mut id = self.root;
        while let Some(&first) = self.children(id).first() {
            id = first;
        }
        id
    }

    /// States from the root to [`solution_leaf`](Self::solution_leaf)
    pub fn solution_path(&self) -> Vec<&P> {
        self.path_to(self.solution_leaf())
    }

    /// States from the root to `id`, rebuilt from parent references
    pub fn path_to(&self, id: NodeId) -> Vec<&P> {
        let mut path = vec![self.state(id)];
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            path.push(self.state(parent));
            current = parent;
        }
        path.reverse();
        path
    }

    /// Number of moves on the solution path
    pub fn solution_len(&self) -> usize {
        self.path_to(self.solution_leaf()).len() - 1
    }

    /// Take ownership of the states on the solution path
    pub fn into_solution(self) -> Vec<P> {
        let mut ids = Vec::new();
        let mut current = Some(self.solution_leaf());
        while let Some(id) = current {
            ids.push(id);
            current = self.parent(id);
        }

        let mut slots: Vec<Option<P>> = self.nodes.into_iter().map(|n| Some(n.state)).collect();
        ids.iter().rev().filter_map(|id| slots[id.0].take()).collect()
    }
}

impl<P: PartialEq> SolutionTree<P> {
    /// Compare the subtree at `a` with the subtree of `other` at `b`.
    ///
    /// Single-child runs are walked in a loop so long solution chains do
    /// not recurse.
    fn subtree_eq(&self, mut a: NodeId, other: &Self, mut b: NodeId) -> bool {
        loop {
            if self.state(a) != other.state(b) {
                return false;
            }
            let (ours, theirs) = (self.children(a), other.children(b));
            if ours.len() != theirs.len() {
                return false;
            }
            match ours {
                [] => return true,
                [only] => {
                    a = *only;
                    b = theirs[0];
                }
                _ => break,
            }
        }

        let (ours, theirs) = (self.children(a), other.children(b));
        let mut matched = vec![false; theirs.len()];
        for &child in ours {
            let partner = theirs
                .iter()
                .enumerate()
                .position(|(i, &candidate)| !matched[i] && self.subtree_eq(child, other, candidate));
            match partner {
                Some(i) => matched[i] = true,
                None => return false,
            }
        }
        true
    }
}

impl<P: PartialEq> PartialEq for SolutionTree<P> {
    fn eq(&self, other: &Self) -> bool {
        self.node_count() == other.node_count() && self.subtree_eq(self.root, other, other.root)
    }
}

impl<P: Eq> Eq for SolutionTree<P> {}
