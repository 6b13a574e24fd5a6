use crate::query_path::NodeId;
use crate::query_path::PathNode;
use crate::query_path::RenderError;

/// Name of the root node that anchors every [`QueryPath`]. It opens the
/// rendered query document and is never listed or resolved as a field.
pub const ROOT_NAME: &str = "query";

const INDENT: &str = "  ";

/// The user's current drill-down position: a single chain of [`PathNode`]s
/// hanging off a root node.
///
/// Nodes live in an arena and refer to their parent and child by [`NodeId`].
/// Arena order always matches chain order: appending pushes onto the end and
/// ascending truncates, so the current position is always the last node.
/// Every node pushed gets a fresh generation, so a [`NodeId`] held across a
/// truncation stops resolving instead of aliasing the slot's new occupant.
#[derive(Clone, Debug)]
pub struct QueryPath {
    slots: Vec<Slot>,
    current: NodeId,
    next_generation: u64,
}

#[derive(Clone, Debug, PartialEq)]
struct Slot {
    generation: u64,
    node: PathNode,
}

impl QueryPath {
    const ROOT: NodeId = NodeId { index: 0, generation: 0 };

    pub fn new() -> Self {
        Self {
            slots: vec![Slot {
                generation: Self::ROOT.generation,
                node: PathNode::new(ROOT_NAME),
            }],
            current: Self::ROOT,
            next_generation: Self::ROOT.generation + 1,
        }
    }

    /// Arena index of `id`, if it still names a node in the path.
    fn index_of(&self, id: NodeId) -> Option<usize> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .map(|_| id.index)
    }

    fn slot_node(&self, id: NodeId) -> &PathNode {
        &self.slots[id.index].node
    }

    fn slot_node_mut(&mut self, id: NodeId) -> &mut PathNode {
        &mut self.slots[id.index].node
    }

    /// Attach `chain` as the child of the current node and move the current
    /// position to the chain's last node. Returns the new current position.
    ///
    /// No schema validation happens here; see
    /// [`FieldResolver`](crate::resolver::FieldResolver).
    pub fn append(&mut self, chain: impl IntoIterator<Item = PathNode>) -> NodeId {
        // Anything below the current node is replaced by the new chain.
        self.slots.truncate(self.current.index + 1);

        for mut node in chain {
            let id = NodeId {
                index: self.slots.len(),
                generation: self.next_generation,
            };
            self.next_generation += 1;

            node.parent = Some(self.current);
            node.child = None;
            self.slot_node_mut(self.current).child = Some(id);
            self.slots.push(Slot {
                generation: id.generation,
                node,
            });
            self.current = id;
        }

        log::trace!("Appended to query path; now at `{}`.", self.current_node().name());
        self.current
    }

    /// Move up `levels + 1` nodes, detaching each node left behind. Stops at
    /// the root, so ascending from the root is a no-op.
    pub fn ascend(&mut self, levels: usize) -> NodeId {
        for _ in 0..=levels {
            let Some(parent) = self.slot_node(self.current).parent else {
                break;
            };
            self.slot_node_mut(parent).child = None;
            self.slots.truncate(self.current.index);
            self.current = parent;
        }

        log::trace!("Ascended query path; now at `{}`.", self.current_node().name());
        self.current
    }

    pub fn current(&self) -> NodeId {
        self.current
    }

    pub fn current_node(&self) -> &PathNode {
        self.slot_node(self.current)
    }

    pub fn is_at_root(&self) -> bool {
        self.current == Self::ROOT
    }

    /// Number of nodes in the chain, not counting the root.
    pub fn len(&self) -> usize {
        self.slots.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The chain from head to tail, excluding the root.
    pub fn list_nodes(&self) -> Vec<&PathNode> {
        std::iter::successors(
            self.slot_node(Self::ROOT).child,
            |&id| self.slot_node(id).child,
        )
        .map(|id| self.slot_node(id))
        .collect()
    }

    /// The node `id` names, or `None` once it has been detached.
    pub fn node(&self, id: NodeId) -> Option<&PathNode> {
        self.index_of(id).map(|index| &self.slots[index].node)
    }

    pub fn root(&self) -> NodeId {
        Self::ROOT
    }

    /// Set (or, with an empty `type_name`, clear) the concrete-type override
    /// on node `id`. Returns `false` if `id` is no longer part of the path.
    pub fn set_concrete_type(&mut self, id: NodeId, type_name: &str) -> bool {
        match self.index_of(id) {
            Some(index) => {
                self.slots[index].node.set_concrete_type(type_name);
                true
            },
            None => false,
        }
    }

    /// Render the path for humans, e.g.
    /// `.repository(name: "graphsh", owner: "jclem").owner`.
    pub fn render_path(&self) -> Result<String, RenderError> {
        self.list_nodes()
            .into_iter()
            .map(|node| Ok(format!(".{}", node.to_graphql_string()?)))
            .collect()
    }

    /// Render the whole path, starting at the root, as a query document with
    /// `trailing_fragment` placed inside the innermost selection set.
    pub fn render_document(&self, trailing_fragment: &str) -> Result<String, RenderError> {
        self.render_document_from(Self::ROOT, trailing_fragment)
    }

    /// Render the chain starting at node `id` as a query document.
    ///
    /// Each node opens `name(args) {`, nests its child (or the trailing
    /// fragment, at the last node) one indent level deeper, and closes with
    /// `}`. A concrete-type override adds a `... on Type { }` block and one
    /// more indent level around the node's child. Fails with
    /// [`RenderError::DetachedNode`] if `id` is no longer part of the path.
    pub fn render_document_from(
        &self,
        id: NodeId,
        trailing_fragment: &str,
    ) -> Result<String, RenderError> {
        if self.index_of(id).is_none() {
            return Err(RenderError::DetachedNode);
        }

        let mut document = String::new();
        self.write_document(id, trailing_fragment, "", &mut document)?;
        Ok(document)
    }

    fn write_document(
        &self,
        id: NodeId,
        trailing_fragment: &str,
        indent: &str,
        out: &mut String,
    ) -> Result<(), RenderError> {
        let node = self.slot_node(id);
        out.push_str(indent);
        out.push_str(&node.to_graphql_string()?);
        out.push_str(" {");

        if let Some(concrete_type) = node.concrete_type() {
            out.push_str(&format!("\n{indent}{INDENT}... on {concrete_type} {{"));
        }

        out.push('\n');
        match node.child {
            Some(child) => {
                let child_indent =
                    if node.concrete_type.is_some() {
                        format!("{indent}{INDENT}{INDENT}")
                    } else {
                        format!("{indent}{INDENT}")
                    };
                self.write_document(child, trailing_fragment, &child_indent, out)?;
            },
            None => out.push_str(trailing_fragment),
        }

        if node.concrete_type.is_some() {
            out.push_str(&format!("\n{indent}{INDENT}}}"));
        }
        out.push_str(&format!("\n{indent}}}"));

        Ok(())
    }
}
// Equality ignores the generation counter.
impl PartialEq for QueryPath {
    fn eq(&self, other: &Self) -> bool {
        self.slots == other.slots && self.current == other.current
    }
}

impl Default for QueryPath {
    fn default() -> Self {
        Self::new()
    }
}
