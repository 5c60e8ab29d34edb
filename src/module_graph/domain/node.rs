use super::coordinate::MavenCoordinate;
use super::forest::NodeId;
use std::path::{Path, PathBuf};

/// ModuleNode - one module in the reconstructed forest, real or placeholder.
///
/// A placeholder is synthesized when a child references a parent identity
/// whose descriptor has not been processed yet; its `descriptor_dir` stays
/// empty until the real descriptor is seen, at which point the node is
/// rebound in place and keeps the children it accumulated.
#[derive(Debug, Clone)]
pub struct ModuleNode {
    identity: MavenCoordinate,
    parent_identity: MavenCoordinate,
    descriptor_dir: PathBuf,
    children: Vec<NodeId>,
}

impl ModuleNode {
    pub fn new(
        identity: MavenCoordinate,
        parent_identity: MavenCoordinate,
        descriptor_dir: PathBuf,
    ) -> Self {
        Self {
            identity,
            parent_identity,
            descriptor_dir,
            children: Vec::new(),
        }
    }

    /// A synthetic parent node with no descriptor and no parent of its own.
    pub fn placeholder(identity: MavenCoordinate) -> Self {
        Self::new(identity, MavenCoordinate::empty(), PathBuf::new())
    }

    pub fn identity(&self) -> &MavenCoordinate {
        &self.identity
    }

    pub fn parent_identity(&self) -> &MavenCoordinate {
        &self.parent_identity
    }

    pub fn descriptor_dir(&self) -> &Path {
        &self.descriptor_dir
    }

    /// True while the node has never been matched to a real descriptor.
    pub fn is_placeholder(&self) -> bool {
        self.descriptor_dir.as_os_str().is_empty()
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Rebinds a placeholder to its real descriptor. The provisional parent
    /// identity inferred earlier is overwritten; children are preserved.
    pub fn rebind(&mut self, parent_identity: MavenCoordinate, descriptor_dir: PathBuf) {
        self.parent_identity = parent_identity;
        self.descriptor_dir = descriptor_dir;
    }

    pub(super) fn push_child(&mut self, child: NodeId) {
        self.children.push(child);
    }

    pub(super) fn remove_child(&mut self, child: NodeId) -> bool {
        match self.children.iter().position(|&c| c == child) {
            Some(idx) => {
                self.children.remove(idx);
                true
            }
            None => false,
        }
    }

    pub(super) fn take_children(&mut self) -> Vec<NodeId> {
        std::mem::take(&mut self.children)
    }
}
