use crate::module_graph::domain::MavenCoordinate;
use serde::Serialize;
use std::path::PathBuf;

/// AttributedModule - one module of the scan output
///
/// Mirrors the reconstructed forest: the module's identity, where its
/// descriptor lives, the dependencies the module itself declares (inherited
/// entries already filtered out), and its child modules.
#[derive(Debug, Clone, Serialize)]
pub struct AttributedModule {
    pub identity: MavenCoordinate,
    pub descriptor_dir: PathBuf,
    pub declared_dependencies: Vec<MavenCoordinate>,
    pub children: Vec<AttributedModule>,
}

impl AttributedModule {
    pub fn new(
        identity: MavenCoordinate,
        descriptor_dir: PathBuf,
        declared_dependencies: Vec<MavenCoordinate>,
        children: Vec<AttributedModule>,
    ) -> Self {
        Self {
            identity,
            descriptor_dir,
            declared_dependencies,
            children,
        }
    }

    /// Number of modules in this subtree, this module included.
    pub fn subtree_size(&self) -> usize {
        1 + self.children.iter().map(AttributedModule::subtree_size).sum::<usize>()
    }
}
