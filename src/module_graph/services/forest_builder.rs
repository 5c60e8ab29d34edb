use super::gav_resolver::GavResolver;
use super::install_guard::InstallGuard;
use crate::module_graph::domain::{ModuleForest, ModuleNode};
use crate::ports::outbound::MavenRunner;
use std::path::{Path, PathBuf};

/// ForestBuilder service - reconciles scattered descriptors into a module
/// forest.
///
/// Descriptors are discovered in no particular order: a child may be seen
/// before its parent, in which case a synthetic placeholder stands in for the
/// parent until the real descriptor shows up and the node is rebound in
/// place. The structure is a valid forest after every step; detaching a node
/// before reinsertion is what prevents duplicate identities.
pub struct ForestBuilder;

impl ForestBuilder {
    pub async fn build<R: MavenRunner>(
        descriptor_paths: &[PathBuf],
        resolver: &mut GavResolver,
        guard: &mut InstallGuard,
        runner: &R,
    ) -> ModuleForest {
        guard.ensure(runner).await;

        // Shortest path first: aggregator descriptors tend to sit higher in
        // the directory tree, so parents usually exist before their children
        // are processed. An ordering heuristic, not a correctness requirement.
        let mut ordered: Vec<&PathBuf> = descriptor_paths.iter().collect();
        ordered.sort_by_key(|path| (path.as_os_str().len(), (*path).clone()));

        let mut forest = ModuleForest::new();
        for path in ordered {
            let (gav, parent_gav) = resolver.resolve(path, runner).await;
            if gav.is_empty() {
                tracing::warn!("skipping {}: no GAV resolved", path.display());
                continue;
            }

            let descriptor_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default();

            let current = match forest.find_by_identity(&gav) {
                Some(existing) => {
                    // Seen earlier as a placeholder (or already inserted from
                    // a warmed cache line). Pull it out of the forest and
                    // overwrite its provisional parent with the resolved one;
                    // accumulated children stay attached.
                    forest.detach(existing);
                    if let Some(node) = forest.node_mut(existing) {
                        node.rebind(parent_gav.clone(), descriptor_dir);
                    }
                    existing
                }
                None => forest.alloc(ModuleNode::new(
                    gav.clone(),
                    parent_gav.clone(),
                    descriptor_dir,
                )),
            };

            if parent_gav.is_empty() {
                forest.push_root(current);
            } else if let Some(parent) = forest.find_by_identity(&parent_gav) {
                forest.add_child(parent, current);
            } else {
                let placeholder = forest.alloc(ModuleNode::placeholder(parent_gav.clone()));
                forest.add_child(placeholder, current);
                forest.push_root(placeholder);
            }

            tracing::debug!("placed {} under {:?}", gav, parent_gav);
        }

        forest.prune_rootless_roots();
        forest
    }
}
