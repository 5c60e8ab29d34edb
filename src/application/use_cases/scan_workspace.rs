use crate::application::dto::{AttributedModule, ScanRequest, ScanResponse, ScanStats};
use crate::module_graph::domain::{MavenCoordinate, ModuleForest, NodeId};
use crate::module_graph::services::{
    DescriptorLocator, ForestBuilder, GavResolver, InheritanceFilter, InstallGuard,
};
use crate::ports::outbound::{DescriptorFinder, MavenRunner, ProgressReporter};
use crate::shared::Result;
use std::collections::HashMap;

/// ScanWorkspaceUseCase - end-to-end "build dependency forest" operation
///
/// Orchestrates the workspace scan using generic dependency injection for
/// all infrastructure dependencies. The Maven availability probe is the only
/// fatal failure; everything after it is isolated per module so that one
/// unbuildable module never aborts the rest of the workspace.
///
/// # Type Parameters
/// * `F` - DescriptorFinder implementation
/// * `M` - MavenRunner implementation
/// * `P` - ProgressReporter implementation
pub struct ScanWorkspaceUseCase<F, M, P> {
    descriptor_finder: F,
    maven_runner: M,
    progress_reporter: P,
}

impl<F, M, P> ScanWorkspaceUseCase<F, M, P>
where
    F: DescriptorFinder,
    M: MavenRunner,
    P: ProgressReporter,
{
    /// Creates a new ScanWorkspaceUseCase with injected dependencies
    pub fn new(descriptor_finder: F, maven_runner: M, progress_reporter: P) -> Self {
        Self {
            descriptor_finder,
            maven_runner,
            progress_reporter,
        }
    }

    /// Executes the workspace scan use case
    ///
    /// # Arguments
    /// * `request` - Scan request containing workspace roots and options
    ///
    /// # Returns
    /// ScanResponse containing the attributed module forest and scan stats
    pub async fn execute(&self, request: ScanRequest) -> Result<ScanResponse> {
        // Step 1: Maven availability probe - the one fatal precondition
        let banner = self.maven_runner.probe_version().await?;
        self.progress_reporter.report(&format!("🔎 Using {}", banner));

        // Step 2: one-shot reader plugin installation
        let mut guard = InstallGuard::new(request.reader_jar.clone());
        guard.ensure(&self.maven_runner).await;

        // Step 3: descriptor discovery
        let descriptors = self.locate_descriptors(&request).await?;
        if descriptors.is_empty() {
            self.progress_reporter
                .report_completion("✅ Scan complete: no descriptors found");
            return Ok(ScanResponse::new(vec![], ScanStats::default()));
        }

        // Step 4: forest reconstruction
        let mut resolver = GavResolver::new(request.reader_plugin.clone());
        let forest = ForestBuilder::build(
            &descriptors,
            &mut resolver,
            &mut guard,
            &self.maven_runner,
        )
        .await;
        self.progress_reporter.report(&format!(
            "🌳 Reconstructed {} module(s) in {} tree(s)",
            forest.node_count(),
            forest.roots().len()
        ));

        // Step 5: per-module transitive reports, error-isolated
        let reports = self.collect_module_reports(&forest).await;

        // Step 6: attribution and assembly
        let modules: Vec<AttributedModule> = forest
            .roots()
            .iter()
            .flat_map(|&root| Self::assemble(&forest, root, &reports))
            .collect();

        let module_count = reports.len();
        let skipped_count = forest.node_count() - module_count;
        self.progress_reporter.report_completion(&format!(
            "✅ Scan complete: {} module(s), {} skipped",
            module_count, skipped_count
        ));

        Ok(ScanResponse::new(
            modules,
            ScanStats {
                descriptor_count: descriptors.len(),
                module_count,
                skipped_count,
            },
        ))
    }

    async fn locate_descriptors(
        &self,
        request: &ScanRequest,
    ) -> Result<Vec<std::path::PathBuf>> {
        self.progress_reporter.report(&format!(
            "📖 Locating descriptors under {} root(s)...",
            request.roots.len()
        ));

        let descriptors = DescriptorLocator::locate(
            &self.descriptor_finder,
            &request.roots,
            &request.exclude_patterns,
        )
        .await?;

        self.progress_reporter
            .report(&format!("✅ Found {} descriptor(s)", descriptors.len()));

        Ok(descriptors)
    }

    /// Runs the transitive-dependency report for every module in the forest.
    /// A failing module is logged and left out of the map; its siblings are
    /// unaffected.
    async fn collect_module_reports(
        &self,
        forest: &ModuleForest,
    ) -> HashMap<NodeId, Vec<String>> {
        let order = forest.iter_depth_first();
        let total = order.len();
        let mut reports = HashMap::new();

        self.progress_reporter
            .report("📊 Collecting dependency reports...");

        for (idx, &id) in order.iter().enumerate() {
            let Some(node) = forest.node(id) else { continue };
            self.progress_reporter.report_progress(
                idx + 1,
                total,
                Some(&node.identity().to_string()),
            );

            let args = vec!["dependency:tree".to_string(), "-q".to_string()];
            match self.maven_runner.run_goal(node.descriptor_dir(), &args).await {
                Ok(invocation) if invocation.success => {
                    reports.insert(id, dependency_lines(&invocation.stdout));
                }
                Ok(invocation) => {
                    tracing::warn!(
                        "dependency report failed for {}: {}",
                        node.identity(),
                        invocation.stderr.trim()
                    );
                    self.progress_reporter.report_error(&format!(
                        "⚠️  Warning: dependency report failed for {}; module skipped",
                        node.identity()
                    ));
                }
                Err(e) => {
                    tracing::warn!(
                        "dependency report failed for {}: {e:#}",
                        node.identity()
                    );
                    self.progress_reporter.report_error(&format!(
                        "⚠️  Warning: dependency report failed for {}; module skipped",
                        node.identity()
                    ));
                }
            }
        }

        reports
    }

    /// Converts a forest subtree into output records. A module whose report
    /// failed is excluded and its children are promoted in its place.
    fn assemble(
        forest: &ModuleForest,
        id: NodeId,
        reports: &HashMap<NodeId, Vec<String>>,
    ) -> Vec<AttributedModule> {
        let Some(node) = forest.node(id) else {
            return vec![];
        };

        let mut children = Vec::new();
        for &child in node.children() {
            children.extend(Self::assemble(forest, child, reports));
        }

        let Some(lines) = reports.get(&id) else {
            return children;
        };

        let parent_lines = forest
            .parent_of(id)
            .and_then(|parent| reports.get(&parent))
            .map(Vec::as_slice);
        let attributed = InheritanceFilter::filter_inherited(lines, parent_lines)
            .unwrap_or_else(|| lines.clone());

        let declared = attributed
            .iter()
            .filter_map(|line| MavenCoordinate::parse_report_line(line))
            .collect();

        vec![AttributedModule::new(
            node.identity().clone(),
            node.descriptor_dir().to_path_buf(),
            declared,
            children,
        )]
    }
}

/// Extracts dependency records from `dependency:tree -q` output. Only
/// glyph-prefixed lines are records; the module's self-identity header line
/// starts with an alphanumeric character and is skipped.
fn dependency_lines(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim_end)
        .filter(|line| {
            !line.is_empty()
                && line.contains(':')
                && line.starts_with(|c: char| !c.is_alphanumeric())
                && line.chars().any(|c| c.is_alphanumeric())
        })
        .map(str::to_string)
        .collect()
}
