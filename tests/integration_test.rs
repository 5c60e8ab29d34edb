/// Integration tests for the application layer
mod test_utilities;

use pomscope::prelude::*;
use std::path::PathBuf;
use test_utilities::mocks::*;

fn gav_line(pom: &str, gav: &str, parent: &str) -> String {
    format!(
        "{{\"pomPath\":\"{}\",\"gav\":\"{}\",\"parentGav\":\"{}\"}}\n",
        pom, gav, parent
    )
}

#[tokio::test]
async fn test_scan_happy_path_two_module_workspace() {
    let finder =
        MockDescriptorFinder::new().with_root("/ws", &["/ws/pom.xml", "/ws/app/pom.xml"]);
    let reactor = format!(
        "{}{}",
        gav_line("/ws/pom.xml", "g:parent:1", ""),
        gav_line("/ws/app/pom.xml", "g:app:1", "g:parent:1"),
    );
    let runner = MockMavenRunner::new()
        .with_gav_output("/ws", &reactor)
        .with_tree_output(
            "/ws",
            "g:parent:jar:1\n\
             +- org.slf4j:slf4j-api:jar:2.0.9:compile\n",
        )
        .with_tree_output(
            "/ws/app",
            "g:app:jar:1\n\
             +- org.slf4j:slf4j-api:jar:2.0.9:compile\n\
             +- com.foo:bar:jar:2.0:compile\n",
        );

    let use_case = ScanWorkspaceUseCase::new(finder, runner, MockProgressReporter::new());
    let response = use_case
        .execute(ScanRequest::new(vec![PathBuf::from("/ws")], vec![]))
        .await
        .unwrap();

    assert_eq!(response.modules.len(), 1);
    let root = &response.modules[0];
    assert_eq!(root.identity.to_string(), "g:parent:1");
    assert_eq!(root.descriptor_dir, PathBuf::from("/ws"));
    assert_eq!(root.declared_dependencies.len(), 1);
    assert_eq!(
        root.declared_dependencies[0].to_string(),
        "org.slf4j:slf4j-api:2.0.9"
    );

    // the child re-lists the inherited slf4j entry; only its own declaration survives
    assert_eq!(root.children.len(), 1);
    let child = &root.children[0];
    assert_eq!(child.identity.to_string(), "g:app:1");
    assert_eq!(child.declared_dependencies.len(), 1);
    assert_eq!(child.declared_dependencies[0].to_string(), "com.foo:bar:2.0");

    assert_eq!(response.stats.descriptor_count, 2);
    assert_eq!(response.stats.module_count, 2);
    assert_eq!(response.stats.skipped_count, 0);
}

#[tokio::test]
async fn test_scan_child_discovered_before_parent() {
    // the child's path is shorter, so it is processed before its parent and
    // a placeholder has to be unified when the parent descriptor is seen
    let finder = MockDescriptorFinder::new()
        .with_root("/r", &["/r/a/pom.xml", "/r/theparent/pom.xml"]);
    let runner = MockMavenRunner::new()
        .with_gav_output("/r/a", &gav_line("/r/a/pom.xml", "g:a:1", "g:p:1"))
        .with_gav_output(
            "/r/theparent",
            &gav_line("/r/theparent/pom.xml", "g:p:1", ""),
        )
        .with_tree_output("/r/a", "g:a:jar:1\n+- com.foo:bar:jar:2.0:compile\n")
        .with_tree_output("/r/theparent", "g:p:jar:1\n");

    let use_case = ScanWorkspaceUseCase::new(finder, runner, MockProgressReporter::new());
    let response = use_case
        .execute(ScanRequest::new(vec![PathBuf::from("/r")], vec![]))
        .await
        .unwrap();

    assert_eq!(response.modules.len(), 1);
    let root = &response.modules[0];
    assert_eq!(root.identity.to_string(), "g:p:1");
    assert_eq!(root.descriptor_dir, PathBuf::from("/r/theparent"));
    assert_eq!(root.children.len(), 1);
    assert_eq!(root.children[0].identity.to_string(), "g:a:1");
}

#[tokio::test]
async fn test_scan_missing_parent_is_promoted_to_root() {
    let finder = MockDescriptorFinder::new().with_root("/ws", &["/ws/a/pom.xml"]);
    let runner = MockMavenRunner::new()
        .with_gav_output("/ws/a", &gav_line("/ws/a/pom.xml", "g:a:1", "g:missing:1"))
        .with_tree_output("/ws/a", "g:a:jar:1\n+- com.foo:bar:jar:2.0:compile\n");

    let use_case = ScanWorkspaceUseCase::new(finder, runner, MockProgressReporter::new());
    let response = use_case
        .execute(ScanRequest::new(vec![PathBuf::from("/ws")], vec![]))
        .await
        .unwrap();

    // the placeholder for g:missing:1 sits above the workspace boundary and
    // is swept away; the module itself becomes a root
    assert_eq!(response.modules.len(), 1);
    assert_eq!(response.modules[0].identity.to_string(), "g:a:1");
    assert!(response.modules[0].children.is_empty());
}

#[tokio::test]
async fn test_scan_maven_unavailable_is_fatal() {
    let finder = MockDescriptorFinder::new().with_root("/ws", &["/ws/pom.xml"]);
    let runner = MockMavenRunner::unavailable();

    let use_case = ScanWorkspaceUseCase::new(finder, runner, MockProgressReporter::new());
    let result = use_case
        .execute(ScanRequest::new(vec![PathBuf::from("/ws")], vec![]))
        .await;

    assert!(result.is_err());
    let err = format!("{}", result.unwrap_err());
    assert!(err.contains("not available"));
}

#[tokio::test]
async fn test_scan_tree_failure_skips_module_but_not_siblings() {
    let finder = MockDescriptorFinder::new()
        .with_root("/ws", &["/ws/pom.xml", "/ws/a/pom.xml", "/ws/b/pom.xml"]);
    let reactor = format!(
        "{}{}{}",
        gav_line("/ws/pom.xml", "g:parent:1", ""),
        gav_line("/ws/a/pom.xml", "g:a:1", "g:parent:1"),
        gav_line("/ws/b/pom.xml", "g:b:1", "g:parent:1"),
    );
    // no tree output for /ws/b: its report fails
    let runner = MockMavenRunner::new()
        .with_gav_output("/ws", &reactor)
        .with_tree_output("/ws", "g:parent:jar:1\n")
        .with_tree_output("/ws/a", "g:a:jar:1\n+- com.foo:bar:jar:2.0:compile\n");

    let progress = MockProgressReporter::new();
    let use_case = ScanWorkspaceUseCase::new(finder, runner, progress.clone());
    let response = use_case
        .execute(ScanRequest::new(vec![PathBuf::from("/ws")], vec![]))
        .await
        .unwrap();

    assert_eq!(response.modules.len(), 1);
    let root = &response.modules[0];
    assert_eq!(root.children.len(), 1);
    assert_eq!(root.children[0].identity.to_string(), "g:a:1");
    assert_eq!(response.stats.module_count, 2);
    assert_eq!(response.stats.skipped_count, 1);

    let messages = progress.get_messages().join("\n");
    assert!(messages.contains("dependency report failed for g:b:1"));
}

#[tokio::test]
async fn test_scan_failed_mid_tree_module_promotes_its_children() {
    let finder = MockDescriptorFinder::new()
        .with_root("/ws", &["/ws/pom.xml", "/ws/mid/pom.xml", "/ws/mid/leaf/pom.xml"]);
    let reactor = format!(
        "{}{}{}",
        gav_line("/ws/pom.xml", "g:parent:1", ""),
        gav_line("/ws/mid/pom.xml", "g:mid:1", "g:parent:1"),
        gav_line("/ws/mid/leaf/pom.xml", "g:leaf:1", "g:mid:1"),
    );
    // the middle module's report fails; its leaf must surface under the root
    let runner = MockMavenRunner::new()
        .with_gav_output("/ws", &reactor)
        .with_tree_output("/ws", "g:parent:jar:1\n")
        .with_tree_output("/ws/mid/leaf", "g:leaf:jar:1\n");

    let use_case = ScanWorkspaceUseCase::new(finder, runner, MockProgressReporter::new());
    let response = use_case
        .execute(ScanRequest::new(vec![PathBuf::from("/ws")], vec![]))
        .await
        .unwrap();

    assert_eq!(response.modules.len(), 1);
    let root = &response.modules[0];
    assert_eq!(root.children.len(), 1);
    assert_eq!(root.children[0].identity.to_string(), "g:leaf:1");
    assert_eq!(response.stats.skipped_count, 1);
}

#[tokio::test]
async fn test_scan_unresolvable_descriptor_is_skipped() {
    // no GAV output for the descriptor's directory at all
    let finder = MockDescriptorFinder::new().with_root("/ws", &["/ws/broken/pom.xml"]);
    let runner = MockMavenRunner::new();

    let use_case = ScanWorkspaceUseCase::new(finder, runner, MockProgressReporter::new());
    let response = use_case
        .execute(ScanRequest::new(vec![PathBuf::from("/ws")], vec![]))
        .await
        .unwrap();

    assert!(response.modules.is_empty());
    assert_eq!(response.stats.descriptor_count, 1);
    assert_eq!(response.stats.module_count, 0);
}

#[tokio::test]
async fn test_scan_empty_workspace() {
    let finder = MockDescriptorFinder::new();
    let runner = MockMavenRunner::new();
    let progress = MockProgressReporter::new();

    let use_case = ScanWorkspaceUseCase::new(finder, runner, progress.clone());
    let response = use_case
        .execute(ScanRequest::new(vec![PathBuf::from("/empty")], vec![]))
        .await
        .unwrap();

    assert!(response.modules.is_empty());
    assert_eq!(response.stats, ScanStats::default());
    assert!(progress.message_count() > 0);
    let messages = progress.get_messages().join("\n");
    assert!(messages.contains("no descriptors found"));
}

#[tokio::test]
async fn test_scan_installs_reader_jar_exactly_once() {
    let finder =
        MockDescriptorFinder::new().with_root("/ws", &["/ws/pom.xml", "/ws/app/pom.xml"]);
    let reactor = format!(
        "{}{}",
        gav_line("/ws/pom.xml", "g:parent:1", ""),
        gav_line("/ws/app/pom.xml", "g:app:1", "g:parent:1"),
    );
    let runner = MockMavenRunner::new()
        .with_gav_output("/ws", &reactor)
        .with_tree_output("/ws", "g:parent:jar:1\n")
        .with_tree_output("/ws/app", "g:app:jar:1\n");

    let observer = runner.clone();
    let use_case = ScanWorkspaceUseCase::new(finder, runner, MockProgressReporter::new());
    let request = ScanRequest::new(vec![PathBuf::from("/ws")], vec![])
        .with_reader_jar(Some(PathBuf::from("/tools/gav-reader.jar")));
    let response = use_case.execute(request).await.unwrap();
    assert_eq!(response.stats.module_count, 2);

    let install_invocations: Vec<_> = observer
        .invocations()
        .into_iter()
        .filter(|(_, args)| args.iter().any(|a| a.contains("install-file")))
        .collect();
    assert_eq!(install_invocations.len(), 1);
    assert_eq!(install_invocations[0].0, PathBuf::from("/tools"));
    assert!(install_invocations[0]
        .1
        .iter()
        .any(|a| a == "-Dfile=/tools/gav-reader.jar"));
}

#[tokio::test]
async fn test_scan_no_identity_appears_twice_in_output() {
    let finder = MockDescriptorFinder::new()
        .with_root("/ws", &["/ws/pom.xml", "/ws/a/pom.xml", "/ws/b/pom.xml"]);
    let reactor = format!(
        "{}{}{}",
        gav_line("/ws/pom.xml", "g:parent:1", ""),
        gav_line("/ws/a/pom.xml", "g:a:1", "g:parent:1"),
        gav_line("/ws/b/pom.xml", "g:b:1", "g:parent:1"),
    );
    let runner = MockMavenRunner::new()
        .with_gav_output("/ws", &reactor)
        .with_tree_output("/ws", "g:parent:jar:1\n")
        .with_tree_output("/ws/a", "g:a:jar:1\n")
        .with_tree_output("/ws/b", "g:b:jar:1\n");

    let use_case = ScanWorkspaceUseCase::new(finder, runner, MockProgressReporter::new());
    let response = use_case
        .execute(ScanRequest::new(vec![PathBuf::from("/ws")], vec![]))
        .await
        .unwrap();

    fn collect_identities(modules: &[AttributedModule], out: &mut Vec<String>) {
        for module in modules {
            out.push(module.identity.to_string());
            collect_identities(&module.children, out);
        }
    }
    let mut identities = Vec::new();
    collect_identities(&response.modules, &mut identities);
    let unique: std::collections::HashSet<_> = identities.iter().collect();
    assert_eq!(identities.len(), 3);
    assert_eq!(unique.len(), identities.len());
}

#[tokio::test]
async fn test_position_lookup_falls_back_to_ancestor_descriptor() {
    // build a small forest directly through the domain services, then map a
    // dependency declared only in the parent descriptor back to its span
    let runner = MockMavenRunner::new()
        .with_gav_output("/ws", &gav_line("/ws/pom.xml", "g:parent:1", ""))
        .with_gav_output(
            "/ws/app",
            &gav_line("/ws/app/pom.xml", "g:app:1", "g:parent:1"),
        );
    let mut resolver = GavResolver::new("com.pomscope:gav-reader-maven-plugin:1.0.0");
    let mut guard = InstallGuard::new(None);
    let paths = vec![PathBuf::from("/ws/pom.xml"), PathBuf::from("/ws/app/pom.xml")];
    let forest = ForestBuilder::build(&paths, &mut resolver, &mut guard, &runner).await;
    assert!(forest.is_valid());

    let reader = MockDescriptorReader::new()
        .with_descriptor("/ws/app/pom.xml", "<project/>")
        .with_descriptor(
            "/ws/pom.xml",
            "<project>\n\
             <dependencies>\n\
             <dependency>\n\
             <groupId>javax.mail</groupId>\n\
             <artifactId>mail</artifactId>\n\
             <version>1.4</version>\n\
             </dependency>\n\
             </dependencies>\n\
             </project>\n",
        );

    let app = forest
        .find_by_identity(&MavenCoordinate::from_gav("g:app:1"))
        .unwrap();
    let finder = PositionFinder::new();
    let target = MavenCoordinate::from_gav("javax.mail:mail:1.4");
    let spans = finder.dependency_positions_in_forest(&forest, app, &target, &reader);

    assert_eq!(spans.len(), 3);
    assert_eq!(spans[0].start.line, 3);
    assert_eq!(spans[0].start.column, 0);
}
