//! pomscope - Maven workspace scanner
//!
//! This library reconstructs the parent/child module hierarchy of a Maven
//! multi-module workspace from scattered pom.xml descriptors, attributes to
//! each module the dependencies it actually declares (versus those inherited
//! from its parent), and locates the exact line/column span of dependency
//! declarations inside a descriptor. It follows hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`module_graph`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use pomscope::prelude::*;
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! // Create adapters
//! let descriptor_finder = FileSystemDescriptorFinder::new();
//! let maven_runner = SubprocessMavenRunner::new("mvn");
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = ScanWorkspaceUseCase::new(descriptor_finder, maven_runner, progress_reporter);
//!
//! // Execute
//! let request = ScanRequest::new(vec![PathBuf::from(".")], vec![]);
//! let response = use_case.execute(request).await?;
//!
//! // Format output
//! let formatter = JsonForestFormatter::new();
//! let output = formatter.format(&response.modules)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod module_graph;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemDescriptorFinder, FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonForestFormatter, TextForestFormatter};
    pub use crate::adapters::outbound::process::{MavenCommand, SubprocessMavenRunner};
    pub use crate::application::dto::{AttributedModule, ScanRequest, ScanResponse, ScanStats};
    pub use crate::application::use_cases::ScanWorkspaceUseCase;
    pub use crate::module_graph::domain::{
        MavenCoordinate, ModuleForest, ModuleNode, NodeId, Position, PositionSpan,
    };
    pub use crate::module_graph::services::{
        DescriptorLocator, ForestBuilder, GavCache, GavResolver, InheritanceFilter, InstallGuard,
        PositionFinder,
    };
    pub use crate::ports::outbound::{
        DescriptorFinder, DescriptorReader, ForestFormatter, MavenInvocation, MavenRunner,
        OutputPresenter, ProgressReporter,
    };
    pub use crate::shared::Result;
}
