pub mod coordinate;
pub mod forest;
pub mod node;
pub mod position;

pub use coordinate::MavenCoordinate;
pub use forest::{ModuleForest, NodeId};
pub use node::ModuleNode;
pub use position::{Position, PositionSpan};
