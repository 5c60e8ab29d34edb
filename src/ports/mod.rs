/// Ports module defining interfaces for hexagonal architecture
///
/// This module contains the outbound ports (driven ports) through which the
/// application core reaches infrastructure: the file system, the Maven
/// subprocess, the console, and output destinations.
pub mod outbound;
