/// Ports module defining interfaces for hexagonal architecture
///
/// Only outbound (driven) ports exist: the CLI drives the use case
/// directly, and the use case talks to sheet sources, formatters, output
/// destinations and the console through these traits.
pub mod outbound;
