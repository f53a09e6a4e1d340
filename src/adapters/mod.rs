/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: the sheet API client,
/// the local directory source, output writers, formatters and the
/// console progress reporter.
pub mod outbound;
