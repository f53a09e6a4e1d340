/// Outbound adapters - sheet sources, renderers and output sinks
pub mod console;
pub mod filesystem;
pub mod formatters;
pub mod network;
