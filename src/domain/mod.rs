// ============================================================
// Domain Layer
// ============================================================
// Pure Rust types that define the core concepts of the system.
//
// Rules for this layer:
//   - NO Burn framework types allowed here
//   - NO file I/O
//   - Only plain Rust structs and traits
//
// Why keep this layer pure?
//   - Easy to unit test (no GPU needed)
//   - Easy to swap implementations (just implement the trait)

// A single parsed (story, query, answer) example
pub mod example;

// Core abstractions (traits) that other layers implement
pub mod traits;
