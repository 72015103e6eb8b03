use shadow_rs::shadow;

shadow!(build);

// Core vocabulary
// ---------------
pub mod space;

// Graph store
// -----------
pub mod graph;

// Search internals
// ----------------
pub mod frontier;

// Algorithms
// ----------
pub mod algorithms;

// Demo scenario
// -------------
pub mod demo;
