//! # Voxel World Demo Entry Point
//!
//! Builds one world with the configured generator and logs a summary.
//! All of the interesting behavior lives in the library; see `run()`.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --release -- [settings.json]
//! ```

fn main() {
    voxel_world::run();
}
