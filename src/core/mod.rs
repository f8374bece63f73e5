// This file is the module declaration file for the `core` module.
// It declares the submodules contained within `src/core/` and exposes
// them to the rest of the crate.

// `config` module:
// This module is responsible for managing the descriptor itself. It
// defines the data structures for the configuration file (`ScanConfig`
// and friends), provides a `ConfigProvider` trait for abstracting
// configuration access, and includes a `ConfigManager` to handle file
// I/O operations like loading, saving, and validating the descriptor.
pub mod config;

// `engine` module:
// The scan engine resolves the descriptor's content patterns against
// the real project tree, producing the per-pattern preview and the
// effective file set.
pub mod engine;

// `version` module:
// A small version checker that compares the local build against the
// latest GitHub release.
pub mod version;
