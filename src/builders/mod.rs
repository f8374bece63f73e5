// This file is the module declaration file for the `builders` module.
// It declares and makes public all the sub-modules within the `src/builders`
// directory. These modules encapsulate pattern handling and reporting logic.

// The `pub mod importer;` declaration exposes the `importer` module.
//
// `importer` module:
// This module provides functionality for importing content patterns from
// external sources: plain glob-list files and existing
// `tailwind.config.js` files. It handles the parsing and normalization
// of these external patterns into descriptor entries.
pub mod importer;

// The `pub mod patterns;` declaration exposes the `patterns` module.
//
// `patterns` module:
// This is a fundamental module that defines the compiled form of a
// content pattern (`ContentPattern`) and the `PathMatcher` trait, which
// the scan engine uses to match project files against the descriptor's
// glob patterns.
pub mod patterns;

// The `pub mod reporter;` declaration exposes the `reporter` module.
//
// `reporter` module:
// This module is responsible for generating human-readable reports. It
// defines a `StatusReporter` trait and its `ConsoleReporter`
// implementation, which displays the per-pattern scan preview and a
// summary of the descriptor.
pub mod reporter;

// The `pub mod validator;` declaration exposes the `validator` module.
//
// `validator` module:
// This module is dedicated to ensuring the integrity of the descriptor.
// It defines the `ConfigValidator` trait and a `StandardValidator`
// implementation that checks for the non-empty content invariant,
// malformed globs, duplicates, and broken theme or plugin entries.
pub mod validator;
