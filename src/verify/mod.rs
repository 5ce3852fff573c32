// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: whole-tree checks and runtime contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Whole-tree checks** (`check_structure`, `verify_tree`) that run on any
//!    tree from outside: decoded files, deserialized JSON, a checker after a
//!    burst of concurrent writes.
//!
//! 2. **Runtime contracts** that panic in debug builds when an insertion or
//!    search breaks an invariant locally. Zero-cost in release.

mod checks;
pub mod contracts;
mod types;

pub use checks::{check_structure, verify_tree};
pub use types::*;
