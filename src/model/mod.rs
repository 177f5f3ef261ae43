// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Font data model

pub mod geometry;
pub mod workspace;

pub use geometry::Bounds;
pub use workspace::Workspace;
