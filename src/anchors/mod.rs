// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Anchor files and the batch operations that apply them

pub mod delete;
pub mod export;
pub mod expr;
pub mod place;
pub mod position;
pub mod reader;
pub mod rename;
pub mod replace;
pub mod spec_file;

pub use delete::{DeletionSpec, clear_anchors, delete_anchors};
pub use export::{export_anchors, write_anchor_list};
pub use place::place_anchors;
pub use position::{PositionKeyword, PositionSpec, ReferencePoints};
pub use reader::{Diagnostic, DiagnosticKind};
pub use rename::{RenameSpec, rename_anchors};
pub use replace::{AnchorList, AnchorRecord, ReplaceReport, replace_anchors};
pub use spec_file::{AnchorEntries, AnchorSpecFile};
