// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! ufo-anchors: batch anchor tools for UFO fonts

fn main() -> anyhow::Result<()> {
    ufo_anchors::run()
}
