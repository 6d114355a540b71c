// Copyright 2026 the Overreact Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared scaffolding for Overreact benchmarks. See the `benches/` directory.
