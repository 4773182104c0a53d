// ABOUTME: Command modules for the mixmaster CLI
// ABOUTME: Interactive browse shell and one-shot search
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MixMaster Contributors

pub mod browse;
pub mod search;
