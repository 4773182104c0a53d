// ABOUTME: Helper modules for the mixmaster CLI
// ABOUTME: Terminal rendering of browser views
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MixMaster Contributors

pub mod display;
