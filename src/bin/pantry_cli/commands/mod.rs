// ABOUTME: Command implementations for pantry-cli
// ABOUTME: Groups recipe generation and catalog listing commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

pub mod catalog;
pub mod recipe;
