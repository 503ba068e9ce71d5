// ABOUTME: Constants module tree for the Lishe engine
// ABOUTME: Re-exports clinical category thresholds organized by domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lishe Health

//! Application constants organized by domain.

/// Clinical category thresholds (BMI, blood pressure, risk, glycemic index)
pub mod clinical;
