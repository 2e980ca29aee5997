// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization using the Fluent system. Translation
//! files are embedded in the binary, one `.ftl` file per locale.
//!
//! # Features
//!
//! - Locale resolution from CLI, settings, then the operating system
//! - Language-only matching (`pt` selects `pt-BR`)
//! - Named arguments in messages (`{ $gift }`)
//! - Missing keys render as `MISSING: key` instead of failing

pub mod fluent;
