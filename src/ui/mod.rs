// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`catalog`] - Gift list, purchase dialogs and payment details
//!
//! # Shared Infrastructure
//!
//! - [`notifications`] - Toast notification system for user feedback
//! - [`state`] - Reusable UI state values (dismiss timeout)
//! - [`widgets`] - Custom Iced widgets (loading spinner)
//! - [`styles`] - Centralized styling (buttons, containers, inputs)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icon loading and rendering (visual primitives)

pub mod catalog;
pub mod design_tokens;
pub mod icons;
pub mod notifications;
pub mod state;
pub mod styles;
pub mod theming;
pub mod widgets;
