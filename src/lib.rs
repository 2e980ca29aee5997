// SPDX-License-Identifier: MPL-2.0
//! `gift_registry` is a wedding gift registry desktop app built with the Iced
//! GUI framework.
//!
//! Guests browse the couple's gift list, mark a gift as purchased, register a
//! gift that is not on the list, or copy the bank transfer details. Outcomes
//! are reported through a toast notification system with timed and manual
//! dismissal.

#![doc(html_root_url = "https://docs.rs/gift_registry/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
