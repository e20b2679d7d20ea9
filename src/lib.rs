// SPDX-License-Identifier: MPL-2.0
//! `toast_store` is a framework-agnostic store for transient notifications.
//!
//! Toasts are added, updated, dismissed and removed through a single
//! dispatch path. Subscribers receive the full list after every change and
//! removal timers run on an injectable scheduler, so the store can be
//! driven by a tokio runtime in an application or by a virtual clock in
//! tests. An optional iced renderer lives behind the `iced` feature.

#![doc(html_root_url = "https://docs.rs/toast_store/0.3.0")]

pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod toast;
#[cfg(feature = "iced")]
pub mod ui;

pub use error::{Error, Result};
pub use toast::{Store, Toast, ToastHandle, ToastId, ToastOptions, Variant};
