// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core value objects with ZERO external dependencies.
//!
//! This module contains pure domain types and their validity rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`toast`]: Toast store settings ([`ToastLimit`](toast::ToastLimit),
//!   [`ToastDuration`](toast::ToastDuration), [`RemoveDelay`](toast::RemoveDelay))

pub mod diagnostics;
pub mod toast;
