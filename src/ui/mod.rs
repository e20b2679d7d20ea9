// SPDX-License-Identifier: MPL-2.0
//! Iced renderer for the toast store.
//!
//! [`ToastFeed`] keeps the latest toast list of a store and
//! [`ToastOverlay`] draws it. A typical application holds a feed in its
//! state, renders `ToastOverlay::view(&feed.toasts())` on top of its main
//! view, and forwards overlay messages to `ToastOverlay::update`.

pub mod design_tokens;
pub mod feed;
pub mod overlay;

pub use feed::ToastFeed;
pub use overlay::{Message, ToastOverlay};
