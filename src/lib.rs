//! Pinch, pan and double-tap gesture engine for a single zoomable element.
//!
//! The crate turns raw multi-touch sample batches into a 2D transform (zoom
//! factor plus pixel offset) for one target element. It owns the whole
//! lifecycle: classifying touches into a coarse interaction, applying anchored
//! zoom and panning, keeping the offset inside its legal bounds, and running
//! eased corrective animations. The host is responsible only for wiring native
//! input to the engine, honouring the returned [`input::Action`]s, and painting
//! the [`render::RenderFrame`] it is handed.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level [`engine::Engine`], testable [`engine::EngineCore`] and the [`engine::Surface`] seam |
//! | [`gesture`] | Gesture classifier: touch batches to `none`/`drag`/`zoom` transitions |
//! | [`transform`] | Transform engine: zoom factor, offset, sanitation, double-tap |
//! | [`animation`] | Eased animation runs and frame stepping |
//! | [`bounds`] | Layout geometry and offset clamping |
//! | [`render`] | Render frames and render coalescing |
//! | [`input`] | Input event types and host actions |
//! | [`notify`] | Outbound notifications and listener callbacks |
//! | [`options`] | Configuration and validation |
//! | [`geometry`] | Points, sizes and small vector helpers |
//! | [`consts`] | Shared numeric constants (tap window, tolerances, etc.) |
//! | `web` | DOM surface over `web-sys` (feature `web`) |

pub mod animation;
pub mod bounds;
pub mod consts;
pub mod engine;
pub mod geometry;
pub mod gesture;
pub mod input;
pub mod notify;
pub mod options;
pub mod render;
pub mod transform;
#[cfg(feature = "web")]
pub mod web;
