//! Motionplot is an animated scatter chart ("motion chart") engine.
//!
//! A motion chart shows labeled entities as colored points whose x/y
//! positions change as a time-like ordinal (the z index) advances. Stepping
//! or playing through the z range produces the familiar moving-bubbles
//! visualization.
//!
//! # Pipeline overview
//!
//! 1. **Ingest**: `Record`s (typed or raw JSON) accumulate in a [`DataIndex`],
//!    grouped per entity id
//! 2. **Build**: `DataIndex::build` sorts each series by z, computes axis
//!    domains, fills gaps through an [`Interpolator`], and assigns stable
//!    per-entity colors, producing an immutable [`DataSet`]
//! 3. **Play**: a [`PlaybackController`] owns the current z index and the
//!    play/stop state machine; hosts pump it from their event loop
//! 4. **Plan**: [`ChartSession`] emits [`FramePlan`]s (backend-agnostic
//!    [`DrawOp`] lists) for the background, the axes, and the data points at
//!    the current z index
//! 5. **Execute**: any [`DrawSurface`] replays a plan via [`execute_plan`];
//!    [`PixmapSurface`] is the bundled software surface with PNG export
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: building and planning are pure and stable
//!   for a given input; colors follow sorted entity-id order.
//! - **No IO in the core**: plans are plain data. Only the pixmap PNG export
//!   touches the filesystem.
//! - **No threads, no timers**: playback is a cooperative state machine
//!   driven by [`PlaybackController::tick`] with host-supplied instants.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod axis;
mod chart;
mod color;
mod data;
mod foundation;
mod playback;
mod render;

pub use axis::projector::to_pixel;
pub use axis::ticks::{
    AxisTickSpec, TickDescriptor, TickDirection, TickKind, TickLevel, plan_ticks,
};
pub use chart::config::{AxisGutters, AxisTitles, ChartConfig, ChartTicks};
pub use chart::session::ChartSession;
pub use color::wheel::{ColorWheel, hsv_to_rgb};
pub use data::index::{DataIndex, DataSet, Frame, FramePoint};
pub use data::interp::{Interpolator, LinearInterpolation, NoInterpolation};
pub use data::record::{AxisKeys, Record, records_from_json};
pub use data::series::EntitySeries;
pub use foundation::core::{Axis2D, Canvas, Domain, Point, Rect, Rgb8, Vec2};
pub use foundation::error::{MotionPlotError, MotionPlotResult};
pub use playback::controller::{FrameObserver, PlaybackController, StepDirection};
pub use render::frame::{plan_axes, plan_background, plan_frame};
pub use render::pixmap::PixmapSurface;
pub use render::plan::{DrawOp, FramePlan, TextAnchor};
pub use render::surface::{DrawSurface, execute_plan};
