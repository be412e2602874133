//! The 2D scene camera resource.
//!
//! One camera per viewport. The camera owns the world→screen affine
//! transform and everything feeding it: scroll, zoom, rotation, optional
//! scroll bounds, an optional follow target, and the flash/fade/shake
//! screen effects.
//!
//! Per-frame contract, in order:
//! 1. [`Camera::pre_render`] – rebuild the view matrix from current state
//! 2. [`Camera::cull`] / [`Camera::cull_hit_test`] / [`Camera::cull_tilemap`]
//!    – filter candidates down to the likely-visible subset
//! 3. draw, using the matrix and [`Camera::get_world_point`] for mapping
//! 4. [`Camera::update`] – advance effect timers by the frame delta
//!
//! The systems in [`crate::systems::camera`] and [`crate::systems::cull`]
//! drive these steps from the ECS schedule.

use bevy_ecs::entity::Entity;
use bevy_ecs::prelude::Resource;
use glam::{Affine2, Vec2};
use log::warn;
use serde::Serialize;

use crate::color::Color;
use crate::components::camerafilter::CameraFilter;
use crate::geom::Rect;
use crate::resources::camerafx::{FadeFx, FlashFx, ShakeFx};
use crate::resources::tilemap::{Tile, Tilemap};

/// Per-candidate data consumed by the cull test.
///
/// `origin_*` is the normalized pivot inside the footprint (0..1);
/// `scroll_factor_*` is the parallax multiplier applied to camera scroll
/// before projecting into camera space.
#[derive(Clone, Copy, Debug)]
pub struct CullMetrics {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub origin_x: f32,
    pub origin_y: f32,
    pub scroll_factor_x: f32,
    pub scroll_factor_y: f32,
}

impl CullMetrics {
    /// Footprint with a top-left pivot and world-locked scroll.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        CullMetrics {
            x,
            y,
            width,
            height,
            origin_x: 0.0,
            origin_y: 0.0,
            scroll_factor_x: 1.0,
            scroll_factor_y: 1.0,
        }
    }
}

/// Candidate object for visibility culling.
pub trait Cullable {
    /// World-space footprint, or `None` when the object has no measurable
    /// size. Unmeasurable candidates are conservatively kept.
    fn cull_metrics(&self) -> Option<CullMetrics>;
}

/// 2D scene camera: view transform, scroll bounds, follow target, and
/// timed screen effects.
#[derive(Resource, Debug, Clone)]
pub struct Camera {
    /// Free-form name for identification in logs and snapshots.
    pub name: String,
    /// Key of the scene this camera belongs to, if any.
    pub scene: Option<String>,
    /// Viewport x position in screen space, pixels.
    pub x: f32,
    /// Viewport y position in screen space, pixels.
    pub y: f32,
    /// Viewport width in pixels.
    pub width: f32,
    /// Viewport height in pixels.
    pub height: f32,
    /// Round scroll to whole pixels before the matrix build.
    pub round_pixels: bool,
    /// Restrict scrolling to the bounds rectangle.
    pub use_bounds: bool,
    bounds: Rect,
    /// Whether entities seen by this camera receive input events.
    pub input_enabled: bool,
    /// World-space offset of the viewport origin.
    pub scroll_x: f32,
    /// World-space offset of the viewport origin.
    pub scroll_y: f32,
    /// Zoom factor; callers keep this positive.
    pub zoom: f32,
    /// Rotation in radians.
    pub rotation: f32,
    /// View matrix, rebuilt by [`Camera::pre_render`]. The single source
    /// of truth for world→screen mapping.
    pub matrix: Affine2,
    /// Derived: background alpha is zero.
    pub transparent: bool,
    /// Clear the viewport before drawing into it.
    pub clear_before_render: bool,
    /// Background fill, only used when not `transparent`.
    pub background_color: Color,
    /// Skip the cull test and pass every candidate through.
    pub disable_cull: bool,
    flash_fx: FlashFx,
    fade_fx: FadeFx,
    shake_fx: ShakeFx,
    follow: Option<Entity>,
    id: u32,
}

impl Camera {
    /// Create a camera for the given viewport rectangle.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Camera {
            name: String::new(),
            scene: None,
            x,
            y,
            width,
            height,
            round_pixels: false,
            use_bounds: false,
            bounds: Rect::default(),
            input_enabled: true,
            scroll_x: 0.0,
            scroll_y: 0.0,
            zoom: 1.0,
            rotation: 0.0,
            matrix: Affine2::IDENTITY,
            transparent: true,
            clear_before_render: true,
            background_color: Color::TRANSPARENT,
            disable_cull: false,
            flash_fx: FlashFx::default(),
            fade_fx: FadeFx::default(),
            shake_fx: ShakeFx::default(),
            follow: None,
            id: 1,
        }
    }

    // ---------------------------------------------------------------
    // Transform
    // ---------------------------------------------------------------

    /// Rebuild the view matrix from the current camera state.
    ///
    /// Must be called once per frame before any cull or draw using this
    /// camera. `base_scale` is the renderer-contributed zoom offset;
    /// `follow` is the resolved world position of the follow target, which
    /// overrides manual scroll and becomes the transform pivot.
    ///
    /// Scroll is settled in a fixed order: follow recenter, then bounds
    /// clamp, then pixel rounding, then the matrix build. The matrix maps
    /// pivot-relative, scroll-adjusted object space into screen space;
    /// consumers subtract `scroll * scroll_factor` from object positions
    /// themselves.
    pub fn pre_render(&mut self, base_scale: f32, follow: Option<Vec2>) {
        let zoom = self.zoom + base_scale;
        let mut pivot_x = self.width / 2.0;
        let mut pivot_y = self.height / 2.0;

        if let Some(target) = follow {
            pivot_x = target.x;
            pivot_y = target.y;
            self.scroll_x = pivot_x - self.width * 0.5;
            self.scroll_y = pivot_y - self.height * 0.5;
        }

        if self.use_bounds {
            let min_x = self.bounds.x;
            let max_x = min_x.max(self.bounds.right() - self.width);
            let min_y = self.bounds.y;
            let max_y = min_y.max(self.bounds.bottom() - self.height);

            if self.scroll_x < min_x {
                self.scroll_x = min_x;
            } else if self.scroll_x > max_x {
                self.scroll_x = max_x;
            }

            if self.scroll_y < min_y {
                self.scroll_y = min_y;
            } else if self.scroll_y > max_y {
                self.scroll_y = max_y;
            }
        }

        if self.round_pixels {
            self.scroll_x = self.scroll_x.round();
            self.scroll_y = self.scroll_y.round();
        }

        let pivot = Vec2::new(pivot_x, pivot_y);
        let (shake_x, shake_y) = self.shake_fx.offset();

        self.matrix = Affine2::from_translation(Vec2::new(self.x, self.y) + pivot)
            * Affine2::from_angle(self.rotation)
            * Affine2::from_scale(Vec2::splat(zoom))
            * Affine2::from_translation(-pivot)
            * Affine2::from_translation(Vec2::new(shake_x, shake_y));
    }

    /// Map a screen-space point into world space, writing into `output`.
    ///
    /// `output` is caller-owned. A singular view matrix cannot be
    /// inverted; the input point is passed through unchanged in that case.
    pub fn get_world_point(&self, x: f32, y: f32, output: &mut Vec2) {
        let [mva, mvb, mvc, mvd, mve, mvf] = self.matrix.to_cols_array();

        let det = mva * mvd - mvb * mvc;
        if det == 0.0 {
            output.x = x;
            output.y = y;
            return;
        }
        let det = 1.0 / det;

        let ima = mvd * det;
        let imb = -mvb * det;
        let imc = -mvc * det;
        let imd = mva * det;
        let ime = (mvc * mvf - mvd * mve) * det;
        let imf = (mvb * mve - mva * mvf) * det;

        let c = self.rotation.cos();
        let s = self.rotation.sin();

        // Fold the scroll into the screen point before inverting, since
        // the matrix itself is scroll-independent.
        let sx = x + (self.scroll_x * c - self.scroll_y * s) * self.zoom;
        let sy = y + (self.scroll_x * s + self.scroll_y * c) * self.zoom;

        output.x = sx * ima + sy * imc + ime;
        output.y = sx * imb + sy * imd + imf;
    }

    // ---------------------------------------------------------------
    // Culling
    // ---------------------------------------------------------------

    /// Filter `candidates` down to those whose transformed footprint
    /// intersects the viewport, preserving input order.
    ///
    /// `visible` is a caller-owned output buffer, cleared and refilled on
    /// every call. When culling is disabled or the view matrix is
    /// singular, the full input passes through unchanged.
    pub fn cull<'a, T: Cullable>(&self, candidates: &'a [T], visible: &mut Vec<&'a T>) {
        visible.clear();

        if self.disable_cull {
            visible.extend(candidates.iter());
            return;
        }

        let [mva, mvb, mvc, mvd, mve, mvf] = self.matrix.to_cols_array();
        if mva * mvd - mvb * mvc == 0.0 {
            visible.extend(candidates.iter());
            return;
        }

        for object in candidates {
            let Some(m) = object.cull_metrics() else {
                visible.push(object);
                continue;
            };

            let object_x =
                m.x - self.scroll_x * m.scroll_factor_x - m.width * m.origin_x;
            let object_y =
                m.y - self.scroll_y * m.scroll_factor_y - m.height * m.origin_y;

            let tx = object_x * mva + object_y * mvc + mve;
            let ty = object_x * mvb + object_y * mvd + mvf;
            let tw = (object_x + m.width) * mva + (object_y + m.height) * mvc + mve;
            let th = (object_x + m.width) * mvb + (object_y + m.height) * mvd + mvf;

            let cull_w = self.width + m.width;
            let cull_h = self.height + m.height;

            if tx > -m.width && ty > -m.height && tw < cull_w && th < cull_h {
                visible.push(object);
            }
        }
    }

    /// Cull input hit-testing candidates.
    ///
    /// Same test as [`Camera::cull`], but allocates a fresh list per call:
    /// input processing retains the result while other culls reuse their
    /// buffers.
    pub fn cull_hit_test<'a, T: Cullable>(&self, zones: &'a [T]) -> Vec<&'a T> {
        let mut visible = Vec::new();
        self.cull(zones, &mut visible);
        visible
    }

    /// Cull a tilemap's tiles against the viewport.
    ///
    /// Tile size and parallax scroll factor come from the map; tiles use a
    /// top-left pivot. `visible` is a caller-owned buffer, cleared and
    /// refilled on every call.
    pub fn cull_tilemap<'a>(&self, tilemap: &'a Tilemap, visible: &mut Vec<&'a Tile>) {
        visible.clear();

        if self.disable_cull {
            visible.extend(tilemap.tiles.iter());
            return;
        }

        let [mva, mvb, mvc, mvd, mve, mvf] = self.matrix.to_cols_array();
        if mva * mvd - mvb * mvc == 0.0 {
            visible.extend(tilemap.tiles.iter());
            return;
        }

        let tile_w = tilemap.tile_width;
        let tile_h = tilemap.tile_height;
        let cull_w = self.width + tile_w;
        let cull_h = self.height + tile_h;

        for tile in &tilemap.tiles {
            let tile_x = tile.x - self.scroll_x * tilemap.scroll_factor_x;
            let tile_y = tile.y - self.scroll_y * tilemap.scroll_factor_y;

            let tx = tile_x * mva + tile_y * mvc + mve;
            let ty = tile_x * mvb + tile_y * mvd + mvf;
            let tw = (tile_x + tile_w) * mva + (tile_y + tile_h) * mvc + mve;
            let th = (tile_x + tile_w) * mvb + (tile_y + tile_h) * mvd + mvf;

            if tx > -tile_w && ty > -tile_h && tw < cull_w && th < cull_h {
                visible.push(tile);
            }
        }
    }

    // ---------------------------------------------------------------
    // Screen effects
    // ---------------------------------------------------------------

    /// Start a full-screen color flash that decays over `duration`
    /// seconds. Ignored while an earlier flash is still decaying unless
    /// `force` is set.
    pub fn flash(&mut self, duration: f32, red: f32, green: f32, blue: f32, force: bool) {
        self.flash_fx.start(duration, red, green, blue, force);
    }

    /// Start a fade to a solid color over `duration` seconds. The overlay
    /// saturates and holds until [`Camera::reset_fx`]. Ignored while a
    /// fade is active unless `force` is set.
    pub fn fade(&mut self, duration: f32, red: f32, green: f32, blue: f32, force: bool) {
        self.fade_fx.start(duration, red, green, blue, force);
    }

    /// Start a viewport shake for `duration` seconds. `intensity` is a
    /// fraction of the viewport size per axis. Ignored while the camera is
    /// displaced by an earlier shake unless `force` is set.
    pub fn shake(&mut self, duration: f32, intensity: f32, force: bool) {
        self.shake_fx.start(duration, intensity, force);
    }

    /// Advance the effect timers; call once per tick. `delta` is elapsed
    /// seconds, the same unit the effect durations use.
    pub fn update(&mut self, _timestep: f32, delta: f32) {
        self.flash_fx.advance(delta);
        self.fade_fx.advance(delta);
        self.shake_fx
            .advance(delta, self.width, self.height, self.zoom);
    }

    /// Cancel all effects unconditionally. Useful to clear a held fade
    /// overlay after a scene transition completes.
    pub fn reset_fx(&mut self) {
        self.flash_fx.reset();
        self.fade_fx.reset();
        self.shake_fx.reset();
    }

    /// Current flash overlay alpha, 0 when idle.
    pub fn flash_alpha(&self) -> f32 {
        self.flash_fx.alpha()
    }

    /// Flash overlay color as (red, green, blue) in [0, 1].
    pub fn flash_color(&self) -> (f32, f32, f32) {
        self.flash_fx.color()
    }

    /// Current fade overlay alpha, 0 when idle, holds at 1 when saturated.
    pub fn fade_alpha(&self) -> f32 {
        self.fade_fx.alpha()
    }

    /// Fade overlay color as (red, green, blue) in [0, 1].
    pub fn fade_color(&self) -> (f32, f32, f32) {
        self.fade_fx.color()
    }

    /// Current shake displacement applied to the transform.
    pub fn shake_offset(&self) -> (f32, f32) {
        self.shake_fx.offset()
    }

    /// Reseed the shake jitter source, for deterministic replays.
    pub fn set_shake_seed(&mut self, seed: u64) {
        self.shake_fx.seed(seed);
    }

    // ---------------------------------------------------------------
    // Follow target
    // ---------------------------------------------------------------

    /// Follow an entity, keeping it centered in the viewport. The camera
    /// holds only the id; the pre-render system resolves it each frame.
    /// `round_pixels`, when given, also switches pixel rounding.
    pub fn start_follow(&mut self, target: Entity, round_pixels: Option<bool>) {
        self.follow = Some(target);
        if let Some(round) = round_pixels {
            self.round_pixels = round;
        }
    }

    /// Stop following; scroll stays where the follow left it.
    pub fn stop_follow(&mut self) {
        self.follow = None;
    }

    /// The entity currently being followed, if any.
    pub fn follow_target(&self) -> Option<Entity> {
        self.follow
    }

    // ---------------------------------------------------------------
    // Filter identity
    // ---------------------------------------------------------------

    /// This camera's filter bit, matched against
    /// [`CameraFilter`] components by the render-side cull pass.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Assign the filter bit; a camera manager hands out one bit per
    /// camera.
    pub fn set_id(&mut self, id: u32) {
        self.id = id;
    }

    /// Tag an entity's filter so this camera skips it.
    pub fn ignore(&self, filter: &mut CameraFilter) {
        filter.0 |= self.id;
    }

    /// Tag a batch of filters in one go.
    pub fn ignore_each<'a>(&self, filters: impl IntoIterator<Item = &'a mut CameraFilter>) {
        for filter in filters {
            self.ignore(filter);
        }
    }

    // ---------------------------------------------------------------
    // Configuration
    // ---------------------------------------------------------------

    /// Restrict scrolling so the viewport stays inside the given world
    /// rectangle.
    pub fn set_bounds(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.bounds.set_to(x, y, width, height);
        self.use_bounds = true;
    }

    /// Lift the scroll restriction and empty the stored rectangle.
    pub fn remove_bounds(&mut self) {
        self.use_bounds = false;
        self.bounds.set_empty();
    }

    /// The scroll bounds rectangle (meaningful while `use_bounds` is set).
    pub fn bounds(&self) -> &Rect {
        &self.bounds
    }

    /// Center the viewport on the bounds rectangle.
    pub fn center_to_bounds(&mut self) {
        self.scroll_x = self.bounds.center_x() - self.width * 0.5;
        self.scroll_y = self.bounds.center_y() - self.height * 0.5;
    }

    /// Scroll by half the viewport size.
    pub fn center_to_size(&mut self) {
        self.scroll_x = self.width * 0.5;
        self.scroll_y = self.height * 0.5;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Associate this camera with a scene by key.
    pub fn set_scene(&mut self, scene: impl Into<String>) {
        self.scene = Some(scene.into());
    }

    /// Move and resize the viewport in one call.
    pub fn set_viewport(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.x = x;
        self.y = y;
        self.width = width;
        self.height = height;
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    pub fn set_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn set_scroll(&mut self, x: f32, y: f32) {
        self.scroll_x = x;
        self.scroll_y = y;
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom;
    }

    /// Set the rotation in radians.
    pub fn set_rotation(&mut self, radians: f32) {
        self.rotation = radians;
    }

    /// Set the rotation in degrees.
    pub fn set_angle(&mut self, degrees: f32) {
        self.rotation = degrees.to_radians();
    }

    pub fn set_round_pixels(&mut self, round: bool) {
        self.round_pixels = round;
    }

    /// Parse and apply a background color descriptor (see
    /// [`Color::parse`]). A descriptor that fails to parse is logged and
    /// ignored, keeping the previous background.
    pub fn set_background_color(&mut self, descriptor: &str) {
        match Color::parse(descriptor) {
            Ok(color) => {
                self.background_color = color;
                self.transparent = color.a == 0;
            }
            Err(err) => warn!("Ignoring background color {:?}: {}", descriptor, err),
        }
    }

    // ---------------------------------------------------------------
    // Snapshot
    // ---------------------------------------------------------------

    /// Snapshot of the public view state, for persistence and debugging.
    /// `bounds` is present only while scroll bounds are enabled.
    pub fn snapshot(&self) -> CameraSnapshot {
        CameraSnapshot {
            name: self.name.clone(),
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            zoom: self.zoom,
            rotation: self.rotation,
            round_pixels: self.round_pixels,
            scroll_x: self.scroll_x,
            scroll_y: self.scroll_y,
            background_color: self.background_color.rgba(),
            bounds: self.use_bounds.then_some(self.bounds),
        }
    }

    /// The snapshot as a JSON value. There is no corresponding loader;
    /// snapshots are an output format only.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self.snapshot())
    }
}

/// Serializable view of a camera's public state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CameraSnapshot {
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub zoom: f32,
    pub rotation: f32,
    pub round_pixels: bool,
    pub scroll_x: f32,
    pub scroll_y: f32,
    pub background_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Rect>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    /// Minimal cull candidate for unit tests.
    struct TestObject {
        label: &'static str,
        metrics: Option<CullMetrics>,
    }

    impl TestObject {
        fn sized(label: &'static str, x: f32, y: f32, w: f32, h: f32) -> Self {
            TestObject {
                label,
                metrics: Some(CullMetrics::new(x, y, w, h)),
            }
        }

        fn sizeless(label: &'static str) -> Self {
            TestObject {
                label,
                metrics: None,
            }
        }
    }

    impl Cullable for TestObject {
        fn cull_metrics(&self) -> Option<CullMetrics> {
            self.metrics
        }
    }

    fn labels(visible: &[&TestObject]) -> Vec<&'static str> {
        visible.iter().map(|o| o.label).collect()
    }

    // ==================== TRANSFORM TESTS ====================

    #[test]
    fn test_pre_render_neutral_state_is_viewport_translation() {
        let mut camera = Camera::new(10.0, 20.0, 800.0, 600.0);
        camera.pre_render(0.0, None);

        // zoom 1, no rotation, no scroll: pivot terms cancel and only the
        // viewport position remains.
        let [a, b, c, d, e, f] = camera.matrix.to_cols_array();
        assert!(approx_eq(a, 1.0));
        assert!(approx_eq(b, 0.0));
        assert!(approx_eq(c, 0.0));
        assert!(approx_eq(d, 1.0));
        assert!(approx_eq(e, 10.0));
        assert!(approx_eq(f, 20.0));
    }

    #[test]
    fn test_get_world_point_round_trips_viewport_translation() {
        let mut camera = Camera::new(10.0, 20.0, 800.0, 600.0);
        camera.pre_render(0.0, None);

        let mut out = Vec2::ZERO;
        camera.get_world_point(5.0, 5.0, &mut out);
        assert!(approx_eq(out.x, -5.0)); // 5 - 10
        assert!(approx_eq(out.y, -15.0)); // 5 - 20
    }

    #[test]
    fn test_pre_render_zoom_pivots_on_viewport_center() {
        let mut camera = Camera::new(0.0, 0.0, 800.0, 600.0);
        camera.set_zoom(2.0);
        camera.pre_render(0.0, None);

        let [a, b, c, d, e, f] = camera.matrix.to_cols_array();
        assert!(approx_eq(a, 2.0));
        assert!(approx_eq(b, 0.0));
        assert!(approx_eq(c, 0.0));
        assert!(approx_eq(d, 2.0));
        assert!(approx_eq(e, -400.0));
        assert!(approx_eq(f, -300.0));

        // The pivot itself is fixed under the zoom.
        let center = camera.matrix.transform_point2(Vec2::new(400.0, 300.0));
        assert!(approx_eq(center.x, 400.0));
        assert!(approx_eq(center.y, 300.0));
    }

    #[test]
    fn test_pre_render_rotation_keeps_pivot_fixed() {
        let mut camera = Camera::new(0.0, 0.0, 800.0, 600.0);
        camera.set_rotation(std::f32::consts::FRAC_PI_2);
        camera.pre_render(0.0, None);

        let center = camera.matrix.transform_point2(Vec2::new(400.0, 300.0));
        assert!(approx_eq(center.x, 400.0));
        assert!(approx_eq(center.y, 300.0));

        // A point right of the pivot maps below it under a +90° turn.
        let right = camera.matrix.transform_point2(Vec2::new(500.0, 300.0));
        assert!(approx_eq(right.x, 400.0));
        assert!(approx_eq(right.y, 400.0));
    }

    #[test]
    fn test_pre_render_base_scale_adds_to_zoom() {
        let mut camera = Camera::new(0.0, 0.0, 800.0, 600.0);
        camera.pre_render(1.0, None);

        let [a, _, _, d, _, _] = camera.matrix.to_cols_array();
        assert!(approx_eq(a, 2.0));
        assert!(approx_eq(d, 2.0));
    }

    #[test]
    fn test_pre_render_clamps_scroll_to_bounds() {
        let mut camera = Camera::new(0.0, 0.0, 800.0, 600.0);
        camera.set_bounds(0.0, 0.0, 1000.0, 1000.0);
        camera.set_scroll(-50.0, 2000.0);
        camera.pre_render(0.0, None);

        assert!(approx_eq(camera.scroll_x, 0.0));
        assert!(approx_eq(camera.scroll_y, 400.0)); // 1000 - 600
    }

    #[test]
    fn test_pre_render_bounds_smaller_than_viewport_pin_to_origin() {
        let mut camera = Camera::new(0.0, 0.0, 800.0, 600.0);
        camera.set_bounds(100.0, 100.0, 200.0, 200.0);
        camera.set_scroll(5000.0, -5000.0);
        camera.pre_render(0.0, None);

        // Upper clamp collapses onto the bounds origin per axis.
        assert!(approx_eq(camera.scroll_x, 100.0));
        assert!(approx_eq(camera.scroll_y, 100.0));
    }

    #[test]
    fn test_pre_render_follow_overrides_manual_scroll() {
        let mut camera = Camera::new(0.0, 0.0, 800.0, 600.0);
        camera.set_scroll(999.0, 999.0);
        camera.pre_render(0.0, Some(Vec2::new(500.0, 500.0)));

        assert!(approx_eq(camera.scroll_x, 100.0));
        assert!(approx_eq(camera.scroll_y, 200.0));
    }

    #[test]
    fn test_pre_render_follow_then_bounds_clamp() {
        let mut camera = Camera::new(0.0, 0.0, 800.0, 600.0);
        camera.set_bounds(0.0, 0.0, 1000.0, 1000.0);
        // Target near the world edge: centering would scroll past the
        // bounds, so the clamp wins.
        camera.pre_render(0.0, Some(Vec2::new(950.0, 950.0)));

        assert!(approx_eq(camera.scroll_x, 200.0)); // 1000 - 800
        assert!(approx_eq(camera.scroll_y, 400.0)); // 1000 - 600
    }

    #[test]
    fn test_pre_render_rounds_scroll_when_enabled() {
        let mut camera = Camera::new(0.0, 0.0, 800.0, 600.0);
        camera.set_round_pixels(true);
        camera.set_scroll(10.4, 10.6);
        camera.pre_render(0.0, None);

        assert!(approx_eq(camera.scroll_x, 10.0));
        assert!(approx_eq(camera.scroll_y, 11.0));
    }

    #[test]
    fn test_get_world_point_applies_scroll() {
        let mut camera = Camera::new(0.0, 0.0, 800.0, 600.0);
        camera.set_scroll(100.0, 50.0);
        camera.pre_render(0.0, None);

        let mut out = Vec2::ZERO;
        camera.get_world_point(400.0, 300.0, &mut out);
        assert!(approx_eq(out.x, 500.0));
        assert!(approx_eq(out.y, 350.0));
    }

    #[test]
    fn test_get_world_point_inverts_zoom() {
        let mut camera = Camera::new(0.0, 0.0, 800.0, 600.0);
        camera.set_zoom(2.0);
        camera.pre_render(0.0, None);

        // The viewport center maps to itself regardless of zoom.
        let mut out = Vec2::ZERO;
        camera.get_world_point(400.0, 300.0, &mut out);
        assert!(approx_eq(out.x, 400.0));
        assert!(approx_eq(out.y, 300.0));

        // A screen corner reaches only half as far into the world.
        camera.get_world_point(0.0, 0.0, &mut out);
        assert!(approx_eq(out.x, 200.0));
        assert!(approx_eq(out.y, 150.0));
    }

    #[test]
    fn test_get_world_point_degenerate_matrix_passes_through() {
        let mut camera = Camera::new(0.0, 0.0, 800.0, 600.0);
        camera.set_zoom(0.0);
        camera.pre_render(0.0, None);

        let mut out = Vec2::ZERO;
        camera.get_world_point(123.0, 456.0, &mut out);
        assert!(approx_eq(out.x, 123.0));
        assert!(approx_eq(out.y, 456.0));
    }

    // ==================== CULL TESTS ====================

    fn neutral_camera() -> Camera {
        let mut camera = Camera::new(0.0, 0.0, 800.0, 600.0);
        camera.pre_render(0.0, None);
        camera
    }

    #[test]
    fn test_cull_keeps_objects_in_view_preserving_order() {
        let camera = neutral_camera();
        let objects = vec![
            TestObject::sized("a", 100.0, 100.0, 50.0, 50.0),
            TestObject::sized("far-left", -200.0, 100.0, 50.0, 50.0),
            TestObject::sized("b", 700.0, 500.0, 50.0, 50.0),
        ];

        let mut visible = Vec::new();
        camera.cull(&objects, &mut visible);
        assert_eq!(labels(&visible), vec!["a", "b"]);
    }

    #[test]
    fn test_cull_excludes_object_far_outside_view() {
        let camera = neutral_camera();
        let objects = vec![
            TestObject::sized("right", 900.0, 100.0, 50.0, 50.0),
            TestObject::sized("below", 100.0, 700.0, 50.0, 50.0),
            TestObject::sized("left", -60.0, 100.0, 50.0, 50.0),
        ];

        let mut visible = Vec::new();
        camera.cull(&objects, &mut visible);
        assert!(visible.is_empty());
    }

    #[test]
    fn test_cull_always_keeps_sizeless_objects() {
        let camera = neutral_camera();
        let objects = vec![
            TestObject::sizeless("emitter"),
            TestObject::sized("far", 5000.0, 5000.0, 10.0, 10.0),
        ];

        let mut visible = Vec::new();
        camera.cull(&objects, &mut visible);
        assert_eq!(labels(&visible), vec!["emitter"]);
    }

    #[test]
    fn test_cull_applies_scroll_factor() {
        let mut camera = Camera::new(0.0, 0.0, 800.0, 600.0);
        camera.set_scroll(100.0, 0.0);
        camera.pre_render(0.0, None);

        let mut scrolled = CullMetrics::new(0.0, 0.0, 50.0, 50.0);
        scrolled.scroll_factor_x = 1.0;
        let mut pinned = CullMetrics::new(0.0, 0.0, 50.0, 50.0);
        pinned.scroll_factor_x = 0.0;

        let objects = vec![
            TestObject {
                label: "scrolled-out",
                metrics: Some(scrolled),
            },
            TestObject {
                label: "pinned",
                metrics: Some(pinned),
            },
        ];

        let mut visible = Vec::new();
        camera.cull(&objects, &mut visible);
        // The world-locked object scrolled off the left edge; the pinned
        // one stays put.
        assert_eq!(labels(&visible), vec!["pinned"]);
    }

    #[test]
    fn test_cull_respects_origin() {
        let camera = neutral_camera();

        let mut bottom_right_pivot = CullMetrics::new(0.0, 0.0, 100.0, 100.0);
        bottom_right_pivot.origin_x = 1.0;
        bottom_right_pivot.origin_y = 1.0;

        let objects = vec![TestObject {
            label: "pivoted",
            metrics: Some(bottom_right_pivot),
        }];

        // Top-left is shifted to (-100, -100), fully outside the view.
        let mut visible = Vec::new();
        camera.cull(&objects, &mut visible);
        assert!(visible.is_empty());
    }

    #[test]
    fn test_cull_disabled_passes_everything() {
        let mut camera = neutral_camera();
        camera.disable_cull = true;
        let objects = vec![TestObject::sized("far", 9000.0, 9000.0, 10.0, 10.0)];

        let mut visible = Vec::new();
        camera.cull(&objects, &mut visible);
        assert_eq!(labels(&visible), vec!["far"]);
    }

    #[test]
    fn test_cull_degenerate_matrix_passes_everything() {
        let mut camera = Camera::new(0.0, 0.0, 800.0, 600.0);
        camera.set_zoom(0.0);
        camera.pre_render(0.0, None);

        let objects = vec![TestObject::sized("far", 9000.0, 9000.0, 10.0, 10.0)];
        let mut visible = Vec::new();
        camera.cull(&objects, &mut visible);
        assert_eq!(labels(&visible), vec!["far"]);
    }

    #[test]
    fn test_cull_clears_stale_buffer_contents() {
        let camera = neutral_camera();
        let first = vec![TestObject::sized("a", 0.0, 0.0, 10.0, 10.0)];
        let second = vec![TestObject::sized("b", 0.0, 0.0, 10.0, 10.0)];

        let mut visible = Vec::new();
        camera.cull(&first, &mut visible);
        assert_eq!(labels(&visible), vec!["a"]);

        camera.cull(&second, &mut visible);
        assert_eq!(labels(&visible), vec!["b"]);
    }

    #[test]
    fn test_cull_hit_test_allocates_fresh_list() {
        let camera = neutral_camera();
        let zones = vec![
            TestObject::sized("in", 10.0, 10.0, 20.0, 20.0),
            TestObject::sizeless("whole-screen"),
            TestObject::sized("out", -500.0, -500.0, 20.0, 20.0),
        ];

        let visible = camera.cull_hit_test(&zones);
        assert_eq!(labels(&visible), vec!["in", "whole-screen"]);
    }

    // ==================== TILEMAP CULL TESTS ====================

    #[test]
    fn test_cull_tilemap_strict_boundaries() {
        let camera = neutral_camera();
        let mut map = Tilemap::new(32.0, 32.0);
        map.push(100.0, 100.0, 1); // inside
        map.push(-64.0, 0.0, 2); // fully left of the expanded view
        map.push(-32.0, 0.0, 3); // exactly at the left cutoff: excluded
        map.push(-31.0, 0.0, 4); // just inside the cutoff
        map.push(800.0, 0.0, 5); // exactly at the right cutoff: excluded
        map.push(799.0, 0.0, 6); // just inside

        let mut visible = Vec::new();
        camera.cull_tilemap(&map, &mut visible);
        let ids: Vec<u32> = visible.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 4, 6]);
    }

    #[test]
    fn test_cull_tilemap_map_level_scroll_factor() {
        let mut camera = Camera::new(0.0, 0.0, 800.0, 600.0);
        camera.set_scroll(200.0, 0.0);
        camera.pre_render(0.0, None);

        let mut map = Tilemap::new(32.0, 32.0);
        map.scroll_factor_x = 0.5;
        map.push(0.0, 0.0, 1); // at -100 after parallax scroll: out
        map.push(132.0, 0.0, 2); // at 32 after parallax scroll: in

        let mut visible = Vec::new();
        camera.cull_tilemap(&map, &mut visible);
        let ids: Vec<u32> = visible.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_cull_tilemap_degenerate_matrix_passes_everything() {
        let mut camera = Camera::new(0.0, 0.0, 800.0, 600.0);
        camera.set_zoom(0.0);
        camera.pre_render(0.0, None);

        let mut map = Tilemap::new(32.0, 32.0);
        map.push(-5000.0, -5000.0, 7);

        let mut visible = Vec::new();
        camera.cull_tilemap(&map, &mut visible);
        assert_eq!(visible.len(), 1);
    }

    // ==================== EFFECT TESTS ====================

    #[test]
    fn test_flash_decays_through_update() {
        let mut camera = Camera::new(0.0, 0.0, 800.0, 600.0);
        camera.flash(100.0, 1.0, 0.0, 0.0, false);
        camera.update(0.0, 50.0);
        assert!(approx_eq(camera.flash_alpha(), 0.5));

        // Re-trigger without force while decaying: no-op.
        camera.flash(50.0, 0.0, 1.0, 0.0, false);
        assert!(approx_eq(camera.flash_alpha(), 0.5));
        assert_eq!(camera.flash_color(), (1.0, 0.0, 0.0));

        // Forced restart takes the new duration.
        camera.flash(50.0, 0.0, 1.0, 0.0, true);
        assert!(approx_eq(camera.flash_alpha(), 1.0));
        camera.update(0.0, 25.0);
        assert!(approx_eq(camera.flash_alpha(), 0.5));
    }

    #[test]
    fn test_fade_saturates_and_holds() {
        let mut camera = Camera::new(0.0, 0.0, 800.0, 600.0);
        camera.fade(1.0, 0.0, 0.0, 0.0, false);
        camera.update(0.0, 0.5);
        assert!(camera.fade_alpha() > 0.0 && camera.fade_alpha() < 1.0);
        camera.update(0.0, 1.0);
        assert!(approx_eq(camera.fade_alpha(), 1.0));
        camera.update(0.0, 5.0);
        assert!(approx_eq(camera.fade_alpha(), 1.0));
    }

    #[test]
    fn test_shake_jitters_within_bounds_then_expires() {
        let mut camera = Camera::new(0.0, 0.0, 800.0, 600.0);
        camera.set_shake_seed(11);
        camera.shake(0.2, 0.1, false);

        let mut spent = 0.0;
        while spent < 0.4 {
            camera.update(0.0, 0.05);
            spent += 0.05;
            let (ox, oy) = camera.shake_offset();
            assert!(ox.abs() <= 0.1 * 800.0);
            assert!(oy.abs() <= 0.1 * 600.0);
        }
        assert_eq!(camera.shake_offset(), (0.0, 0.0));
    }

    #[test]
    fn test_shake_offset_feeds_matrix() {
        let mut camera = Camera::new(0.0, 0.0, 800.0, 600.0);
        camera.set_shake_seed(5);
        camera.shake(10.0, 0.05, false);
        camera.update(0.0, 0.1);
        camera.pre_render(0.0, None);

        let (ox, oy) = camera.shake_offset();
        assert!(ox != 0.0 || oy != 0.0);
        let [_, _, _, _, e, f] = camera.matrix.to_cols_array();
        assert!(approx_eq(e, ox));
        assert!(approx_eq(f, oy));
    }

    #[test]
    fn test_reset_fx_clears_everything() {
        let mut camera = Camera::new(0.0, 0.0, 800.0, 600.0);
        camera.set_shake_seed(2);
        camera.flash(1.0, 1.0, 1.0, 1.0, false);
        camera.fade(1.0, 0.0, 0.0, 0.0, false);
        camera.shake(5.0, 0.1, false);
        camera.update(0.0, 0.1);

        camera.reset_fx();
        assert!(approx_eq(camera.flash_alpha(), 0.0));
        assert!(approx_eq(camera.fade_alpha(), 0.0));
        assert_eq!(camera.shake_offset(), (0.0, 0.0));
    }

    // ==================== CONFIGURATION TESTS ====================

    #[test]
    fn test_center_to_bounds() {
        let mut camera = Camera::new(0.0, 0.0, 800.0, 600.0);
        camera.set_bounds(0.0, 0.0, 1000.0, 1000.0);
        camera.center_to_bounds();
        assert!(approx_eq(camera.scroll_x, 100.0));
        assert!(approx_eq(camera.scroll_y, 200.0));
    }

    #[test]
    fn test_center_to_size() {
        let mut camera = Camera::new(0.0, 0.0, 800.0, 600.0);
        camera.center_to_size();
        assert!(approx_eq(camera.scroll_x, 400.0));
        assert!(approx_eq(camera.scroll_y, 300.0));
    }

    #[test]
    fn test_remove_bounds_empties_rectangle() {
        let mut camera = Camera::new(0.0, 0.0, 800.0, 600.0);
        camera.set_bounds(0.0, 0.0, 1000.0, 1000.0);
        assert!(camera.use_bounds);
        camera.remove_bounds();
        assert!(!camera.use_bounds);
        assert!(camera.bounds().is_empty());
    }

    #[test]
    fn test_set_angle_converts_degrees() {
        let mut camera = Camera::new(0.0, 0.0, 800.0, 600.0);
        camera.set_angle(90.0);
        assert!(approx_eq(camera.rotation, std::f32::consts::FRAC_PI_2));
    }

    #[test]
    fn test_set_background_color_derives_transparency() {
        let mut camera = Camera::new(0.0, 0.0, 800.0, 600.0);
        assert!(camera.transparent);

        camera.set_background_color("#1e90ff");
        assert!(!camera.transparent);
        assert_eq!(camera.background_color, Color::new(30, 144, 255, 255));

        camera.set_background_color("rgba(0,0,0,0)");
        assert!(camera.transparent);
    }

    #[test]
    fn test_set_background_color_keeps_previous_on_parse_error() {
        let mut camera = Camera::new(0.0, 0.0, 800.0, 600.0);
        camera.set_background_color("#1e90ff");
        camera.set_background_color("not-a-color");
        assert_eq!(camera.background_color, Color::new(30, 144, 255, 255));
        assert!(!camera.transparent);
    }

    #[test]
    fn test_ignore_tags_filter_with_camera_bit() {
        let mut camera = Camera::new(0.0, 0.0, 800.0, 600.0);
        camera.set_id(0b100);

        let mut filter = CameraFilter::default();
        camera.ignore(&mut filter);
        assert!(filter.ignores(0b100));
        assert!(!filter.ignores(0b001));

        let mut batch = [CameraFilter::default(), CameraFilter(0b001)];
        camera.ignore_each(batch.iter_mut());
        assert!(batch[0].ignores(0b100));
        assert_eq!(batch[1].0, 0b101);
    }

    #[test]
    fn test_follow_handle_is_plain_id() {
        let mut world = bevy_ecs::world::World::new();
        let target = world.spawn_empty().id();

        let mut camera = Camera::new(0.0, 0.0, 800.0, 600.0);
        camera.start_follow(target, Some(true));
        assert_eq!(camera.follow_target(), Some(target));
        assert!(camera.round_pixels);

        camera.stop_follow();
        assert!(camera.follow_target().is_none());
    }

    // ==================== SNAPSHOT TESTS ====================

    #[test]
    fn test_snapshot_round_trips_scalar_state() {
        let mut camera = Camera::new(5.0, 6.0, 640.0, 480.0);
        camera.set_name("minimap");
        camera.set_zoom(2.0);
        camera.set_rotation(0.5);
        camera.set_round_pixels(true);
        camera.set_scroll(12.0, 34.0);
        camera.set_background_color("#fff");

        let snap = camera.snapshot();
        assert_eq!(snap.name, "minimap");
        assert_eq!(snap.x, 5.0);
        assert_eq!(snap.y, 6.0);
        assert_eq!(snap.width, 640.0);
        assert_eq!(snap.height, 480.0);
        assert_eq!(snap.zoom, 2.0);
        assert_eq!(snap.rotation, 0.5);
        assert!(snap.round_pixels);
        assert_eq!(snap.scroll_x, 12.0);
        assert_eq!(snap.scroll_y, 34.0);
        assert_eq!(snap.background_color, "rgba(255,255,255,1)");
        assert!(snap.bounds.is_none());
    }

    #[test]
    fn test_snapshot_bounds_present_iff_enabled() {
        let mut camera = Camera::new(0.0, 0.0, 800.0, 600.0);
        let json = camera.to_json().unwrap();
        assert!(json.get("bounds").is_none());

        camera.set_bounds(1.0, 2.0, 3.0, 4.0);
        let json = camera.to_json().unwrap();
        let bounds = json.get("bounds").unwrap();
        assert_eq!(bounds.get("x").unwrap().as_f64().unwrap(), 1.0);
        assert_eq!(bounds.get("height").unwrap().as_f64().unwrap(), 4.0);

        camera.remove_bounds();
        let json = camera.to_json().unwrap();
        assert!(json.get("bounds").is_none());
    }
}
