//! Sprite-sheet animation playback.
//!
//! An [`AnimatedSprite`] couples the immutable description of a clip (frame
//! geometry on the sheet, timing, loop flag) with a small mutable playback
//! cursor (elapsed seconds plus a playing flag). Frame selection is a pure
//! function of elapsed time, so the same clip can be advanced off-screen and
//! still resolve to the right frame when it becomes visible again.
//!
//! The sheet texture is not owned here; callers pass it to [`render`] so a
//! single texture can back several clips (e.g. idle and walk rows of the
//! same sheet).
//!
//! [`render`]: AnimatedSprite::render

use raylib::prelude::*;
use thiserror::Error;

/// Rejected clip construction parameters.
///
/// Each variant maps to a division the frame resolver would otherwise
/// perform with a zero denominator, or to a degenerate source rectangle.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClipError {
    #[error("frame count must be at least 1")]
    ZeroFrameCount,
    #[error("frame time must be positive, got {0}")]
    NonPositiveFrameTime(f64),
    #[error("frame columns must be at least 1")]
    ZeroFrameColumns,
    #[error("frame size must be positive, got {0}x{1}")]
    DegenerateFrameSize(f32, f32),
}

/// A sprite-sheet animation clip with its playback state.
///
/// Frames are laid out left-to-right, top-to-bottom starting at `origin` on
/// the sheet, `frame_columns` per row. Playback maps elapsed time to a frame
/// index: looping clips wrap with a modulo, non-looping clips freeze on the
/// last frame (playback itself is not stopped, the clock keeps running).
#[derive(Debug, Clone)]
pub struct AnimatedSprite {
    /// Top-left corner of the clip's first row on the sheet, in pixels.
    origin: Vector2,
    /// Size of a single frame in pixels. Both components are positive.
    frame_size: Vector2,
    /// Normalized pivot inside the destination rectangle, clamped to [0,1].
    frame_origin: Vector2,
    frame_columns: u32,
    /// Seconds a single frame stays on screen.
    frame_time: f64,
    frame_count: u32,
    /// Sheet-absolute index of the clip's first frame.
    first_frame: u32,
    looped: bool,

    elapsed: f64,
    playing: bool,
}

impl AnimatedSprite {
    /// Create a clip. Fails when any parameter would make frame resolution
    /// divide by zero or produce an empty source rectangle; the pivot is
    /// clamped into [0,1] component-wise.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        origin: Vector2,
        frame_size: Vector2,
        frame_origin: Vector2,
        frame_columns: u32,
        frame_time: f64,
        frame_count: u32,
        first_frame: u32,
        looped: bool,
    ) -> Result<Self, ClipError> {
        if frame_count == 0 {
            return Err(ClipError::ZeroFrameCount);
        }
        if frame_time <= 0.0 {
            return Err(ClipError::NonPositiveFrameTime(frame_time));
        }
        if frame_columns == 0 {
            return Err(ClipError::ZeroFrameColumns);
        }
        if frame_size.x <= 0.0 || frame_size.y <= 0.0 {
            return Err(ClipError::DegenerateFrameSize(frame_size.x, frame_size.y));
        }

        Ok(Self {
            origin,
            frame_size,
            frame_origin: Vector2 {
                x: frame_origin.x.clamp(0.0, 1.0),
                y: frame_origin.y.clamp(0.0, 1.0),
            },
            frame_columns,
            frame_time,
            frame_count,
            first_frame,
            looped,
            elapsed: 0.0,
            playing: false,
        })
    }

    /// Advance the playback clock. Does nothing while stopped; `dt` is
    /// expected to be non-negative (the frame loop clamps its deltas).
    pub fn advance(&mut self, dt: f64) {
        if !self.playing {
            return;
        }
        self.elapsed += dt;
    }

    /// Let [`advance`](Self::advance) accumulate time again. The clock is
    /// not reset, playback resumes where it stopped.
    pub fn play(&mut self) {
        self.playing = true;
    }

    /// Freeze the playback clock without resetting it.
    #[allow(dead_code)]
    pub fn stop(&mut self) {
        self.playing = false;
    }

    /// Rewind to the first frame, independent of the playing flag.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    /// Jump to frame `n`. The index is unchecked: values past the frame
    /// count resolve through the same wrap/clamp rule as normal playback.
    #[allow(dead_code)]
    pub fn set_frame(&mut self, n: u32) {
        self.elapsed = f64::from(n) * self.frame_time;
    }

    #[allow(dead_code)]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Resolve the clip-relative frame index for the current elapsed time.
    ///
    /// Looping clips wrap (the result is always below the frame count);
    /// non-looping clips clamp to the last frame once finished.
    pub fn current_frame(&self) -> u32 {
        let raw = (self.elapsed / self.frame_time) as u64;
        let index = if self.looped {
            raw % u64::from(self.frame_count)
        } else {
            raw.min(u64::from(self.frame_count) - 1)
        };
        index as u32
    }

    /// Source rectangle of the current frame on the sheet.
    ///
    /// Flipping negates the corresponding dimension; the rasterizer reads a
    /// negative width/height as "sample mirrored along that axis".
    pub fn source_rect(&self, flip_x: bool, flip_y: bool) -> Rectangle {
        let index = self.current_frame() + self.first_frame;
        let column = index % self.frame_columns;
        let row = index / self.frame_columns;

        let mut source = Rectangle {
            x: self.origin.x + column as f32 * self.frame_size.x,
            y: self.origin.y + row as f32 * self.frame_size.y,
            width: self.frame_size.x,
            height: self.frame_size.y,
        };
        if flip_x {
            source.width = -source.width;
        }
        if flip_y {
            source.height = -source.height;
        }
        source
    }

    /// Pivot point in destination pixels for the given render scale, i.e.
    /// the point of the destination rectangle that lands on the draw
    /// position and that rotation spins around.
    pub fn draw_origin(&self, scale: Vector2) -> Vector2 {
        Vector2 {
            x: self.frame_size.x * scale.x * self.frame_origin.x,
            y: self.frame_size.y * scale.y * self.frame_origin.y,
        }
    }

    /// Draw the current frame at `position`.
    ///
    /// `scale` is a per-axis factor (pass the same value twice for uniform
    /// scaling), `rotation` is degrees around the pivot.
    #[allow(clippy::too_many_arguments)]
    pub fn render(
        &self,
        d: &mut impl RaylibDraw,
        texture: &Texture2D,
        position: Vector2,
        rotation: f32,
        scale: Vector2,
        tint: Color,
        flip_x: bool,
        flip_y: bool,
    ) {
        let source = self.source_rect(flip_x, flip_y);
        let dest = Rectangle {
            x: position.x,
            y: position.y,
            width: self.frame_size.x * scale.x,
            height: self.frame_size.y * scale.y,
        };
        d.draw_texture_pro(texture, source, dest, self.draw_origin(scale), rotation, tint);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Five frames in one row of 32x32 cells, 0.2 s each, looping. Matches
    /// the fox sheet rows the demo uses.
    fn looping_clip() -> AnimatedSprite {
        AnimatedSprite::new(
            Vector2 { x: 0.0, y: 0.0 },
            Vector2 { x: 32.0, y: 32.0 },
            Vector2 { x: 0.5, y: 0.5 },
            5,
            0.2,
            5,
            0,
            true,
        )
        .unwrap()
    }

    fn one_shot_clip() -> AnimatedSprite {
        AnimatedSprite::new(
            Vector2 { x: 0.0, y: 0.0 },
            Vector2 { x: 32.0, y: 32.0 },
            Vector2 { x: 0.5, y: 0.5 },
            5,
            0.2,
            5,
            0,
            false,
        )
        .unwrap()
    }

    #[test]
    fn test_new_rejects_zero_frame_count() {
        let result = AnimatedSprite::new(
            Vector2::zero(),
            Vector2 { x: 32.0, y: 32.0 },
            Vector2 { x: 0.5, y: 0.5 },
            5,
            0.2,
            0,
            0,
            true,
        );
        assert_eq!(result.unwrap_err(), ClipError::ZeroFrameCount);
    }

    #[test]
    fn test_new_rejects_zero_frame_time() {
        let result = AnimatedSprite::new(
            Vector2::zero(),
            Vector2 { x: 32.0, y: 32.0 },
            Vector2 { x: 0.5, y: 0.5 },
            5,
            0.0,
            5,
            0,
            true,
        );
        assert!(matches!(result, Err(ClipError::NonPositiveFrameTime(_))));
    }

    #[test]
    fn test_new_rejects_zero_columns() {
        let result = AnimatedSprite::new(
            Vector2::zero(),
            Vector2 { x: 32.0, y: 32.0 },
            Vector2 { x: 0.5, y: 0.5 },
            0,
            0.2,
            5,
            0,
            true,
        );
        assert_eq!(result.unwrap_err(), ClipError::ZeroFrameColumns);
    }

    #[test]
    fn test_new_rejects_degenerate_frame_size() {
        let result = AnimatedSprite::new(
            Vector2::zero(),
            Vector2 { x: 32.0, y: 0.0 },
            Vector2 { x: 0.5, y: 0.5 },
            5,
            0.2,
            5,
            0,
            true,
        );
        assert!(matches!(result, Err(ClipError::DegenerateFrameSize(_, _))));
    }

    #[test]
    fn test_new_clamps_pivot_into_unit_square() {
        let clip = AnimatedSprite::new(
            Vector2::zero(),
            Vector2 { x: 32.0, y: 32.0 },
            Vector2 { x: -0.5, y: 2.0 },
            5,
            0.2,
            5,
            0,
            true,
        )
        .unwrap();
        // Pivot 0 / 1 means the draw origin collapses to a corner.
        let origin = clip.draw_origin(Vector2 { x: 1.0, y: 1.0 });
        assert_eq!(origin.x, 0.0);
        assert_eq!(origin.y, 32.0);
    }

    #[test]
    fn test_looping_frame_selection_scenario() {
        let mut clip = looping_clip();
        clip.play();

        clip.advance(0.45);
        assert_eq!(clip.current_frame(), 2);

        // 0.45 + 0.6 = 1.05 -> raw index 5 wraps to 0.
        clip.advance(0.6);
        assert_eq!(clip.current_frame(), 0);
    }

    #[test]
    fn test_looping_index_is_periodic() {
        let mut a = looping_clip();
        let mut b = looping_clip();
        a.play();
        b.play();

        a.advance(0.37);
        // Full period = frame_count * frame_time = 1.0 s.
        b.advance(0.37 + 1.0);
        assert_eq!(a.current_frame(), b.current_frame());
    }

    #[test]
    fn test_looping_index_stays_in_range() {
        let mut clip = looping_clip();
        clip.play();
        for _ in 0..1000 {
            clip.advance(0.073);
            assert!(clip.current_frame() < 5);
        }
    }

    #[test]
    fn test_one_shot_clamps_on_last_frame() {
        let mut clip = one_shot_clip();
        clip.play();

        clip.advance(10.0);
        assert_eq!(clip.current_frame(), 4);

        // Finishing does not stop the clock, it only clamps the index.
        assert!(clip.is_playing());
        clip.advance(10.0);
        assert_eq!(clip.current_frame(), 4);
    }

    #[test]
    fn test_one_shot_index_is_monotone() {
        let mut clip = one_shot_clip();
        clip.play();

        let mut previous = clip.current_frame();
        for _ in 0..50 {
            clip.advance(0.05);
            let current = clip.current_frame();
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn test_reset_rewinds_to_first_frame() {
        let mut clip = looping_clip();
        clip.play();
        clip.advance(0.45);
        assert_eq!(clip.current_frame(), 2);

        clip.reset();
        assert_eq!(clip.current_frame(), 0);

        // Reset is independent of the playing flag.
        clip.advance(0.45);
        clip.stop();
        clip.reset();
        assert_eq!(clip.current_frame(), 0);
    }

    #[test]
    fn test_set_frame_wraps_like_playback() {
        let mut clip = looping_clip();
        clip.set_frame(3);
        assert_eq!(clip.current_frame(), 3);

        clip.set_frame(7);
        assert_eq!(clip.current_frame(), 2);
    }

    #[test]
    fn test_advance_only_counts_while_playing() {
        let mut clip = looping_clip();

        // Stopped by default: the clock must not move.
        clip.advance(0.45);
        assert_eq!(clip.current_frame(), 0);

        clip.play();
        clip.advance(0.45);
        assert_eq!(clip.current_frame(), 2);

        clip.stop();
        clip.advance(0.45);
        assert_eq!(clip.current_frame(), 2);
    }

    #[test]
    fn test_source_rect_walks_columns_and_rows() {
        let mut clip = AnimatedSprite::new(
            Vector2 { x: 0.0, y: 64.0 },
            Vector2 { x: 32.0, y: 32.0 },
            Vector2 { x: 0.5, y: 0.5 },
            2,
            0.2,
            4,
            0,
            true,
        )
        .unwrap();

        clip.set_frame(0);
        let rect = clip.source_rect(false, false);
        assert_eq!((rect.x, rect.y), (0.0, 64.0));
        assert_eq!((rect.width, rect.height), (32.0, 32.0));

        clip.set_frame(1);
        let rect = clip.source_rect(false, false);
        assert_eq!((rect.x, rect.y), (32.0, 64.0));

        // Third frame wraps to the next sheet row.
        clip.set_frame(2);
        let rect = clip.source_rect(false, false);
        assert_eq!((rect.x, rect.y), (0.0, 96.0));
    }

    #[test]
    fn test_first_frame_offsets_the_sheet_index() {
        let mut clip = AnimatedSprite::new(
            Vector2::zero(),
            Vector2 { x: 32.0, y: 32.0 },
            Vector2 { x: 0.5, y: 0.5 },
            5,
            0.2,
            3,
            5,
            true,
        )
        .unwrap();

        // Clip-relative frame 0 is sheet index 5: first column, second row.
        clip.set_frame(0);
        let rect = clip.source_rect(false, false);
        assert_eq!((rect.x, rect.y), (0.0, 32.0));
    }

    #[test]
    fn test_flips_negate_source_dimensions() {
        let clip = looping_clip();

        let rect = clip.source_rect(true, false);
        assert_eq!(rect.width, -32.0);
        assert_eq!(rect.height, 32.0);

        let rect = clip.source_rect(false, true);
        assert_eq!(rect.width, 32.0);
        assert_eq!(rect.height, -32.0);

        let rect = clip.source_rect(true, true);
        assert_eq!(rect.width, -32.0);
        assert_eq!(rect.height, -32.0);
    }

    #[test]
    fn test_draw_origin_scales_with_destination() {
        let clip = looping_clip();
        let origin = clip.draw_origin(Vector2 { x: 3.0, y: 2.0 });
        // 32 * 3 * 0.5 and 32 * 2 * 0.5.
        assert_eq!(origin.x, 48.0);
        assert_eq!(origin.y, 32.0);
    }
}
