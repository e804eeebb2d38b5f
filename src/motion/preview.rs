//! Geometry and lifecycle for the hover image preview.
//!
//! A preview opens from a thumbnail's on-screen rectangle, expands to a
//! viewport-centred target size, and animates back to the source rectangle
//! when it closes. All the placement math lives here, away from the DOM:
//! the component layer feeds in measured rectangles and viewport
//! dimensions and renders whatever [`PreviewState`] says.

/// Fraction of the viewport width the expanded preview occupies.
pub const WIDTH_FRACTION: f64 = 0.6;
/// Ceiling on the expanded height, as a fraction of the viewport height.
pub const MAX_HEIGHT_FRACTION: f64 = 0.8;
/// How long the open/close animation runs. Must match the transition
/// duration in the preview stylesheet.
pub const TRANSITION_MS: u32 = 500;

/// An on-screen rectangle in viewport coordinates, as measured from a
/// thumbnail element.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Width over height, or `None` for a degenerate rectangle. A hidden
    /// or unlaid-out element measures as zero-area and cannot seed a
    /// preview.
    pub fn aspect_ratio(&self) -> Option<f64> {
        if self.width > 0.0 && self.height > 0.0 {
            Some(self.width / self.height)
        } else {
            None
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Viewport dimensions at the moment the preview opened. The target size
/// is computed once from these; a later window resize does not reflow an
/// open preview.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Scales the source aspect ratio to the expanded size: width is a fixed
/// fraction of the viewport width, and if the implied height would exceed
/// its ceiling, height wins and width is re-derived. Either way the
/// source aspect ratio is preserved.
pub fn fit_to_viewport(aspect: f64, viewport: Viewport) -> Size {
    let width = viewport.width * WIDTH_FRACTION;
    let height = width / aspect;
    let max_height = viewport.height * MAX_HEIGHT_FRACTION;
    if height > max_height {
        Size {
            width: max_height * aspect,
            height: max_height,
        }
    } else {
        Size { width, height }
    }
}

/// A thumbnail image eligible for previewing.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PreviewImage {
    pub src: &'static str,
    pub alt: &'static str,
}

/// Lifecycle of one preview session.
///
/// `Opening` renders at the source rectangle for one frame so the
/// transition has a starting position; `Visible` renders centred at the
/// target size; `Closing` renders at the source rectangle again while the
/// animation settles.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PreviewPhase {
    Opening,
    Visible,
    Closing,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PreviewSession {
    pub image: PreviewImage,
    pub source: Rect,
    pub target: Size,
    pub phase: PreviewPhase,
}

/// Where the preview box sits for the current phase.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum PreviewFrame {
    /// Pinned to the thumbnail's measured rectangle.
    AtSource(Rect),
    /// Centred in the viewport at the expanded size.
    Centered(Size),
}

impl PreviewSession {
    pub fn frame(&self) -> PreviewFrame {
        match self.phase {
            PreviewPhase::Visible => PreviewFrame::Centered(self.target),
            PreviewPhase::Opening | PreviewPhase::Closing => PreviewFrame::AtSource(self.source),
        }
    }
}

/// At most one preview session exists at a time; a new one cannot open
/// until the previous session has fully settled out.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct PreviewState {
    session: Option<PreviewSession>,
}

impl PreviewState {
    /// Starts a session in `Opening`, or refuses: a zero-area source rect
    /// and an already-active session (closing ones included) both reject
    /// the open. Returns whether a session was started.
    pub fn open(&mut self, image: PreviewImage, source: Rect, viewport: Viewport) -> bool {
        if self.session.is_some() {
            return false;
        }
        let Some(aspect) = source.aspect_ratio() else {
            return false;
        };
        self.session = Some(PreviewSession {
            image,
            source,
            target: fit_to_viewport(aspect, viewport),
            phase: PreviewPhase::Opening,
        });
        true
    }

    /// Flips `Opening` to `Visible`, handing the transition its end
    /// position. No-op in any other phase.
    pub fn reveal(&mut self) {
        if let Some(session) = &mut self.session {
            if session.phase == PreviewPhase::Opening {
                session.phase = PreviewPhase::Visible;
            }
        }
    }

    /// Starts the close animation. Returns true when a settle should be
    /// scheduled; a session already closing, or no session at all, makes
    /// this a no-op so repeated close requests collapse into one.
    pub fn begin_close(&mut self) -> bool {
        match &mut self.session {
            Some(session) if session.phase != PreviewPhase::Closing => {
                session.phase = PreviewPhase::Closing;
                true
            }
            _ => false,
        }
    }

    /// Removes a session that has finished its close animation. Only a
    /// `Closing` session is removed; calling this late or twice is safe.
    pub fn finalize_close(&mut self) {
        if matches!(
            &self.session,
            Some(session) if session.phase == PreviewPhase::Closing
        ) {
            self.session = None;
        }
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&PreviewSession> {
        self.session.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IMAGE: PreviewImage = PreviewImage {
        src: "thumb.jpg",
        alt: "thumb",
    };

    fn square_source() -> Rect {
        Rect::new(40.0, 120.0, 150.0, 150.0)
    }

    #[test]
    fn expanded_width_is_fraction_of_viewport() {
        // Wide source, short viewport: the height cap does not bind.
        let size = fit_to_viewport(2.0, Viewport::new(600.0, 300.0));
        assert!((size.width - 360.0).abs() < 1e-6);
        assert!((size.height - 180.0).abs() < 1e-6);

        // Square viewport, same story: 600 wide, 300 tall, cap at 800.
        let size = fit_to_viewport(2.0, Viewport::new(1000.0, 1000.0));
        assert!((size.width - 600.0).abs() < 1e-6);
        assert!((size.height - 300.0).abs() < 1e-6);
    }

    #[test]
    fn height_cap_rederives_width() {
        // Square source in a 600x300 viewport: 360 wide would be 360 tall,
        // past the 240 ceiling, so height wins.
        let size = fit_to_viewport(1.0, Viewport::new(600.0, 300.0));
        assert!((size.height - 240.0).abs() < 1e-6);
        assert!((size.width - 240.0).abs() < 1e-6);

        // Tall source in an 800x400 viewport: capped at 320 tall.
        let size = fit_to_viewport(0.75, Viewport::new(800.0, 400.0));
        assert!((size.height - 320.0).abs() < 1e-6);
        assert!((size.width - 240.0).abs() < 1e-6);

        // Wide source in a very squat viewport: 1200x600 shrinks to the
        // 400 ceiling and comes out 800 wide.
        let size = fit_to_viewport(2.0, Viewport::new(2000.0, 500.0));
        assert!((size.height - 400.0).abs() < 1e-6);
        assert!((size.width - 800.0).abs() < 1e-6);
    }

    #[test]
    fn aspect_ratio_survives_both_branches() {
        for aspect in [0.6, 1.0, 1.4142, 2.35] {
            for viewport in [Viewport::new(600.0, 300.0), Viewport::new(800.0, 400.0)] {
                let size = fit_to_viewport(aspect, viewport);
                assert!((size.width / size.height - aspect).abs() < 1e-6);
                assert!(size.height <= viewport.height * MAX_HEIGHT_FRACTION + 1e-6);
            }
        }
    }

    #[test]
    fn zero_area_source_rejects_open() {
        let mut state = PreviewState::default();
        let flat = Rect::new(10.0, 10.0, 120.0, 0.0);
        assert!(!state.open(IMAGE, flat, Viewport::new(800.0, 400.0)));
        assert!(!state.is_active());
        assert!(flat.aspect_ratio().is_none());
    }

    #[test]
    fn only_one_session_at_a_time() {
        let mut state = PreviewState::default();
        assert!(state.open(IMAGE, square_source(), Viewport::new(800.0, 400.0)));

        // A rejected open leaves the stored geometry alone.
        let other = Rect::new(500.0, 60.0, 80.0, 200.0);
        assert!(!state.open(IMAGE, other, Viewport::new(640.0, 480.0)));
        assert_eq!(state.session().unwrap().source, square_source());

        // Still occupied while the close animation runs.
        state.reveal();
        assert!(state.begin_close());
        assert!(!state.open(IMAGE, square_source(), Viewport::new(800.0, 400.0)));

        // Free again once the close has settled.
        state.finalize_close();
        assert!(state.open(IMAGE, square_source(), Viewport::new(800.0, 400.0)));
    }

    #[test]
    fn reveal_only_advances_an_opening_session() {
        let mut state = PreviewState::default();
        state.reveal();
        assert!(!state.is_active());

        state.open(IMAGE, square_source(), Viewport::new(800.0, 400.0));
        state.reveal();
        assert_eq!(state.session().unwrap().phase, PreviewPhase::Visible);

        // A revealed session does not re-enter Opening or re-reveal.
        state.begin_close();
        state.reveal();
        assert_eq!(state.session().unwrap().phase, PreviewPhase::Closing);
    }

    #[test]
    fn close_is_idempotent() {
        let mut state = PreviewState::default();
        assert!(!state.begin_close());

        state.open(IMAGE, square_source(), Viewport::new(800.0, 400.0));
        state.reveal();
        assert!(state.begin_close());
        assert!(!state.begin_close(), "second close schedules nothing");

        state.finalize_close();
        assert!(!state.is_active());
        // Finalizing again, or with no session, changes nothing.
        state.finalize_close();
        assert!(!state.is_active());
    }

    #[test]
    fn close_during_opening_is_allowed() {
        // Pointer leaves before the first frame flipped the session visible.
        let mut state = PreviewState::default();
        state.open(IMAGE, square_source(), Viewport::new(800.0, 400.0));
        assert!(state.begin_close());
        state.finalize_close();
        assert!(!state.is_active());
    }

    #[test]
    fn finalize_skips_sessions_that_are_not_closing() {
        let mut state = PreviewState::default();
        state.open(IMAGE, square_source(), Viewport::new(800.0, 400.0));
        state.finalize_close();
        assert!(state.is_active(), "an opening session is not removed");
        state.reveal();
        state.finalize_close();
        assert!(state.is_active(), "a visible session is not removed");
    }

    #[test]
    fn frame_follows_phase() {
        let mut state = PreviewState::default();
        let source = square_source();
        state.open(IMAGE, source, Viewport::new(600.0, 300.0));

        let session = state.session().unwrap();
        assert_eq!(session.frame(), PreviewFrame::AtSource(source));

        state.reveal();
        let session = state.session().unwrap();
        match session.frame() {
            PreviewFrame::Centered(size) => {
                assert!((size.width - 240.0).abs() < 1e-6);
                assert!((size.height - 240.0).abs() < 1e-6);
            }
            other => panic!("expected centered frame, got {other:?}"),
        }

        // Closing animates back to where the thumbnail sits.
        state.begin_close();
        let session = state.session().unwrap();
        assert_eq!(session.frame(), PreviewFrame::AtSource(source));
    }

    #[test]
    fn session_geometry_comes_from_the_measured_rect() {
        // Both the opening anchor and the expanded shape derive from the
        // rectangle handed in: a landscape thumbnail expands landscape
        // regardless of what the page or viewport look like.
        let mut state = PreviewState::default();
        let thumb = Rect::new(420.0, 310.0, 112.0, 64.0);
        assert!(state.open(IMAGE, thumb, Viewport::new(1280.0, 720.0)));

        let session = state.session().unwrap();
        assert_eq!(session.frame(), PreviewFrame::AtSource(thumb));
        let aspect = thumb.width / thumb.height;
        assert!((session.target.width / session.target.height - aspect).abs() < 1e-6);
    }
}
