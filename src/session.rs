//! The imperative shell around the lemonade machine.
//!
//! A [`Session`] turns input events into machine calls and machine output into
//! [`View`] calls. It is the only place where labels become text.

use crate::checkpoint::{Checkpoint, Snapshot};
use crate::core::{Lemonade, SizeProvider, Stage, Step};
use crate::display::{Description, ImageKey, Strings};
use tracing::debug;

/// What the view shows after a render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub text: String,
    pub image: ImageKey,
}

impl Frame {
    fn new(description: Description, strings: &Strings) -> Self {
        Self {
            text: strings.render(description.label),
            image: description.image,
        }
    }
}

/// Host view: draws frames and shows short-lived notices.
pub trait View {
    /// Replace the current image and instruction text.
    fn render(&mut self, frame: &Frame);

    /// Show an auto-dismissing message.
    fn notify(&mut self, message: &str);
}

/// One interactive session: a machine, its string table and its view.
///
/// # Example
///
/// ```rust
/// use lemonade::display::ImageKey;
/// use lemonade::session::{Frame, Session, View};
///
/// #[derive(Default)]
/// struct Screen {
///     frame: Option<Frame>,
/// }
///
/// impl View for Screen {
///     fn render(&mut self, frame: &Frame) {
///         self.frame = Some(frame.clone());
///     }
///
///     fn notify(&mut self, _message: &str) {}
/// }
///
/// let mut session = Session::start(|| 2, Screen::default());
/// session.tap();
///
/// let frame = session.view().frame.as_ref().unwrap();
/// assert_eq!(frame.image, ImageKey::SqueezedLemon);
/// ```
pub struct Session<P: SizeProvider, V: View> {
    machine: Lemonade<P>,
    strings: Strings,
    view: V,
}

impl<P: SizeProvider, V: View> Session<P, V> {
    /// Start a fresh session with the default strings and draw the first frame.
    pub fn start(tree: P, view: V) -> Self {
        Self::with_machine(Lemonade::new(tree), Strings::default(), view)
    }

    /// Resume a suspended session and draw its current frame.
    pub fn resume(tree: P, snapshot: &Snapshot, strings: Strings, view: V) -> Self {
        Self::with_machine(Lemonade::restore(tree, snapshot), strings, view)
    }

    /// Wire an existing machine to a view and draw its current frame.
    pub fn with_machine(machine: Lemonade<P>, strings: Strings, view: V) -> Self {
        let mut session = Self {
            machine,
            strings,
            view,
        };
        session.render();
        session
    }

    /// Tap on the image: advance the machine and redraw.
    pub fn tap(&mut self) -> Step {
        let step = self.machine.advance();
        self.render();
        step
    }

    /// Long press on the image: show the squeeze count while squeezing.
    ///
    /// Returns `false`, without touching the view, in every other stage.
    pub fn long_press(&mut self) -> bool {
        let Some(count) = self.machine.peek_squeeze_count() else {
            debug!(stage = %self.machine.stage(), "Squeeze count not shown outside squeezing");
            return false;
        };

        debug!(count, "Showing squeeze count");
        let message = self.strings.squeeze_notice(count);
        self.view.notify(&message);
        true
    }

    /// Snapshot for the host to keep while the session is suspended.
    pub fn suspend(&self) -> Snapshot {
        self.machine.snapshot()
    }

    /// Suspend into a versioned checkpoint.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint::new(self.suspend())
    }

    /// Frame for the current stage, without drawing it.
    pub fn frame(&self) -> Frame {
        Frame::new(self.machine.describe(), &self.strings)
    }

    pub fn stage(&self) -> Stage {
        self.machine.stage()
    }

    pub fn machine(&self) -> &Lemonade<P> {
        &self.machine
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Tear down the session, handing the view back.
    pub fn into_view(self) -> V {
        self.view
    }

    fn render(&mut self) {
        let frame = self.frame();
        self.view.render(&frame);
    }
}
