pub mod geometry;

pub use geometry::{Axis, PixelPoint};

use std::path::{Path, PathBuf};

/// Error type crossing the collaborator boundary.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Name/pattern pair offered by a file-open dialog (e.g. `("png files", "*.png")`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileFilter {
    pub label: &'static str,
    pub pattern: &'static str,
}

/// One input from the pointing device while points are being captured.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Select a point.
    Add(PixelPoint),
    /// Remove the most recently selected point.
    Undo,
    /// Stop capturing.
    Finish,
}

/// Surface that displays the chart image and digitized overlays.
pub trait ImageView {
    fn show_image(&mut self, path: &Path) -> Result<(), BoxError>;
    fn draw_curve(&mut self, points: &[PixelPoint]) -> Result<(), BoxError>;
    fn clear(&mut self) -> Result<(), BoxError>;
}

/// Blocking source of pointer events over the displayed image.
pub trait Pointer {
    fn next_event(&mut self) -> Result<PointerEvent, BoxError>;
}

/// Modal dialogs. Every call blocks until the user answers.
///
/// `None` means the dialog produced no value (cancelled, closed, or an
/// entry that was not a number); it is not an error.
pub trait Dialogs {
    fn open_file(&mut self, title: &str, filters: &[FileFilter])
    -> Result<Option<PathBuf>, BoxError>;
    fn save_file(&mut self, title: &str, default_extension: &str)
    -> Result<Option<PathBuf>, BoxError>;
    fn info(&mut self, title: &str, message: &str) -> Result<(), BoxError>;
    fn error(&mut self, title: &str, message: &str) -> Result<(), BoxError>;
    fn ask_float(&mut self, title: &str, prompt: &str) -> Result<Option<f64>, BoxError>;
    fn ask_yes_no(&mut self, title: &str, question: &str) -> Result<bool, BoxError>;
}

/// Everything a digitizing session needs from its environment.
pub trait Ui: ImageView + Pointer + Dialogs {}

impl<T: ImageView + Pointer + Dialogs + ?Sized> Ui for T {}
