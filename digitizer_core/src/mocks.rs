//! Scripted collaborator for driving sessions in tests.
//!
//! Every answer is queued up front with the builder methods. A collaborator
//! call whose queue is empty fails with `UnexpectedEof`, which maps to
//! `DigitizerError::InputClosed`.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use digitizer_traits::{
    BoxError, Dialogs, FileFilter, ImageView, PixelPoint, Pointer, PointerEvent,
};

fn closed(what: &str) -> BoxError {
    Box::new(std::io::Error::new(
        std::io::ErrorKind::UnexpectedEof,
        format!("scripted input closed ({what})"),
    ))
}

#[derive(Debug, Default)]
pub struct ScriptedUi {
    events: VecDeque<PointerEvent>,
    opens: VecDeque<Option<PathBuf>>,
    saves: VecDeque<Option<PathBuf>>,
    floats: VecDeque<Option<f64>>,
    answers: VecDeque<bool>,
    image_error: Option<String>,

    /// Images passed to `show_image`.
    pub shown: Vec<PathBuf>,
    /// Every curve passed to `draw_curve`.
    pub drawn: Vec<Vec<PixelPoint>>,
    pub cleared: usize,
    /// `(title, message)` of each info dialog.
    pub infos: Vec<(String, String)>,
    /// `(title, message)` of each error dialog.
    pub errors: Vec<(String, String)>,
    /// Questions asked through `ask_yes_no`.
    pub questions: Vec<String>,
}

impl ScriptedUi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn click(mut self, x: f64, y: f64) -> Self {
        self.events.push_back(PointerEvent::Add(PixelPoint::new(x, y)));
        self
    }

    pub fn undo(mut self) -> Self {
        self.events.push_back(PointerEvent::Undo);
        self
    }

    pub fn finish(mut self) -> Self {
        self.events.push_back(PointerEvent::Finish);
        self
    }

    pub fn open(mut self, path: impl Into<PathBuf>) -> Self {
        self.opens.push_back(Some(path.into()));
        self
    }

    pub fn no_open(mut self) -> Self {
        self.opens.push_back(None);
        self
    }

    pub fn save(mut self, path: impl Into<PathBuf>) -> Self {
        self.saves.push_back(Some(path.into()));
        self
    }

    pub fn no_save(mut self) -> Self {
        self.saves.push_back(None);
        self
    }

    pub fn float(mut self, v: f64) -> Self {
        self.floats.push_back(Some(v));
        self
    }

    /// A cancelled or unparsable float entry.
    pub fn no_float(mut self) -> Self {
        self.floats.push_back(None);
        self
    }

    pub fn yes(mut self) -> Self {
        self.answers.push_back(true);
        self
    }

    pub fn no(mut self) -> Self {
        self.answers.push_back(false);
        self
    }

    /// Make `show_image` fail with `msg`.
    pub fn image_fails(mut self, msg: impl Into<String>) -> Self {
        self.image_error = Some(msg.into());
        self
    }

    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    /// True when every scripted answer has been consumed.
    pub fn exhausted(&self) -> bool {
        self.events.is_empty()
            && self.opens.is_empty()
            && self.saves.is_empty()
            && self.floats.is_empty()
            && self.answers.is_empty()
    }
}

impl ImageView for ScriptedUi {
    fn show_image(&mut self, path: &Path) -> Result<(), BoxError> {
        if let Some(msg) = &self.image_error {
            return Err(format!("image decode failed: {msg}").into());
        }
        self.shown.push(path.to_path_buf());
        Ok(())
    }

    fn draw_curve(&mut self, points: &[PixelPoint]) -> Result<(), BoxError> {
        self.drawn.push(points.to_vec());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), BoxError> {
        self.cleared += 1;
        Ok(())
    }
}

impl Pointer for ScriptedUi {
    fn next_event(&mut self) -> Result<PointerEvent, BoxError> {
        self.events.pop_front().ok_or_else(|| closed("pointer"))
    }
}

impl Dialogs for ScriptedUi {
    fn open_file(
        &mut self,
        _title: &str,
        _filters: &[FileFilter],
    ) -> Result<Option<PathBuf>, BoxError> {
        self.opens.pop_front().ok_or_else(|| closed("open"))
    }

    fn save_file(
        &mut self,
        _title: &str,
        _default_extension: &str,
    ) -> Result<Option<PathBuf>, BoxError> {
        self.saves.pop_front().ok_or_else(|| closed("save"))
    }

    fn info(&mut self, title: &str, message: &str) -> Result<(), BoxError> {
        self.infos.push((title.to_string(), message.to_string()));
        Ok(())
    }

    fn error(&mut self, title: &str, message: &str) -> Result<(), BoxError> {
        self.errors.push((title.to_string(), message.to_string()));
        Ok(())
    }

    fn ask_float(&mut self, _title: &str, _prompt: &str) -> Result<Option<f64>, BoxError> {
        self.floats.pop_front().ok_or_else(|| closed("float"))
    }

    fn ask_yes_no(&mut self, _title: &str, question: &str) -> Result<bool, BoxError> {
        self.questions.push(question.to_string());
        self.answers.pop_front().ok_or_else(|| closed("yes/no"))
    }
}
