//! Line-oriented terminal implementation of the digitizer collaborators.
//!
//! Prompts go to the output writer and answers are read one line at a time
//! from the input reader, so a whole session can be typed interactively or
//! piped in from a file. End of input surfaces as `TerminalError::InputClosed`.
pub mod error;
pub mod input;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use digitizer_traits::{
    BoxError, Dialogs, FileFilter, ImageView, PixelPoint, Pointer, PointerEvent,
};

pub use error::TerminalError;
use error::Result;

/// Path and pixel dimensions of the image being digitized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInfo {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl ImageInfo {
    /// Read an image file's dimensions without decoding the pixels.
    pub fn read(path: &Path) -> Result<Self> {
        let (width, height) = image::image_dimensions(path)
            .map_err(|e| TerminalError::Image(format!("{}: {e}", path.display())))?;
        Ok(Self {
            path: path.to_path_buf(),
            width,
            height,
        })
    }

    pub fn contains(&self, p: PixelPoint) -> bool {
        p.x >= 0.0 && p.y >= 0.0 && p.x <= f64::from(self.width) && p.y <= f64::from(self.height)
    }
}

pub struct TerminalUi<R, W> {
    input: R,
    output: W,
    image: Option<ImageInfo>,
}

impl TerminalUi<io::StdinLock<'static>, io::Stdout> {
    /// Terminal UI over the process stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalUi<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            image: None,
        }
    }

    /// Image currently on display, if any.
    pub fn image(&self) -> Option<&ImageInfo> {
        self.image.as_ref()
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        let n = self.input.read_line(&mut line)?;
        if n == 0 {
            return Err(TerminalError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> ImageView for TerminalUi<R, W> {
    fn show_image(&mut self, path: &Path) -> std::result::Result<(), BoxError> {
        let info = ImageInfo::read(path)?;
        self.say(&format!(
            "Image: {} ({} x {} px)",
            info.path.display(),
            info.width,
            info.height
        ))?;
        tracing::info!(path = %info.path.display(), width = info.width, height = info.height, "image shown");
        self.image = Some(info);
        Ok(())
    }

    fn draw_curve(&mut self, points: &[PixelPoint]) -> std::result::Result<(), BoxError> {
        if points.is_empty() {
            self.say("Curve: no points")?;
            return Ok(());
        }
        let (mut x0, mut y0) = (f64::INFINITY, f64::INFINITY);
        let (mut x1, mut y1) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
        for p in points {
            x0 = x0.min(p.x);
            y0 = y0.min(p.y);
            x1 = x1.max(p.x);
            y1 = y1.max(p.y);
        }
        self.say(&format!(
            "Curve: {} point(s), pixel bounds {} to {}",
            points.len(),
            PixelPoint::new(x0, y0),
            PixelPoint::new(x1, y1)
        ))?;
        Ok(())
    }

    fn clear(&mut self) -> std::result::Result<(), BoxError> {
        self.image = None;
        self.say("Display cleared.")?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> Pointer for TerminalUi<R, W> {
    fn next_event(&mut self) -> std::result::Result<PointerEvent, BoxError> {
        loop {
            let line = self.prompt("point [x y | u = undo | empty = done]> ")?;
            match input::parse_pointer_line(&line) {
                Some(PointerEvent::Add(p)) => {
                    if let Some(img) = &self.image
                        && !img.contains(p)
                    {
                        tracing::warn!(x = p.x, y = p.y, width = img.width, height = img.height, "point outside image bounds");
                    }
                    return Ok(PointerEvent::Add(p));
                }
                Some(ev) => return Ok(ev),
                None => self.say("Enter two numbers 'x y', 'u' to undo, or an empty line to finish.")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Dialogs for TerminalUi<R, W> {
    fn open_file(
        &mut self,
        title: &str,
        filters: &[FileFilter],
    ) -> std::result::Result<Option<PathBuf>, BoxError> {
        self.say(&format!("== {title} =="))?;
        if !filters.is_empty() {
            let list: Vec<String> = filters
                .iter()
                .map(|f| format!("{} ({})", f.label, f.pattern))
                .collect();
            self.say(&format!("Accepted: {}", list.join(", ")))?;
        }
        let line = self.prompt("path (empty to cancel)> ")?;
        let line = line.trim();
        Ok((!line.is_empty()).then(|| PathBuf::from(line)))
    }

    fn save_file(
        &mut self,
        title: &str,
        default_extension: &str,
    ) -> std::result::Result<Option<PathBuf>, BoxError> {
        self.say(&format!("== {title} =="))?;
        let line = self.prompt(&format!("path (.{default_extension} added if missing)> "))?;
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let mut path = PathBuf::from(line);
        if path.extension().is_none() {
            path.set_extension(default_extension);
        }
        Ok(Some(path))
    }

    fn info(&mut self, title: &str, message: &str) -> std::result::Result<(), BoxError> {
        self.say(&format!("[{title}] {message}"))?;
        Ok(())
    }

    fn error(&mut self, title: &str, message: &str) -> std::result::Result<(), BoxError> {
        self.say(&format!("[{title}] error: {message}"))?;
        Ok(())
    }

    fn ask_float(&mut self, title: &str, prompt: &str) -> std::result::Result<Option<f64>, BoxError> {
        let line = self.prompt(&format!("[{title}] {prompt}> "))?;
        Ok(input::parse_float(&line))
    }

    fn ask_yes_no(&mut self, title: &str, question: &str) -> std::result::Result<bool, BoxError> {
        loop {
            let line = self.prompt(&format!("[{title}] {question} [y/N]> "))?;
            match input::parse_yes_no(&line) {
                Some(answer) => return Ok(answer),
                None => self.say("Please answer 'y' or 'n'.")?,
            }
        }
    }
}
