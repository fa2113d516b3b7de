//! # Interactive Shell Module
//!
//! Questo modulo presenta il menu numerato e raccoglie i parametri
//! dell'operazione scelta.
//!
//! ## Responsabilità:
//! - Stampa il menu (1-13) e legge la scelta
//! - Legge ogni parametro come testo libero
//! - Converte solo la dimensione target in `f64` (deve essere > 0)
//! - Normalizza la qualità (trim + minuscolo)
//! - Rimuove solo il fine riga: path e pattern restano come digitati
//! - Divide la lista dei file da unire sugli spazi
//! - Usa la posizione watermark di default se il prompt è vuoto
//!
//! ## Nota:
//! Nessun controllo di esistenza dei file: ffmpeg riporterà l'errore.
//! Input e output sono generici (`BufRead`/`Write`) così i test possono
//! usare buffer in memoria.

use crate::config::Config;
use crate::error::{MenuError, MenuResult};
use crate::operations::{ConversionRequest, Operation, OperationKind};
use crate::quality::Quality;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::debug;

const INPUT_VIDEO: &str = "Enter the path to the input video file: ";
const OUTPUT_FILE: &str = "Enter the desired output file name (with extension): ";

/// Prompt-driven front end of the menu
pub struct InteractiveShell<'a, R, W> {
    input: R,
    output: W,
    config: &'a Config,
}

impl<'a, R: BufRead, W: Write> InteractiveShell<'a, R, W> {
    pub fn new(input: R, output: W, config: &'a Config) -> Self {
        Self { input, output, config }
    }

    /// Print the numbered menu
    pub fn print_menu(&mut self) -> MenuResult<()> {
        writeln!(self.output, "Choose an operation:")?;
        for kind in OperationKind::ALL {
            writeln!(self.output, "{}", kind)?;
        }
        Ok(())
    }

    /// Show the menu, read a choice and all the parameters it needs
    pub fn read_operation(&mut self) -> MenuResult<Operation> {
        self.print_menu()?;
        let choice = self.prompt("Enter the number of the operation you want to perform: ")?;
        let kind = OperationKind::from_choice(&choice).ok_or(MenuError::InvalidChoice(choice))?;
        debug!("Selected {}", kind);

        self.read_parameters(kind)
    }

    /// Read the parameters for `kind`
    pub fn read_parameters(&mut self, kind: OperationKind) -> MenuResult<Operation> {
        let operation = match kind {
            OperationKind::CutVideo => Operation::CutVideo {
                input: self.prompt_path(INPUT_VIDEO)?,
                start: self.prompt("Enter the start time (in hh:mm:ss or seconds): ")?,
                end: self.prompt("Enter the end time (in hh:mm:ss or seconds): ")?,
                output: self.prompt_path(OUTPUT_FILE)?,
            },
            OperationKind::ConvertVideo => Operation::ConvertVideo(ConversionRequest {
                input_path: self.prompt_path(INPUT_VIDEO)?,
                target_size_mb: self.prompt_size()?,
                quality: Quality::parse(&self.prompt("Enter the desired quality (low, medium, high): ")?),
                output_path: self.prompt_path(OUTPUT_FILE)?,
            }),
            OperationKind::MergeVideos => Operation::MergeVideos {
                inputs: self.prompt_path_list("Enter the paths to the input video files, separated by spaces: ")?,
                output: self.prompt_path(OUTPUT_FILE)?,
            },
            OperationKind::MergeAudios => Operation::MergeAudios {
                inputs: self.prompt_path_list("Enter the paths to the input audio files, separated by spaces: ")?,
                output: self.prompt_path(OUTPUT_FILE)?,
            },
            OperationKind::ExtractAudio => Operation::ExtractAudio {
                input: self.prompt_path(INPUT_VIDEO)?,
                output: self.prompt_path(OUTPUT_FILE)?,
            },
            OperationKind::ResizeVideo => Operation::ResizeVideo {
                input: self.prompt_path(INPUT_VIDEO)?,
                width: self.prompt("Enter the desired width: ")?,
                height: self.prompt("Enter the desired height: ")?,
                output: self.prompt_path(OUTPUT_FILE)?,
            },
            OperationKind::AddWatermark => {
                let input = self.prompt_path(INPUT_VIDEO)?;
                let watermark = self.prompt_path("Enter the path to the watermark image file: ")?;
                let position_prompt = format!(
                    "Enter the position of the watermark (format: x:y, default is {}): ",
                    self.config.watermark_position
                );
                let mut position = self.prompt(&position_prompt)?;
                if position.is_empty() {
                    position = self.config.watermark_position.clone();
                }
                Operation::AddWatermark {
                    input,
                    watermark,
                    position,
                    output: self.prompt_path(OUTPUT_FILE)?,
                }
            }
            OperationKind::ExtractFrames => Operation::ExtractFrames {
                input: self.prompt_path(INPUT_VIDEO)?,
                frame_rate: self.prompt("Enter the frame rate (e.g., 1 for one frame per second): ")?,
                output_pattern: self
                    .prompt("Enter the desired output file name pattern (e.g., frame_%04d.png): ")?,
            },
            OperationKind::AdjustSpeed => Operation::AdjustSpeed {
                input: self.prompt_path(INPUT_VIDEO)?,
                speed: self
                    .prompt("Enter the speed multiplier (e.g., 0.5 for half speed, 2 for double speed): ")?,
                output: self.prompt_path(OUTPUT_FILE)?,
            },
            OperationKind::AddSubtitles => Operation::AddSubtitles {
                input: self.prompt_path(INPUT_VIDEO)?,
                subtitles: self.prompt_path("Enter the path to the subtitle file: ")?,
                output: self.prompt_path(OUTPUT_FILE)?,
            },
            OperationKind::ConvertAudio => Operation::ConvertAudio {
                input: self.prompt_path("Enter the path to the input audio file: ")?,
                output: self.prompt_path(OUTPUT_FILE)?,
            },
            OperationKind::CreateSlideshow => Operation::CreateSlideshow {
                image_pattern: self
                    .prompt("Enter the file pattern for the input images (e.g., 'images/*.jpg'): ")?,
                frame_rate: self.prompt("Enter the frame rate for the slideshow: ")?,
                output: self.prompt_path(OUTPUT_FILE)?,
            },
            OperationKind::ConvertVideoFormat => Operation::ConvertVideoFormat {
                input: self.prompt_path(INPUT_VIDEO)?,
                format: self.prompt("Enter the desired output video format (e.g., mp4, mkv): ")?,
                output_stem: self.prompt_path("Enter the desired output file name (without extension): ")?,
            },
        };

        Ok(operation)
    }

    /// Write `text`, read one line and strip only its line ending
    fn prompt(&mut self, text: &str) -> MenuResult<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(MenuError::InvalidInput("unexpected end of input".to_string()));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn prompt_path(&mut self, text: &str) -> MenuResult<PathBuf> {
        self.prompt(text).map(PathBuf::from)
    }

    fn prompt_path_list(&mut self, text: &str) -> MenuResult<Vec<PathBuf>> {
        let line = self.prompt(text)?;
        Ok(line.split_whitespace().map(PathBuf::from).collect())
    }

    fn prompt_size(&mut self) -> MenuResult<f64> {
        let answer = self.prompt("Enter the desired output size in MB: ")?;
        let text = answer.trim();
        let size: f64 = text
            .parse()
            .map_err(|_| MenuError::InvalidInput(format!("output size is not a number: '{}'", text)))?;

        if !size.is_finite() || size <= 0.0 {
            return Err(MenuError::InvalidInput(format!("output size must be positive, got {}", text)));
        }
        Ok(size)
    }
}
