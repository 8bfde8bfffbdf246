//! Line-oriented outline editor.
//!
//! Reads commands from any [`BufRead`] and writes responses to any [`Write`],
//! operating on one [`EditingSession`]. Command failures are reported on the
//! output and the shell keeps running; only I/O errors end it.

use crate::common::{Error, Result};
use crate::outline;
use crate::session::EditingSession;
use crate::studio::{GenerateRequest, OutlineSource, Studio};
use crate::theme;
use std::io::{self, BufRead, Write};
use std::path::Path;

const HELP: &str = "\
Commands:
  list                 list slides
  show                 show the selected slide
  select N             select slide N (1-based)
  title TEXT           set the selected slide's title
  bullets              replace bullets; one per line, end with a single '.'
  add                  append a new slide
  delete               delete the selected slide
  theme KEY            choose a theme
  generate TOPIC [N]   generate a new outline
  save FILE            write the outline as JSON
  export [DIR]         write the deck as .pptx
  help                 show this help
  quit                 leave the editor";

/// Interactive editor over a session.
pub struct Shell<'a> {
    studio: &'a Studio,
    session: &'a mut EditingSession,
}

enum Flow {
    Continue,
    Quit,
}

/// A failed command is reported and the shell keeps going; a failed
/// read or write on the shell's own streams ends it.
enum Failure {
    Stream(io::Error),
    Command(Error),
}

impl From<io::Error> for Failure {
    fn from(err: io::Error) -> Self {
        Failure::Stream(err)
    }
}

impl From<Error> for Failure {
    fn from(err: Error) -> Self {
        Failure::Command(err)
    }
}

impl<'a> Shell<'a> {
    pub fn new(studio: &'a Studio, session: &'a mut EditingSession) -> Self {
        Self { studio, session }
    }

    /// Run until `quit` or end of input.
    pub async fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<()> {
        writeln!(output, "Type 'help' for commands.")?;

        loop {
            write!(output, "humu> ")?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                return Ok(());
            }

            match self.dispatch(line.trim(), &mut input, &mut output).await {
                Ok(Flow::Continue) => {},
                Ok(Flow::Quit) => return Ok(()),
                Err(Failure::Stream(e)) => return Err(Error::Io(e)),
                Err(Failure::Command(e)) => writeln!(output, "error: {e}")?,
            }
        }
    }

    async fn dispatch<R: BufRead, W: Write>(
        &mut self,
        line: &str,
        input: &mut R,
        output: &mut W,
    ) -> std::result::Result<Flow, Failure> {
        let (command, rest) = line
            .split_once(char::is_whitespace)
            .map(|(c, r)| (c, r.trim()))
            .unwrap_or((line, ""));

        match command {
            "" => {},
            "help" | "?" => writeln!(output, "{HELP}")?,
            "quit" | "exit" => return Ok(Flow::Quit),
            "list" => self.list(output)?,
            "show" => self.show(output)?,
            "select" => match rest.parse::<usize>().ok().and_then(|n| n.checked_sub(1)) {
                Some(index) => {
                    self.session.select(index)?;
                    self.show(output)?;
                },
                None => writeln!(output, "usage: select N (N starts at 1)")?,
            },
            "title" => {
                let bullets = self.session.editor_view().bullets;
                if self.session.save_current(rest, &bullets) {
                    writeln!(output, "Saved.")?;
                } else {
                    writeln!(output, "Nothing to save: the outline is empty.")?;
                }
            },
            "bullets" => {
                let raw = read_block(input, output)?;
                let title = self.session.editor_view().title;
                if self.session.save_current(&title, &raw) {
                    writeln!(output, "Saved.")?;
                } else {
                    writeln!(output, "Nothing to save: the outline is empty.")?;
                }
            },
            "add" => {
                self.session.add_slide();
                writeln!(output, "Added slide {}.", self.session.len())?;
            },
            "delete" => match self.session.delete_slide() {
                Some(removed) => writeln!(output, "Deleted {:?}.", removed.title)?,
                None => writeln!(output, "Nothing to delete.")?,
            },
            "theme" => {
                if theme::lookup(rest).is_none() {
                    writeln!(output, "Unknown theme {rest:?}, using {}.", theme::DEFAULT_THEME)?;
                }
                self.session.set_theme(rest);
                writeln!(output, "Theme: {}", self.session.theme_key())?;
            },
            "generate" => {
                let request = parse_generate(rest, self.session.theme_key());
                let source = self.studio.generate(self.session, &request).await?;
                let origin = match source {
                    OutlineSource::Remote => "remote endpoint",
                    OutlineSource::Local => "local templates",
                };
                writeln!(output, "Generated {} slides from {origin}.", self.session.len())?;
            },
            "save" => {
                if rest.is_empty() {
                    writeln!(output, "usage: save FILE")?;
                } else {
                    outline::save_outline(rest, self.session.slides())?;
                    writeln!(output, "Wrote {rest}.")?;
                }
            },
            "export" => {
                let path = if rest.is_empty() {
                    self.studio.export(self.session)?
                } else {
                    crate::export::export_to_dir(self.session, Path::new(rest))?
                };
                writeln!(output, "Wrote {}.", path.display())?;
            },
            other => writeln!(output, "Unknown command {other:?}. Type 'help'.")?,
        }

        Ok(Flow::Continue)
    }

    fn list<W: Write>(&self, output: &mut W) -> io::Result<()> {
        if self.session.is_empty() {
            writeln!(output, "(no slides)")?;
            return Ok(());
        }
        for row in self.session.summaries() {
            let marker = if row.selected { '>' } else { ' ' };
            writeln!(
                output,
                "{marker} {:>2}. {} ({} bullets)",
                row.number, row.title, row.bullet_count
            )?;
        }
        Ok(())
    }

    fn show<W: Write>(&self, output: &mut W) -> io::Result<()> {
        if self.session.is_empty() {
            writeln!(output, "(no slides)")?;
            return Ok(());
        }
        let view = self.session.editor_view();
        writeln!(output, "Slide {}: {}", self.session.current_index() + 1, view.title)?;
        for bullet in view.bullets.lines() {
            writeln!(output, "  - {bullet}")?;
        }
        Ok(())
    }
}

/// Read lines until a line holding a single `.` or end of input.
fn read_block<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<String> {
    writeln!(output, "Enter bullets, end with '.':")?;
    let mut block = String::new();
    loop {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 || line.trim() == "." {
            return Ok(block);
        }
        block.push_str(&line);
    }
}

/// `TOPIC [N]`: a trailing integer is the slide count.
fn parse_generate(rest: &str, theme_key: &str) -> GenerateRequest {
    let request = match rest.rsplit_once(char::is_whitespace) {
        Some((topic, count)) => match count.parse::<i64>() {
            Ok(count) => GenerateRequest::new(topic.trim()).with_slide_count(count),
            Err(_) => GenerateRequest::new(rest),
        },
        None => GenerateRequest::new(rest),
    };
    request.with_theme(theme_key)
}
