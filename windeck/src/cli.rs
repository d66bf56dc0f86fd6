use std::{num::ParseIntError, str::FromStr};

use clap::Parser;
use windeck_framework::HeadlessWindow;

/// Build a render window collection and print its diagnostic description
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct WindeckCliOptions {
    /// Window to add, as TITLE or TITLE@WIDTHxHEIGHT
    #[clap(short, long = "window")]
    pub windows: Vec<WindowSpec>,
    /// Title of a window to remove, the first match goes
    #[clap(short, long = "remove")]
    pub removals: Vec<String>,
    /// Indentation level of the description
    #[clap(short, long, default_value = "0")]
    pub indent: usize,
    /// List windows from last to first
    #[clap(long)]
    pub reverse: bool,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseWindowSpecError {
    #[error("Window title is empty")]
    EmptyTitle,
    #[error("Expected size as WIDTHxHEIGHT, got {0:?}")]
    MalformedSize(String),
    #[error("Invalid size: {0}")]
    InvalidNumber(#[from] ParseIntError),
}

/// Window requested on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSpec {
    pub title: String,
    pub size: Option<(u32, u32)>,
}

impl WindowSpec {
    pub fn build(&self) -> HeadlessWindow {
        let mut window = HeadlessWindow {
            title: self.title.clone(),
            ..Default::default()
        };
        if let Some((width, height)) = self.size {
            window.width = width;
            window.height = height;
        }
        window
    }
}

impl FromStr for WindowSpec {
    type Err = ParseWindowSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (title, size) = match s.rsplit_once('@') {
            Some((title, size)) => (title, Some(size)),
            None => (s, None),
        };

        if title.is_empty() {
            return Err(ParseWindowSpecError::EmptyTitle);
        }

        let size = match size {
            Some(size) => {
                let (width, height) = size
                    .split_once('x')
                    .ok_or_else(|| ParseWindowSpecError::MalformedSize(size.to_owned()))?;
                Some((width.parse()?, height.parse()?))
            }
            None => None,
        };

        Ok(Self {
            title: title.to_owned(),
            size,
        })
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{ParseWindowSpecError, WindeckCliOptions, WindowSpec};

    #[test]
    fn test_parse_title_only() {
        let spec: WindowSpec = "main".parse().unwrap();
        assert_eq!(spec.title, "main");
        assert_eq!(spec.size, None);

        let window = spec.build();
        assert_eq!((window.width, window.height), (300, 300));
    }

    #[test]
    fn test_parse_with_size() {
        let spec: WindowSpec = "me@home@800x600".parse().unwrap();
        assert_eq!(spec.title, "me@home");
        assert_eq!(spec.size, Some((800, 600)));
        assert_eq!(spec.build().width, 800);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "@1x1".parse::<WindowSpec>(),
            Err(ParseWindowSpecError::EmptyTitle)
        );
        assert_eq!(
            "main@800".parse::<WindowSpec>(),
            Err(ParseWindowSpecError::MalformedSize("800".into()))
        );
        assert!(matches!(
            "main@axb".parse::<WindowSpec>(),
            Err(ParseWindowSpecError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_cli() {
        let opt = WindeckCliOptions::parse_from([
            "windeck", "-w", "a", "--window", "b@10x20", "-r", "a", "--reverse",
        ]);

        assert_eq!(opt.windows.len(), 2);
        assert_eq!(opt.windows[1].size, Some((10, 20)));
        assert_eq!(opt.removals, ["a"]);
        assert_eq!(opt.indent, 0);
        assert!(opt.reverse);
    }
}
