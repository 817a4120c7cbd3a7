// Copyright 2026 the Mapview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless map preview: loads a TopoJSON document, fits the camera to a
//! screen, and prints the resulting layer stack as JSON.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use kurbo::Size;
use mapview::MapPreview;
use mapview::layers::{LayerId, PreviewOptions, PreviewStyle, to_hex};
use mapview::topology::{ShapeKind, Topology, TopologyError};
use mapview::viewport::{ConstrainError, DEFAULT_PADDING};
use serde_json::{Value, json};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Preview a boundary map without a renderer.
#[derive(Parser, Debug)]
#[command(name = "mapview", version, about)]
struct Args {
    /// TopoJSON document with `country`, `cantons`, `municipalities` and
    /// `lakes` objects.
    #[arg(long)]
    topology: PathBuf,
    /// TopoJSON document with a `swiss-city` object.
    #[arg(long)]
    city: Option<PathBuf>,
    /// Screen width in pixels.
    #[arg(long, default_value_t = 800.0)]
    width: f64,
    /// Screen height in pixels.
    #[arg(long, default_value_t = 600.0)]
    height: f64,
    /// Margin kept around the bounds, in pixels.
    #[arg(long, default_value_t = DEFAULT_PADDING, allow_negative_numbers = true)]
    padding: f64,
    /// Color scheme for canton fills.
    #[arg(long, default_value = "tableau10")]
    color: String,
    /// Shapes to draw.
    #[arg(
        long,
        value_delimiter = ',',
        value_parser = parse_shape,
        default_value = "country,cantons,lakes"
    )]
    shapes: Vec<ShapeKind>,
    /// Draw city labels.
    #[arg(long)]
    with_name: bool,
    /// Shape drawn on top in the highlight color.
    #[arg(long, value_parser = parse_shape)]
    highlight: Option<ShapeKind>,
}

fn parse_shape(name: &str) -> Result<ShapeKind, String> {
    ShapeKind::from_object_name(name).ok_or_else(|| {
        let known: Vec<_> = ShapeKind::ALL.iter().map(|k| k.object_name()).collect();
        format!("unknown shape `{name}` (expected one of {})", known.join(", "))
    })
}

impl Args {
    fn options(&self) -> PreviewOptions {
        PreviewOptions {
            shapes: self.shapes.iter().copied().collect(),
            color: self.color.clone(),
            with_name: self.with_name,
            highlighted: self.highlight,
        }
    }
}

#[derive(Debug)]
enum CliError {
    Screen(ConstrainError),
    Read { path: PathBuf, source: std::io::Error },
    Topology { path: PathBuf, source: TopologyError },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Screen(source) => write!(f, "cannot fit the screen: {source}"),
            Self::Read { path, source } => write!(f, "cannot read {}: {source}", path.display()),
            Self::Topology { path, source } => write!(f, "{}: {source}", path.display()),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Screen(source) => Some(source),
            Self::Read { source, .. } => Some(source),
            Self::Topology { source, .. } => Some(source),
        }
    }
}

fn read_topology(path: &Path) -> Result<Topology, CliError> {
    let bytes = std::fs::read(path).map_err(|source| CliError::Read {
        path: path.to_owned(),
        source,
    })?;
    Topology::from_slice(&bytes).map_err(|source| CliError::Topology {
        path: path.to_owned(),
        source,
    })
}

/// Rejects a screen the preview could not fit, before anything is loaded.
fn check_screen(preview: &MapPreview, size: Size) -> Result<(), CliError> {
    if !(size.width > 0.0 && size.height > 0.0) {
        return Err(CliError::Screen(ConstrainError::EmptyScreen {
            width: size.width,
            height: size.height,
        }));
    }
    preview
        .constraint()
        .fit(size)
        .map(drop)
        .map_err(CliError::Screen)
}

fn run(args: &Args) -> Result<Value, CliError> {
    let mut preview = MapPreview::default().with_padding(args.padding);
    let size = Size::new(args.width, args.height);
    check_screen(&preview, size)?;

    let topology = read_topology(&args.topology)?;
    preview
        .load_topology(&topology)
        .map_err(|source| CliError::Topology {
            path: args.topology.clone(),
            source,
        })?;
    info!(path = %args.topology.display(), "loaded topology");

    if let Some(path) = &args.city {
        let city = read_topology(path)?;
        preview
            .load_city_labels(&city)
            .map_err(|source| CliError::Topology {
                path: path.clone(),
                source,
            })?;
    }

    let viewport = *preview.resize(size);
    let layers = preview.layers(&args.options(), &PreviewStyle::default());

    let layer_summary: Vec<Value> = layers
        .iter()
        .map(|layer| {
            json!({
                "id": layer.id.as_str(),
                "features": layer.feature_count(),
                "stroked": layer.stroked(),
                "filled": layer.filled(),
            })
        })
        .collect();
    let canton_colors: Vec<String> = layers
        .iter()
        .find(|layer| layer.id == LayerId::Cantons)
        .and_then(|layer| {
            let fill = layer.fill.as_ref()?;
            Some(
                (0..layer.feature_count())
                    .filter_map(|i| fill.color_for(i))
                    .map(to_hex)
                    .collect(),
            )
        })
        .unwrap_or_default();

    Ok(json!({
        "viewport": {
            "longitude": viewport.longitude,
            "latitude": viewport.latitude,
            "zoom": viewport.zoom,
            "width": viewport.width,
            "height": viewport.height,
        },
        "layers": layer_summary,
        "colorIndex": preview.color_index().map(|index| index.as_slice().to_vec()),
        "cantonColors": canton_colors,
    }))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(summary) => {
            println!("{summary:#}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("mapview: {e}");
            ExitCode::FAILURE
        }
    }
}
