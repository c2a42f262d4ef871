use std::path::Path;

use anyhow::Result;
use clap::Args;

use calcard_core::config::{CalcardConfig, LayoutConfig, LayoutOverrides, CONFIG_FILE};
use calcard_core::layout::LayoutDescriptor;
use calcard_core::validate;

use crate::output;

/// Layout flags. Unset flags fall back to `CALCARD_*` variables, then the
/// config file, then the built-in defaults.
#[derive(Args, Debug, Default)]
pub struct TemplateArgs {
    /// Font family name (default: "Avenir Next")
    #[arg(long, env = "CALCARD_FONT")]
    pub font: Option<String>,

    /// Day font size; year and month use twice this (default: 10)
    #[arg(long, env = "CALCARD_FONTSIZE", allow_negative_numbers = true)]
    pub fontsize: Option<i64>,

    /// Horizontal pitch between columns in pixels (default: 40)
    #[arg(long, env = "CALCARD_XPITCH", allow_negative_numbers = true)]
    pub xpitch: Option<i64>,

    /// Vertical pitch between rows in pixels (default: 30)
    #[arg(long, env = "CALCARD_YPITCH", allow_negative_numbers = true)]
    pub ypitch: Option<i64>,

    /// Length unit written to the [dimension] table (renderer default: mm)
    #[arg(long, env = "CALCARD_UNIT")]
    pub unit: Option<String>,
}

impl From<TemplateArgs> for LayoutOverrides {
    fn from(args: TemplateArgs) -> Self {
        Self {
            font: args.font,
            fontsize: args.fontsize,
            xpitch: args.xpitch,
            ypitch: args.ypitch,
            unit: args.unit,
        }
    }
}

/// Print the layout template.
///
/// Resolves layout parameters, validates them, computes every element position,
/// and writes the descriptor to stdout in one piece.
pub fn run(config_path: Option<&Path>, args: TemplateArgs) -> Result<()> {
    let resolved = resolve(config_path, args)?;
    let params = validate::layout_params(
        &resolved.font,
        resolved.fontsize,
        resolved.xpitch,
        resolved.ypitch,
    )?;
    tracing::info!(
        font = %params.font,
        fontsize = params.fontsize,
        xpitch = params.xpitch,
        ypitch = params.ypitch,
        "building layout"
    );

    let toml = LayoutDescriptor::build(&params)
        .with_unit(resolved.unit)
        .to_toml()?;
    output::emit(&toml)?;
    Ok(())
}

/// Layer defaults, config file, then flags/environment.
pub(crate) fn resolve(config_path: Option<&Path>, args: TemplateArgs) -> Result<LayoutConfig> {
    let config = match config_path {
        Some(path) => CalcardConfig::load_or_default(path, true)?,
        None => CalcardConfig::load_or_default(Path::new(CONFIG_FILE), false)?,
    };
    Ok(LayoutConfig::default()
        .merge(config.layout)
        .merge(args.into()))
}
