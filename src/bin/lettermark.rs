use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use lettermark::{Avatar, AvatarConfig, FontFamily, FontStyle, Rgba8, Shape, Size};

#[derive(Parser, Debug)]
#[command(name = "lettermark", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Draw one avatar as a PNG.
    Draw(DrawArgs),
    /// Print the fill color derived for a text.
    Color(ColorArgs),
}

#[derive(Parser, Debug)]
struct DrawArgs {
    /// Text to draw the avatar for.
    #[arg(long)]
    text: String,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Avatar configuration JSON; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Shape filled behind the text.
    #[arg(long, value_enum)]
    shape: Option<ShapeChoice>,

    /// Image size as WxH.
    #[arg(long)]
    size: Option<Size>,

    /// Background color (name, #RRGGBB or #RRGGBBAA).
    #[arg(long)]
    background: Option<Rgba8>,

    /// Fixed shape color; the color is derived from the text when omitted.
    #[arg(long)]
    fill: Option<Rgba8>,

    /// Text color.
    #[arg(long)]
    fore: Option<Rgba8>,

    /// Font family (sans-serif, serif, monospace or a family name).
    #[arg(long)]
    font_family: Option<String>,

    /// Directory of extra .ttf/.otf/.ttc files, added to the system fonts.
    #[arg(long)]
    font_dir: Option<PathBuf>,

    /// Font size in points.
    #[arg(long)]
    font_size: Option<f32>,

    /// Bold text.
    #[arg(long, overrides_with = "no_bold")]
    bold: bool,

    /// Regular weight text.
    #[arg(long)]
    no_bold: bool,

    /// Italic text.
    #[arg(long)]
    italic: bool,

    /// Draw the whole text instead of its first letter.
    #[arg(long)]
    full_text: bool,

    /// Appended to the transformed text before drawing.
    #[arg(long)]
    suffix: Option<String>,

    /// Print the effective configuration to stderr.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Parser, Debug)]
struct ColorArgs {
    /// Text whose first letter picks the color.
    text: String,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ShapeChoice {
    Rectangle,
    Ellipse,
}

impl From<ShapeChoice> for Shape {
    fn from(choice: ShapeChoice) -> Self {
        match choice {
            ShapeChoice::Rectangle => Shape::Rectangle,
            ShapeChoice::Ellipse => Shape::Ellipse,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Draw(args) => cmd_draw(args),
        Command::Color(args) => cmd_color(args),
    }
}

fn build_config(args: &DrawArgs) -> anyhow::Result<AvatarConfig> {
    let mut config = match &args.config {
        Some(path) => AvatarConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => AvatarConfig::default(),
    };

    if let Some(shape) = args.shape {
        config.set_shape(shape.into());
    }
    if let Some(size) = args.size {
        config.set_size(size.width, size.height);
    }
    if let Some(color) = args.background {
        config.set_background(color);
    }
    if let Some(color) = args.fill {
        config.fill(color);
    }
    if let Some(color) = args.fore {
        config.set_fore_color(color);
    }
    if args.full_text {
        config.set_first_letter_only(false);
    }

    let font = config.font().clone();
    let family = args
        .font_family
        .as_deref()
        .map(FontFamily::from)
        .unwrap_or(font.family);
    let bold = if args.no_bold {
        false
    } else {
        args.bold || font.style.bold
    };
    let style = FontStyle {
        bold,
        italic: args.italic || font.style.italic,
    };
    config.set_font(family, style, args.font_size.unwrap_or(font.point_size));

    config.validate()?;
    Ok(config)
}

fn cmd_draw(args: DrawArgs) -> anyhow::Result<()> {
    let config = build_config(&args)?;
    let first_letter_only = config.first_letter_only();
    let mut avatar = Avatar::new(config);
    if let Some(dir) = &args.font_dir {
        let added = avatar
            .fonts_mut()
            .load_fonts_from_dir(dir)
            .with_context(|| format!("load fonts from '{}'", dir.display()))?;
        if args.verbose {
            eprintln!("loaded {added} font faces from {}", dir.display());
        }
    }

    if args.verbose {
        let config = avatar.config();
        eprintln!(
            "shape={:?} size={} font={} {}pt bold={} italic={}",
            config.shape(),
            config.size(),
            config.font().family,
            config.font().point_size,
            config.font().style.bold,
            config.font().style.italic,
        );
        eprintln!(
            "background={} fill={} fore={}",
            config.background_color().to_hex(),
            if config.derives_fill_from_content() {
                "derived".to_owned()
            } else {
                config.fill_color().to_hex()
            },
            config.fore_color().to_hex(),
        );
    }

    let png = match &args.suffix {
        Some(suffix) => avatar.draw_with(&args.text, |raw| {
            let mut content = lettermark::default_transform(raw, first_letter_only);
            content.push_str(suffix);
            content
        })?,
        None => avatar.draw(&args.text)?,
    };

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    png.save_to(&args.out)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    if args.verbose {
        eprintln!("encoded {} bytes", png.len());
    }
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_color(args: ColorArgs) -> anyhow::Result<()> {
    lettermark::validate_input(&args.text)?;
    let content = lettermark::default_transform(&args.text, true);
    println!("{}", lettermark::color_for_content(&content).to_hex_rgb());
    Ok(())
}
