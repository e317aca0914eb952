// SPDX-License-Identifier: MPL-2.0
//! Headless bubble bar demo.
//!
//! Builds a bar from command-line flags, runs one simulated drag and prints
//! the resolved configuration and the screen reader announcement.
//!
//! ```text
//! bubble-bar-demo --items 5 --swipe full --width 320 --select 2 --drag -150
//! ```

use bubble_bar::accessibility::{AccessibilitySignals, DynamicTextScale};
use bubble_bar::config::{file, Configuration, SwipeBehavior};
use bubble_bar::ui::bar::{BubbleBar, Event, Message};
use bubble_bar::ui::style::Preset;
use bubble_bar::ui::tab_item::TabItem;
use bubble_bar::ui::theming::ThemeMode;
use iced_core::Vector;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
bubble-bar-demo

USAGE:
  bubble-bar-demo [OPTIONS]

OPTIONS:
  --style <preset>          forest, desert, night-owl, ocean, glass, dark, high-contrast
  --settings <file>         TOML settings file applied before other flags
  --scheme <mode>           light, dark or system
  --text-size <size>        x-small .. xxx-large, accessibility1 .. accessibility5
  --reduce-motion           Simulate the reduce motion setting
  --reduce-transparency     Simulate the reduce transparency setting
  --contrast                Simulate the increased contrast setting
  --items <n>               Number of tabs [default: 4]
  --swipe <policy>          disabled, edges-only or full [default: full]
  --width <px>              Screen and page width [default: 390]
  --select <index>          Index selected before the drag [default: 0]
  --from <x>                Horizontal start of the drag [default: 10]
  --drag <dx>               Horizontal drag translation [default: 0]
  -h, --help                Print help
";

struct Flags {
    style: Option<Preset>,
    settings: Option<PathBuf>,
    scheme: Option<ThemeMode>,
    text_size: DynamicTextScale,
    reduce_motion: bool,
    reduce_transparency: bool,
    contrast: bool,
    items: usize,
    swipe: SwipeBehavior,
    width: f32,
    select: isize,
    from: f32,
    drag: f32,
}

fn parse_swipe(s: &str) -> Result<SwipeBehavior, String> {
    match s {
        "disabled" => Ok(SwipeBehavior::Disabled),
        "edges-only" | "edges" => Ok(SwipeBehavior::EdgesOnly),
        "full" => Ok(SwipeBehavior::Full),
        other => Err(format!("unknown swipe policy '{other}'")),
    }
}

fn parse_scheme(s: &str) -> Result<ThemeMode, String> {
    match s {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(format!("unknown color scheme '{other}'")),
    }
}

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(None);
    }

    let flags = Flags {
        style: args.opt_value_from_str("--style")?,
        settings: args.opt_value_from_os_str("--settings", |s| {
            Ok::<_, std::convert::Infallible>(PathBuf::from(s))
        })?,
        scheme: args.opt_value_from_fn("--scheme", parse_scheme)?,
        text_size: args
            .opt_value_from_str("--text-size")?
            .unwrap_or_default(),
        reduce_motion: args.contains("--reduce-motion"),
        reduce_transparency: args.contains("--reduce-transparency"),
        contrast: args.contains("--contrast"),
        items: args.opt_value_from_str("--items")?.unwrap_or(4),
        swipe: args
            .opt_value_from_fn("--swipe", parse_swipe)?
            .unwrap_or(SwipeBehavior::Full),
        width: args.opt_value_from_str("--width")?.unwrap_or(390.0),
        select: args.opt_value_from_str("--select")?.unwrap_or(0),
        from: args.opt_value_from_str("--from")?.unwrap_or(10.0),
        drag: args.opt_value_from_str("--drag")?.unwrap_or(0.0),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unknown arguments");
    }
    Ok(Some(flags))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let Some(flags) = parse_flags()? else {
        return Ok(());
    };

    let mut config = Configuration::default();
    let mut theme = ThemeMode::default();
    if let Some(path) = &flags.settings {
        let settings = file::load_from_path(path)?;
        settings.apply_to(&mut config)?;
        theme = settings.theme();
    }
    if let Some(preset) = flags.style {
        config.set_style(preset);
    }
    config.set_swipe_behavior(flags.swipe);
    let theme = flags.scheme.unwrap_or(theme);

    let labels = ["Home", "Search", "Library", "Profile", "Settings"];
    let items = (0..flags.items)
        .map(|i| {
            let label = labels
                .get(i)
                .map_or_else(|| format!("Tab {i}"), |label| (*label).to_string());
            TabItem::new(format!("icon-{i}"), label)
        })
        .collect();

    let mut bar = BubbleBar::new(items, config);
    bar.set_color_scheme(theme.resolve());
    bar.set_screen_width(flags.width);
    bar.set_signals(AccessibilitySignals {
        text_scale: flags.text_size,
        reduce_motion: flags.reduce_motion,
        reduce_transparency: flags.reduce_transparency,
        increased_contrast: flags.contrast,
    });
    bar.set_selected_index(flags.select);

    let effective = bar.effective();
    let colors = bar.colors();
    println!("{}: {}", bar.accessibility_label(), bar.accessibility_hint());
    println!("style:           {:?}", effective.style());
    println!("selected color:  {:?}", colors.selected_item);
    println!("bubble fill:     {:?}", colors.bubble_fill);
    println!("glass:           {}", effective.glass().enabled);
    println!("bar size:        {} x {}", bar.bar_width(), effective.bar_height());
    println!("item spacing:    {}", effective.item_spacing());
    println!("settle curve:    {:?}", effective.settle_curve());
    println!("transition:      {:?}", effective.view_transition());

    let translation = Vector::new(flags.drag, 0.0);
    let mut events = vec![
        bar.update(Message::DragStarted { x: flags.from }),
        bar.update(Message::DragChanged(translation)),
        bar.update(Message::DragEnded(translation)),
    ];
    while bar.is_animating() {
        events.push(bar.update(Message::Tick(Duration::from_millis(16))));
    }

    for event in events {
        if let Event::SelectionChanged {
            index,
            announcement,
        } = event
        {
            println!("announce [{index}]:    {announcement}");
        }
    }
    println!("selected:        {}", bar.selected_index());
    Ok(())
}
