//! Derives a theme from a seed color and prints the CSS variable maps.
//!
//! Run with: cargo run --example theme_export

use tonika_theme::{CssOptions, SchemeVariant, ThemeColors, make_theme};

fn main() {
    let colors = ThemeColors::new("#6750a4")
        .with_color("brandColor", "#cc0033")
        .with_color("success", "#2e7d32");
    let theme = match make_theme(&colors, SchemeVariant::TonalSpot, 0.0) {
        Ok(theme) => theme,
        Err(err) => {
            eprintln!("theme derivation failed: {err}");
            return;
        }
    };

    println!("seed: {}", theme.source.hex());
    for role in ["primary", "on-primary", "surface-container", "brand-color"] {
        let light = theme.light.get(role).map(|c| c.hex().to_string());
        let dark = theme.dark.get(role).map(|c| c.hex().to_string());
        println!(
            "{role}: light {} / dark {}",
            light.unwrap_or_default(),
            dark.unwrap_or_default()
        );
    }

    let css = theme.css_vars(&CssOptions {
        dark_suffix: "-dark".to_string(),
        light_suffix: "-light".to_string(),
        ..CssOptions::default()
    });
    println!("\n:root {{");
    for (name, value) in css.light_values.iter().take(8) {
        println!("  {name}: {value};");
    }
    println!("  /* {} more declarations */", css.light_values.len() - 8);
    println!("}}");
}
