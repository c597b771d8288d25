// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Triton CLI entrypoint.
//!
//! Reads a Mermaid `packet` definition, lays it out, and prints it as Unicode
//! box-drawing text (default) or SVG (`--svg`).

use std::error::Error;
use std::fs;
use std::io::Read;

use triton::config::{PacketConfig, PacketConfigOverrides};
use triton::format::mermaid::parse_packet_diagram;
use triton::layout::layout_packet;
use triton::render::{render_packet_svg, render_packet_unicode_with_options, TextRenderOptions};

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<packet.mmd>] [--svg] [--config <config.json>] [--out <path>]\n\nReads the packet definition from <packet.mmd>, or from stdin when omitted.\n\n--config applies JSON overrides onto the built-in packet config, using the\nMermaid key names (e.g. {{\"bitsPerRow\": 16, \"showBits\": false}}).\n--svg emits an SVG document instead of Unicode text.\n--out writes the rendering to <path> instead of stdout."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    input: Option<String>,
    svg: bool,
    config_path: Option<String>,
    out_path: Option<String>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--svg" => {
                if options.svg {
                    return Err(());
                }
                options.svg = true;
            }
            "--config" => {
                if options.config_path.is_some() {
                    return Err(());
                }
                options.config_path = Some(args.next().ok_or(())?);
            }
            "--out" => {
                if options.out_path.is_some() {
                    return Err(());
                }
                options.out_path = Some(args.next().ok_or(())?);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.input.is_some() {
                    return Err(());
                }
                options.input = Some(arg);
            }
        }
    }

    Ok(options)
}

fn run(options: CliOptions) -> Result<(), Box<dyn Error>> {
    let source = match &options.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let overrides = match &options.config_path {
        Some(path) => serde_json::from_str::<PacketConfigOverrides>(&fs::read_to_string(path)?)?,
        None => PacketConfigOverrides::default(),
    };
    let config = PacketConfig::resolve(&overrides);

    let ast = parse_packet_diagram(&source)?;
    let layout = layout_packet(&ast, &config)?;

    let rendered = if options.svg {
        render_packet_svg(&ast, &layout, &config)?
    } else {
        let text_options = TextRenderOptions {
            show_bits: config.show_bits,
            ..TextRenderOptions::default()
        };
        let mut text = render_packet_unicode_with_options(&ast, &layout, text_options)?;
        if !text.is_empty() {
            text.push('\n');
        }
        text
    };

    match &options.out_path {
        Some(path) => fs::write(path, rendered)?,
        None => print!("{rendered}"),
    }

    Ok(())
}

fn main() {
    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "triton".to_owned());

    let options = match parse_options(args) {
        Ok(options) => options,
        Err(()) => {
            print_usage(&program);
            std::process::exit(2);
        }
    };

    if let Err(err) = run(options) {
        eprintln!("{program}: {err}");
        std::process::exit(1);
    }
}
