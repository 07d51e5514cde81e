//! Headless blizzard: runs a shipped screen effect for a few seconds and
//! dumps the final frame as ASCII.
//!
//! Usage: `blizzard [snowballs|candy-canes|holiday-cookies|snowflakes] [seed]`

use snowglobe::{presets, FactoryConfig, IndexedSurface, ScreenEffect};

const FRAMES: u32 = 600;
const DT: f32 = 1.0 / 60.0;

fn effect_by_name(name: &str) -> Option<ScreenEffect> {
    match name {
        "snowballs" => Some(presets::snowballs()),
        "candy-canes" => Some(presets::candy_canes()),
        "holiday-cookies" => Some(presets::holiday_cookies()),
        "snowflakes" => Some(presets::snowflakes()),
        _ => None,
    }
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let name = args.next().unwrap_or_else(|| "snowflakes".to_string());
    let seed: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xC0FFEE);

    let Some(mut effect) = effect_by_name(&name) else {
        eprintln!("unknown effect '{name}'");
        eprintln!("known effects: snowballs, candy-canes, holiday-cookies, snowflakes");
        std::process::exit(1);
    };

    let mut surface = IndexedSurface::new(
        FactoryConfig::DEFAULT_SCREEN_WIDTH as u32,
        FactoryConfig::DEFAULT_SCREEN_HEIGHT as u32,
    );

    effect.start(seed);
    let mut peak = 0usize;
    for frame in 0..FRAMES {
        effect.tick(DT);
        peak = peak.max(effect.particle_count());

        surface.clear(0);
        effect.draw(&mut surface);

        if frame % 120 == 0 {
            log::info!(
                "frame {frame}: {} particles, {} lit pixels",
                effect.particle_count(),
                surface.opaque_pixels()
            );
        }
    }

    print_frame(&surface);
    println!(
        "{name}: {} live particles after {FRAMES} frames (peak {peak}), seed {seed:#x}",
        effect.particle_count()
    );
}

/// Crude downsampled ASCII view: one character per 2x2 pixel block.
fn print_frame(surface: &IndexedSurface) {
    for by in 0..surface.height() / 2 {
        let mut row = String::with_capacity((surface.width() / 2) as usize);
        for bx in 0..surface.width() / 2 {
            let mut lit = 0;
            for (ox, oy) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
                let p = surface
                    .pixel((bx * 2 + ox) as i32, (by * 2 + oy) as i32)
                    .unwrap_or(0);
                if p != 0 {
                    lit += 1;
                }
            }
            row.push(match lit {
                0 => ' ',
                1 => '.',
                2 => 'o',
                _ => '#',
            });
        }
        println!("{row}");
    }
}
