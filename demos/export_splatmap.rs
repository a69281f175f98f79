//! Exports the splatmaps of a procedural six-layer terrain.
//!
//! Writes `island_splat0.tga` and `island_splat1.tga` into
//! `assets/splatmaps` and exits.
//!
//! Run with: `cargo run --example export_splatmap`

use bevy::app::AppExit;
use bevy::prelude::*;
use bevy_splat_tools::prelude::*;

const RESOLUTION: usize = 256;
const LAYERS: usize = 6;

fn main() {
    App::new()
        .add_plugins(MinimalPlugins)
        .add_plugins(bevy::log::LogPlugin::default())
        .init_resource::<Assets<Image>>()
        .add_plugins(EditorToolsPlugin)
        .add_systems(Startup, setup)
        .add_systems(Update, exit_when_done.after(EditorToolsSystems))
        .run();
}

fn setup(mut commands: Commands, mut export: MessageWriter<ExportSplatmap>) {
    let alphamap = Alphamap::from_fn(RESOLUTION, LAYERS, |x, y, texel| {
        // Height-like gradient split into bands, one layer per band.
        let t = (x + y) as f32 / (2 * RESOLUTION - 1) as f32;
        let band = t * (LAYERS - 1) as f32;
        let lower = band.floor() as usize;
        let upper = (lower + 1).min(LAYERS - 1);
        let blend = band.fract();
        texel[lower] += 1.0 - blend;
        texel[upper] += blend;
    })
    .expect("valid alphamap shape");

    let terrain = commands.spawn(TerrainAlphamap(alphamap)).id();
    export.write(ExportSplatmap {
        terrain,
        name: "island".into(),
    });
}

fn exit_when_done(
    mut exported: MessageReader<TextureExported>,
    mut written: Local<usize>,
    mut exit: MessageWriter<AppExit>,
) {
    for message in exported.read() {
        info!("Wrote {}", message.path.display());
        *written += 1;
    }
    if *written == LAYERS.div_ceil(4) {
        exit.write(AppExit::Success);
    }
}
