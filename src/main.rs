use anyhow::Result;
use glam::Vec2;

mod demo;

fn main() -> Result<()> {
    pretty_env_logger::init();

    let mut state = demo::DemoState::new()?;

    for frame in 0..8 {
        let time = frame as f32 / 4.0;
        let pointer = Vec2::new(640.0 + 200.0 * time.cos(), 360.0 + 120.0 * time.sin());
        state.update(time, pointer);
    }

    let changed = state.scene.changed_objects().count();
    log::info!("{changed} objects moved during the last frame");

    Ok(())
}
