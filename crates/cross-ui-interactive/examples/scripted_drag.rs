//! Headless walkthrough of a bounded slider.
//!
//! Replays a scripted pointer session through `SliderDriver` and prints each
//! update. Run with `RUST_LOG=debug` to see the slider's own logging.

use cross_ui::{Point, PointerState};
use cross_ui_interactive::{live_channel, Slider, SliderConfig, SliderDriver, UpdatePhase};

fn main() {
    env_logger::init();

    let config = SliderConfig::default()
        .with_id("price")
        .with_maximum(500.0)
        .with_step_count(20)
        .with_bounded(true)
        .with_minimum_gap(16.0);

    let (live_tx, live_rx) = live_channel();
    let mut slider = match Slider::new(config) {
        Ok(slider) => slider
            .with_range_values(100.0, 400.0)
            .with_live_sender(live_tx)
            .on_change(|update| {
                if update.phase == UpdatePhase::Final {
                    log::info!("settled {:?} at {}", update.thumb, update.offset);
                }
            }),
        Err(err) => {
            log::error!("invalid slider configuration: {}", err);
            return;
        }
    };

    // Layout pass
    if let Err(err) = slider.set_track_length(320.0) {
        log::error!("bad layout measurement: {}", err);
        return;
    }

    let mut driver = SliderDriver::new();
    let mut pointer = PointerState::new();

    // Press on the leading handle, drag right past the trailing one, release
    let script: [(Option<f32>, bool); 7] = [
        (Some(64.0), true),
        (Some(90.0), true),
        (Some(140.0), true),
        (Some(240.0), true),
        (Some(300.0), true),
        (Some(150.0), true),
        (Some(150.0), false),
    ];

    for (x, held) in script {
        pointer.begin_frame();
        pointer.set_position(x.map(|x| Point::new(x, 0.0)));
        if held && !pointer.pressed {
            pointer.press();
        } else if !held && pointer.pressed {
            pointer.release();
        }

        for update in driver.update(&mut slider, &pointer) {
            println!(
                "{:?} {:?} offset={:.1} selection={:?}",
                update.phase, update.thumb, update.offset, update.selection
            );
        }
        if let Some(latest) = live_rx.take() {
            println!("  live: {:?}", latest);
        }
    }

    println!(
        "final selection {:?}, highlight {:?}, {} live posts ({} dropped)",
        slider.selection(),
        slider.highlight(),
        live_rx.posted(),
        live_rx.dropped()
    );
}
