use elastic_core::prelude::*;
use elastic_segmented::{ElasticSegmentedControl, SegmentedStyle, SpringSpec};
use elastic_text::CosmicMeasure;
use std::rc::Rc;
use web_time::Duration;

const FRAME: Duration = Duration::from_millis(16);

fn measurer() -> Rc<dyn TextMeasure> {
    // ELASTIC_MEASURE=mono skips font discovery (handy on font-less CI boxes)
    match std::env::var("ELASTIC_MEASURE").as_deref() {
        Ok("mono") => Rc::new(MonospaceMeasure::default()),
        _ => Rc::new(CosmicMeasure::shared()),
    }
}

fn run_frames(control: &mut ElasticSegmentedControl, clock: &ManualClock, label: &str) {
    let mut frame = 0;
    loop {
        clock.advance(FRAME);
        let running = control.tick();
        if let Some(thumb) = control.thumb_rect() {
            log::info!(
                "{label} frame {frame:>2}: thumb x={:>7.2} clip x={:>7.2}",
                thumb.x,
                control.clip_rect().x
            );
        }
        frame += 1;
        if !running {
            break;
        }
    }
}

fn touch(kind: PointerEventKind, x: f32) -> PointerEvent {
    PointerEvent::touch(kind, Vec2::new(x, 20.0))
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Starting segmented control demo");

    let clock = ManualClock::default();
    let mut control = ElasticSegmentedControl::with_clock(measurer(), Rc::new(clock.clone()));
    control.set_style(SegmentedStyle {
        font: Font::sized(15.0),
        animation: SpringSpec {
            duration: Duration::from_millis(300),
            damping: 0.75,
            initial_velocity: 0.0,
        },
        ..SegmentedStyle::default()
    })?;
    control.set_titles(&["Day", "Week", "Month"]);
    control.set_bounds(Size::new(300.0, 40.0));
    control.on_value_changed(|i| log::info!("value changed -> {i}"));

    log::info!("tap on the last segment");
    control.handle_pointer(&touch(PointerEventKind::Down(PointerButton::Primary), 250.0));
    control.handle_pointer(&touch(PointerEventKind::Up(PointerButton::Primary), 250.0));
    run_frames(&mut control, &clock, "tap");

    log::info!("drag the thumb halfway and let go (snaps back, no event)");
    control.handle_pointer(&touch(PointerEventKind::Down(PointerButton::Primary), 250.0));
    control.handle_pointer(&touch(PointerEventKind::Move, 230.0));
    control.handle_pointer(&touch(PointerEventKind::Move, 215.0));
    control.handle_pointer(&touch(PointerEventKind::Up(PointerButton::Primary), 215.0));
    run_frames(&mut control, &clock, "half-drag");

    log::info!("drag the thumb to the first segment");
    control.handle_pointer(&touch(PointerEventKind::Down(PointerButton::Primary), 250.0));
    for x in [220.0, 160.0, 100.0, 40.0] {
        control.handle_pointer(&touch(PointerEventKind::Move, x));
    }
    control.handle_pointer(&touch(PointerEventKind::Up(PointerButton::Primary), 40.0));
    run_frames(&mut control, &clock, "drag");

    for node in control.paint().nodes {
        log::info!("{node:?}");
    }
    log::info!("selected index: {}", control.selected_index());
    Ok(())
}
