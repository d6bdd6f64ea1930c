#[cfg(test)]
mod tests {
    use crate::animation::*;
    use crate::scene::*;
    use crate::signal::*;
    use crate::text::*;
    use crate::{Color, Rect, Size, Vec2};
    use std::cell::RefCell;
    use std::rc::Rc;
    use web_time::Duration;

    fn linear(ms: u64, clock: &ManualClock) -> AnimatedValue<f32> {
        AnimatedValue::new(
            0.0f32,
            AnimationSpec::tween(Duration::from_millis(ms), Easing::Linear),
            Rc::new(clock.clone()),
        )
    }

    #[test]
    fn test_signal_basic() {
        let sig = signal(42);
        assert_eq!(sig.get(), 42);

        sig.set(100);
        assert_eq!(sig.get(), 100);

        sig.update(|v| *v += 1);
        assert_eq!(sig.get(), 101);
    }

    #[test]
    fn test_signal_subscription() {
        let sig = signal(0);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let seen_clone = seen.clone();
        let id = sig.subscribe(move |v| seen_clone.borrow_mut().push(*v));

        sig.set(42);
        sig.set(42);
        sig.unsubscribe(id);
        sig.set(7);
        assert_eq!(*seen.borrow(), vec![42, 42]);
    }

    #[test]
    fn test_emitter_unsubscribe() {
        let em: Emitter<usize> = Emitter::new();
        let hits = Rc::new(RefCell::new(0usize));

        let h = hits.clone();
        let a = em.subscribe(move |v| *h.borrow_mut() += *v);
        let h = hits.clone();
        em.subscribe(move |v| *h.borrow_mut() += *v * 10);

        em.emit(&1);
        assert_eq!(*hits.borrow(), 11);

        em.unsubscribe(a);
        assert_eq!(em.subscriber_count(), 1);
        em.emit(&1);
        assert_eq!(*hits.borrow(), 21);
    }

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex("#FF5733");
        assert_eq!(c, Color(255, 87, 51, 255));

        let c_alpha = Color::from_hex("#FF5733AA");
        assert_eq!(c_alpha, Color(255, 87, 51, 170));

        assert_eq!(Color::from_hex("nope"), Color::BLACK);
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(10.0, 10.0, 100.0, 50.0);

        assert!(rect.contains(Vec2 { x: 50.0, y: 30.0 }));
        assert!(rect.contains(Vec2 { x: 10.0, y: 60.0 }));
        assert!(!rect.contains(Vec2 { x: 5.0, y: 30.0 }));
        assert!(!rect.contains(Vec2 { x: 50.0, y: 70.0 }));
    }

    #[test]
    fn test_rect_inset_and_containment() {
        let outer = Rect::new(0.0, 0.0, 300.0, 40.0);
        let inner = outer.inset(2.0);
        assert_eq!(inner, Rect::new(2.0, 2.0, 296.0, 36.0));
        assert!(outer.contains_rect(&inner));
        assert!(!inner.contains_rect(&outer));
        assert_eq!(inner.center_x(), 150.0);
    }

    #[test]
    fn test_animation_deterministic() {
        let clock = ManualClock::default();
        let mut a = linear(1000, &clock);
        a.set_target(10.0);

        clock.advance(Duration::from_millis(250));
        assert!(a.update());
        assert!((*a.get() - 2.5).abs() < 0.01);

        clock.advance(Duration::from_millis(750));
        assert!(!a.update());
        assert!((*a.get() - 10.0).abs() < 0.001);
        assert!(!a.is_animating());
    }

    #[test]
    fn test_retarget_continues_from_current() {
        let clock = ManualClock::default();
        let mut a = linear(1000, &clock);
        a.set_target(10.0);

        clock.advance(Duration::from_millis(500));
        a.set_target(0.0);
        // sampled at 5.0, no jump back to the original start
        assert!((*a.get() - 5.0).abs() < 0.01);

        clock.advance(Duration::from_millis(500));
        a.update();
        assert!((*a.get() - 2.5).abs() < 0.01);
    }

    #[test]
    fn test_snap_stops_animation() {
        let clock = ManualClock::default();
        let mut a = linear(1000, &clock);
        a.set_target(10.0);
        a.snap_to(3.0);
        assert!(!a.is_animating());
        clock.advance(Duration::from_millis(100));
        assert!(!a.update());
        assert_eq!(*a.get(), 3.0);
    }

    #[test]
    fn test_spring_endpoints_and_velocity() {
        let spring = Easing::Spring {
            damping_ratio: 0.75,
            initial_velocity: 0.0,
        };
        assert_eq!(spring.interpolate(0.0), 0.0);
        assert!((spring.interpolate(1.0) - 1.0).abs() < 0.01);

        // underdamped springs overshoot somewhere along the way
        let peak = (1..100)
            .map(|i| spring.interpolate(i as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0);

        let critical = Easing::Spring {
            damping_ratio: 1.0,
            initial_velocity: 0.0,
        };
        for i in 1..100 {
            assert!(critical.interpolate(i as f32 / 100.0) <= 1.0 + 1e-4);
        }

        // a positive kick leads early on
        let kicked = Easing::Spring {
            damping_ratio: 1.0,
            initial_velocity: 5.0,
        };
        assert!(kicked.interpolate(0.05) > critical.interpolate(0.05));
    }

    #[test]
    fn test_spring_has_settled_just_before_the_end() {
        // the final snap to the target must not be visible on any damping
        for damping_ratio in [0.3, 0.75, 1.0, 2.0] {
            let spring = Easing::Spring {
                damping_ratio,
                initial_velocity: 0.0,
            };
            let gap = (1.0 - spring.interpolate(0.999)).abs();
            assert!(gap < 0.0015, "damping {damping_ratio}: gap {gap}");
        }
    }

    #[test]
    fn test_spring_spec_scales_velocity_by_duration() {
        let spec = AnimationSpec::spring(Duration::from_millis(500), 0.5, 2.0);
        assert_eq!(
            spec.easing,
            Easing::Spring {
                damping_ratio: 0.5,
                initial_velocity: 1.0,
            }
        );
    }

    #[test]
    fn test_rect_interpolate() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(100.0, 10.0, 20.0, 10.0);
        assert_eq!(a.interpolate(&b, 0.5), Rect::new(50.0, 5.0, 15.0, 10.0));
    }

    #[test]
    fn test_monospace_measure() {
        let m = MonospaceMeasure::default();
        let s = m.measure("Four", &Font::sized(10.0), Size::new(1.0, 1.0));
        assert_eq!(s.width, 20.0);
        assert!((s.height - 13.0).abs() < 1e-4);
    }

    #[test]
    fn test_scene_open_clips() {
        let mut scene = Scene::new();
        let clip = Rect::new(1.0, 2.0, 3.0, 4.0);
        scene.push(SceneNode::PushClip {
            rect: clip,
            radius: 0.0,
        });
        assert_eq!(scene.open_clips(), vec![clip]);
        scene.push(SceneNode::PopClip);
        assert!(scene.open_clips().is_empty());
    }
}
