#[cfg(test)]
mod tests {
    use glam::DVec2;

    use raider_core::constants::*;
    use raider_core::enums::{Direction, PatternKind};
    use raider_core::types::Rect;

    use crate::library::{FlightPattern, Oscillation, PatternLibrary, PatternParameters};
    use crate::motion::{evaluate, MotionState};

    const EPS: f64 = 1e-9;

    fn make_state(x: f64, y: f64) -> MotionState {
        MotionState {
            position: DVec2::new(x, y),
            size: DVec2::new(DEFAULT_AGENT_WIDTH, DEFAULT_AGENT_HEIGHT),
            base: DVec2::new(x, y),
            angle: 0.0,
            elapsed: 0.0,
            speed: DEFAULT_AGENT_SPEED,
        }
    }

    fn pattern_for(name: &str, library: &PatternLibrary) -> FlightPattern {
        let params = library.resolve(name);
        FlightPattern::resolve(params.kind_for(name), &params)
    }

    /// Run `ticks` evaluations, feeding each output back in.
    fn run(
        mut state: MotionState,
        pattern: &FlightPattern,
        target: Option<Rect>,
        ticks: usize,
        dt: f64,
    ) -> MotionState {
        for _ in 0..ticks {
            let update = evaluate(&state, pattern, target, dt);
            state.position = update.position;
            state.angle = update.angle;
            state.elapsed = update.elapsed;
        }
        state
    }

    // ---- Library ----

    #[test]
    fn test_resolve_missing_name_is_empty_bag() {
        let library = PatternLibrary::new();
        assert_eq!(library.resolve("anything"), PatternParameters::default());
    }

    #[test]
    fn test_resolve_returns_snapshot() {
        let mut library = PatternLibrary::new();
        library.insert(
            "swoop",
            PatternParameters {
                amplitude: Some(40.0),
                ..PatternParameters::of_kind(PatternKind::Sinusoidal)
            },
        );
        let snapshot = library.resolve("swoop");
        library.insert("swoop", PatternParameters::of_kind(PatternKind::Circular));
        assert_eq!(snapshot.amplitude, Some(40.0));
        assert_eq!(snapshot.pattern_kind, Some(PatternKind::Sinusoidal));
    }

    #[test]
    fn test_kind_from_type_key_or_name() {
        let explicit = PatternParameters::of_kind(PatternKind::Wave);
        assert_eq!(explicit.kind_for("swoop"), PatternKind::Wave);

        let implicit = PatternParameters::default();
        assert_eq!(implicit.kind_for("zigzag"), PatternKind::Zigzag);
        assert_eq!(implicit.kind_for("linear_down"), PatternKind::Unknown);
    }

    #[test]
    fn test_library_from_json() {
        let json = r#"{
            "swoop": { "type": "sinusoidal", "amplitude": 60, "frequency": 0.2 },
            "dive": { "type": "linear", "direction": "down_right", "speed_multiplier": 2.0 },
            "circular": { "radius": 50, "color": "red" }
        }"#;
        let library = PatternLibrary::from_json_str(json).unwrap();
        assert_eq!(library.len(), 3);

        let swoop = library.resolve("swoop");
        assert_eq!(swoop.pattern_kind, Some(PatternKind::Sinusoidal));
        assert_eq!(swoop.amplitude, Some(60.0));
        assert_eq!(swoop.vertical_speed_multiplier, None);

        let dive = library.resolve("dive");
        assert_eq!(dive.direction, Some(Direction::DownRight));

        let circular = library.resolve("circular");
        assert_eq!(circular.kind_for("circular"), PatternKind::Circular);
        assert_eq!(circular.radius, Some(50.0));
    }

    #[test]
    fn test_library_unknown_type_falls_back() {
        let library = PatternLibrary::from_json_str(r#"{ "loop": { "type": "loop_de_loop" } }"#)
            .unwrap();
        assert_eq!(pattern_for("loop", &library), FlightPattern::Fallback);
    }

    #[test]
    fn test_library_unknown_direction_uses_kind_default() {
        let library = PatternLibrary::from_json_str(
            r#"{"swoop":{"type":"sinusoidal","amplitude":60},"dive":{"type":"linear","direction":"up_left"}}"#,
        )
        .unwrap();
        assert_eq!(library.len(), 2);

        match pattern_for("swoop", &library) {
            FlightPattern::Oscillating(osc) => assert_eq!(osc.amplitude, 60.0),
            other => panic!("expected oscillating pattern, got {other:?}"),
        }
        assert_eq!(
            pattern_for("dive", &library),
            FlightPattern::Linear {
                direction: Direction::Down,
                speed_multiplier: 1.0,
            }
        );
    }

    #[test]
    fn test_library_malformed_json_is_error() {
        assert!(PatternLibrary::from_json_str("{ not json").is_err());
        assert!(PatternLibrary::from_json_str(r#"{ "a": { "amplitude": "big" } }"#).is_err());
    }

    #[test]
    fn test_library_missing_file_is_io_error() {
        let err = PatternLibrary::from_json_file("/nonexistent/patterns.json").unwrap_err();
        assert!(matches!(err, crate::library::ConfigError::Io { .. }));
    }

    #[test]
    fn test_builtin_library_covers_every_kind() {
        let library = PatternLibrary::builtin();
        assert_eq!(library.len(), PatternKind::ALL.len());
        for name in library.names() {
            assert_ne!(pattern_for(name, &library), FlightPattern::Fallback);
        }
    }

    #[test]
    fn test_resolve_defaults() {
        let empty = PatternParameters::default();
        assert_eq!(
            FlightPattern::resolve(PatternKind::Linear, &empty),
            FlightPattern::Linear {
                direction: Direction::Down,
                speed_multiplier: 1.0
            }
        );
        assert_eq!(
            FlightPattern::resolve(PatternKind::LinearDiagonal, &empty),
            FlightPattern::Linear {
                direction: Direction::DownLeft,
                speed_multiplier: 1.0
            }
        );
        assert_eq!(
            FlightPattern::resolve(PatternKind::Sinusoidal, &empty),
            FlightPattern::Oscillating(Oscillation {
                amplitude: 150.0,
                frequency: 0.1,
                vertical_speed_multiplier: 1.0
            })
        );
        assert_eq!(
            FlightPattern::resolve(PatternKind::Zigzag, &empty),
            FlightPattern::Oscillating(Oscillation {
                amplitude: 120.0,
                frequency: 0.3,
                vertical_speed_multiplier: 1.0
            })
        );
        assert_eq!(
            FlightPattern::resolve(PatternKind::Wave, &empty),
            FlightPattern::Oscillating(Oscillation {
                amplitude: 100.0,
                frequency: 0.15,
                vertical_speed_multiplier: 0.8
            })
        );
        assert_eq!(
            FlightPattern::resolve(PatternKind::Circular, &empty),
            FlightPattern::Circular {
                angular_speed: 0.05,
                radius: 80.0
            }
        );
        assert_eq!(
            FlightPattern::resolve(PatternKind::Spiral, &empty),
            FlightPattern::Spiral {
                angular_speed: 0.1,
                radius_growth: 2.0
            }
        );
        assert_eq!(
            FlightPattern::resolve(PatternKind::ApproachPlayer, &empty),
            FlightPattern::ApproachPlayer {
                speed_multiplier: 1.0
            }
        );
        assert_eq!(
            FlightPattern::resolve(PatternKind::Unknown, &empty),
            FlightPattern::Fallback
        );
    }

    // ---- Motion ----

    #[test]
    fn test_fallback_moves_down_by_speed() {
        let state = make_state(100.0, 100.0);
        let update = evaluate(&state, &FlightPattern::Fallback, None, 1.0);
        assert_eq!(update.position, DVec2::new(100.0, 103.0));
        assert_eq!(update.elapsed, 1.0);
        assert_eq!(update.angle, 0.0);
    }

    #[test]
    fn test_linear_directions() {
        let state = make_state(100.0, 100.0);
        let cases = [
            (Direction::Down, DVec2::new(100.0, 106.0)),
            (Direction::Up, DVec2::new(100.0, 94.0)),
            (Direction::Left, DVec2::new(94.0, 100.0)),
            (Direction::Right, DVec2::new(106.0, 100.0)),
        ];
        for (direction, expected) in cases {
            let pattern = FlightPattern::Linear {
                direction,
                speed_multiplier: 2.0,
            };
            let update = evaluate(&state, &pattern, None, 1.0);
            assert!(
                (update.position - expected).length() < EPS,
                "{direction:?}: got {:?}",
                update.position
            );
        }
    }

    #[test]
    fn test_linear_diagonal_half_horizontal() {
        let state = make_state(100.0, 100.0);
        let library = PatternLibrary::builtin();
        let update = evaluate(&state, &pattern_for("linear_diagonal", &library), None, 1.0);
        assert_eq!(update.position, DVec2::new(98.5, 103.0));

        let right = FlightPattern::Linear {
            direction: Direction::DownRight,
            speed_multiplier: 1.0,
        };
        let update = evaluate(&state, &right, None, 1.0);
        assert_eq!(update.position, DVec2::new(101.5, 103.0));
    }

    #[test]
    fn test_linear_scales_with_dt() {
        let state = make_state(0.0, 0.0);
        let pattern = FlightPattern::Linear {
            direction: Direction::Down,
            speed_multiplier: 1.0,
        };
        let one = run(state, &pattern, None, 1, 2.0);
        let two = run(state, &pattern, None, 2, 1.0);
        assert!((one.position - two.position).length() < EPS);
        assert_eq!(one.elapsed, two.elapsed);
    }

    #[test]
    fn test_oscillation_formula() {
        let pattern = FlightPattern::Oscillating(Oscillation {
            amplitude: 150.0,
            frequency: 0.1,
            vertical_speed_multiplier: 1.0,
        });
        let state = run(make_state(500.0, 0.0), &pattern, None, 10, 1.0);
        let expected_x = 500.0 + (10.0_f64 * 0.1).sin() * 150.0;
        assert!((state.position.x - expected_x).abs() < EPS);
        assert!((state.position.y - 30.0).abs() < EPS);
        assert_eq!(state.angle, 0.0, "Oscillation must not touch angle");
    }

    #[test]
    fn test_wave_vertical_multiplier() {
        let library = PatternLibrary::builtin();
        let state = run(make_state(500.0, 0.0), &pattern_for("wave", &library), None, 5, 1.0);
        assert!((state.position.y - 5.0 * 3.0 * 0.8).abs() < EPS);
    }

    #[test]
    fn test_circular_closed_form() {
        let omega = 0.05;
        let radius = 80.0;
        let pattern = FlightPattern::Circular {
            angular_speed: omega,
            radius,
        };
        let start = make_state(400.0, 300.0);
        for n in [1usize, 7, 50, 200] {
            let state = run(start, &pattern, None, n, 1.0);
            let a = n as f64 * omega;
            let expected = start.base + DVec2::new(a.cos(), a.sin()) * radius;
            assert!(
                (state.position - expected).length() < 1e-6,
                "n={n}: got {:?}, expected {:?}",
                state.position,
                expected
            );
            assert!((state.angle - a).abs() < 1e-9);
        }
    }

    #[test]
    fn test_spiral_radius_grows_with_elapsed() {
        let pattern = FlightPattern::Spiral {
            angular_speed: 0.1,
            radius_growth: 2.0,
        };
        let start = make_state(400.0, 300.0);
        let state = run(start, &pattern, None, 10, 1.0);
        let distance = (state.position - start.base).length();
        assert!((distance - 20.0).abs() < 1e-6);
        assert!((state.angle - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_approach_player_moves_toward_target() {
        let state = make_state(0.0, 0.0);
        // Target centre directly to the right of the agent centre.
        let target = Rect::new(300.0, 0.0, DEFAULT_AGENT_WIDTH, DEFAULT_AGENT_HEIGHT);
        let pattern = FlightPattern::ApproachPlayer {
            speed_multiplier: 2.0,
        };
        let update = evaluate(&state, &pattern, Some(target), 1.0);
        assert!((update.position - DVec2::new(6.0, 0.0)).length() < EPS);
    }

    #[test]
    fn test_approach_player_zero_distance_is_noop() {
        let state = make_state(50.0, 50.0);
        let target = state.bounds();
        let pattern = FlightPattern::ApproachPlayer {
            speed_multiplier: 1.0,
        };
        let update = evaluate(&state, &pattern, Some(target), 1.0);
        assert_eq!(update.position, state.position);
        assert_eq!(update.elapsed, 1.0);
    }

    #[test]
    fn test_approach_player_without_target_falls() {
        let state = make_state(50.0, 50.0);
        let pattern = FlightPattern::ApproachPlayer {
            speed_multiplier: 5.0,
        };
        let update = evaluate(&state, &pattern, None, 1.0);
        assert_eq!(update.position, DVec2::new(50.0, 53.0));
    }

    #[test]
    fn test_elapsed_monotonic_for_all_patterns() {
        let library = PatternLibrary::builtin();
        let target = Rect::new(500.0, 600.0, 40.0, 28.0);
        for name in library.names() {
            let pattern = pattern_for(name, &library);
            let mut state = make_state(200.0, 100.0);
            let mut last = state.elapsed;
            for dt in [0.0, 0.5, 1.0, 2.5, 0.016] {
                let update = evaluate(&state, &pattern, Some(target), dt);
                assert!(update.elapsed >= last, "{name}: elapsed went backwards");
                last = update.elapsed;
                state.position = update.position;
                state.angle = update.angle;
                state.elapsed = update.elapsed;
            }
        }
    }
}
