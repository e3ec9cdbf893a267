use log::debug;

use crate::motion::tween::Pose;

pub const TRANSITION_MS: f64 = 350.0;
/// Vertical travel of entering and exiting views.
pub const TRANSITION_OFFSET: f64 = 8.0;

const ENTER_FROM: Pose = Pose::hidden_below(TRANSITION_OFFSET);
const EXIT_TO: Pose = Pose::hidden_below(-TRANSITION_OFFSET);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayerState {
    Entering,
    Exiting,
    Settled,
}

/// One view on screen, identified by its path.
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    pub path: String,
    pub state: LayerState,
    pub pose: Pose,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    /// Already showing this path.
    Ignored,
    Started { generation: u64 },
}

#[derive(Clone, Debug)]
struct InFlight {
    exiting: Option<String>,
    /// Pose the exiting view had when it started leaving.
    exit_from: Pose,
    started_at: f64,
    generation: u64,
}

/// Which view is showing and how the switch between views is animated.
///
/// Exit and enter run together over the same window. Navigating again before
/// the window closes drops the old exiting view, turns the half-entered view
/// into the exiting one and starts over.
#[derive(Debug, Default)]
pub struct TransitionController {
    current_path: Option<String>,
    in_flight: Option<InFlight>,
    generation: u64,
}

impl TransitionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_path(&self) -> Option<&str> {
        self.current_path.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_animating(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn navigate(&mut self, path: &str, now_ms: f64) -> Navigation {
        if self.current_path.as_deref() == Some(path) {
            return Navigation::Ignored;
        }
        let exiting = self.current_path.replace(path.to_string());
        let exit_from = match &self.in_flight {
            Some(flight) => {
                if let Some(abandoned) = &flight.exiting {
                    debug!("Transition abandoned, dropping {}", abandoned);
                }
                ENTER_FROM.lerp(Pose::REST, self.progress_of(flight, now_ms))
            }
            None => Pose::REST,
        };
        self.generation += 1;
        self.in_flight = Some(InFlight {
            exiting,
            exit_from,
            started_at: now_ms,
            generation: self.generation,
        });
        debug!("Transition {} to {}", self.generation, path);
        Navigation::Started {
            generation: self.generation,
        }
    }

    /// Settles the transition once its window has passed. Returns whether
    /// anything is still animating.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        if let Some(flight) = &self.in_flight {
            if self.progress_of(flight, now_ms) >= 1.0 {
                self.in_flight = None;
            }
        }
        self.in_flight.is_some()
    }

    /// Like [`tick`](Self::tick), but ignores frames scheduled for an earlier
    /// transition.
    pub fn tick_generation(&mut self, generation: u64, now_ms: f64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.tick(now_ms)
    }

    /// Layers to draw at `now_ms`, exiting first so the entering view stacks
    /// on top.
    pub fn layers(&self, now_ms: f64) -> Vec<Layer> {
        let Some(current) = &self.current_path else {
            return Vec::new();
        };
        let Some(flight) = &self.in_flight else {
            return vec![Layer {
                path: current.clone(),
                state: LayerState::Settled,
                pose: Pose::REST,
            }];
        };

        let t = self.progress_of(flight, now_ms);
        let mut layers = Vec::with_capacity(2);
        if let Some(exiting) = &flight.exiting {
            layers.push(Layer {
                path: exiting.clone(),
                state: LayerState::Exiting,
                pose: flight.exit_from.lerp(EXIT_TO, t),
            });
        }
        layers.push(Layer {
            path: current.clone(),
            state: LayerState::Entering,
            pose: ENTER_FROM.lerp(Pose::REST, t),
        });
        layers
    }

    fn progress_of(&self, flight: &InFlight, now_ms: f64) -> f64 {
        debug_assert_eq!(flight.generation, self.generation);
        ((now_ms - flight.started_at) / TRANSITION_MS).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn states(layers: &[Layer]) -> Vec<(&str, LayerState)> {
        layers.iter().map(|l| (l.path.as_str(), l.state)).collect()
    }

    #[test]
    fn first_navigation_enters_without_exit() {
        let mut controller = TransitionController::new();
        assert_eq!(controller.navigate("/", 0.0), Navigation::Started { generation: 1 });
        let layers = controller.layers(0.0);
        assert_eq!(states(&layers), vec![("/", LayerState::Entering)]);
        assert_eq!(layers[0].pose, Pose::hidden_below(8.0));
    }

    #[test]
    fn repeated_navigation_to_same_path_is_ignored() {
        let mut controller = TransitionController::new();
        controller.navigate("/categories", 0.0);
        assert_eq!(controller.navigate("/categories", 10.0), Navigation::Ignored);
        assert_eq!(controller.generation(), 1);
        controller.tick(400.0);
        assert_eq!(controller.navigate("/categories", 500.0), Navigation::Ignored);
        assert!(!controller.is_animating());
    }

    #[test]
    fn exit_and_enter_run_together_and_settle() {
        let mut controller = TransitionController::new();
        controller.navigate("/categories", 0.0);
        controller.tick(350.0);
        controller.navigate("/service/car-washing", 1_000.0);

        let mid = controller.layers(1_175.0);
        assert_eq!(
            states(&mid),
            vec![
                ("/categories", LayerState::Exiting),
                ("/service/car-washing", LayerState::Entering),
            ]
        );
        assert!((mid[0].pose.opacity - 0.5).abs() < 1e-9);
        assert!((mid[0].pose.y + 4.0).abs() < 1e-9);
        assert!((mid[1].pose.opacity - 0.5).abs() < 1e-9);
        assert!((mid[1].pose.y - 4.0).abs() < 1e-9);

        assert!(controller.tick(1_300.0));
        assert!(!controller.tick(1_350.0));
        let settled = controller.layers(1_350.0);
        assert_eq!(states(&settled), vec![("/service/car-washing", LayerState::Settled)]);
        assert_eq!(settled[0].pose, Pose::REST);
    }

    #[test]
    fn navigation_mid_window_abandons_the_old_transition() {
        let mut controller = TransitionController::new();
        controller.navigate("/", 0.0);
        controller.tick(400.0);
        controller.navigate("/categories", 1_000.0);
        controller.navigate("/download", 1_100.0);

        let layers = controller.layers(1_100.0);
        assert_eq!(
            states(&layers),
            vec![
                ("/categories", LayerState::Exiting),
                ("/download", LayerState::Entering),
            ]
        );
        assert_eq!(layers[1].pose, Pose::hidden_below(8.0));
        assert_eq!(controller.current_path(), Some("/download"));
        assert!(controller.tick(1_400.0));
        assert!(!controller.tick(1_450.0));
    }

    #[test]
    fn interrupted_view_leaves_from_where_it_was() {
        let mut controller = TransitionController::new();
        controller.navigate("/", 0.0);
        controller.tick(400.0);
        controller.navigate("/categories", 1_000.0);
        let before = controller.layers(1_100.0)[1].pose;
        assert!(before.opacity > 0.0 && before.opacity < 1.0);

        controller.navigate("/download", 1_100.0);
        let after = controller.layers(1_100.0);
        assert_eq!(after[0].path, "/categories");
        assert!((after[0].pose.opacity - before.opacity).abs() < 1e-9);
        assert!((after[0].pose.y - before.y).abs() < 1e-9);

        let halfway = controller.layers(1_275.0)[0].pose;
        assert!((halfway.opacity - before.opacity / 2.0).abs() < 1e-9);
        assert!((halfway.y - (before.y - TRANSITION_OFFSET) / 2.0).abs() < 1e-9);
        let gone = controller.layers(1_450.0)[0].pose;
        assert!(gone.opacity.abs() < 1e-9);
        assert!((gone.y + TRANSITION_OFFSET).abs() < 1e-9);
    }

    #[test]
    fn stale_frames_are_ignored() {
        let mut controller = TransitionController::new();
        controller.navigate("/", 0.0);
        let Navigation::Started { generation: first } = controller.navigate("/book", 100.0) else {
            panic!("expected a transition");
        };
        controller.navigate("/login", 200.0);
        assert!(!controller.tick_generation(first, 10_000.0));
        assert!(controller.is_animating());
        assert!(controller.tick_generation(controller.generation(), 300.0));
    }

    #[test]
    fn nothing_is_drawn_before_the_first_navigation() {
        let controller = TransitionController::new();
        assert!(controller.layers(0.0).is_empty());
        assert_eq!(controller.current_path(), None);
    }
}
