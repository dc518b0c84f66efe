// layout.rs - Canvas geometry and mapping clicks to buttons or cells
//
// All positions are relative to the top-left corner of the canvas.

use egui::{Pos2, Rect, Vec2, pos2, vec2};

use crate::config::LifeConfig;

pub const BUTTON_SIZE: Vec2 = vec2(200.0, 50.0);
const BUTTON_MARGIN: f32 = 10.0; // gap under the bottom row, and between its buttons
const BUTTON_STEP: f32 = 60.0;   // Pause sits this far above the bottom row

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    TogglePause,
    NextGeneration,
    Save,
    Load,
}

impl ButtonAction {
    pub fn label(self, paused: bool) -> &'static str {
        match self {
            ButtonAction::TogglePause if paused => "Resume",
            ButtonAction::TogglePause => "Pause",
            ButtonAction::NextGeneration => "Next Generation",
            ButtonAction::Save => "Save",
            ButtonAction::Load => "Load",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Button {
    pub action: ButtonAction,
    pub rect: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Button(ButtonAction),
    /// May still be outside the grid on the far canvas edge; toggling checks bounds
    Cell { x: usize, y: usize },
    Outside,
}

#[derive(Debug, Clone)]
pub struct Layout {
    pub canvas: Vec2,
    pub cell_size: Vec2,
    pub cells_x: usize,
    pub cells_y: usize,
    /// In hit-test priority order
    pub buttons: [Button; 4],
}

impl Layout {
    pub fn new(config: &LifeConfig) -> Self {
        let canvas = vec2(config.window_width, config.window_height);
        let x = ((canvas.x - BUTTON_SIZE.x) / 2.0).floor();
        let bottom = canvas.y - BUTTON_SIZE.y - BUTTON_MARGIN;
        let side = BUTTON_SIZE.x + BUTTON_MARGIN;
        let at = |action, x: f32, y: f32| Button {
            action,
            rect: Rect::from_min_size(pos2(x, y), BUTTON_SIZE),
        };

        Self {
            canvas,
            cell_size: vec2(config.cell_width(), config.cell_height()),
            cells_x: config.width_cells,
            cells_y: config.height_cells,
            buttons: [
                at(ButtonAction::TogglePause, x, bottom - BUTTON_STEP),
                at(ButtonAction::NextGeneration, x, bottom),
                at(ButtonAction::Save, x - side, bottom),
                at(ButtonAction::Load, x + side, bottom),
            ],
        }
    }

    pub fn canvas_rect(&self) -> Rect {
        Rect::from_min_size(Pos2::ZERO, self.canvas)
    }

    pub fn cell_rect(&self, x: usize, y: usize) -> Rect {
        Rect::from_min_size(
            pos2(x as f32 * self.cell_size.x, y as f32 * self.cell_size.y),
            self.cell_size,
        )
    }

    /// Buttons win over cells; edges are inclusive.
    pub fn hit_test(&self, pos: Pos2) -> ClickTarget {
        if let Some(button) = self.buttons.iter().find(|b| b.rect.contains(pos)) {
            return ClickTarget::Button(button.action);
        }
        if !self.canvas_rect().contains(pos) {
            return ClickTarget::Outside;
        }
        ClickTarget::Cell {
            x: (pos.x / self.cell_size.x) as usize,
            y: (pos.y / self.cell_size.y) as usize,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Layout {
        Layout::new(&LifeConfig::default())
    }

    fn button(layout: &Layout, action: ButtonAction) -> Rect {
        layout
            .buttons
            .iter()
            .find(|b| b.action == action)
            .map(|b| b.rect)
            .unwrap()
    }

    #[test]
    fn buttons_form_a_bottom_row_under_pause() {
        let layout = layout();
        let expect = [
            (ButtonAction::Save, pos2(90.0, 540.0)),
            (ButtonAction::NextGeneration, pos2(300.0, 540.0)),
            (ButtonAction::Load, pos2(510.0, 540.0)),
            (ButtonAction::TogglePause, pos2(300.0, 480.0)),
        ];
        for (action, min) in expect {
            let rect = button(&layout, action);
            assert_eq!(rect.min, min, "{action:?}");
            assert_eq!(rect.size(), BUTTON_SIZE);
        }
    }

    #[test]
    fn button_centers_hit_their_action() {
        let layout = layout();
        for b in layout.buttons {
            assert_eq!(layout.hit_test(b.rect.center()), ClickTarget::Button(b.action));
        }
    }

    #[test]
    fn button_edges_are_inclusive() {
        let layout = layout();
        let rect = button(&layout, ButtonAction::Save);
        assert_eq!(layout.hit_test(rect.min), ClickTarget::Button(ButtonAction::Save));
        assert_eq!(layout.hit_test(rect.max), ClickTarget::Button(ButtonAction::Save));
        // The gap between Save and Next Generation belongs to the board
        assert_eq!(layout.hit_test(pos2(295.0, 560.0)), ClickTarget::Cell { x: 14, y: 28 });
        // Just left of the button is a cell
        assert_eq!(
            layout.hit_test(pos2(rect.min.x - 0.5, rect.min.y)),
            ClickTarget::Cell { x: 4, y: 27 }
        );
    }

    #[test]
    fn clicks_map_to_cells() {
        let layout = layout();
        assert_eq!(layout.hit_test(pos2(0.0, 0.0)), ClickTarget::Cell { x: 0, y: 0 });
        assert_eq!(layout.hit_test(pos2(45.0, 19.9)), ClickTarget::Cell { x: 2, y: 0 });
        assert_eq!(layout.hit_test(pos2(799.0, 599.0)), ClickTarget::Cell { x: 39, y: 29 });
        // Far edge lands one past the grid
        assert_eq!(layout.hit_test(pos2(800.0, 10.0)), ClickTarget::Cell { x: 40, y: 0 });
        assert_eq!(layout.hit_test(pos2(-1.0, 10.0)), ClickTarget::Outside);
        assert_eq!(layout.hit_test(pos2(10.0, 601.0)), ClickTarget::Outside);
    }

    #[test]
    fn pause_label_follows_state() {
        assert_eq!(ButtonAction::TogglePause.label(false), "Pause");
        assert_eq!(ButtonAction::TogglePause.label(true), "Resume");
        assert_eq!(ButtonAction::Load.label(true), "Load");
    }

    #[test]
    fn cell_rects_tile_the_canvas() {
        let layout = layout();
        assert_eq!(layout.cell_rect(0, 0), Rect::from_min_size(Pos2::ZERO, vec2(20.0, 20.0)));
        assert_eq!(layout.cell_rect(39, 29).max, pos2(800.0, 600.0));
    }
}
