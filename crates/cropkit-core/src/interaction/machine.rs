//! Pointer state machine that drives the crop rectangle.

use crate::geometry::Point;
use crate::scale::refresh_zoom_flags;
use crate::state::CropState;

use super::{
    apply_drag, classify_zone, leaves_hit_area, DragLimits, DragZone, Settle, SettleTicket,
    HIT_MARGIN,
};

/// Pointer session state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PointerState {
    /// Pointer is outside the crop rectangle's hit area.
    #[default]
    Idle,
    /// Pointer is over the hit area; the zone drives the cursor.
    Hovering(DragZone),
    /// A drag is in progress. `anchor` is the client position of the last
    /// accepted step.
    Dragging { zone: DragZone, anchor: Point },
}

/// Fit the crop rectangle back inside the effective image bounds and start
/// the settle transition.
///
/// The zoom flags are recomputed too, since the crop size bounds how far the
/// image may shrink.
pub fn reconcile_crop_to_image(state: &mut CropState, settle: &mut Settle) -> SettleTicket {
    let before = state.cut;
    state.clamp_cut_to_image();
    if state.cut != before {
        log::debug!("reconcile: cut {:?} -> {:?}", before, state.cut);
    }
    refresh_zoom_flags(state);
    settle.begin()
}

/// Drives [`PointerState`] from host pointer events.
#[derive(Debug, Clone, PartialEq)]
pub struct CropInteraction {
    pointer: PointerState,
    can_resize: bool,
    /// Client-space position of the container's top-left corner.
    origin: Point,
}

impl CropInteraction {
    pub fn new(can_resize: bool) -> Self {
        Self {
            pointer: PointerState::Idle,
            can_resize,
            origin: Point::default(),
        }
    }

    pub fn set_container_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    /// Zone currently under (or held by) the pointer.
    pub fn zone(&self) -> DragZone {
        match self.pointer {
            PointerState::Idle => DragZone::None,
            PointerState::Hovering(zone) | PointerState::Dragging { zone, .. } => zone,
        }
    }

    /// CSS cursor for the current zone.
    pub fn cursor(&self) -> &'static str {
        self.zone().cursor()
    }

    fn offset(&self, client: Point, state: &CropState) -> Point {
        Point::new(
            client.x - self.origin.x - state.cut.left,
            client.y - self.origin.y - state.cut.top,
        )
    }

    fn set_pointer(&mut self, next: PointerState) {
        if std::mem::discriminant(&self.pointer) != std::mem::discriminant(&next) {
            log::debug!("pointer: {:?} -> {:?}", self.pointer, next);
        }
        self.pointer = next;
    }

    /// Re-classify the pointer without dragging.
    fn hover(&mut self, client: Point, state: &CropState) {
        let offset = self.offset(client, state);
        let size = state.cut.size();
        if leaves_hit_area(offset, size, HIT_MARGIN) {
            self.set_pointer(PointerState::Idle);
        } else {
            self.set_pointer(PointerState::Hovering(classify_zone(offset, size, HIT_MARGIN)));
        }
    }

    /// The pointer entered the crop rectangle.
    pub fn pointer_enter(&mut self, client: Point, state: &CropState) {
        if !matches!(self.pointer, PointerState::Dragging { .. }) {
            self.hover(client, state);
        }
    }

    /// The pointer moved inside the container.
    pub fn pointer_move(&mut self, client: Point, state: &mut CropState) {
        let PointerState::Dragging { zone, anchor } = self.pointer else {
            self.hover(client, state);
            return;
        };

        let delta = Point::new(client.x - anchor.x, client.y - anchor.y);
        let limits = DragLimits {
            container: state.container,
            min_cut: state.min_cut,
        };
        // A rejected step keeps the anchor so the motion is retried next move
        if let Some(next) = apply_drag(zone, state.cut, delta, &limits) {
            state.cut = next;
            self.pointer = PointerState::Dragging {
                zone,
                anchor: client,
            };
        }
    }

    /// Button pressed. Returns whether a drag started.
    pub fn pointer_down(&mut self, client: Point) -> bool {
        match self.pointer {
            PointerState::Hovering(zone) if zone.is_draggable(self.can_resize) => {
                self.set_pointer(PointerState::Dragging {
                    zone,
                    anchor: client,
                });
                true
            }
            _ => false,
        }
    }

    /// Button released. Ends a drag and reconciles.
    pub fn pointer_up(
        &mut self,
        client: Point,
        state: &mut CropState,
        settle: &mut Settle,
    ) -> Option<SettleTicket> {
        if !matches!(self.pointer, PointerState::Dragging { .. }) {
            return None;
        }
        let ticket = reconcile_crop_to_image(state, settle);
        self.hover(client, state);
        Some(ticket)
    }

    /// The pointer left the container: cancel everything and reconcile.
    pub fn pointer_leave(&mut self, state: &mut CropState, settle: &mut Settle) -> SettleTicket {
        self.set_pointer(PointerState::Idle);
        reconcile_crop_to_image(state, settle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::state::tests::scenario_state;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_enter_hover_and_leave_hit_area() {
        let state = scenario_state();
        let mut machine = CropInteraction::new(true);
        assert_eq!(machine.pointer(), PointerState::Idle);

        machine.pointer_enter(p(250.0, 200.0), &state);
        assert_eq!(machine.pointer(), PointerState::Hovering(DragZone::Move));
        assert_eq!(machine.cursor(), "move");

        let mut state = state;
        machine.pointer_move(p(152.0, 101.0), &mut state);
        assert_eq!(machine.pointer(), PointerState::Hovering(DragZone::NorthWest));

        machine.pointer_move(p(100.0, 200.0), &mut state);
        assert_eq!(machine.pointer(), PointerState::Idle);
        assert_eq!(machine.cursor(), "default");
    }

    #[test]
    fn test_drag_east_edge_incrementally() {
        let mut state = scenario_state();
        let mut settle = Settle::new();
        let mut machine = CropInteraction::new(true);

        machine.pointer_move(p(348.0, 200.0), &mut state);
        assert_eq!(machine.zone(), DragZone::East);
        assert!(machine.pointer_down(p(348.0, 200.0)));

        machine.pointer_move(p(358.0, 210.0), &mut state);
        machine.pointer_move(p(368.0, 150.0), &mut state);
        assert_eq!(state.cut, Rect::new(150.0, 100.0, 220.0, 200.0));

        let ticket = machine.pointer_up(p(368.0, 150.0), &mut state, &mut settle);
        assert!(ticket.is_some());
        assert!(settle.is_active());
        assert_eq!(machine.pointer(), PointerState::Hovering(DragZone::East));
    }

    #[test]
    fn test_rejected_step_keeps_anchor() {
        let mut state = scenario_state();
        let mut machine = CropInteraction::new(true);
        machine.pointer_move(p(348.0, 200.0), &mut state);
        machine.pointer_down(p(348.0, 200.0));

        // Would shrink to 10 wide: rejected
        machine.pointer_move(p(158.0, 200.0), &mut state);
        assert_eq!(state.cut.width, 200.0);
        // Measured from the first anchor: 200 - 100 = 100
        machine.pointer_move(p(248.0, 200.0), &mut state);
        assert_eq!(state.cut.width, 100.0);
    }

    #[test]
    fn test_resize_disabled_only_moves() {
        let mut state = scenario_state();
        let mut machine = CropInteraction::new(false);

        machine.pointer_move(p(348.0, 200.0), &mut state);
        assert_eq!(machine.cursor(), "e-resize");
        assert!(!machine.pointer_down(p(348.0, 200.0)));

        machine.pointer_move(p(250.0, 200.0), &mut state);
        assert!(machine.pointer_down(p(250.0, 200.0)));
        machine.pointer_move(p(260.0, 180.0), &mut state);
        assert_eq!(state.cut, Rect::new(160.0, 80.0, 200.0, 200.0));
    }

    #[test]
    fn test_down_outside_does_nothing() {
        let mut machine = CropInteraction::new(true);
        assert!(!machine.pointer_down(p(0.0, 0.0)));
        assert_eq!(machine.pointer(), PointerState::Idle);
    }

    #[test]
    fn test_up_without_drag_does_not_reconcile() {
        let mut state = scenario_state();
        let mut settle = Settle::new();
        let mut machine = CropInteraction::new(true);
        machine.pointer_move(p(250.0, 200.0), &mut state);
        assert!(machine
            .pointer_up(p(250.0, 200.0), &mut state, &mut settle)
            .is_none());
        assert_eq!(settle.generation(), 0);
    }

    #[test]
    fn test_leave_cancels_drag_and_reconciles() {
        let mut state = scenario_state();
        let mut settle = Settle::new();
        let mut machine = CropInteraction::new(true);

        machine.pointer_move(p(250.0, 200.0), &mut state);
        machine.pointer_down(p(250.0, 200.0));
        state.cut.left = -30.0;

        machine.pointer_leave(&mut state, &mut settle);
        assert_eq!(machine.pointer(), PointerState::Idle);
        assert_eq!(state.cut.left, 0.0);
        assert!(settle.is_active());
    }

    #[test]
    fn test_container_origin_offsets_client_coordinates() {
        let mut state = scenario_state();
        let mut machine = CropInteraction::new(true);
        machine.set_container_origin(p(1000.0, 500.0));

        machine.pointer_move(p(1250.0, 600.0), &mut state);
        assert_eq!(machine.zone(), DragZone::North);
    }

    #[test]
    fn test_reconcile_refreshes_zoom_flags() {
        let mut state = scenario_state();
        let mut settle = Settle::new();
        // A crop as large as the image leaves no room to zoom out
        state.cut = Rect::new(0.0, 0.0, 500.0, 400.0);
        reconcile_crop_to_image(&mut state, &mut settle);
        assert!(!state.flags.can_reduce);
        assert!(state.flags.can_magnify);
    }
}
