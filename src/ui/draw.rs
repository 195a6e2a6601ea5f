//! Immediate-mode drawing of roads, lights and queued cars

use bevy::prelude::*;

use super::components::{Side, SimWorldResource, PANEL_WIDTH};
use crate::simulation::{ControllerSnapshot, Direction};

const ROAD_CENTER_Y: f32 = 125.0;
const ROAD_HEIGHT: f32 = 50.0;
const LIGHT_RADIUS: f32 = 15.0;
const CAR_SIZE: f32 = 20.0;
const CAR_SPACING: f32 = 6.0;

const ROAD_COLOR: Color = Color::srgb(0.2, 0.2, 0.2);
const LANE_COLOR: Color = Color::srgb(0.86, 0.86, 0.0);
const GREEN: Color = Color::srgb(0.0, 0.78, 0.0);
const RED: Color = Color::srgb(0.78, 0.0, 0.0);
const CAR_COLOR: Color = Color::srgb(0.0, 0.7, 0.7);

/// System to draw both intersections every frame
pub fn draw_intersections(sim_world: Res<SimWorldResource>, mut gizmos: Gizmos) {
    let world = &sim_world.0;
    if !world.is_started() {
        return;
    }
    let snapshot = world.snapshot(world.time);
    draw_road(&mut gizmos, Side::Fixed, &snapshot.fixed);
    draw_road(&mut gizmos, Side::Adaptive, &snapshot.adaptive);
}

fn draw_road(gizmos: &mut Gizmos, side: Side, controller: &ControllerSnapshot) {
    let left = side.x_offset();
    let center_x = left + PANEL_WIDTH / 2.0;

    gizmos.rect_2d(
        Isometry2d::from_translation(Vec2::new(center_x, ROAD_CENTER_Y)),
        Vec2::new(PANEL_WIDTH, ROAD_HEIGHT),
        ROAD_COLOR,
    );
    gizmos.line_2d(
        Vec2::new(left, ROAD_CENTER_Y),
        Vec2::new(left + PANEL_WIDTH, ROAD_CENTER_Y),
        LANE_COLOR,
    );

    for (direction, count) in &controller.waiting {
        let stop_line = stop_line_x(left, *direction);
        let color = if controller.active_direction == Some(*direction) {
            GREEN
        } else {
            RED
        };
        gizmos.circle_2d(
            Isometry2d::from_translation(Vec2::new(stop_line, ROAD_CENTER_Y - ROAD_HEIGHT)),
            LIGHT_RADIUS,
            color,
        );

        for i in 0..*count {
            gizmos.rect_2d(
                Isometry2d::from_translation(car_position(stop_line, *direction, i)),
                Vec2::splat(CAR_SIZE),
                CAR_COLOR,
            );
        }
    }
}

fn stop_line_x(left: f32, direction: Direction) -> f32 {
    match direction {
        Direction::West => left + 170.0,
        Direction::East => left + 380.0,
    }
}

/// West traffic queues leftwards in the upper lane, east traffic rightwards
/// in the lower lane
fn car_position(stop_line: f32, direction: Direction, index: u32) -> Vec2 {
    let step = (index + 1) as f32 * (CAR_SIZE + CAR_SPACING);
    let lane_offset = ROAD_HEIGHT / 4.0;
    match direction {
        Direction::West => Vec2::new(stop_line - step + CAR_SIZE / 2.0, ROAD_CENTER_Y + lane_offset),
        Direction::East => Vec2::new(stop_line + step + CAR_SIZE / 2.0, ROAD_CENTER_Y - lane_offset),
    }
}
