//! UI module that visualizes the race using Bevy
//!
//! This module is purely for visualization - all decision logic is in the `simulation` module.
//! The UI reads snapshots from `SimWorld` and renders them with 2D gizmos and UI text.

mod components;
mod draw;
mod hud;
mod input;
mod sync;
mod world;

use bevy::prelude::*;

pub use components::{PendingStart, SimWorldResource};

use draw::draw_intersections;
use hud::setup_hud;
use input::handle_input;
use sync::{tick_simulation, update_panel_text, update_race_message};
use world::setup_world;

/// Plugin to register all UI systems
pub struct SignalRaceUIPlugin;

impl Plugin for SignalRaceUIPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimWorldResource>()
            .init_resource::<PendingStart>()
            .insert_resource(ClearColor(Color::BLACK))
            .add_systems(Startup, (setup_world, setup_hud))
            .add_systems(FixedUpdate, tick_simulation)
            .add_systems(
                Update,
                (
                    handle_input,
                    update_panel_text,
                    update_race_message,
                    draw_intersections,
                ),
            );
    }
}
