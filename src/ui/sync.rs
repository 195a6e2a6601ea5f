//! Systems for syncing Bevy entities with race state

use bevy::prelude::*;

use super::components::{PanelField, PanelText, PendingStart, RaceMessage, Side, SimWorldResource};
use crate::simulation::{ControllerSnapshot, SimulationPhase};

/// System to run one race tick at the fixed frame rate
pub fn tick_simulation(
    time: Res<Time>,
    mut sim_world: ResMut<SimWorldResource>,
    mut pending: ResMut<PendingStart>,
) {
    let now = time.elapsed_secs_f64();
    if pending.0 {
        pending.0 = false;
        sim_world.0.start(now);
    }
    sim_world.0.tick(now, time.delta_secs_f64());
}

/// System to refresh every panel line from the latest snapshot
pub fn update_panel_text(
    sim_world: Res<SimWorldResource>,
    mut text_query: Query<(&PanelText, &mut Text)>,
) {
    let world = &sim_world.0;
    let snapshot = world.snapshot(world.time);
    let started = snapshot.phase != SimulationPhase::Idle;

    for (panel, mut text) in text_query.iter_mut() {
        let controller = match panel.side {
            Side::Fixed => &snapshot.fixed,
            Side::Adaptive => &snapshot.adaptive,
        };
        **text = if started {
            panel_line(controller, panel.field)
        } else {
            String::new()
        };
    }
}

fn panel_line(controller: &ControllerSnapshot, field: PanelField) -> String {
    match field {
        PanelField::Round => format!("Round: {}", controller.round),
        PanelField::Queues => controller
            .waiting
            .iter()
            .map(|(direction, count)| format!("{}: {}", direction, count))
            .collect::<Vec<_>>()
            .join("    "),
        PanelField::GreenTimer => {
            let green = controller
                .active_direction
                .map(|d| d.to_string())
                .unwrap_or_else(|| "None".to_string());
            format!(
                "Green: {} ({}s left)",
                green,
                controller.time_remaining.floor() as u32
            )
        }
        PanelField::CarsCleared => format!("{:<18} {}", "Cars Cleared:", controller.stats.cars_cleared),
        PanelField::TotalWait => format!(
            "{:<18} {:.0}",
            "Total Wait (s):", controller.stats.total_wait_time
        ),
        PanelField::AvgWait => format!(
            "{:<18} {:.2}",
            "Avg Wait (s):", controller.stats.average_wait
        ),
    }
}

/// System to show the start prompt or the completion banner
pub fn update_race_message(
    sim_world: Res<SimWorldResource>,
    mut message_query: Query<&mut Text, With<RaceMessage>>,
) {
    let message = match sim_world.0.phase() {
        SimulationPhase::Idle => "Press SPACE to start the race",
        SimulationPhase::Running => "",
        SimulationPhase::Finished => "Simulation Complete!",
    };
    for mut text in message_query.iter_mut() {
        if text.as_str() != message {
            **text = message.to_string();
        }
    }
}
