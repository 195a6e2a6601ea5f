//! Text panels for both controllers and the shared stats bar

use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::prelude::*;

use super::components::{PanelField, PanelText, RaceMessage, Side, PANEL_WIDTH};

/// System to setup the text panels
pub fn setup_hud(mut commands: Commands) {
    for (side, title) in [(Side::Fixed, "FIXED TIMER"), (Side::Adaptive, "ADAPTIVE (FUZZY)")] {
        let left = Val::Px(side.x_offset() + PANEL_WIDTH);

        // Road header: title, round, queues
        commands
            .spawn((Node {
                width: Val::Px(PANEL_WIDTH),
                position_type: PositionType::Absolute,
                top: Val::Px(30.0),
                left,
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                row_gap: Val::Px(6.0),
                ..default()
            },))
            .with_children(|parent| {
                parent.spawn((
                    Text::new(title),
                    TextFont {
                        font_size: 22.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                ));
                spawn_panel_text(parent, side, PanelField::Round, Color::srgb(0.86, 0.86, 0.0));
                spawn_panel_text(parent, side, PanelField::Queues, Color::WHITE);
            });

        // Green timer below the road
        commands
            .spawn((Node {
                width: Val::Px(PANEL_WIDTH),
                position_type: PositionType::Absolute,
                top: Val::Px(450.0),
                left,
                justify_content: JustifyContent::Center,
                ..default()
            },))
            .with_children(|parent| {
                spawn_panel_text(parent, side, PanelField::GreenTimer, Color::WHITE);
            });

        // Stats at the bottom
        commands
            .spawn((
                Node {
                    width: Val::Px(PANEL_WIDTH),
                    position_type: PositionType::Absolute,
                    top: Val::Px(560.0),
                    left,
                    padding: UiRect::all(Val::Px(10.0)),
                    flex_direction: FlexDirection::Column,
                    row_gap: Val::Px(8.0),
                    ..default()
                },
                BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
            ))
            .with_children(|parent| {
                parent.spawn((
                    Text::new(match side {
                        Side::Fixed => "Fixed Stats",
                        Side::Adaptive => "Adaptive Stats",
                    }),
                    TextFont {
                        font_size: 22.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                ));
                for field in [PanelField::CarsCleared, PanelField::TotalWait, PanelField::AvgWait] {
                    spawn_panel_text(parent, side, field, Color::srgb(0.9, 0.9, 0.9));
                }
            });
    }

    // Centred race message
    commands
        .spawn((Node {
            width: Val::Percent(100.0),
            position_type: PositionType::Absolute,
            top: Val::Px(350.0),
            justify_content: JustifyContent::Center,
            ..default()
        },))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Press SPACE to start the race"),
                TextFont {
                    font_size: 40.0,
                    ..default()
                },
                TextColor(Color::srgb(0.86, 0.86, 0.0)),
                RaceMessage,
            ));
        });
}

fn spawn_panel_text(parent: &mut ChildSpawnerCommands, side: Side, field: PanelField, color: Color) {
    parent.spawn((
        Text::new(""),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(color),
        PanelText { side, field },
    ));
}
