//! UI components and resources for linking Bevy entities to race state

use bevy::prelude::*;

use crate::simulation::SimWorld;

/// Resource wrapper for the race world
#[derive(Resource, Default)]
pub struct SimWorldResource(pub SimWorld);

/// Set by the keyboard handler, consumed by the fixed-rate tick so the race
/// starts on the same time base it is ticked with
#[derive(Resource, Default)]
pub struct PendingStart(pub bool);

/// Marker component for the main camera
#[derive(Component)]
pub struct MainCamera;

/// Width of one side's panel in pixels
pub const PANEL_WIDTH: f32 = 550.0;

/// Which half of the screen a panel belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Fixed,
    Adaptive,
}

impl Side {
    /// Left edge of the panel in world units
    pub fn x_offset(&self) -> f32 {
        match self {
            Side::Fixed => -550.0,
            Side::Adaptive => 0.0,
        }
    }
}

/// Which line of a panel a text entity shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelField {
    Round,
    Queues,
    GreenTimer,
    CarsCleared,
    TotalWait,
    AvgWait,
}

/// Marker for panel text elements
#[derive(Component)]
pub struct PanelText {
    pub side: Side,
    pub field: PanelField,
}

/// Marker for the centred start / completion message
#[derive(Component)]
pub struct RaceMessage;
